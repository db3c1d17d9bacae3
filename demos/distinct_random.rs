//! A bounded number of distinct values drawn from an infinite random
//! generator.
//!
//! Run with: cargo run --example distinct_random

use seqkit::{random_integers, SequenceExt};

fn main() {
    let draws: Vec<i32> = random_integers()
        .map(|n| n.rem_euclid(1_000))
        .distinct_by(|n| *n)
        .take(10)
        .collect();

    println!("10 distinct draws from 0..1000: {:?}", draws);
}
