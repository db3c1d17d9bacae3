//! Fan-out iteration: every action starts before any is awaited, and the
//! aggregate failure reports every cause, not just the first.
//!
//! Run with: cargo run --example fan_out

use std::time::Duration;

use seqkit::{parallel_do_async, DriveError};

#[tokio::main]
async fn main() {
    let result = parallel_do_async(
        Some(1..=5),
        Some(|job: u64| async move {
            tokio::time::sleep(Duration::from_millis(10 * job)).await;
            if job % 2 == 0 {
                Err(format!("job {job} failed"))
            } else {
                println!("job {job} done");
                Ok(())
            }
        }),
    )
    .await;

    match result {
        Ok(()) => println!("all jobs succeeded"),
        Err(DriveError::Aggregate(aggregate)) => {
            println!("{aggregate}:");
            for cause in aggregate.causes() {
                println!("  - {cause}");
            }
        }
        Err(other) => println!("unexpected: {other}"),
    }
}
