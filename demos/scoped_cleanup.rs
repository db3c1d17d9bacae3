//! Per-element resource scoping: each lease is released before the next
//! element is produced, even when the consumer bails out early.
//!
//! Run with: cargo run --example scoped_cleanup

use seqkit::scoped;

struct Lease {
    name: &'static str,
}

impl Lease {
    fn new(name: &'static str) -> Self {
        println!("  acquire {name}");
        Lease { name }
    }
}

impl Drop for Lease {
    fn drop(&mut self) {
        println!("  release {}", self.name);
    }
}

fn main() {
    println!("full pass:");
    for server in scoped(["alpha", "beta"], |&name| Lease::new(name)) {
        println!("  ping {server}");
    }

    println!("early exit:");
    for server in scoped(["alpha", "beta", "gamma"], |&name| Lease::new(name)) {
        println!("  ping {server}");
        break;
    }
}
