//! # seqkit
//!
//! Sequence-processing utilities for one recurring shape of work: walk a
//! lazily produced sequence, apply a side-effecting action, and get the
//! ordering, concurrency and resource-lifetime bookkeeping right.
//!
//! ## What's Here
//!
//! 1. **Iteration drivers** ([`drive`])
//!    - [`do_each`]: strictly ordered, synchronous
//!    - [`do_async`]: strictly ordered, at most one action in flight
//!    - [`parallel_do_async`]: fan-out, wait-for-all, aggregate every failure
//!
//! 2. **Adapters** (`distinct`, `scoped`, chainable via [`SequenceExt`])
//!    - [`distinct_by`]: first element per derived key, input order kept
//!    - [`scoped()`]: per-element guard released before the next element
//!    - [`scoped_single`] / [`scoped_value`]: single-element scoping
//!
//! 3. **Generators** (`generate`)
//!    - [`generate()`] / [`generate_n`]: infinite lazy sequence from a producer
//!    - [`random_integers`] / [`random_floats`]: independently seeded streams
//!
//! 4. **Leaf utilities**, independent of the core
//!    - [`base36`]: compact integer and UUID rendering
//!    - [`datekey`]: warehouse-style date/time surrogate keys
//!    - [`text`]: character filtering and Soundex
//!
//! ## Quick Start
//!
//! ```
//! use seqkit::SequenceExt;
//!
//! // First element per key, in input order.
//! let firsts: Vec<i32> = vec![1, 2, 4, 8].into_iter().distinct_by(|n| n % 2).collect();
//! assert_eq!(firsts, vec![1, 2]);
//!
//! // A bounded draw of distinct values from an unbounded generator.
//! let mut n = 0u32;
//! let draws: Vec<u32> = seqkit::generate(move || {
//!     n = (n + 7) % 10;
//!     n
//! })
//! .distinct_by(|v| *v)
//! .take(10)
//! .collect();
//! assert_eq!(draws.len(), 10);
//! ```

pub mod base36;
pub mod datekey;
pub mod distinct;
pub mod drive;
pub mod error;
pub mod ext;
pub mod generate;
pub mod scoped;
pub mod text;

pub use distinct::{distinct_by, DistinctBy};
pub use drive::{do_async, do_each, parallel_do_async};
pub use error::{AggregateError, DriveError};
pub use ext::SequenceExt;
pub use generate::{
    generate, generate_n, random_floats, random_floats_n, random_integers, random_integers_n,
    Generate,
};
pub use scoped::{scoped, scoped_single, scoped_value, Scoped, ScopedSingle};
