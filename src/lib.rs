//! Bitscan Bench - a benchmark of equivalent bit-pattern matching strategies
//!
//! This library counts occurrences of the fixed 3-bit pattern `110` in
//! overlapping windows across a continuous bitstream, using three
//! interchangeable strategies:
//! - `BitStateMachine` - an explicit 3-state automaton, bit by bit
//! - `SlidingWindow` - direct tests of all 8 windows over a 16-bit combine
//! - `LookupTable` - a 1024-entry precomputed table, one lookup per byte
//!
//! The window slides one bit at a time and may straddle byte boundaries, so
//! every strategy carries state between bytes. For any input the three
//! totals are identical; the harness verifies this while timing each
//! strategy on the same random batches.
//!
//! # Example
//!
//! ```rust
//! use bitscan_bench::{run, BenchOptions, ReplaySource};
//!
//! let options = BenchOptions::new().with_total_bytes(4).with_batch_size(2);
//! let mut source = ReplaySource::new(vec![0b1100_0000; 4]);
//!
//! let reports = run(&options, &mut source).unwrap();
//! for report in &reports {
//!     // "Method <name> total count: 4, time: <ms> ms"
//!     println!("{}", report);
//! }
//! ```
//!
//! For real measurements use [`OsEntropy`] and the default options
//! (10,000,000 bytes in batches of 1,000).

pub mod error;
pub mod harness;
pub mod matcher;
pub mod source;

// Re-export commonly used items
pub use error::{BenchError, Result};
pub use harness::{
    run, BenchOptions, MatcherReport, DEFAULT_BATCH_SIZE, DEFAULT_TOTAL_BYTES,
};
pub use matcher::{
    count_windows, BitStateMachine, LookupTable, Matcher, PatternMatcher, SlidingWindow, PATTERN,
};
pub use source::{OsEntropy, ReplaySource, SampleSource};
