//! Benchmark harness.
//!
//! Feeds identical random batches to every matcher strategy and times the
//! feeding loops comparably.

use std::fmt;
use std::time::{Duration, Instant};

use log::{debug, info};

use crate::error::{BenchError, Result};
use crate::matcher::{Matcher, PatternMatcher};
use crate::source::SampleSource;

/// Default total stream length in bytes
pub const DEFAULT_TOTAL_BYTES: usize = 10_000_000;

/// Default bytes per timed inner loop
pub const DEFAULT_BATCH_SIZE: usize = 1_000;

/// Benchmark run options.
#[derive(Debug, Clone)]
pub struct BenchOptions {
    /// Total stream length processed, in bytes
    pub total_bytes: usize,
    /// Bytes per batch; each batch is timed as one unit per matcher
    pub batch_size: usize,
}

impl Default for BenchOptions {
    fn default() -> Self {
        Self {
            total_bytes: DEFAULT_TOTAL_BYTES,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl BenchOptions {
    /// Create options with the defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the total stream length.
    pub fn with_total_bytes(mut self, total_bytes: usize) -> Self {
        self.total_bytes = total_bytes;
        self
    }

    /// Set the batch size.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(BenchError::InvalidOptions(
                "batch_size must be nonzero".into(),
            ));
        }
        if self.batch_size > self.total_bytes {
            return Err(BenchError::InvalidOptions(format!(
                "batch_size {} exceeds total_bytes {}",
                self.batch_size, self.total_bytes
            )));
        }
        Ok(())
    }
}

/// Accumulated results for one matcher strategy.
#[derive(Debug, Clone)]
pub struct MatcherReport {
    /// Strategy name
    pub name: &'static str,
    /// Total pattern matches over the whole stream
    pub total_matches: u64,
    /// Wall-clock time spent inside the feeding loops only
    pub elapsed: Duration,
}

impl MatcherReport {
    /// Elapsed time in milliseconds, microsecond resolution
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_micros() as f64 / 1000.0
    }
}

impl fmt::Display for MatcherReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Method {} total count: {}, time: {} ms",
            self.name,
            self.total_matches,
            self.elapsed_ms()
        )
    }
}

/// Run the benchmark: every matcher sees every batch, in stream order.
///
/// Each batch is filled once from `source` and then replayed byte-by-byte
/// through each matcher while only the feeding loop is timed; fill time and
/// allocation stay outside the measurement. Trailing bytes short of a full
/// batch are not processed. Because all three matchers implement the same
/// contract, their totals must agree at the end; a disagreement aborts the
/// run with [`BenchError::CountMismatch`].
pub fn run(options: &BenchOptions, source: &mut dyn SampleSource) -> Result<Vec<MatcherReport>> {
    options.validate()?;

    let batches = options.total_bytes / options.batch_size;
    info!(
        "benchmark start: {} bytes in {} batches of {}",
        options.total_bytes, batches, options.batch_size
    );

    let mut matchers = Matcher::all();
    let mut totals = vec![0u64; matchers.len()];
    let mut elapsed = vec![Duration::ZERO; matchers.len()];
    let mut samples = vec![0u8; options.batch_size];

    for batch in 0..batches {
        source.fill(&mut samples)?;

        for (idx, matcher) in matchers.iter_mut().enumerate() {
            let begin = Instant::now();
            let mut counter = 0u64;
            for &byte in &samples {
                counter += u64::from(matcher.process_byte(byte));
            }
            elapsed[idx] += begin.elapsed();
            totals[idx] += counter;
        }

        if (batch + 1) % 1000 == 0 {
            debug!("processed {}/{} batches", batch + 1, batches);
        }
    }

    let reports: Vec<MatcherReport> = matchers
        .iter()
        .zip(totals.iter().zip(elapsed.iter()))
        .map(|(matcher, (&total_matches, &elapsed))| MatcherReport {
            name: matcher.name(),
            total_matches,
            elapsed,
        })
        .collect();

    cross_check(&reports)?;
    info!(
        "benchmark done: {} matches per strategy",
        reports.first().map(|r| r.total_matches).unwrap_or(0)
    );
    Ok(reports)
}

/// The equivalence invariant: all strategies count the same stream identically.
fn cross_check(reports: &[MatcherReport]) -> Result<()> {
    let mut iter = reports.iter();
    if let Some(first) = iter.next() {
        for report in iter {
            if report.total_matches != first.total_matches {
                return Err(BenchError::CountMismatch(format!(
                    "{} counted {}, {} counted {}",
                    first.name, first.total_matches, report.name, report.total_matches
                )));
            }
        }
    }
    Ok(())
}
