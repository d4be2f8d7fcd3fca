mod lookup_table;
mod sliding_window;
mod state_machine;

pub use lookup_table::LookupTable;
pub use sliding_window::{count_windows, SlidingWindow};
pub use state_machine::BitStateMachine;

/// The fixed 3-bit pattern being counted: `110`
pub const PATTERN: u16 = 0b110;

/// Trait for streaming bit-pattern matchers
///
/// A matcher consumes one byte at a time and reports how many times the
/// pattern `110` completed within the 3-bit windows whose last bit falls in
/// that byte. Internal state carries across calls so windows straddling a
/// byte boundary are counted exactly once. Running totals live in the
/// harness, not here.
pub trait PatternMatcher {
    /// Short name used in benchmark output
    fn name(&self) -> &'static str;

    /// Scan one byte, returning the match count contributed by it
    fn process_byte(&mut self, byte: u8) -> u32;
}

/// Enum wrapper for the three matcher strategies
///
/// The variant set is closed: the benchmark compares exactly these three
/// implementations of the same contract.
#[derive(Debug, Clone)]
pub enum Matcher {
    StateMachine(BitStateMachine),
    SlidingWindow(SlidingWindow),
    LookupTable(LookupTable),
}

impl Matcher {
    /// One fresh instance of every strategy, in report order
    pub fn all() -> Vec<Matcher> {
        vec![
            Matcher::StateMachine(BitStateMachine::new()),
            Matcher::SlidingWindow(SlidingWindow::new()),
            Matcher::LookupTable(LookupTable::new()),
        ]
    }
}

impl PatternMatcher for Matcher {
    fn name(&self) -> &'static str {
        match self {
            Matcher::StateMachine(m) => m.name(),
            Matcher::SlidingWindow(m) => m.name(),
            Matcher::LookupTable(m) => m.name(),
        }
    }

    fn process_byte(&mut self, byte: u8) -> u32 {
        match self {
            Matcher::StateMachine(m) => m.process_byte(byte),
            Matcher::SlidingWindow(m) => m.process_byte(byte),
            Matcher::LookupTable(m) => m.process_byte(byte),
        }
    }
}
