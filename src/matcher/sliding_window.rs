use super::{PatternMatcher, PATTERN};

/// Count pattern windows ending within `byte`, given the byte before it
///
/// Forms a 16-bit value with `prev` in the high byte and checks the 8
/// overlapping 3-bit windows at shifts 7 down to 0. These are exactly the
/// windows whose last bit falls inside `byte`; windows fully inside `prev`
/// belong to the previous call and are not rechecked. Pure and stateless,
/// which also makes it the ground truth for [`LookupTable`] construction.
///
/// [`LookupTable`]: super::LookupTable
pub fn count_windows(prev: u8, byte: u8) -> u32 {
    let combined = (u16::from(prev) << 8) | u16::from(byte);
    // window layout over [.. 9 8][7 6 5 4 3 2 1 0]:
    // shift 7 reads bits 9 8 7, shift 0 reads bits 2 1 0
    let mut counter = 0;
    for shift in (0..8).rev() {
        if (combined >> shift) & 0b111 == PATTERN {
            counter += 1;
        }
    }
    counter
}

/// Matcher that tests all 8 windows of (previous byte, current byte) directly
///
/// The previous byte starts at 0, treating the stream as preceded by zero
/// bits; the very first window can therefore only match on the current
/// byte's own leading bits.
#[derive(Debug, Clone)]
pub struct SlidingWindow {
    prev: u8,
}

impl SlidingWindow {
    /// Create a matcher with an all-zero previous byte
    pub fn new() -> Self {
        Self { prev: 0 }
    }
}

impl Default for SlidingWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternMatcher for SlidingWindow {
    fn name(&self) -> &'static str {
        "SlidingWindow"
    }

    fn process_byte(&mut self, byte: u8) -> u32 {
        let counter = count_windows(self.prev, byte);
        self.prev = byte;
        counter
    }
}
