use super::sliding_window::count_windows;
use super::PatternMatcher;

/// Table size: 2 trailing bits of the previous byte + 8 bits of the current
const TABLE_SIZE: usize = 1 << 10;

/// Mask keeping the 10 bits that can influence windows touching the current byte
const KEY_MASK: u16 = 0x3FF;

/// Matcher that replaces the 8 window tests with one table lookup
///
/// Construction precomputes, for every 10-bit key, the window count the
/// sliding-window algorithm would report for (synthetic previous byte = key
/// bits 9-8, current byte = key bits 7-0). Only the 2 trailing bits of the
/// previous byte can reach into a window that also touches the current byte,
/// so 1024 entries cover every reachable combination. The previous byte
/// starts at 0, same convention as [`SlidingWindow`].
///
/// [`SlidingWindow`]: super::SlidingWindow
#[derive(Debug, Clone)]
pub struct LookupTable {
    prev: u8,
    counts: [u8; TABLE_SIZE],
}

impl LookupTable {
    /// Build the table and return a matcher with an all-zero previous byte
    pub fn new() -> Self {
        let mut counts = [0u8; TABLE_SIZE];
        for (key, entry) in counts.iter_mut().enumerate() {
            let prev = (key >> 8) as u8;
            let byte = (key & 0xFF) as u8;
            // ground truth is the sliding-window algorithm, not a re-derivation;
            // a 16-bit value holds at most 5 non-overlapping matches so u8 fits
            *entry = count_windows(prev, byte) as u8;
        }
        Self { prev: 0, counts }
    }

    /// Precomputed count for a raw 10-bit key, exposed for verification
    pub fn entry(&self, key: u16) -> u32 {
        u32::from(self.counts[usize::from(key & KEY_MASK)])
    }
}

impl Default for LookupTable {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternMatcher for LookupTable {
    fn name(&self) -> &'static str {
        "LookupTable"
    }

    fn process_byte(&mut self, byte: u8) -> u32 {
        let key = ((u16::from(self.prev) << 8) | u16::from(byte)) & KEY_MASK;
        self.prev = byte;
        u32::from(self.counts[usize::from(key)])
    }
}

#[cfg(test)]
mod tests {
    use super::super::SlidingWindow;
    use super::*;

    #[test]
    fn test_every_entry_matches_sliding_window() {
        let table = LookupTable::new();
        for key in 0..TABLE_SIZE as u16 {
            // feed a fresh sliding matcher the synthetic previous byte, then
            // the current byte; its second count is the table's ground truth
            let mut oracle = SlidingWindow::new();
            let first = oracle.process_byte((key >> 8) as u8);
            assert_eq!(first, 0, "key {:#05x}: 2-bit prev cannot match alone", key);
            let expected = oracle.process_byte((key & 0xFF) as u8);
            assert_eq!(table.entry(key), expected, "key {:#05x}", key);
        }
    }

    #[test]
    fn test_match_at_byte_start() {
        let mut m = LookupTable::new();
        assert_eq!(m.process_byte(0b1100_0000), 1);
    }

    #[test]
    fn test_zero_byte_has_no_match() {
        let mut m = LookupTable::new();
        assert_eq!(m.process_byte(0), 0);
    }

    #[test]
    fn test_mask_drops_high_prev_bits() {
        // prev 1100 0001: the leading 11 lies outside any window touching
        // the next byte and must not leak into the key
        let mut m = LookupTable::new();
        m.process_byte(0b1100_0001);
        assert_eq!(m.process_byte(0b1000_0000), 1);
    }

    #[test]
    fn test_straddle_split_after_one_bit() {
        let mut m = LookupTable::new();
        assert_eq!(m.process_byte(0b0000_0001), 0);
        assert_eq!(m.process_byte(0b1000_0000), 1);
    }
}
