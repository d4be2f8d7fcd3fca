use super::PatternMatcher;

/// Automaton position: how much of the pattern prefix has been seen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    /// Nothing, or a non-matching prefix
    Start,
    /// One `1` seen
    OneBit,
    /// Two `1`s seen; a `0` now completes the pattern
    TwoBits,
}

/// Bit-by-bit matcher driven by an explicit 3-state automaton
///
/// Scans each byte most-significant bit first. A `1` advances the automaton
/// toward the `11` prefix; once two `1`s are buffered, further `1`s keep the
/// automaton in place (the last two of a run of `1`s still form a valid
/// prefix) and a `0` completes a `110` match. Position carries across byte
/// boundaries, so straddling windows are found naturally.
#[derive(Debug, Clone)]
pub struct BitStateMachine {
    pos: Position,
}

impl BitStateMachine {
    /// Create a matcher with the automaton at the start position
    pub fn new() -> Self {
        Self {
            pos: Position::Start,
        }
    }
}

impl Default for BitStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternMatcher for BitStateMachine {
    fn name(&self) -> &'static str {
        "BitStateMachine"
    }

    fn process_byte(&mut self, byte: u8) -> u32 {
        let mut counter = 0;
        for i in (0..8).rev() {
            let bit = byte & (1 << i) != 0;
            self.pos = match (self.pos, bit) {
                (Position::Start, true) => Position::OneBit,
                (Position::OneBit, true) => Position::TwoBits,
                // a run of 1's keeps the last two as a live prefix
                (Position::TwoBits, true) => Position::TwoBits,
                (Position::TwoBits, false) => {
                    counter += 1;
                    Position::Start
                }
                (_, false) => Position::Start,
            };
        }
        counter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_at_byte_start() {
        let mut m = BitStateMachine::new();
        assert_eq!(m.process_byte(0b1100_0000), 1);
    }

    #[test]
    fn test_zero_byte_has_no_match() {
        let mut m = BitStateMachine::new();
        assert_eq!(m.process_byte(0), 0);
    }

    #[test]
    fn test_run_of_ones_matches_once_on_zero() {
        // 1111 1101: the long run of 1's yields a single match when the 0 arrives
        let mut m = BitStateMachine::new();
        assert_eq!(m.process_byte(0b1111_1101), 1);
    }

    #[test]
    fn test_two_matches_in_one_byte() {
        let mut m = BitStateMachine::new();
        assert_eq!(m.process_byte(0b1101_1000), 2);
    }

    #[test]
    fn test_position_carries_across_bytes() {
        let mut m = BitStateMachine::new();
        // first byte ends in `11`, second begins with `0`
        assert_eq!(m.process_byte(0b0000_0011), 0);
        assert_eq!(m.process_byte(0b0000_0000), 1);
    }

    #[test]
    fn test_straddle_split_after_one_bit() {
        let mut m = BitStateMachine::new();
        assert_eq!(m.process_byte(0b0000_0001), 0);
        assert_eq!(m.process_byte(0b1000_0000), 1);
    }
}
