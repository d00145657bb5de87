//! Lfsr: 8-bit linear feedback shift register used as a byte keystream.
//!
//! Unlike a textbook LFSR, which emits one bit per clock, this register
//! emits a whole byte per clock: bits `state[0..=6]`, most significant
//! first, followed by the freshly computed feedback bit. The cipher uses
//! that byte's magnitude as an alphabet shift.
//!
//! Register bit `i` is stored in bit `i` of a `u8`. The feedback taps are
//! bits 7, 5, 4 and 3 of the pre-clock state. Clocking moves every bit one
//! position up (`state[j] = state[j - 1]`) and inserts the feedback bit at
//! position 0.

use log::debug;

use super::schedule::Keystream;

/// Feedback tap positions in the pre-clock state.
const TAPS: [u32; 4] = [7, 5, 4, 3];

/// 8-bit shift register emitting one packed byte per clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lfsr {
    state: u8,
}

impl Lfsr {
    /// Creates a register whose bit `i` equals bit `i` of `seed`.
    pub fn new(seed: u8) -> Self {
        Lfsr { state: seed }
    }

    /// Current register contents, bit `i` = `state[i]`.
    pub fn state(&self) -> u8 {
        self.state
    }

    fn feedback(&self) -> u8 {
        TAPS.iter()
            .fold(0, |acc, &tap| acc ^ (self.state >> tap))
            & 1
    }

    /// Emits the next keystream byte and clocks the register.
    pub fn next_byte(&mut self) -> u8 {
        let feedback = self.feedback();
        // reverse_bits puts state[0] at the MSB; the low bit is replaced by feedback
        let output = (self.state.reverse_bits() & 0xFE) | feedback;
        self.state = (self.state << 1) | feedback;
        output
    }

    /// Emits `length` consecutive keystream bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyrcipher::keystream::Lfsr;
    ///
    /// let bytes = Lfsr::new(0xAB).generate(4);
    /// assert_eq!(bytes, vec![0xD5, 0xEB, 0xF5, 0xFA]);
    /// assert_eq!(Lfsr::new(0x00).generate(3), vec![0, 0, 0]);
    /// ```
    pub fn generate(&mut self, length: usize) -> Vec<u8> {
        (0..length).map(|_| self.next_byte()).collect()
    }
}

impl Iterator for Lfsr {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        Some(self.next_byte())
    }
}

/// A fixed run of LFSR output consumed one byte per text position.
///
/// Positions past the end of the run wrap around to its start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LfsrKeystream {
    bytes: Vec<u8>,
}

impl LfsrKeystream {
    /// Runs a fresh register seeded with `seed` for `length` clocks.
    ///
    /// A zero `length` still produces one byte so that the stream is
    /// never empty.
    pub fn new(seed: u8, length: usize) -> Self {
        let mut lfsr = Lfsr::new(seed);
        let bytes = lfsr.generate(length.max(1));
        debug!(
            "LFSR seed {:#04x} produced {} keystream bytes, final state {:#04x}",
            seed,
            bytes.len(),
            lfsr.state()
        );
        LfsrKeystream { bytes }
    }
}

impl Keystream for LfsrKeystream {
    fn shift_at(&self, position: usize) -> u32 {
        self.bytes[position % self.bytes.len()] as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_seed_vector() {
        let expected: [u8; 16] = [
            0xD5, 0xEB, 0xF5, 0xFA, 0x7C, 0x3F, 0x9E, 0x4F, 0xA6, 0x52, 0x28, 0x14, 0x0B, 0x84,
            0x42, 0x21,
        ];
        assert_eq!(Lfsr::new(0xAB).generate(16), expected);
    }

    #[test]
    fn test_seed_one_vector() {
        let expected: [u8; 10] = [0x80, 0x40, 0x20, 0x11, 0x89, 0xC5, 0xE2, 0x70, 0x38, 0x1D];
        assert_eq!(Lfsr::new(0x01).generate(10), expected);
    }

    #[test]
    fn test_zero_seed_stays_zero() {
        let mut lfsr = Lfsr::new(0);
        assert!(lfsr.generate(1000).iter().all(|&b| b == 0));
        assert_eq!(lfsr.state(), 0);
    }

    #[test]
    fn test_clock_shifts_feedback_into_bit_zero() {
        // 0b1000_0000: only tap 7 set, feedback is 1
        let mut lfsr = Lfsr::new(0x80);
        let out = lfsr.next_byte();
        assert_eq!(out, 0b0000_0001);
        assert_eq!(lfsr.state(), 0x01);
    }

    #[test]
    fn test_generate_is_prefix_stable() {
        let short = Lfsr::new(0x5A).generate(10);
        let long = Lfsr::new(0x5A).generate(50);
        assert_eq!(short[..], long[..10]);
    }

    #[test]
    fn test_iterator_matches_generate() {
        let from_iter: Vec<u8> = Lfsr::new(0x3C).take(20).collect();
        assert_eq!(from_iter, Lfsr::new(0x3C).generate(20));
    }

    #[test]
    fn test_keystream_wraps_and_never_empty() {
        let stream = LfsrKeystream::new(0xAB, 2);
        assert_eq!(stream.shift_at(0), 0xD5);
        assert_eq!(stream.shift_at(3), 0xEB);
        let empty = LfsrKeystream::new(0xAB, 0);
        assert_eq!(empty.shift_at(0), 0xD5);
        assert_eq!(empty.shift_at(7), 0xD5);
    }
}
