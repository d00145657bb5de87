//! Key-driven shift schedules: cyclic keys, fixed shifts and their inverses.

use log::trace;

use crate::alphabet::{self, ALPHABET_LEN};
use crate::error::{CipherError, KeyProblem};

/// A sequence of alphabet shifts, one per text position.
///
/// Implementations must be deterministic: the same position always yields
/// the same shift.
pub trait Keystream {
    /// Returns the shift to apply at `position` of the text.
    fn shift_at(&self, position: usize) -> u32;
}

impl<K: Keystream + ?Sized> Keystream for &K {
    fn shift_at(&self, position: usize) -> u32 {
        (**self).shift_at(position)
    }
}

/// A non-empty list of shifts reused cyclically (`shifts[i % len]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CyclicKey {
    shifts: Vec<u32>,
}

impl CyclicKey {
    /// Creates a cyclic key from numeric shifts.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidKey`] if `shifts` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyrcipher::keystream::{CyclicKey, Keystream};
    ///
    /// let key = CyclicKey::new(vec![3, 1, 4]).unwrap();
    /// assert_eq!(key.shift_at(4), 1);
    /// assert!(CyclicKey::new(Vec::new()).is_err());
    /// ```
    pub fn new(shifts: Vec<u32>) -> Result<Self, CipherError> {
        if shifts.is_empty() {
            return Err(CipherError::InvalidKey(KeyProblem::EmptyShiftKey));
        }
        Ok(CyclicKey { shifts })
    }

    /// Derives shifts from the letters of a Windows-1251 keyword.
    ///
    /// Each letter contributes its alphabet ordinal regardless of case.
    /// Bytes that are not letters (spaces, punctuation) are skipped.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidKey`] if the keyword has no letters.
    pub fn from_keyword(keyword: &[u8]) -> Result<Self, CipherError> {
        let shifts: Vec<u32> = keyword
            .iter()
            .filter_map(|&b| alphabet::to_ordinal(b))
            .map(|letter| letter.ordinal as u32)
            .collect();
        if shifts.is_empty() {
            return Err(CipherError::InvalidKey(KeyProblem::NoKeywordLetters));
        }
        trace!(
            "keyword of {} bytes yields {} shifts",
            keyword.len(),
            shifts.len()
        );
        Ok(CyclicKey { shifts })
    }

    /// The shifts in key order.
    pub fn shifts(&self) -> &[u32] {
        &self.shifts
    }
}

impl Keystream for CyclicKey {
    fn shift_at(&self, position: usize) -> u32 {
        self.shifts[position % self.shifts.len()]
    }
}

/// The same shift at every position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedShift(pub u32);

impl Keystream for FixedShift {
    fn shift_at(&self, _position: usize) -> u32 {
        self.0
    }
}

/// Negates another keystream modulo the alphabet length.
///
/// Rotating by `inner.shift_at(i)` and then by `Inverted(inner).shift_at(i)`
/// restores every letter.
#[derive(Debug, Clone, Copy)]
pub struct Inverted<K>(pub K);

impl<K: Keystream> Keystream for Inverted<K> {
    fn shift_at(&self, position: usize) -> u32 {
        let len = ALPHABET_LEN as u32;
        (len - self.0.shift_at(position) % len) % len
    }
}
