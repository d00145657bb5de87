//! Cipher engine and the four classical ciphers built on it.
//!
//! All four ciphers share one transform, [`apply`]: each Cyrillic letter at
//! position `i` is rotated forward by the shift a [`Keystream`] yields for
//! `i`, case is kept and every other byte is copied as is. The ciphers only
//! differ in where their shifts come from:
//!
//! ```text
//! Gronsfeld  key1[i % n1], then key2[i % n2]   (two rotation stages)
//! Caesar     fixed shift
//! Vigenère   ordinal of keyword letter i % n
//! LFSR       byte i of the register output for seed
//! ```

use std::fmt;

use log::debug;

use crate::alphabet;
use crate::error::CipherError;
use crate::keystream::{CyclicKey, FixedShift, Inverted, Keystream, LfsrKeystream};

/// Applies rotation `stages` in order to every letter of `text`.
///
/// Position `i` of the output is `text[i]` rotated by
/// `stages[0].shift_at(i)`, then by `stages[1].shift_at(i)`, and so on.
/// The output always has the same length as `text`.
///
/// # Examples
///
/// ```
/// use cyrcipher::alphabet::{decode_cp1251, encode_cp1251};
/// use cyrcipher::cipher::apply;
/// use cyrcipher::keystream::FixedShift;
///
/// let out = apply(&encode_cp1251("АБВ, где?"), &[&FixedShift(1)]);
/// assert_eq!(decode_cp1251(&out), "БВГ, деё?");
/// ```
pub fn apply(text: &[u8], stages: &[&dyn Keystream]) -> Vec<u8> {
    text.iter()
        .enumerate()
        .map(|(i, &byte)| {
            stages
                .iter()
                .fold(byte, |b, stage| alphabet::rotate(b, stage.shift_at(i)))
        })
        .collect()
}

/// Cipher families supported by [`Cipher`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CipherKind {
    Gronsfeld,
    Caesar,
    Vigenere,
    Lfsr,
}

impl CipherKind {
    /// All kinds in reference-run order.
    pub const ALL: [CipherKind; 4] = [
        CipherKind::Gronsfeld,
        CipherKind::Caesar,
        CipherKind::Vigenere,
        CipherKind::Lfsr,
    ];

    /// Short lowercase name, used for output file names.
    pub fn name(self) -> &'static str {
        match self {
            CipherKind::Gronsfeld => "gronsfeld",
            CipherKind::Caesar => "caesar",
            CipherKind::Vigenere => "vigenere",
            CipherKind::Lfsr => "lfsr",
        }
    }
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A cipher together with its key material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cipher {
    /// Two numeric keys applied as two successive rotations.
    Gronsfeld { key1: Vec<u32>, key2: Vec<u32> },
    /// One shift for every letter.
    Caesar { shift: u32 },
    /// Shifts taken from the letters of a Windows-1251 keyword.
    Vigenere { keyword: Vec<u8> },
    /// Shifts taken from an 8-bit LFSR started at `seed`.
    Lfsr { seed: u8 },
}

/// Keystreams built from a [`Cipher`]'s key material for one text.
enum Stages {
    Two(CyclicKey, CyclicKey),
    Fixed(FixedShift),
    Cyclic(CyclicKey),
    Stream(LfsrKeystream),
}

impl Stages {
    fn forward(&self) -> Vec<&dyn Keystream> {
        match self {
            Stages::Two(first, second) => vec![first as &dyn Keystream, second],
            Stages::Fixed(shift) => vec![shift as &dyn Keystream],
            Stages::Cyclic(key) => vec![key as &dyn Keystream],
            Stages::Stream(stream) => vec![stream as &dyn Keystream],
        }
    }
}

impl Cipher {
    /// The cipher family.
    pub fn kind(&self) -> CipherKind {
        match self {
            Cipher::Gronsfeld { .. } => CipherKind::Gronsfeld,
            Cipher::Caesar { .. } => CipherKind::Caesar,
            Cipher::Vigenere { .. } => CipherKind::Vigenere,
            Cipher::Lfsr { .. } => CipherKind::Lfsr,
        }
    }

    /// Validates key material and builds the keystreams for a text of
    /// `text_len` bytes.
    fn stages(&self, text_len: usize) -> Result<Stages, CipherError> {
        Ok(match self {
            Cipher::Gronsfeld { key1, key2 } => {
                Stages::Two(CyclicKey::new(key1.clone())?, CyclicKey::new(key2.clone())?)
            }
            Cipher::Caesar { shift } => Stages::Fixed(FixedShift(*shift)),
            Cipher::Vigenere { keyword } => Stages::Cyclic(CyclicKey::from_keyword(keyword)?),
            Cipher::Lfsr { seed } => Stages::Stream(LfsrKeystream::new(*seed, text_len)),
        })
    }

    /// Encrypts a Windows-1251 text.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidKey`] if a Gronsfeld key is empty or
    /// a Vigenère keyword contains no letters. No output is produced then.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyrcipher::alphabet::{decode_cp1251, encode_cp1251};
    /// use cyrcipher::Cipher;
    ///
    /// let caesar = Cipher::Caesar { shift: 1 };
    /// let out = caesar.encrypt(&encode_cp1251("АБВ")).unwrap();
    /// assert_eq!(decode_cp1251(&out), "БВГ");
    /// ```
    pub fn encrypt(&self, text: &[u8]) -> Result<Vec<u8>, CipherError> {
        let stages = self.stages(text.len())?;
        debug!("{} encrypting {} bytes", self.kind(), text.len());
        Ok(apply(text, &stages.forward()))
    }

    /// Decrypts a text produced by [`encrypt`](Self::encrypt) with the same
    /// key material.
    ///
    /// Each stage is replaced by its negation modulo 33 and the stages run
    /// in reverse order.
    ///
    /// # Errors
    /// Same as [`encrypt`](Self::encrypt).
    pub fn decrypt(&self, text: &[u8]) -> Result<Vec<u8>, CipherError> {
        let stages = self.stages(text.len())?;
        debug!("{} decrypting {} bytes", self.kind(), text.len());
        let inverted: Vec<Inverted<&dyn Keystream>> =
            stages.forward().into_iter().rev().map(Inverted).collect();
        let inverse: Vec<&dyn Keystream> =
            inverted.iter().map(|k| k as &dyn Keystream).collect();
        Ok(apply(text, &inverse))
    }
}
