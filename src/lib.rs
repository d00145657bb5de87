//! Classical Cyrillic text ciphers with frequency and entropy analysis.
//!
//! Four ciphers over Windows-1251 Russian text (Gronsfeld with two numeric
//! keys, Caesar, Vigenère and an LFSR-driven stream cipher) and the
//! statistics used to compare their output: byte frequency tables,
//! per-channel histograms of 24-bit bitmaps and Shannon entropy.
//!
//! None of the ciphers are secure. They exist to be analyzed.
//!
//! # Architecture
//!
//! ```text
//! alphabet   (letter <-> ordinal 0..33, case kept apart)
//!     ↑
//! keystream  (CyclicKey / FixedShift / Lfsr: one shift per text position)
//!     ↑
//! cipher     (apply: rotate every letter by its shifts, copy the rest)
//!     ↓ ciphertext bytes
//! stats      (FrequencyTable, ChannelHistograms, shannon_entropy)
//! ```
//!
//! # Examples
//!
//! Encrypt with every reference cipher and compare entropies:
//!
//! ```
//! use cyrcipher::alphabet::encode_cp1251;
//! use cyrcipher::{entropy, RunConfig};
//!
//! let text = encode_cp1251("Съешь же ещё этих мягких французских булок, да выпей чаю");
//! for cipher in RunConfig::default().ciphers() {
//!     let out = cipher.encrypt(&text).unwrap();
//!     assert_eq!(out.len(), text.len());
//!     assert_eq!(cipher.decrypt(&out).unwrap(), text);
//!     assert!(entropy(&out) <= 8.0);
//! }
//! ```
//!
//! Histogram a byte stream:
//!
//! ```
//! use cyrcipher::analyze;
//!
//! let table = analyze(b"hello");
//! assert_eq!(table.ordered(), vec![(b'e', 1), (b'h', 1), (b'l', 2), (b'o', 1)]);
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod cipher;
pub mod config;
pub mod error;
pub mod keystream;
pub mod source;
pub mod stats;

pub use cipher::{Cipher, CipherKind};
pub use config::RunConfig;
pub use error::CipherError;
pub use stats::{ChannelHistograms, FrequencyTable};

/// Byte frequency table of `bytes`.
pub fn analyze(bytes: &[u8]) -> FrequencyTable {
    FrequencyTable::from_bytes(bytes)
}

/// Combined and per-channel histograms of a 24-bit BMP file.
///
/// # Errors
/// Returns [`CipherError::MalformedBitmap`] if the file is not a complete
/// 24-bit bitmap.
pub fn analyze_image(bytes: &[u8]) -> Result<ChannelHistograms, CipherError> {
    ChannelHistograms::from_bitmap(bytes)
}

/// Shannon entropy of `bytes` in bits per byte, 0.0 when empty.
pub fn entropy(bytes: &[u8]) -> f64 {
    stats::shannon_entropy(bytes)
}
