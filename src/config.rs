//! Key material for a full run over the four ciphers.

use crate::alphabet::encode_cp1251;
use crate::cipher::Cipher;

/// Gronsfeld first key of the reference run.
pub const REFERENCE_KEY1: [u32; 6] = [3, 1, 4, 1, 5, 9];
/// Gronsfeld second key of the reference run.
pub const REFERENCE_KEY2: [u32; 6] = [2, 7, 1, 8, 2, 8];
/// Caesar shift of the reference run.
pub const REFERENCE_SHIFT: u32 = 13;
/// Vigenère keyword of the reference run.
pub const REFERENCE_KEYWORD: &str = "Промеж худых и хорошему плохо..";
/// LFSR seed of the reference run.
pub const REFERENCE_SEED: u8 = 0xAB;

/// Parameters for the Gronsfeld, Caesar, Vigenère and LFSR ciphers.
///
/// [`Default`] gives the reference parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub key1: Vec<u32>,
    pub key2: Vec<u32>,
    pub shift: u32,
    /// Vigenère keyword as text; encoded to Windows-1251 when used.
    pub keyword: String,
    pub seed: u8,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            key1: REFERENCE_KEY1.to_vec(),
            key2: REFERENCE_KEY2.to_vec(),
            shift: REFERENCE_SHIFT,
            keyword: REFERENCE_KEYWORD.to_string(),
            seed: REFERENCE_SEED,
        }
    }
}

impl RunConfig {
    /// The four ciphers, in Gronsfeld, Caesar, Vigenère, LFSR order.
    ///
    /// Key material is validated when a cipher is applied, not here.
    pub fn ciphers(&self) -> [Cipher; 4] {
        [
            Cipher::Gronsfeld {
                key1: self.key1.clone(),
                key2: self.key2.clone(),
            },
            Cipher::Caesar { shift: self.shift },
            Cipher::Vigenere {
                keyword: encode_cp1251(&self.keyword),
            },
            Cipher::Lfsr { seed: self.seed },
        ]
    }
}
