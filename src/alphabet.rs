//! Cyrillic alphabet codec over Windows-1251 bytes.
//!
//! Maps a byte to its position in the 33-letter Russian alphabet
//! (`А Б В Г Д Е Ё Ж ... Я`) and back. In Windows-1251 the letters `А..Я`
//! occupy `0xC0..0xDF` and `а..я` occupy `0xE0..0xFF`, while `Ё`/`ё` live
//! apart at `0xA8`/`0xB8`; the codec folds them in at ordinal 6 so that
//! every rotation stays inside one case of one alphabet.
//!
//! Ordinals are therefore not the raw code-page offset from `0xC0`/`0xE0`.
//! They agree for `А..Е` (ordinals 0..=5), `Ё` takes 6, and from `Ж` onward
//! every ordinal is the offset plus one (`Ж` = 7, `Я` = 32). Shifts derived
//! from keyword letters and the resulting ciphertexts differ accordingly
//! from arithmetic on raw offsets in a 32-letter `А..Я` range: the keyword
//! letter `Ж` shifts by 7, not 6, and `Е` + 1 is `Ё`, not `Ж`.
//!
//! Every byte that is not one of the 66 letters passes through the cipher
//! transforms unchanged.

use crate::error::CipherError;

/// Number of letters in the alphabet.
pub const ALPHABET_LEN: u8 = 33;

const UPPER_BASE: u8 = 0xC0;
const LOWER_BASE: u8 = 0xE0;
const UPPER_YO: u8 = 0xA8;
const LOWER_YO: u8 = 0xB8;
const YO_ORDINAL: u8 = 6;

/// Letter case, tracked separately from the ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Case {
    Upper,
    Lower,
}

/// A decoded alphabetic byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Letter {
    /// Zero-based position in the alphabet, always in `0..33`.
    pub ordinal: u8,
    pub case: Case,
}

/// Decodes `byte` into an alphabet letter.
///
/// # Returns
/// `None` when `byte` is not a Cyrillic letter of either case.
///
/// # Examples
///
/// ```
/// use cyrcipher::alphabet::{to_ordinal, Case};
///
/// let ya = to_ordinal(0xDF).unwrap();
/// assert_eq!(ya.ordinal, 32);
/// assert_eq!(ya.case, Case::Upper);
/// assert!(to_ordinal(b'A').is_none());
/// ```
pub fn to_ordinal(byte: u8) -> Option<Letter> {
    let (base, case) = match byte {
        UPPER_YO => {
            return Some(Letter {
                ordinal: YO_ORDINAL,
                case: Case::Upper,
            })
        }
        LOWER_YO => {
            return Some(Letter {
                ordinal: YO_ORDINAL,
                case: Case::Lower,
            })
        }
        0xC0..=0xDF => (UPPER_BASE, Case::Upper),
        0xE0..=0xFF => (LOWER_BASE, Case::Lower),
        _ => return None,
    };
    let offset = byte - base;
    let ordinal = if offset < YO_ORDINAL { offset } else { offset + 1 };
    Some(Letter { ordinal, case })
}

/// Encodes an ordinal back to its byte, wrapping it modulo 33 first.
pub fn from_ordinal(ordinal: u32, case: Case) -> u8 {
    let ordinal = (ordinal % ALPHABET_LEN as u32) as u8;
    let (base, yo) = match case {
        Case::Upper => (UPPER_BASE, UPPER_YO),
        Case::Lower => (LOWER_BASE, LOWER_YO),
    };
    match ordinal {
        o if o < YO_ORDINAL => base + o,
        YO_ORDINAL => yo,
        o => base + o - 1,
    }
}

/// Rotates a letter forward by `shift` positions, keeping its case.
///
/// Non-letters are returned unchanged.
#[inline]
pub fn rotate(byte: u8, shift: u32) -> u8 {
    match to_ordinal(byte) {
        Some(letter) => from_ordinal(
            letter.ordinal as u32 + shift % ALPHABET_LEN as u32,
            letter.case,
        ),
        None => byte,
    }
}

/// Returns true if `byte` is a Cyrillic letter of either case.
pub fn is_letter(byte: u8) -> bool {
    to_ordinal(byte).is_some()
}

/// Characters of the Windows-1251 bytes `0x80..=0xBF`.
///
/// `0x98` is unassigned in the code page and maps to U+0098, so that every
/// byte decodes to a distinct character. `0xC0..=0xFF` are `А..я` in order
/// and need no table.
const HIGH_HALF: [char; 64] = [
    '\u{0402}', '\u{0403}', '\u{201A}', '\u{0453}', '\u{201E}', '\u{2026}', '\u{2020}', '\u{2021}',
    '\u{20AC}', '\u{2030}', '\u{0409}', '\u{2039}', '\u{040A}', '\u{040C}', '\u{040B}', '\u{040F}',
    '\u{0452}', '\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}', '\u{2022}', '\u{2013}', '\u{2014}',
    '\u{0098}', '\u{2122}', '\u{0459}', '\u{203A}', '\u{045A}', '\u{045C}', '\u{045B}', '\u{045F}',
    '\u{00A0}', '\u{040E}', '\u{045E}', '\u{0408}', '\u{00A4}', '\u{0490}', '\u{00A6}', '\u{00A7}',
    '\u{0401}', '\u{00A9}', '\u{0404}', '\u{00AB}', '\u{00AC}', '\u{00AD}', '\u{00AE}', '\u{0407}',
    '\u{00B0}', '\u{00B1}', '\u{0406}', '\u{0456}', '\u{0491}', '\u{00B5}', '\u{00B6}', '\u{00B7}',
    '\u{0451}', '\u{2116}', '\u{0454}', '\u{00BB}', '\u{0458}', '\u{0405}', '\u{0455}', '\u{0457}',
];

const CYRILLIC_A: u32 = 'А' as u32;

fn char_to_byte(c: char) -> Option<u8> {
    match c {
        '\u{0000}'..='\u{007F}' => Some(c as u8),
        'А'..='я' => Some(UPPER_BASE + (c as u32 - CYRILLIC_A) as u8),
        _ => HIGH_HALF
            .iter()
            .position(|&h| h == c)
            .map(|i| 0x80 + i as u8),
    }
}

fn byte_to_char(byte: u8) -> char {
    match byte {
        0x00..=0x7F => byte as char,
        0x80..=0xBF => HIGH_HALF[(byte - 0x80) as usize],
        _ => char::from_u32(CYRILLIC_A + (byte - UPPER_BASE) as u32)
            .unwrap_or(char::REPLACEMENT_CHARACTER),
    }
}

/// Encodes a string as Windows-1251 bytes.
///
/// Every character of the code page is mapped exactly, including
/// punctuation such as `«`, `»`, `—`, `№` and `…`. Characters outside it
/// become `?`; use [`try_encode_cp1251`] to reject them instead.
pub fn encode_cp1251(text: &str) -> Vec<u8> {
    text.chars().map(|c| char_to_byte(c).unwrap_or(b'?')).collect()
}

/// Encodes a string as Windows-1251 bytes, failing on the first character
/// the code page cannot represent.
///
/// # Errors
/// Returns [`CipherError::Unencodable`] with the character and its index
/// (in characters, not bytes).
///
/// # Examples
///
/// ```
/// use cyrcipher::alphabet::try_encode_cp1251;
/// use cyrcipher::CipherError;
///
/// assert_eq!(try_encode_cp1251("№1").unwrap(), vec![0xB9, b'1']);
/// assert_eq!(
///     try_encode_cp1251("ab漢"),
///     Err(CipherError::Unencodable { character: '漢', position: 2 })
/// );
/// ```
pub fn try_encode_cp1251(text: &str) -> Result<Vec<u8>, CipherError> {
    text.chars()
        .enumerate()
        .map(|(position, character)| {
            char_to_byte(character).ok_or(CipherError::Unencodable {
                character,
                position,
            })
        })
        .collect()
}

/// Decodes Windows-1251 bytes into a string.
///
/// Total over all 256 byte values and the inverse of [`encode_cp1251`]:
/// decoding then encoding returns the original bytes.
pub fn decode_cp1251(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| byte_to_char(b)).collect()
}
