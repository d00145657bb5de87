//! Error types for the cyrcipher library.

use std::fmt;
use std::io;

/// Reason a piece of key material was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyProblem {
    /// A numeric shift key has no elements.
    EmptyShiftKey,
    /// A keyword contains no Cyrillic letters to derive shifts from.
    NoKeywordLetters,
}

/// Reason a bitmap could not be analyzed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitmapProblem {
    /// Fewer bytes than the fixed 54-byte header.
    HeaderTooShort,
    /// The first two bytes are not `BM`.
    BadMagic,
    /// Width or height is zero or negative.
    NonPositiveDimensions,
    /// Pixel format other than 24 bits per pixel.
    UnsupportedBitDepth(u16),
    /// Pixel body ends before `height` padded rows.
    TruncatedBody,
}

/// Errors produced by the cyrcipher library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// A byte source or sink could not be opened, read or written.
    Io {
        /// Path of the source or sink.
        path: String,
        /// Kind of the underlying I/O failure.
        kind: io::ErrorKind,
    },
    /// Key material cannot produce a defined shift sequence.
    InvalidKey(KeyProblem),
    /// Bitmap header or body does not match the expected layout.
    MalformedBitmap(BitmapProblem),
    /// Text holds a character with no Windows-1251 byte.
    Unencodable {
        character: char,
        /// Index of the character, counted in characters.
        position: usize,
    },
}

impl CipherError {
    /// Wraps an I/O failure together with the path it occurred on.
    pub(crate) fn io(path: impl Into<String>, err: &io::Error) -> Self {
        CipherError::Io {
            path: path.into(),
            kind: err.kind(),
        }
    }
}

impl fmt::Display for KeyProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyProblem::EmptyShiftKey => write!(f, "shift key must contain at least one value"),
            KeyProblem::NoKeywordLetters => {
                write!(f, "keyword must contain at least one Cyrillic letter")
            }
        }
    }
}

impl fmt::Display for BitmapProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitmapProblem::HeaderTooShort => write!(f, "header shorter than 54 bytes"),
            BitmapProblem::BadMagic => write!(f, "missing BM signature"),
            BitmapProblem::NonPositiveDimensions => {
                write!(f, "width and height must be positive")
            }
            BitmapProblem::UnsupportedBitDepth(bpp) => {
                write!(f, "{} bits per pixel is not supported, expected 24", bpp)
            }
            BitmapProblem::TruncatedBody => write!(f, "pixel data is truncated"),
        }
    }
}

impl fmt::Display for CipherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CipherError::Io { path, kind } => {
                write!(f, "I/O error on {}: {}", path, io::Error::from(*kind))
            }
            CipherError::InvalidKey(problem) => write!(f, "Invalid key: {}", problem),
            CipherError::MalformedBitmap(problem) => write!(f, "Malformed bitmap: {}", problem),
            CipherError::Unencodable {
                character,
                position,
            } => write!(
                f,
                "Unencodable text: {:?} (U+{:04X}) at character {} has no Windows-1251 byte",
                character, *character as u32, position
            ),
        }
    }
}

impl std::error::Error for CipherError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_key() {
        let err = CipherError::InvalidKey(KeyProblem::EmptyShiftKey);
        assert_eq!(
            format!("{}", err),
            "Invalid key: shift key must contain at least one value"
        );
    }

    #[test]
    fn test_display_malformed_bitmap() {
        let err = CipherError::MalformedBitmap(BitmapProblem::UnsupportedBitDepth(8));
        assert_eq!(
            format!("{}", err),
            "Malformed bitmap: 8 bits per pixel is not supported, expected 24"
        );
    }

    #[test]
    fn test_display_unencodable() {
        let err = CipherError::Unencodable {
            character: '漢',
            position: 0,
        };
        assert_eq!(
            format!("{}", err),
            "Unencodable text: '漢' (U+6F22) at character 0 has no Windows-1251 byte"
        );
    }

    #[test]
    fn test_display_io_names_path() {
        let err = CipherError::Io {
            path: "input.txt".to_string(),
            kind: io::ErrorKind::NotFound,
        };
        assert!(format!("{}", err).starts_with("I/O error on input.txt: "));
    }

    #[test]
    fn test_io_constructor_keeps_kind() {
        let source = io::Error::new(io::ErrorKind::PermissionDenied, "nope");
        let err = CipherError::io("out.txt", &source);
        assert_eq!(
            err,
            CipherError::Io {
                path: "out.txt".to_string(),
                kind: io::ErrorKind::PermissionDenied,
            }
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            CipherError::InvalidKey(KeyProblem::NoKeywordLetters),
            CipherError::InvalidKey(KeyProblem::NoKeywordLetters)
        );
        assert_ne!(
            CipherError::InvalidKey(KeyProblem::NoKeywordLetters),
            CipherError::InvalidKey(KeyProblem::EmptyShiftKey)
        );
    }
}
