//! Per-channel histograms of 24-bit BMP images.
//!
//! Layout handled here:
//!
//! ```text
//! offset  size  field
//!      0     2  "BM"
//!     18     4  width   (i32, little-endian)
//!     22     4  height  (i32, little-endian)
//!     28     2  bits per pixel (u16, must be 24)
//!     54     -  pixel rows, bottom to top, B G R per pixel,
//!               each row padded to a multiple of 4 bytes
//! ```
//!
//! Header fields are decoded from fixed offsets with bounds checks. Padding
//! bytes are skipped and never counted.

use log::debug;

use super::frequency::FrequencyTable;
use crate::error::{BitmapProblem, CipherError};

/// Size of the file header plus the BITMAPINFOHEADER.
pub const HEADER_LEN: usize = 54;

const WIDTH_OFFSET: usize = 18;
const HEIGHT_OFFSET: usize = 22;
const BPP_OFFSET: usize = 28;

fn malformed(problem: BitmapProblem) -> CipherError {
    CipherError::MalformedBitmap(problem)
}

fn read_u16_le(bytes: &[u8], offset: usize) -> Result<u16, CipherError> {
    bytes
        .get(offset..offset + 2)
        .and_then(|b| b.try_into().ok())
        .map(u16::from_le_bytes)
        .ok_or(malformed(BitmapProblem::HeaderTooShort))
}

fn read_i32_le(bytes: &[u8], offset: usize) -> Result<i32, CipherError> {
    bytes
        .get(offset..offset + 4)
        .and_then(|b| b.try_into().ok())
        .map(i32::from_le_bytes)
        .ok_or(malformed(BitmapProblem::HeaderTooShort))
}

/// Validated dimensions of a 24-bit bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapHeader {
    pub width: u32,
    pub height: u32,
}

impl BitmapHeader {
    /// Decodes and validates the 54-byte header at the start of `bytes`.
    ///
    /// # Errors
    /// Returns [`CipherError::MalformedBitmap`] if the header is shorter
    /// than 54 bytes, lacks the `BM` signature, has a non-positive width or
    /// height, or is not 24 bits per pixel.
    pub fn parse(bytes: &[u8]) -> Result<Self, CipherError> {
        if bytes.len() < HEADER_LEN {
            return Err(malformed(BitmapProblem::HeaderTooShort));
        }
        if &bytes[..2] != b"BM" {
            return Err(malformed(BitmapProblem::BadMagic));
        }
        let width = read_i32_le(bytes, WIDTH_OFFSET)?;
        let height = read_i32_le(bytes, HEIGHT_OFFSET)?;
        if width <= 0 || height <= 0 {
            return Err(malformed(BitmapProblem::NonPositiveDimensions));
        }
        let bpp = read_u16_le(bytes, BPP_OFFSET)?;
        if bpp != 24 {
            return Err(malformed(BitmapProblem::UnsupportedBitDepth(bpp)));
        }
        Ok(BitmapHeader {
            width: width as u32,
            height: height as u32,
        })
    }

    /// Bytes per stored row, including padding.
    pub fn row_stride(&self) -> usize {
        (self.width as usize * 3 + 3) & !3
    }

    /// Number of pixels in the image.
    pub fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// Byte histograms of an image: all channels together and each on its own.
///
/// `combined` is the entry-wise sum of `red`, `green` and `blue`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelHistograms {
    pub combined: FrequencyTable,
    pub red: FrequencyTable,
    pub green: FrequencyTable,
    pub blue: FrequencyTable,
}

impl ChannelHistograms {
    /// Parses a whole BMP file and histograms its pixels.
    ///
    /// # Errors
    /// Returns [`CipherError::MalformedBitmap`] for an invalid header or a
    /// pixel body shorter than `height` padded rows.
    pub fn from_bitmap(bytes: &[u8]) -> Result<Self, CipherError> {
        let header = BitmapHeader::parse(bytes)?;
        debug!(
            "bitmap {}x{} ({} pixels), row stride {}",
            header.width,
            header.height,
            header.pixel_count(),
            header.row_stride()
        );
        Self::from_pixel_rows(&bytes[HEADER_LEN..], header.width, header.height)
    }

    /// Histograms a headerless pixel body of `width` x `height` pixels.
    ///
    /// Bytes past the last row are ignored.
    ///
    /// # Errors
    /// Returns [`CipherError::MalformedBitmap`] if a dimension is zero or
    /// `body` is too short.
    pub fn from_pixel_rows(body: &[u8], width: u32, height: u32) -> Result<Self, CipherError> {
        if width == 0 || height == 0 {
            return Err(malformed(BitmapProblem::NonPositiveDimensions));
        }
        let header = BitmapHeader { width, height };
        let stride = header.row_stride();
        let row_len = width as usize * 3;
        let needed = stride
            .checked_mul(height as usize)
            .ok_or(malformed(BitmapProblem::TruncatedBody))?;
        if body.len() < needed {
            return Err(malformed(BitmapProblem::TruncatedBody));
        }

        let mut red = FrequencyTable::new();
        let mut green = FrequencyTable::new();
        let mut blue = FrequencyTable::new();
        for row in body[..needed].chunks_exact(stride) {
            for pixel in row[..row_len].chunks_exact(3) {
                blue.record(pixel[0]);
                green.record(pixel[1]);
                red.record(pixel[2]);
            }
        }
        let combined = &(&red + &green) + &blue;
        Ok(ChannelHistograms {
            combined,
            red,
            green,
            blue,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a 24-bit BMP whose pixel (x, y) has the colour `pixel(x, y)`
    /// in B, G, R order, padding bytes filled with 0xEE.
    fn bitmap(width: i32, height: i32, pixel: impl Fn(i32, i32) -> [u8; 3]) -> Vec<u8> {
        let mut bytes = vec![0u8; HEADER_LEN];
        bytes[0] = b'B';
        bytes[1] = b'M';
        bytes[18..22].copy_from_slice(&width.to_le_bytes());
        bytes[22..26].copy_from_slice(&height.to_le_bytes());
        bytes[28..30].copy_from_slice(&24u16.to_le_bytes());
        let padding = (4 - (width * 3) % 4) % 4;
        for y in 0..height {
            for x in 0..width {
                bytes.extend_from_slice(&pixel(x, y));
            }
            bytes.extend(std::iter::repeat(0xEE).take(padding as usize));
        }
        bytes
    }

    #[test]
    fn test_header_fields() {
        let bytes = bitmap(5, 3, |_, _| [0, 0, 0]);
        let header = BitmapHeader::parse(&bytes).unwrap();
        assert_eq!(header, BitmapHeader { width: 5, height: 3 });
        assert_eq!(header.row_stride(), 16);
        assert_eq!(header.pixel_count(), 15);
    }

    #[test]
    fn test_channels_split_and_padding_skipped() {
        // width 1 -> 3 pixel bytes + 1 padding byte per row
        let bytes = bitmap(1, 2, |_, y| [10, 20 + y as u8, 30]);
        let hist = ChannelHistograms::from_bitmap(&bytes).unwrap();
        assert_eq!(hist.blue.ordered(), vec![(10, 2)]);
        assert_eq!(hist.green.ordered(), vec![(20, 1), (21, 1)]);
        assert_eq!(hist.red.ordered(), vec![(30, 2)]);
        assert_eq!(hist.combined.count(0xEE), 0);
        assert_eq!(hist.combined.total(), 6);
    }

    #[test]
    fn test_combined_is_sum_of_channels() {
        let bytes = bitmap(7, 5, |x, y| [x as u8, y as u8, (x * y) as u8]);
        let hist = ChannelHistograms::from_bitmap(&bytes).unwrap();
        assert_eq!(hist.combined, &(&hist.red + &hist.green) + &hist.blue);
        assert_eq!(hist.combined.total(), 7 * 5 * 3);
    }

    #[test]
    fn test_short_header_rejected() {
        assert_eq!(
            BitmapHeader::parse(&[b'B', b'M', 0, 0]),
            Err(CipherError::MalformedBitmap(BitmapProblem::HeaderTooShort))
        );
    }

    #[test]
    fn test_bad_magic_rejected() {
        let mut bytes = bitmap(2, 2, |_, _| [1, 2, 3]);
        bytes[0] = b'P';
        assert_eq!(
            ChannelHistograms::from_bitmap(&bytes),
            Err(CipherError::MalformedBitmap(BitmapProblem::BadMagic))
        );
    }

    #[test]
    fn test_non_positive_dimensions_rejected() {
        let mut bytes = bitmap(2, 2, |_, _| [1, 2, 3]);
        bytes[22..26].copy_from_slice(&(-2i32).to_le_bytes());
        assert_eq!(
            BitmapHeader::parse(&bytes),
            Err(CipherError::MalformedBitmap(
                BitmapProblem::NonPositiveDimensions
            ))
        );
        assert!(ChannelHistograms::from_pixel_rows(&[0; 16], 0, 4).is_err());
    }

    #[test]
    fn test_bit_depth_checked() {
        let mut bytes = bitmap(2, 2, |_, _| [1, 2, 3]);
        bytes[28..30].copy_from_slice(&32u16.to_le_bytes());
        assert_eq!(
            BitmapHeader::parse(&bytes),
            Err(CipherError::MalformedBitmap(
                BitmapProblem::UnsupportedBitDepth(32)
            ))
        );
    }

    #[test]
    fn test_truncated_body_rejected() {
        let mut bytes = bitmap(3, 3, |_, _| [1, 2, 3]);
        bytes.pop();
        assert_eq!(
            ChannelHistograms::from_bitmap(&bytes),
            Err(CipherError::MalformedBitmap(BitmapProblem::TruncatedBody))
        );
    }
}
