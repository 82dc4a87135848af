//! 32-bit uncompressed BMP encoder (internal).
//!
//! Use top-level [`crate::encode_bmp`] or [`crate::EncodeRequest`].

mod encode;

use crate::error::BitmapError;
use crate::limits::Limits;
use crate::pixel::PixelData;
use alloc::vec::Vec;
use enough::Stop;

#[cfg(feature = "imgref")]
pub(crate) use encode::encode_rows;

/// BITMAPFILEHEADER length.
pub const FILE_HEADER_LEN: usize = 14;
/// BITMAPINFOHEADER length.
pub const INFO_HEADER_LEN: usize = 40;
/// Offset of the pixel array, i.e. both headers.
pub const HEADER_LEN: usize = FILE_HEADER_LEN + INFO_HEADER_LEN;
/// Horizontal and vertical resolution written to the header (96 DPI).
pub const PIXELS_PER_METER: u32 = 3780;
/// Color depth of every file this crate writes.
pub const BITS_PER_PIXEL: u16 = 32;

/// Encode a top-down grid of 4-byte pixels as a 32-bit BMP.
///
/// `pixels.len()` must equal `width * height * 4` and both dimensions must be
/// positive; anything else fails with an
/// [`ErrorKind::InvalidArgument`](crate::ErrorKind::InvalidArgument) error.
/// Pixels are copied verbatim, so they should already be in BMP's BGRA order.
pub fn encode_bmp(pixels: &[u8], width: i32, height: i32) -> Result<Vec<u8>, BitmapError> {
    encode::encode_bmp32(pixels, width, height, None, &enough::Unstoppable)
}

/// Encode a grid that may be absent.
///
/// `None` fails with [`BitmapError::MissingPixels`].
pub fn from_pixel_data(pixel_data: Option<&PixelData>) -> Result<Vec<u8>, BitmapError> {
    pixel_data.ok_or(BitmapError::MissingPixels)?.to_bmp()
}

/// Encode with optional limits and a cancellation token.
pub(crate) fn encode(
    pixels: &[u8],
    width: i32,
    height: i32,
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Vec<u8>, BitmapError> {
    encode::encode_bmp32(pixels, width, height, limits, stop)
}
