//! BMP encoder: uncompressed 32-bit BMP with a BITMAPINFOHEADER.

use alloc::vec::Vec;
use enough::Stop;

use super::{BITS_PER_PIXEL, FILE_HEADER_LEN, HEADER_LEN, INFO_HEADER_LEN, PIXELS_PER_METER};
use crate::error::BitmapError;
use crate::limits::Limits;
use crate::pixel::{BYTES_PER_PIXEL, expected_len};

/// Encode a flat top-down grid of 4-byte pixels.
pub(crate) fn encode_bmp32(
    pixels: &[u8],
    width: i32,
    height: i32,
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Vec<u8>, BitmapError> {
    let needed = expected_len(width, height)?;
    checked_file_size(width, height, needed)?;
    if pixels.len() != needed {
        return Err(BitmapError::BufferSizeMismatch {
            needed,
            actual: pixels.len(),
        });
    }

    let row_bytes = width as usize * BYTES_PER_PIXEL;
    encode_rows(width, height, limits, stop, move |row| {
        &pixels[row * row_bytes..][..row_bytes]
    })
}

/// Shared encode path. `row_at(r)` yields the `width * 4` bytes of source
/// row `r`, counted from the top.
pub(crate) fn encode_rows<'a, F>(
    width: i32,
    height: i32,
    limits: Option<&Limits>,
    stop: &dyn Stop,
    row_at: F,
) -> Result<Vec<u8>, BitmapError>
where
    F: Fn(usize) -> &'a [u8],
{
    let file_size = checked_file_size(width, height, expected_len(width, height)?)?;

    if let Some(limits) = limits {
        limits.check(width, height, file_size)?;
    }

    stop.check()?;

    let mut out = Vec::with_capacity(file_size);
    write_bmp_header(&mut out, file_size as u32, width, height);

    // Positive height means bottom-up: last source row goes first.
    let h = height as usize;
    for row in (0..h).rev() {
        if row % 16 == 0 {
            stop.check()?;
        }
        out.extend_from_slice(row_at(row));
    }

    debug_assert_eq!(out.len(), file_size);
    Ok(out)
}

/// Total file length, which has to fit the header's 32-bit size field.
fn checked_file_size(width: i32, height: i32, pixel_data_size: usize) -> Result<usize, BitmapError> {
    pixel_data_size
        .checked_add(HEADER_LEN)
        .filter(|&size| u32::try_from(size).is_ok())
        .ok_or(BitmapError::DimensionsTooLarge { width, height })
}

fn write_bmp_header(out: &mut Vec<u8>, file_size: u32, width: i32, height: i32) {
    // File header (14 bytes)
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&file_size.to_le_bytes());
    out.extend_from_slice(&[0u8; 4]); // reserved
    out.extend_from_slice(&(HEADER_LEN as u32).to_le_bytes()); // data offset
    debug_assert_eq!(out.len(), FILE_HEADER_LEN);

    // DIB header (BITMAPINFOHEADER, 40 bytes)
    out.extend_from_slice(&(INFO_HEADER_LEN as u32).to_le_bytes());
    out.extend_from_slice(&width.to_le_bytes());
    out.extend_from_slice(&height.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // planes
    out.extend_from_slice(&BITS_PER_PIXEL.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes()); // compression: BI_RGB
    out.extend_from_slice(&0u32.to_le_bytes()); // image size, may be 0 for BI_RGB
    out.extend_from_slice(&PIXELS_PER_METER.to_le_bytes());
    out.extend_from_slice(&PIXELS_PER_METER.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes()); // colors used
    out.extend_from_slice(&0u32.to_le_bytes()); // important colors
    debug_assert_eq!(out.len(), HEADER_LEN);
}
