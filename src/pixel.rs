use alloc::vec::Vec;

use crate::error::BitmapError;

/// Bytes per pixel in the input grid and in the encoded BMP.
pub const BYTES_PER_PIXEL: usize = 4;

/// Byte length of a `width` x `height` grid of 4-byte pixels.
///
/// Fails with [`BitmapError::InvalidDimensions`] unless both dimensions are
/// positive, and with [`BitmapError::DimensionsTooLarge`] on overflow.
pub fn expected_len(width: i32, height: i32) -> Result<usize, BitmapError> {
    if width <= 0 || height <= 0 {
        return Err(BitmapError::InvalidDimensions { width, height });
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|wh| wh.checked_mul(BYTES_PER_PIXEL))
        .ok_or(BitmapError::DimensionsTooLarge { width, height })
}

/// An owned pixel grid: row-major, top row first, 4 opaque bytes per pixel.
///
/// This is the shape a barcode renderer or similar producer hands over.
/// The channel order is the producer's choice; the encoder copies each
/// pixel unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelData {
    pixels: Vec<u8>,
    width: i32,
    height: i32,
}

impl PixelData {
    /// Wrap a pixel buffer, validating it against the dimensions.
    pub fn new(pixels: Vec<u8>, width: i32, height: i32) -> Result<Self, BitmapError> {
        let needed = expected_len(width, height)?;
        if pixels.len() != needed {
            return Err(BitmapError::BufferSizeMismatch {
                needed,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Take ownership of the pixel bytes.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Encode this grid as a 32-bit BMP file.
    pub fn to_bmp(&self) -> Result<Vec<u8>, BitmapError> {
        crate::encode_bmp(&self.pixels, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn expected_len_rejects_non_positive() {
        for (w, h) in [(0, 1), (1, 0), (-1, 5), (5, -1), (i32::MIN, i32::MIN)] {
            assert!(matches!(
                expected_len(w, h),
                Err(BitmapError::InvalidDimensions { .. })
            ));
        }
        assert_eq!(expected_len(3, 2).unwrap(), 24);
    }

    #[test]
    fn new_checks_length() {
        assert!(PixelData::new(vec![0; 16], 2, 2).is_ok());
        match PixelData::new(vec![0; 15], 2, 2) {
            Err(BitmapError::BufferSizeMismatch { needed, actual }) => {
                assert_eq!(needed, 16);
                assert_eq!(actual, 15);
            }
            other => panic!("expected BufferSizeMismatch, got {other:?}"),
        }
        assert!(PixelData::new(vec![0; 17], 2, 2).is_err());
    }

    #[test]
    fn accessors() {
        let grid = PixelData::new(vec![9; 12], 3, 1).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 1);
        assert_eq!(grid.pixels(), &[9; 12]);
        assert_eq!(grid.into_pixels().len(), 12);
    }
}
