use alloc::vec::Vec;
use enough::Stop;

use crate::bmp;
use crate::error::BitmapError;
use crate::limits::Limits;

/// Builder for an encode operation with limits and cancellation.
///
/// ```
/// use pixelbmp::{EncodeRequest, Limits, Unstoppable};
///
/// let limits = Limits { max_pixels: Some(1 << 20), ..Default::default() };
/// let bmp = EncodeRequest::new()
///     .with_limits(&limits)
///     .encode(&[0, 0, 255, 255], 1, 1, Unstoppable)?;
/// assert_eq!(bmp.len(), 58);
/// # Ok::<(), pixelbmp::BitmapError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct EncodeRequest<'a> {
    limits: Option<&'a Limits>,
}

impl<'a> EncodeRequest<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject images that exceed `limits` before allocating output.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Encode a top-down grid of 4-byte pixels.
    pub fn encode(
        &self,
        pixels: &[u8],
        width: i32,
        height: i32,
        stop: impl Stop,
    ) -> Result<Vec<u8>, BitmapError> {
        bmp::encode(pixels, width, height, self.limits, &stop)
    }

    /// Encode a slice of typed 4-byte pixels (e.g. `rgb::alt::BGRA8`).
    ///
    /// The components are written in memory order, so `BGRA8` produces a
    /// correctly colored file and `RGBA8` produces one with red and blue
    /// swapped.
    #[cfg(feature = "rgb")]
    pub fn encode_pixels<P: Copy>(
        &self,
        pixels: &[P],
        width: i32,
        height: i32,
        stop: impl Stop,
    ) -> Result<Vec<u8>, BitmapError>
    where
        [P]: rgb::ComponentBytes<u8>,
    {
        use rgb::ComponentBytes;
        check_pixel_size::<P>()?;
        bmp::encode(pixels.as_bytes(), width, height, self.limits, &stop)
    }

    /// Encode a possibly strided [`imgref::ImgRef`] of typed 4-byte pixels.
    ///
    /// Stride padding is skipped; only `width` pixels of each row are written.
    #[cfg(feature = "imgref")]
    pub fn encode_img<P: Copy>(
        &self,
        img: imgref::ImgRef<'_, P>,
        stop: impl Stop,
    ) -> Result<Vec<u8>, BitmapError>
    where
        [P]: rgb::ComponentBytes<u8>,
    {
        use rgb::ComponentBytes;
        check_pixel_size::<P>()?;
        let width = i32::try_from(img.width()).unwrap_or(i32::MAX);
        let height = i32::try_from(img.height()).unwrap_or(i32::MAX);
        if width as usize != img.width() || height as usize != img.height() {
            return Err(BitmapError::DimensionsTooLarge { width, height });
        }

        let buf: &[P] = img.buf();
        let stride = img.stride();
        let w = img.width();
        bmp::encode_rows(width, height, self.limits, &stop, move |row| {
            buf[row * stride..][..w].as_bytes()
        })
    }
}

#[cfg(feature = "rgb")]
fn check_pixel_size<P>() -> Result<(), BitmapError> {
    let size = core::mem::size_of::<P>();
    if size != crate::pixel::BYTES_PER_PIXEL {
        return Err(BitmapError::UnsupportedPixelSize(size));
    }
    Ok(())
}
