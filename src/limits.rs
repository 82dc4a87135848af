use crate::error::BitmapError;

/// Upper bounds an encode must stay within.
///
/// Every bound is optional and `Limits::default()` accepts anything the
/// 32-bit BMP header can describe. Bounds are checked after argument
/// validation and before the output buffer is allocated.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum size of the encoded file, headers included.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Check validated (positive) dimensions and the encoded file size.
    pub(crate) fn check(
        &self,
        width: i32,
        height: i32,
        file_size: usize,
    ) -> Result<(), BitmapError> {
        let w = u64::from(width.unsigned_abs());
        let h = u64::from(height.unsigned_abs());
        let bounds = [
            ("width", w, self.max_width),
            ("height", h, self.max_height),
            ("pixel count", w * h, self.max_pixels),
            ("output size", file_size as u64, self.max_memory_bytes),
        ];
        for (what, value, max) in bounds {
            if let Some(max) = max
                && value > max
            {
                return Err(BitmapError::LimitExceeded(alloc::format!(
                    "{what} {value} exceeds limit {max}"
                )));
            }
        }
        Ok(())
    }
}
