//! # pixelbmp
//!
//! Encode an in-memory grid of 4-byte pixels as an uncompressed 32-bit BMP.
//!
//! The input is row-major, top row first, `width * height * 4` bytes. The
//! output is a complete `.bmp` file: a 14-byte file header, a 40-byte
//! BITMAPINFOHEADER, and the pixel rows in BMP's bottom-up order. Each 4-byte
//! pixel is copied verbatim, so the producer decides the channel order
//! (BMP readers expect B, G, R, A).
//!
//! ## Non-Goals
//!
//! - Decoding
//! - Compressed (RLE, bitfield) or palettized BMP variants
//! - 24-bit and other bit depths that need row padding
//!
//! ## Usage
//!
//! ```
//! // One opaque red pixel in BGRA order.
//! let bmp = pixelbmp::encode_bmp(&[0x00, 0x00, 0xFF, 0xFF], 1, 1)?;
//! assert_eq!(&bmp[..2], b"BM");
//! assert_eq!(bmp.len(), 54 + 4);
//! # Ok::<(), pixelbmp::BitmapError>(())
//! ```
//!
//! Limits and cooperative cancellation go through [`EncodeRequest`]:
//!
//! ```
//! use pixelbmp::{EncodeRequest, ErrorKind, Limits, Unstoppable};
//!
//! let limits = Limits { max_width: Some(1), ..Default::default() };
//! let err = EncodeRequest::new()
//!     .with_limits(&limits)
//!     .encode(&[0; 8], 2, 1, Unstoppable)
//!     .unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::LimitExceeded);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod error;
mod limits;
mod pixel;

pub mod bmp;

mod encode;

// Re-exports
pub use bmp::{encode_bmp, from_pixel_data};
pub use encode::EncodeRequest;
pub use enough::{Stop, Unstoppable};
pub use error::{BitmapError, ErrorKind};
pub use limits::Limits;
pub use pixel::{BYTES_PER_PIXEL, PixelData, expected_len};
