//! # zenbif
//!
//! Decoder and encoder for BIF, a minimal uncompressed raster container.
//!
//! ## Format
//!
//! | Offset | Size | Field |
//! |---|---|---|
//! | 0 | 4 | magic `BIFF` |
//! | 4 | 2 | format version, `u16` LE, always 100 |
//! | 6 | 2 | width, `u16` LE |
//! | 8 | 2 | height, `u16` LE |
//! | 10 | 4 | fill color, bytes R, G, B, reserved |
//! | 14 | w×h×3 | pixels, row-major R, G, B |
//!
//! ## Zero-Copy Decoding
//!
//! Decoding a byte slice returns a borrowed view of its pixel region. Files
//! decoded from disk are owned. Pixels stay in on-disk RGB order until
//! [`DecodeOutput::into_display`] reorders them for a BGR surface.
//!
//! ## Non-Goals
//!
//! - Compression, palettes, or any pixel format besides 8-bit RGB
//! - Metadata beyond the four header fields
//! - Rendering to a window
//!
//! ## Usage
//!
//! ```no_run
//! use zenbif::{DecodeRequest, EncodeRequest, ImageHeader, PackedColor};
//! use enough::Unstoppable;
//!
//! let encoded = EncodeRequest::new(64, 32)
//!     .with_fill(PackedColor::from_rgb(12, 200, 37))
//!     .encode(Unstoppable)?;
//!
//! // Probe without decoding
//! let header = ImageHeader::peek(&encoded)?;
//! println!("{}x{} v{}", header.width, header.height, header.version);
//!
//! // Decode (zero-copy)
//! let decoded = DecodeRequest::new(&encoded).decode(Unstoppable)?;
//! assert!(decoded.is_borrowed());
//!
//! // Files
//! # #[cfg(feature = "std")]
//! # {
//! zenbif::encode_image(64, 32, (12, 200, 37), "green.bif")?;
//! let from_disk = zenbif::decode_image("green.bif")?;
//! assert_eq!(from_disk.pixels(), decoded.pixels());
//! # }
//! # Ok::<(), zenbif::BifError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod bif;
mod error;
mod limits;
mod pixel;

mod decode;
mod encode;

#[cfg(feature = "std")]
mod file;

// Re-exports
pub use bif::pixels::{alloc_pixel_buffer, buffer_size, fill_solid, reorder_for_display, swap_channels};
pub use bif::{FORMAT_VERSION, HEADER_SIZE, ImageHeader, MAGIC};
pub use decode::{DecodeOutput, DecodeRequest};
pub use encode::EncodeRequest;
pub use enough::{Stop, Unstoppable};
pub use error::BifError;
#[cfg(feature = "std")]
pub use file::{decode_image, decode_image_with_limits, encode_image};
pub use limits::Limits;
#[cfg(feature = "rgb")]
pub use pixel::DecodePixel;
pub use pixel::{PackedColor, PixelLayout};

/// Decode BIF bytes. The returned pixels borrow from `data`.
pub fn decode(data: &[u8], stop: impl Stop) -> Result<DecodeOutput<'_>, BifError> {
    DecodeRequest::new(data).decode(stop)
}

/// Encode a solid `width` x `height` image of `fill`.
pub fn encode(
    width: u16,
    height: u16,
    fill: impl Into<PackedColor>,
    stop: impl Stop,
) -> Result<alloc::vec::Vec<u8>, BifError> {
    EncodeRequest::new(width, height).with_fill(fill).encode(stop)
}
