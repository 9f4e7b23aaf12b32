//! BIF image format decoder and encoder (internal).
//!
//! A fixed 14-byte header (see [`header`]) followed by `width * height * 3`
//! bytes of row-major RGB pixels. No compression, no palette.

pub(crate) mod header;
pub(crate) mod pixels;

pub use header::{FORMAT_VERSION, HEADER_SIZE, ImageHeader, MAGIC};

use crate::decode::DecodeOutput;
use crate::error::BifError;
use crate::limits::Limits;
use crate::pixel::{PackedColor, PixelLayout};
use alloc::vec::Vec;
use enough::Stop;
use log::{trace, warn};

/// Decode BIF data. The pixel region is borrowed from `data`.
pub(crate) fn decode<'a>(
    data: &'a [u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<DecodeOutput<'a>, BifError> {
    let header = ImageHeader::parse(data)?;
    if let Some(limits) = limits {
        limits.check_header(&header)?;
    }
    stop.check()?;

    let expected = header.file_len();
    let actual = data.len() as u64;
    if actual < expected {
        return Err(BifError::TruncatedFile { expected, actual });
    }
    if actual > expected {
        warn!("ignoring {} trailing bytes after pixel data", actual - expected);
    }
    let end = pixels::to_usize(expected)?;
    trace!("Pixel bytes: {}", header.pixel_data_len());
    Ok(DecodeOutput::borrowed(
        &data[HEADER_SIZE..end],
        header,
        PixelLayout::Rgb8,
    ))
}

/// Encode a solid-fill image.
pub(crate) fn encode_solid(
    width: u16,
    height: u16,
    fill: PackedColor,
    stop: &dyn Stop,
) -> Result<Vec<u8>, BifError> {
    check_dimensions(width, height)?;
    let header = ImageHeader::new(width, height, fill);
    let (mut out, pixel_start) = alloc_file(&header)?;
    let [r, g, b] = fill.rgb();
    pixels::fill_solid(&mut out[pixel_start..], width, height, r, g, b, stop)?;
    Ok(out)
}

/// Encode an existing pixel buffer. `Bgr8` input is written back in RGB order.
pub(crate) fn encode_pixels(
    input: &[u8],
    width: u16,
    height: u16,
    fill: PackedColor,
    layout: PixelLayout,
    stop: &dyn Stop,
) -> Result<Vec<u8>, BifError> {
    check_dimensions(width, height)?;
    let header = ImageHeader::new(width, height, fill);
    let expected = pixels::to_usize(header.pixel_data_len())?;
    if input.len() < expected {
        return Err(BifError::BufferTooSmall {
            needed: expected,
            actual: input.len(),
        });
    }
    stop.check()?;

    let mut out = pixels::reserve_pixel_buffer(header.file_len())?;
    out.extend_from_slice(&header.to_bytes());
    match layout {
        PixelLayout::Rgb8 => out.extend_from_slice(&input[..expected]),
        PixelLayout::Bgr8 => pixels::extend_swapped(&mut out, &input[..expected], width, stop)?,
    }
    Ok(out)
}

fn check_dimensions(width: u16, height: u16) -> Result<(), BifError> {
    if width == 0 || height == 0 {
        return Err(BifError::InvalidDimensions { width, height });
    }
    Ok(())
}

/// Zeroed buffer for a whole file with the header already written.
/// Returns the buffer and the offset of the pixel region.
fn alloc_file(header: &ImageHeader) -> Result<(Vec<u8>, usize), BifError> {
    let mut out = pixels::alloc_pixel_buffer(header.file_len())?;
    out[..HEADER_SIZE].copy_from_slice(&header.to_bytes());
    Ok((out, HEADER_SIZE))
}
