//! BIF header codec.
//!
//! The header is 14 bytes, every multi-byte field little-endian:
//! magic (4), version (2), width (2), height (2), fill color (4).

use log::trace;

use crate::bif::pixels::buffer_size;
use crate::error::BifError;
use crate::pixel::PackedColor;

/// File magic, `BIFF`.
pub const MAGIC: [u8; 4] = *b"BIFF";

/// The only format version this codec reads or writes.
pub const FORMAT_VERSION: u16 = 100;

/// Encoded header size in bytes.
pub const HEADER_SIZE: usize = 14;

/// Parsed BIF header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ImageHeader {
    pub version: u16,
    pub width: u16,
    pub height: u16,
    pub fill: PackedColor,
}

impl ImageHeader {
    /// Header for the current format version.
    pub fn new(width: u16, height: u16, fill: PackedColor) -> Self {
        Self {
            version: FORMAT_VERSION,
            width,
            height,
            fill,
        }
    }

    /// Serialize to the on-disk layout.
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut out = [0u8; HEADER_SIZE];
        out[0..4].copy_from_slice(&MAGIC);
        out[4..6].copy_from_slice(&self.version.to_le_bytes());
        out[6..8].copy_from_slice(&self.width.to_le_bytes());
        out[8..10].copy_from_slice(&self.height.to_le_bytes());
        out[10..14].copy_from_slice(&self.fill.to_bits().to_le_bytes());
        out
    }

    /// Parse and validate the header at the start of `data`.
    ///
    /// Zero width or height is accepted here; it describes an empty pixel
    /// region. Only the encoder rejects it.
    pub fn parse(data: &[u8]) -> Result<Self, BifError> {
        if data.len() < HEADER_SIZE {
            return Err(BifError::TooShort {
                actual: data.len() as u64,
            });
        }
        let magic = [data[0], data[1], data[2], data[3]];
        if magic != MAGIC {
            return Err(BifError::BadMagic(magic));
        }
        let version = u16::from_le_bytes([data[4], data[5]]);
        if version != FORMAT_VERSION {
            return Err(BifError::UnsupportedVersion(version));
        }
        let width = u16::from_le_bytes([data[6], data[7]]);
        let height = u16::from_le_bytes([data[8], data[9]]);
        let fill = PackedColor::from_bits(u32::from_le_bytes([
            data[10], data[11], data[12], data[13],
        ]));

        trace!("Width: {}", width);
        trace!("Height: {}", height);
        trace!("Fill: {:#010x}", fill.to_bits());

        Ok(Self {
            version,
            width,
            height,
            fill,
        })
    }

    /// Read the header without touching the pixel region.
    pub fn peek(data: &[u8]) -> Result<Self, BifError> {
        Self::parse(data)
    }

    /// Size of the pixel region this header describes.
    pub fn pixel_data_len(&self) -> u64 {
        buffer_size(self.width, self.height)
    }

    /// Minimum size of a file carrying this header.
    pub fn file_len(&self) -> u64 {
        HEADER_SIZE as u64 + self.pixel_data_len()
    }
}
