use alloc::vec::Vec;
use enough::Stop;

use crate::bif;
use crate::error::BifError;
use crate::pixel::{PackedColor, PixelLayout};

/// Encode request for an in-memory BIF file.
///
/// ```
/// use zenbif::{EncodeRequest, PackedColor, Unstoppable};
///
/// let bytes = EncodeRequest::new(2, 2)
///     .with_fill(PackedColor::from_rgb(255, 0, 128))
///     .encode(Unstoppable)?;
/// assert_eq!(bytes.len(), 14 + 12);
/// # Ok::<(), zenbif::BifError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct EncodeRequest {
    width: u16,
    height: u16,
    fill: PackedColor,
}

impl EncodeRequest {
    /// Request for a `width` x `height` image, filled black unless changed.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            fill: PackedColor::BLACK,
        }
    }

    /// Fill color, recorded in the header and painted into every pixel by
    /// [`EncodeRequest::encode`].
    pub fn with_fill(mut self, fill: impl Into<PackedColor>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Encode a solid image of the fill color.
    pub fn encode(self, stop: impl Stop) -> Result<Vec<u8>, BifError> {
        bif::encode_solid(self.width, self.height, self.fill, &stop)
    }

    /// Encode existing pixels instead of a solid fill.
    ///
    /// `pixels` must hold at least `width * height * 3` bytes; any excess is
    /// ignored. The header still records the request's fill color.
    pub fn encode_pixels(
        self,
        pixels: &[u8],
        layout: PixelLayout,
        stop: impl Stop,
    ) -> Result<Vec<u8>, BifError> {
        bif::encode_pixels(pixels, self.width, self.height, self.fill, layout, &stop)
    }
}
