use alloc::borrow::Cow;
use alloc::vec::Vec;
use enough::Stop;

#[cfg(feature = "rgb")]
use rgb::AsPixels as _;

use crate::bif::{self, ImageHeader};
use crate::error::BifError;
use crate::limits::Limits;
use crate::pixel::PixelLayout;

/// Decoded image output. Pixels may be borrowed (zero-copy) or owned.
#[derive(Clone, Debug)]
pub struct DecodeOutput<'a> {
    pixels: Cow<'a, [u8]>,
    pub header: ImageHeader,
    pub layout: PixelLayout,
}

impl<'a> DecodeOutput<'a> {
    /// Access the pixel data.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn width(&self) -> u16 {
        self.header.width
    }

    pub fn height(&self) -> u16 {
        self.header.height
    }

    /// Take ownership of the pixel data (copies if borrowed).
    pub fn into_owned(self) -> DecodeOutput<'static> {
        DecodeOutput {
            pixels: Cow::Owned(self.pixels.into_owned()),
            header: self.header,
            layout: self.layout,
        }
    }

    /// Take the pixel buffer (copies if borrowed).
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels.into_owned()
    }

    /// Whether the pixel data is borrowed (zero-copy from input).
    pub fn is_borrowed(&self) -> bool {
        matches!(self.pixels, Cow::Borrowed(_))
    }

    /// Convert to BGR order for a display surface.
    ///
    /// Pixels already in `Bgr8` are passed through untouched.
    pub fn into_display(self) -> DecodeOutput<'static> {
        match self.layout {
            PixelLayout::Bgr8 => self.into_owned(),
            PixelLayout::Rgb8 => self.into_swapped(),
        }
    }

    /// Swap red and blue for every pixel, flipping the layout.
    pub fn into_swapped(self) -> DecodeOutput<'static> {
        let mut pixels = self.pixels.into_owned();
        bif::pixels::swap_channels(&mut pixels);
        DecodeOutput {
            pixels: Cow::Owned(pixels),
            header: self.header,
            layout: self.layout.swapped(),
        }
    }

    pub(crate) fn borrowed(data: &'a [u8], header: ImageHeader, layout: PixelLayout) -> Self {
        Self {
            pixels: Cow::Borrowed(data),
            header,
            layout,
        }
    }

    #[cfg_attr(not(feature = "std"), allow(dead_code))]
    pub(crate) fn owned(data: Vec<u8>, header: ImageHeader, layout: PixelLayout) -> Self {
        Self {
            pixels: Cow::Owned(data),
            header,
            layout,
        }
    }

    /// Reinterpret pixel data as typed pixel slice.
    ///
    /// Returns [`crate::BifError::LayoutMismatch`] if the pixel layout doesn't match `P`.
    #[cfg(feature = "rgb")]
    pub fn as_pixels<P: crate::DecodePixel>(&self) -> Result<&[P], crate::BifError>
    where
        [u8]: rgb::AsPixels<P>,
    {
        if self.layout != P::layout() {
            return Err(crate::BifError::LayoutMismatch {
                expected: P::layout(),
                actual: self.layout,
            });
        }
        Ok(self.pixels().as_pixels())
    }

    /// Zero-copy view as an [`imgref::ImgRef`] of typed pixels.
    ///
    /// Returns [`crate::BifError::LayoutMismatch`] if the pixel layout doesn't match `P`.
    #[cfg(feature = "imgref")]
    pub fn as_imgref<P: crate::DecodePixel>(
        &self,
    ) -> Result<imgref::ImgRef<'_, P>, crate::BifError>
    where
        [u8]: rgb::AsPixels<P>,
    {
        let pixels: &[P] = self.as_pixels()?;
        Ok(imgref::ImgRef::new(
            pixels,
            usize::from(self.width()),
            usize::from(self.height()),
        ))
    }

    /// Convert to an [`imgref::ImgVec`] of typed pixels.
    ///
    /// Returns [`crate::BifError::LayoutMismatch`] if the pixel layout doesn't match `P`.
    #[cfg(feature = "imgref")]
    pub fn to_imgvec<P: crate::DecodePixel>(&self) -> Result<imgref::ImgVec<P>, crate::BifError>
    where
        [u8]: rgb::AsPixels<P>,
    {
        let pixels: &[P] = self.as_pixels()?;
        Ok(imgref::ImgVec::new(
            pixels.to_vec(),
            usize::from(self.width()),
            usize::from(self.height()),
        ))
    }
}

/// Decode request over an in-memory BIF file.
///
/// ```no_run
/// use zenbif::{DecodeRequest, Limits, Unstoppable};
///
/// let data: &[u8] = &[]; // your BIF bytes
/// let limits = Limits {
///     max_pixels: Some(4096 * 4096),
///     ..Default::default()
/// };
/// let decoded = DecodeRequest::new(data)
///     .with_limits(&limits)
///     .decode(Unstoppable)?;
/// println!("{}x{}", decoded.width(), decoded.height());
/// # Ok::<(), zenbif::BifError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    /// Reject images exceeding `limits` before touching pixel data.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Decode. Bytes past the pixel region are ignored.
    pub fn decode(self, stop: impl Stop) -> Result<DecodeOutput<'a>, BifError> {
        bif::decode(self.data, self.limits, &stop)
    }
}
