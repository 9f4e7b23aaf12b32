/// Pixel memory layout.
///
/// BIF stores pixels as `Rgb8`. `Bgr8` is the order most display surfaces
/// (DIB sections, BGR framebuffers) expect.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PixelLayout {
    /// 3 channels, 8-bit RGB.
    Rgb8,
    /// 3 channels, 8-bit BGR.
    Bgr8,
}

impl PixelLayout {
    /// Bytes per pixel for this layout.
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            Self::Rgb8 | Self::Bgr8 => 3,
        }
    }

    /// Number of channels.
    pub fn channels(&self) -> usize {
        match self {
            Self::Rgb8 | Self::Bgr8 => 3,
        }
    }

    /// The layout produced by swapping the red and blue channels.
    pub fn swapped(&self) -> PixelLayout {
        match self {
            Self::Rgb8 => Self::Bgr8,
            Self::Bgr8 => Self::Rgb8,
        }
    }
}

/// Fill color as stored in the header: `R | G << 8 | B << 16 | reserved << 24`.
///
/// Serialized little-endian this is the byte sequence `R, G, B, reserved`.
/// The reserved byte carries no meaning but is preserved as read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PackedColor(u32);

impl PackedColor {
    pub const BLACK: PackedColor = PackedColor::from_rgb(0, 0, 0);
    pub const WHITE: PackedColor = PackedColor::from_rgb(255, 255, 255);

    /// Pack an RGB triple. The reserved byte is zero.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self((r as u32) | ((g as u32) << 8) | ((b as u32) << 16))
    }

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn to_bits(self) -> u32 {
        self.0
    }

    pub const fn r(self) -> u8 {
        self.0 as u8
    }

    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn b(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// High byte; unused by the format.
    pub const fn reserved(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn rgb(self) -> [u8; 3] {
        [self.r(), self.g(), self.b()]
    }
}

impl From<(u8, u8, u8)> for PackedColor {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::from_rgb(r, g, b)
    }
}

impl From<[u8; 3]> for PackedColor {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::from_rgb(r, g, b)
    }
}

#[cfg(feature = "rgb")]
impl From<rgb::RGB8> for PackedColor {
    fn from(px: rgb::RGB8) -> Self {
        Self::from_rgb(px.r, px.g, px.b)
    }
}

/// Typed pixels a decoded buffer can be viewed as.
#[cfg(feature = "rgb")]
pub trait DecodePixel: Copy + 'static {
    /// Memory layout of this pixel type.
    fn layout() -> PixelLayout;
}

#[cfg(feature = "rgb")]
impl DecodePixel for rgb::RGB8 {
    fn layout() -> PixelLayout {
        PixelLayout::Rgb8
    }
}

#[cfg(feature = "rgb")]
impl DecodePixel for rgb::alt::BGR8 {
    fn layout() -> PixelLayout {
        PixelLayout::Bgr8
    }
}
