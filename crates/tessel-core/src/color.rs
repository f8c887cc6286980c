//! Packed 32-bit RGBA colour.

use std::fmt;

/// A colour packed as `0xRRGGBBAA`.
///
/// # Examples
///
/// ```
/// use tessel_core::Color;
///
/// let c = Color::from_rgba(0xAA, 0xBB, 0xCC, 0xFF);
/// assert_eq!(c, Color(0xAABBCCFF));
/// assert_eq!(c.to_rgba_bytes(), [0xAA, 0xBB, 0xCC, 0xFF]);
/// assert_eq!(c.to_string(), "0xAABBCCFF");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color(pub u32);

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Color = Color(0x0000_0000);
    /// Opaque black.
    pub const BLACK: Color = Color(0x0000_00FF);
    /// Opaque white.
    pub const WHITE: Color = Color(0xFFFF_FFFF);

    /// Pack four channel bytes.
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(u32::from_be_bytes([r, g, b, a]))
    }

    /// Pack a pixel given in `[R, G, B, A]` channel order.
    pub const fn from_rgba_bytes(bytes: [u8; 4]) -> Self {
        Self(u32::from_be_bytes(bytes))
    }

    /// Unpack into `[R, G, B, A]` channel order.
    pub const fn to_rgba_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    /// Red channel.
    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Green channel.
    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Blue channel.
    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Alpha channel.
    pub const fn a(self) -> u8 {
        self.0 as u8
    }

    /// Same colour with the alpha channel replaced.
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self((self.0 & 0xFFFF_FF00) | alpha as u32)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.0)
    }
}

impl From<u32> for Color {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
