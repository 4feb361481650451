//! Linear RGB color type
//!
//! Linear light is the hub between sRGB and both perceptual spaces: Oklab
//! and CIE XYZ are defined as functions of linear sRGB primaries.

use super::lut::{srgb8_to_linear, srgb_to_linear};
use super::srgb::Srgb;

/// A color in linear RGB color space (sRGB primaries, D65 white).
///
/// Values are 0.0..=1.0 for in-gamut colors. Conversions from perceptual
/// spaces may produce values outside that range; they are clamped only
/// when encoding back to [`Srgb`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f64,
    /// Green channel (linear light intensity)
    pub g: f64,
    /// Blue channel (linear light intensity)
    pub b: f64,
}

impl LinearRgb {
    /// Create a new LinearRgb color from linear RGB values.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Decode 8-bit sRGB bytes through the gamma lookup table.
    #[inline]
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self {
            r: srgb8_to_linear(bytes[0]),
            g: srgb8_to_linear(bytes[1]),
            b: srgb8_to_linear(bytes[2]),
        }
    }
}

impl From<Srgb> for LinearRgb {
    fn from(srgb: Srgb) -> Self {
        Self {
            r: srgb_to_linear(srgb.r),
            g: srgb_to_linear(srgb.g),
            b: srgb_to_linear(srgb.b),
        }
    }
}
