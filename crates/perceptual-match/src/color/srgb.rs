//! Gamma-encoded sRGB, the encoding of every pixel and palette entry that
//! enters or leaves the matcher.

use std::str::FromStr;

use super::linear_rgb::LinearRgb;
use super::lut::linear_to_srgb;
use crate::palette::ParseColorError;

/// An sRGB color with channels as doubles in `0.0..=1.0`.
///
/// 8-bit input is divided by 255 exactly; output is rounded and clamped, so
/// `from_bytes` followed by `to_bytes` is the identity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Srgb {
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// ```
    /// use perceptual_match::Srgb;
    ///
    /// assert_eq!(Srgb::from_u8(0, 255, 0).g, 1.0);
    /// ```
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
        )
    }

    #[inline]
    pub fn from_bytes([r, g, b]: [u8; 3]) -> Self {
        Self::from_u8(r, g, b)
    }

    /// Quantize to 8 bits per channel, saturating out-of-range values.
    ///
    /// ```
    /// use perceptual_match::Srgb;
    ///
    /// assert_eq!(Srgb::new(-0.2, 0.5, 7.0).to_bytes(), [0, 128, 255]);
    /// ```
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [quantize(self.r), quantize(self.g), quantize(self.b)]
    }

    /// Lowercase `#rrggbb` form of the rounded 8-bit color.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_bytes();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

#[inline]
fn quantize(channel: f64) -> u8 {
    (channel * 255.0).round().clamp(0.0, 255.0) as u8
}

impl From<LinearRgb> for Srgb {
    /// Apply the sRGB transfer curve. Out-of-gamut channels are clamped.
    fn from(linear: LinearRgb) -> Self {
        Self::new(
            linear_to_srgb(linear.r),
            linear_to_srgb(linear.g),
            linear_to_srgb(linear.b),
        )
    }
}

impl FromStr for Srgb {
    type Err = ParseColorError;

    /// Accepts `#rrggbb` or `#rgb`, with or without the `#`, in any case.
    /// Surrounding whitespace is ignored.
    ///
    /// ```
    /// use perceptual_match::Srgb;
    ///
    /// let teal: Srgb = " #008080".parse().unwrap();
    /// assert_eq!(teal.to_bytes(), [0, 128, 128]);
    ///
    /// let short: Srgb = "0f0".parse().unwrap();
    /// assert_eq!(short.to_bytes(), [0, 255, 0]);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);
        if !digits.is_ascii() {
            return Err(ParseColorError::NonAscii);
        }

        let width = match digits.len() {
            3 => 1,
            6 => 2,
            _ => return Err(ParseColorError::InvalidLength),
        };
        let mut channels = [0u8; 3];
        for (i, channel) in channels.iter_mut().enumerate() {
            let value = u8::from_str_radix(&digits[i * width..(i + 1) * width], 16)?;
            // a single digit d stands for dd
            *channel = if width == 1 { value * 0x11 } else { value };
        }
        Ok(Self::from_bytes(channels))
    }
}
