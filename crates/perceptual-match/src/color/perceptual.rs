//! Representation-agnostic perceptual color value.
//!
//! Every metric needs both the Cartesian (L, a, b) and the polar (L, C, h)
//! form of each color. [`PerceptualColor`] carries both, computed once when
//! the color is lifted, so per-comparison work is arithmetic only.

use std::fmt;
use std::str::FromStr;

use super::lab::CieLab;
use super::linear_rgb::LinearRgb;
use super::oklab::Oklab;
use super::srgb::Srgb;
use crate::error::ParseNameError;

/// A color in a Lab-family space with its derived LCh form.
///
/// `h` is in degrees, canonicalized to `0.0..360.0`. For achromatic colors
/// (`a == b == 0`) the hue is 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerceptualColor {
    /// Lightness
    pub l: f64,
    /// First chromatic axis
    pub a: f64,
    /// Second chromatic axis
    pub b: f64,
    /// Chroma, `sqrt(a² + b²)`
    pub c: f64,
    /// Hue angle in degrees, `atan2(b, a)` in `0.0..360.0`
    pub h: f64,
}

impl PerceptualColor {
    /// Build from Cartesian coordinates, deriving chroma and hue.
    ///
    /// ```
    /// use perceptual_match::PerceptualColor;
    ///
    /// let c = PerceptualColor::from_lab(50.0, 0.0, -10.0);
    /// assert_eq!(c.c, 10.0);
    /// assert!((c.h - 270.0).abs() < 1e-9);
    /// ```
    pub fn from_lab(l: f64, a: f64, b: f64) -> Self {
        Self {
            l,
            a,
            b,
            c: (a * a + b * b).sqrt(),
            h: normalize_hue(b.atan2(a).to_degrees()),
        }
    }

    /// Build from polar coordinates, deriving the Cartesian axes.
    pub fn from_lch(l: f64, c: f64, h: f64) -> Self {
        let h = normalize_hue(h);
        let rad = h.to_radians();
        Self {
            l,
            a: c * rad.cos(),
            b: c * rad.sin(),
            c,
            h,
        }
    }

    /// Same chroma and hue with a different lightness.
    ///
    /// Lightness is independent of the chromatic axes, so `a`, `b`, `c`
    /// and `h` are copied unchanged.
    #[inline]
    pub fn with_lightness(self, l: f64) -> Self {
        Self { l, ..self }
    }

    /// Same lightness and hue with a different chroma.
    #[inline]
    pub fn with_chroma(self, c: f64) -> Self {
        Self::from_lch(self.l, c, self.h)
    }
}

/// Wrap a hue angle in degrees into `0.0..360.0`.
pub fn normalize_hue(degrees: f64) -> f64 {
    let h = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if h >= 360.0 {
        0.0
    } else {
        h
    }
}

/// The perceptual space colors are lifted into before matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorSpace {
    /// Oklab / Oklch (Ottosson). Lightness 0..=1.
    #[default]
    Oklab,
    /// CIE L\*a\*b\* / LCh(ab), D65. Lightness 0..=100.
    CieLab,
}

impl ColorSpace {
    /// Lift 8-bit sRGB into this space.
    pub fn to_perceptual(self, rgb: [u8; 3]) -> PerceptualColor {
        let linear = LinearRgb::from_bytes(rgb);
        match self {
            ColorSpace::Oklab => {
                let lab = Oklab::from(linear);
                PerceptualColor::from_lab(lab.l, lab.a, lab.b)
            }
            ColorSpace::CieLab => {
                let lab = CieLab::from(linear);
                PerceptualColor::from_lab(lab.l, lab.a, lab.b)
            }
        }
    }

    /// Convert back to sRGB. Out-of-gamut colors are clamped per channel.
    pub fn to_srgb(self, color: &PerceptualColor) -> Srgb {
        let linear = match self {
            ColorSpace::Oklab => LinearRgb::from(Oklab::new(color.l, color.a, color.b)),
            ColorSpace::CieLab => LinearRgb::from(CieLab::new(color.l, color.a, color.b)),
        };
        Srgb::from(linear)
    }

    pub fn name(self) -> &'static str {
        match self {
            ColorSpace::Oklab => "oklab",
            ColorSpace::CieLab => "cielab",
        }
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorSpace {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "oklab" | "oklch" => Ok(ColorSpace::Oklab),
            "cielab" | "lab" | "cielch" | "lch" => Ok(ColorSpace::CieLab),
            _ => Err(ParseNameError::new("color space", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_lab_derives_polar_form() {
        let c = PerceptualColor::from_lab(60.0, 3.0, 4.0);
        assert_eq!(c.c, 5.0);
        assert!((c.h - 53.130102354155978).abs() < 1e-9);
    }

    #[test]
    fn test_hue_is_canonicalized() {
        let c = PerceptualColor::from_lab(50.0, 1.0, -1.0);
        assert!((c.h - 315.0).abs() < 1e-9);

        let c = PerceptualColor::from_lch(50.0, 10.0, -90.0);
        assert!((c.h - 270.0).abs() < 1e-9);

        let c = PerceptualColor::from_lch(50.0, 10.0, 725.0);
        assert!((c.h - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_achromatic_hue_is_zero() {
        let gray = PerceptualColor::from_lab(40.0, 0.0, 0.0);
        assert_eq!(gray.c, 0.0);
        assert_eq!(gray.h, 0.0);
    }

    #[test]
    fn test_lch_round_trip() {
        let original = PerceptualColor::from_lab(70.0, -12.5, 33.0);
        let rebuilt = PerceptualColor::from_lch(original.l, original.c, original.h);
        assert!((original.a - rebuilt.a).abs() < 1e-12);
        assert!((original.b - rebuilt.b).abs() < 1e-12);
    }

    #[test]
    fn test_with_lightness_keeps_chromatic_axes() {
        let c = PerceptualColor::from_lab(30.0, 10.0, -20.0);
        let lighter = c.with_lightness(80.0);
        assert_eq!(lighter.l, 80.0);
        assert_eq!((lighter.a, lighter.b, lighter.c, lighter.h), (c.a, c.b, c.c, c.h));
    }

    #[test]
    fn test_with_chroma_keeps_hue() {
        let c = PerceptualColor::from_lch(50.0, 20.0, 140.0);
        let muted = c.with_chroma(5.0);
        assert_eq!(muted.l, 50.0);
        assert!((muted.c - 5.0).abs() < 1e-12);
        assert!((muted.h - 140.0).abs() < 1e-9);
    }

    #[test]
    fn test_palette_members_round_trip_in_both_spaces() {
        for space in [ColorSpace::Oklab, ColorSpace::CieLab] {
            for rgb in [[0, 0, 0], [255, 255, 255], [200, 30, 90], [17, 140, 250]] {
                let color = space.to_perceptual(rgb);
                assert_eq!(space.to_srgb(&color).to_bytes(), rgb, "{space} {rgb:?}");
            }
        }
    }

    #[test]
    fn test_color_space_names() {
        assert_eq!("OKLAB".parse::<ColorSpace>().unwrap(), ColorSpace::Oklab);
        assert_eq!("cielab".parse::<ColorSpace>().unwrap(), ColorSpace::CieLab);
        let err = "hsv".parse::<ColorSpace>().unwrap_err();
        assert_eq!(err.to_string(), "unknown color space \"hsv\"");
    }
}
