//! Perceptual color-difference metrics.
//!
//! Three formulas are available through the closed [`DistanceMetric`] enum:
//!
//! | Metric | Cost | Uniformity |
//! |--------|------|------------|
//! | [`Cie76`](DistanceMetric::Cie76) | cheapest | Euclidean in Lab, least uniform |
//! | [`Cie94`](DistanceMetric::Cie94) | moderate | chroma-weighted, asymmetric |
//! | [`Ciede2000`](DistanceMetric::Ciede2000) | highest | hue rotation and singularity handling |
//!
//! All of them take two [`PerceptualColor`]s, which already carry the
//! Cartesian and polar forms each formula reads from.

mod cie76;
mod cie94;
mod ciede2000;

use std::fmt;
use std::str::FromStr;

use crate::color::PerceptualColor;
use crate::error::ParseNameError;

/// Anything that can score how different two colors look.
///
/// The nearest-color resolver is generic over this trait. The first
/// argument is always the color being matched, the second the candidate.
pub trait ColorDistance {
    /// Nonnegative difference; 0 when the colors coincide.
    fn distance(&self, source: &PerceptualColor, candidate: &PerceptualColor) -> f64;
}

impl<T: ColorDistance + ?Sized> ColorDistance for &T {
    #[inline]
    fn distance(&self, source: &PerceptualColor, candidate: &PerceptualColor) -> f64 {
        (**self).distance(source, candidate)
    }
}

/// Color-difference formula used for palette matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceMetric {
    /// CIE 1976 ΔE\*ab: Euclidean distance in Lab.
    Cie76,
    /// CIE 1994 ΔE\*94 with graphic-arts constants.
    ///
    /// The chroma and hue weights use the first color's chroma only, so
    /// `distance(a, b) != distance(b, a)` in general.
    Cie94,
    /// CIEDE2000 ΔE00 (Sharma, Wu & Dalal 2005 implementation notes).
    #[default]
    Ciede2000,
}

impl DistanceMetric {
    /// All metrics, cheapest first.
    pub const ALL: [DistanceMetric; 3] = [
        DistanceMetric::Cie76,
        DistanceMetric::Cie94,
        DistanceMetric::Ciede2000,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DistanceMetric::Cie76 => "CIE76",
            DistanceMetric::Cie94 => "CIE94",
            DistanceMetric::Ciede2000 => "CIEDE2000",
        }
    }
}

impl ColorDistance for DistanceMetric {
    #[inline]
    fn distance(&self, source: &PerceptualColor, candidate: &PerceptualColor) -> f64 {
        match self {
            DistanceMetric::Cie76 => cie76::delta_e(source, candidate),
            DistanceMetric::Cie94 => cie94::delta_e(source, candidate),
            DistanceMetric::Ciede2000 => ciede2000::delta_e(source, candidate),
        }
    }
}

impl fmt::Display for DistanceMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DistanceMetric {
    type Err = ParseNameError;

    /// Case-insensitive: `cie76`, `cie94`, `ciede2000`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseNameError::new("metric", s))
    }
}
