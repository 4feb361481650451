//! CIE L\*a\*b\* (D65) color space
//!
//! The classic colorimetric space the CIE76, CIE94 and CIEDE2000 formulas
//! were published against. Lightness runs 0..=100.

use super::linear_rgb::LinearRgb;

/// D65 reference white in XYZ, Y normalized to 1.
const WHITE_X: f64 = 0.95047;
const WHITE_Y: f64 = 1.0;
const WHITE_Z: f64 = 1.08883;

/// 6/29, the knee of the L\*a\*b\* companding function.
const DELTA: f64 = 6.0 / 29.0;

/// A color in CIE L\*a\*b\* space relative to the D65 white point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CieLab {
    /// Lightness: 0.0 (black) to 100.0 (white)
    pub l: f64,
    /// Green-red axis
    pub a: f64,
    /// Blue-yellow axis
    pub b: f64,
}

impl CieLab {
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }
}

fn compand(t: f64) -> f64 {
    if t > DELTA * DELTA * DELTA {
        t.cbrt()
    } else {
        t / (3.0 * DELTA * DELTA) + 4.0 / 29.0
    }
}

fn expand(t: f64) -> f64 {
    if t > DELTA {
        t * t * t
    } else {
        3.0 * DELTA * DELTA * (t - 4.0 / 29.0)
    }
}

impl From<LinearRgb> for CieLab {
    fn from(rgb: LinearRgb) -> Self {
        // Linear sRGB to XYZ (D65)
        let x = 0.4124564 * rgb.r + 0.3575761 * rgb.g + 0.1804375 * rgb.b;
        let y = 0.2126729 * rgb.r + 0.7151522 * rgb.g + 0.0721750 * rgb.b;
        let z = 0.0193339 * rgb.r + 0.1191920 * rgb.g + 0.9503041 * rgb.b;

        let fx = compand(x / WHITE_X);
        let fy = compand(y / WHITE_Y);
        let fz = compand(z / WHITE_Z);

        CieLab {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

impl From<CieLab> for LinearRgb {
    /// The result is not clamped.
    fn from(lab: CieLab) -> Self {
        let fy = (lab.l + 16.0) / 116.0;
        let fx = fy + lab.a / 500.0;
        let fz = fy - lab.b / 200.0;

        let x = WHITE_X * expand(fx);
        let y = WHITE_Y * expand(fy);
        let z = WHITE_Z * expand(fz);

        // XYZ (D65) to linear sRGB
        LinearRgb {
            r: 3.2404542 * x - 1.5371385 * y - 0.4985314 * z,
            g: -0.9692660 * x + 1.8760108 * y + 0.0415560 * z,
            b: 0.0556434 * x - 0.2040259 * y + 1.0572252 * z,
        }
    }
}
