//! Oklab (Björn Ottosson, 2020; matrices as revised 2021-01-25).
//!
//! <https://bottosson.github.io/posts/oklab/>
//!
//! In-gamut lightness spans 0.0..=1.0, so distances measured here are about
//! a hundredth of the CIE L\*a\*b\* distance for the same pair of colors.

use super::linear_rgb::LinearRgb;

/// Cartesian Oklab coordinates. Values are not clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklab {
    /// Lightness
    pub l: f64,
    /// Green (negative) to red (positive)
    pub a: f64,
    /// Blue (negative) to yellow (positive)
    pub b: f64,
}

impl Oklab {
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }
}

impl From<LinearRgb> for Oklab {
    fn from(rgb: LinearRgb) -> Self {
        // cone response
        let l = 0.4122214708 * rgb.r + 0.5363325363 * rgb.g + 0.0514459929 * rgb.b;
        let m = 0.2119034982 * rgb.r + 0.6806995451 * rgb.g + 0.1073969566 * rgb.b;
        let s = 0.0883024619 * rgb.r + 0.2817188376 * rgb.g + 0.6299787005 * rgb.b;

        let l_ = l.cbrt();
        let m_ = m.cbrt();
        let s_ = s.cbrt();

        Oklab {
            l: 0.2104542553 * l_ + 0.7936177850 * m_ - 0.0040720468 * s_,
            a: 1.9779984951 * l_ - 2.4285922050 * m_ + 0.4505937099 * s_,
            b: 0.0259040371 * l_ + 0.7827717662 * m_ - 0.8086757660 * s_,
        }
    }
}

impl From<Oklab> for LinearRgb {
    /// Not clamped; callers gamut-map on the way to sRGB.
    fn from(lab: Oklab) -> Self {
        let l_ = lab.l + 0.3963377774 * lab.a + 0.2158037573 * lab.b;
        let m_ = lab.l - 0.1055613458 * lab.a - 0.0638541728 * lab.b;
        let s_ = lab.l - 0.0894841775 * lab.a - 1.2914855480 * lab.b;

        let l = l_ * l_ * l_;
        let m = m_ * m_ * m_;
        let s = s_ * s_ * s_;

        LinearRgb {
            r: 4.0767416621 * l - 3.3077115913 * m + 0.2309699292 * s,
            g: -1.2684380046 * l + 2.6097574011 * m - 0.3413193965 * s,
            b: -0.0041960863 * l - 0.7034186147 * m + 1.7076147010 * s,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Srgb;

    #[test]
    fn test_agrees_with_palette_crate() {
        use palette::{IntoColor, LinSrgb, Oklab as Reference};

        for (r, g, b) in [
            (1.0, 0.0, 0.0),
            (0.0, 1.0, 0.0),
            (0.0, 0.0, 1.0),
            (0.5, 0.5, 0.5),
            (0.9, 0.1, 0.6),
        ] {
            let ours = Oklab::from(LinearRgb::new(r, g, b));
            let theirs: Reference<f64> = LinSrgb::<f64>::new(r, g, b).into_color();
            let err = (ours.l - theirs.l)
                .abs()
                .max((ours.a - theirs.a).abs())
                .max((ours.b - theirs.b).abs());
            assert!(err < 1e-6, "({r}, {g}, {b}): ours={ours:?} palette={theirs:?}");
        }
    }

    /// The published matrices are rounded to 10 digits, so they are only
    /// inverse to about 1e-7.
    #[test]
    fn test_linear_round_trip() {
        for (r, g, b) in [(0.0, 1.0, 1.0), (0.25, 0.25, 0.25), (0.9, 0.1, 0.6)] {
            let back = LinearRgb::from(Oklab::from(LinearRgb::new(r, g, b)));
            assert!((back.r - r).abs() < 1e-6);
            assert!((back.g - g).abs() < 1e-6);
            assert!((back.b - b).abs() < 1e-6);
        }
    }

    #[test]
    fn test_bytes_survive_the_trip() {
        for bytes in [[255, 128, 64], [3, 7, 250], [90, 90, 90], [0, 255, 0]] {
            let oklab = Oklab::from(LinearRgb::from_bytes(bytes));
            assert_eq!(Srgb::from(LinearRgb::from(oklab)).to_bytes(), bytes);
        }
    }

    #[test]
    fn test_neutral_axis() {
        let white = Oklab::from(LinearRgb::new(1.0, 1.0, 1.0));
        assert!((white.l - 1.0).abs() < 1e-6);
        assert!(white.a.abs() < 1e-6 && white.b.abs() < 1e-6);
        assert_eq!(Oklab::from(LinearRgb::new(0.0, 0.0, 0.0)), Oklab::new(0.0, 0.0, 0.0));
    }
}
