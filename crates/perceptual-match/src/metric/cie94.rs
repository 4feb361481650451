//! CIE94: chroma-weighted Euclidean distance, graphic-arts constants.
//!
//! <https://en.wikipedia.org/wiki/Color_difference#CIE94>

use crate::color::PerceptualColor;

const K_L: f64 = 1.0;
const K_C: f64 = 1.0;
const K_H: f64 = 1.0;
const K1: f64 = 0.045;
const K2: f64 = 0.015;

/// SC and SH are weighted by `c1`'s chroma alone.
#[inline]
pub(super) fn delta_e(c1: &PerceptualColor, c2: &PerceptualColor) -> f64 {
    let delta_l = c1.l - c2.l;
    let delta_c = c1.c - c2.c;
    let delta_a = c1.a - c2.a;
    let delta_b = c1.b - c2.b;

    // Floating error can push the radicand slightly below zero
    let delta_h = (delta_a * delta_a + delta_b * delta_b - delta_c * delta_c)
        .max(0.0)
        .sqrt();

    let s_l = 1.0;
    let s_c = 1.0 + K1 * c1.c;
    let s_h = 1.0 + K2 * c1.c;

    let l_term = delta_l / (K_L * s_l);
    let c_term = delta_c / (K_C * s_c);
    let h_term = delta_h / (K_H * s_h);

    (l_term * l_term + c_term * c_term + h_term * h_term).sqrt()
}
