//! CIEDE2000 color difference.
//!
//! Follows G. Sharma, W. Wu, E. N. Dalal, "The CIEDE2000 Color-Difference
//! Formula: Implementation Notes, Supplementary Test Data, and Mathematical
//! Observations" (2005), including its zero-chroma and hue-wraparound
//! branches. Every branch below is exercised by the reference table in the
//! tests.

use crate::color::PerceptualColor;

const K_L: f64 = 1.0;
const K_C: f64 = 1.0;
const K_H: f64 = 1.0;

/// 25⁷, shared by the G and R_C terms.
const POW25_7: f64 = 6_103_515_625.0;

/// Hue angle of `(a', b)` in degrees, `0.0..360.0`; 0 for the neutral axis.
#[inline]
fn hue_prime(a_prime: f64, b: f64) -> f64 {
    if b == 0.0 && a_prime == 0.0 {
        return 0.0;
    }
    let h = b.atan2(a_prime).to_degrees();
    if h < 0.0 {
        h + 360.0
    } else {
        h
    }
}

#[inline]
fn cos_deg(degrees: f64) -> f64 {
    degrees.to_radians().cos()
}

pub(super) fn delta_e(c1: &PerceptualColor, c2: &PerceptualColor) -> f64 {
    let (l1, a1, b1) = (c1.l, c1.a, c1.b);
    let (l2, a2, b2) = (c2.l, c2.a, c2.b);

    // 1. Lightness difference and means on the uncorrected chroma
    let delta_l_prime = l2 - l1;
    let bar_l = (l1 + l2) / 2.0;
    let bar_c = (c1.c + c2.c) / 2.0;

    // 2. a' correction
    let bar_c_7 = bar_c.powi(7);
    let g = 0.5 * (1.0 - (bar_c_7 / (bar_c_7 + POW25_7)).sqrt());
    let a1_prime = a1 * (1.0 + g);
    let a2_prime = a2 * (1.0 + g);

    // 3. Corrected chroma
    let c1_prime = (a1_prime * a1_prime + b1 * b1).sqrt();
    let c2_prime = (a2_prime * a2_prime + b2 * b2).sqrt();
    let delta_c_prime = c2_prime - c1_prime;
    let bar_c_prime = (c1_prime + c2_prime) / 2.0;

    // 4. Corrected hue angles
    let h1_prime = hue_prime(a1_prime, b1);
    let h2_prime = hue_prime(a2_prime, b2);

    // 5. Hue difference, wrapped into -180..=180
    let chroma_product = c1_prime * c2_prime;
    let hue_gap = (h1_prime - h2_prime).abs();
    let delta_h_prime = if chroma_product == 0.0 {
        0.0
    } else if hue_gap <= 180.0 {
        h2_prime - h1_prime
    } else if h2_prime <= h1_prime {
        h2_prime - h1_prime + 360.0
    } else {
        h2_prime - h1_prime - 360.0
    };

    // 6. Hue difference on the chroma circle
    let delta_big_h_prime =
        2.0 * chroma_product.sqrt() * (delta_h_prime / 2.0).to_radians().sin();

    // 7. Mean hue
    let bar_h_prime = if chroma_product == 0.0 {
        h1_prime + h2_prime
    } else if hue_gap <= 180.0 {
        (h1_prime + h2_prime) / 2.0
    } else if h1_prime + h2_prime < 360.0 {
        (h1_prime + h2_prime + 360.0) / 2.0
    } else {
        (h1_prime + h2_prime - 360.0) / 2.0
    };

    // 8. Hue weighting
    let t = 1.0 - 0.17 * cos_deg(bar_h_prime - 30.0)
        + 0.24 * cos_deg(2.0 * bar_h_prime)
        + 0.32 * cos_deg(3.0 * bar_h_prime + 6.0)
        - 0.20 * cos_deg(4.0 * bar_h_prime - 63.0);

    // 9. Blue-region rotation angle
    let delta_theta = 30.0 * (-((bar_h_prime - 275.0) / 25.0).powi(2)).exp();

    // 10. Compensation factors
    let bar_l_offset_sq = (bar_l - 50.0).powi(2);
    let s_l = 1.0 + (0.015 * bar_l_offset_sq) / (20.0 + bar_l_offset_sq).sqrt();
    let s_c = 1.0 + 0.045 * bar_c_prime;
    let s_h = 1.0 + 0.015 * bar_c_prime * t;

    // 11. Rotation term
    let bar_c_prime_7 = bar_c_prime.powi(7);
    let r_c = 2.0 * (bar_c_prime_7 / (bar_c_prime_7 + POW25_7)).sqrt();
    let r_t = -r_c * (2.0 * delta_theta).to_radians().sin();

    // 12. Combine
    let l_term = delta_l_prime / (K_L * s_l);
    let c_term = delta_c_prime / (K_C * s_c);
    let h_term = delta_big_h_prime / (K_H * s_h);

    (l_term * l_term + c_term * c_term + h_term * h_term + r_t * c_term * h_term).sqrt()
}
