//! CIE76: Euclidean distance in Cartesian Lab.
//!
//! <https://en.wikipedia.org/wiki/Color_difference#CIE76>

use crate::color::PerceptualColor;

#[inline]
pub(super) fn delta_e(c1: &PerceptualColor, c2: &PerceptualColor) -> f64 {
    let dl = c1.l - c2.l;
    let da = c1.a - c2.a;
    let db = c1.b - c2.b;
    (dl * dl + da * da + db * db).sqrt()
}
