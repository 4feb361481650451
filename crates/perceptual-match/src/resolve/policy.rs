//! Lightness and chroma preservation.

use crate::color::PerceptualColor;

/// Which attributes of the source color the resolved color keeps.
///
/// Hue always comes from the palette entry. With both flags off the
/// resolved color is the palette entry itself.
///
/// | keep_lightness | keep_chroma | resolved (L, C, h) |
/// |----------------|-------------|--------------------|
/// | no  | no  | (entry.L, entry.C, entry.h) |
/// | yes | no  | (source.L, entry.C, entry.h) |
/// | no  | yes | (entry.L, source.C, entry.h) |
/// | yes | yes | (source.L, source.C, entry.h) |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct PreservationPolicy {
    pub keep_lightness: bool,
    pub keep_chroma: bool,
}

impl PreservationPolicy {
    /// Pure palette colors.
    pub const NONE: Self = Self::new(false, false);
    pub const LIGHTNESS: Self = Self::new(true, false);
    pub const CHROMA: Self = Self::new(false, true);
    /// Hue substitution only.
    pub const BOTH: Self = Self::new(true, true);

    pub const ALL: [Self; 4] = [Self::NONE, Self::LIGHTNESS, Self::CHROMA, Self::BOTH];

    pub const fn new(keep_lightness: bool, keep_chroma: bool) -> Self {
        Self {
            keep_lightness,
            keep_chroma,
        }
    }

    /// True when [`apply`](Self::apply) returns the entry unchanged.
    #[inline]
    pub fn is_identity(self) -> bool {
        !self.keep_lightness && !self.keep_chroma
    }

    /// Build the color a palette entry stands for when matching `source`.
    pub fn apply(self, entry: &PerceptualColor, source: &PerceptualColor) -> PerceptualColor {
        match (self.keep_lightness, self.keep_chroma) {
            (false, false) => *entry,
            (true, false) => entry.with_lightness(source.l),
            (false, true) => PerceptualColor::from_lch(entry.l, source.c, entry.h),
            (true, true) => PerceptualColor::from_lch(source.l, source.c, entry.h),
        }
    }
}
