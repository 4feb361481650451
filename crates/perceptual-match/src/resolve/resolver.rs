//! Nearest palette color search with preservation policy.

use super::policy::PreservationPolicy;
use crate::color::PerceptualColor;
use crate::metric::{ColorDistance, DistanceMetric};
use crate::palette::Palette;

/// Outcome of resolving one source color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    /// Index of the winning palette entry
    pub index: usize,
    /// The entry with the preservation policy applied against the source
    pub color: PerceptualColor,
}

/// Finds the palette entry closest to a source color.
///
/// Palette, metric and policy are fixed for the resolver's lifetime, so
/// the same source always resolves to the same result. That is what makes
/// [`ResolutionCache`](super::ResolutionCache) safe.
///
/// # Search
///
/// With more than one entry, every raw entry is scored first, then (unless
/// the policy is the identity) every entry with the policy already applied
/// against the source. Keeping the source's lightness or chroma can change
/// which hue is nearest, so both forms compete. The winner is the first
/// minimum in that order, and the policy is applied once to the winning
/// raw entry.
///
/// A single-entry palette skips scoring entirely.
///
/// # Example
///
/// ```
/// use perceptual_match::{
///     ColorSpace, DistanceMetric, NearestColorResolver, Palette, PreservationPolicy,
/// };
///
/// let palette = Palette::from_hex(&["#FFFFFF", "#000000"], ColorSpace::CieLab).unwrap();
/// let resolver =
///     NearestColorResolver::new(&palette, DistanceMetric::Cie76, PreservationPolicy::NONE);
///
/// assert_eq!(resolver.resolve_rgb([200, 200, 200]), [255, 255, 255]);
/// assert_eq!(resolver.resolve_rgb([20, 20, 20]), [0, 0, 0]);
/// ```
#[derive(Debug, Clone)]
pub struct NearestColorResolver<'p, M = DistanceMetric> {
    palette: &'p Palette,
    metric: M,
    policy: PreservationPolicy,
}

impl<'p, M: ColorDistance> NearestColorResolver<'p, M> {
    pub fn new(palette: &'p Palette, metric: M, policy: PreservationPolicy) -> Self {
        Self {
            palette,
            metric,
            policy,
        }
    }

    #[inline]
    pub fn palette(&self) -> &'p Palette {
        self.palette
    }

    #[inline]
    pub fn metric(&self) -> &M {
        &self.metric
    }

    #[inline]
    pub fn policy(&self) -> PreservationPolicy {
        self.policy
    }

    /// Index of the palette entry `source` resolves to.
    pub fn nearest_index(&self, source: &PerceptualColor) -> usize {
        let entries = self.palette.colors();
        if entries.len() == 1 {
            return 0;
        }

        let mut best_idx = 0;
        let mut best_dist = f64::INFINITY;

        for (i, entry) in entries.iter().enumerate() {
            let dist = self.metric.distance(source, entry);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }

        if !self.policy.is_identity() {
            for (i, entry) in entries.iter().enumerate() {
                let candidate = self.policy.apply(entry, source);
                let dist = self.metric.distance(source, &candidate);
                if dist < best_dist {
                    best_dist = dist;
                    best_idx = i;
                }
            }
        }

        best_idx
    }

    /// Resolve a perceptual source color.
    pub fn resolve(&self, source: &PerceptualColor) -> Resolution {
        let index = self.nearest_index(source);
        Resolution {
            index,
            color: self.policy.apply(self.palette.color(index), source),
        }
    }

    /// Resolve an 8-bit sRGB color to 8-bit sRGB.
    ///
    /// Under the identity policy the winning entry's stored bytes are
    /// returned, so palette members map to themselves exactly. Otherwise
    /// the policy-adjusted color is converted back and gamut-clamped.
    pub fn resolve_rgb(&self, rgb: [u8; 3]) -> [u8; 3] {
        let space = self.palette.color_space();
        let source = space.to_perceptual(rgb);
        let resolution = self.resolve(&source);
        if self.policy.is_identity() {
            self.palette.rgb(resolution.index)
        } else {
            space.to_srgb(&resolution.color).to_bytes()
        }
    }
}
