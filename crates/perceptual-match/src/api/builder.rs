//! Recolorer builder, the ergonomic entry point for the crate.

use crate::metric::DistanceMetric;
use crate::palette::Palette;
use crate::remap::{remap_pixels, PixelBuffer, ProgressSink, RemapStats};
use crate::resolve::{NearestColorResolver, PreservationPolicy, ResolutionCache};

/// High-level palette remapper.
///
/// - Constructor requires a [`Palette`], so there is no empty state
/// - Configuration methods consume and return `self`
/// - [`recolor()`](Self::recolor) takes `&self`, so one recolorer can
///   process many images; each call gets its own cache
///
/// # Example
///
/// ```
/// use perceptual_match::{
///     ColorSpace, DistanceMetric, Palette, PixelBuffer, Recolorer, Rgba8, RgbaImage,
/// };
///
/// let palette = Palette::from_hex(&["#FFFFFF", "#000000"], ColorSpace::CieLab).unwrap();
/// let recolorer = Recolorer::new(palette).metric(DistanceMetric::Cie76);
///
/// let mut image = RgbaImage::filled(2, 2, Rgba8::new(230, 230, 230, 128));
/// let stats = recolorer.recolor(&mut image, &());
///
/// assert_eq!(image.pixel(3), Rgba8::new(255, 255, 255, 128));
/// assert_eq!(stats.cache_misses, 1);
/// ```
#[derive(Debug, Clone)]
pub struct Recolorer {
    palette: Palette,
    metric: DistanceMetric,
    policy: PreservationPolicy,
}

impl Recolorer {
    /// Defaults: CIEDE2000, no lightness or chroma preservation.
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            metric: DistanceMetric::default(),
            policy: PreservationPolicy::default(),
        }
    }

    #[inline]
    pub fn metric(mut self, metric: DistanceMetric) -> Self {
        self.metric = metric;
        self
    }

    /// Keep each source pixel's lightness.
    #[inline]
    pub fn keep_lightness(mut self, keep: bool) -> Self {
        self.policy.keep_lightness = keep;
        self
    }

    /// Keep each source pixel's chroma.
    #[inline]
    pub fn keep_chroma(mut self, keep: bool) -> Self {
        self.policy.keep_chroma = keep;
        self
    }

    #[inline]
    pub fn policy(mut self, policy: PreservationPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    #[inline]
    pub fn distance_metric(&self) -> DistanceMetric {
        self.metric
    }

    #[inline]
    pub fn preservation(&self) -> PreservationPolicy {
        self.policy
    }

    /// A resolver borrowing this recolorer's palette.
    pub fn resolver(&self) -> NearestColorResolver<'_> {
        NearestColorResolver::new(&self.palette, self.metric, self.policy)
    }

    /// Remap `buffer` in place.
    pub fn recolor<B, P>(&self, buffer: &mut B, progress: &P) -> RemapStats
    where
        B: PixelBuffer + ?Sized,
        P: ProgressSink + ?Sized,
    {
        let mut cache = ResolutionCache::new();
        remap_pixels(buffer, &self.resolver(), &mut cache, progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorSpace;
    use crate::remap::{Rgba8, RgbaImage};

    fn palette() -> Palette {
        Palette::from_hex(&["#ff0000", "#00ff00", "#0000ff"], ColorSpace::Oklab).unwrap()
    }

    #[test]
    fn test_defaults() {
        let recolorer = Recolorer::new(palette());
        assert_eq!(recolorer.distance_metric(), DistanceMetric::Ciede2000);
        assert_eq!(recolorer.preservation(), PreservationPolicy::NONE);
        assert_eq!(recolorer.palette().len(), 3);
    }

    #[test]
    fn test_flags_compose() {
        let recolorer = Recolorer::new(palette())
            .keep_chroma(true)
            .keep_lightness(true)
            .keep_lightness(false);
        assert_eq!(recolorer.preservation(), PreservationPolicy::CHROMA);

        let recolorer = recolorer.policy(PreservationPolicy::BOTH);
        assert_eq!(recolorer.preservation(), PreservationPolicy::BOTH);
    }

    #[test]
    fn test_recolor_is_reusable() {
        let recolorer = Recolorer::new(palette()).metric(DistanceMetric::Cie94);

        let mut first = RgbaImage::filled(2, 1, Rgba8::new(240, 20, 10, 255));
        let mut second = first.clone();

        let a = recolorer.recolor(&mut first, &());
        let b = recolorer.recolor(&mut second, &());

        assert_eq!(first, second);
        assert_eq!(first.pixel(0), Rgba8::new(255, 0, 0, 255));
        // each call starts with an empty cache
        assert_eq!(a.cache_misses, 1);
        assert_eq!(b.cache_misses, 1);
    }
}
