//! The per-pixel remap loop.

use super::image::PixelBuffer;
use crate::metric::ColorDistance;
use crate::resolve::{NearestColorResolver, ResolutionCache};

/// Observer for remap progress.
///
/// `advance` is called after every pixel with the number of pixels done so
/// far, so values strictly increase from 1 to the pixel count. Observers
/// cannot influence the remap.
pub trait ProgressSink {
    fn advance(&self, processed: usize);
}

/// No progress reporting.
impl ProgressSink for () {
    #[inline]
    fn advance(&self, _processed: usize) {}
}

impl<T: ProgressSink + ?Sized> ProgressSink for &T {
    #[inline]
    fn advance(&self, processed: usize) {
        (**self).advance(processed)
    }
}

/// Counters from one [`remap_pixels`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RemapStats {
    /// Pixels visited
    pub pixels: usize,
    /// Pixels answered from the cache
    pub cache_hits: usize,
    /// Pixels that ran the resolver
    pub cache_misses: usize,
}

/// Remap every pixel of `buffer` in place, in raster order.
///
/// Each pixel's color is looked up in `cache` first; on a miss it is
/// resolved and stored. Alpha is copied from the pixel being written,
/// never from the cache.
pub fn remap_pixels<B, M, P>(
    buffer: &mut B,
    resolver: &NearestColorResolver<'_, M>,
    cache: &mut ResolutionCache,
    progress: &P,
) -> RemapStats
where
    B: PixelBuffer + ?Sized,
    M: ColorDistance,
    P: ProgressSink + ?Sized,
{
    let total = buffer.pixel_count();
    let mut stats = RemapStats {
        pixels: total,
        ..RemapStats::default()
    };

    for index in 0..total {
        let pixel = buffer.pixel(index);
        let source = pixel.rgb();

        let resolved = match cache.lookup(source) {
            Some(rgb) => {
                stats.cache_hits += 1;
                rgb
            }
            None => {
                stats.cache_misses += 1;
                let rgb = resolver.resolve_rgb(source);
                cache.store(source, rgb);
                rgb
            }
        };

        buffer.set_pixel(index, pixel.with_rgb(resolved));
        progress.advance(index + 1);
    }

    stats
}
