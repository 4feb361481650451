//! Whole-image remapping.
//!
//! [`remap_pixels`] walks any [`PixelBuffer`] in raster order, resolving
//! each color through a [`ResolutionCache`](crate::ResolutionCache) and
//! writing the result back in place.

mod driver;
mod image;

pub use driver::{remap_pixels, ProgressSink, RemapStats};
pub use image::{PixelBuffer, Rgba8, RgbaImage};
