// Generated LUT tables carry more digits than f64 can hold.
#![allow(clippy::excessive_precision, clippy::module_inception)]

//! perceptual-match: nearest palette color matching under perceptual metrics
//!
//! This library remaps colors onto a fixed palette using one of three
//! standard color-difference formulas, optionally keeping each source
//! color's lightness and/or chroma and taking only the palette's hue.
//!
//! # Quick Start
//!
//! ```
//! use perceptual_match::{ColorSpace, Palette, PixelBuffer, Recolorer, Rgba8, RgbaImage};
//!
//! let palette = Palette::from_hex(&["#282a36", "#f8f8f2", "#ff79c6"], ColorSpace::Oklab)
//!     .unwrap();
//! let recolorer = Recolorer::new(palette).keep_lightness(true);
//!
//! let mut image = RgbaImage::filled(4, 4, Rgba8::new(200, 40, 120, 255));
//! let stats = recolorer.recolor(&mut image, &());
//!
//! assert_eq!(stats.pixels, 16);
//! assert_eq!(stats.cache_misses, 1);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! palette sRGB ──> ColorSpace::to_perceptual ──> Palette (once)
//!
//! pixel sRGB ──> ResolutionCache ──hit──────────────────────────┐
//!                      │                                        │
//!                     miss                                      │
//!                      v                                        v
//!            NearestColorResolver                      write back, keep alpha
//!   (DistanceMetric + PreservationPolicy)                       ^
//!                      │                                        │
//!                      └──── store in cache ────────────────────┘
//! ```
//!
//! # Metrics
//!
//! [`DistanceMetric`] selects CIE76, CIE94 or CIEDE2000. All three read
//! [`PerceptualColor`], which carries the Cartesian and polar forms of a
//! color side by side. Custom metrics implement [`ColorDistance`].
//!
//! # Color Spaces
//!
//! Colors are matched in either Oklab/Oklch or CIE L\*a\*b\*/LCh, chosen
//! per palette with [`ColorSpace`]. The metric formulas are the same in
//! both; only the scale of the numbers differs.

pub mod api;
pub mod color;
pub mod error;
pub mod metric;
pub mod palette;
pub mod remap;
pub mod resolve;


pub use api::Recolorer;
pub use color::{normalize_hue, CieLab, ColorSpace, LinearRgb, Oklab, PerceptualColor, Srgb};
pub use error::ParseNameError;
pub use metric::{ColorDistance, DistanceMetric};
pub use palette::{Palette, PaletteError, ParseColorError};
pub use remap::{remap_pixels, PixelBuffer, ProgressSink, RemapStats, Rgba8, RgbaImage};
pub use resolve::{NearestColorResolver, PreservationPolicy, Resolution, ResolutionCache};
