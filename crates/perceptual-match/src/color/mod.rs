//! Color types and conversion utilities
//!
//! # Color Spaces
//!
//! - [`Srgb`]: gamma-encoded input/output values
//! - [`LinearRgb`]: linear light, the hub for all conversions
//! - [`Oklab`] and [`CieLab`]: the two perceptual spaces colors can be
//!   matched in, selected with [`ColorSpace`]
//! - [`PerceptualColor`]: a Lab-family color with its LCh form precomputed
//!
//! # Example
//!
//! ```
//! use perceptual_match::{ColorSpace, Srgb};
//!
//! let orange = ColorSpace::CieLab.to_perceptual([255, 128, 0]);
//! assert!(orange.c > 50.0);
//!
//! let back: Srgb = ColorSpace::CieLab.to_srgb(&orange);
//! assert_eq!(back.to_bytes(), [255, 128, 0]);
//! ```

mod lab;
mod linear_rgb;
mod lut;
mod oklab;
mod perceptual;
mod srgb;

pub use lab::CieLab;
pub use linear_rgb::LinearRgb;
pub use oklab::Oklab;
pub use perceptual::{normalize_hue, ColorSpace, PerceptualColor};
pub use srgb::Srgb;
