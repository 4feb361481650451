//! Palette types and utilities
//!
//! A [`Palette`] is the fixed target set every pixel is remapped onto. It
//! stores each entry both as the 8-bit sRGB it was given and as the
//! [`PerceptualColor`](crate::PerceptualColor) it is matched in.

mod error;
mod palette;

pub use error::{PaletteError, ParseColorError};
pub use palette::Palette;
