//! Public API for the perceptual-match crate.
//!
//! [`Recolorer`] bundles a palette with a metric and preservation policy
//! and runs the remap driver with a fresh cache per image.

mod builder;

pub use builder::Recolorer;
