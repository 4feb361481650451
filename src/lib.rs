//! imgrecolor - recolor images onto a palette
//!
//! Palette loading, PNG I/O and the async job pipeline around the
//! `perceptual-match` core. This library exposes modules for integration
//! testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
