pub mod config;

pub use config::{ConfigOverrides, RecolorConfig, GOGH_BASE_URL};
