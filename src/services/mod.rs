pub mod palette_provider;
pub mod progress;
pub mod recolor_pipeline;

pub use palette_provider::{exclude_colors, parse_hex_colors, PaletteProvider, PaletteSource};
pub use progress::{ProgressReporter, WatchProgress};
pub use recolor_pipeline::{RecolorPipeline, RecolorRequest, RecolorSummary};
