//! Temporary files for pipeline tests.

use std::path::{Path, PathBuf};

use imgrecolor::models::RecolorConfig;
use imgrecolor::rendering::{decode_png, encode_png};
use imgrecolor::services::RecolorRequest;
use perceptual_match::{Rgba8, RgbaImage};
use tempfile::TempDir;

/// Palette used by most tests
pub const BLACK_AND_WHITE: &str = "#000000 #FFFFFF";

/// A Gogh-style theme file
pub const GOGH_THEME: &str = r##"---
name: 'Test Theme'
color_01: '#000000'
color_02: '#CC0000'
color_03: '#000000'
background: '#FFFFFF'
foreground: '#ffffff'
cursor: '#CC0000'
"##;

/// A scratch directory holding input and output images.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write `image` as PNG and return its path.
    pub fn write_image(&self, name: &str, image: &RgbaImage) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, encode_png(image).expect("encode")).expect("write png");
        path
    }

    pub fn write_text(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, content).expect("write text");
        path
    }

    /// A request reading `in.png` and writing `out.png` in this workspace.
    pub fn request(&self, palette: &str, config: RecolorConfig) -> RecolorRequest {
        RecolorRequest {
            palette: palette.to_string(),
            input: self.path("in.png"),
            output: self.path("out.png"),
            config,
        }
    }
}

pub fn read_image(path: &Path) -> RgbaImage {
    decode_png(&std::fs::read(path).expect("read png")).expect("decode png")
}

/// Two rows: light and dark grays, with varying alpha.
pub fn gray_ramp() -> RgbaImage {
    let pixels = [
        Rgba8::new(200, 200, 200, 255),
        Rgba8::new(180, 180, 180, 128),
        Rgba8::new(160, 160, 160, 0),
        Rgba8::new(30, 30, 30, 255),
        Rgba8::new(50, 50, 50, 77),
        Rgba8::new(20, 20, 20, 1),
    ];
    let raw = pixels
        .iter()
        .flat_map(|p| [p.r, p.g, p.b, p.a])
        .collect();
    RgbaImage::from_raw(3, 2, raw).expect("3x2 image")
}

/// Config for the text provider with progress logging off.
pub fn text_config() -> RecolorConfig {
    RecolorConfig {
        provider: "text".to_string(),
        show_progress: false,
        ..RecolorConfig::default()
    }
}
