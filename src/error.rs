use perceptual_match::{PaletteError, ParseNameError};
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop a recolor run.
///
/// All of these are detected before or after the pixel loop; the loop
/// itself cannot fail.
#[derive(Debug, Error)]
pub enum RecolorError {
    #[error("Invalid option: {0}")]
    InvalidName(#[from] ParseNameError),

    #[error("Unknown palette provider \"{0}\"")]
    UnknownProvider(String),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to read palette: {0}")]
    Palette(#[from] PaletteFetchError),

    #[error("Unable to find any color in the provided palette")]
    EmptyPalette,

    #[error("Image error: {0}")]
    Image(#[from] ImageError),

    #[error("Worker task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl From<PaletteError> for RecolorError {
    fn from(e: PaletteError) -> Self {
        match e {
            PaletteError::EmptyPalette => RecolorError::EmptyPalette,
            other => RecolorError::Palette(PaletteFetchError::Invalid(other.to_string())),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Error)]
pub enum PaletteFetchError {
    #[error("File {} does not exist or is a directory", .0.display())]
    NotAFile(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("Invalid palette: {0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Unable to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unable to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("PNG decode error: {0}")]
    Decode(#[from] png::DecodingError),

    #[error("PNG encode error: {0}")]
    Encode(#[from] png::EncodingError),

    #[error("Unsupported PNG layout: {0}")]
    Unsupported(String),

    #[error("Image too large: {width}x{height}")]
    TooLarge { width: u32, height: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_provider_message() {
        let error = RecolorError::UnknownProvider("ftp".to_string());
        assert_eq!(error.to_string(), "Unknown palette provider \"ftp\"");
    }

    #[test]
    fn test_invalid_name_wraps_core_error() {
        let parse = "CMC".parse::<perceptual_match::DistanceMetric>().unwrap_err();
        let error: RecolorError = parse.into();
        assert_eq!(error.to_string(), "Invalid option: unknown metric \"CMC\"");
    }

    #[test]
    fn test_empty_palette_maps_to_dedicated_variant() {
        let error: RecolorError = PaletteError::EmptyPalette.into();
        assert!(matches!(error, RecolorError::EmptyPalette));
        assert_eq!(
            error.to_string(),
            "Unable to find any color in the provided palette"
        );
    }

    #[test]
    fn test_not_a_file_message() {
        let error = PaletteFetchError::NotAFile(PathBuf::from("/tmp/nope"));
        assert_eq!(
            error.to_string(),
            "File /tmp/nope does not exist or is a directory"
        );
    }

    #[test]
    fn test_status_error_from_fetch_wraps() {
        let error: RecolorError = PaletteFetchError::Status {
            url: "http://x/y".to_string(),
            status: 404,
        }
        .into();
        assert_eq!(
            error.to_string(),
            "Failed to read palette: HTTP status 404 from http://x/y"
        );
    }

    #[test]
    fn test_image_too_large_message() {
        let error = ImageError::TooLarge {
            width: 70000,
            height: 70000,
        };
        assert_eq!(error.to_string(), "Image too large: 70000x70000");
    }
}
