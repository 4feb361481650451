use crate::error::{ConfigError, RecolorError};
use perceptual_match::{ColorSpace, DistanceMetric};
use serde::Deserialize;
use std::path::Path;

/// Default location of Gogh theme files; `{name}.yml` is appended.
pub const GOGH_BASE_URL: &str = "https://raw.githubusercontent.com/Gogh-Co/Gogh/master/themes";

/// Settings for a recolor run, as loaded from YAML.
///
/// Every field has a default, so an empty file is a valid config. Names
/// (provider, metric, color space) stay strings here and are validated by
/// [`RecolorConfig::metric`] and friends, so a typo in the file is
/// reported the same way as a typo on the command line.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RecolorConfig {
    /// Palette provider: gogh, url, local or text
    pub provider: String,

    /// Color comparison algorithm: CIE76, CIE94 or CIEDE2000
    pub metric: String,

    /// Matching space: oklab or cielab
    pub color_space: String,

    /// Keep each pixel's original lightness
    pub keep_lightness: bool,

    /// Keep each pixel's original chroma
    pub keep_chroma: bool,

    /// Log progress while remapping
    pub show_progress: bool,

    /// Hex colors removed from every palette
    pub excluded_colors: Vec<String>,

    /// Where the gogh provider fetches themes from
    pub gogh_base_url: String,
}

impl Default for RecolorConfig {
    fn default() -> Self {
        Self {
            provider: "gogh".to_string(),
            metric: DistanceMetric::default().to_string(),
            color_space: ColorSpace::default().to_string(),
            keep_lightness: false,
            keep_chroma: false,
            show_progress: true,
            excluded_colors: Vec::new(),
            gogh_base_url: GOGH_BASE_URL.to_string(),
        }
    }
}

/// Command-line values layered over a [`RecolorConfig`].
///
/// `None` leaves the configured value alone.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub provider: Option<String>,
    pub metric: Option<String>,
    pub color_space: Option<String>,
    pub keep_lightness: Option<bool>,
    pub keep_chroma: Option<bool>,
    pub hide_progress: bool,
    /// Added to the configured exclusions, not replacing them
    pub excluded_colors: Vec<String>,
}

impl RecolorConfig {
    /// Apply command-line overrides on top of this config.
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(provider) = overrides.provider {
            self.provider = provider;
        }
        if let Some(metric) = overrides.metric {
            self.metric = metric;
        }
        if let Some(color_space) = overrides.color_space {
            self.color_space = color_space;
        }
        if let Some(keep) = overrides.keep_lightness {
            self.keep_lightness = keep;
        }
        if let Some(keep) = overrides.keep_chroma {
            self.keep_chroma = keep;
        }
        if overrides.hide_progress {
            self.show_progress = false;
        }
        self.excluded_colors.extend(overrides.excluded_colors);
        self
    }

    /// Load a YAML config file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes as unit, not as an empty map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    pub fn metric(&self) -> Result<DistanceMetric, RecolorError> {
        Ok(self.metric.parse()?)
    }

    pub fn color_space(&self) -> Result<ColorSpace, RecolorError> {
        Ok(self.color_space.parse()?)
    }
}
