//! Palette acquisition: fetch raw text from a provider and pull hex colors
//! out of it.

use crate::error::{PaletteFetchError, RecolorError};
use regex::Regex;
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;

/// Where the `-p` argument is looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteProvider {
    /// A theme name from the Gogh repository
    Gogh,
    /// Any URL returning text with hex colors in it
    Url,
    /// A local file with hex colors in it
    Local,
    /// The argument itself, e.g. `#282a36,#f8f8f2`
    Text,
}

impl PaletteProvider {
    pub const ALL: [PaletteProvider; 4] = [
        PaletteProvider::Gogh,
        PaletteProvider::Url,
        PaletteProvider::Local,
        PaletteProvider::Text,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PaletteProvider::Gogh => "gogh",
            PaletteProvider::Url => "url",
            PaletteProvider::Local => "local",
            PaletteProvider::Text => "text",
        }
    }
}

impl fmt::Display for PaletteProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaletteProvider {
    type Err = RecolorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| RecolorError::UnknownProvider(s.to_string()))
    }
}

fn hex_color_regex() -> &'static Regex {
    static HEX_COLOR: OnceLock<Regex> = OnceLock::new();
    HEX_COLOR.get_or_init(|| Regex::new(r"#[a-fA-F0-9]{6}").expect("static regex is valid"))
}

/// Extract every `#RRGGBB` token from `raw`.
///
/// Matches anywhere in the text, case-insensitively; shorthand `#RGB` is
/// not recognized. Repeats are dropped, keeping first-occurrence order.
pub fn parse_hex_colors(raw: &str) -> Vec<[u8; 3]> {
    let mut seen = HashSet::new();
    hex_color_regex()
        .find_iter(raw)
        .filter_map(|m| {
            let hex = &m.as_str()[1..];
            let value = u32::from_str_radix(hex, 16).ok()?;
            Some([(value >> 16) as u8, (value >> 8) as u8, value as u8])
        })
        .filter(|rgb| seen.insert(*rgb))
        .collect()
}

/// Drop every color named in `excluded`.
///
/// Each entry may itself be a comma-separated list; anything that is not a
/// `#RRGGBB` token is ignored.
pub fn exclude_colors(colors: Vec<[u8; 3]>, excluded: &[String]) -> Vec<[u8; 3]> {
    let excluded: HashSet<[u8; 3]> = excluded
        .iter()
        .flat_map(|entry| parse_hex_colors(entry))
        .collect();
    if excluded.is_empty() {
        return colors;
    }
    colors.into_iter().filter(|c| !excluded.contains(c)).collect()
}

/// Fetches palette text for each provider.
#[derive(Debug, Clone)]
pub struct PaletteSource {
    client: reqwest::Client,
    gogh_base_url: String,
}

impl PaletteSource {
    pub fn new(gogh_base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            gogh_base_url: gogh_base_url.into(),
        }
    }

    /// URL of a Gogh theme file.
    pub fn gogh_theme_url(&self, name: &str) -> Result<reqwest::Url, PaletteFetchError> {
        let mut url = reqwest::Url::parse(&self.gogh_base_url)
            .map_err(|e| PaletteFetchError::Invalid(format!("bad Gogh base URL: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| PaletteFetchError::Invalid("bad Gogh base URL".to_string()))?
            .pop_if_empty()
            .push(&format!("{name}.yml"));
        Ok(url)
    }

    /// Raw text the provider yields for `palette`.
    pub async fn fetch_text(
        &self,
        provider: PaletteProvider,
        palette: &str,
    ) -> Result<String, PaletteFetchError> {
        match provider {
            PaletteProvider::Gogh => {
                let url = self.gogh_theme_url(palette)?;
                self.get(url).await
            }
            PaletteProvider::Url => {
                let url = reqwest::Url::parse(palette).map_err(|e| {
                    PaletteFetchError::Invalid(format!("The provided url ({palette}) is invalid: {e}"))
                })?;
                self.get(url).await
            }
            PaletteProvider::Local => read_local(Path::new(palette)).await,
            PaletteProvider::Text => Ok(palette.to_string()),
        }
    }

    /// Fetch and parse, returning unique colors in first-seen order.
    pub async fn read_colors(
        &self,
        provider: PaletteProvider,
        palette: &str,
    ) -> Result<Vec<[u8; 3]>, PaletteFetchError> {
        let text = self.fetch_text(provider, palette).await?;
        let colors = parse_hex_colors(&text);
        tracing::debug!(%provider, colors = colors.len(), "Parsed palette colors");
        Ok(colors)
    }

    async fn get(&self, url: reqwest::Url) -> Result<String, PaletteFetchError> {
        tracing::debug!(%url, "Fetching palette");
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PaletteFetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response.text().await?)
    }
}

async fn read_local(path: &Path) -> Result<String, PaletteFetchError> {
    match tokio::fs::metadata(path).await {
        Ok(meta) if meta.is_file() => Ok(tokio::fs::read_to_string(path).await?),
        _ => Err(PaletteFetchError::NotAFile(path.to_path_buf())),
    }
}
