use std::path::PathBuf;

use perceptual_match::{
    Palette, PixelBuffer, ProgressSink, Recolorer, RemapStats, RgbaImage, Srgb,
};

use crate::error::{ImageError, RecolorError};
use crate::models::RecolorConfig;
use crate::rendering::{decode_png, encode_png};
use crate::services::palette_provider::{exclude_colors, PaletteProvider, PaletteSource};
use crate::services::progress;

/// One recolor job: which palette, which files, which settings.
#[derive(Debug, Clone)]
pub struct RecolorRequest {
    /// Palette argument, interpreted by the configured provider
    pub palette: String,
    pub input: PathBuf,
    pub output: PathBuf,
    pub config: RecolorConfig,
}

/// What a finished run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecolorSummary {
    /// Palette size after exclusions and de-duplication
    pub palette_size: usize,
    pub width: usize,
    pub height: usize,
    pub stats: RemapStats,
}

/// Orchestrates palette loading → decode → remap → encode → write
pub struct RecolorPipeline {
    source: PaletteSource,
}

impl RecolorPipeline {
    pub fn new(config: &RecolorConfig) -> Self {
        Self {
            source: PaletteSource::new(config.gogh_base_url.clone()),
        }
    }

    /// Build the palette the request asks for.
    ///
    /// Fails with [`RecolorError::EmptyPalette`] when nothing usable remains
    /// after exclusions.
    pub async fn load_palette(&self, request: &RecolorRequest) -> Result<Palette, RecolorError> {
        let config = &request.config;
        let provider: PaletteProvider = config.provider.parse()?;
        let space = config.color_space()?;

        let colors = self.source.read_colors(provider, &request.palette).await?;
        let found = colors.len();
        let colors = exclude_colors(colors, &config.excluded_colors);
        if colors.len() != found {
            tracing::debug!(removed = found - colors.len(), "Excluded palette colors");
        }

        let palette = Palette::from_bytes(&colors, space)?;
        tracing::info!(%provider, colors = palette.len(), color_space = %space, "Palette ready");
        tracing::debug!(colors = ?palette_hex(&palette), "Palette entries");
        Ok(palette)
    }

    /// Run the whole job. The output file is only written on success.
    pub async fn run(&self, request: &RecolorRequest) -> Result<RecolorSummary, RecolorError> {
        let config = &request.config;
        // Validate names before doing any I/O
        let metric = config.metric()?;
        config.color_space()?;

        let palette = self.load_palette(request).await?;
        let palette_size = palette.len();

        let bytes = tokio::fs::read(&request.input)
            .await
            .map_err(|source| ImageError::Read {
                path: request.input.clone(),
                source,
            })?;
        let image = decode_png(&bytes)?;
        let (width, height) = (image.width(), image.height());
        tracing::info!(
            input = %request.input.display(),
            width,
            height,
            "Loaded image"
        );

        let recolorer = Recolorer::new(palette)
            .metric(metric)
            .keep_lightness(config.keep_lightness)
            .keep_chroma(config.keep_chroma);

        tracing::info!(
            %metric,
            keep_lightness = config.keep_lightness,
            keep_chroma = config.keep_chroma,
            "Computing new colors"
        );
        let (image, stats) = if config.show_progress {
            let (sink, reporter) = progress::start(image.pixel_count());
            match remap_blocking(recolorer, image, sink).await {
                Ok(remapped) => {
                    reporter.finish().await?;
                    remapped
                }
                Err(e) => {
                    reporter.cancel().await;
                    return Err(e);
                }
            }
        } else {
            remap_blocking(recolorer, image, ()).await?
        };
        tracing::debug!(
            pixels = stats.pixels,
            cache_hits = stats.cache_hits,
            cache_misses = stats.cache_misses,
            "Remap finished"
        );

        let png_bytes = tokio::task::spawn_blocking(move || encode_png(&image)).await??;
        tokio::fs::write(&request.output, &png_bytes)
            .await
            .map_err(|source| ImageError::Write {
                path: request.output.clone(),
                source,
            })?;
        tracing::info!(
            output = %request.output.display(),
            bytes = png_bytes.len(),
            "Saved image"
        );

        Ok(RecolorSummary {
            palette_size,
            width,
            height,
            stats,
        })
    }
}

/// Palette entries as `#rrggbb`, in palette order.
fn palette_hex(palette: &Palette) -> Vec<String> {
    (0..palette.len())
        .map(|i| Srgb::from_bytes(palette.rgb(i)).to_hex())
        .collect()
}

/// Run the pixel loop off the async runtime.
///
/// `progress` is moved onto the blocking thread and dropped there when the
/// loop ends.
async fn remap_blocking<P>(
    recolorer: Recolorer,
    mut image: RgbaImage,
    progress: P,
) -> Result<(RgbaImage, RemapStats), RecolorError>
where
    P: ProgressSink + Send + 'static,
{
    let result = tokio::task::spawn_blocking(move || {
        let stats = recolorer.recolor(&mut image, &progress);
        (image, stats)
    })
    .await?;
    Ok(result)
}
