use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use imgrecolor::models::{ConfigOverrides, RecolorConfig};
use imgrecolor::services::{RecolorPipeline, RecolorRequest};

#[derive(Parser, Debug)]
#[command(name = "imgrecolor", version)]
#[command(about = "Recolor an image with a palette, matching colors by perceptual distance")]
struct Cli {
    /// The palette. Its meaning depends on the provider: a Gogh theme name,
    /// a URL, a file path, or literal text containing hex colors
    #[arg(short = 'p', long)]
    palette: String,

    /// Where the palette comes from: gogh, url, local or text [default: gogh]
    #[arg(short = 'P', long = "palette-provider")]
    palette_provider: Option<String>,

    /// Keep each pixel's original lightness
    #[arg(short = 'l', long = "lightness", overrides_with = "no_lightness")]
    lightness: bool,

    /// Take lightness from the palette color
    #[arg(short = 'L', long = "no-lightness", overrides_with = "lightness")]
    no_lightness: bool,

    /// Keep each pixel's original chroma
    #[arg(short = 'c', long = "chroma", overrides_with = "no_chroma")]
    chroma: bool,

    /// Take chroma from the palette color
    #[arg(short = 'C', long = "no-chroma", overrides_with = "chroma")]
    no_chroma: bool,

    /// Do not log remap progress
    #[arg(long)]
    hide_progress: bool,

    /// Color comparison algorithm: CIE76, CIE94 or CIEDE2000 [default: CIEDE2000]
    #[arg(long = "color-comp-alg")]
    color_comp_alg: Option<String>,

    /// Space colors are compared in: oklab or cielab [default: oklab]
    #[arg(long = "color-space")]
    color_space: Option<String>,

    /// Hex colors to drop from the palette; repeatable or comma separated
    #[arg(short = 'e', long = "excluded-colors")]
    excluded_colors: Vec<String>,

    /// YAML config file with defaults for the options above
    #[arg(long, env = "IMGRECOLOR_CONFIG")]
    config: Option<PathBuf>,

    /// PNG image to read
    input_file: PathBuf,

    /// Where to write the recolored PNG
    output_file: PathBuf,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            provider: self.palette_provider.clone(),
            metric: self.color_comp_alg.clone(),
            color_space: self.color_space.clone(),
            keep_lightness: flag_pair(self.lightness, self.no_lightness),
            keep_chroma: flag_pair(self.chroma, self.no_chroma),
            hide_progress: self.hide_progress,
            excluded_colors: self.excluded_colors.clone(),
        }
    }
}

/// `Some` only when one of the two opposing flags was given.
fn flag_pair(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "imgrecolor=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => RecolorConfig::load(path)?,
        None => RecolorConfig::default(),
    };
    let config = config.with_overrides(cli.overrides());

    let request = RecolorRequest {
        palette: cli.palette,
        input: cli.input_file,
        output: cli.output_file,
        config,
    };

    let pipeline = RecolorPipeline::new(&request.config);
    let summary = pipeline
        .run(&request)
        .await
        .with_context(|| format!("Recoloring {}", request.input.display()))?;

    tracing::info!(
        pixels = summary.stats.pixels,
        palette_colors = summary.palette_size,
        "Done"
    );
    Ok(())
}
