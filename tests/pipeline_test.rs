//! End-to-end recolor runs through files on disk.

mod common;

use common::fixtures::{gray_ramp, read_image, text_config, BLACK_AND_WHITE};
use common::Workspace;
use imgrecolor::error::{ImageError, PaletteFetchError, RecolorError};
use imgrecolor::services::RecolorPipeline;
use perceptual_match::{PixelBuffer, Rgba8, RgbaImage};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_grays_snap_to_black_and_white() {
    let ws = Workspace::new();
    ws.write_image("in.png", &gray_ramp());
    let request = ws.request(BLACK_AND_WHITE, text_config());

    let summary = RecolorPipeline::new(&request.config)
        .run(&request)
        .await
        .unwrap();
    assert_eq!(summary.palette_size, 2);
    assert_eq!((summary.width, summary.height), (3, 2));
    assert_eq!(summary.stats.pixels, 6);
    assert_eq!(summary.stats.cache_misses, 6);

    let out = read_image(&request.output);
    let expected = [
        Rgba8::new(255, 255, 255, 255),
        Rgba8::new(255, 255, 255, 128),
        Rgba8::new(255, 255, 255, 0),
        Rgba8::new(0, 0, 0, 255),
        Rgba8::new(0, 0, 0, 77),
        Rgba8::new(0, 0, 0, 1),
    ];
    for (i, want) in expected.into_iter().enumerate() {
        assert_eq!(out.pixel(i), want, "pixel {i}");
    }
}

#[tokio::test]
async fn test_progress_logging_does_not_change_output() {
    let ws = Workspace::new();
    ws.write_image("in.png", &gray_ramp());

    let quiet = ws.request(BLACK_AND_WHITE, text_config());
    RecolorPipeline::new(&quiet.config).run(&quiet).await.unwrap();
    let quiet_out = read_image(&quiet.output);

    let mut loud = ws.request(BLACK_AND_WHITE, text_config());
    loud.config.show_progress = true;
    loud.output = ws.path("loud.png");
    RecolorPipeline::new(&loud.config).run(&loud).await.unwrap();

    assert_eq!(read_image(&loud.output), quiet_out);
}

#[tokio::test]
async fn test_palette_image_is_unchanged() {
    let ws = Workspace::new();
    let palette = "#1e1e2e #f38ba8 #a6e3a1 #89b4fa";
    let raw: Vec<u8> = [
        [0x1e, 0x1e, 0x2e, 255],
        [0xf3, 0x8b, 0xa8, 200],
        [0xa6, 0xe3, 0xa1, 255],
        [0x89, 0xb4, 0xfa, 10],
    ]
    .concat();
    let image = RgbaImage::from_raw(2, 2, raw).unwrap();
    ws.write_image("in.png", &image);

    for metric in ["CIE76", "CIE94", "CIEDE2000"] {
        let mut config = text_config();
        config.metric = metric.to_string();
        let request = ws.request(palette, config);
        RecolorPipeline::new(&request.config)
            .run(&request)
            .await
            .unwrap();
        assert_eq!(read_image(&request.output), image, "{metric}");
    }
}

#[tokio::test]
async fn test_local_palette_file() {
    let ws = Workspace::new();
    ws.write_image("in.png", &gray_ramp());
    let palette = ws.write_text("palette.txt", "dark = #000000\nlight = #ffffff\n");

    let mut config = text_config();
    config.provider = "local".to_string();
    let request = ws.request(&palette.display().to_string(), config);

    let summary = RecolorPipeline::new(&request.config)
        .run(&request)
        .await
        .unwrap();
    assert_eq!(summary.palette_size, 2);
    assert_eq!(read_image(&request.output).pixel(0), Rgba8::new(255, 255, 255, 255));
}

#[tokio::test]
async fn test_local_palette_must_be_a_file() {
    let ws = Workspace::new();
    ws.write_image("in.png", &gray_ramp());

    let mut config = text_config();
    config.provider = "local".to_string();
    let request = ws.request(&ws.dir.path().display().to_string(), config);

    let err = RecolorPipeline::new(&request.config)
        .run(&request)
        .await
        .unwrap_err();
    assert!(
        matches!(err, RecolorError::Palette(PaletteFetchError::NotAFile(_))),
        "got {err}"
    );
    assert!(!request.output.exists());
}

#[tokio::test]
async fn test_excluding_every_color_is_fatal() {
    let ws = Workspace::new();
    ws.write_image("in.png", &gray_ramp());

    let mut config = text_config();
    config.excluded_colors = vec!["#000000,#FFFFFF".to_string()];
    let request = ws.request(BLACK_AND_WHITE, config);

    let err = RecolorPipeline::new(&request.config)
        .run(&request)
        .await
        .unwrap_err();
    assert!(matches!(err, RecolorError::EmptyPalette), "got {err}");
    assert!(!request.output.exists());
}

#[tokio::test]
async fn test_text_without_colors_is_fatal() {
    let ws = Workspace::new();
    ws.write_image("in.png", &gray_ramp());
    let request = ws.request("no colors here #12345", text_config());

    let err = RecolorPipeline::new(&request.config)
        .run(&request)
        .await
        .unwrap_err();
    assert!(matches!(err, RecolorError::EmptyPalette), "got {err}");
}

#[tokio::test]
async fn test_missing_input_is_a_read_error() {
    let ws = Workspace::new();
    let request = ws.request(BLACK_AND_WHITE, text_config());

    let err = RecolorPipeline::new(&request.config)
        .run(&request)
        .await
        .unwrap_err();
    assert!(matches!(err, RecolorError::Image(ImageError::Read { .. })), "got {err}");
    assert!(!request.output.exists());
}

#[tokio::test]
async fn test_non_png_input_is_a_decode_error() {
    let ws = Workspace::new();
    ws.write_text("in.png", "GIF89a definitely not a png");
    let request = ws.request(BLACK_AND_WHITE, text_config());

    let err = RecolorPipeline::new(&request.config)
        .run(&request)
        .await
        .unwrap_err();
    assert!(matches!(err, RecolorError::Image(ImageError::Decode(_))), "got {err}");
}

#[tokio::test]
async fn test_unknown_provider_is_rejected() {
    let ws = Workspace::new();
    ws.write_image("in.png", &gray_ramp());
    let mut config = text_config();
    config.provider = "clipboard".to_string();
    let request = ws.request(BLACK_AND_WHITE, config);

    let err = RecolorPipeline::new(&request.config)
        .run(&request)
        .await
        .unwrap_err();
    assert!(matches!(err, RecolorError::UnknownProvider(ref name) if name == "clipboard"));
}

#[tokio::test]
async fn test_cielab_mid_gray_goes_white_with_cie76() {
    let ws = Workspace::new();
    let image = RgbaImage::filled(1, 1, Rgba8::new(128, 128, 128, 255));
    ws.write_image("in.png", &image);

    let mut config = text_config();
    config.metric = "CIE76".to_string();
    config.color_space = "cielab".to_string();
    let request = ws.request(BLACK_AND_WHITE, config);
    RecolorPipeline::new(&request.config)
        .run(&request)
        .await
        .unwrap();

    assert_eq!(read_image(&request.output).pixel(0), Rgba8::new(255, 255, 255, 255));
}
