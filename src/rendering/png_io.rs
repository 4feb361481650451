use crate::error::ImageError;
use perceptual_match::{PixelBuffer, RgbaImage};

/// Decode a PNG of any color type and bit depth into RGBA8.
///
/// Palette, low-bit-depth and tRNS images are expanded and 16-bit
/// channels are reduced to 8 bits before widening to four channels.
pub fn decode_png(bytes: &[u8]) -> Result<RgbaImage, ImageError> {
    let mut decoder = png::Decoder::new(bytes);
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder.read_info()?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    buf.truncate(info.buffer_size());

    let rgba: Vec<u8> = match info.color_type {
        png::ColorType::Rgba => buf,
        png::ColorType::Rgb => buf
            .chunks_exact(3)
            .flat_map(|p| [p[0], p[1], p[2], 255])
            .collect(),
        png::ColorType::GrayscaleAlpha => buf
            .chunks_exact(2)
            .flat_map(|p| [p[0], p[0], p[0], p[1]])
            .collect(),
        png::ColorType::Grayscale => buf.iter().flat_map(|&v| [v, v, v, 255]).collect(),
        png::ColorType::Indexed => {
            return Err(ImageError::Unsupported(
                "indexed data left unexpanded".to_string(),
            ))
        }
    };

    tracing::debug!(
        width = info.width,
        height = info.height,
        source_color_type = ?info.color_type,
        "Decoded PNG"
    );

    RgbaImage::from_raw(info.width as usize, info.height as usize, rgba).ok_or_else(|| {
        ImageError::Unsupported(format!(
            "{}x{} frame does not match its pixel data",
            info.width, info.height
        ))
    })
}

/// Encode an RGBA8 image as PNG.
///
/// The first pass uses fast settings; oxipng then re-compresses the result.
/// If oxipng fails the fast encoding is returned as is.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, ImageError> {
    let (width, height) = match (u32::try_from(image.width()), u32::try_from(image.height())) {
        (Ok(w), Ok(h)) => (w, h),
        _ => {
            return Err(ImageError::TooLarge {
                width: image.width().min(u32::MAX as usize) as u32,
                height: image.height().min(u32::MAX as usize) as u32,
            })
        }
    };

    let mut png_bytes = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut png_bytes, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        encoder.set_filter(png::FilterType::NoFilter);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(image.as_raw())?;
    }

    let optimized = oxipng::optimize_from_memory(
        &png_bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            ..Default::default()
        },
    );
    match optimized {
        Ok(bytes) => {
            tracing::debug!(before = png_bytes.len(), after = bytes.len(), "Recompressed PNG");
            Ok(bytes)
        }
        Err(e) => {
            tracing::warn!(%e, "oxipng failed, keeping fast encoding");
            Ok(png_bytes)
        }
    }
}
