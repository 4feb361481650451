//! Pixel storage the remap driver operates on.

/// One 8-bit RGBA sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// The color channels, without alpha.
    #[inline]
    pub fn rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Same alpha, different color.
    #[inline]
    pub fn with_rgb(self, [r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b, a: self.a }
    }
}

/// A rectangular grid of RGBA samples addressed by linear index.
///
/// Index `i` is row `i / width`, column `i % width`. Implementations must
/// accept any index in `0..width * height`.
pub trait PixelBuffer {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn pixel(&self, index: usize) -> Rgba8;
    fn set_pixel(&mut self, index: usize, pixel: Rgba8);

    /// Total number of pixels.
    fn pixel_count(&self) -> usize {
        self.width() * self.height()
    }
}

/// Owned row-major RGBA8 image, four bytes per pixel.
///
/// # Example
///
/// ```
/// use perceptual_match::{PixelBuffer, Rgba8, RgbaImage};
///
/// let mut image = RgbaImage::filled(3, 2, Rgba8::new(0, 0, 0, 255));
/// image.set_pixel(4, Rgba8::new(9, 8, 7, 6));
///
/// assert_eq!(image.pixel_count(), 6);
/// assert_eq!(&image.as_raw()[16..20], &[9, 8, 7, 6]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaImage {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl RgbaImage {
    /// Wrap raw RGBA bytes. Returns `None` unless `data.len()` is exactly
    /// `width * height * 4`.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Option<Self> {
        let expected = width.checked_mul(height)?.checked_mul(4)?;
        (data.len() == expected).then_some(Self {
            width,
            height,
            data,
        })
    }

    /// An image with every pixel set to `pixel`.
    pub fn filled(width: usize, height: usize, pixel: Rgba8) -> Self {
        let data = [pixel.r, pixel.g, pixel.b, pixel.a].repeat(width * height);
        Self {
            width,
            height,
            data,
        }
    }

    #[inline]
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}

impl PixelBuffer for RgbaImage {
    #[inline]
    fn width(&self) -> usize {
        self.width
    }

    #[inline]
    fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn pixel(&self, index: usize) -> Rgba8 {
        let p = &self.data[index * 4..index * 4 + 4];
        Rgba8::new(p[0], p[1], p[2], p[3])
    }

    #[inline]
    fn set_pixel(&mut self, index: usize, pixel: Rgba8) {
        self.data[index * 4..index * 4 + 4].copy_from_slice(&[pixel.r, pixel.g, pixel.b, pixel.a]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_checks_length() {
        assert!(RgbaImage::from_raw(2, 2, vec![0; 16]).is_some());
        assert!(RgbaImage::from_raw(2, 2, vec![0; 15]).is_none());
        assert!(RgbaImage::from_raw(usize::MAX, 2, vec![]).is_none());
    }

    #[test]
    fn test_pixels_are_row_major() {
        let data: Vec<u8> = (0..24).collect();
        let image = RgbaImage::from_raw(3, 2, data).unwrap();
        // row 1, column 0
        assert_eq!(image.pixel(3), Rgba8::new(12, 13, 14, 15));
        assert_eq!(image.width(), 3);
        assert_eq!(image.height(), 2);
    }

    #[test]
    fn test_with_rgb_keeps_alpha() {
        let p = Rgba8::new(1, 2, 3, 40);
        assert_eq!(p.with_rgb([7, 8, 9]), Rgba8::new(7, 8, 9, 40));
        assert_eq!(p.rgb(), [1, 2, 3]);
    }

    #[test]
    fn test_empty_image() {
        let image = RgbaImage::filled(0, 5, Rgba8::default());
        assert_eq!(image.pixel_count(), 0);
        assert!(image.into_raw().is_empty());
    }
}
