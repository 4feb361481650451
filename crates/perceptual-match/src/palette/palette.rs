//! The target palette with precomputed perceptual coordinates.

use std::collections::HashSet;

use super::error::PaletteError;
use crate::color::{ColorSpace, PerceptualColor, Srgb};

/// An ordered set of unique target colors.
///
/// Entries are deduplicated by exact value on construction, keeping the
/// first occurrence, so iteration order is the order colors were given
/// minus repeats. That order is what breaks ties during matching.
///
/// Every entry is lifted into the palette's [`ColorSpace`] once, here, so
/// per-pixel matching never converts palette colors again.
///
/// # Example
///
/// ```
/// use perceptual_match::{ColorSpace, Palette, Srgb};
///
/// let colors = [
///     Srgb::from_u8(0, 0, 0),
///     Srgb::from_u8(255, 255, 255),
///     Srgb::from_u8(0, 0, 0),
/// ];
/// let palette = Palette::new(&colors, ColorSpace::CieLab).unwrap();
///
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette.rgb(1), [255, 255, 255]);
/// ```
#[derive(Debug, Clone)]
pub struct Palette {
    rgb: Vec<[u8; 3]>,
    perceptual: Vec<PerceptualColor>,
    space: ColorSpace,
}

impl Palette {
    /// Create a palette from sRGB colors.
    ///
    /// Colors are quantized to 8 bits per channel before deduplication.
    ///
    /// # Errors
    ///
    /// [`PaletteError::EmptyPalette`] if `colors` is empty.
    pub fn new(colors: &[Srgb], space: ColorSpace) -> Result<Self, PaletteError> {
        let bytes: Vec<[u8; 3]> = colors.iter().map(|c| c.to_bytes()).collect();
        Self::from_bytes(&bytes, space)
    }

    /// Create a palette from 8-bit `[r, g, b]` triples.
    pub fn from_bytes(colors: &[[u8; 3]], space: ColorSpace) -> Result<Self, PaletteError> {
        let mut seen = HashSet::with_capacity(colors.len());
        let rgb: Vec<[u8; 3]> = colors
            .iter()
            .copied()
            .filter(|c| seen.insert(*c))
            .collect();

        if rgb.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }

        let perceptual = rgb.iter().map(|&c| space.to_perceptual(c)).collect();
        Ok(Self {
            rgb,
            perceptual,
            space,
        })
    }

    /// Create a palette from hex strings like `"#FF0000"` or `"#F00"`.
    ///
    /// ```
    /// use perceptual_match::{ColorSpace, Palette};
    ///
    /// let palette = Palette::from_hex(&["#000", "#FFFFFF"], ColorSpace::Oklab).unwrap();
    /// assert_eq!(palette.rgb(0), [0, 0, 0]);
    /// ```
    pub fn from_hex(colors: &[&str], space: ColorSpace) -> Result<Self, PaletteError> {
        let bytes = colors
            .iter()
            .enumerate()
            .map(|(index, s)| {
                s.parse::<Srgb>()
                    .map(Srgb::to_bytes)
                    .map_err(|source| PaletteError::ParseColor { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_bytes(&bytes, space)
    }

    /// Create a palette directly from perceptual coordinates.
    ///
    /// Deduplication compares the coordinates bit for bit. The stored sRGB
    /// for each entry is its gamut-clamped, rounded conversion.
    pub fn from_perceptual(
        colors: &[PerceptualColor],
        space: ColorSpace,
    ) -> Result<Self, PaletteError> {
        let mut seen = HashSet::with_capacity(colors.len());
        let perceptual: Vec<PerceptualColor> = colors
            .iter()
            .copied()
            .filter(|c| seen.insert([c.l.to_bits(), c.a.to_bits(), c.b.to_bits()]))
            .collect();

        if perceptual.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }

        let rgb = perceptual
            .iter()
            .map(|c| space.to_srgb(c).to_bytes())
            .collect();
        Ok(Self {
            rgb,
            perceptual,
            space,
        })
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.perceptual.len()
    }

    /// Always `false`; empty palettes are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.perceptual.is_empty()
    }

    /// Perceptual coordinates of entry `idx`.
    #[inline]
    pub fn color(&self, idx: usize) -> &PerceptualColor {
        &self.perceptual[idx]
    }

    /// 8-bit sRGB of entry `idx`, exactly as supplied.
    #[inline]
    pub fn rgb(&self, idx: usize) -> [u8; 3] {
        self.rgb[idx]
    }

    /// All entries in matching order.
    #[inline]
    pub fn colors(&self) -> &[PerceptualColor] {
        &self.perceptual
    }

    /// The space entries were lifted into.
    #[inline]
    pub fn color_space(&self) -> ColorSpace {
        self.space
    }
}
