//! Color palettes and closest-color lookup
//!
//! A [`ColorPalette`] is a non-empty set of colors, typically extracted
//! from a palette (LUT) image. Its core operation is finding the palette
//! entry closest to a given color under a chosen distance space.

use std::collections::HashSet;
use std::path::Path;
use std::slice;

use palette::Srgba;

use crate::color::ColorConverter;
use crate::{image_loader, Color, ColorSpace, Image, RemapError, Result};

/// A non-empty collection of colors used as a remapping target
#[derive(Debug, Clone)]
pub struct ColorPalette {
    colors: Vec<Color>,
}

impl ColorPalette {
    /// Construct a palette from a list of colors
    ///
    /// # Errors
    ///
    /// Returns [`RemapError::EmptyPalette`] if `colors` is empty.
    pub fn new(colors: Vec<Color>) -> Result<Self> {
        if colors.is_empty() {
            return Err(RemapError::EmptyPalette);
        }
        Ok(Self { colors })
    }

    /// Extract a palette from an image, one entry per distinct pixel color
    ///
    /// Duplicate pixel values are collapsed; the first occurrence (in
    /// row-major order) determines the entry's position.
    ///
    /// # Errors
    ///
    /// Returns [`RemapError::EmptyPalette`] for zero-sized images.
    pub fn from_image(image: &Image) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut colors = Vec::new();

        for px in image.as_rgba().pixels() {
            if seen.insert(px.0) {
                colors.push(Color::from_rgba8(px[0], px[1], px[2], px[3]));
            }
        }

        Self::new(colors)
    }

    /// Load an image file and extract its palette
    ///
    /// # Errors
    ///
    /// Returns [`RemapError::ImageLoad`] if the file cannot be decoded,
    /// or [`RemapError::EmptyPalette`] for zero-sized images.
    pub fn from_image_file(path: &Path) -> Result<Self> {
        let image = image_loader::load_image(path)?;
        Self::from_image(&image)
    }

    /// Build a palette from hex color strings (e.g. `["#FF0000", "00FF00"]`)
    ///
    /// All colors are opaque sRGB.
    ///
    /// # Errors
    ///
    /// Returns [`RemapError::InvalidColor`] for malformed hex strings and
    /// [`RemapError::EmptyPalette`] for an empty slice.
    pub fn from_hex_colors(hex: &[&str]) -> Result<Self> {
        let converter = ColorConverter::new();
        let colors = hex
            .iter()
            .map(|h| {
                let srgb = converter.hex_to_srgb(h)?;
                Ok(Color::Srgb(Srgba::new(
                    srgb.red, srgb.green, srgb.blue, 1.0,
                )))
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(colors)
    }

    /// Find the palette entry closest to `other` in the given color space
    ///
    /// Ties keep the earliest entry.
    pub fn find_closest(&self, other: &Color, space: ColorSpace) -> &Color {
        let mut closest = &self.colors[0];
        let mut closest_distance = f32::INFINITY;

        for color in &self.colors {
            let distance = color.distance_in(other, space);
            if distance < closest_distance {
                closest_distance = distance;
                closest = color;
            }
        }

        closest
    }

    /// Number of colors in the palette
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; palettes cannot be constructed empty
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The palette colors in insertion order
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Iterate over the palette colors
    pub fn iter(&self) -> slice::Iter<'_, Color> {
        self.colors.iter()
    }
}

impl<'a> IntoIterator for &'a ColorPalette {
    type Item = &'a Color;
    type IntoIter = slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn test_empty_palette_rejected() {
        let result = ColorPalette::new(Vec::new());
        assert!(matches!(result, Err(RemapError::EmptyPalette)));
    }

    #[test]
    fn test_find_closest_prefers_nearest() {
        let palette =
            ColorPalette::from_hex_colors(&["#000000", "#FFFFFF"]).unwrap();

        let dark = Color::from_rgba8(30, 30, 30, 255);
        let light = Color::from_rgba8(230, 230, 230, 255);

        assert_eq!(
            palette.find_closest(&dark, ColorSpace::Lab).to_rgba8(),
            [0, 0, 0, 255]
        );
        assert_eq!(
            palette.find_closest(&light, ColorSpace::Lab).to_rgba8(),
            [255, 255, 255, 255]
        );
    }

    #[test]
    fn test_find_closest_exact_member() {
        let palette =
            ColorPalette::from_hex_colors(&["#FF0000", "#00FF00", "#0000FF"]).unwrap();
        let green = Color::from_rgba8(0, 255, 0, 255);

        for space in [
            ColorSpace::Srgb,
            ColorSpace::Lab,
            ColorSpace::Oklab,
            ColorSpace::Xyz,
        ] {
            let closest = palette.find_closest(&green, space);
            assert_eq!(closest.to_rgba8(), [0, 255, 0, 255]);
        }
    }

    #[test]
    fn test_from_image_collapses_duplicates() {
        let mut buffer = RgbaImage::new(2, 2);
        buffer.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        buffer.put_pixel(1, 0, Rgba([0, 0, 255, 255]));
        buffer.put_pixel(0, 1, Rgba([255, 0, 0, 255]));
        buffer.put_pixel(1, 1, Rgba([0, 0, 255, 255]));

        let palette = ColorPalette::from_image(&Image::from_rgba(buffer)).unwrap();
        assert_eq!(palette.len(), 2);
        assert!(!palette.is_empty());
    }

    #[test]
    fn test_from_image_zero_sized() {
        let palette = ColorPalette::from_image(&Image::from_rgba(RgbaImage::new(0, 0)));
        assert!(matches!(palette, Err(RemapError::EmptyPalette)));
    }

    #[test]
    fn test_from_hex_colors_invalid() {
        assert!(ColorPalette::from_hex_colors(&["#XYZXYZ"]).is_err());
        assert!(ColorPalette::from_hex_colors(&[]).is_err());
    }

    #[test]
    fn test_iteration() {
        let palette =
            ColorPalette::from_hex_colors(&["#FF0000", "#00FF00", "#0000FF"]).unwrap();
        assert_eq!(palette.iter().count(), 3);
        assert_eq!((&palette).into_iter().count(), 3);
        assert_eq!(palette.colors().len(), 3);
    }
}
