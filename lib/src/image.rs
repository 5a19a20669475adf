//! In-memory image wrapper
//!
//! Wraps an RGBA8 pixel buffer and exchanges pixels as [`Color`] values,
//! so palette matching never has to care about the underlying byte layout.

use image::{Rgba, RgbaImage};

use crate::Color;

/// An RGBA8 image whose pixels are read and written as [`Color`] values
#[derive(Debug, Clone)]
pub struct Image {
    buffer: RgbaImage,
}

impl Image {
    /// Wrap an existing RGBA8 pixel buffer
    pub fn from_rgba(buffer: RgbaImage) -> Self {
        Self { buffer }
    }

    /// Image width in pixels
    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    /// Image height in pixels
    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    /// Read the pixel at (x, y) as an sRGB [`Color`]
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is outside the image bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        let px = self.buffer.get_pixel(x, y).0;
        Color::from_rgba8(px[0], px[1], px[2], px[3])
    }

    /// Write a [`Color`] to the pixel at (x, y), quantizing to RGBA8
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is outside the image bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: &Color) {
        self.buffer.put_pixel(x, y, Rgba(color.to_rgba8()));
    }

    /// Borrow the underlying RGBA8 buffer
    pub fn as_rgba(&self) -> &RgbaImage {
        &self.buffer
    }

    /// Mutably borrow the underlying RGBA8 buffer
    pub fn as_rgba_mut(&mut self) -> &mut RgbaImage {
        &mut self.buffer
    }

    /// Take back the underlying RGBA8 buffer
    pub fn into_rgba(self) -> RgbaImage {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ColorSpace;

    #[test]
    fn test_pixel_roundtrip() {
        let mut image = Image::from_rgba(RgbaImage::new(2, 2));
        let color = Color::from_rgba8(178, 123, 99, 200);

        image.set_pixel(1, 0, &color);
        let read = image.pixel(1, 0);

        assert_eq!(read.space(), ColorSpace::Srgb);
        assert_eq!(read.to_rgba8(), [178, 123, 99, 200]);
    }

    #[test]
    fn test_dimensions() {
        let image = Image::from_rgba(RgbaImage::new(3, 5));
        assert_eq!(image.width(), 3);
        assert_eq!(image.height(), 5);
    }

    #[test]
    fn test_set_pixel_from_other_space() {
        let mut image = Image::from_rgba(RgbaImage::new(1, 1));
        let color = Color::from_rgba8(10, 200, 30, 255).to_space(ColorSpace::Lab);

        image.set_pixel(0, 0, &color);
        let px = image.as_rgba().get_pixel(0, 0).0;

        assert!(px[0].abs_diff(10) <= 1);
        assert!(px[1].abs_diff(200) <= 1);
        assert!(px[2].abs_diff(30) <= 1);
        assert_eq!(px[3], 255);
    }
}
