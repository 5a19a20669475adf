//! Palette-based image modification
//!
//! [`ImageModifier`] owns an image and rewrites its pixels in place.
//! Lookups are cached per distinct input pixel, so photographic images
//! with many repeated colors only pay for one palette scan per color.

use std::collections::HashMap;

use image::Rgba;

use crate::{Color, ColorPalette, ColorSpace, Image};

/// Applies palette-based color reduction to an owned [`Image`]
#[derive(Debug)]
pub struct ImageModifier {
    image: Image,
    pixels_changed: u64,
}

impl ImageModifier {
    /// Take ownership of an image for modification
    pub fn new(image: Image) -> Self {
        Self {
            image,
            pixels_changed: 0,
        }
    }

    /// Replace every pixel with the closest palette color
    ///
    /// Distances are computed in `space`. The replacement color is
    /// quantized back to RGBA8, so a palette that already contains the
    /// image's exact colors leaves the image unchanged.
    pub fn reduce_colors(&mut self, palette: &ColorPalette, space: ColorSpace) -> &mut Self {
        let mut cache: HashMap<[u8; 4], [u8; 4]> = HashMap::new();
        let (width, height) = (self.image.width(), self.image.height());

        for y in 0..height {
            for x in 0..width {
                let source = self.image.as_rgba().get_pixel(x, y).0;
                let mapped = *cache.entry(source).or_insert_with(|| {
                    let color = Color::from_rgba8(source[0], source[1], source[2], source[3]);
                    palette.find_closest(&color, space).to_rgba8()
                });

                if mapped != source {
                    self.image.as_rgba_mut().put_pixel(x, y, Rgba(mapped));
                    self.pixels_changed += 1;
                }
            }
        }

        self
    }

    /// Number of pixels rewritten so far
    pub fn pixels_changed(&self) -> u64 {
        self.pixels_changed
    }

    /// Borrow the (possibly modified) image
    pub fn image(&self) -> &Image {
        &self.image
    }

    /// Take the modified image back
    pub fn into_image(self) -> Image {
        self.image
    }
}
