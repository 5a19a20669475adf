//! # lesscolors
//!
//! A Rust crate for reducing the colors of an image to the closest
//! matches from a color palette.
//!
//! The palette is itself an image (often called a LUT image): every
//! distinct pixel color becomes a palette entry. Each pixel of the input
//! is then replaced by the palette color with the smallest distance,
//! computed by default as CIEDE2000 in CIE L*a*b* space.
//!
//! ## Example
//!
//! ```rust,no_run
//! use lesscolors::{reduce_image_colors, RemapConfig};
//! use std::path::Path;
//!
//! let report = reduce_image_colors(
//!     Path::new("photo.png"),
//!     Path::new("palette.png"),
//!     Path::new("out.png"),
//!     &RemapConfig::default(),
//! )?;
//! println!("changed {} of {} pixels", report.pixels_changed, report.width * report.height);
//! # Ok::<(), lesscolors::RemapError>(())
//! ```

use std::path::Path;
use std::time::Instant;

use serde::{Deserialize, Serialize};

pub mod color;
pub mod config;
pub mod error;
pub mod image;
pub mod image_loader;
pub mod modifier;
pub mod palette;

pub use crate::color::{Color, ColorConverter, ColorSpace};
pub use crate::config::RemapConfig;
pub use crate::error::{RemapError, Result};
pub use crate::image::Image;
pub use crate::image_loader::OutputFormat;
pub use crate::modifier::ImageModifier;
pub use crate::palette::ColorPalette;

/// Summary of a completed palette remap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemapReport {
    /// Input (and output) image width in pixels
    pub width: u32,
    /// Input (and output) image height in pixels
    pub height: u32,
    /// Number of distinct colors in the palette
    pub palette_size: usize,
    /// Number of pixels that received a different color
    pub pixels_changed: u64,
    /// Color space the distances were computed in
    pub distance_space: ColorSpace,
    /// Wall-clock processing time in milliseconds
    pub elapsed_ms: u64,
}

/// Reduce an image's colors to the closest matches from a palette image
///
/// This is the main entry point. It loads the palette image and the
/// input image, replaces every input pixel with the closest palette
/// color, and writes the result to `output`.
///
/// # Arguments
///
/// * `input` - path to the image to process
/// * `palette` - path to the palette (LUT) image
/// * `output` - path the remapped image is written to
/// * `config` - distance space and output format settings
///
/// # Returns
///
/// A [`RemapReport`] describing what was processed.
///
/// # Errors
///
/// Returns [`RemapError`] if:
/// - The input or palette image cannot be loaded
/// - The palette image contains no pixels
/// - The output image cannot be encoded or written
pub fn reduce_image_colors(
    input: &Path,
    palette: &Path,
    output: &Path,
    config: &RemapConfig,
) -> Result<RemapReport> {
    let started = Instant::now();

    let palette = ColorPalette::from_image_file(palette)?;
    let image = image_loader::load_image(input)?;
    let (width, height) = (image.width(), image.height());

    let mut modifier = ImageModifier::new(image);
    modifier.reduce_colors(&palette, config.distance_space);

    let format = config
        .output_format
        .or_else(|| OutputFormat::from_extension(output))
        .unwrap_or(OutputFormat::Png);
    image_loader::save_image(modifier.image(), output, format)?;

    Ok(RemapReport {
        width,
        height,
        palette_size: palette.len(),
        pixels_changed: modifier.pixels_changed(),
        distance_space: config.distance_space,
        elapsed_ms: started.elapsed().as_millis() as u64,
    })
}
