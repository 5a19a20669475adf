//! Image file loading and saving
//!
//! Single entry point for reading palette and input images from disk and
//! writing results back out, built on the `image` crate. All loaded
//! images are converted to RGBA8 for consistent downstream processing.

use std::path::Path;

use image::{DynamicImage, ImageReader};
use serde::{Deserialize, Serialize};

use crate::{Image, RemapError, Result};

/// Output image formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// PNG image
    Png,
    /// JPEG image (no alpha channel)
    Jpeg,
    /// GIF image
    Gif,
    /// WebP image
    WebP,
    /// TIFF image
    Tiff,
    /// BMP image
    Bmp,
    /// ICO image
    Ico,
    /// TGA image
    Tga,
    /// PNM image (no alpha channel)
    Pnm,
    /// QOI image
    Qoi,
}

impl OutputFormat {
    /// Parse a format from a user-supplied name (e.g. "png", "jpg")
    ///
    /// # Errors
    ///
    /// Returns [`RemapError::UnknownFormatName`] for unrecognized names.
    pub fn from_name(name: &str) -> Result<OutputFormat> {
        match name.to_ascii_lowercase().as_str() {
            "png" => Ok(OutputFormat::Png),
            "jpg" | "jpeg" => Ok(OutputFormat::Jpeg),
            "gif" => Ok(OutputFormat::Gif),
            "webp" => Ok(OutputFormat::WebP),
            "tiff" | "tif" => Ok(OutputFormat::Tiff),
            "bmp" => Ok(OutputFormat::Bmp),
            "ico" => Ok(OutputFormat::Ico),
            "tga" => Ok(OutputFormat::Tga),
            "pbm" | "pgm" | "ppm" | "pnm" => Ok(OutputFormat::Pnm),
            "qoi" => Ok(OutputFormat::Qoi),
            _ => Err(RemapError::UnknownFormatName {
                name: name.to_string(),
            }),
        }
    }

    /// Detect format from a file extension
    pub fn from_extension(path: &Path) -> Option<OutputFormat> {
        let ext = path.extension()?.to_str()?;
        Self::from_name(ext).ok()
    }

    /// Whether the format can store an alpha channel
    pub fn supports_alpha(&self) -> bool {
        !matches!(self, OutputFormat::Jpeg | OutputFormat::Pnm)
    }

    fn to_image_format(self) -> image::ImageFormat {
        match self {
            OutputFormat::Png => image::ImageFormat::Png,
            OutputFormat::Jpeg => image::ImageFormat::Jpeg,
            OutputFormat::Gif => image::ImageFormat::Gif,
            OutputFormat::WebP => image::ImageFormat::WebP,
            OutputFormat::Tiff => image::ImageFormat::Tiff,
            OutputFormat::Bmp => image::ImageFormat::Bmp,
            OutputFormat::Ico => image::ImageFormat::Ico,
            OutputFormat::Tga => image::ImageFormat::Tga,
            OutputFormat::Pnm => image::ImageFormat::Pnm,
            OutputFormat::Qoi => image::ImageFormat::Qoi,
        }
    }
}

/// Load an image from disk as RGBA8
///
/// The decoder is chosen from the file content/extension by the `image`
/// crate.
///
/// # Errors
///
/// Returns [`RemapError::ImageLoad`] if the file cannot be opened or
/// decoded.
pub fn load_image(path: &Path) -> Result<Image> {
    let reader = ImageReader::open(path).map_err(|e| RemapError::image_load(path, e))?;
    let decoded = reader.decode().map_err(|e| RemapError::image_load(path, e))?;
    Ok(Image::from_rgba(decoded.to_rgba8()))
}

/// Save an image to disk in the given format
///
/// Formats without alpha support (JPEG, PNM) are flattened to RGB8 before
/// encoding.
///
/// # Errors
///
/// Returns [`RemapError::ImageSave`] if encoding or writing fails.
pub fn save_image(image: &Image, path: &Path, format: OutputFormat) -> Result<()> {
    let image_format = format.to_image_format();

    if format.supports_alpha() {
        image
            .as_rgba()
            .save_with_format(path, image_format)
            .map_err(|e| RemapError::image_save(path, e))
    } else {
        DynamicImage::ImageRgba8(image.as_rgba().clone())
            .to_rgb8()
            .save_with_format(path, image_format)
            .map_err(|e| RemapError::image_save(path, e))
    }
}

/// Get list of all supported output file extensions
pub fn supported_extensions() -> &'static [&'static str] {
    &[
        "png", "jpg", "jpeg", "gif", "webp", "tiff", "tif", "bmp", "ico", "tga", "pbm", "pgm",
        "ppm", "pnm", "qoi",
    ]
}
