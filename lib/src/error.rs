//! Error types for the lesscolors library

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for lesscolors operations
pub type Result<T> = std::result::Result<T, RemapError>;

/// Error types for palette-based color reduction
#[derive(Error, Debug)]
pub enum RemapError {
    /// Image file could not be opened or decoded
    #[error("failed to load image {}: {source}", path.display())]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Image file could not be encoded or written
    #[error("failed to save image {}: {source}", path.display())]
    ImageSave {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Output format name not recognized
    #[error("unknown image format name: {name}")]
    UnknownFormatName { name: String },

    /// Palette construction from an empty color set
    #[error("color palette must contain at least one color")]
    EmptyPalette,

    /// Color value could not be parsed or converted
    #[error("invalid color: {message}")]
    InvalidColor { message: String },

    /// Invalid input parameter
    #[error("invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// Configuration file could not be read or parsed
    #[error("configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl RemapError {
    /// Create an image load error with context
    pub fn image_load<E>(path: impl Into<PathBuf>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageLoad {
            path: path.into(),
            source: Box::new(source),
        }
    }

    /// Create an image save error with context
    pub fn image_save<E>(path: impl Into<PathBuf>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageSave {
            path: path.into(),
            source: Box::new(source),
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            RemapError::ImageLoad { .. } => {
                "Could not load the image. Please check the file path and format.".to_string()
            }
            RemapError::ImageSave { .. } => {
                "Could not write the output image. Please check that the output path is writable."
                    .to_string()
            }
            RemapError::UnknownFormatName { name } => {
                format!(
                    "'{}' is not a supported output format. Try png, jpg, webp, bmp or tiff.",
                    name
                )
            }
            RemapError::EmptyPalette => {
                "The palette contains no colors. Please use a palette image with at least one pixel."
                    .to_string()
            }
            RemapError::InvalidColor { .. } => {
                "A color value could not be parsed. Hex colors must look like #RRGGBB.".to_string()
            }
            _ => "Color reduction failed. Please check the input files and try again.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RemapError::UnknownFormatName {
            name: "doc".to_string(),
        };
        assert_eq!(err.to_string(), "unknown image format name: doc");

        let err = RemapError::EmptyPalette;
        assert_eq!(
            err.to_string(),
            "color palette must contain at least one color"
        );
    }

    #[test]
    fn test_user_message_mentions_formats() {
        let err = RemapError::UnknownFormatName {
            name: "doc".to_string(),
        };
        assert!(err.user_message().contains("doc"));
        assert!(err.user_message().contains("png"));
    }
}
