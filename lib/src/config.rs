//! Configuration for palette remapping
//!
//! Settings can be loaded from JSON files or constructed
//! programmatically:
//!
//! ```no_run
//! use lesscolors::RemapConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = RemapConfig::from_json_file(Path::new("remap.json"))?;
//!
//! // Or use defaults
//! let config = RemapConfig::default();
//! # Ok::<(), lesscolors::RemapError>(())
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{ColorSpace, OutputFormat, RemapError, Result};

/// Settings controlling a palette remap run
///
/// Can be serialized to/from JSON for reproducible runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RemapConfig {
    /// Color space used for closest-color matching
    pub distance_space: ColorSpace,

    /// Output image format; `None` means infer from the output extension,
    /// falling back to PNG
    pub output_format: Option<OutputFormat>,
}

impl RemapConfig {
    /// Load configuration from a JSON file
    ///
    /// # Errors
    ///
    /// Returns [`RemapError::Config`] if the file cannot be read or
    /// parsed.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| RemapError::config(format!("failed to read {}", path.display()), e))?;
        serde_json::from_str(&content)
            .map_err(|e| RemapError::config(format!("failed to parse {}", path.display()), e))
    }

    /// Save configuration to a JSON file
    ///
    /// # Errors
    ///
    /// Returns [`RemapError::Config`] if serialization or writing fails.
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| RemapError::config("failed to serialize configuration", e))?;
        fs::write(path, json)
            .map_err(|e| RemapError::config(format!("failed to write {}", path.display()), e))
    }
}
