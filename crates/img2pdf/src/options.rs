use std::path::PathBuf;

use crate::types::{CompressionSettings, ConvertError, PageSize, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Conversion configuration
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConvertOptions {
    /// Source images in page order
    pub input_files: Vec<PathBuf>,

    /// Fixed size applied to every generated page
    pub page_size: PageSize,

    /// Optional lossy re-encoding before embedding
    pub compression: CompressionSettings,
}

impl ConvertOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| ConvertError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ConvertError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.input_files.is_empty() {
            return Err(ConvertError::Config("No input files specified".to_string()));
        }

        if self.compression.enabled
            && !(self.compression.quality > 0.0 && self.compression.quality <= 1.0)
        {
            return Err(ConvertError::Config(format!(
                "Compression quality must be in (0, 1], got {}",
                self.compression.quality
            )));
        }

        Ok(())
    }
}
