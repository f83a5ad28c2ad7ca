use std::path::Path;

use thiserror::Error;

use crate::constants::DEFAULT_JPEG_QUALITY;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("Index {index} out of range (list has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Image decode error: {0}")]
    Decode(String),
    #[error("Failed to embed {name}: {reason}")]
    Embed { name: String, reason: String },
    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidImageDimensions { width: u32, height: u32 },
}

impl From<image::ImageError> for ConvertError {
    fn from(e: image::ImageError) -> Self {
        Self::Decode(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;

/// Standard page sizes, in portrait orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PageSize {
    #[default]
    A4,
    Letter,
    Legal,
}

impl PageSize {
    /// Get page dimensions in points (1/72 inch)
    pub fn dimensions_pt(self) -> (f32, f32) {
        match self {
            PageSize::A4 => (595.28, 841.89),
            PageSize::Letter => (612.0, 792.0),
            PageSize::Legal => (612.0, 1008.0),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PageSize::A4 => "A4",
            PageSize::Letter => "Letter",
            PageSize::Legal => "Legal",
        }
    }
}

/// Source image format, as declared by the host (MIME type or file extension)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ImageKind {
    Jpeg,
    Png,
    /// Anything else; skipped with a warning during generation
    Other,
}

impl ImageKind {
    pub fn from_mime(mime: &str) -> Self {
        match mime {
            "image/jpeg" => ImageKind::Jpeg,
            "image/png" => ImageKind::Png,
            _ => ImageKind::Other,
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let extension = path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());
        match extension.as_deref() {
            Some("jpg") | Some("jpeg") => ImageKind::Jpeg,
            Some("png") => ImageKind::Png,
            _ => ImageKind::Other,
        }
    }

    /// JPEG and PNG can be embedded; everything else is skipped
    pub fn is_supported(self) -> bool {
        matches!(self, ImageKind::Jpeg | ImageKind::Png)
    }
}

/// Optional lossy re-encoding applied to every image before embedding
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompressionSettings {
    pub enabled: bool,
    /// JPEG quality as a fraction, valid over (0, 1]
    pub quality: f32,
}

impl Default for CompressionSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            quality: DEFAULT_JPEG_QUALITY,
        }
    }
}
