//! Shared constants for the conversion pipeline

/// JPEG quality fraction used when compression is enabled and the caller
/// does not override it.
pub const DEFAULT_JPEG_QUALITY: f32 = 0.7;

/// Longest edge of a lazily decoded preview thumbnail, in pixels.
pub const PREVIEW_EDGE_PX: u32 = 160;

/// PDF version written to generated documents.
pub const PDF_VERSION: &str = "1.7";
