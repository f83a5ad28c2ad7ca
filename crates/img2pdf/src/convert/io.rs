//! File I/O around the conversion pipeline

use std::path::Path;

use crate::store::ImageRecord;
use crate::types::{ImageKind, Result};

/// Read one image file into a record, inferring the format from the
/// extension and naming the record after the file.
pub async fn load_image(path: impl AsRef<Path>) -> Result<ImageRecord> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path).await?;
    let kind = ImageKind::from_path(path);
    let display_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(ImageRecord::new(display_name, kind, bytes))
}

/// Read multiple image files in order
pub async fn load_images(paths: &[impl AsRef<Path>]) -> Result<Vec<ImageRecord>> {
    let mut records = Vec::with_capacity(paths.len());
    for path in paths {
        records.push(load_image(path).await?);
    }
    Ok(records)
}

/// Write the finished document, overwriting any existing file
pub async fn save_pdf(bytes: &[u8], path: impl AsRef<Path>) -> Result<()> {
    tokio::fs::write(path.as_ref(), bytes).await?;
    Ok(())
}
