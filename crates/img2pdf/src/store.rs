//! Ordered image selection
//!
//! The store owns the records backing the page order of the generated
//! document. All mutation goes through bounds-checked methods; reordering is
//! a swap of the two positions, removal shifts the tail down by one.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::constants::PREVIEW_EDGE_PX;
use crate::types::{ConvertError, ImageKind, Result};

static NEXT_RECORD_ID: AtomicU64 = AtomicU64::new(1);

/// Decoded RGBA thumbnail of a selected image
#[derive(Debug, Clone)]
pub struct Preview {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// A selected source image: display name, declared format, raw bytes and a
/// lazily decoded preview
#[derive(Debug, Clone)]
pub struct ImageRecord {
    id: u64,
    display_name: String,
    kind: ImageKind,
    bytes: Arc<Vec<u8>>,
    preview: Option<Arc<Preview>>,
}

impl ImageRecord {
    pub fn new(display_name: impl Into<String>, kind: ImageKind, bytes: Vec<u8>) -> Self {
        Self {
            id: NEXT_RECORD_ID.fetch_add(1, Ordering::SeqCst),
            display_name: display_name.into(),
            kind,
            bytes: Arc::new(bytes),
            preview: None,
        }
    }

    /// Identifier stable for the lifetime of the record, unique per process
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn kind(&self) -> ImageKind {
        self.kind
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Decode a thumbnail on first use and cache it on the record.
    pub fn preview(&mut self) -> Result<Arc<Preview>> {
        if let Some(preview) = &self.preview {
            return Ok(Arc::clone(preview));
        }

        let decoded = image::load_from_memory(&self.bytes)
            .map_err(|e| ConvertError::Decode(e.to_string()))?;
        let thumbnail = decoded.thumbnail(PREVIEW_EDGE_PX, PREVIEW_EDGE_PX).into_rgba8();
        let preview = Arc::new(Preview {
            width: thumbnail.width(),
            height: thumbnail.height(),
            rgba: thumbnail.into_raw(),
        });

        self.preview = Some(Arc::clone(&preview));
        Ok(preview)
    }

    /// Cached preview, if one has been decoded
    pub fn cached_preview(&self) -> Option<Arc<Preview>> {
        self.preview.as_ref().map(Arc::clone)
    }

    /// Drop the cached preview so its pixel buffer can be reclaimed.
    pub fn release_preview(&mut self) {
        self.preview = None;
    }
}

/// Ordered, mutable image selection; the single source of truth for the page
/// order of a generation run
#[derive(Debug, Default)]
pub struct ImageStore {
    images: Vec<ImageRecord>,
}

impl ImageStore {
    pub fn new() -> Self {
        Self { images: Vec::new() }
    }

    /// Replace the whole selection. Selection events replace, not append;
    /// previews of the outgoing records are released.
    pub fn replace_all(&mut self, images: Vec<ImageRecord>) {
        for record in &mut self.images {
            record.release_preview();
        }
        self.images = images;
    }

    /// Swap the records at `from` and `to`. This is a swap, not an
    /// insert-style move: the records in between keep their positions.
    pub fn move_item(&mut self, from: usize, to: usize) -> Result<()> {
        let len = self.images.len();
        if from >= len {
            return Err(ConvertError::IndexOutOfRange { index: from, len });
        }
        if to >= len {
            return Err(ConvertError::IndexOutOfRange { index: to, len });
        }
        self.images.swap(from, to);
        Ok(())
    }

    /// Remove the record at `index`; records after it shift down by one.
    pub fn remove_at(&mut self, index: usize) -> Result<()> {
        if index >= self.images.len() {
            return Err(ConvertError::IndexOutOfRange {
                index,
                len: self.images.len(),
            });
        }
        let mut removed = self.images.remove(index);
        removed.release_preview();
        Ok(())
    }

    /// Empty the selection and release every preview.
    pub fn clear(&mut self) {
        for record in &mut self.images {
            record.release_preview();
        }
        self.images.clear();
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ImageRecord> {
        self.images.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut ImageRecord> {
        self.images.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ImageRecord> {
        self.images.iter()
    }

    /// Clone the current order for a generation run, so the run stays
    /// isolated from store mutations made while it is in flight. Record
    /// bytes are shared, so this is cheap.
    pub fn snapshot(&self) -> Vec<ImageRecord> {
        self.images.to_vec()
    }
}
