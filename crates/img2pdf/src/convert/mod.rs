//! The image-to-PDF conversion pipeline
//!
//! For each record in order: unsupported formats are skipped with a warning,
//! supported images are optionally re-encoded, embedded, placed on their own
//! page, and the finished document is serialized to bytes. The run stays
//! entirely in memory; nothing touches the filesystem until the caller saves
//! the returned bytes.

mod io;
mod page;

pub use io::{load_image, load_images, save_pdf};

use lopdf::{Dictionary, Document, Object};
use std::borrow::Cow;

use crate::compress::compress_to_jpeg;
use crate::constants::PDF_VERSION;
use crate::embed::EmbeddedImage;
use crate::layout::compute_placement;
use crate::options::ConvertOptions;
use crate::store::ImageRecord;
use crate::types::{ConvertError, ImageKind, Result};

/// An image left out of the document, with the reason implied by its kind
#[derive(Debug, Clone)]
pub struct SkippedImage {
    pub display_name: String,
    pub kind: ImageKind,
}

/// Result of a conversion run
#[derive(Debug, Clone)]
pub struct ConvertOutput {
    /// Serialized PDF document
    pub bytes: Vec<u8>,
    /// One page per successfully embedded image
    pub page_count: usize,
    /// Images that were skipped because their format is unsupported
    pub skipped: Vec<SkippedImage>,
}

/// Assemble the given images into a PDF document.
///
/// Unsupported formats are skipped and reported in the output; an image
/// whose bytes fail to parse as their declared format aborts the whole run.
/// An empty input yields a valid document with zero pages.
pub async fn convert_images(
    images: &[ImageRecord],
    options: &ConvertOptions,
) -> Result<ConvertOutput> {
    let images = images.to_vec();
    let options = options.clone();

    tokio::task::spawn_blocking(move || convert_sync(&images, &options)).await?
}

fn convert_sync(images: &[ImageRecord], options: &ConvertOptions) -> Result<ConvertOutput> {
    let mut output = Document::with_version(PDF_VERSION);
    let pages_tree_id = output.new_object_id();
    let mut page_refs = Vec::new();
    let mut skipped = Vec::new();

    for record in images {
        if !record.kind().is_supported() {
            skipped.push(SkippedImage {
                display_name: record.display_name().to_string(),
                kind: record.kind(),
            });
            continue;
        }

        // Re-encoding failures fall back to the original bytes; only a
        // failure to embed those aborts the run.
        let (bytes, kind): (Cow<'_, [u8]>, ImageKind) = if options.compression.enabled {
            match compress_to_jpeg(record.bytes(), options.compression.quality) {
                Ok(reencoded) => (Cow::Owned(reencoded), ImageKind::Jpeg),
                Err(ConvertError::Decode(_)) => (Cow::Borrowed(record.bytes()), record.kind()),
                Err(e) => return Err(e),
            }
        } else {
            (Cow::Borrowed(record.bytes()), record.kind())
        };

        let embedded = EmbeddedImage::from_bytes(kind, &bytes).map_err(|e| {
            ConvertError::Embed {
                name: record.display_name().to_string(),
                reason: e.to_string(),
            }
        })?;

        let placement = compute_placement(options.page_size, embedded.width, embedded.height)?;
        let page_id = page::render_image_page(
            &mut output,
            embedded,
            &placement,
            options.page_size,
            pages_tree_id,
        );
        page_refs.push(Object::Reference(page_id));
    }

    // A run with zero embedded images still produces a valid document.
    let count = page_refs.len() as i64;
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(page_refs)),
        ("Count", Object::Integer(count)),
    ]);
    output
        .objects
        .insert(pages_tree_id, Object::Dictionary(pages_dict));

    let catalog_id = output.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_tree_id)),
    ]));
    output.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    output.save_to(&mut bytes)?;

    Ok(ConvertOutput {
        bytes,
        page_count: count as usize,
        skipped,
    })
}
