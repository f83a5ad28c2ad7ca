use img2pdf::ImageRecord;
use img2pdf_async_runtime::{ConvertOptions, ConvertUpdate};
use std::path::PathBuf;
use tokio::sync::mpsc;

pub async fn handle_load_images(
    paths: Vec<PathBuf>,
    update_tx: &mpsc::UnboundedSender<ConvertUpdate>,
) {
    let _ = update_tx.send(ConvertUpdate::Progress {
        operation: "Loading images".to_string(),
        current: 0,
        total: paths.len(),
    });

    let images = match img2pdf::load_images(&paths).await {
        Ok(images) => images,
        Err(e) => {
            let _ = update_tx.send(ConvertUpdate::Error {
                message: format!("Failed to load images: {e}"),
            });
            return;
        }
    };

    // Decode thumbnails off the UI thread so the list renders them directly
    let decoded = tokio::task::spawn_blocking(move || {
        let mut images = images;
        for record in &mut images {
            if let Err(e) = record.preview() {
                log::warn!("No preview for {}: {e}", record.display_name());
            }
        }
        images
    })
    .await;

    match decoded {
        Ok(images) => {
            let _ = update_tx.send(ConvertUpdate::ImagesLoaded { images });
        }
        Err(e) => {
            let _ = update_tx.send(ConvertUpdate::Error {
                message: format!("Preview decoding failed: {e}"),
            });
        }
    }
}

pub async fn handle_generate(
    images: Vec<ImageRecord>,
    options: ConvertOptions,
    output_path: PathBuf,
    update_tx: &mpsc::UnboundedSender<ConvertUpdate>,
) {
    let _ = update_tx.send(ConvertUpdate::Progress {
        operation: "Generating PDF".to_string(),
        current: 1,
        total: 3,
    });

    let output = match img2pdf::convert_images(&images, &options).await {
        Ok(output) => output,
        Err(e) => {
            let _ = update_tx.send(ConvertUpdate::Error {
                message: format!("Failed to generate PDF: {e}"),
            });
            return;
        }
    };

    let _ = update_tx.send(ConvertUpdate::Progress {
        operation: "Saving PDF".to_string(),
        current: 2,
        total: 3,
    });

    if let Err(e) = img2pdf::save_pdf(&output.bytes, &output_path).await {
        let _ = update_tx.send(ConvertUpdate::Error {
            message: format!("Failed to save PDF: {e}"),
        });
        return;
    }

    let _ = update_tx.send(ConvertUpdate::GenerateComplete {
        path: output_path,
        page_count: output.page_count,
        skipped: output.skipped,
    });
}

pub async fn handle_load_config(path: PathBuf, update_tx: &mpsc::UnboundedSender<ConvertUpdate>) {
    match ConvertOptions::load(&path).await {
        Ok(options) => {
            let _ = update_tx.send(ConvertUpdate::ConfigLoaded { options });
        }
        Err(e) => {
            let _ = update_tx.send(ConvertUpdate::Error {
                message: format!("Failed to load configuration: {e}"),
            });
        }
    }
}

pub async fn handle_save_config(
    options: ConvertOptions,
    path: PathBuf,
    update_tx: &mpsc::UnboundedSender<ConvertUpdate>,
) {
    if let Err(e) = options.save(&path).await {
        let _ = update_tx.send(ConvertUpdate::Error {
            message: format!("Failed to save configuration: {e}"),
        });
    } else {
        log::info!("Configuration saved to {}", path.display());
    }
}
