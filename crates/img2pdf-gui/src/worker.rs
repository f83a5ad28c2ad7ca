use img2pdf_async_runtime::{ConvertCommand, ConvertUpdate};
use tokio::sync::mpsc;

use crate::handlers;

/// Async worker task that processes conversion commands and sends updates
pub async fn worker_task(
    mut command_rx: mpsc::UnboundedReceiver<ConvertCommand>,
    update_tx: mpsc::UnboundedSender<ConvertUpdate>,
) {
    while let Some(cmd) = command_rx.recv().await {
        match cmd {
            ConvertCommand::LoadImages { paths } => {
                handlers::convert::handle_load_images(paths, &update_tx).await;
            }
            ConvertCommand::Generate {
                images,
                options,
                output_path,
            } => {
                handlers::convert::handle_generate(images, options, output_path, &update_tx).await;
            }
            ConvertCommand::LoadConfig { path } => {
                handlers::convert::handle_load_config(path, &update_tx).await;
            }
            ConvertCommand::SaveConfig { options, path } => {
                handlers::convert::handle_save_config(options, path, &update_tx).await;
            }
        }
    }
}
