use eframe::egui;
use img2pdf::ImageStore;
use img2pdf_async_runtime::ConvertCommand;
use std::collections::HashMap;
use tokio::sync::mpsc;

use crate::ui_components::ImageListEditor;

pub fn show(
    ui: &mut egui::Ui,
    store: &mut ImageStore,
    thumbnails: &HashMap<u64, egui::TextureHandle>,
    command_tx: &mpsc::UnboundedSender<ConvertCommand>,
) {
    egui::CollapsingHeader::new("🖼 Images")
        .default_open(true)
        .show(ui, |ui| {
            // Each selection replaces the current list
            if ui.button("➕ Select Images…").clicked() {
                if let Some(paths) = rfd::FileDialog::new()
                    .add_filter("Images", &["jpg", "jpeg", "png", "gif", "bmp", "webp"])
                    .pick_files()
                {
                    log::info!("Loading {} selected images", paths.len());
                    let _ = command_tx.send(ConvertCommand::LoadImages { paths });
                }
            }

            ui.add_space(5.0);

            ImageListEditor::new(store, thumbnails).show(ui);

            if !store.is_empty() {
                ui.add_space(5.0);
                if ui.button("🗑 Clear List").clicked() {
                    store.clear();
                }
            }
        });
}
