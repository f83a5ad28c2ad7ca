mod actions_section;
mod input_section;
mod options_section;
mod state;

pub use state::ConvertState;

use eframe::egui;
use img2pdf::ImageStore;
use img2pdf_async_runtime::ConvertCommand;
use std::collections::HashMap;
use tokio::sync::mpsc;

pub fn show_convert_view(
    ui: &mut egui::Ui,
    store: &mut ImageStore,
    state: &mut ConvertState,
    thumbnails: &HashMap<u64, egui::TextureHandle>,
    command_tx: &mpsc::UnboundedSender<ConvertCommand>,
    generating: &mut bool,
    status: &mut String,
) {
    input_section::show(ui, store, thumbnails, command_tx);
    ui.add_space(10.0);
    options_section::show(ui, state);
    ui.add_space(10.0);
    actions_section::show(ui, store, state, command_tx, generating, status);
}
