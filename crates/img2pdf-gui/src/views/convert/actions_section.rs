use eframe::egui;
use img2pdf::ImageStore;
use img2pdf_async_runtime::ConvertCommand;
use tokio::sync::mpsc;

use super::state::ConvertState;

pub fn show(
    ui: &mut egui::Ui,
    store: &ImageStore,
    state: &ConvertState,
    command_tx: &mpsc::UnboundedSender<ConvertCommand>,
    generating: &mut bool,
    status: &mut String,
) {
    ui.horizontal(|ui| {
        show_config_buttons(ui, state, command_tx);
    });

    ui.add_space(10.0);

    let can_generate = !store.is_empty() && !*generating;
    if ui
        .add_enabled(can_generate, egui::Button::new("💾 Generate PDF…"))
        .clicked()
    {
        match rfd::FileDialog::new()
            .add_filter("PDF", &["pdf"])
            .set_file_name("output.pdf")
            .save_file()
        {
            Some(path) => {
                log::info!("Generating PDF at {}", path.display());
                *generating = true;
                let _ = command_tx.send(ConvertCommand::Generate {
                    images: store.snapshot(),
                    options: state.options.clone(),
                    output_path: path,
                });
            }
            None => {
                // User dismissed the dialog; nothing was written
                *status = "Save canceled".to_string();
            }
        }
    }
}

fn show_config_buttons(
    ui: &mut egui::Ui,
    state: &ConvertState,
    command_tx: &mpsc::UnboundedSender<ConvertCommand>,
) {
    if ui.button("💾 Save Configuration").clicked() {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name("img2pdf_config.json")
            .save_file()
        {
            let _ = command_tx.send(ConvertCommand::SaveConfig {
                options: state.options.clone(),
                path,
            });
        }
    }

    if ui.button("📂 Load Configuration").clicked() {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .pick_file()
        {
            let _ = command_tx.send(ConvertCommand::LoadConfig { path });
        }
    }
}
