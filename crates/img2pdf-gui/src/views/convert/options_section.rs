use eframe::egui;
use img2pdf::PageSize;

use super::state::ConvertState;
use crate::ui_components::enum_selector;

pub fn show(ui: &mut egui::Ui, state: &mut ConvertState) {
    egui::CollapsingHeader::new("📐 Output Options")
        .default_open(true)
        .show(ui, |ui| {
            show_page_size_selector(ui, &mut state.options.page_size);
            ui.add_space(5.0);
            ui.checkbox(
                &mut state.options.compression.enabled,
                "Compress images (smaller file, lower quality)",
            );
        });
}

fn show_page_size_selector(ui: &mut egui::Ui, page_size: &mut PageSize) -> bool {
    let page_sizes =
        [PageSize::A4, PageSize::Letter, PageSize::Legal].map(|size| (size, size.name()));

    enum_selector(ui, "page_size", "Page size:", page_size, &page_sizes)
}
