use eframe::egui;
use img2pdf::ImageStore;
use std::collections::HashMap;

/// Enum selector using ComboBox
pub fn enum_selector<T>(
    ui: &mut egui::Ui,
    id: &str,
    label: &str,
    value: &mut T,
    options: &[(T, &str)],
) -> bool
where
    T: PartialEq + Clone,
{
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);

        let current_text = options
            .iter()
            .find(|(v, _)| v == value)
            .map(|(_, text)| *text)
            .unwrap_or("Unknown");

        egui::ComboBox::from_id_salt(id)
            .selected_text(current_text)
            .show_ui(ui, |ui| {
                for (option_value, option_text) in options {
                    if ui
                        .selectable_value(value, option_value.clone(), *option_text)
                        .changed()
                    {
                        changed = true;
                    }
                }
            });
    });
    changed
}

const THUMBNAIL_HEIGHT: f32 = 32.0;

/// Image list editor with thumbnails, reordering and removal.
///
/// Reordering swaps the two affected rows; removal shifts the tail up. Both
/// go through the store so bounds stay checked in one place.
pub struct ImageListEditor<'a> {
    store: &'a mut ImageStore,
    thumbnails: &'a HashMap<u64, egui::TextureHandle>,
}

impl<'a> ImageListEditor<'a> {
    pub fn new(
        store: &'a mut ImageStore,
        thumbnails: &'a HashMap<u64, egui::TextureHandle>,
    ) -> Self {
        Self { store, thumbnails }
    }

    pub fn show(self, ui: &mut egui::Ui) -> bool {
        if self.store.is_empty() {
            ui.label("No images selected");
            return false;
        }

        let mut to_remove = None;
        let mut to_move_up = None;
        let mut to_move_down = None;

        for (idx, record) in self.store.iter().enumerate() {
            ui.horizontal(|ui| {
                // Reorder buttons
                if idx > 0 && ui.small_button("▲").clicked() {
                    to_move_up = Some(idx);
                }
                if idx < self.store.len() - 1 && ui.small_button("▼").clicked() {
                    to_move_down = Some(idx);
                }

                if let Some(texture) = self.thumbnails.get(&record.id()) {
                    let size = texture.size_vec2();
                    let scale = THUMBNAIL_HEIGHT / size.y.max(1.0);
                    ui.image((texture.id(), size * scale));
                }

                ui.label(format!("{}. {}", idx + 1, record.display_name()));

                if ui.small_button("✖").clicked() {
                    to_remove = Some(idx);
                }
            });
        }

        // Apply changes
        let mut changed = false;
        if let Some(idx) = to_move_up {
            changed |= self.store.move_item(idx, idx - 1).is_ok();
        }
        if let Some(idx) = to_move_down {
            changed |= self.store.move_item(idx, idx + 1).is_ok();
        }
        if let Some(idx) = to_remove {
            changed |= self.store.remove_at(idx).is_ok();
        }

        changed
    }
}
