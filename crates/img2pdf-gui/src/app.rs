use std::collections::{HashMap, HashSet};

use eframe::egui;
use img2pdf::ImageStore;
use img2pdf_async_runtime::{ConvertCommand, ConvertUpdate};
use tokio::sync::mpsc;

use crate::logger::AppLogger;
use crate::views::{ConvertState, show_convert_view};

#[derive(Clone)]
struct ProgressState {
    operation: String,
    current: usize,
    total: usize,
}

pub struct ConverterApp {
    /// Source of truth for the page order of the generated document
    store: ImageStore,
    state: ConvertState,
    status: String,
    progress: Option<ProgressState>,
    /// One generation run at a time; the button is disabled while this is set
    generating: bool,

    // Async infrastructure
    command_tx: mpsc::UnboundedSender<ConvertCommand>,
    update_rx: mpsc::UnboundedReceiver<ConvertUpdate>,

    /// Thumbnail textures keyed by record id; dropped when the record goes away
    thumbnails: HashMap<u64, egui::TextureHandle>,
    logger: AppLogger,

    _tokio_handle: tokio::runtime::Handle,
}

impl ConverterApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        tokio_handle: tokio::runtime::Handle,
        logger: AppLogger,
    ) -> Self {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        // Spawn worker task
        tokio_handle.spawn(crate::worker::worker_task(command_rx, update_tx));

        Self {
            store: ImageStore::new(),
            state: ConvertState::default(),
            status: String::new(),
            progress: None,
            generating: false,
            command_tx,
            update_rx,
            thumbnails: HashMap::new(),
            logger,
            _tokio_handle: tokio_handle,
        }
    }

    /// Create textures for records with a decoded preview and drop textures
    /// whose record left the store.
    fn sync_thumbnails(&mut self, ctx: &egui::Context) {
        let live: HashSet<u64> = self.store.iter().map(|record| record.id()).collect();
        self.thumbnails.retain(|id, _| live.contains(id));

        for index in 0..self.store.len() {
            let Some(record) = self.store.get(index) else {
                continue;
            };
            let id = record.id();
            if self.thumbnails.contains_key(&id) {
                continue;
            }
            let Some(preview) = record.cached_preview() else {
                continue;
            };
            let color_image = egui::ColorImage::from_rgba_unmultiplied(
                [preview.width as usize, preview.height as usize],
                &preview.rgba,
            );
            let texture = ctx.load_texture(
                format!("thumbnail_{id}"),
                color_image,
                egui::TextureOptions::default(),
            );
            self.thumbnails.insert(id, texture);
        }
    }
}

impl eframe::App for ConverterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Process all pending updates from worker
        while let Ok(update) = self.update_rx.try_recv() {
            match update {
                ConvertUpdate::Progress {
                    operation,
                    current,
                    total,
                } => {
                    self.progress = Some(ProgressState {
                        operation,
                        current,
                        total,
                    });
                    ctx.request_repaint();
                }
                ConvertUpdate::ImagesLoaded { images } => {
                    self.status = format!("Loaded {} images", images.len());
                    self.progress = None;
                    self.store.replace_all(images);
                }
                ConvertUpdate::GenerateComplete {
                    path,
                    page_count,
                    skipped,
                } => {
                    self.generating = false;
                    self.progress = None;
                    for image in &skipped {
                        log::warn!("Skipped {} (unsupported format)", image.display_name);
                    }
                    self.status = if skipped.is_empty() {
                        format!("Saved {} pages → {}", page_count, path.display())
                    } else {
                        format!(
                            "Saved {} pages → {} ({} images skipped)",
                            page_count,
                            path.display(),
                            skipped.len()
                        )
                    };
                }
                ConvertUpdate::ConfigLoaded { options } => {
                    // The current selection stays; only the output options load
                    self.state.options.page_size = options.page_size;
                    self.state.options.compression = options.compression;
                    self.status = "Configuration loaded".to_string();
                }
                ConvertUpdate::Error { message } => {
                    self.generating = false;
                    self.progress = None;
                    log::error!("{message}");
                    self.status = format!("Error: {message}");
                }
            }
        }

        self.sync_thumbnails(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                show_convert_view(
                    ui,
                    &mut self.store,
                    &mut self.state,
                    &self.thumbnails,
                    &self.command_tx,
                    &mut self.generating,
                    &mut self.status,
                );
            });

            // Show progress bar
            if let Some(ref progress) = self.progress {
                ui.separator();
                ui.label(&progress.operation);
                ui.add(
                    egui::ProgressBar::new(progress.current as f32 / progress.total.max(1) as f32)
                        .show_percentage(),
                );
                ctx.request_repaint(); // Keep updating during operations
            }

            if !self.status.is_empty() {
                ui.separator();
                ui.label(&self.status);
            }

            show_log(ui, &self.logger);
        });
    }
}

fn show_log(ui: &mut egui::Ui, logger: &AppLogger) {
    let entries = logger.get_entries();
    if entries.is_empty() {
        return;
    }

    ui.separator();
    egui::CollapsingHeader::new("Log").show(ui, |ui| {
        for entry in entries.iter().rev().take(20) {
            ui.label(format!(
                "[{}] {} {}",
                entry.timestamp.format("%H:%M:%S"),
                entry.level,
                entry.message
            ));
        }
    });
}
