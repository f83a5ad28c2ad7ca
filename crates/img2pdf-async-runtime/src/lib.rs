use std::path::PathBuf;

// Re-export types from the core crate
pub use img2pdf::{
    CompressionSettings, ConvertOptions, ImageKind, ImageRecord, PageSize, SkippedImage,
};

/// Commands sent from UI to worker
#[derive(Debug)]
pub enum ConvertCommand {
    /// Read the given files and build image records with previews
    LoadImages {
        paths: Vec<PathBuf>,
    },
    /// Assemble a snapshot of the selection into a PDF and save it
    Generate {
        images: Vec<ImageRecord>,
        options: ConvertOptions,
        output_path: PathBuf,
    },
    LoadConfig {
        path: PathBuf,
    },
    SaveConfig {
        options: ConvertOptions,
        path: PathBuf,
    },
}

/// Updates sent from worker to UI
#[derive(Debug, Clone)]
pub enum ConvertUpdate {
    Progress {
        operation: String,
        current: usize,
        total: usize,
    },
    ImagesLoaded {
        images: Vec<ImageRecord>,
    },
    GenerateComplete {
        path: PathBuf,
        page_count: usize,
        skipped: Vec<SkippedImage>,
    },
    ConfigLoaded {
        options: ConvertOptions,
    },
    Error {
        message: String,
    },
}
