use img2pdf_async_runtime::ConvertOptions;

pub struct ConvertState {
    pub options: ConvertOptions,
}

impl Default for ConvertState {
    fn default() -> Self {
        Self {
            options: ConvertOptions::default(),
        }
    }
}
