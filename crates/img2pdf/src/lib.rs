pub mod convert;
mod compress;
mod constants;
mod embed;
mod layout;
mod options;
mod store;
mod types;

pub use compress::compress_to_jpeg;
pub use convert::{ConvertOutput, SkippedImage, convert_images, load_images, save_pdf};
pub use embed::EmbeddedImage;
pub use layout::{Placement, compute_placement};
pub use options::ConvertOptions;
pub use store::{ImageRecord, ImageStore, Preview};
pub use types::*;
