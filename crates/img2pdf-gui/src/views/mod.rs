mod convert;

pub use convert::{ConvertState, show_convert_view};
