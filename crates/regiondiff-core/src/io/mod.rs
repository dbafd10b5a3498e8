pub mod file_source;
pub mod image_io;

pub use file_source::FileCaptureSource;
pub use image_io::{load_raw_image, save_annotated};
