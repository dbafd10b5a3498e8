pub mod convert;
pub mod hsv;

pub use convert::{luminance, to_color_frame, to_rgb_image};
pub use hsv::{to_hsv, HsvFrame};
