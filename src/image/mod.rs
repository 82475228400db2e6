pub mod image_formats;

pub use image_formats::{RawImage, Rgb, Rgba};
