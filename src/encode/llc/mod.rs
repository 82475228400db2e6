//! Lossless image coding on top of the range coder.
//!
//! Pixels are visited in raster order. Each pixel is color-decorrelated, then
//! every channel is predicted from its causal neighbors and the residual is
//! coded under a context derived from the local gradients.

pub mod color;
pub mod context;
pub mod decoder;
pub mod encoder;
pub mod header;
pub mod num_coder;
pub mod rows;

pub use decoder::ImageDecoder;
pub use encoder::ImageEncoder;
pub use header::{ImageHeader, HEADER_LEN, MAGIC};
