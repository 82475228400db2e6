//! A lossless image codec built on a context-adaptive binary range coder.
//!
//! Images are 8-bit RGB or RGBA buffers up to 65535 pixels on a side. The
//! encoder decorrelates the color channels, predicts every sample from its
//! already-coded neighbors and codes the residual bit by bit under adaptive
//! probabilities selected by the local gradient pattern.
//!
//! # Quick Start
//!
//! ```
//! use pixrc::{RawImage, Rgb};
//!
//! let image = RawImage::from_fn(64, 32, |x, y| Rgb::new(x as u8 * 4, y as u8 * 8, 128))?;
//!
//! let stream = pixrc::encode(&image)?;
//! let restored = pixrc::decode(&stream)?;
//! assert_eq!(restored, image);
//! # Ok::<(), pixrc::CodecError>(())
//! ```
//!
//! # Stream Format
//!
//! A 6-byte header (magic `0x77`, channel count, little-endian width and
//! height) followed by the range-coded payload. The payload has no length
//! field; the decoder stops once every pixel has been reconstructed.
//!
//! # Configuration
//!
//! [`CodecParams`] selects the context model size and how often the
//! [`YieldHook`] runs. The model size is not stored in the stream, so both
//! sides must use the same parameters:
//!
//! ```
//! use pixrc::{CodecParams, ModelSize, NoYield, RawImage, Rgb};
//!
//! let params = CodecParams::new().with_model_size(ModelSize::Compact);
//! let image = RawImage::from_fn(8, 8, |x, _| Rgb::gray(x as u8 * 30))?;
//! let stream = pixrc::encode_with(&image, &params, &mut NoYield)?;
//! assert_eq!(pixrc::decode_with(&stream, &params, &mut NoYield)?, image);
//! # Ok::<(), pixrc::CodecError>(())
//! ```

// Core modules
pub mod encode;
pub mod image;
pub mod utils;

// Codec API
pub use encode::llc::{HEADER_LEN, ImageDecoder, ImageEncoder, ImageHeader, MAGIC};
pub use encode::{CodecParams, ModelSize};

// Image types
pub use image::image_formats::{RawImage, Rgb, Rgba};

// Error and scheduling types
pub use utils::error::{CodecError, Result};
pub use utils::progress::{NoYield, Progress, YieldHook};

/// Crate version string.
pub const PIXRC_VERSION: &str = "0.1.0";

/// Encodes `image` with default parameters and no yielding.
pub fn encode(image: &RawImage) -> Result<Vec<u8>> {
    let params = CodecParams::default().with_yield_period(None);
    encode_with(image, &params, &mut NoYield)
}

/// Decodes a stream produced by [`encode`].
pub fn decode(data: &[u8]) -> Result<RawImage> {
    let params = CodecParams::default().with_yield_period(None);
    decode_with(data, &params, &mut NoYield)
}

/// Encodes `image` with explicit parameters, calling `hook` at yield points.
pub fn encode_with(image: &RawImage, params: &CodecParams, hook: &mut dyn YieldHook) -> Result<Vec<u8>> {
    ImageEncoder::new(*params).encode(image, hook)
}

/// Decodes `data` with explicit parameters, calling `hook` at yield points.
pub fn decode_with(data: &[u8], params: &CodecParams, hook: &mut dyn YieldHook) -> Result<RawImage> {
    ImageDecoder::new(*params).decode(data, hook)
}
