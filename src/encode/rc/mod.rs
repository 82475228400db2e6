//! Binary range coding with adaptive context probabilities.
//!
//! [`RangeEncoder`] and [`RangeDecoder`] are a matched pair of byte-oriented
//! arithmetic coders; [`ContextModel`] supplies the per-bit probability both
//! sides must agree on.

pub mod decoder;
pub mod encoder;
pub mod model;
pub mod table;

pub use decoder::{ByteSource, RangeDecoder, SliceSource};
pub use encoder::RangeEncoder;
pub use model::{ContextModel, ModelSize};
