use crate::encode::rc::ModelSize;

/// Settings shared by [`ImageEncoder`](crate::ImageEncoder) and
/// [`ImageDecoder`](crate::ImageDecoder).
///
/// The model size is not recorded in the stream, so a stream must be decoded
/// with the same `model_size` it was encoded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecParams {
    /// Context model used for residual statistics (default: `Extended`)
    pub model_size: ModelSize,
    /// Pixels between yield-hook calls; `None` never yields (default: 256)
    pub yield_period: Option<u32>,
}

impl Default for CodecParams {
    fn default() -> Self {
        Self {
            model_size: ModelSize::Extended,
            yield_period: Some(256),
        }
    }
}

impl CodecParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model_size(mut self, model_size: ModelSize) -> Self {
        self.model_size = model_size;
        self
    }

    pub fn with_yield_period(mut self, period: Option<u32>) -> Self {
        self.yield_period = period;
        self
    }
}
