pub mod llc;
pub mod params;
pub mod rc;

// Re-export commonly used encoding functionality
pub use llc::{ImageDecoder, ImageEncoder, ImageHeader};
pub use params::CodecParams;
pub use rc::ModelSize;
