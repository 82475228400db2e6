//! General-purpose utility modules.

pub mod error;
pub mod progress;

// Re-export commonly used items
pub use error::{CodecError, Result};
pub use progress::{NoYield, Progress, YieldHook};
