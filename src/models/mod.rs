pub mod format;
pub mod result;

pub use format::{ResultFormat, SupportedFormat};
pub use result::{DebugData, DecodeResult};
