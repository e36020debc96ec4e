//! Decoder capability and the zxing adapter
//!
//! - [`DecoderAsync`]: what the host calls, one async method per frame
//! - [`format_map`]: host identifier <-> engine token lookup
//! - [`zxing_decoder`]: the adapter wiring surface, engine and map together

/// Bidirectional host/engine format lookup
pub mod format_map;
/// Adapter over a zxing-style engine
pub mod zxing_decoder;

use async_trait::async_trait;

use crate::error::DecodeError;
use crate::models::DecodeResult;
use crate::surface::Canvas;

/// An asynchronous decoding backend
///
/// Hosts hold decoders as `Box<dyn DecoderAsync>` so backends can be swapped
/// without touching the scan loop.
#[async_trait(?Send)]
pub trait DecoderAsync {
    /// Decode the first symbol visible on `canvas`
    async fn decode_async(&self, canvas: &dyn Canvas) -> Result<DecodeResult, DecodeError>;
}
