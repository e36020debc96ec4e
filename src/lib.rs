//! zxing_shim - async barcode decoder adapter over a zxing-style engine
//!
//! Translates the host scanner's symbology identifiers into engine format
//! tokens, reads RGBA frames from canvas-like surfaces, and maps the engine's
//! matches back into host results tagged with the backend name.
//!
//! ```
//! use std::sync::Arc;
//! use zxing_shim::{BaseLogger, RqrrReader, SupportedFormat, ZxingDecoder};
//!
//! let decoder = ZxingDecoder::new(
//!     &[SupportedFormat::QrCode, SupportedFormat::Ean8],
//!     false,
//!     Arc::new(BaseLogger::new(false)),
//!     Arc::new(RqrrReader::new()),
//! )
//! .unwrap();
//! assert_eq!(decoder.reader_options().formats, vec!["QRCode", "EAN-8"]);
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Environment knobs
pub mod config;
/// Decoder capability and the zxing adapter
pub mod decoder;
/// Decoding engine capability and the native QR engine
pub mod engine;
/// Error types
pub mod error;
/// Logging collaborator
pub mod logger;
/// Host-side data structures (formats, results)
pub mod models;
/// Canvas-like surfaces
pub mod surface;
/// Image loading helpers for the CLI and tests
pub mod tools;
/// Utility functions (grayscale)
pub mod utils;

pub use decoder::DecoderAsync;
pub use decoder::format_map::FormatMap;
pub use decoder::zxing_decoder::{DECODER_NAME, ZxingDecoder};
pub use engine::{BarcodeReader, ReadResult, ReaderOptions, RqrrReader};
pub use error::{DecodeError, EngineError, InitError, UnknownFormatName};
pub use logger::{BaseLogger, Logger};
pub use models::{DebugData, DecodeResult, ResultFormat, SupportedFormat};
pub use surface::{Canvas, Context2d, ImageData, ImageSurface};
