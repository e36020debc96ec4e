//! Decoding engine capability
//!
//! The engine is opaque to the adapter: given an RGBA frame and reader
//! options it returns zero or more matches tagged with its own format tokens.

pub mod options;
/// Native QR engine backed by `rqrr`
pub mod rqrr_reader;

pub use options::{Binarizer, EanAddOnSymbol, ReaderOptions, TextMode};
pub use rqrr_reader::RqrrReader;

use async_trait::async_trait;

use crate::error::EngineError;
use crate::surface::ImageData;

/// One symbol found by the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadResult {
    /// Decoded text
    pub text: String,
    /// Engine format token, e.g. `EAN-8`
    pub format: String,
    /// Raw payload bytes
    pub bytes: Vec<u8>,
}

impl ReadResult {
    /// Match whose payload is the UTF-8 bytes of `text`
    pub fn new(text: impl Into<String>, format: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            bytes: text.as_bytes().to_vec(),
            text,
            format: format.into(),
        }
    }
}

/// A barcode reading engine
#[async_trait(?Send)]
pub trait BarcodeReader {
    /// Backend name used in diagnostics
    fn name(&self) -> &str;

    /// Whether the engine loaded and can be called
    fn is_available(&self) -> bool {
        true
    }

    /// Read every symbol the options allow from `image`
    async fn read_barcodes(
        &self,
        image: &ImageData,
        options: &ReaderOptions,
    ) -> Result<Vec<ReadResult>, EngineError>;
}
