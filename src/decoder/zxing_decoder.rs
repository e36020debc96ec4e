use std::sync::Arc;

use async_trait::async_trait;

use super::DecoderAsync;
use super::format_map::FormatMap;
use crate::config::debug_enabled;
use crate::engine::{BarcodeReader, ReadResult, ReaderOptions};
use crate::error::{DecodeError, InitError};
use crate::logger::Logger;
use crate::models::{DecodeResult, SupportedFormat};
use crate::surface::Canvas;

/// Backend name reported in [`crate::DebugData`]
pub const DECODER_NAME: &str = "zxing-js";

/// Decoder that drives a zxing-style engine
///
/// The format map and reader options are fixed at construction; decode calls
/// only read them, so overlapping calls on one instance are independent.
///
/// Collaborators are held in `Arc` so hosts can share one engine between
/// decoders; the engine and logger traits are not `Send`, so a decoder stays
/// on the event loop that built it.
pub struct ZxingDecoder {
    format_map: FormatMap,
    reader_options: ReaderOptions,
    reader: Arc<dyn BarcodeReader>,
    logger: Arc<dyn Logger>,
    verbose: bool,
}

impl ZxingDecoder {
    /// Configure the engine for the requested formats
    ///
    /// Unsupported formats are logged and skipped. Fails only when the
    /// engine did not load.
    pub fn new(
        requested_formats: &[SupportedFormat],
        verbose: bool,
        logger: Arc<dyn Logger>,
        reader: Arc<dyn BarcodeReader>,
    ) -> Result<Self, InitError> {
        if !reader.is_available() {
            return Err(InitError::EngineUnavailable(reader.name().to_string()));
        }

        let format_map = FormatMap::new();
        let formats = format_map.engine_formats(requested_formats, logger.as_ref());
        let reader_options = ReaderOptions::with_formats(formats);
        let verbose = verbose || debug_enabled();

        tracing::debug!(
            engine = reader.name(),
            formats = ?reader_options.formats,
            "zxing decoder configured"
        );

        Ok(Self {
            format_map,
            reader_options,
            reader,
            logger,
            verbose,
        })
    }

    /// Options handed to the engine on every call
    pub fn reader_options(&self) -> &ReaderOptions {
        &self.reader_options
    }

    /// Host to engine format lookup
    pub fn format_map(&self) -> &FormatMap {
        &self.format_map
    }

    /// Whether match counts are reported to the logger
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Decode every symbol on the surface
    ///
    /// Fails as a whole if any match carries an unknown format token.
    pub async fn decode_all_async(&self, canvas: &dyn Canvas) -> Result<Vec<DecodeResult>, DecodeError> {
        let matches = self.read(canvas).await?;
        if matches.is_empty() {
            return Err(DecodeError::NoSymbolFound);
        }
        matches.into_iter().map(|m| self.to_result(m)).collect()
    }

    async fn read(&self, canvas: &dyn Canvas) -> Result<Vec<ReadResult>, DecodeError> {
        let context = canvas.context_2d().ok_or(DecodeError::ContextUnavailable)?;
        let image = context.image_data(0, 0, canvas.width(), canvas.height())?;
        let matches = match self.reader.read_barcodes(&image, &self.reader_options).await {
            Ok(matches) => matches,
            Err(err) => {
                self.logger
                    .log_error_experimental(&format!("{} failed: {err}", self.reader.name()));
                return Err(err.into());
            }
        };

        if self.verbose {
            self.logger.log(&format!(
                "{} found {} match(es) in {}x{} frame",
                self.reader.name(),
                matches.len(),
                image.width(),
                image.height()
            ));
        }
        Ok(matches)
    }

    fn to_result(&self, read: ReadResult) -> Result<DecodeResult, DecodeError> {
        let format = self
            .format_map
            .from_engine(&read.format)
            .ok_or(DecodeError::UnrecognizedFormat(read.format))?;
        Ok(DecodeResult::new(read.text, format, DECODER_NAME))
    }
}

#[async_trait(?Send)]
impl DecoderAsync for ZxingDecoder {
    async fn decode_async(&self, canvas: &dyn Canvas) -> Result<DecodeResult, DecodeError> {
        let matches = self.read(canvas).await?;
        if matches.len() > 1 {
            self.logger.warn(&format!(
                "{} matches found, reporting only the first",
                matches.len()
            ));
        }
        let first = matches
            .into_iter()
            .next()
            .ok_or(DecodeError::NoSymbolFound)?;
        self.to_result(first)
    }
}

impl std::fmt::Debug for ZxingDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZxingDecoder")
            .field("engine", &self.reader.name())
            .field("formats", &self.reader_options.formats)
            .field("verbose", &self.verbose)
            .finish()
    }
}
