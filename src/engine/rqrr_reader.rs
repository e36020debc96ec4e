use async_trait::async_trait;

use super::{BarcodeReader, ReadResult, ReaderOptions};
use crate::error::EngineError;
use crate::surface::ImageData;
use crate::utils::grayscale::image_to_grayscale;

/// Engine token reported for every QR match
pub const QR_CODE_TOKEN: &str = "QRCode";

/// QR-only engine for native builds
///
/// Speaks the same format vocabulary as zxing so it can stand in for the
/// browser engine behind [`crate::ZxingDecoder`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RqrrReader;

impl RqrrReader {
    /// Create the reader
    pub fn new() -> Self {
        Self
    }

    /// Synchronous read, shared by the async entry point and the CLI
    pub fn read(&self, image: &ImageData, options: &ReaderOptions) -> Vec<ReadResult> {
        if !options.allows(QR_CODE_TOKEN) || options.max_number_of_symbols == 0 {
            return Vec::new();
        }
        let (width, height) = (image.width() as usize, image.height() as usize);
        if width == 0 || height == 0 {
            return Vec::new();
        }

        let gray = image_to_grayscale(image);
        let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(width, height, |x, y| {
            gray[y * width + x]
        });
        let grids = prepared.detect_grids();
        tracing::debug!(grids = grids.len(), width, height, "rqrr grid detection");

        let mut results = Vec::new();
        for grid in grids {
            match grid.decode() {
                Ok((_meta, content)) => {
                    results.push(ReadResult::new(content, QR_CODE_TOKEN));
                    if results.len() >= options.max_number_of_symbols as usize {
                        break;
                    }
                }
                Err(err) => {
                    tracing::debug!(error = ?err, "rqrr grid failed to decode");
                }
            }
        }
        results
    }
}

#[async_trait(?Send)]
impl BarcodeReader for RqrrReader {
    fn name(&self) -> &str {
        "rqrr"
    }

    async fn read_barcodes(
        &self,
        image: &ImageData,
        options: &ReaderOptions,
    ) -> Result<Vec<ReadResult>, EngineError> {
        Ok(self.read(image, options))
    }
}
