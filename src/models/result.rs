use super::{ResultFormat, SupportedFormat};

/// Diagnostic metadata attached to every decode result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugData {
    /// Name of the backend that produced the result
    pub decoder_name: String,
}

/// A decoded symbol in the host's vocabulary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeResult {
    /// Decoded text, character set already applied by the engine
    pub text: String,
    /// Symbology of the decoded symbol
    pub format: ResultFormat,
    /// Backend diagnostics
    pub debug_data: DebugData,
}

impl DecodeResult {
    /// Create a result for `format` produced by `decoder_name`
    pub fn new(text: String, format: SupportedFormat, decoder_name: &str) -> Self {
        Self {
            text,
            format: ResultFormat::create(format),
            debug_data: DebugData {
                decoder_name: decoder_name.to_string(),
            },
        }
    }
}
