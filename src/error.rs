use thiserror::Error;

/// Fatal error while constructing a decoder
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InitError {
    /// The decoding engine failed to load
    #[error("decoding engine `{0}` is not available")]
    EngineUnavailable(String),
}

/// Failure reported by the decoding engine itself
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The engine rejected the input or crashed while reading it
    #[error("engine failed: {0}")]
    Failed(String),
}

/// Error returned by a single decode call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The surface could not supply a 2D drawing context
    #[error("the canvas 2d context is unavailable")]
    ContextUnavailable,
    /// The context exists but refused to hand out pixels, e.g. a tainted canvas
    #[error("canvas pixels are unreadable: {0}")]
    PixelsUnreadable(String),
    /// Requested pixel region is empty
    #[error("invalid image region {width}x{height}")]
    InvalidRegion {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },
    /// The engine call failed
    #[error(transparent)]
    Engine(#[from] EngineError),
    /// The engine returned no matches
    #[error("no symbol detected")]
    NoSymbolFound,
    /// The engine returned a format token with no host counterpart
    #[error("unrecognized engine format `{0}`")]
    UnrecognizedFormat(String),
}

/// A symbology name that matches no host identifier
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown barcode format name `{0}`")]
pub struct UnknownFormatName(pub String);
