use serde::{Deserialize, Serialize};

/// Binarizer the engine uses to threshold the frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Binarizer {
    /// Local average over a sliding window
    LocalAverage,
    /// Global histogram threshold
    GlobalHistogram,
    /// Fixed threshold at 127
    FixedThreshold,
    /// Treat every non-zero luma as white
    BoolCast,
}

/// How EAN/UPC add-on symbols are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EanAddOnSymbol {
    /// Ignore add-ons
    Ignore,
    /// Read add-ons when present
    Read,
    /// Only report symbols that carry an add-on
    Require,
}

/// How decoded bytes are rendered into text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextMode {
    /// Bytes interpreted through the detected character set
    Plain,
    /// ECI-tagged text
    #[serde(rename = "ECI")]
    Eci,
    /// Human readable interpretation
    #[serde(rename = "HRI")]
    Hri,
    /// Hex dump of the raw bytes
    Hex,
    /// Plain text with control characters escaped
    Escaped,
}

/// Options passed to the decoding engine on every read
///
/// Field names serialize in camelCase so the struct can be handed to the
/// JavaScript engine unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReaderOptions {
    /// Engine format tokens to look for; empty means every format
    pub formats: Vec<String>,
    /// Spend more time to find more symbols
    pub try_harder: bool,
    /// Also scan rotated frames
    pub try_rotate: bool,
    /// Also scan the inverted frame
    pub try_invert: bool,
    /// Also scan downscaled frames
    pub try_downscale: bool,
    /// Thresholding strategy
    pub binarizer: Binarizer,
    /// Frame contains nothing but one pure, unrotated symbol
    pub is_pure: bool,
    /// Scale factor between downscale passes
    pub downscale_factor: u8,
    /// Frames smaller than this are not downscaled
    pub downscale_threshold: u16,
    /// Scan lines a linear symbol must be seen on
    pub min_line_count: u8,
    /// Stop after this many symbols
    pub max_number_of_symbols: u8,
    /// Decode full-ASCII Code 39
    pub try_code39_extended_mode: bool,
    /// Require a valid Code 39 check digit
    pub validate_code39_check_sum: bool,
    /// Require a valid ITF check digit
    #[serde(rename = "validateITFCheckSum")]
    pub validate_itf_check_sum: bool,
    /// Keep Codabar start/stop characters in the text
    pub return_codabar_start_end: bool,
    /// Report symbols that failed to decode
    pub return_errors: bool,
    /// EAN/UPC add-on policy
    pub ean_add_on_symbol: EanAddOnSymbol,
    /// Text rendering
    pub text_mode: TextMode,
    /// Fallback character set name
    pub character_set: String,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            formats: Vec::new(),
            try_harder: true,
            try_rotate: true,
            try_invert: true,
            try_downscale: true,
            binarizer: Binarizer::LocalAverage,
            is_pure: false,
            downscale_factor: 3,
            downscale_threshold: 500,
            min_line_count: 2,
            max_number_of_symbols: 255,
            try_code39_extended_mode: true,
            validate_code39_check_sum: false,
            validate_itf_check_sum: false,
            return_codabar_start_end: false,
            return_errors: false,
            ean_add_on_symbol: EanAddOnSymbol::Ignore,
            text_mode: TextMode::Hri,
            character_set: "Unknown".to_string(),
        }
    }
}

impl ReaderOptions {
    /// Engine defaults with only the enabled formats replaced
    pub fn with_formats(formats: Vec<String>) -> Self {
        Self {
            formats,
            ..Self::default()
        }
    }

    /// Whether the engine should look for `token`
    pub fn allows(&self, token: &str) -> bool {
        self.formats.is_empty() || self.formats.iter().any(|f| f == token)
    }
}
