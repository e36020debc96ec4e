use std::fmt;
use std::str::FromStr;

use crate::error::UnknownFormatName;

/// Symbology identifiers in the host scanner's vocabulary
///
/// Discriminants follow the host enumeration so values can cross an FFI
/// boundary as plain integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SupportedFormat {
    /// QR Code (Model 2)
    QrCode = 0,
    /// Aztec
    Aztec = 1,
    /// Codabar
    Codabar = 2,
    /// Code 39
    Code39 = 3,
    /// Code 93
    Code93 = 4,
    /// Code 128
    Code128 = 5,
    /// Data Matrix
    DataMatrix = 6,
    /// MaxiCode
    MaxiCode = 7,
    /// Interleaved 2 of 5
    Itf = 8,
    /// EAN-13
    Ean13 = 9,
    /// EAN-8
    Ean8 = 10,
    /// PDF417
    Pdf417 = 11,
    /// GS1 DataBar (formerly RSS-14)
    Rss14 = 12,
    /// GS1 DataBar Expanded
    RssExpanded = 13,
    /// UPC-A
    UpcA = 14,
    /// UPC-E
    UpcE = 15,
    /// UPC/EAN 2 or 5 digit add-on
    UpcEanExtension = 16,
    /// GS1 DataBar Limited
    DataBarLimited = 17,
    /// DX film edge code
    DxFilmEdge = 18,
    /// Micro QR Code (M1-M4)
    MicroQrCode = 19,
    /// Rectangular Micro QR Code
    RmqrCode = 20,
}

impl SupportedFormat {
    /// Every identifier the host knows about, in discriminant order
    pub const ALL: [SupportedFormat; 21] = [
        SupportedFormat::QrCode,
        SupportedFormat::Aztec,
        SupportedFormat::Codabar,
        SupportedFormat::Code39,
        SupportedFormat::Code93,
        SupportedFormat::Code128,
        SupportedFormat::DataMatrix,
        SupportedFormat::MaxiCode,
        SupportedFormat::Itf,
        SupportedFormat::Ean13,
        SupportedFormat::Ean8,
        SupportedFormat::Pdf417,
        SupportedFormat::Rss14,
        SupportedFormat::RssExpanded,
        SupportedFormat::UpcA,
        SupportedFormat::UpcE,
        SupportedFormat::UpcEanExtension,
        SupportedFormat::DataBarLimited,
        SupportedFormat::DxFilmEdge,
        SupportedFormat::MicroQrCode,
        SupportedFormat::RmqrCode,
    ];

    /// Host-side name, e.g. `QR_CODE`
    pub fn name(&self) -> &'static str {
        match self {
            SupportedFormat::QrCode => "QR_CODE",
            SupportedFormat::Aztec => "AZTEC",
            SupportedFormat::Codabar => "CODABAR",
            SupportedFormat::Code39 => "CODE_39",
            SupportedFormat::Code93 => "CODE_93",
            SupportedFormat::Code128 => "CODE_128",
            SupportedFormat::DataMatrix => "DATA_MATRIX",
            SupportedFormat::MaxiCode => "MAXICODE",
            SupportedFormat::Itf => "ITF",
            SupportedFormat::Ean13 => "EAN_13",
            SupportedFormat::Ean8 => "EAN_8",
            SupportedFormat::Pdf417 => "PDF_417",
            SupportedFormat::Rss14 => "RSS_14",
            SupportedFormat::RssExpanded => "RSS_EXPANDED",
            SupportedFormat::UpcA => "UPC_A",
            SupportedFormat::UpcE => "UPC_E",
            SupportedFormat::UpcEanExtension => "UPC_EAN_EXTENSION",
            SupportedFormat::DataBarLimited => "DATABAR_LIMITED",
            SupportedFormat::DxFilmEdge => "DX_FILM_EDGE",
            SupportedFormat::MicroQrCode => "MICRO_QR_CODE",
            SupportedFormat::RmqrCode => "RMQR_CODE",
        }
    }
}

impl fmt::Display for SupportedFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SupportedFormat {
    type Err = UnknownFormatName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|format| format.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownFormatName(s.to_string()))
    }
}

/// Format of a decoded symbol as reported to the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultFormat {
    /// Host identifier
    pub format: SupportedFormat,
    /// Printable name of `format`
    pub format_name: String,
}

impl ResultFormat {
    /// Build the result format for a host identifier
    pub fn create(format: SupportedFormat) -> Self {
        Self {
            format,
            format_name: format.name().to_string(),
        }
    }
}

impl fmt::Display for ResultFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_name)
    }
}
