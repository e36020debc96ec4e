use std::collections::HashMap;

use crate::logger::Logger;
use crate::models::SupportedFormat;

/// Host identifier to zxing format token, the whole supported catalogue
pub const ZXING_FORMATS: [(SupportedFormat, &str); 20] = [
    (SupportedFormat::QrCode, "QRCode"),
    (SupportedFormat::Aztec, "Aztec"),
    (SupportedFormat::Codabar, "Codabar"),
    (SupportedFormat::Code39, "Code39"),
    (SupportedFormat::Code93, "Code93"),
    (SupportedFormat::Code128, "Code128"),
    (SupportedFormat::DataMatrix, "DataMatrix"),
    (SupportedFormat::MaxiCode, "MaxiCode"),
    (SupportedFormat::Itf, "ITF"),
    (SupportedFormat::Ean13, "EAN-13"),
    (SupportedFormat::Ean8, "EAN-8"),
    (SupportedFormat::Pdf417, "PDF417"),
    (SupportedFormat::Rss14, "DataBar"),
    (SupportedFormat::RssExpanded, "DataBarExpanded"),
    (SupportedFormat::UpcA, "UPC-A"),
    (SupportedFormat::UpcE, "UPC-E"),
    (SupportedFormat::DataBarLimited, "DataBarLimited"),
    (SupportedFormat::DxFilmEdge, "DXFilmEdge"),
    (SupportedFormat::MicroQrCode, "MicroQRCode"),
    (SupportedFormat::RmqrCode, "rMQRCode"),
];

/// Two-way lookup between host identifiers and engine tokens
#[derive(Debug, Clone)]
pub struct FormatMap {
    forward: HashMap<SupportedFormat, &'static str>,
    reverse: HashMap<&'static str, SupportedFormat>,
}

impl FormatMap {
    /// Build the forward table and its inverse
    pub fn new() -> Self {
        let forward: HashMap<_, _> = ZXING_FORMATS.iter().copied().collect();
        let reverse = forward.iter().map(|(&format, &token)| (token, format)).collect();
        Self { forward, reverse }
    }

    /// Engine token for a host identifier
    pub fn to_engine(&self, format: SupportedFormat) -> Option<&'static str> {
        self.forward.get(&format).copied()
    }

    /// Host identifier for an engine token
    pub fn from_engine(&self, token: &str) -> Option<SupportedFormat> {
        self.reverse.get(token).copied()
    }

    /// Whether the engine has a counterpart for `format`
    pub fn supports(&self, format: SupportedFormat) -> bool {
        self.forward.contains_key(&format)
    }

    /// Number of supported identifiers
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// Always false for the built-in catalogue
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Translate the host's requested formats, in request order
    ///
    /// Requests with no engine counterpart are reported through `logger`, once
    /// each, and left out.
    pub fn engine_formats(&self, requested: &[SupportedFormat], logger: &dyn Logger) -> Vec<String> {
        let mut formats = Vec::with_capacity(requested.len());
        for &format in requested {
            match self.to_engine(format) {
                Some(token) => formats.push(token.to_string()),
                None => logger.log_error(&format!(
                    "{format} is not supported by ZXingHtml5QrcodeShim"
                )),
            }
        }
        formats
    }
}

impl Default for FormatMap {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Collect(RefCell<Vec<String>>);

    impl Logger for Collect {
        fn log(&self, _message: &str) {}
        fn warn(&self, _message: &str) {}
        fn log_error(&self, message: &str) {
            self.0.borrow_mut().push(message.to_string());
        }
    }

    #[test]
    fn test_round_trip() {
        let map = FormatMap::new();
        assert_eq!(map.len(), 20);
        for (format, token) in ZXING_FORMATS {
            assert_eq!(map.to_engine(format), Some(token));
            assert_eq!(map.from_engine(token), Some(format));
        }
    }

    #[test]
    fn test_reverse_is_inverse() {
        let map = FormatMap::new();
        assert_eq!(map.reverse.len(), map.forward.len());
        for (token, format) in &map.reverse {
            assert_eq!(map.forward.get(format), Some(token));
        }
    }

    #[test]
    fn test_extension_unsupported() {
        let map = FormatMap::new();
        assert!(!map.supports(SupportedFormat::UpcEanExtension));
        let supported = SupportedFormat::ALL.iter().filter(|f| map.supports(**f)).count();
        assert_eq!(supported, 20);
    }

    #[test]
    fn test_engine_formats_keeps_order_and_warns() {
        let map = FormatMap::new();
        let logger = Collect::default();
        let formats = map.engine_formats(
            &[
                SupportedFormat::Ean8,
                SupportedFormat::UpcEanExtension,
                SupportedFormat::QrCode,
            ],
            &logger,
        );
        assert_eq!(formats, vec!["EAN-8".to_string(), "QRCode".to_string()]);
        assert_eq!(
            *logger.0.borrow(),
            vec!["UPC_EAN_EXTENSION is not supported by ZXingHtml5QrcodeShim".to_string()]
        );
    }

    #[test]
    fn test_token_lookup_is_case_sensitive() {
        let map = FormatMap::new();
        assert_eq!(map.from_engine("rMQRCode"), Some(SupportedFormat::RmqrCode));
        assert_eq!(map.from_engine("RMQRCODE"), None);
    }
}
