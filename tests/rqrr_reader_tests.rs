//! End-to-end decoding through the native QR engine
//!
//! Frames are rendered with the `qrcode` crate, so no image fixtures are needed.

use image::{Rgba, RgbaImage};
use qrcode::{Color, QrCode};
use std::sync::Arc;
use zxing_shim::{
    BaseLogger, DecodeError, DecoderAsync, ImageSurface, ReaderOptions, RqrrReader,
    SupportedFormat, ZxingDecoder,
};

const SCALE: u32 = 6;
const QUIET_ZONE: u32 = 4;

fn render_qr(content: &str) -> RgbaImage {
    let code = QrCode::new(content.as_bytes()).expect("encodable content");
    let modules = code.width() as u32;
    let colors = code.to_colors();
    let side = (modules + 2 * QUIET_ZONE) * SCALE;

    RgbaImage::from_fn(side, side, |x, y| {
        let mx = (x / SCALE) as i64 - QUIET_ZONE as i64;
        let my = (y / SCALE) as i64 - QUIET_ZONE as i64;
        let inside = (0..modules as i64).contains(&mx) && (0..modules as i64).contains(&my);
        if inside && colors[(my as u32 * modules + mx as u32) as usize] == Color::Dark {
            Rgba([0, 0, 0, 255])
        } else {
            Rgba([255, 255, 255, 255])
        }
    })
}

fn decoder(formats: &[SupportedFormat]) -> ZxingDecoder {
    ZxingDecoder::new(
        formats,
        false,
        Arc::new(BaseLogger::new(false)),
        Arc::new(RqrrReader::new()),
    )
    .expect("rqrr engine is always available")
}

#[test]
fn reader_finds_rendered_code() {
    let image = render_qr("https://example.com/parcel/42");
    let matches = RqrrReader::new().read(&image, &ReaderOptions::default());

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].text, "https://example.com/parcel/42");
    assert_eq!(matches[0].format, "QRCode");
}

#[tokio::test]
async fn adapter_decodes_rendered_code() {
    let surface = ImageSurface::new(render_qr("12345678"));
    let result = decoder(&[SupportedFormat::QrCode])
        .decode_async(&surface)
        .await
        .expect("decode");

    assert_eq!(result.text, "12345678");
    assert_eq!(result.format.format, SupportedFormat::QrCode);
    assert_eq!(result.debug_data.decoder_name, "zxing-js");
}

#[tokio::test]
async fn qr_not_requested_finds_nothing() {
    let surface = ImageSurface::new(render_qr("hidden"));
    let err = decoder(&[SupportedFormat::Ean13])
        .decode_async(&surface)
        .await
        .unwrap_err();

    assert_eq!(err, DecodeError::NoSymbolFound);
}

#[tokio::test]
async fn blank_frame_finds_nothing() {
    let surface = ImageSurface::new(RgbaImage::from_pixel(120, 80, Rgba([255, 255, 255, 255])));
    let err = decoder(&SupportedFormat::ALL)
        .decode_async(&surface)
        .await
        .unwrap_err();

    assert_eq!(err, DecodeError::NoSymbolFound);
}
