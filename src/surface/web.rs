use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{Canvas, Context2d, ImageData};
use crate::error::DecodeError;

impl Canvas for HtmlCanvasElement {
    fn width(&self) -> u32 {
        HtmlCanvasElement::width(self)
    }

    fn height(&self) -> u32 {
        HtmlCanvasElement::height(self)
    }

    fn context_2d(&self) -> Option<Box<dyn Context2d + '_>> {
        // `get_context` yields Ok(None) when the canvas is bound to another context type
        let context = self
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Box::new(context))
    }
}

impl Context2d for CanvasRenderingContext2d {
    fn image_data(
        &self,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    ) -> Result<ImageData, DecodeError> {
        if width == 0 || height == 0 {
            return Err(DecodeError::InvalidRegion { width, height });
        }
        let data = self
            .get_image_data(x as f64, y as f64, width as f64, height as f64)
            .map_err(|err| DecodeError::PixelsUnreadable(format!("{err:?}")))?;
        ImageData::from_raw(data.width(), data.height(), data.data().0)
            .ok_or(DecodeError::InvalidRegion { width, height })
    }
}
