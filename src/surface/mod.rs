//! Pixel-bearing surfaces the decoder reads frames from
//!
//! A surface mirrors a browser canvas: it has a size and may hand out a 2D
//! drawing context, which in turn yields RGBA pixel data.

pub mod image_surface;
#[cfg(feature = "web")]
pub mod web;

pub use image_surface::ImageSurface;

use image::RgbaImage;

use crate::error::DecodeError;

/// RGBA raster, origin at (0, 0), rows top to bottom
pub type ImageData = RgbaImage;

/// 2D drawing context of a surface
pub trait Context2d {
    /// Copy the `width` x `height` region at (`x`, `y`)
    ///
    /// Pixels outside the surface read as transparent black. Fails with
    /// [`DecodeError::InvalidRegion`] when either dimension is zero, and with
    /// [`DecodeError::PixelsUnreadable`] when the context withholds its pixels.
    fn image_data(&self, x: u32, y: u32, width: u32, height: u32)
    -> Result<ImageData, DecodeError>;
}

/// A canvas-like surface
pub trait Canvas {
    /// Width in pixels
    fn width(&self) -> u32;

    /// Height in pixels
    fn height(&self) -> u32;

    /// The surface's 2D context, `None` when it cannot supply one
    fn context_2d(&self) -> Option<Box<dyn Context2d + '_>>;
}

impl Context2d for RgbaImage {
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

        if x == 0 && y == 0 && width == self.width() && height == self.height() {
            return Ok(self.clone());
        }

        let mut out = RgbaImage::new(width, height);
        let x_end = x.saturating_add(width).min(self.width());
        let y_end = y.saturating_add(height).min(self.height());
        for sy in y..y_end {
            for sx in x..x_end {
                out.put_pixel(sx - x, sy - y, *self.get_pixel(sx, sy));
            }
        }
        Ok(out)
    }
}

impl<T: Context2d + ?Sized> Context2d for &T {
    fn image_data(
        &self,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    ) -> Result<ImageData, DecodeError> {
        (**self).image_data(x, y, width, height)
    }
}
