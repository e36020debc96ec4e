use image::RgbaImage;

use super::{Canvas, Context2d};

/// In-memory canvas over an RGBA image
#[derive(Debug, Clone)]
pub struct ImageSurface {
    width: u32,
    height: u32,
    pixels: Option<RgbaImage>,
}

impl ImageSurface {
    /// Surface backed by `image`
    pub fn new(image: RgbaImage) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
            pixels: Some(image),
        }
    }

    /// Surface of the given size whose 2D context is unavailable,
    /// like a canvas already bound to a WebGL context
    pub fn detached(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: None,
        }
    }

    /// Backing image, if any
    pub fn image(&self) -> Option<&RgbaImage> {
        self.pixels.as_ref()
    }
}

impl From<RgbaImage> for ImageSurface {
    fn from(image: RgbaImage) -> Self {
        Self::new(image)
    }
}

impl Canvas for ImageSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn context_2d(&self) -> Option<Box<dyn Context2d + '_>> {
        self.pixels
            .as_ref()
            .map(|image| Box::new(image) as Box<dyn Context2d + '_>)
    }
}
