use crate::config::max_dim_from_env;
use crate::decoder::format_map::FormatMap;
use crate::models::SupportedFormat;
use crate::surface::ImageSurface;
use image::{GenericImageView, RgbaImage};
use std::path::Path;

/// Load an image as RGBA, downscaled to `ZXING_SHIM_MAX_DIM` when set.
pub fn load_rgba<P: AsRef<Path>>(path: P) -> Result<RgbaImage, image::ImageError> {
    load_rgba_with_max_dim(path, max_dim_from_env())
}

/// Load an image as RGBA, keeping its longest side within `max_dim`.
pub fn load_rgba_with_max_dim<P: AsRef<Path>>(
    path: P,
    max_dim: Option<u32>,
) -> Result<RgbaImage, image::ImageError> {
    let img = image::open(path)?;
    let rgba = match max_dim {
        Some(max_dim) if img.dimensions().0.max(img.dimensions().1) > max_dim => img
            .resize(max_dim, max_dim, image::imageops::FilterType::Triangle)
            .to_rgba8(),
        _ => img.to_rgba8(),
    };
    Ok(rgba)
}

/// Load an image file into an in-memory surface.
pub fn load_surface<P: AsRef<Path>>(path: P) -> Result<ImageSurface, image::ImageError> {
    load_rgba(path).map(ImageSurface::new)
}

/// One row per host identifier: name, discriminant, engine token if supported.
pub fn format_table() -> Vec<(SupportedFormat, Option<&'static str>)> {
    let map = FormatMap::new();
    SupportedFormat::ALL
        .iter()
        .map(|&format| (format, map.to_engine(format)))
        .collect()
}
