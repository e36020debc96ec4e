//! RGBA to luma conversion for engines that work on single-channel frames
//! Y = 0.299*R + 0.587*G + 0.114*B
//! Uses fast integer arithmetic: Y = (76*R + 150*G + 29*B) >> 8
//! Alpha is ignored.
use image::RgbaImage;
use rayon::prelude::*;

use crate::config::parallel_min_pixels;

/// Coefficients for grayscale conversion: Y = (76*R + 150*G + 29*B) >> 8
const COEF_R: u32 = 76;
const COEF_G: u32 = 150;
const COEF_B: u32 = 29;

#[inline]
fn luma(px: &[u8]) -> u8 {
    let lum = (COEF_R * px[0] as u32 + COEF_G * px[1] as u32 + COEF_B * px[2] as u32) >> 8;
    lum.min(255) as u8
}

/// Convert an RGBA buffer to luma on the current thread
pub fn rgba_to_grayscale(rgba: &[u8], width: usize, height: usize) -> Vec<u8> {
    let pixel_count = width * height;
    let mut gray = vec![0u8; pixel_count];
    rgba_to_grayscale_into(rgba, &mut gray);
    gray
}

/// Convert an RGBA buffer to luma, one rayon task per row
pub fn rgba_to_grayscale_parallel(rgba: &[u8], width: usize, height: usize) -> Vec<u8> {
    let pixel_count = width * height;
    let mut gray = vec![0u8; pixel_count];
    if width == 0 {
        return gray;
    }

    gray.par_chunks_mut(width)
        .zip(rgba.par_chunks(width * 4))
        .for_each(|(row, src)| rgba_to_grayscale_into(src, row));

    gray
}

/// Convert a full RGBA frame, going parallel for large frames
pub fn image_to_grayscale(image: &RgbaImage) -> Vec<u8> {
    let (width, height) = (image.width() as usize, image.height() as usize);
    if width * height >= parallel_min_pixels() {
        rgba_to_grayscale_parallel(image.as_raw(), width, height)
    } else {
        rgba_to_grayscale(image.as_raw(), width, height)
    }
}

fn rgba_to_grayscale_into(rgba: &[u8], gray: &mut [u8]) {
    // 8 pixels per step keeps the loop body branch-free
    let mut out = gray.chunks_exact_mut(8);
    let mut src = rgba.chunks_exact(32);
    for (dst, block) in (&mut out).zip(&mut src) {
        for (j, px) in block.chunks_exact(4).enumerate() {
            dst[j] = luma(px);
        }
    }

    for (dst, px) in out
        .into_remainder()
        .iter_mut()
        .zip(src.remainder().chunks_exact(4))
    {
        *dst = luma(px);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_to_grayscale() {
        // Pure white
        let gray = rgba_to_grayscale(&[255, 255, 255, 255], 1, 1);
        assert!(gray[0] >= 254);

        // Pure black, alpha ignored
        let gray = rgba_to_grayscale(&[0, 0, 0, 0], 1, 1);
        assert_eq!(gray[0], 0);

        // Pure green outweighs pure red
        let gray = rgba_to_grayscale(&[255, 0, 0, 255, 0, 255, 0, 255], 2, 1);
        assert!(gray[1] > gray[0]);
        assert!(gray[0] > 0);
    }

    #[test]
    fn test_remainder_pixels_converted() {
        // 11 pixels: one unrolled block plus three leftovers
        let rgba: Vec<u8> = (0..11).flat_map(|_| [200u8, 200, 200, 255]).collect();
        let gray = rgba_to_grayscale(&rgba, 11, 1);
        assert_eq!(gray.len(), 11);
        assert!(gray.iter().all(|&v| v == gray[0] && v > 190));
    }

    #[test]
    fn test_parallel_matches_serial() {
        let (width, height) = (37, 23);
        let rgba: Vec<u8> = (0..width * height * 4).map(|i| (i * 7 % 256) as u8).collect();
        assert_eq!(
            rgba_to_grayscale(&rgba, width, height),
            rgba_to_grayscale_parallel(&rgba, width, height)
        );
    }
}
