//! Utility functions for image processing
//!
//! - Grayscale conversion (RGBA to luminance, serial and rayon-parallel)

pub mod grayscale;
