//! Process-wide knobs read once from the environment

use std::sync::OnceLock;

fn parse_env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

fn debug_flag(raw: Option<&str>) -> bool {
    raw.is_some()
}

fn max_dim(raw: Option<&str>) -> Option<u32> {
    match raw.and_then(|v| v.trim().parse::<u32>().ok()) {
        None | Some(0) => None,
        Some(v) => Some(v),
    }
}

static DEBUG_ENABLED: OnceLock<bool> = OnceLock::new();

/// `ZXING_SHIM_DEBUG` set: every decoder behaves as if built verbose
pub fn debug_enabled() -> bool {
    *DEBUG_ENABLED
        .get_or_init(|| debug_flag(std::env::var("ZXING_SHIM_DEBUG").ok().as_deref()))
}

static PARALLEL_MIN_PIXELS: OnceLock<usize> = OnceLock::new();

/// Frames with at least this many pixels are converted to luma on the rayon pool
pub(crate) fn parallel_min_pixels() -> usize {
    *PARALLEL_MIN_PIXELS
        .get_or_init(|| parse_env_usize("ZXING_SHIM_PARALLEL_MIN_PIXELS", 1024 * 1024).max(1))
}

/// `ZXING_SHIM_MAX_DIM`: longest side images are downscaled to when loaded from disk.
/// Unset or `0` disables downscaling.
pub fn max_dim_from_env() -> Option<u32> {
    max_dim(std::env::var("ZXING_SHIM_MAX_DIM").ok().as_deref())
}
