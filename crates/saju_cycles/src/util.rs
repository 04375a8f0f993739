//! Shared scoring helpers.

/// Clamp a raw score into `lo..=hi` and narrow it to `u8`.
pub(crate) fn clamp_score(raw: i32, lo: u8, hi: u8) -> u8 {
    raw.clamp(lo as i32, hi as i32) as u8
}
