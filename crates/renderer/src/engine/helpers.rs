// SPDX-License-Identifier: MIT

//!
//! Helper functions
//!

use crate::APPROX_CHAR_WIDTH_EM;

/// Estimate the rendered width of a string.  The engine has no access to real
/// font metrics, so ASCII characters count as `APPROX_CHAR_WIDTH_EM` and
/// everything else (e.g. CJK) as a full em.
pub(crate) fn approx_text_width(text: &str, font_size: f64) -> f64 {
    text.chars()
        .map(|c| if c.is_ascii() { APPROX_CHAR_WIDTH_EM } else { 1.0 })
        .sum::<f64>()
        * font_size
}

/// The baseline that vertically centres a line of text on `centre_y`
pub(crate) fn baseline_for_centre(centre_y: f64, font_size: f64) -> f64 {
    centre_y + 0.35 * font_size
}
