// SPDX-License-Identifier: MIT

//!
//! Layout constants
//!

/// Narrowest a background band is drawn, so inverted or same-day segments
/// remain visible
pub const MIN_BAND_WIDTH: f64 = 2.0;

/// Narrowest a span event's bar is drawn, so zero-length spans stay readable
pub const MIN_BAR_WIDTH: f64 = 20.0;

/// The logical canvas width
pub const DEFAULT_CANVAS_WIDTH: f64 = 800.0;

/// The logical canvas height
pub const DEFAULT_CANVAS_HEIGHT: f64 = 600.0;

/// Margin on every side of the drawing area
pub const DEFAULT_MARGIN: f64 = 50.0;

/// Approximate advance of one character as a fraction of the font size.  Used
/// to decide whether a label fits inside a bar.
pub const APPROX_CHAR_WIDTH_EM: f64 = 0.6;
