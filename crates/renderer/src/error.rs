// SPDX-License-Identifier: MIT

//!
//! Errors raised while laying out a timeline
//!

use nenpyo_core::Date;
use thiserror::Error;

/// The only failure that stops a timeline from being laid out.  Malformed
/// events and segments are skipped instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The range must cover at least one day
    #[error("Invalid range: `{end}` is not after `{start}`")]
    InvalidRange { start: Date, end: Date },
}

impl LayoutError {
    /// The message a frontend shows in place of the chart
    pub fn placeholder_message(&self) -> &'static str {
        match self {
            LayoutError::InvalidRange { .. } => "Set a valid period",
        }
    }
}
