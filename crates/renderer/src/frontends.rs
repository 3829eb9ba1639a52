// SPDX-License-Identifier: MIT

//!
//! Frontends that draw a finished [`Layout`](crate::Layout)
//!

pub mod desktop_egui;
