// SPDX-License-Identifier: MIT

//!
//! *Part of the wider Nenpyo project*
//!
//! This crate lays out timelines.  Given a [`TimelineInput`] (a date range,
//! events, and coloured background segments) the [`Engine`] produces a
//! [`Layout`]: an ordered list of [`DrawCommand`]s in absolute canvas
//! coordinates, plus the canvas size.
//!
//! The engine is a pure function of its input and its [`RendererConfig`].  It
//! is made up of:
//!
//! - A temporal scale mapping dates to x positions
//! - A tick generator (one tick per calendar month)
//! - A band builder for the coloured background segments
//! - An event layout engine for point and span events
//!
//! The draw commands are drawn back to front, so any frontend that can draw
//! lines, rectangles, circles, and text can render a timeline.  An `egui`
//! frontend for native desktop rendering is included.
//!
//! [`TimelineInput`]: nenpyo_core::TimelineInput
//!

pub mod config;
pub mod engine;
pub mod error;
pub mod frontends;

pub use config::*;
pub use engine::*;
pub use error::*;
pub use frontends::desktop_egui::NenpyoRendererEgui;
pub use nenpyo_core::Colour;
