// SPDX-License-Identifier: MIT

//!
//! *Part of the wider Nenpyo project*
//!
//! This crate defines the basic datatypes used across the Nenpyo project: the
//! records a timeline is built from (its date range, events, and coloured
//! background segments) and the small value types they are made of.
//!
//! Events and segments come straight from user input, so they can hold
//! missing or inconsistent dates.  They are never rejected on construction;
//! instead [`Event::kind`] and [`ColorSegment::dates`] report whether a record
//! can be drawn, and the renderer skips the ones that can't.
//!

mod colour;
mod date;
mod event;
mod input;
mod range;
mod segment;

pub use colour::*;
pub use date::*;
pub use event::*;
pub use input::*;
pub use range::*;
pub use segment::*;
