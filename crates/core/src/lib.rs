// SPDX-License-Identifier: MIT

//!
//! *Part of the wider Spacetime project*
//!
//! This crate defines the temporal coordinate model used across the Spacetime
//! project: how a point in time (in years before present) maps to a pixel,
//! which events are worth drawing at a given zoom, and how regions are named
//! through history.
//!
//! Everything here is a pure function of its inputs.  The application owns a
//! single [`AppState`] and passes it (or parts of it) in explicitly.
//!
//! This crate aims to provide APIs for each type so that if a type is
//! instantiated, the developer can be sure it's valid.
//!

mod category;
mod dataset;
mod era;
mod event;
mod format;
mod region;
mod scale;
mod significance;
mod state;
mod ticks;
mod time;
mod viewport;
mod zoom;

pub use category::*;
pub use dataset::*;
pub use era::*;
pub use event::*;
pub use format::*;
pub use region::*;
pub use scale::*;
pub use significance::*;
pub use state::*;
pub use ticks::*;
pub use time::*;
pub use viewport::*;
pub use zoom::*;
