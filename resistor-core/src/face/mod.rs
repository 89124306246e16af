//! Watchface application state
//!
//! One owned struct holds everything the face needs between events. The
//! platform event loop hands each event to [`Watchface::handle`] (or
//! [`dispatch`], which also applies the requested side effects) and asks
//! for a frame through [`Watchface::compose`] whenever the display is
//! dirty.

pub mod events;
pub mod watchface;

pub use events::{Effects, Event, RedrawPolicy};
pub use watchface::{dispatch, start, Watchface};
