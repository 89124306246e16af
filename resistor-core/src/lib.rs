//! Board-agnostic core logic for the Resistor Time watchface
//!
//! This crate contains all face logic that does not depend on a specific
//! watch platform:
//!
//! - Digit to resistor color-band codec and text labels
//! - Beat time encoder
//! - Skin selection and cycling
//! - Lower label mode state machine
//! - Persisted settings (read-or-initialize, inbound updates)
//! - Frame composition into draw operations
//! - The `Watchface` application state and event dispatch

#![no_std]
#![deny(unsafe_code)]

pub mod beat;
pub mod codec;
pub mod color;
pub mod compose;
pub mod config;
pub mod face;
pub mod label;
pub mod skin;
pub mod time;

pub use color::Rgb;
pub use compose::{compose_frame, DisplayGeometry, DrawOp, Frame};
pub use config::Settings;
pub use face::{dispatch, start, Effects, Event, RedrawPolicy, Watchface};
pub use label::{LabelState, LowerLabel, LowerLabelMode};
pub use skin::{Skin, SkinMode, SkinSelector};
pub use time::TimeSample;
