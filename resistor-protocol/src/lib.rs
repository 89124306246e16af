//! Companion configuration protocol
//!
//! This crate defines what the watch receives from its paired phone app:
//! configuration dictionaries of integer tuples, plus the tap events the
//! accelerometer delivers. The transport that moves the bytes is the
//! platform's business; messages arrive here already decoded.
//!
//! # Message Overview
//!
//! A configuration message is a small dictionary:
//! ```text
//! ┌──────────────┬──────────────────────────────┐
//! │ KEY (u32)    │ VALUE (i32)                  │
//! ├──────────────┼──────────────────────────────┤
//! │ 0 BG_COLOR   │ packed 0xRRGGBB              │
//! │ 1 SILK_COLOR │ packed 0xRRGGBB              │
//! │ 2 VIBE_ON_BT │ 0 never, 1 disc., 2 both     │
//! │ 3 RES_TYPE   │ 0 TH, 1 SMD, 2 logo, 3 cycle │
//! │ 4 LOWER_LBL  │ 0 ohms, 1 beats, 2 30s, 3 tap│
//! └──────────────┴──────────────────────────────┘
//! ```
//!
//! Any subset of keys may be present. Unknown keys are carried but ignored.

#![no_std]
#![deny(unsafe_code)]

pub mod companion;
pub mod events;
pub mod messages;

pub use companion::{ColorScheme, CompanionSettings};
pub use events::{TapAxis, TapEvent};
pub use messages::{ConfigMessage, ConfigUpdate, MessageError, MessageKey, MAX_TUPLES};
