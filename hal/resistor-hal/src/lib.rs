//! Resistor Time platform abstraction layer
//!
//! This crate defines the traits the watchface core uses to talk to the
//! services a watch platform provides. Each platform port implements them
//! once; the face logic never touches the platform directly.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Platform adapter (event loop, window)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  resistor-core (face state + composer)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  resistor-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`storage::SettingsStore`] - Persistent integer settings
//! - [`timer::TickTimer`] - Wall-clock tick subscription
//! - [`vibes::ConnectionVibes`] - Vibration on phone (dis)connect

#![no_std]
#![deny(unsafe_code)]

pub mod storage;
pub mod timer;
pub mod vibes;

// Re-export key traits at crate root for convenience
pub use storage::{MemoryStore, SettingsStore, StorageError, StorageKey};
pub use timer::{TickTimer, TickUnit};
pub use vibes::{ConnectionVibes, VibePolicy};
