//! Watchface settings
//!
//! Settings are persisted one integer per option in the platform's
//! settings store and updated from companion app messages.

pub mod store;
pub mod types;

pub use store::Setting;
pub use types::*;
