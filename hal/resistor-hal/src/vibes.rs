//! Connection vibration service
//!
//! Buzzes the wrist when the paired phone connects or disconnects.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// When to vibrate on connection changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum VibePolicy {
    /// Never vibrate
    Never,
    /// Vibrate when the phone disconnects
    #[default]
    Disconnect,
    /// Vibrate when the phone connects or disconnects
    ConnectAndDisconnect,
}

impl VibePolicy {
    /// Parse the integer code used on the wire and in storage
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(VibePolicy::Never),
            1 => Some(VibePolicy::Disconnect),
            2 => Some(VibePolicy::ConnectAndDisconnect),
            _ => None,
        }
    }

    /// Integer code used on the wire and in storage
    pub fn code(self) -> i32 {
        match self {
            VibePolicy::Never => 0,
            VibePolicy::Disconnect => 1,
            VibePolicy::ConnectAndDisconnect => 2,
        }
    }

    /// Returns true if a disconnect should vibrate
    pub fn vibrate_on_disconnect(self) -> bool {
        !matches!(self, VibePolicy::Never)
    }
}

/// Connection vibration service trait
pub trait ConnectionVibes {
    /// Apply a new vibration policy
    fn set_policy(&mut self, policy: VibePolicy);
}
