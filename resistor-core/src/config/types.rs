//! Settings type definitions

use resistor_hal::VibePolicy;

use crate::color::Rgb;
use crate::label::LowerLabelMode;
use crate::skin::SkinMode;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Colors of the printed circuit board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AppearanceConfig {
    /// Board color behind everything
    pub background: Rgb,
    /// Text color for the date and lower labels
    pub silkscreen: Rgb,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            background: Rgb::KELLY_GREEN,
            silkscreen: Rgb::WHITE,
        }
    }
}

/// Behavior options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BehaviorConfig {
    /// Vibration on phone connection changes
    pub vibes: VibePolicy,
    /// Fixed skin or cycling
    pub skin_mode: SkinMode,
    /// Lower label behavior
    pub lower_label: LowerLabelMode,
}

impl BehaviorConfig {
    pub fn vibrate_on_disconnect(&self) -> bool {
        self.vibes.vibrate_on_disconnect()
    }
}

/// Every persisted option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Settings {
    pub appearance: AppearanceConfig,
    pub behavior: BehaviorConfig,
}
