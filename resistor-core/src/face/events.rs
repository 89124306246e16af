//! Inputs to the watchface and the side effects they request

use resistor_hal::{TickUnit, VibePolicy};
use resistor_protocol::{ConfigMessage, TapEvent};

use crate::time::TimeSample;

/// Everything the platform event loop delivers
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Clock tick at the subscribed granularity
    Tick(TimeSample),
    /// Wrist tap from the accelerometer
    Tap(TapEvent),
    /// Settings from the companion app
    Config(ConfigMessage),
}

/// Side effects requested by a handler
///
/// The face never touches platform services directly; the adapter applies
/// these after each event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Effects {
    /// The display was marked dirty
    pub redraw: bool,
    /// New connection vibration policy
    pub vibes: Option<VibePolicy>,
    /// New tick subscription
    pub tick_unit: Option<TickUnit>,
}

impl Effects {
    /// Nothing to do
    pub const fn none() -> Self {
        Self {
            redraw: false,
            vibes: None,
            tick_unit: None,
        }
    }

    /// Only a redraw
    pub const fn redraw() -> Self {
        Self {
            redraw: true,
            vibes: None,
            tick_unit: None,
        }
    }

    /// Check if nothing was requested
    pub fn is_empty(&self) -> bool {
        !self.redraw && self.vibes.is_none() && self.tick_unit.is_none()
    }
}

/// When a tick marks the display dirty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RedrawPolicy {
    /// Every tick redraws
    #[default]
    EveryTick,
    /// Only ticks that change something visible redraw
    OnChange,
}
