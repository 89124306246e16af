//! Tap events from the accelerometer

/// Accelerometer axis a tap was detected on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TapAxis {
    X,
    Y,
    Z,
}

/// A single wrist tap or flick
///
/// The watchface only cares that a tap happened; axis and direction are
/// carried for completeness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TapEvent {
    /// Axis of the tap
    pub axis: TapAxis,
    /// +1 or -1 along the axis
    pub direction: i8,
}

impl TapEvent {
    /// Create a tap event, normalizing direction to ±1
    pub fn new(axis: TapAxis, direction: i8) -> Self {
        Self {
            axis,
            direction: if direction < 0 { -1 } else { 1 },
        }
    }
}

impl Default for TapEvent {
    fn default() -> Self {
        Self::new(TapAxis::X, 1)
    }
}
