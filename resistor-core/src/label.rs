//! Lower label mode state machine
//!
//! The label under the artwork shows either the numeric time in ohms or
//! the beat time. Which one is a pure function of the mode, the current
//! second and, in tap mode, a toggle.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Seconds each label is shown in [`LowerLabelMode::AlternateTimer`]
pub const ALTERNATE_PERIOD_S: u8 = 30;

/// Lower label behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LowerLabelMode {
    /// Always the numeric time
    #[default]
    StandardTime,
    /// Always beat time
    BeatTime,
    /// Numeric time for the first half of each minute, beats for the second
    AlternateTimer,
    /// Switch on every wrist tap
    ToggleOnTap,
}

/// What the lower label shows right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LowerLabel {
    Time,
    Beats,
}

impl LowerLabelMode {
    /// Parse the wire/storage code
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(LowerLabelMode::StandardTime),
            1 => Some(LowerLabelMode::BeatTime),
            2 => Some(LowerLabelMode::AlternateTimer),
            3 => Some(LowerLabelMode::ToggleOnTap),
            _ => None,
        }
    }

    /// Wire/storage code
    pub fn code(self) -> i32 {
        match self {
            LowerLabelMode::StandardTime => 0,
            LowerLabelMode::BeatTime => 1,
            LowerLabelMode::AlternateTimer => 2,
            LowerLabelMode::ToggleOnTap => 3,
        }
    }

    /// Decide the label for a given second
    pub fn select(self, second: u8, state: &LabelState) -> LowerLabel {
        match self {
            LowerLabelMode::StandardTime => LowerLabel::Time,
            LowerLabelMode::BeatTime => LowerLabel::Beats,
            LowerLabelMode::AlternateTimer => {
                if second < ALTERNATE_PERIOD_S {
                    LowerLabel::Time
                } else {
                    LowerLabel::Beats
                }
            }
            LowerLabelMode::ToggleOnTap => {
                if state.beats_visible() {
                    LowerLabel::Beats
                } else {
                    LowerLabel::Time
                }
            }
        }
    }

    /// Check if the label flips at `second` without any event
    pub fn is_boundary(self, second: u8) -> bool {
        matches!(self, LowerLabelMode::AlternateTimer) && second % ALTERNATE_PERIOD_S == 0
    }

    /// Check if this mode needs per-second ticks
    pub fn needs_seconds(self) -> bool {
        !matches!(self, LowerLabelMode::StandardTime)
    }
}

/// Tap toggle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LabelState {
    beats_visible: bool,
}

impl LabelState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn beats_visible(&self) -> bool {
        self.beats_visible
    }

    /// Handle a tap
    ///
    /// Returns true if the label flipped; taps only count in
    /// [`LowerLabelMode::ToggleOnTap`].
    pub fn on_tap(&mut self, mode: LowerLabelMode) -> bool {
        if mode != LowerLabelMode::ToggleOnTap {
            return false;
        }
        self.beats_visible = !self.beats_visible;
        true
    }

    /// Back to showing the numeric time
    pub fn reset(&mut self) {
        self.beats_visible = false;
    }
}
