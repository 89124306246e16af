//! Skin selection
//!
//! A skin is the artwork drawn in the middle of the face. The wearer either
//! picks one, or lets the face cycle through all three, twenty seconds each.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Wire/storage code that requests cycling instead of a fixed skin
pub const CYCLE_CODE: i32 = 3;

/// Artwork style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Skin {
    /// Axial carbon resistor with four color bands
    #[default]
    ThroughHole,
    /// Chip resistor with a printed four-digit marking
    SurfaceMount,
    /// Logo artwork only
    Logo,
}

impl Skin {
    /// Parse a fixed skin code
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Skin::ThroughHole),
            1 => Some(Skin::SurfaceMount),
            2 => Some(Skin::Logo),
            _ => None,
        }
    }

    /// Fixed skin code
    pub fn code(self) -> i32 {
        match self {
            Skin::ThroughHole => 0,
            Skin::SurfaceMount => 1,
            Skin::Logo => 2,
        }
    }
}

/// Skin selection mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SkinMode {
    /// Always show one skin
    Fixed(Skin),
    /// Rotate skins on the 0/20/40 second marks
    Cycling,
}

impl Default for SkinMode {
    fn default() -> Self {
        SkinMode::Fixed(Skin::ThroughHole)
    }
}

impl SkinMode {
    /// Parse a companion skin code (0-2 fixed, 3 cycle)
    pub fn from_code(code: i32) -> Option<Self> {
        if code == CYCLE_CODE {
            Some(SkinMode::Cycling)
        } else {
            Skin::from_code(code).map(SkinMode::Fixed)
        }
    }

    /// Companion skin code
    pub fn code(self) -> i32 {
        match self {
            SkinMode::Fixed(skin) => skin.code(),
            SkinMode::Cycling => CYCLE_CODE,
        }
    }

    /// Skin shown when this mode takes effect
    pub fn initial_skin(self) -> Skin {
        match self {
            SkinMode::Fixed(skin) => skin,
            SkinMode::Cycling => Skin::ThroughHole,
        }
    }

    pub fn is_cycling(self) -> bool {
        matches!(self, SkinMode::Cycling)
    }
}

/// Skin that takes over at `second` while cycling, if any
pub fn cycle_skin_at(second: u8) -> Option<Skin> {
    match second {
        0 => Some(Skin::ThroughHole),
        20 => Some(Skin::SurfaceMount),
        40 => Some(Skin::Logo),
        _ => None,
    }
}

/// Active skin tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SkinSelector {
    active: Skin,
    cycling: bool,
}

impl SkinSelector {
    /// Create a selector for a mode
    pub fn new(mode: SkinMode) -> Self {
        Self {
            active: mode.initial_skin(),
            cycling: mode.is_cycling(),
        }
    }

    /// Currently drawn skin
    pub fn active(&self) -> Skin {
        self.active
    }

    pub fn is_cycling(&self) -> bool {
        self.cycling
    }

    /// Switch mode; the active skin resets to the mode's initial skin
    pub fn set_mode(&mut self, mode: SkinMode) {
        *self = Self::new(mode);
    }

    /// Advance on a clock tick
    ///
    /// Returns true if the active skin changed.
    pub fn on_tick(&mut self, second: u8) -> bool {
        if !self.cycling {
            return false;
        }
        match cycle_skin_at(second) {
            Some(skin) if skin != self.active => {
                self.active = skin;
                true
            }
            _ => false,
        }
    }
}
