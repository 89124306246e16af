//! Companion-side settings
//!
//! The phone app offers a handful of board color schemes and sends the
//! resulting colors together with the other options in one message. Hosts
//! and simulators use this to produce the same messages the app would.

use crate::messages::{ConfigMessage, MessageError, MessageKey};

/// Kelly green board
pub const BOARD_GREEN: u32 = 0x55AA00;
/// Imperial purple board
pub const BOARD_PURPLE: u32 = 0x550055;
pub const WHITE: u32 = 0xFFFFFF;
pub const BLACK: u32 = 0x000000;

/// Board color scheme offered by the companion app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorScheme {
    /// Green board, white silkscreen
    #[default]
    WhiteOnGreen,
    /// Black board, white silkscreen
    WhiteOnBlack,
    /// White board, black silkscreen
    BlackOnWhite,
    /// Purple board, white silkscreen
    WhiteOnPurple,
    /// User-picked colors
    Custom { background: u32, silkscreen: u32 },
}

impl ColorScheme {
    /// Background and silkscreen colors, packed 0xRRGGBB
    pub fn colors(self) -> (u32, u32) {
        match self {
            ColorScheme::WhiteOnGreen => (BOARD_GREEN, WHITE),
            ColorScheme::WhiteOnBlack => (BLACK, WHITE),
            ColorScheme::BlackOnWhite => (WHITE, BLACK),
            ColorScheme::WhiteOnPurple => (BOARD_PURPLE, WHITE),
            ColorScheme::Custom {
                background,
                silkscreen,
            } => (background & 0x00FF_FFFF, silkscreen & 0x00FF_FFFF),
        }
    }
}

/// Everything the settings page submits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CompanionSettings {
    pub scheme: ColorScheme,
    /// 0 never, 1 on disconnect, 2 on connect and disconnect
    pub vibe_on_bt: i32,
    /// 0 through-hole, 1 surface mount, 2 logo, 3 cycle
    pub resistor_type: i32,
    /// 0 ohms, 1 beats, 2 alternate every 30 s, 3 toggle on tap
    pub lower_label: i32,
}

impl CompanionSettings {
    /// Build the message the companion sends on submit
    pub fn to_message(&self) -> Result<ConfigMessage, MessageError> {
        let (background, silkscreen) = self.scheme.colors();
        ConfigMessage::new()
            .with(MessageKey::VibeOnBt, self.vibe_on_bt)?
            .with(MessageKey::SilkColor, silkscreen as i32)?
            .with(MessageKey::BgColor, background as i32)?
            .with(MessageKey::ResistorType, self.resistor_type)?
            .with(MessageKey::LowerLabel, self.lower_label)
    }
}
