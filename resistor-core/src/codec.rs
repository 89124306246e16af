//! Digit to color-band codec and text labels
//!
//! A resistor's first bands encode digits with the standard color code:
//! black 0, brown 1, red 2, orange 3, yellow 4, green 5, blue 6, violet 7,
//! gray 8, white 9. Each two-digit clock field maps to one pair of bands.

use core::fmt::Write;

use heapless::String;

use crate::color::Rgb;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum label length in bytes (`Ω` takes two)
pub const LABEL_LEN: usize = 8;

/// A short text label
pub type Label = String<LABEL_LEN>;

/// The ohm sign appended to compact time labels
pub const OHM: char = 'Ω';

/// Band colors indexed by digit
pub const PALETTE: [Rgb; 10] = [
    Rgb::BLACK,
    Rgb::WINDSOR_TAN,
    Rgb::RED,
    Rgb::CHROME_YELLOW,
    Rgb::YELLOW,
    Rgb::GREEN,
    Rgb::BLUE,
    Rgb::VIVID_VIOLET,
    Rgb::LIGHT_GRAY,
    Rgb::WHITE,
];

/// How the numeric time label is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TimeLabelStyle {
    /// `hour*100 + minute` followed by `Ω`, e.g. `905Ω`
    #[default]
    Compact,
    /// Hour, zero-padded minute and ` R`, e.g. `905 R`
    Legacy,
}

/// Split a two-digit value into (tens, ones) digit indices
///
/// `value` must be in 0..=99.
pub const fn band_indices(value: u8) -> (u8, u8) {
    (value / 10 % 10, value % 10)
}

/// Band colors for a two-digit value, tens band first
///
/// `value` must be in 0..=99.
pub fn band_colors(value: u8) -> (Rgb, Rgb) {
    debug_assert!(value < 100);
    let (tens, ones) = band_indices(value);
    (PALETTE[tens as usize], PALETTE[ones as usize])
}

/// Date silkscreen label: `R` + month + day, both zero-padded
pub fn format_date_code(month: u8, day: u8) -> Label {
    let mut label = Label::new();
    let _ = write!(label, "R{:02}{:02}", month, day);
    label
}

/// Numeric time label
///
/// The hour is never padded; the minute always is.
pub fn format_time_label(hour: u8, minute: u8, style: TimeLabelStyle) -> Label {
    let mut label = Label::new();
    let _ = match style {
        TimeLabelStyle::Compact => write!(
            label,
            "{}{}",
            u16::from(hour) * 100 + u16::from(minute),
            OHM
        ),
        TimeLabelStyle::Legacy => write!(label, "{}{:02} R", hour, minute),
    };
    label
}

/// Part marking printed on a surface-mount resistor: `HHMM`
pub fn format_marking(hour: u8, minute: u8) -> Label {
    let mut label = Label::new();
    let _ = write!(label, "{:02}{:02}", hour, minute);
    label
}

/// Beat time label: `@` + three digits
pub fn format_beats(beats: u16) -> Label {
    let mut label = Label::new();
    let _ = write!(label, "@{:03}", beats);
    label
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_palette_order() {
        assert_eq!(PALETTE.len(), 10);
        assert_eq!(PALETTE[0], Rgb::BLACK);
        assert_eq!(PALETTE[1], Rgb::WINDSOR_TAN);
        assert_eq!(PALETTE[2], Rgb::RED);
        assert_eq!(PALETTE[9], Rgb::WHITE);
    }

    #[test]
    fn test_band_colors() {
        assert_eq!(band_colors(0), (Rgb::BLACK, Rgb::BLACK));
        assert_eq!(band_colors(23), (Rgb::RED, Rgb::CHROME_YELLOW));
        assert_eq!(band_colors(59), (Rgb::GREEN, Rgb::WHITE));
        assert_eq!(band_colors(7), (Rgb::BLACK, Rgb::VIVID_VIOLET));
    }

    #[test]
    fn test_date_code() {
        assert_eq!(format_date_code(3, 7).as_str(), "R0307");
        assert_eq!(format_date_code(12, 31).as_str(), "R1231");
    }

    #[test]
    fn test_legacy_time_label() {
        assert_eq!(format_time_label(9, 5, TimeLabelStyle::Legacy).as_str(), "905 R");
        assert_eq!(format_time_label(0, 0, TimeLabelStyle::Legacy).as_str(), "000 R");
        assert_eq!(format_time_label(23, 59, TimeLabelStyle::Legacy).as_str(), "2359 R");
    }

    #[test]
    fn test_compact_time_label() {
        let label = format_time_label(23, 59, TimeLabelStyle::Compact);
        assert!(label.starts_with("2359"));
        assert!(label.ends_with(OHM));
        assert_eq!(format_time_label(9, 5, TimeLabelStyle::Compact).as_str(), "905Ω");
        assert_eq!(format_time_label(0, 5, TimeLabelStyle::Compact).as_str(), "5Ω");
    }

    #[test]
    fn test_marking() {
        assert_eq!(format_marking(9, 5).as_str(), "0905");
        assert_eq!(format_marking(23, 59).as_str(), "2359");
    }

    #[test]
    fn test_beats_label() {
        assert_eq!(format_beats(0).as_str(), "@000");
        assert_eq!(format_beats(42).as_str(), "@042");
        assert_eq!(format_beats(999).as_str(), "@999");
    }

    proptest! {
        #[test]
        fn prop_band_colors_match_palette(v in 0u8..100) {
            let (tens, ones) = band_indices(v);
            prop_assert!(tens <= 9 && ones <= 9);
            prop_assert_eq!(tens * 10 + ones, v);
            prop_assert_eq!(
                band_colors(v),
                (PALETTE[(v / 10) as usize], PALETTE[(v % 10) as usize])
            );
        }

        #[test]
        fn prop_labels_fit(hour in 0u8..24, minute in 0u8..60) {
            let compact = format_time_label(hour, minute, TimeLabelStyle::Compact);
            let legacy = format_time_label(hour, minute, TimeLabelStyle::Legacy);
            prop_assert!(compact.ends_with(OHM));
            prop_assert!(legacy.ends_with(" R"));
            prop_assert_eq!(format_marking(hour, minute).len(), 4);
        }
    }
}
