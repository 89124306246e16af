//! Loading and updating persisted settings
//!
//! Every option lives under its own [`StorageKey`]. Loading is
//! read-or-initialize per key: a missing or unreadable value is replaced by
//! its default, which is written back so the next boot finds it. One bad
//! key never resets the others.

use resistor_hal::{SettingsStore, StorageKey, VibePolicy};
use resistor_protocol::ConfigUpdate;

use super::types::Settings;
use crate::color::Rgb;
use crate::label::LowerLabelMode;
use crate::skin::{Skin, SkinMode};

/// A validated change to one option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Setting {
    Background(Rgb),
    Silkscreen(Rgb),
    Vibes(VibePolicy),
    Skin(SkinMode),
    LowerLabel(LowerLabelMode),
}

impl Setting {
    /// Validate a raw companion update
    ///
    /// Colors are snapped to the display gamut. Unknown enum codes are
    /// rejected.
    pub fn from_update(update: ConfigUpdate) -> Option<Self> {
        match update {
            ConfigUpdate::BgColor(hex) => Some(Setting::Background(Rgb::from_hex(hex).quantized())),
            ConfigUpdate::SilkColor(hex) => Some(Setting::Silkscreen(Rgb::from_hex(hex).quantized())),
            ConfigUpdate::VibeOnBt(code) => VibePolicy::from_code(code).map(Setting::Vibes),
            ConfigUpdate::ResistorType(code) => SkinMode::from_code(code).map(Setting::Skin),
            ConfigUpdate::LowerLabel(code) => LowerLabelMode::from_code(code).map(Setting::LowerLabel),
        }
    }

    /// Check if the face must be redrawn after this change
    pub fn affects_rendering(&self) -> bool {
        !matches!(self, Setting::Vibes(_))
    }
}

impl Settings {
    /// Load every option, initializing missing ones with defaults
    pub fn load<S: SettingsStore>(store: &mut S) -> Self {
        let defaults = Settings::default();

        let background = read_or_init(
            store,
            StorageKey::BackgroundColor,
            defaults.appearance.background,
            encode_color,
            decode_color,
        );
        let silkscreen = read_or_init(
            store,
            StorageKey::SilkscreenColor,
            defaults.appearance.silkscreen,
            encode_color,
            decode_color,
        );
        let vibes = read_or_init(
            store,
            StorageKey::VibeOnDisconnect,
            defaults.behavior.vibes,
            VibePolicy::code,
            VibePolicy::from_code,
        );
        let skin = read_or_init(
            store,
            StorageKey::ResistorType,
            defaults.behavior.skin_mode.initial_skin(),
            Skin::code,
            Skin::from_code,
        );
        let cycling = read_or_init(
            store,
            StorageKey::SkinCycling,
            defaults.behavior.skin_mode.is_cycling(),
            encode_flag,
            decode_flag,
        );
        let lower_label = read_or_init(
            store,
            StorageKey::LowerLabel,
            defaults.behavior.lower_label,
            LowerLabelMode::code,
            LowerLabelMode::from_code,
        );

        let mut settings = defaults;
        settings.appearance.background = background;
        settings.appearance.silkscreen = silkscreen;
        settings.behavior.vibes = vibes;
        settings.behavior.skin_mode = if cycling {
            SkinMode::Cycling
        } else {
            SkinMode::Fixed(skin)
        };
        settings.behavior.lower_label = lower_label;
        settings
    }

    /// Apply a companion update and persist it
    ///
    /// Returns the validated change, or `None` if the value was rejected.
    pub fn apply<S: SettingsStore>(&mut self, update: ConfigUpdate, store: &mut S) -> Option<Setting> {
        let Some(setting) = Setting::from_update(update) else {
            #[cfg(feature = "defmt")]
            defmt::warn!("ignoring invalid update {}", update);
            return None;
        };
        self.set(setting, store);
        Some(setting)
    }

    /// Change one option in memory and in the store
    pub fn set<S: SettingsStore>(&mut self, setting: Setting, store: &mut S) {
        match setting {
            Setting::Background(color) => {
                self.appearance.background = color;
                write(store, StorageKey::BackgroundColor, encode_color(color));
            }
            Setting::Silkscreen(color) => {
                self.appearance.silkscreen = color;
                write(store, StorageKey::SilkscreenColor, encode_color(color));
            }
            Setting::Vibes(policy) => {
                #[cfg(feature = "defmt")]
                defmt::debug!("vibe policy {}", policy);
                self.behavior.vibes = policy;
                write(store, StorageKey::VibeOnDisconnect, policy.code());
            }
            Setting::Skin(mode) => {
                // The cycle request is stored as a flag plus the skin it
                // starts from, never as the sentinel code.
                self.behavior.skin_mode = mode;
                write(store, StorageKey::ResistorType, mode.initial_skin().code());
                write(store, StorageKey::SkinCycling, encode_flag(mode.is_cycling()));
            }
            Setting::LowerLabel(mode) => {
                self.behavior.lower_label = mode;
                write(store, StorageKey::LowerLabel, mode.code());
            }
        }
    }
}

fn read_or_init<S, T>(
    store: &mut S,
    key: StorageKey,
    default: T,
    encode: fn(T) -> i32,
    decode: fn(i32) -> Option<T>,
) -> T
where
    S: SettingsStore,
    T: Copy,
{
    if store.exists(key) {
        match store.read_int(key) {
            Ok(raw) => match decode(raw) {
                Some(value) => return value,
                None => {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("stored {} has invalid value {}", key, raw);
                }
            },
            Err(_err) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("reading {} failed: {}", key, _err);
            }
        }
    }

    #[cfg(feature = "defmt")]
    defmt::debug!("initializing {} with default", key);
    write(store, key, encode(default));
    default
}

fn write<S: SettingsStore>(store: &mut S, key: StorageKey, value: i32) {
    if let Err(_err) = store.write_int(key, value) {
        #[cfg(feature = "defmt")]
        defmt::warn!("writing {} failed: {}", key, _err);
    }
}

fn encode_color(color: Rgb) -> i32 {
    color.hex() as i32
}

fn decode_color(raw: i32) -> Option<Rgb> {
    Some(Rgb::from_hex(raw as u32))
}

fn encode_flag(flag: bool) -> i32 {
    i32::from(flag)
}

fn decode_flag(raw: i32) -> Option<bool> {
    match raw {
        0 => Some(false),
        1 => Some(true),
        _ => None,
    }
}
