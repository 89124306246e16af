//! Configuration messages from the companion app
//!
//! A message is a set of `(key, value)` tuples. The watch side only reads
//! it: [`ConfigMessage::updates`] yields the recognized settings in a fixed
//! order no matter how the tuples were arranged on the wire.

use heapless::Vec;

/// Maximum tuples per message
pub const MAX_TUPLES: usize = 8;

// Message key IDs: Phone → Watch
pub const KEY_BG_COLOR: u32 = 0;
pub const KEY_SILK_COLOR: u32 = 1;
pub const KEY_VIBE_ON_BT: u32 = 2;
pub const KEY_RESISTOR_TYPE: u32 = 3;
pub const KEY_LOWER_LABEL: u32 = 4;

/// Recognized message keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MessageKey {
    /// Background color
    BgColor,
    /// Silkscreen color
    SilkColor,
    /// Vibration on connection changes
    VibeOnBt,
    /// Resistor skin (or cycle)
    ResistorType,
    /// Lower label behavior
    LowerLabel,
}

impl MessageKey {
    /// All keys, in the order updates are applied
    pub const ALL: [MessageKey; 5] = [
        MessageKey::BgColor,
        MessageKey::SilkColor,
        MessageKey::VibeOnBt,
        MessageKey::ResistorType,
        MessageKey::LowerLabel,
    ];

    /// Parse a key from its wire ID
    pub fn from_id(id: u32) -> Option<Self> {
        match id {
            KEY_BG_COLOR => Some(MessageKey::BgColor),
            KEY_SILK_COLOR => Some(MessageKey::SilkColor),
            KEY_VIBE_ON_BT => Some(MessageKey::VibeOnBt),
            KEY_RESISTOR_TYPE => Some(MessageKey::ResistorType),
            KEY_LOWER_LABEL => Some(MessageKey::LowerLabel),
            _ => None,
        }
    }

    /// Convert to wire ID
    pub fn id(self) -> u32 {
        match self {
            MessageKey::BgColor => KEY_BG_COLOR,
            MessageKey::SilkColor => KEY_SILK_COLOR,
            MessageKey::VibeOnBt => KEY_VIBE_ON_BT,
            MessageKey::ResistorType => KEY_RESISTOR_TYPE,
            MessageKey::LowerLabel => KEY_LOWER_LABEL,
        }
    }
}

/// Errors building a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MessageError {
    /// More than [`MAX_TUPLES`] tuples
    TooManyTuples,
}

/// One decoded setting
///
/// Values are raw: the watch side decides what they mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigUpdate {
    /// Packed 0xRRGGBB
    BgColor(u32),
    /// Packed 0xRRGGBB
    SilkColor(u32),
    /// Vibe policy code
    VibeOnBt(i32),
    /// Skin code (3 = cycle)
    ResistorType(i32),
    /// Lower label mode code
    LowerLabel(i32),
}

impl ConfigUpdate {
    /// Build an update from a key and its raw value
    pub fn new(key: MessageKey, value: i32) -> Self {
        match key {
            MessageKey::BgColor => ConfigUpdate::BgColor(value as u32 & 0x00FF_FFFF),
            MessageKey::SilkColor => ConfigUpdate::SilkColor(value as u32 & 0x00FF_FFFF),
            MessageKey::VibeOnBt => ConfigUpdate::VibeOnBt(value),
            MessageKey::ResistorType => ConfigUpdate::ResistorType(value),
            MessageKey::LowerLabel => ConfigUpdate::LowerLabel(value),
        }
    }

    /// The key this update belongs to
    pub fn key(&self) -> MessageKey {
        match self {
            ConfigUpdate::BgColor(_) => MessageKey::BgColor,
            ConfigUpdate::SilkColor(_) => MessageKey::SilkColor,
            ConfigUpdate::VibeOnBt(_) => MessageKey::VibeOnBt,
            ConfigUpdate::ResistorType(_) => MessageKey::ResistorType,
            ConfigUpdate::LowerLabel(_) => MessageKey::LowerLabel,
        }
    }
}

/// A raw `(key, value)` pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tuple {
    pub key: u32,
    pub value: i32,
}

/// A configuration message from the companion app
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConfigMessage {
    tuples: Vec<Tuple, MAX_TUPLES>,
}

impl ConfigMessage {
    /// Create an empty message
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a raw tuple
    ///
    /// A later tuple with the same key shadows an earlier one.
    pub fn push(&mut self, key: u32, value: i32) -> Result<(), MessageError> {
        self.tuples
            .push(Tuple { key, value })
            .map_err(|_| MessageError::TooManyTuples)
    }

    /// Append a tuple for a known key
    pub fn with(mut self, key: MessageKey, value: i32) -> Result<Self, MessageError> {
        self.push(key.id(), value)?;
        Ok(self)
    }

    /// Check if the message carries a key
    pub fn contains(&self, key: MessageKey) -> bool {
        self.tuples.iter().any(|t| t.key == key.id())
    }

    /// Get the integer value for a key
    pub fn get_integer(&self, key: MessageKey) -> Option<i32> {
        self.tuples
            .iter()
            .rev()
            .find(|t| t.key == key.id())
            .map(|t| t.value)
    }

    /// Raw tuples, including unknown keys
    pub fn tuples(&self) -> &[Tuple] {
        &self.tuples
    }

    /// Number of tuples
    pub fn len(&self) -> usize {
        self.tuples.len()
    }

    /// Check if the message is empty
    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty()
    }

    /// Recognized updates, in [`MessageKey::ALL`] order
    pub fn updates(&self) -> impl Iterator<Item = ConfigUpdate> + '_ {
        MessageKey::ALL
            .into_iter()
            .filter_map(|key| self.get_integer(key).map(|value| ConfigUpdate::new(key, value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_roundtrip() {
        for key in MessageKey::ALL {
            assert_eq!(MessageKey::from_id(key.id()), Some(key));
        }
        assert_eq!(MessageKey::from_id(5), None);
        assert_eq!(MessageKey::from_id(0xFFFF_FFFF), None);
    }

    #[test]
    fn test_get_integer() {
        let msg = ConfigMessage::new()
            .with(MessageKey::LowerLabel, 2)
            .unwrap();
        assert!(msg.contains(MessageKey::LowerLabel));
        assert!(!msg.contains(MessageKey::BgColor));
        assert_eq!(msg.get_integer(MessageKey::LowerLabel), Some(2));
        assert_eq!(msg.get_integer(MessageKey::BgColor), None);
    }

    #[test]
    fn test_later_tuple_wins() {
        let mut msg = ConfigMessage::new();
        msg.push(KEY_RESISTOR_TYPE, 1).unwrap();
        msg.push(KEY_RESISTOR_TYPE, 3).unwrap();
        assert_eq!(msg.get_integer(MessageKey::ResistorType), Some(3));
        assert_eq!(msg.updates().count(), 1);
    }

    #[test]
    fn test_updates_in_key_order() {
        let mut msg = ConfigMessage::new();
        msg.push(KEY_LOWER_LABEL, 1).unwrap();
        msg.push(99, 7).unwrap();
        msg.push(KEY_BG_COLOR, 0x55AA00).unwrap();

        let mut updates = msg.updates();
        assert_eq!(updates.next(), Some(ConfigUpdate::BgColor(0x55AA00)));
        assert_eq!(updates.next(), Some(ConfigUpdate::LowerLabel(1)));
        assert_eq!(updates.next(), None);
    }

    #[test]
    fn test_unknown_keys_are_kept_but_skipped() {
        let mut msg = ConfigMessage::new();
        msg.push(42, 1).unwrap();
        assert_eq!(msg.len(), 1);
        assert_eq!(msg.updates().count(), 0);
    }

    #[test]
    fn test_color_masks_alpha_byte() {
        let update = ConfigUpdate::new(MessageKey::SilkColor, 0x7FFF_FFFF);
        assert_eq!(update, ConfigUpdate::SilkColor(0x00FF_FFFF));
        assert_eq!(update.key(), MessageKey::SilkColor);
    }

    #[test]
    fn test_capacity() {
        let mut msg = ConfigMessage::new();
        for i in 0..MAX_TUPLES as u32 {
            msg.push(i, 0).unwrap();
        }
        assert_eq!(msg.push(0, 0), Err(MessageError::TooManyTuples));
    }
}
