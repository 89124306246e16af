//! Persistent settings storage
//!
//! Provides the key-value store trait the watchface persists its options
//! through, plus a RAM-backed implementation for hosts and tests.

use heapless::FnvIndexMap;

/// Storage keys for persisted watchface options
///
/// One key per option. The numeric values are written to the store and
/// must never be reused for a different option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum StorageKey {
    /// Board background color (packed 0xRRGGBB)
    BackgroundColor = 0,
    /// Silkscreen (text) color (packed 0xRRGGBB)
    SilkscreenColor = 1,
    /// Vibration policy on phone connection changes
    VibeOnDisconnect = 2,
    /// Fixed resistor skin
    ResistorType = 3,
    /// Lower label behavior
    LowerLabel = 4,
    /// Skin cycling enabled (0 or 1)
    SkinCycling = 5,
}

impl StorageKey {
    /// Every key, in storage order
    pub const ALL: [StorageKey; 6] = [
        StorageKey::BackgroundColor,
        StorageKey::SilkscreenColor,
        StorageKey::VibeOnDisconnect,
        StorageKey::ResistorType,
        StorageKey::LowerLabel,
        StorageKey::SkinCycling,
    ];

    /// Get the key as a byte value
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Errors from settings storage operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StorageError {
    /// Underlying storage operation failed
    Storage,
    /// Key not found
    NotFound,
    /// Data corrupted or invalid
    Corrupted,
    /// Storage is full
    Full,
}

/// Settings storage trait
///
/// Integer-valued key-value storage. Writes are expected to be synchronous
/// and fast; the watchface calls them from inside event handlers.
pub trait SettingsStore {
    /// Check if a key has ever been written
    fn exists(&mut self, key: StorageKey) -> bool;

    /// Read the integer stored under `key`
    fn read_int(&mut self, key: StorageKey) -> Result<i32, StorageError>;

    /// Write an integer under `key`, replacing any previous value
    fn write_int(&mut self, key: StorageKey, value: i32) -> Result<(), StorageError>;
}

impl<T: SettingsStore + ?Sized> SettingsStore for &mut T {
    fn exists(&mut self, key: StorageKey) -> bool {
        (**self).exists(key)
    }

    fn read_int(&mut self, key: StorageKey) -> Result<i32, StorageError> {
        (**self).read_int(key)
    }

    fn write_int(&mut self, key: StorageKey, value: i32) -> Result<(), StorageError> {
        (**self).write_int(key, value)
    }
}

/// Number of slots in [`MemoryStore`] (power of two for the index map)
pub const MEMORY_STORE_SLOTS: usize = 8;

/// RAM-backed settings store
///
/// Contents live as long as the value does. Handing the same store to a
/// second watchface instance simulates a restart against persisted data.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: FnvIndexMap<u8, i32, MEMORY_STORE_SLOTS>,
    writes: u32,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful writes since creation
    pub fn write_count(&self) -> u32 {
        self.writes
    }

    /// Number of keys currently stored
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if nothing has been stored yet
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl SettingsStore for MemoryStore {
    fn exists(&mut self, key: StorageKey) -> bool {
        self.values.contains_key(&key.as_u8())
    }

    fn read_int(&mut self, key: StorageKey) -> Result<i32, StorageError> {
        self.values
            .get(&key.as_u8())
            .copied()
            .ok_or(StorageError::NotFound)
    }

    fn write_int(&mut self, key: StorageKey, value: i32) -> Result<(), StorageError> {
        self.values
            .insert(key.as_u8(), value)
            .map_err(|_| StorageError::Full)?;
        self.writes = self.writes.wrapping_add(1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_byte_values_are_stable() {
        assert_eq!(StorageKey::BackgroundColor.as_u8(), 0);
        assert_eq!(StorageKey::SilkscreenColor.as_u8(), 1);
        assert_eq!(StorageKey::VibeOnDisconnect.as_u8(), 2);
        assert_eq!(StorageKey::SkinCycling.as_u8(), 5);
    }

    #[test]
    fn test_all_lists_keys_in_id_order() {
        for (i, key) in StorageKey::ALL.iter().enumerate() {
            assert_eq!(key.as_u8() as usize, i);
        }
    }

    #[test]
    fn test_memory_store_missing_key() {
        let mut store = MemoryStore::new();
        assert!(!store.exists(StorageKey::LowerLabel));
        assert_eq!(
            store.read_int(StorageKey::LowerLabel),
            Err(StorageError::NotFound)
        );
    }

    #[test]
    fn test_memory_store_overwrite() {
        let mut store = MemoryStore::new();
        store.write_int(StorageKey::LowerLabel, 1).unwrap();
        store.write_int(StorageKey::LowerLabel, 2).unwrap();

        assert!(store.exists(StorageKey::LowerLabel));
        assert_eq!(store.read_int(StorageKey::LowerLabel), Ok(2));
        assert_eq!(store.len(), 1);
        assert_eq!(store.write_count(), 2);
    }

    #[test]
    fn test_memory_store_holds_every_key() {
        let mut store = MemoryStore::new();
        for (i, key) in StorageKey::ALL.iter().enumerate() {
            store.write_int(*key, i as i32 * 10).unwrap();
        }
        for (i, key) in StorageKey::ALL.iter().enumerate() {
            assert_eq!(store.read_int(*key), Ok(i as i32 * 10));
        }
    }

    #[test]
    fn test_store_through_mut_ref() {
        fn enable_cycling<S: SettingsStore>(mut store: S) {
            store.write_int(StorageKey::SkinCycling, 1).unwrap();
        }

        let mut store = MemoryStore::new();
        enable_cycling(&mut store);
        assert_eq!(store.read_int(StorageKey::SkinCycling), Ok(1));
    }
}
