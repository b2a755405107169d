//! Persisted wishlist slot in browser `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only module that reads or writes the wishlist key. Pages and
//! components go through [`WishlistStore`] so decoding, corruption recovery
//! and the read-whole / write-whole discipline live in one place.
//!
//! ERROR HANDLING
//! ==============
//! `load` never fails: an undecodable payload is logged and treated as an
//! empty wishlist. `save` reports write failures so the caller can show a
//! notice.

#[cfg(test)]
#[path = "wishlist_store_test.rs"]
mod wishlist_store_test;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;

use crate::net::types::Car;
use crate::state::wishlist::{Intent, Outcome, apply_intent};

/// Well-known `localStorage` key holding the JSON wishlist array.
pub const WISHLIST_KEY: &str = "wishlist";

/// Failure reading, decoding or writing the wishlist slot.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WishlistError {
    #[error("invalid wishlist data in storage: {0}")]
    StorageCorrupt(String),
    #[error("storage unavailable")]
    StorageUnavailable,
    #[error("storage write failed: {0}")]
    WriteFailed(String),
    #[error("wishlist serialization failed: {0}")]
    Serialize(String),
}

/// Minimal string key/value storage.
pub trait KeyValueStorage {
    /// Raw value at `key`, `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns `WishlistError::StorageUnavailable` if the backend cannot be reached.
    fn get_item(&self, key: &str) -> Result<Option<String>, WishlistError>;

    /// Overwrite `key` with `value`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), WishlistError>;
}

/// `window.localStorage` backend. Absent on the server.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, WishlistError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage()?;
            storage.get_item(key).map_err(|_| WishlistError::StorageUnavailable)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), WishlistError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage()?;
            storage
                .set_item(key, value)
                .map_err(|e| WishlistError::WriteFailed(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(WishlistError::StorageUnavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, WishlistError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(WishlistError::StorageUnavailable)
}

/// In-process backend standing in for `localStorage` in native tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: RefCell<HashMap<String, String>>,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with a raw value, e.g. a corrupt payload.
    pub fn with_raw(key: &str, raw: &str) -> Self {
        let storage = Self::default();
        storage.slots.borrow_mut().insert(key.to_owned(), raw.to_owned());
        storage
    }

    /// Raw value currently held at `key`.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }
}

#[cfg(test)]
impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, WishlistError> {
        Ok(self.raw(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), WishlistError> {
        self.slots.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Load/save access to the wishlist slot of a storage backend.
#[derive(Clone, Debug)]
pub struct WishlistStore<S = BrowserStorage> {
    storage: S,
    key: &'static str,
}

impl WishlistStore<BrowserStorage> {
    /// Store over `localStorage` at [`WISHLIST_KEY`].
    pub fn browser() -> Self {
        Self::new(BrowserStorage)
    }
}

impl<S: KeyValueStorage> WishlistStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage, key: WISHLIST_KEY }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Validate a raw payload as a JSON array of complete car records.
    ///
    /// # Errors
    ///
    /// Returns `WishlistError::StorageCorrupt` for anything else.
    pub fn decode(raw: &str) -> Result<Vec<Car>, WishlistError> {
        serde_json::from_str::<Vec<Car>>(raw).map_err(|e| WishlistError::StorageCorrupt(e.to_string()))
    }

    /// Serialize a full collection.
    ///
    /// # Errors
    ///
    /// Returns `WishlistError::Serialize` if encoding fails.
    pub fn encode(collection: &[Car]) -> Result<String, WishlistError> {
        serde_json::to_string(collection).map_err(|e| WishlistError::Serialize(e.to_string()))
    }

    /// Current wishlist; empty when absent, unreadable or corrupt.
    pub fn load(&self) -> Vec<Car> {
        let raw = match self.storage.get_item(self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                leptos::logging::warn!("wishlist load skipped: {e}");
                return Vec::new();
            }
        };
        Self::decode(&raw).unwrap_or_else(|e| {
            leptos::logging::warn!("{e}");
            Vec::new()
        })
    }

    /// Overwrite the slot with `collection`.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or the storage write fails.
    pub fn save(&self, collection: &[Car]) -> Result<(), WishlistError> {
        let raw = Self::encode(collection)?;
        self.storage.set_item(self.key, &raw)
    }

    /// Load, apply `intent`, and save when the collection changed.
    ///
    /// Returns the resulting collection and outcome. No-op outcomes never
    /// write.
    ///
    /// # Errors
    ///
    /// Returns an error if the save of a changed collection fails; storage
    /// then still holds the previous collection.
    pub fn apply(&self, intent: Intent) -> Result<(Vec<Car>, Outcome), WishlistError> {
        let (collection, outcome) = apply_intent(self.load(), intent);
        if outcome.is_change() {
            self.save(&collection)?;
        }
        Ok((collection, outcome))
    }
}
