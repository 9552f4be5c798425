//! Typed flags on top of a [`PreferenceStore`].
//!
//! Writes are fire-and-forget: a failed write is logged and otherwise ignored,
//! and there is no transaction spanning several keys. Reads that fail or find
//! malformed data report the value as absent.
use std::fmt::Debug;

use crate::engine::encoded::{decode_text, encode_text};
use crate::engine::storage::area::PreferenceHandle;
use crate::engine::storage::keys;

#[derive(Clone)]
pub struct Preferences {
    store: PreferenceHandle,
}

impl Debug for Preferences {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Preferences").finish_non_exhaustive()
    }
}

impl Preferences {
    pub fn new(store: PreferenceHandle) -> Self {
        Self { store }
    }

    /// Raw store, for components that own their own keys.
    pub fn store(&self) -> &PreferenceHandle {
        &self.store
    }

    pub fn fallback_preferred(&self) -> bool {
        self.store.get_bool(keys::FALLBACK_STATE)
    }

    /// Sets the fallback flag. There is no way to unset it from here.
    pub fn prefer_fallback(&self) {
        self.write_flag(keys::FALLBACK_STATE);
    }

    pub fn secondary_ever_shown(&self) -> bool {
        self.store.get_bool(keys::SECONDARY_SHOWN)
    }

    pub fn mark_secondary_shown(&self) {
        self.write_flag(keys::SECONDARY_SHOWN);
    }

    pub fn rating_prompted(&self) -> bool {
        self.store.get_bool(keys::RATING_PROMPTED)
    }

    /// Sets the rating flag. There is no way to unset it from here.
    pub fn mark_rating_prompted(&self) {
        self.write_flag(keys::RATING_PROMPTED);
    }

    /// Last validated address. A value that is not valid base64 UTF-8 is absent.
    pub fn cached_address(&self) -> Option<String> {
        let encoded = self.store.get_string(keys::CACHED_RESOURCE_PATH)?;
        match decode_text(&encoded) {
            Ok(address) if !address.is_empty() => Some(address),
            Ok(_) => None,
            Err(e) => {
                log::debug!("Preferences: cached address unreadable: {}", e);
                None
            }
        }
    }

    pub fn cache_address(&self, address: &str) {
        if let Err(e) = self
            .store
            .set_string(keys::CACHED_RESOURCE_PATH, &encode_text(address))
        {
            log::warn!("Preferences: cannot cache address: {:#}", e);
        }
    }

    pub fn clear_cached_address(&self) {
        if let Err(e) = self.store.remove(keys::CACHED_RESOURCE_PATH) {
            log::warn!("Preferences: cannot clear cached address: {:#}", e);
        }
    }

    fn write_flag(&self, key: &str) {
        if let Err(e) = self.store.set_bool(key, true) {
            log::warn!("Preferences: cannot write {}: {:#}", key, e);
        }
    }
}
