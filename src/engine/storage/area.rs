use anyhow::Result;
use std::sync::Arc;

/// Shared, type-erased preference store.
pub type PreferenceHandle = Arc<dyn PreferenceStore>;

/// Object-safe string key/value store that persists across launches.
///
/// Reads never fail: anything that cannot be read is reported as absent.
pub trait PreferenceStore: Send + Sync {
    /// Retrieves the value associated with the given key, or `None` if not found.
    fn get_item(&self, key: &str) -> Option<String>;

    /// Sets the value for the given key, overwriting any existing value.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Removes the item with the given key. Removing a missing key is not an error.
    fn remove_item(&self, key: &str) -> Result<()>;

    /// Returns all keys currently stored, sorted.
    fn keys(&self) -> Vec<String>;

    /// Boolean view of a key. Missing or unparsable values read as `false`.
    fn get_bool(&self, key: &str) -> bool {
        matches!(self.get_item(key).as_deref(), Some("true") | Some("1"))
    }

    fn set_bool(&self, key: &str, value: bool) -> Result<()> {
        self.set_item(key, if value { "true" } else { "false" })
    }

    fn get_string(&self, key: &str) -> Option<String> {
        self.get_item(key)
    }

    fn set_string(&self, key: &str, value: &str) -> Result<()> {
        self.set_item(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.remove_item(key)
    }
}
