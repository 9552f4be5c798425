//! Carries the rendering surface's cookies across app launches.
//!
//! The snapshot is stored as one JSON blob under the `saved-cookie-jar` key.
//! Every save overwrites the previous blob; nothing is merged.
use crate::engine::cookies::{CookieJarSnapshot, CookieStore};
use crate::engine::storage::{keys, Preferences};

#[derive(Debug, Clone)]
pub struct CookieBridge {
    prefs: Preferences,
}

impl CookieBridge {
    pub fn new(prefs: Preferences) -> Self {
        Self { prefs }
    }

    /// Replaces the stored snapshot with `jar`.
    pub fn save(&self, jar: &CookieJarSnapshot) {
        let blob = match serde_json::to_string(jar) {
            Ok(blob) => blob,
            Err(e) => {
                log::warn!("Cookies: cannot serialize snapshot: {}", e);
                return;
            }
        };

        match self.prefs.store().set_string(keys::SAVED_COOKIE_JAR, &blob) {
            Ok(()) => log::debug!("Cookies: saved {} cookies", jar.len()),
            Err(e) => log::warn!("Cookies: cannot store snapshot: {:#}", e),
        }
    }

    /// Stored snapshot, or an empty one when nothing usable is stored.
    pub fn load(&self) -> CookieJarSnapshot {
        let Some(blob) = self.prefs.store().get_string(keys::SAVED_COOKIE_JAR) else {
            return CookieJarSnapshot::default();
        };

        serde_json::from_str(&blob).unwrap_or_else(|e| {
            log::debug!("Cookies: stored snapshot unreadable, starting empty: {}", e);
            CookieJarSnapshot::default()
        })
    }

    /// Loads the stored snapshot into `store`. Returns how many cookies were restored.
    pub fn restore_into(&self, store: &dyn CookieStore) -> usize {
        let snapshot = self.load();
        let count = snapshot.len();
        for cookie in snapshot.into_cookies() {
            store.set_cookie(cookie);
        }
        count
    }
}
