//! Cookie store of the rendering surface.
//!
//! The surface exposes its cookies through a small get/set interface. The
//! bridge reads everything out after a page load and writes a saved snapshot
//! back in before the first load of a fresh surface.
use std::sync::{Arc, Mutex};

use crate::engine::cookies::{Cookie, CookieJarSnapshot};

/// A handle to a surface cookie store.
pub type CookieStoreHandle = Arc<dyn CookieStore>;

/// Get/set access to the cookies a rendering surface holds.
///
/// Implementations must be internally synchronized since callers only hold `&self`.
pub trait CookieStore: Send + Sync {
    /// Returns every cookie currently held.
    fn all_cookies(&self) -> Vec<Cookie>;

    /// Inserts a cookie, replacing one with the same name, domain and path.
    fn set_cookie(&self, cookie: Cookie);

    /// Copies all cookies into a snapshot.
    fn snapshot(&self) -> CookieJarSnapshot {
        CookieJarSnapshot::new(self.all_cookies())
    }
}

/// Cookie store for headless surfaces and tests.
#[derive(Debug, Default)]
pub struct InMemoryCookieStore {
    cookies: Mutex<Vec<Cookie>>,
}

impl InMemoryCookieStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CookieStore for InMemoryCookieStore {
    fn all_cookies(&self) -> Vec<Cookie> {
        self.cookies.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn set_cookie(&self, cookie: Cookie) {
        let Ok(mut cookies) = self.cookies.lock() else {
            return;
        };
        if let Some(existing) = cookies.iter_mut().find(|c| c.identity() == cookie.identity()) {
            *existing = cookie;
        } else {
            cookies.push(cookie);
        }
    }
}
