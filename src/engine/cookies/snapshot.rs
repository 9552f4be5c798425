use serde::{Deserialize, Serialize};

use crate::engine::cookies::Cookie;

/// Ordered copy of every cookie the rendering surface holds at one moment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookieJarSnapshot {
    cookies: Vec<Cookie>,
}

impl CookieJarSnapshot {
    pub fn new(cookies: Vec<Cookie>) -> Self {
        Self { cookies }
    }

    pub fn push(&mut self, cookie: Cookie) {
        self.cookies.push(cookie);
    }

    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cookie> {
        self.cookies.iter()
    }

    pub fn into_cookies(self) -> Vec<Cookie> {
        self.cookies
    }
}

impl FromIterator<Cookie> for CookieJarSnapshot {
    fn from_iter<I: IntoIterator<Item = Cookie>>(iter: I) -> Self {
        Self {
            cookies: iter.into_iter().collect(),
        }
    }
}
