//! The serializable [`Cookie`] record.
//!
//! ```rust,no_run
//! use hydro_display::cookies::Cookie;
//!
//! let c = Cookie {
//!     name: "session".into(),
//!     value: "abc123".into(),
//!     path: Some("/".into()),
//!     domain: Some("example.com".into()),
//!     secure: true,
//!     expires: Some("2025-12-31T23:59:59Z".into()),
//!     same_site: Some("Lax".into()),
//!     http_only: true,
//! };
//! ```
use serde::{Deserialize, Serialize};

/// A cookie as held by the rendering surface and persisted by the bridge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cookie {
    /// Cookie name (case-sensitive).
    pub name: String,

    /// Raw cookie value (not URL-decoded).
    pub value: String,

    /// Path scoping (e.g., `"/"`).
    #[serde(default)]
    pub path: Option<String>,

    /// Domain scoping, host-only if `None`.
    #[serde(default)]
    pub domain: Option<String>,

    /// If `true`, cookie is sent only over HTTPS.
    #[serde(default)]
    pub secure: bool,

    /// Expiration timestamp (ISO 8601). Session cookies have `None`.
    #[serde(default)]
    pub expires: Option<String>,

    /// SameSite policy (`"Strict"`, `"Lax"`, or `"None"`).
    #[serde(default)]
    pub same_site: Option<String>,

    /// If `true`, scripts cannot read the cookie.
    #[serde(default)]
    pub http_only: bool,
}

impl Cookie {
    /// Session cookie with only a name and a value.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            path: None,
            domain: None,
            secure: false,
            expires: None,
            same_site: None,
            http_only: false,
        }
    }

    /// Identity of a cookie inside a jar: same name, domain and path replace each other.
    pub fn identity(&self) -> (&str, Option<&str>, Option<&str>) {
        (&self.name, self.domain.as_deref(), self.path.as_deref())
    }
}
