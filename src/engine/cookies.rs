// src/engine/cookies.rs
//! Cookies: [`Cookie`], [`CookieJarSnapshot`], the surface-side [`CookieStore`]
//! and the [`CookieBridge`] that carries cookies across launches.

mod bridge;
mod cookies;
mod snapshot;
mod store;

pub use bridge::CookieBridge;
pub use cookies::Cookie;
pub use snapshot::CookieJarSnapshot;
pub use store::{CookieStore, CookieStoreHandle, InMemoryCookieStore};
