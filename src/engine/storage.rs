//! Persisted preferences.
//!
//! A [`PreferenceStore`] is a flat string key/value area that survives process
//! restarts. Three backends are provided:
//!
//! - [`InMemoryPreferenceStore`]: nothing hits disk; used for tests and demos.
//! - [`JsonPreferenceStore`]: one JSON file, rewritten on every write.
//! - [`SqlitePreferenceStore`]: SQLite through an r2d2 pool (`sqlite_store` feature).
//!
//! On top of the raw store sits [`Preferences`], the typed view the resolver,
//! the rating gate and the cookie bridge use. It owns the key names and the
//! encoding of each value, and it turns read failures into "absent" and write
//! failures into a logged warning.
//!
//! ```no_run
//! use std::sync::Arc;
//! use hydro_display::storage::{JsonPreferenceStore, Preferences};
//!
//! let store = JsonPreferenceStore::open("prefs.json").unwrap();
//! let prefs = Preferences::new(Arc::new(store));
//! if !prefs.fallback_preferred() {
//!     // remote content may still be considered
//! }
//! ```

/// Key/value storage trait.
pub mod area;
/// Persisted key names.
pub mod keys;
/// Typed flag accessors.
pub mod preferences;

mod in_memory;
mod json;
#[cfg(feature = "sqlite_store")]
mod sqlite_store;

pub use area::{PreferenceHandle, PreferenceStore};
pub use in_memory::InMemoryPreferenceStore;
pub use json::JsonPreferenceStore;
pub use preferences::Preferences;
#[cfg(feature = "sqlite_store")]
pub use sqlite_store::SqlitePreferenceStore;
