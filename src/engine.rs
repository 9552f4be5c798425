//! Display mode resolution for the hydration tracker.
//!
//! At startup the app asks one question: show the ordinary tracking UI, or
//! show remote content in a full-screen rendering surface? The
//! [`DisplayResolver`] answers it once per process, persists the flags that
//! steer later launches, and then keeps serving state queries and surface
//! events until shutdown.
//!
//! ```no_run
//! use std::sync::Arc;
//! use hydro_display::clock::SystemClock;
//! use hydro_display::device::{DeviceProfile, InterfaceIdiom};
//! use hydro_display::encoded::EncodedConfig;
//! use hydro_display::net::HttpValidator;
//! use hydro_display::rating::ReviewHost;
//! use hydro_display::storage::{JsonPreferenceStore, Preferences};
//! use hydro_display::{DisplayResolver, ResolverConfig, ResolverServices};
//!
//! struct NoReview;
//! impl ReviewHost for NoReview {
//!     fn request_review(&self) {}
//! }
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let config = ResolverConfig::default();
//! let services = ResolverServices {
//!     preferences: Preferences::new(Arc::new(JsonPreferenceStore::open("prefs.json")?)),
//!     validator: Arc::new(HttpValidator::new(&config)?),
//!     device: Arc::new(DeviceProfile::new("iPhone", InterfaceIdiom::Phone)),
//!     clock: Arc::new(SystemClock),
//!     review_host: Arc::new(NoReview),
//!     encoded: EncodedConfig::default(),
//! };
//!
//! let (handle, _join) = DisplayResolver::new(Some(config), services).start();
//! let state = handle.state().await?;
//! println!("mode: {:?}", state.mode);
//! # Ok(())
//! # }
//! ```

pub mod clock;
pub mod config;
pub mod cookies;
pub mod device;
pub mod encoded;
pub mod errors;
pub mod events;
pub mod handle;
pub mod rating;
pub mod resolver;
pub mod state;
pub mod storage;
pub mod surface;

#[cfg(test)]
pub(crate) mod testing;

pub use config::ResolverConfig;
pub use errors::ResolverError;
pub use handle::ResolverHandle;
pub use resolver::{DisplayResolver, ResolverServices};
pub use state::{DisplayMode, ResolverState};
