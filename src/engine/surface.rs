//! Rendering surface glue.
//!
//! The embedded web renderer is owned by the host. This module only defines
//! the boundary it is driven through ([`RenderSurface`]) and a
//! [`ContentSession`] that wires one surface to the cookie bridge and the
//! resolver:
//!
//! - before the first load, saved cookies are restored into the surface;
//! - after every successful load, the surface's cookies are saved;
//! - a failed load is reported to the resolver, which falls back to the
//!   ordinary UI.
use url::Url;

use crate::engine::cookies::{CookieBridge, CookieStoreHandle};
use crate::engine::errors::ResolverError;
use crate::engine::handle::ResolverHandle;
use crate::net::parse_probe_target;

/// Load outcome reported by the rendering surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// The page finished loading, possibly after redirects.
    LoadSucceeded { final_address: Url },
    /// The page could not be loaded.
    LoadFailed { error: String },
}

/// What to do with a navigation the page asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationDecision {
    /// Let the surface navigate.
    Allow,
    /// Hand the URL to the platform (mail, phone, other apps) and stay put.
    OpenExternally(Url),
}

/// Web content renderer provided by the host.
pub trait RenderSurface: Send {
    /// Starts loading `address`. The outcome arrives later as a [`SurfaceEvent`].
    fn load(&mut self, address: &Url);

    /// Address currently shown, if any.
    fn current_address(&self) -> Option<Url>;

    /// The surface's cookie store.
    fn cookie_store(&self) -> CookieStoreHandle;
}

/// `http` and `https` stay in the surface; every other scheme leaves the app.
pub fn navigation_policy(url: &Url) -> NavigationDecision {
    match url.scheme() {
        "http" | "https" => NavigationDecision::Allow,
        _ => NavigationDecision::OpenExternally(url.clone()),
    }
}

/// One rendering surface showing remote content.
pub struct ContentSession<S: RenderSurface> {
    surface: S,
    bridge: CookieBridge,
    resolver: ResolverHandle,
}

impl<S: RenderSurface> ContentSession<S> {
    /// Restores saved cookies into a fresh surface, then loads `address`.
    ///
    /// A missing or unreadable cookie snapshot never prevents the load.
    pub fn open(
        mut surface: S,
        bridge: CookieBridge,
        resolver: ResolverHandle,
        address: &str,
    ) -> Result<Self, ResolverError> {
        let url = parse_probe_target(address)?;

        let restored = bridge.restore_into(surface.cookie_store().as_ref());
        log::debug!("Surface: restored {} cookies", restored);

        surface.load(&url);

        Ok(Self {
            surface,
            bridge,
            resolver,
        })
    }

    /// Handles a load outcome reported by the surface.
    pub async fn handle_event(&mut self, event: SurfaceEvent) -> Result<(), ResolverError> {
        if let SurfaceEvent::LoadSucceeded { .. } = &event {
            self.bridge.save(&self.surface.cookie_store().snapshot());
        }
        self.resolver.report_surface(event).await
    }

    pub fn on_navigation_requested(&self, url: &Url) -> NavigationDecision {
        navigation_policy(url)
    }

    /// Pages asking for a new window are loaded in place.
    pub fn on_new_window_requested(&mut self, url: &Url) {
        if navigation_policy(url) == NavigationDecision::Allow {
            self.surface.load(url);
        }
    }

    /// Pull-to-refresh: loads the current address again.
    pub fn reload(&mut self) {
        if let Some(current) = self.surface.current_address() {
            self.surface.load(&current);
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cookies::{Cookie, CookieJarSnapshot, CookieStore, InMemoryCookieStore};
    use crate::engine::state::DisplayMode;
    use crate::engine::storage::keys;
    use crate::engine::testing::{settle, Fixture, ProbeScript};
    use crate::net::ValidationResult;
    use std::sync::Arc;

    struct RecordingSurface {
        loads: Vec<Url>,
        cookies: Arc<InMemoryCookieStore>,
        cookies_at_first_load: Option<usize>,
    }

    impl RecordingSurface {
        fn new() -> Self {
            Self {
                loads: vec![],
                cookies: Arc::new(InMemoryCookieStore::new()),
                cookies_at_first_load: None,
            }
        }
    }

    impl RenderSurface for RecordingSurface {
        fn load(&mut self, address: &Url) {
            if self.cookies_at_first_load.is_none() {
                self.cookies_at_first_load = Some(self.cookies.all_cookies().len());
            }
            self.loads.push(address.clone());
        }

        fn current_address(&self) -> Option<Url> {
            self.loads.last().cloned()
        }

        fn cookie_store(&self) -> CookieStoreHandle {
            self.cookies.clone()
        }
    }

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn navigation_policy_keeps_web_links_inside() {
        assert_eq!(navigation_policy(&url("https://a.example/x")), NavigationDecision::Allow);
        assert_eq!(navigation_policy(&url("http://a.example/x")), NavigationDecision::Allow);

        let mail = url("mailto:help@a.example");
        assert_eq!(navigation_policy(&mail), NavigationDecision::OpenExternally(mail.clone()));
        let tel = url("tel:+15550100");
        assert_eq!(navigation_policy(&tel), NavigationDecision::OpenExternally(tel.clone()));
    }

    #[tokio::test]
    async fn open_restores_cookies_before_first_load() {
        let fx = Fixture::new().tablet();
        let (handle, _join, _events) = fx.start();

        let bridge = CookieBridge::new(fx.prefs.clone());
        bridge.save(&CookieJarSnapshot::new(vec![
            Cookie::new("sid", "1"),
            Cookie::new("lang", "en"),
        ]));

        let session = ContentSession::open(RecordingSurface::new(), bridge, handle, Fixture::CONFIGURED).unwrap();
        assert_eq!(session.surface().cookies_at_first_load, Some(2));
        assert_eq!(session.surface().loads, vec![url(Fixture::CONFIGURED)]);
    }

    #[tokio::test]
    async fn corrupt_cookie_blob_does_not_block_open() {
        let fx = Fixture::new().tablet();
        let (handle, _join, _events) = fx.start();
        fx.prefs.store().set_string(keys::SAVED_COOKIE_JAR, "[not json").unwrap();

        let session = ContentSession::open(
            RecordingSurface::new(),
            CookieBridge::new(fx.prefs.clone()),
            handle,
            Fixture::CONFIGURED,
        )
        .unwrap();
        assert_eq!(session.surface().cookies_at_first_load, Some(0));
        assert_eq!(session.surface().loads.len(), 1);
    }

    #[tokio::test]
    async fn successful_load_saves_cookies() {
        let fx = Fixture::new().tablet();
        let (handle, _join, _events) = fx.start();
        let bridge = CookieBridge::new(fx.prefs.clone());

        let mut session =
            ContentSession::open(RecordingSurface::new(), bridge.clone(), handle, Fixture::CONFIGURED).unwrap();
        session.surface().cookies.set_cookie(Cookie::new("sid", "fresh"));

        session
            .handle_event(SurfaceEvent::LoadSucceeded { final_address: url(Fixture::CONFIGURED) })
            .await
            .unwrap();

        let saved = bridge.load();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved.iter().next().unwrap().value, "fresh");
    }

    #[tokio::test]
    async fn failed_load_falls_back_to_primary() {
        let fx = Fixture::new();
        fx.validator.script(Fixture::CONFIGURED, ProbeScript::Answer(ValidationResult::Success(200)));
        let (handle, _join, mut events) = fx.start();
        let (mode, target) = settle(&mut events).await;
        assert_eq!(mode, DisplayMode::Secondary);

        let bridge = CookieBridge::new(fx.prefs.clone());
        let mut session =
            ContentSession::open(RecordingSurface::new(), bridge, handle.clone(), &target.unwrap()).unwrap();

        session
            .handle_event(SurfaceEvent::LoadFailed { error: "offline".into() })
            .await
            .unwrap();

        assert_eq!(settle(&mut events).await.0, DisplayMode::Primary);
        assert!(fx.prefs.fallback_preferred());
        assert!(fx.prefs.store().get_string(keys::SAVED_COOKIE_JAR).is_none());
    }

    #[tokio::test]
    async fn new_window_and_reload_reuse_the_surface() {
        let fx = Fixture::new().tablet();
        let (handle, _join, _events) = fx.start();

        let mut session = ContentSession::open(
            RecordingSurface::new(),
            CookieBridge::new(fx.prefs.clone()),
            handle,
            Fixture::CONFIGURED,
        )
        .unwrap();

        session.on_new_window_requested(&url("https://content.example/popup"));
        session.on_new_window_requested(&url("mailto:x@content.example"));
        session.reload();

        assert_eq!(
            session.surface().loads,
            vec![
                url(Fixture::CONFIGURED),
                url("https://content.example/popup"),
                url("https://content.example/popup"),
            ]
        );
    }

    #[tokio::test]
    async fn malformed_address_is_refused() {
        let fx = Fixture::new().tablet();
        let (handle, _join, _events) = fx.start();

        let res = ContentSession::open(
            RecordingSurface::new(),
            CookieBridge::new(fx.prefs.clone()),
            handle,
            "javascript:alert(1)",
        );
        assert!(matches!(res, Err(ResolverError::MalformedAddress(_))));
    }
}
