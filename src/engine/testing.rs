//! Fakes and fixtures shared by the unit tests.
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use futures::future::{self, BoxFuture};
use futures::FutureExt;
use time::macros::datetime;
use time::OffsetDateTime;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use crate::engine::clock::FixedClock;
use crate::engine::device::DeviceClassifier;
use crate::engine::encoded::EncodedConfig;
use crate::engine::events::ResolverEvent;
use crate::engine::handle::ResolverHandle;
use crate::engine::rating::ReviewHost;
use crate::engine::resolver::{DisplayResolver, ResolverServices};
use crate::engine::state::DisplayMode;
use crate::engine::storage::{InMemoryPreferenceStore, Preferences};
use crate::net::{EndpointValidator, ValidationResult};

/// How the scripted validator answers one address.
#[derive(Debug, Clone)]
pub(crate) enum ProbeScript {
    Answer(ValidationResult),
    Hang,
}

/// Validator that answers from a script and records every address it was asked about.
#[derive(Default)]
pub(crate) struct ScriptedValidator {
    scripts: Mutex<HashMap<String, ProbeScript>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedValidator {
    pub fn script(&self, address: &str, script: ProbeScript) {
        self.scripts.lock().unwrap().insert(address.to_string(), script);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl EndpointValidator for ScriptedValidator {
    fn validate(&self, address: &str) -> BoxFuture<'static, ValidationResult> {
        self.calls.lock().unwrap().push(address.to_string());

        match self.scripts.lock().unwrap().get(address).cloned() {
            Some(ProbeScript::Answer(result)) => future::ready(result).boxed(),
            Some(ProbeScript::Hang) => future::pending().boxed(),
            None => future::ready(ValidationResult::Unreachable("unscripted".into())).boxed(),
        }
    }
}

pub(crate) struct FixedDevice(pub bool);

impl DeviceClassifier for FixedDevice {
    fn is_large_form_factor(&self) -> bool {
        self.0
    }
}

#[derive(Default)]
pub(crate) struct CountingReviewHost {
    count: AtomicUsize,
}

impl CountingReviewHost {
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl ReviewHost for CountingReviewHost {
    fn request_review(&self) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}

/// One installation: phone-class device, no flags, activation date in the past.
pub(crate) struct Fixture {
    pub prefs: Preferences,
    pub validator: Arc<ScriptedValidator>,
    pub review_host: Arc<CountingReviewHost>,
    large_form_factor: bool,
    now: OffsetDateTime,
    encoded: EncodedConfig,
}

impl Fixture {
    pub const CONFIGURED: &'static str = "https://content.example/daily";

    pub fn new() -> Self {
        Self {
            prefs: Preferences::new(Arc::new(InMemoryPreferenceStore::new())),
            validator: Arc::new(ScriptedValidator::default()),
            review_host: Arc::new(CountingReviewHost::default()),
            large_form_factor: false,
            now: datetime!(2026-02-22 12:00 UTC),
            encoded: EncodedConfig::from_plain(&["https://", "content.example", "/daily"], "2026-02-21"),
        }
    }

    pub fn tablet(mut self) -> Self {
        self.large_form_factor = true;
        self
    }

    pub fn now(mut self, now: OffsetDateTime) -> Self {
        self.now = now;
        self
    }

    pub fn encoded(mut self, encoded: EncodedConfig) -> Self {
        self.encoded = encoded;
        self
    }

    /// Same persisted preferences, fresh collaborators.
    pub fn relaunch(&self) -> Self {
        Self {
            prefs: self.prefs.clone(),
            validator: Arc::new(ScriptedValidator::default()),
            review_host: Arc::new(CountingReviewHost::default()),
            large_form_factor: self.large_form_factor,
            now: self.now,
            encoded: self.encoded.clone(),
        }
    }

    pub fn resolver(&self) -> DisplayResolver {
        let services = ResolverServices {
            preferences: self.prefs.clone(),
            validator: self.validator.clone(),
            device: Arc::new(FixedDevice(self.large_form_factor)),
            clock: Arc::new(FixedClock(self.now)),
            review_host: self.review_host.clone(),
            encoded: self.encoded.clone(),
        };
        DisplayResolver::new(None, services)
    }

    /// Starts a resolver with an event subscription taken before the first commit.
    pub fn start(&self) -> (ResolverHandle, JoinHandle<()>, broadcast::Receiver<ResolverEvent>) {
        let resolver = self.resolver();
        let events = resolver.subscribe_events();
        let (handle, join) = resolver.start();
        (handle, join, events)
    }

    pub async fn run_to_commit(&self) -> (DisplayMode, Option<String>) {
        let (_handle, _join, mut events) = self.start();
        settle(&mut events).await
    }
}

/// Waits for the next committed mode.
pub(crate) async fn settle(
    events: &mut broadcast::Receiver<ResolverEvent>,
) -> (DisplayMode, Option<String>) {
    loop {
        match events.recv().await {
            Ok(ResolverEvent::ModeCommitted { mode, target_address }) => return (mode, target_address),
            Ok(_) => continue,
            Err(e) => panic!("resolver event stream ended: {}", e),
        }
    }
}
