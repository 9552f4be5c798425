//! Display mode resolver.
//!
//! Decides, once per process, whether the app shows its ordinary tracking UI
//! ([`DisplayMode::Primary`]) or remote content ([`DisplayMode::Secondary`]).
//!
//! # Decision order
//!
//! The first matching rule wins:
//!
//! 1. Tablet-class device: `Primary`.
//! 2. Fallback flag persisted: `Primary`.
//! 3. Before the activation date, or the date cannot be decoded: `Primary`.
//! 4. A cached address exists: probe it. On success show it in `Secondary`.
//!    Otherwise drop the cache and go on with rule 5.
//! 5. Decode the configured address and probe it. On success cache it and
//!    show it in `Secondary`. Any failure: `Primary`.
//!
//! Committing `Primary` for any reason persists the fallback flag, so later
//! launches stop at rule 2. Committing `Secondary` marks remote content as
//! shown and schedules the one-time rating prompt.
//!
//! # Concurrency
//!
//! The resolver is an actor. One task owns [`ResolverState`] and applies
//! [`ResolverCommand`]s in arrival order. Probes run in their own tasks and
//! post their result back through the command channel, so no state is ever
//! touched from a probe task. At most one probe is in flight.
use std::sync::Arc;

use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

use crate::engine::clock::Clock;
use crate::engine::config::ResolverConfig;
use crate::engine::device::DeviceClassifier;
use crate::engine::encoded::EncodedConfig;
use crate::engine::events::{ResolverCommand, ResolverEvent, ValidationStage};
use crate::engine::handle::ResolverHandle;
use crate::engine::rating::{RatingGate, ReviewHost};
use crate::engine::state::{DisplayMode, ResolverState};
use crate::engine::storage::Preferences;
use crate::engine::surface::SurfaceEvent;
use crate::net::{spawn_validation, ValidationResult, ValidatorHandle};

/// Collaborators the resolver needs.
#[derive(Clone)]
pub struct ResolverServices {
    pub preferences: Preferences,
    pub validator: ValidatorHandle,
    pub device: Arc<dyn DeviceClassifier>,
    pub clock: Arc<dyn Clock>,
    pub review_host: Arc<dyn ReviewHost>,
    pub encoded: EncodedConfig,
}

pub struct DisplayResolver {
    /// Configuration for the resolver.
    config: Arc<ResolverConfig>,
    services: ResolverServices,
    rating: RatingGate,
    state: ResolverState,
    /// Stage of the probe currently running, if any.
    in_flight: Option<ValidationStage>,
    /// Command sender (cloned into handles and probe tasks).
    cmd_tx: mpsc::Sender<ResolverCommand>,
    /// Command receiver (owned by the run loop).
    cmd_rx: mpsc::Receiver<ResolverCommand>,
    event_tx: broadcast::Sender<ResolverEvent>,
}

impl DisplayResolver {
    /// Creates a resolver. If `config` is `None`, [`ResolverConfig::default`] is used.
    pub fn new(config: Option<ResolverConfig>, services: ResolverServices) -> Self {
        let config = config.unwrap_or_default();

        let (cmd_tx, cmd_rx) = mpsc::channel::<ResolverCommand>(config.channel_capacity);
        let (event_tx, _first_rx) = broadcast::channel::<ResolverEvent>(config.channel_capacity);

        let rating = RatingGate::new(services.preferences.clone(), services.review_host.clone());

        Self {
            config: Arc::new(config),
            services,
            rating,
            state: ResolverState::default(),
            in_flight: None,
            cmd_tx,
            cmd_rx,
            event_tx,
        }
    }

    /// Subscribe before [`start`](Self::start) to see every event, including the first commit.
    pub fn subscribe_events(&self) -> broadcast::Receiver<ResolverEvent> {
        self.event_tx.subscribe()
    }

    pub fn handle(&self) -> ResolverHandle {
        ResolverHandle::new(self.cmd_tx.clone(), self.event_tx.clone())
    }

    /// Spawns the run loop. Must be called from inside a tokio runtime.
    pub fn start(self) -> (ResolverHandle, JoinHandle<()>) {
        let handle = self.handle();
        let join_handle = tokio::spawn(self.run());
        (handle, join_handle)
    }

    /// Runs the startup decision and then applies commands until shutdown.
    pub async fn run(mut self) {
        self.emit(ResolverEvent::Started);
        self.begin();

        while let Some(cmd) = self.cmd_rx.recv().await {
            match cmd {
                ResolverCommand::ValidationFinished { stage, address, result } => {
                    self.on_validation_finished(stage, address, result);
                }
                ResolverCommand::RatingDue => {
                    if self.rating.maybe_prompt() {
                        self.emit(ResolverEvent::RatingPrompted);
                    }
                }
                ResolverCommand::Surface(event) => self.on_surface_event(event),
                ResolverCommand::QueryState { reply } => {
                    let _ = reply.send(self.state.clone());
                }
                ResolverCommand::Shutdown { reply } => {
                    let _ = reply.send(());
                    break;
                }
            }
        }

        self.emit(ResolverEvent::Stopped);
    }

    fn begin(&mut self) {
        log::info!("Resolver: loading display preferences");

        if self.services.device.is_large_form_factor() {
            self.commit_primary("large form factor device");
            return;
        }

        if self.services.preferences.fallback_preferred() {
            self.commit_primary("fallback preferred");
            return;
        }

        match self.services.encoded.activation_date() {
            None => {
                self.commit_primary("activation date unavailable");
                return;
            }
            Some(date) if self.services.clock.now() < date => {
                self.commit_primary("before activation date");
                return;
            }
            Some(_) => {}
        }

        match self.services.preferences.cached_address() {
            Some(cached) => self.start_validation(ValidationStage::Cached, cached),
            None => self.validate_configured(),
        }
    }

    fn validate_configured(&mut self) {
        match self.services.encoded.target_address_seed() {
            Ok(address) => self.start_validation(ValidationStage::Fresh, address),
            Err(e) => {
                log::warn!("Resolver: configured address unusable: {}", e);
                self.commit_primary("configured address unavailable");
            }
        }
    }

    fn start_validation(&mut self, stage: ValidationStage, address: String) {
        if let Some(running) = self.in_flight {
            log::warn!("Resolver: {:?} probe requested while {:?} is running", stage, running);
            return;
        }

        log::debug!("Resolver: probing {:?} address {}", stage, address);
        self.in_flight = Some(stage);
        self.emit(ResolverEvent::ValidationStarted { stage });

        let tx = self.cmd_tx.clone();
        let probed = address.clone();
        spawn_validation(
            self.services.validator.clone(),
            address,
            self.config.probe_timeout,
            move |result| {
                tokio::spawn(async move {
                    let cmd = ResolverCommand::ValidationFinished {
                        stage,
                        address: probed,
                        result,
                    };
                    if tx.send(cmd).await.is_err() {
                        log::debug!("Resolver: stopped before probe result arrived");
                    }
                });
            },
        );
    }

    fn on_validation_finished(&mut self, stage: ValidationStage, address: String, result: ValidationResult) {
        if self.in_flight != Some(stage) {
            log::warn!("Resolver: ignoring unexpected {:?} probe result", stage);
            return;
        }
        self.in_flight = None;

        match result.error() {
            None => log::info!("Resolver: {:?} probe {}", stage, result),
            Some(e) => log::info!("Resolver: {:?} probe failed: {}", stage, e),
        }
        self.emit(ResolverEvent::ValidationFinished {
            stage,
            result: result.clone(),
        });

        match (stage, result.is_success()) {
            (ValidationStage::Cached, true) => self.commit_secondary(address),
            (ValidationStage::Cached, false) => {
                self.services.preferences.clear_cached_address();
                self.validate_configured();
            }
            (ValidationStage::Fresh, true) => {
                self.services.preferences.cache_address(&address);
                self.commit_secondary(address);
            }
            (ValidationStage::Fresh, false) => self.commit_primary("configured address failed validation"),
        }
    }

    fn on_surface_event(&mut self, event: SurfaceEvent) {
        match event {
            SurfaceEvent::LoadSucceeded { final_address } => {
                log::debug!("Resolver: content loaded from {}", final_address);
                self.emit(ResolverEvent::ContentLoaded);
            }
            SurfaceEvent::LoadFailed { error } => {
                log::info!("Resolver: content load failed: {}", error);
                self.emit(ResolverEvent::ContentFailed { error });
                if self.state.mode == DisplayMode::Secondary {
                    self.commit_primary("remote content failed to load");
                }
            }
        }
    }

    fn commit_primary(&mut self, reason: &str) {
        log::info!("Resolver: showing tracking UI ({})", reason);

        self.state.mode = DisplayMode::Primary;
        self.state.target_address = None;
        self.state.is_loading = false;
        self.services.preferences.prefer_fallback();

        self.emit(ResolverEvent::ModeCommitted {
            mode: DisplayMode::Primary,
            target_address: None,
        });
    }

    fn commit_secondary(&mut self, address: String) {
        log::info!("Resolver: showing remote content");

        self.state.mode = DisplayMode::Secondary;
        self.state.target_address = Some(address.clone());
        self.state.is_loading = false;
        self.services.preferences.mark_secondary_shown();

        self.emit(ResolverEvent::ModeCommitted {
            mode: DisplayMode::Secondary,
            target_address: Some(address),
        });

        let tx = self.cmd_tx.clone();
        let delay = self.config.rating_delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(ResolverCommand::RatingDue).await;
        });
    }

    fn emit(&self, event: ResolverEvent) {
        // Fails only when nobody listens.
        let _ = self.event_tx.send(event);
    }
}
