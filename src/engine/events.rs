//! Resolver commands and events.
//!
//! - [`ResolverCommand`]: everything that may change resolver state. All of it
//!   arrives on one channel and is applied by the resolver task in order.
//! - [`ResolverEvent`]: what the resolver broadcasts to observers.

use tokio::sync::oneshot;

use crate::engine::state::{DisplayMode, ResolverState};
use crate::engine::surface::SurfaceEvent;
use crate::net::ValidationResult;

/// Which validation of the startup sequence is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationStage {
    /// Re-checking the cached address
    Cached,
    /// Checking the configured address
    Fresh,
}

/// Inputs to the resolver task.
#[derive(Debug)]
pub enum ResolverCommand {
    /// A probe finished; posted by the probe task.
    ValidationFinished {
        stage: ValidationStage,
        address: String,
        result: ValidationResult,
    },
    /// The rating delay elapsed.
    RatingDue,
    /// The rendering surface reported a load outcome.
    Surface(SurfaceEvent),
    /// Returns a copy of the current state.
    QueryState { reply: oneshot::Sender<ResolverState> },
    /// Stops the resolver loop.
    Shutdown { reply: oneshot::Sender<()> },
}

/// Events broadcast by the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolverEvent {
    /// The resolver loop started.
    Started,
    /// A probe was sent.
    ValidationStarted { stage: ValidationStage },
    /// A probe answered (or timed out).
    ValidationFinished {
        stage: ValidationStage,
        result: ValidationResult,
    },
    /// A display mode was committed.
    ModeCommitted {
        mode: DisplayMode,
        target_address: Option<String>,
    },
    /// The review prompt was requested.
    RatingPrompted,
    /// The remote content finished loading.
    ContentLoaded,
    /// The remote content failed to load.
    ContentFailed { error: String },
    /// The resolver loop ended.
    Stopped,
}
