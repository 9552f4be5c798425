use tokio::sync::{broadcast, mpsc, oneshot};

use crate::engine::errors::ResolverError;
use crate::engine::events::{ResolverCommand, ResolverEvent};
use crate::engine::state::ResolverState;
use crate::engine::surface::SurfaceEvent;

/// Cloneable front door to a running resolver.
#[derive(Clone)]
pub struct ResolverHandle {
    cmd_tx: mpsc::Sender<ResolverCommand>,
    event_tx: broadcast::Sender<ResolverEvent>,
}

impl std::fmt::Debug for ResolverHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolverHandle")
            .field("cmd_tx", &self.cmd_tx)
            .finish()
    }
}

impl ResolverHandle {
    pub(crate) fn new(
        cmd_tx: mpsc::Sender<ResolverCommand>,
        event_tx: broadcast::Sender<ResolverEvent>,
    ) -> Self {
        Self { cmd_tx, event_tx }
    }

    /// Receives events sent from this point on.
    pub fn subscribe_events(&self) -> broadcast::Receiver<ResolverEvent> {
        self.event_tx.subscribe()
    }

    /// Snapshot of the resolver state.
    pub async fn state(&self) -> Result<ResolverState, ResolverError> {
        let (tx, rx) = oneshot::channel();
        self.send(ResolverCommand::QueryState { reply: tx }).await?;
        rx.await.map_err(|_| ResolverError::ChannelClosed)
    }

    /// Forwards a load outcome of the rendering surface.
    pub async fn report_surface(&self, event: SurfaceEvent) -> Result<(), ResolverError> {
        self.send(ResolverCommand::Surface(event)).await
    }

    /// Stops the resolver loop and waits until it has processed the request.
    pub async fn shutdown(&self) -> Result<(), ResolverError> {
        let (tx, rx) = oneshot::channel();
        self.send(ResolverCommand::Shutdown { reply: tx }).await?;
        rx.await.map_err(|_| ResolverError::ChannelClosed)
    }

    async fn send(&self, cmd: ResolverCommand) -> Result<(), ResolverError> {
        self.cmd_tx
            .send(cmd)
            .await
            .map_err(|_| ResolverError::ChannelClosed)
    }
}
