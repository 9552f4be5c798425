/// Which UI the app presents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Nothing decided yet. Only ever seen before the first commit.
    Preparing,
    /// Ordinary hydration-tracking UI.
    Primary,
    /// Full-screen remote content.
    Secondary,
}

/// In-memory state owned by the resolver task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverState {
    pub mode: DisplayMode,
    /// Address to render while in [`DisplayMode::Secondary`]
    pub target_address: Option<String>,
    /// True until the first mode decision is committed
    pub is_loading: bool,
}

impl Default for ResolverState {
    fn default() -> Self {
        Self {
            mode: DisplayMode::Preparing,
            target_address: None,
            is_loading: true,
        }
    }
}

impl ResolverState {
    /// The ordinary UI sits under the loading overlay while still preparing.
    pub fn shows_primary(&self) -> bool {
        matches!(self.mode, DisplayMode::Preparing | DisplayMode::Primary)
    }
}
