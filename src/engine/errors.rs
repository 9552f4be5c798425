/// Errors raised inside the display resolver.
///
/// None of these ever reach the user. Every failure path ends in the
/// ordinary tracking UI being shown, so callers mostly log them and move on.
#[derive(Debug, thiserror::Error)]
pub enum ResolverError {
    #[error("Stored or encoded data could not be decoded: {0}")]
    DecodeFailure(String),

    #[error("Endpoint unreachable: {0}")]
    NetworkUnreachable(String),

    #[error("Endpoint answered with rejected status {0}")]
    RejectedStatus(u16),

    #[error("Malformed address: {0}")]
    MalformedAddress(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Resolver channel closed")]
    ChannelClosed,

    #[error("Resolver is already running")]
    AlreadyRunning,
}
