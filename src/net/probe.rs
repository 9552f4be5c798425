//! Endpoint probe.
//!
//! A probe answers one question: is this address currently serving something?
//! It sends a `HEAD` request (no body is downloaded) and classifies the outcome:
//!
//! - [`ValidationResult::Success`]: a response arrived with an accepted status
//!   (200 to 403 inclusive by default).
//! - [`ValidationResult::Rejected`]: a response arrived with any other status.
//! - [`ValidationResult::Unreachable`]: no response. Transport errors, timeouts
//!   and addresses that are not `http`/`https` URLs all land here. Malformed
//!   addresses are classified without touching the network.
use std::fmt::{Display, Formatter};
use std::ops::RangeInclusive;
use std::sync::Arc;
use std::time::Duration;

use futures::future::BoxFuture;
use futures::FutureExt;
use http::StatusCode;
use tokio::task::JoinHandle;
use url::Url;

use crate::engine::config::ResolverConfig;
use crate::engine::errors::ResolverError;

/// Outcome of one probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// Response received with an accepted status code
    Success(u16),
    /// Response received with a status outside the accepted range
    Rejected(u16),
    /// No usable response
    Unreachable(String),
}

impl ValidationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ValidationResult::Success(_))
    }

    /// The failure as an error, for logging. `None` on success.
    pub fn error(&self) -> Option<ResolverError> {
        match self {
            ValidationResult::Success(_) => None,
            ValidationResult::Rejected(status) => Some(ResolverError::RejectedStatus(*status)),
            ValidationResult::Unreachable(reason) => {
                Some(ResolverError::NetworkUnreachable(reason.clone()))
            }
        }
    }
}

impl Display for ValidationResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationResult::Success(status) => write!(f, "success ({})", status),
            ValidationResult::Rejected(status) => write!(f, "rejected ({})", status),
            ValidationResult::Unreachable(reason) => write!(f, "unreachable ({})", reason),
        }
    }
}

/// Shared, type-erased validator.
pub type ValidatorHandle = Arc<dyn EndpointValidator>;

/// Something that can probe an address.
///
/// The returned future must resolve exactly once. It may take arbitrarily long;
/// callers bound it with their own timeout.
pub trait EndpointValidator: Send + Sync {
    fn validate(&self, address: &str) -> BoxFuture<'static, ValidationResult>;
}

/// Parses `address` into a probe-able URL (`http` or `https` with a host).
pub fn parse_probe_target(address: &str) -> Result<Url, ResolverError> {
    let url = Url::parse(address.trim())
        .map_err(|e| ResolverError::MalformedAddress(format!("{}: {}", address, e)))?;

    match url.scheme() {
        "http" | "https" if url.host_str().is_some() => Ok(url),
        _ => Err(ResolverError::MalformedAddress(address.to_string())),
    }
}

/// Maps a response status onto a [`ValidationResult`].
pub fn classify_status(status: StatusCode, accepted: &RangeInclusive<u16>) -> ValidationResult {
    let code = status.as_u16();
    if accepted.contains(&code) {
        ValidationResult::Success(code)
    } else {
        ValidationResult::Rejected(code)
    }
}

/// Probes addresses with a real HTTP client.
#[derive(Debug, Clone)]
pub struct HttpValidator {
    client: reqwest::Client,
    accepted: RangeInclusive<u16>,
}

impl HttpValidator {
    pub fn new(config: &ResolverConfig) -> Result<Self, ResolverError> {
        let client = reqwest::Client::builder()
            .timeout(config.probe_timeout)
            .user_agent(config.probe_user_agent.clone())
            .build()
            .map_err(|e| ResolverError::NetworkUnreachable(e.to_string()))?;

        Ok(Self::from_client(client, config.accepted_status.clone()))
    }

    /// Uses a preconfigured client. The client's own timeout still applies.
    pub fn from_client(client: reqwest::Client, accepted: RangeInclusive<u16>) -> Self {
        Self { client, accepted }
    }
}

impl EndpointValidator for HttpValidator {
    fn validate(&self, address: &str) -> BoxFuture<'static, ValidationResult> {
        let target = parse_probe_target(address);
        let client = self.client.clone();
        let accepted = self.accepted.clone();

        async move {
            let url = match target {
                Ok(url) => url,
                Err(e) => {
                    log::debug!("Probe: {}", e);
                    return ValidationResult::Unreachable(e.to_string());
                }
            };

            match client.head(url).send().await {
                Ok(resp) => classify_status(resp.status(), &accepted),
                Err(e) if e.is_timeout() => ValidationResult::Unreachable("timed out".into()),
                Err(e) => ValidationResult::Unreachable(e.to_string()),
            }
        }
        .boxed()
    }
}

/// Runs one validation in the background and hands the result to `on_result`.
///
/// `on_result` is called exactly once, from the spawned task, never from
/// inside this function. A validator that does not answer within `timeout` is
/// reported as unreachable.
pub fn spawn_validation<F>(
    validator: ValidatorHandle,
    address: String,
    timeout: Duration,
    on_result: F,
) -> JoinHandle<()>
where
    F: FnOnce(ValidationResult) + Send + 'static,
{
    tokio::spawn(async move {
        let result = match tokio::time::timeout(timeout, validator.validate(&address)).await {
            Ok(result) => result,
            Err(_) => ValidationResult::Unreachable("timed out".into()),
        };
        on_result(result);
    })
}
