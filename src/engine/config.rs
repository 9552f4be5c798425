use std::ops::RangeInclusive;
use std::time::Duration;

const DEFAULT_PROBE_USER_AGENT: &str = "HydroDisplay/1.0";
const DEFAULT_SURFACE_USER_AGENT: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 18_4 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/16.0 Mobile/15E148 Safari/604.1";

/// Runtime configuration of the display resolver.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Upper bound on a single endpoint probe
    pub probe_timeout: Duration,
    /// Delay between showing remote content and asking for a review
    pub rating_delay: Duration,
    /// Status codes that count as a reachable endpoint
    pub accepted_status: RangeInclusive<u16>,
    /// User agent sent with the probe request
    pub probe_user_agent: String,
    /// User agent hosts should give the rendering surface
    pub surface_user_agent: String,
    /// Capacity of the command and event channels
    pub channel_capacity: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            probe_timeout: Duration::from_secs(10),
            rating_delay: Duration::from_secs(2),
            accepted_status: 200..=403,
            probe_user_agent: DEFAULT_PROBE_USER_AGENT.to_string(),
            surface_user_agent: DEFAULT_SURFACE_USER_AGENT.to_string(),
            channel_capacity: 64,
        }
    }
}

impl ResolverConfig {
    pub fn builder() -> ResolverConfigBuilder {
        ResolverConfigBuilder::default()
    }
}

/// Builder for [`ResolverConfig`]. Unset values keep their defaults.
#[derive(Debug, Default)]
pub struct ResolverConfigBuilder {
    config: ResolverConfig,
}

impl ResolverConfigBuilder {
    pub fn probe_timeout(mut self, timeout: Duration) -> Self {
        self.config.probe_timeout = timeout;
        self
    }

    pub fn rating_delay(mut self, delay: Duration) -> Self {
        self.config.rating_delay = delay;
        self
    }

    pub fn accepted_status(mut self, range: RangeInclusive<u16>) -> Self {
        self.config.accepted_status = range;
        self
    }

    pub fn probe_user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.probe_user_agent = agent.into();
        self
    }

    pub fn surface_user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.surface_user_agent = agent.into();
        self
    }

    pub fn channel_capacity(mut self, capacity: usize) -> Self {
        self.config.channel_capacity = capacity;
        self
    }

    /// Validates and returns the configuration.
    pub fn build(self) -> Result<ResolverConfig, String> {
        let c = self.config;
        if c.probe_timeout.is_zero() {
            return Err("probe_timeout must be greater than zero".into());
        }
        if c.accepted_status.is_empty() {
            return Err("accepted_status must not be empty".into());
        }
        if c.channel_capacity == 0 {
            return Err("channel_capacity must be at least 1".into());
        }
        Ok(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_validation_contract() {
        let c = ResolverConfig::default();
        assert_eq!(c.probe_timeout, Duration::from_secs(10));
        assert_eq!(c.rating_delay, Duration::from_secs(2));
        assert!(c.accepted_status.contains(&200));
        assert!(c.accepted_status.contains(&403));
        assert!(!c.accepted_status.contains(&404));
        assert!(!c.accepted_status.contains(&199));
    }

    #[test]
    fn builder_rejects_zero_timeout() {
        let res = ResolverConfig::builder().probe_timeout(Duration::ZERO).build();
        assert!(res.is_err());
    }

    #[test]
    fn builder_overrides_values() {
        let c = ResolverConfig::builder()
            .rating_delay(Duration::from_millis(500))
            .channel_capacity(4)
            .build()
            .unwrap();
        assert_eq!(c.rating_delay, Duration::from_millis(500));
        assert_eq!(c.channel_capacity, 4);
        assert_eq!(c.probe_timeout, Duration::from_secs(10));
    }
}
