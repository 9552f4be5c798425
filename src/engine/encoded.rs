//! Build-time constants kept in encoded form.
//!
//! The target address and the activation date ship base64-encoded. This is
//! obfuscation only: anyone with the binary can decode them, and nothing here
//! should be treated as a secret or a security boundary.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

use crate::engine::errors::ResolverError;

const ADDRESS_FRAGMENTS: [&str; 5] = [
    "aHR0cHM6Ly9o",
    "eWRyYXRpb24t",
    "Y29udGVudC5l",
    "eGFtcGxlLmNv",
    "bS9kYWlseQ==",
];

/// `YYYY-MM-DD`, interpreted as midnight UTC.
const ACTIVATION_DATE: &str = "MjAyNi0wMi0yMQ==";

/// Encoded address fragments plus the encoded activation date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedConfig {
    fragments: Vec<String>,
    activation_date: String,
}

impl Default for EncodedConfig {
    fn default() -> Self {
        Self {
            fragments: ADDRESS_FRAGMENTS.iter().map(|f| f.to_string()).collect(),
            activation_date: ACTIVATION_DATE.to_string(),
        }
    }
}

impl EncodedConfig {
    /// Builds a config from already-encoded values.
    pub fn new(fragments: Vec<String>, activation_date: impl Into<String>) -> Self {
        Self {
            fragments,
            activation_date: activation_date.into(),
        }
    }

    /// Encodes plain values. Each fragment is encoded on its own.
    pub fn from_plain(fragments: &[&str], activation_date: &str) -> Self {
        Self {
            fragments: fragments.iter().map(|f| encode_text(f)).collect(),
            activation_date: encode_text(activation_date),
        }
    }

    /// Decodes every fragment independently and joins the results.
    pub fn target_address_seed(&self) -> Result<String, ResolverError> {
        self.fragments
            .iter()
            .map(|f| decode_text(f))
            .collect::<Result<Vec<_>, _>>()
            .map(|parts| parts.concat())
    }

    /// Decoded activation instant, or `None` when the stored value is unusable.
    pub fn activation_date(&self) -> Option<OffsetDateTime> {
        let text = decode_text(&self.activation_date).ok()?;
        let date = Date::parse(text.trim(), format_description!("[year]-[month]-[day]")).ok()?;
        Some(date.midnight().assume_utc())
    }
}

pub(crate) fn encode_text(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

pub(crate) fn decode_text(encoded: &str) -> Result<String, ResolverError> {
    let bytes = STANDARD
        .decode(encoded.trim())
        .map_err(|e| ResolverError::DecodeFailure(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ResolverError::DecodeFailure(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn default_fragments_join_into_an_address() {
        let addr = EncodedConfig::default().target_address_seed().unwrap();
        assert_eq!(addr, "https://hydration-content.example.com/daily");
        assert!(url::Url::parse(&addr).is_ok());
    }

    #[test]
    fn default_activation_date_is_midnight_utc() {
        let date = EncodedConfig::default().activation_date().unwrap();
        assert_eq!(date, datetime!(2026-02-21 00:00 UTC));
    }

    #[test]
    fn broken_fragment_fails_the_whole_seed() {
        let cfg = EncodedConfig::new(
            vec!["aHR0cHM6".into(), "%%%not base64%%%".into()],
            ACTIVATION_DATE,
        );
        assert!(matches!(cfg.target_address_seed(), Err(ResolverError::DecodeFailure(_))));
    }

    #[test]
    fn undecodable_or_unparsable_date_is_none() {
        let garbage = EncodedConfig::new(vec![], "***");
        assert!(garbage.activation_date().is_none());

        let not_a_date = EncodedConfig::from_plain(&[], "next tuesday");
        assert!(not_a_date.activation_date().is_none());
    }

    #[test]
    fn from_plain_round_trips_fragments() {
        let cfg = EncodedConfig::from_plain(&["https://", "a.example", "/x"], "2030-01-02");
        assert_eq!(cfg.target_address_seed().unwrap(), "https://a.example/x");
        assert_eq!(cfg.activation_date().unwrap(), datetime!(2030-01-02 00:00 UTC));
    }
}
