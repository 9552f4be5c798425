//! Network layer.
//!
//! The only request this crate ever makes is a lightweight existence probe
//! (HTTP `HEAD`) against one candidate address. See [`probe`].
pub mod probe;

pub use probe::{
    classify_status, parse_probe_target, spawn_validation, EndpointValidator, HttpValidator,
    ValidationResult, ValidatorHandle,
};
