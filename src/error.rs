//! Error types for schedule construction and reference sampling.

use thiserror::Error;

use crate::gait::LimbId;

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}

/// Invalid gait, pattern, reference or horizon setup.
///
/// Raised synchronously while building; no partial schedule is ever returned
/// alongside one of these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("Invalid swing_period: {0} (must be > 0)")]
    NonPositiveSwingPeriod(f64),

    #[error("Invalid double_support_period: {0} (must be >= 0)")]
    NegativeDoubleSupport(f64),

    #[error("Invalid start_time: {0} (must be >= 0)")]
    NegativeStartTime(f64),

    #[error("Non-finite value for {field}")]
    NonFinite { field: &'static str },

    #[error("Invalid value for {field}: {value}")]
    InvalidDuration { field: &'static str, value: f64 },

    #[error("Limb {0} is not part of the limb set")]
    UnknownLimb(LimbId),

    #[error("Limb {0} appears more than once")]
    DuplicateLimb(LimbId),

    #[error("Limb {0} belongs to neither gait group")]
    UncoveredLimb(LimbId),

    #[error("Gait group '{0}' has no limbs")]
    EmptyGroup(&'static str),

    #[error("Timeline holds no events")]
    EmptyTimeline,

    #[error("No initial contact point for limb {0}")]
    MissingContactPoint(LimbId),

    #[error("Switch times must strictly increase: {previous} then {next}")]
    NonMonotonicSwitch { previous: f64, next: f64 },

    #[error("Limb {0} swings but has no reference trajectory")]
    MissingReference(LimbId),

    #[error("Limb {0} has more than one reference trajectory")]
    DuplicateReference(LimbId),

    #[error("Invalid discretization step: {0} (must be > 0)")]
    InvalidStepSize(f64),

    #[error("Horizon of {length}s holds no step of {step_size}s")]
    EmptyHorizon { length: f64, step_size: f64 },
}

/// Reference sampled outside the interval it is defined on.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DomainError {
    #[error("Query time {query} precedes activation start {activation_start}")]
    BeforeActivation { query: f64, activation_start: f64 },

    #[error("Query time is not finite")]
    NonFiniteQuery,
}

pub(crate) fn ensure_finite(value: f64, field: &'static str) -> Result<(), ConfigurationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigurationError::NonFinite { field })
    }
}
