//! Periodic reference motions tracked by the optimizer's cost terms.
//!
//! Two kinds of reference:
//! - [`FootReference`]: a swing arc repeated every gait period. Each
//!   repetition starts where the previous one landed.
//! - [`ComReference`]: constant-velocity center-of-mass progression, optionally
//!   held still during double support.
//!
//! Both are pure functions of the query time once constructed.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::error::{ensure_finite, ConfigurationError, DomainError};
use crate::gait::Direction;

/// Position and velocity of a reference at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferenceSample {
    pub position: Vector3<f64>,
    pub velocity: Vector3<f64>,
}

/// A continuous reference the external cost functions query during a solve.
pub trait ReferenceSource: Send + Sync {
    /// First instant the reference is defined at.
    fn activation_start(&self) -> f64;

    /// Whether the cost should track this reference at `t`.
    fn is_active(&self, t: f64) -> bool {
        t >= self.activation_start()
    }

    fn sample(&self, t: f64) -> Result<ReferenceSample, DomainError>;
}

/// Length of the first swing relative to the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirstStep {
    #[default]
    Full,
    /// First swing covers half a step, so the gait starts from a symmetric stance.
    Half,
}

/// Split `t` into a period index and the time elapsed inside that period.
fn period_phase(t: f64, activation_start: f64, period: f64) -> Result<(u64, f64), DomainError> {
    if !t.is_finite() {
        return Err(DomainError::NonFiniteQuery);
    }
    if t < activation_start {
        return Err(DomainError::BeforeActivation {
            query: t,
            activation_start,
        });
    }
    let elapsed = t - activation_start;
    let k = (elapsed / period).floor();
    // Rounding can push tau a hair outside [0, period).
    let tau = (elapsed - k * period).clamp(0.0, period);
    Ok((k as u64, tau))
}

/// Periodic swing-foot reference.
#[derive(Debug, Clone, PartialEq)]
pub struct FootReference {
    origin: Vector3<f64>,
    step_length: f64,
    step_height: f64,
    activation_start: f64,
    active_duration: f64,
    period: f64,
    direction: Direction,
    first_step: FirstStep,
}

impl FootReference {
    /// Create a foot reference.
    ///
    /// `origin` is the contact point before the first swing; `active_duration`
    /// is the swing time and `period` the time between two swing starts.
    pub fn new(
        origin: Vector3<f64>,
        step_length: f64,
        step_height: f64,
        activation_start: f64,
        active_duration: f64,
        period: f64,
    ) -> Result<Self, ConfigurationError> {
        for (value, field) in [
            (origin.x, "origin.x"),
            (origin.y, "origin.y"),
            (origin.z, "origin.z"),
            (step_length, "step_length"),
            (step_height, "step_height"),
            (activation_start, "activation_start"),
            (active_duration, "active_duration"),
            (period, "period"),
        ] {
            ensure_finite(value, field)?;
        }
        if active_duration <= 0.0 {
            return Err(ConfigurationError::InvalidDuration {
                field: "active_duration",
                value: active_duration,
            });
        }
        if period < active_duration {
            return Err(ConfigurationError::InvalidDuration {
                field: "period",
                value: period,
            });
        }
        Ok(Self {
            origin,
            step_length,
            step_height,
            activation_start,
            active_duration,
            period,
            direction: Direction::Forward,
            first_step: FirstStep::Full,
        })
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_first_step(mut self, first_step: FirstStep) -> Self {
        self.first_step = first_step;
        self
    }

    /// Displacement at liftoff of swing `k` and the length of that swing.
    fn swing_extent(&self, k: u64) -> (f64, f64) {
        let l = self.step_length;
        match (self.first_step, k) {
            (FirstStep::Full, _) => (k as f64 * l, l),
            (FirstStep::Half, 0) => (0.0, 0.5 * l),
            (FirstStep::Half, _) => ((k as f64 - 0.5) * l, l),
        }
    }
}

impl ReferenceSource for FootReference {
    fn activation_start(&self) -> f64 {
        self.activation_start
    }

    fn sample(&self, t: f64) -> Result<ReferenceSample, DomainError> {
        let (k, tau) = period_phase(t, self.activation_start, self.period)?;
        let (offset, length) = self.swing_extent(k);
        let sign = self.direction.sign();

        let mut position = self.origin;
        let mut velocity = Vector3::zeros();

        if tau <= self.active_duration {
            let s = tau / self.active_duration;
            let rate = PI / self.active_duration;
            // Raised-cosine progression: zero velocity at liftoff and touchdown.
            position.x += sign * (offset + length * 0.5 * (1.0 - (PI * s).cos()));
            position.z += self.step_height * (PI * s).sin();
            velocity.x = sign * length * 0.5 * rate * (PI * s).sin();
            velocity.z = self.step_height * rate * (PI * s).cos();
        } else {
            position.x += sign * (offset + length);
        }

        Ok(ReferenceSample { position, velocity })
    }
}

/// How the CoM reference behaves between swings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComProgress {
    /// Move at constant velocity from activation on.
    Continuous,
    /// Move only while a swing is in progress; hold during double support.
    #[default]
    HoldDuringDoubleSupport,
}

/// Center-of-mass reference at a fixed height.
#[derive(Debug, Clone, PartialEq)]
pub struct ComReference {
    origin: Vector3<f64>,
    velocity: Vector3<f64>,
    activation_start: f64,
    active_period: f64,
    inactive_period: f64,
    progress: ComProgress,
}

impl ComReference {
    /// Create a CoM reference.
    ///
    /// `origin.z` is the height held throughout; the z component of `velocity`
    /// is ignored.
    pub fn new(
        origin: Vector3<f64>,
        velocity: Vector3<f64>,
        activation_start: f64,
        active_period: f64,
        inactive_period: f64,
    ) -> Result<Self, ConfigurationError> {
        for (value, field) in [
            (origin.x, "origin.x"),
            (origin.y, "origin.y"),
            (origin.z, "origin.z"),
            (velocity.x, "velocity.x"),
            (velocity.y, "velocity.y"),
            (activation_start, "activation_start"),
            (active_period, "active_period"),
            (inactive_period, "inactive_period"),
        ] {
            ensure_finite(value, field)?;
        }
        if active_period <= 0.0 {
            return Err(ConfigurationError::InvalidDuration {
                field: "active_period",
                value: active_period,
            });
        }
        if inactive_period < 0.0 {
            return Err(ConfigurationError::InvalidDuration {
                field: "inactive_period",
                value: inactive_period,
            });
        }
        Ok(Self {
            origin,
            velocity: Vector3::new(velocity.x, velocity.y, 0.0),
            activation_start,
            active_period,
            inactive_period,
            progress: ComProgress::default(),
        })
    }

    pub fn with_progress(mut self, progress: ComProgress) -> Self {
        self.progress = progress;
        self
    }
}

impl ReferenceSource for ComReference {
    fn activation_start(&self) -> f64 {
        self.activation_start
    }

    fn sample(&self, t: f64) -> Result<ReferenceSample, DomainError> {
        let period = self.active_period + self.inactive_period;
        let (k, tau) = period_phase(t, self.activation_start, period)?;

        let (moving_time, moving) = match self.progress {
            ComProgress::Continuous => (t - self.activation_start, true),
            ComProgress::HoldDuringDoubleSupport if tau < self.active_period => {
                (k as f64 * self.active_period + tau, true)
            }
            ComProgress::HoldDuringDoubleSupport => ((k + 1) as f64 * self.active_period, false),
        };

        let position = self.origin + self.velocity * moving_time;
        let velocity = if moving {
            self.velocity
        } else {
            Vector3::zeros()
        };
        Ok(ReferenceSample { position, velocity })
    }
}
