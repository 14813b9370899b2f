//! Discretization of the gait duration into optimizer steps.

use serde::Serialize;

use crate::error::ConfigurationError;
use crate::gait::GaitParameters;

/// Preview horizon covering a whole gait.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Horizon {
    /// Horizon length in seconds.
    pub length: f64,
    /// Number of discretization steps, `floor(length / step_size)`.
    pub steps: usize,
    /// Requested sampling interval in seconds.
    pub step_size: f64,
    /// Upper bound on touch-down (impulse) phases inside the horizon.
    pub max_num_switches: usize,
}

impl Horizon {
    /// Horizon for `params` sampled every `step_size` seconds.
    ///
    /// The step count is floored, so the last step may fall short of the end
    /// of the gait.
    pub fn new(params: &GaitParameters, step_size: f64) -> Result<Self, ConfigurationError> {
        params.validate()?;
        if !step_size.is_finite() || step_size <= 0.0 {
            return Err(ConfigurationError::InvalidStepSize(step_size));
        }

        let length = params.horizon_length();
        let steps = (length / step_size).floor() as usize;
        if steps == 0 {
            return Err(ConfigurationError::EmptyHorizon { length, step_size });
        }

        Ok(Self {
            length,
            steps,
            step_size,
            max_num_switches: 2 * params.cycles,
        })
    }

    /// Actual step length once `length` is divided into `steps` pieces.
    pub fn effective_step(&self) -> f64 {
        self.length / self.steps as f64
    }
}
