//! Schedule assembly: validated timeline + references → solver configuration.

use nalgebra::Vector3;
use serde::Serialize;
use std::collections::BTreeSet;
use std::sync::Arc;

use crate::error::ConfigurationError;
use crate::gait::{
    ContactMode, ContactPoints, GaitParameters, GaitPattern, GaitPhase, GaitTimeline, LimbId,
};
use crate::reference_motion::{ComReference, FootReference, ReferenceSample, ReferenceSource};

/// Contact-status and cost-reference interface of the external optimizer.
pub trait ContactSolver {
    /// Use `mode` over the whole preview horizon.
    fn set_contact_status_uniformly(&mut self, mode: &ContactMode);

    /// Switch to `mode` at absolute time `switch_time`.
    fn push_contact_status(&mut self, mode: &ContactMode, switch_time: f64);

    fn bind_foot_reference(&mut self, limb: LimbId, reference: Arc<dyn ReferenceSource>);

    fn bind_com_reference(&mut self, reference: Arc<dyn ReferenceSource>);
}

/// Foot references per limb plus an optional CoM reference.
#[derive(Clone, Default)]
pub struct GaitReferences {
    feet: Vec<(LimbId, Arc<dyn ReferenceSource>)>,
    com: Option<Arc<dyn ReferenceSource>>,
}

impl GaitReferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_foot(mut self, limb: LimbId, reference: impl ReferenceSource + 'static) -> Self {
        self.feet.push((limb, Arc::new(reference)));
        self
    }

    pub fn with_com(mut self, reference: impl ReferenceSource + 'static) -> Self {
        self.com = Some(Arc::new(reference));
        self
    }

    /// Standard references for a two-group gait.
    ///
    /// The odd group swings first (from `start_time`), the even group half a
    /// cycle later. The CoM starts above the centroid of the contact points at
    /// `com_height` and advances half a step per swing, holding during double
    /// support.
    pub fn periodic(
        params: &GaitParameters,
        pattern: &GaitPattern,
        points: &ContactPoints,
        com_height: f64,
    ) -> Result<Self, ConfigurationError> {
        params.validate()?;
        if pattern.even.is_empty() {
            return Err(ConfigurationError::EmptyGroup("even"));
        }
        if pattern.odd.is_empty() {
            return Err(ConfigurationError::EmptyGroup("odd"));
        }

        let swing = params.swing_period;
        let double_support = params.double_support_period;
        let period = params.cycle_period();
        let mut references = Self::new();
        let mut centroid = Vector3::<f64>::zeros();

        let groups = [
            (&pattern.odd, params.start_time),
            (&pattern.even, params.start_time + swing + double_support),
        ];
        for (group, activation_start) in groups {
            for &limb in group.iter() {
                let origin = *points
                    .get(&limb)
                    .ok_or(ConfigurationError::MissingContactPoint(limb))?;
                centroid += origin;
                let foot = FootReference::new(
                    origin,
                    params.step_length,
                    params.step_height,
                    activation_start,
                    swing,
                    period,
                )?
                .with_direction(params.direction);
                references = references.with_foot(limb, foot);
            }
        }

        centroid /= (pattern.even.len() + pattern.odd.len()) as f64;
        centroid.z = com_height;
        let velocity = Vector3::new(0.5 * params.signed_step() / swing, 0.0, 0.0);
        let com = ComReference::new(centroid, velocity, params.start_time, swing, double_support)?;

        Ok(references.with_com(com))
    }

    pub fn feet(&self) -> &[(LimbId, Arc<dyn ReferenceSource>)] {
        &self.feet
    }

    pub fn com(&self) -> Option<&Arc<dyn ReferenceSource>> {
        self.com.as_ref()
    }
}

/// A contact mode pushed at an absolute time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimedSwitch {
    pub time: f64,
    pub phase: GaitPhase,
    pub mode: ContactMode,
}

/// Everything the optimizer needs for one run, already validated.
#[derive(Clone)]
pub struct SolverConfiguration {
    initial: ContactMode,
    switches: Vec<TimedSwitch>,
    references: GaitReferences,
    horizon_length: f64,
}

/// Validate `timeline` and `references` against `limbs` and combine them.
///
/// Fails on non-increasing switch times, limbs outside `limbs`, duplicate
/// references, or a swinging limb without a reference. The CoM reference is
/// optional: without one, [`SolverConfiguration::apply`] binds feet only.
pub fn assemble(
    timeline: &GaitTimeline,
    references: GaitReferences,
    limbs: &[LimbId],
) -> Result<SolverConfiguration, ConfigurationError> {
    let mut limb_set = BTreeSet::new();
    for &limb in limbs {
        if !limb_set.insert(limb) {
            return Err(ConfigurationError::DuplicateLimb(limb));
        }
    }

    for event in timeline.events() {
        if let Some(limb) = event.mode.active_limbs().find(|l| !limb_set.contains(l)) {
            return Err(ConfigurationError::UnknownLimb(limb));
        }
    }

    for pair in timeline.events().windows(2) {
        let (previous, next) = (pair[0].time, pair[1].time);
        // Also catches NaN.
        if !(next > previous) {
            return Err(ConfigurationError::NonMonotonicSwitch { previous, next });
        }
    }

    let mut bound = BTreeSet::new();
    for &(limb, _) in references.feet() {
        if !limb_set.contains(&limb) {
            return Err(ConfigurationError::UnknownLimb(limb));
        }
        if !bound.insert(limb) {
            return Err(ConfigurationError::DuplicateReference(limb));
        }
    }

    if let Some(&limb) = timeline.swinging_limbs().difference(&bound).next() {
        return Err(ConfigurationError::MissingReference(limb));
    }

    let switches: Vec<TimedSwitch> = timeline
        .switches()
        .map(|(time, event)| TimedSwitch {
            time,
            phase: event.phase,
            mode: event.mode.clone(),
        })
        .collect();

    tracing::info!(
        switches = switches.len(),
        foot_references = references.feet().len(),
        com_reference = references.com().is_some(),
        horizon = timeline.horizon_length(),
        "Assembled contact schedule"
    );

    Ok(SolverConfiguration {
        initial: timeline.initial().mode.clone(),
        switches,
        references,
        horizon_length: timeline.horizon_length(),
    })
}

impl SolverConfiguration {
    pub fn initial_mode(&self) -> &ContactMode {
        &self.initial
    }

    pub fn switches(&self) -> &[TimedSwitch] {
        &self.switches
    }

    pub fn references(&self) -> &GaitReferences {
        &self.references
    }

    pub fn horizon_length(&self) -> f64 {
        self.horizon_length
    }

    /// Per-limb contact force guess: the weight shared evenly over the
    /// limbs of the initial mode.
    pub fn initial_contact_force(&self, total_weight: f64) -> Vector3<f64> {
        if self.initial.is_empty() {
            return Vector3::zeros();
        }
        Vector3::new(0.0, 0.0, total_weight / self.initial.len() as f64)
    }

    /// Hand the schedule to `solver`: the initial mode uniformly, every later
    /// mode as a timed switch in time order, then the references.
    pub fn apply<S: ContactSolver + ?Sized>(&self, solver: &mut S) {
        solver.set_contact_status_uniformly(&self.initial);
        for switch in &self.switches {
            solver.push_contact_status(&switch.mode, switch.time);
        }
        for (limb, reference) in self.references.feet() {
            solver.bind_foot_reference(*limb, Arc::clone(reference));
        }
        if let Some(com) = self.references.com() {
            solver.bind_com_reference(Arc::clone(com));
        }
        tracing::debug!(switches = self.switches.len(), "Applied schedule to solver");
    }
}

/// [`ContactSolver`] that records every call.
#[derive(Default)]
pub struct RecordingSolver {
    pub uniform: Option<ContactMode>,
    pub switches: Vec<(f64, ContactMode)>,
    pub foot_references: Vec<(LimbId, Arc<dyn ReferenceSource>)>,
    pub com_reference: Option<Arc<dyn ReferenceSource>>,
}

impl ContactSolver for RecordingSolver {
    fn set_contact_status_uniformly(&mut self, mode: &ContactMode) {
        self.uniform = Some(mode.clone());
    }

    fn push_contact_status(&mut self, mode: &ContactMode, switch_time: f64) {
        self.switches.push((switch_time, mode.clone()));
    }

    fn bind_foot_reference(&mut self, limb: LimbId, reference: Arc<dyn ReferenceSource>) {
        self.foot_references.push((limb, reference));
    }

    fn bind_com_reference(&mut self, reference: Arc<dyn ReferenceSource>) {
        self.com_reference = Some(reference);
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RecordedSwitch {
    pub time: f64,
    pub mode: ContactMode,
}

#[derive(Debug, Clone, Serialize)]
pub struct FootSample {
    pub limb: LimbId,
    #[serde(flatten)]
    pub sample: ReferenceSample,
}

/// Reference values at one instant; references not yet active are omitted.
#[derive(Debug, Clone, Serialize)]
pub struct PlanSample {
    pub time: f64,
    pub feet: Vec<FootSample>,
    pub com: Option<ReferenceSample>,
}

/// Upper bound on the grid points of one [`SchedulePlan`].
pub const MAX_PLAN_SAMPLES: usize = 1_000_000;

/// What the recording solver received, with references sampled on a grid.
#[derive(Debug, Clone, Serialize)]
pub struct SchedulePlan {
    pub uniform: Option<ContactMode>,
    pub switches: Vec<RecordedSwitch>,
    pub samples: Vec<PlanSample>,
}

impl RecordingSolver {
    /// Sample every bound reference at `0, interval, 2*interval, ...` up to
    /// `horizon_length`.
    pub fn plan(
        &self,
        interval: f64,
        horizon_length: f64,
    ) -> Result<SchedulePlan, ConfigurationError> {
        if !(interval > 0.0) || !interval.is_finite() {
            return Err(ConfigurationError::InvalidStepSize(interval));
        }

        let count = (horizon_length.max(0.0) / interval).floor();
        if !(count < MAX_PLAN_SAMPLES as f64) {
            return Err(ConfigurationError::InvalidStepSize(interval));
        }
        let count = count as usize;
        let mut samples = Vec::with_capacity(count + 1);
        for i in 0..=count {
            let time = i as f64 * interval;
            let feet = self
                .foot_references
                .iter()
                .filter(|(_, r)| r.is_active(time))
                .filter_map(|(limb, r)| {
                    r.sample(time).ok().map(|sample| FootSample {
                        limb: *limb,
                        sample,
                    })
                })
                .collect();
            let com = self
                .com_reference
                .as_ref()
                .filter(|r| r.is_active(time))
                .and_then(|r| r.sample(time).ok());
            samples.push(PlanSample { time, feet, com });
        }

        Ok(SchedulePlan {
            uniform: self.uniform.clone(),
            switches: self
                .switches
                .iter()
                .map(|(time, mode)| RecordedSwitch {
                    time: *time,
                    mode: mode.clone(),
                })
                .collect(),
            samples,
        })
    }
}
