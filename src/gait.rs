//! Gait timeline construction.
//!
//! Turns a handful of gait parameters into the ordered list of contact-mode
//! switches handed to the optimizer. A two-group gait (trot or bound) cycles
//! through:
//! - even group in contact, odd group swinging
//! - full-contact transition (double support)
//! - odd group in contact, even group swinging
//! - full-contact transition
//!
//! Every swing moves the swinging group's contact points one step forward.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::error::{ensure_finite, ConfigurationError};

/// Identifier of a limb (typically the contact frame index in the robot model).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct LimbId(pub u32);

impl fmt::Display for LimbId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Contact point per limb, in world frame.
pub type ContactPoints = BTreeMap<LimbId, Vector3<f64>>;

/// Direction of travel along the world x axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Steps advance towards +x.
    #[default]
    Forward,
    /// Steps advance towards -x (mirrored gait).
    Mirrored,
}

impl Direction {
    /// Sign applied to every forward displacement.
    pub const fn sign(self) -> f64 {
        match self {
            Direction::Forward => 1.0,
            Direction::Mirrored => -1.0,
        }
    }
}

/// Upper bound on `GaitParameters::cycles`.
pub const MAX_CYCLES: usize = 1 << 20;

/// Gait timing and geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaitParameters {
    /// Forward displacement of a foot per swing (meters).
    pub step_length: f64,
    /// Apex height of a swinging foot above its contact point (meters).
    pub step_height: f64,
    /// Duration of one swing (seconds).
    pub swing_period: f64,
    /// Duration of the full-contact transition between swings (seconds).
    pub double_support_period: f64,
    /// Time at which the first swing starts (seconds).
    pub start_time: f64,
    /// Number of full gait cycles (two swings each).
    pub cycles: usize,
    /// Direction of travel.
    pub direction: Direction,
}

impl Default for GaitParameters {
    fn default() -> Self {
        Self {
            step_length: 0.275,
            step_height: 0.125,
            swing_period: 0.26,
            double_support_period: 0.04,
            start_time: 0.1,
            cycles: 3,
            direction: Direction::Forward,
        }
    }
}

impl GaitParameters {
    /// Check the timing invariants.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        ensure_finite(self.step_length, "step_length")?;
        ensure_finite(self.step_height, "step_height")?;
        ensure_finite(self.swing_period, "swing_period")?;
        ensure_finite(self.double_support_period, "double_support_period")?;
        ensure_finite(self.start_time, "start_time")?;

        if self.swing_period <= 0.0 {
            return Err(ConfigurationError::NonPositiveSwingPeriod(
                self.swing_period,
            ));
        }
        if self.double_support_period < 0.0 {
            return Err(ConfigurationError::NegativeDoubleSupport(
                self.double_support_period,
            ));
        }
        if self.start_time < 0.0 {
            return Err(ConfigurationError::NegativeStartTime(self.start_time));
        }
        if self.cycles > MAX_CYCLES {
            return Err(ConfigurationError::InvalidDuration {
                field: "cycles",
                value: self.cycles as f64,
            });
        }
        Ok(())
    }

    /// Duration of one full cycle: two swings and two transitions.
    pub fn cycle_period(&self) -> f64 {
        2.0 * (self.swing_period + self.double_support_period)
    }

    /// Time at which the last cycle ends.
    pub fn horizon_length(&self) -> f64 {
        self.start_time + self.cycles as f64 * self.cycle_period()
    }

    /// Signed displacement of one step along the direction of travel.
    pub fn signed_step(&self) -> f64 {
        self.direction.sign() * self.step_length
    }
}

/// Partition of the limb set into the two alternating groups of the gait.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GaitPattern {
    /// Group in contact during the first half of each cycle.
    pub even: Vec<LimbId>,
    /// Group in contact during the second half of each cycle.
    pub odd: Vec<LimbId>,
}

impl GaitPattern {
    pub fn new(even: Vec<LimbId>, odd: Vec<LimbId>) -> Self {
        Self { even, odd }
    }

    /// Diagonal pairs alternate: LF+RH, then RF+LH.
    pub fn quadruped_trot(lf: LimbId, lh: LimbId, rf: LimbId, rh: LimbId) -> Self {
        Self::new(vec![lf, rh], vec![rf, lh])
    }

    /// Front pair and hind pair alternate: LF+RF, then LH+RH.
    pub fn quadruped_bound(lf: LimbId, lh: LimbId, rf: LimbId, rh: LimbId) -> Self {
        Self::new(vec![lf, rf], vec![lh, rh])
    }

    /// Check that the groups are non-empty, disjoint and cover `limbs` exactly.
    pub fn validate(&self, limbs: &[LimbId]) -> Result<(), ConfigurationError> {
        let mut limb_set = BTreeSet::new();
        for &limb in limbs {
            if !limb_set.insert(limb) {
                return Err(ConfigurationError::DuplicateLimb(limb));
            }
        }

        if self.even.is_empty() {
            return Err(ConfigurationError::EmptyGroup("even"));
        }
        if self.odd.is_empty() {
            return Err(ConfigurationError::EmptyGroup("odd"));
        }

        let mut covered = BTreeSet::new();
        for &limb in self.even.iter().chain(self.odd.iter()) {
            if !limb_set.contains(&limb) {
                return Err(ConfigurationError::UnknownLimb(limb));
            }
            if !covered.insert(limb) {
                return Err(ConfigurationError::DuplicateLimb(limb));
            }
        }

        match limb_set.difference(&covered).next() {
            Some(&limb) => Err(ConfigurationError::UncoveredLimb(limb)),
            None => Ok(()),
        }
    }
}

/// Which part of the gait cycle a mode belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GaitPhase {
    /// All limbs down before the gait starts.
    QuadSupport,
    /// Even group in contact, odd group swinging.
    EvenStance,
    /// Odd group in contact, even group swinging.
    OddStance,
    /// All limbs down between two swings.
    DoubleSupport,
}

/// One active contact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Contact {
    pub limb: LimbId,
    pub point: Vector3<f64>,
}

/// Active limbs and their contact points. Never modified once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactMode {
    contacts: Vec<Contact>,
}

impl ContactMode {
    pub fn new(contacts: Vec<Contact>) -> Self {
        Self { contacts }
    }

    /// Copy the current points of `active` out of `points`.
    ///
    /// Callers guarantee every active limb has a point.
    fn snapshot(active: &[LimbId], points: &ContactPoints) -> Self {
        let contacts = active
            .iter()
            .filter_map(|&limb| points.get(&limb).map(|&point| Contact { limb, point }))
            .collect();
        Self { contacts }
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn active_limbs(&self) -> impl Iterator<Item = LimbId> + '_ {
        self.contacts.iter().map(|c| c.limb)
    }

    pub fn is_active(&self, limb: LimbId) -> bool {
        self.contacts.iter().any(|c| c.limb == limb)
    }

    pub fn contact_point(&self, limb: LimbId) -> Option<&Vector3<f64>> {
        self.contacts
            .iter()
            .find(|c| c.limb == limb)
            .map(|c| &c.point)
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

/// A contact mode and the instant it hands over to the next one.
///
/// The mode of event `i + 1` becomes active at `events[i].time`. The last
/// event's time is the end of the gait.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleEvent {
    pub time: f64,
    pub phase: GaitPhase,
    pub mode: ContactMode,
}

/// Ordered contact schedule for a whole gait.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaitTimeline {
    events: Vec<ScheduleEvent>,
}

impl GaitTimeline {
    /// Build the timeline for `params.cycles` cycles of `pattern`.
    ///
    /// `initial_points` is copied; the caller's map is never touched.
    pub fn build(
        params: &GaitParameters,
        pattern: &GaitPattern,
        limbs: &[LimbId],
        initial_points: &ContactPoints,
    ) -> Result<Self, ConfigurationError> {
        params.validate()?;
        pattern.validate(limbs)?;

        let mut points = ContactPoints::new();
        for &limb in limbs {
            let point = initial_points
                .get(&limb)
                .ok_or(ConfigurationError::MissingContactPoint(limb))?;
            points.insert(limb, *point);
        }

        let mut builder = TimelineBuilder {
            params,
            pattern,
            limbs,
            points,
            modes: Vec::with_capacity(4 * params.cycles + 1),
            switch_times: Vec::with_capacity(4 * params.cycles),
        };
        builder.modes.push((
            GaitPhase::QuadSupport,
            ContactMode::snapshot(limbs, &builder.points),
        ));

        let mut phase_start = params.start_time;
        for cycle in 0..params.cycles {
            builder.push_cycle(phase_start);
            tracing::debug!(cycle, phase_start, "Pushed gait cycle");
            phase_start += params.cycle_period();
        }

        let timeline = builder.finish(params.horizon_length())?;
        tracing::debug!(
            events = timeline.len(),
            horizon = timeline.horizon_length(),
            "Built gait timeline"
        );
        Ok(timeline)
    }

    /// Wrap externally produced events. Ordering is checked at assembly.
    pub fn from_events(events: Vec<ScheduleEvent>) -> Result<Self, ConfigurationError> {
        if events.is_empty() {
            return Err(ConfigurationError::EmptyTimeline);
        }
        Ok(Self { events })
    }

    pub fn events(&self) -> &[ScheduleEvent] {
        &self.events
    }

    /// The initial mode, applied before the first switch.
    pub fn initial(&self) -> &ScheduleEvent {
        &self.events[0]
    }

    /// `(switch_time, event)` for every event after the initial one.
    pub fn switches(&self) -> impl Iterator<Item = (f64, &ScheduleEvent)> + '_ {
        self.events.windows(2).map(|pair| (pair[0].time, &pair[1]))
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// End of the last mode.
    pub fn horizon_length(&self) -> f64 {
        self.events.last().map_or(0.0, |e| e.time)
    }

    /// Limbs of the initial mode that are lifted in at least one later mode.
    pub fn swinging_limbs(&self) -> BTreeSet<LimbId> {
        let initial = self.initial();
        initial
            .mode
            .active_limbs()
            .filter(|&limb| self.events.iter().any(|e| !e.mode.is_active(limb)))
            .collect()
    }
}

/// Owns the private contact-point buffer while the timeline is generated.
struct TimelineBuilder<'a> {
    params: &'a GaitParameters,
    pattern: &'a GaitPattern,
    limbs: &'a [LimbId],
    points: ContactPoints,
    modes: Vec<(GaitPhase, ContactMode)>,
    switch_times: Vec<f64>,
}

impl TimelineBuilder<'_> {
    fn push_cycle(&mut self, phase_start: f64) {
        let swing = self.params.swing_period;
        let double_support = self.params.double_support_period;
        let pattern = self.pattern;
        let all = self.limbs;

        self.enter(phase_start, GaitPhase::EvenStance, &pattern.even);

        self.advance(&pattern.odd);
        if double_support > 0.0 {
            self.enter(phase_start + swing, GaitPhase::DoubleSupport, all);
        }

        self.enter(
            phase_start + swing + double_support,
            GaitPhase::OddStance,
            &pattern.odd,
        );

        self.advance(&pattern.even);
        if double_support > 0.0 {
            self.enter(
                phase_start + 2.0 * swing + double_support,
                GaitPhase::DoubleSupport,
                all,
            );
        }
    }

    fn enter(&mut self, time: f64, phase: GaitPhase, active: &[LimbId]) {
        self.switch_times.push(time);
        self.modes
            .push((phase, ContactMode::snapshot(active, &self.points)));
    }

    fn advance(&mut self, limbs: &[LimbId]) {
        let step = self.params.signed_step();
        for limb in limbs {
            if let Some(point) = self.points.get_mut(limb) {
                point.x += step;
            }
        }
    }

    /// Fails when rounding collapses two mode boundaries onto one time.
    fn finish(self, horizon_length: f64) -> Result<GaitTimeline, ConfigurationError> {
        let ends: Vec<f64> = self
            .switch_times
            .into_iter()
            .chain(std::iter::once(horizon_length))
            .collect();
        for pair in ends.windows(2) {
            let (previous, next) = (pair[0], pair[1]);
            if !(next > previous) {
                return Err(ConfigurationError::NonMonotonicSwitch { previous, next });
            }
        }
        let events = self
            .modes
            .into_iter()
            .zip(ends)
            .map(|((phase, mode), time)| ScheduleEvent { time, phase, mode })
            .collect();
        Ok(GaitTimeline { events })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use approx::assert_relative_eq;

    pub(crate) const LF: LimbId = LimbId(12);
    pub(crate) const LH: LimbId = LimbId(22);
    pub(crate) const RF: LimbId = LimbId(32);
    pub(crate) const RH: LimbId = LimbId(42);

    pub(crate) fn quadruped() -> (Vec<LimbId>, GaitPattern, ContactPoints) {
        let limbs = vec![LF, LH, RF, RH];
        let pattern = GaitPattern::quadruped_bound(LF, LH, RF, RH);
        let points = ContactPoints::from([
            (LF, Vector3::new(0.37, 0.2, 0.0)),
            (LH, Vector3::new(-0.37, 0.2, 0.0)),
            (RF, Vector3::new(0.37, -0.2, 0.0)),
            (RH, Vector3::new(-0.37, -0.2, 0.0)),
        ]);
        (limbs, pattern, points)
    }

    fn build(params: &GaitParameters) -> GaitTimeline {
        let (limbs, pattern, points) = quadruped();
        GaitTimeline::build(params, &pattern, &limbs, &points).unwrap()
    }

    #[test]
    fn bounding_example_event_times() {
        let timeline = build(&GaitParameters::default());
        let expected = [
            0.1, 0.36, 0.40, 0.66, 0.70, 0.96, 1.00, 1.26, 1.30, 1.56, 1.60, 1.86, 1.90,
        ];
        assert_eq!(timeline.len(), expected.len());
        for (event, &t) in timeline.events().iter().zip(expected.iter()) {
            assert_relative_eq!(event.time, t, epsilon = 1e-9);
        }
    }

    #[test]
    fn event_count_and_ordering() {
        for cycles in 0..6 {
            let params = GaitParameters {
                cycles,
                ..GaitParameters::default()
            };
            let timeline = build(&params);
            assert_eq!(timeline.len(), 4 * cycles + 1);
            for pair in timeline.events().windows(2) {
                assert!(pair[0].time < pair[1].time);
            }
            assert_relative_eq!(
                timeline.horizon_length(),
                params.start_time + cycles as f64 * (2.0 * 0.26 + 2.0 * 0.04),
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn zero_cycles_is_only_the_initial_mode() {
        let params = GaitParameters {
            cycles: 0,
            ..GaitParameters::default()
        };
        let timeline = build(&params);
        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline.initial().phase, GaitPhase::QuadSupport);
        assert_eq!(timeline.initial().mode.len(), 4);
        assert_eq!(timeline.switches().count(), 0);
        assert!(timeline.swinging_limbs().is_empty());
    }

    #[test]
    fn phases_follow_the_cycle_order() {
        let timeline = build(&GaitParameters {
            cycles: 2,
            ..GaitParameters::default()
        });
        let phases: Vec<GaitPhase> = timeline.events().iter().map(|e| e.phase).collect();
        use GaitPhase::*;
        assert_eq!(
            phases,
            vec![
                QuadSupport,
                EvenStance,
                DoubleSupport,
                OddStance,
                DoubleSupport,
                EvenStance,
                DoubleSupport,
                OddStance,
                DoubleSupport,
            ]
        );
    }

    #[test]
    fn switches_start_each_mode_at_the_previous_end() {
        let timeline = build(&GaitParameters::default());
        let switches: Vec<(f64, GaitPhase)> =
            timeline.switches().map(|(t, e)| (t, e.phase)).collect();
        assert_eq!(switches.len(), 12);
        assert_relative_eq!(switches[0].0, 0.1, epsilon = 1e-12);
        assert_eq!(switches[0].1, GaitPhase::EvenStance);
        assert_relative_eq!(switches[1].0, 0.36, epsilon = 1e-12);
        assert_eq!(switches[1].1, GaitPhase::DoubleSupport);
        assert_relative_eq!(switches[2].0, 0.40, epsilon = 1e-12);
        assert_eq!(switches[2].1, GaitPhase::OddStance);
        assert_relative_eq!(switches[11].0, 1.86, epsilon = 1e-9);
    }

    #[test]
    fn contact_points_accumulate_per_half_cycle() {
        let timeline = build(&GaitParameters::default());
        let events = timeline.events();

        // Even stance: front pair down at its initial points.
        assert!(events[1].mode.is_active(LF));
        assert!(!events[1].mode.is_active(LH));
        assert_relative_eq!(events[1].mode.contact_point(LF).unwrap().x, 0.37);

        // Hind pair landed one step ahead.
        assert_relative_eq!(
            events[2].mode.contact_point(LH).unwrap().x,
            -0.37 + 0.275,
            epsilon = 1e-12
        );
        assert_relative_eq!(events[2].mode.contact_point(LF).unwrap().x, 0.37);

        // Front pair landed one step ahead.
        assert_relative_eq!(
            events[4].mode.contact_point(RF).unwrap().x,
            0.37 + 0.275,
            epsilon = 1e-12
        );

        // Last transition: three steps for every limb.
        let last = events.last().unwrap();
        for (limb, x0) in [(LF, 0.37), (LH, -0.37), (RF, 0.37), (RH, -0.37)] {
            assert_relative_eq!(
                last.mode.contact_point(limb).unwrap().x,
                x0 + 3.0 * 0.275,
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn recorded_modes_are_snapshots() {
        let (limbs, pattern, points) = quadruped();
        let timeline =
            GaitTimeline::build(&GaitParameters::default(), &pattern, &limbs, &points).unwrap();

        // The caller's buffer is untouched and the initial mode kept its points.
        assert_relative_eq!(points[&LH].x, -0.37);
        assert_relative_eq!(
            timeline.initial().mode.contact_point(LH).unwrap().x,
            -0.37
        );
    }

    #[test]
    fn mirrored_direction_steps_backwards() {
        let timeline = build(&GaitParameters {
            direction: Direction::Mirrored,
            cycles: 1,
            ..GaitParameters::default()
        });
        let last = timeline.events().last().unwrap();
        assert_relative_eq!(
            last.mode.contact_point(LF).unwrap().x,
            0.37 - 0.275,
            epsilon = 1e-12
        );
    }

    #[test]
    fn zero_double_support_drops_transitions() {
        let timeline = build(&GaitParameters {
            double_support_period: 0.0,
            cycles: 2,
            ..GaitParameters::default()
        });
        assert_eq!(timeline.len(), 2 * 2 + 1);
        for pair in timeline.events().windows(2) {
            assert!(pair[0].time < pair[1].time);
        }
        assert_relative_eq!(timeline.horizon_length(), 0.1 + 2.0 * 0.52, epsilon = 1e-9);
    }

    #[test]
    fn rejects_zero_swing_period() {
        let (limbs, pattern, points) = quadruped();
        let params = GaitParameters {
            swing_period: 0.0,
            ..GaitParameters::default()
        };
        assert_eq!(
            GaitTimeline::build(&params, &pattern, &limbs, &points),
            Err(ConfigurationError::NonPositiveSwingPeriod(0.0))
        );
    }

    #[test]
    fn vanishing_double_support_is_rejected() {
        let (limbs, pattern, points) = quadruped();
        let params = GaitParameters {
            double_support_period: 1e-18,
            ..GaitParameters::default()
        };
        match GaitTimeline::build(&params, &pattern, &limbs, &points) {
            Err(ConfigurationError::NonMonotonicSwitch { previous, next }) => {
                assert_eq!(previous, next);
                assert_relative_eq!(previous, 0.36, epsilon = 1e-12);
            }
            other => panic!("expected NonMonotonicSwitch, got {other:?}"),
        }
    }

    #[test]
    fn late_start_swallowing_the_swing_is_rejected() {
        let (limbs, pattern, points) = quadruped();
        let params = GaitParameters {
            start_time: 1e17,
            ..GaitParameters::default()
        };
        assert!(matches!(
            GaitTimeline::build(&params, &pattern, &limbs, &points),
            Err(ConfigurationError::NonMonotonicSwitch { .. })
        ));
    }

    #[test]
    fn rejects_absurd_cycle_count() {
        let params = GaitParameters {
            cycles: usize::MAX,
            ..GaitParameters::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ConfigurationError::InvalidDuration { field: "cycles", .. })
        ));
    }

    #[test]
    fn contacts_keep_group_order() {
        let timeline = build(&GaitParameters::default());
        let contacts = timeline.events()[1].mode.contacts();
        let limbs: Vec<LimbId> = contacts.iter().map(|c| c.limb).collect();
        assert_eq!(limbs, vec![LF, RF]);
        assert_relative_eq!(contacts[1].point.y, -0.2);
    }

    #[test]
    fn rejects_negative_double_support() {
        let params = GaitParameters {
            double_support_period: -0.01,
            ..GaitParameters::default()
        };
        assert_eq!(
            params.validate(),
            Err(ConfigurationError::NegativeDoubleSupport(-0.01))
        );
    }

    #[test]
    fn rejects_unknown_limb_in_pattern() {
        let (limbs, _, points) = quadruped();
        let pattern = GaitPattern::new(vec![LF, RF], vec![LH, LimbId(99)]);
        assert_eq!(
            GaitTimeline::build(&GaitParameters::default(), &pattern, &limbs, &points),
            Err(ConfigurationError::UnknownLimb(LimbId(99)))
        );
    }

    #[test]
    fn pattern_must_cover_every_limb() {
        let pattern = GaitPattern::new(vec![LF, RF], vec![LH]);
        assert_eq!(
            pattern.validate(&[LF, LH, RF, RH]),
            Err(ConfigurationError::UncoveredLimb(RH))
        );
        let overlapping = GaitPattern::new(vec![LF, RF], vec![LF, LH, RH]);
        assert_eq!(
            overlapping.validate(&[LF, LH, RF, RH]),
            Err(ConfigurationError::DuplicateLimb(LF))
        );
        let empty = GaitPattern::new(vec![], vec![LF, LH, RF, RH]);
        assert_eq!(
            empty.validate(&[LF, LH, RF, RH]),
            Err(ConfigurationError::EmptyGroup("even"))
        );
    }

    #[test]
    fn missing_contact_point_is_reported() {
        let (limbs, pattern, mut points) = quadruped();
        points.remove(&RH);
        assert_eq!(
            GaitTimeline::build(&GaitParameters::default(), &pattern, &limbs, &points),
            Err(ConfigurationError::MissingContactPoint(RH))
        );
    }

    #[test]
    fn trot_pairs_diagonals() {
        let pattern = GaitPattern::quadruped_trot(LF, LH, RF, RH);
        assert_eq!(pattern.even, vec![LF, RH]);
        assert_eq!(pattern.odd, vec![RF, LH]);
        assert!(pattern.validate(&[LF, LH, RF, RH]).is_ok());
    }

    #[test]
    fn swinging_limbs_cover_both_groups() {
        let timeline = build(&GaitParameters::default());
        let swinging = timeline.swinging_limbs();
        assert_eq!(swinging.len(), 4);
    }
}
