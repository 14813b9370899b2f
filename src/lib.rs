//! Periodic contact schedules for legged trajectory optimization.
//!
//! Builds, from a few gait parameters:
//!
//! 1. **Gait timeline**: time-ordered contact-mode switches with the contact
//!    points of every active limb ([`gait`])
//! 2. **Reference motions**: swing-foot arcs and a CoM progression sampled at
//!    any time ([`reference_motion`])
//! 3. **Solver configuration**: the validated bundle pushed into an external
//!    optimizer through [`schedule::ContactSolver`] ([`schedule`])
//!
//! The optimizer itself, robot kinematics and dynamics stay outside this crate.

pub mod config;
pub mod error;
pub mod gait;
pub mod horizon;
pub mod reference_motion;
pub mod schedule;

pub use config::{LimbConfig, PatternConfig, ScheduleConfig};
pub use error::{ConfigurationError, DomainError, ScheduleError};
pub use gait::{
    Contact, ContactMode, ContactPoints, Direction, GaitParameters, GaitPattern, GaitPhase,
    GaitTimeline, LimbId, ScheduleEvent,
};
pub use horizon::Horizon;
pub use reference_motion::{
    ComProgress, ComReference, FirstStep, FootReference, ReferenceSample, ReferenceSource,
};
pub use schedule::{
    assemble, ContactSolver, GaitReferences, RecordingSolver, SchedulePlan, SolverConfiguration,
    TimedSwitch,
};
