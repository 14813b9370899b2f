//! Gait configuration loader. Reads a JSON gait file for per-robot setup.

use anyhow::{bail, Context, Result};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::gait::{ContactPoints, GaitParameters, GaitPattern, LimbId};

/// Top-level gait configuration, loaded from JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConfig {
    #[serde(default)]
    pub gait: GaitParameters,

    /// Contact limbs in LF, LH, RF, RH order for the quadruped presets.
    #[serde(default = "default_limbs")]
    pub limbs: Vec<LimbConfig>,

    #[serde(default)]
    pub pattern: PatternConfig,

    /// Height held by the CoM reference (meters).
    #[serde(default = "default_com_height")]
    pub com_height: f64,

    /// Optimizer discretization step (seconds).
    #[serde(default = "default_step_size")]
    pub step_size: f64,

    /// Weight supported by the contacts (N), used for the initial force guess.
    #[serde(default)]
    pub total_weight: Option<f64>,
}

/// One contact limb and its standing contact point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimbConfig {
    pub id: LimbId,
    #[serde(default)]
    pub name: String,
    pub position: [f64; 3],
}

/// How the limbs are split into the two alternating groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PatternConfig {
    /// Front pair / hind pair.
    #[default]
    Bound,
    /// Diagonal pairs.
    Trot,
    Custom {
        even: Vec<LimbId>,
        odd: Vec<LimbId>,
    },
}

fn default_limbs() -> Vec<LimbConfig> {
    [
        (12, "LF", [0.37, 0.2, 0.0]),
        (22, "LH", [-0.37, 0.2, 0.0]),
        (32, "RF", [0.37, -0.2, 0.0]),
        (42, "RH", [-0.37, -0.2, 0.0]),
    ]
    .into_iter()
    .map(|(id, name, position)| LimbConfig {
        id: LimbId(id),
        name: name.to_string(),
        position,
    })
    .collect()
}

fn default_com_height() -> f64 {
    0.42
}

fn default_step_size() -> f64 {
    0.02
}

impl ScheduleConfig {
    /// Load configuration from a JSON file. Falls back to defaults if the file is missing.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::warn!(
                "Gait config file not found at {}, using defaults",
                path.display()
            );
            return Ok(Self::default());
        }

        let contents =
            std::fs::read_to_string(path).context("Failed to read gait config file")?;

        let config: ScheduleConfig =
            serde_json::from_str(&contents).context("Failed to parse gait config JSON")?;

        Ok(config)
    }

    pub fn limb_ids(&self) -> Vec<LimbId> {
        self.limbs.iter().map(|l| l.id).collect()
    }

    pub fn contact_points(&self) -> ContactPoints {
        self.limbs
            .iter()
            .map(|l| (l.id, Vector3::from(l.position)))
            .collect()
    }

    /// Resolve the configured pattern against the limb list.
    pub fn gait_pattern(&self) -> Result<GaitPattern> {
        let ids = self.limb_ids();
        match &self.pattern {
            PatternConfig::Custom { even, odd } => Ok(GaitPattern::new(even.clone(), odd.clone())),
            preset => {
                let Ok([lf, lh, rf, rh]) = <[LimbId; 4]>::try_from(ids.as_slice()) else {
                    bail!(
                        "{:?} pattern needs exactly 4 limbs (LF, LH, RF, RH), got {}",
                        preset,
                        ids.len()
                    );
                };
                Ok(match preset {
                    PatternConfig::Trot => GaitPattern::quadruped_trot(lf, lh, rf, rh),
                    _ => GaitPattern::quadruped_bound(lf, lh, rf, rh),
                })
            }
        }
    }

    /// Display name for `limb`, or its id when unnamed.
    pub fn limb_name(&self, limb: LimbId) -> String {
        self.limbs
            .iter()
            .find(|l| l.id == limb && !l.name.is_empty())
            .map(|l| l.name.clone())
            .unwrap_or_else(|| limb.to_string())
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            gait: GaitParameters::default(),
            limbs: default_limbs(),
            pattern: PatternConfig::default(),
            com_height: default_com_height(),
            step_size: default_step_size(),
            total_weight: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gait::Direction;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = ScheduleConfig::load(Path::new("/nonexistent/gait_config.json")).unwrap();
        assert_eq!(config.gait, GaitParameters::default());
        assert_eq!(config.limbs.len(), 4);
        assert_eq!(config.pattern, PatternConfig::Bound);
    }

    #[test]
    fn partial_json_keeps_field_defaults() {
        let json = r#"{
            "gait": { "cycles": 5, "direction": "mirrored" },
            "pattern": { "kind": "trot" },
            "total_weight": 350.0
        }"#;
        let config: ScheduleConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.gait.cycles, 5);
        assert_eq!(config.gait.direction, Direction::Mirrored);
        assert_eq!(config.gait.swing_period, 0.26);
        assert_eq!(config.step_size, 0.02);
        assert_eq!(config.total_weight, Some(350.0));

        let pattern = config.gait_pattern().unwrap();
        assert_eq!(pattern.even, vec![LimbId(12), LimbId(42)]);
        assert_eq!(pattern.odd, vec![LimbId(32), LimbId(22)]);
    }

    #[test]
    fn custom_pattern_and_limbs() {
        let json = r#"{
            "limbs": [
                { "id": 1, "name": "left", "position": [0.0, 0.1, 0.0] },
                { "id": 2, "position": [0.0, -0.1, 0.0] }
            ],
            "pattern": { "kind": "custom", "even": [1], "odd": [2] }
        }"#;
        let config: ScheduleConfig = serde_json::from_str(json).unwrap();
        let pattern = config.gait_pattern().unwrap();
        assert_eq!(pattern, GaitPattern::new(vec![LimbId(1)], vec![LimbId(2)]));
        assert_eq!(config.contact_points()[&LimbId(2)].y, -0.1);
        assert_eq!(config.limb_name(LimbId(1)), "left");
        assert_eq!(config.limb_name(LimbId(2)), "2");
    }

    #[test]
    fn preset_needs_four_limbs() {
        let json = r#"{
            "limbs": [ { "id": 1, "position": [0.0, 0.0, 0.0] } ],
            "pattern": { "kind": "bound" }
        }"#;
        let config: ScheduleConfig = serde_json::from_str(json).unwrap();
        assert!(config.gait_pattern().is_err());
    }
}
