//! Tuning values of the collision engine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Angle, Tolerance};

/// How the environment picks among several obstacles crossed by one movement.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanPolicy {
    /// First obstacle in insertion order with any intersection.
    FirstMatch,
    /// Obstacle whose intersection is nearest to the start of the movement.
    #[default]
    Nearest,
}

/// Ejection of a ball found overlapping the paddle's side.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EscapeConfig {
    /// Heading away from the paddle's right side, mirrored for the left side.
    #[serde(with = "degrees")]
    pub angle: Angle,
    /// Extra speed of the single escaping move.
    pub speed: f64,
}

impl Default for EscapeConfig {
    fn default() -> Self {
        Self {
            angle: Angle::from_deg(15.0),
            speed: 15.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub tolerance: Tolerance,
    /// Distance a ball is kept off a struck edge.
    pub nudge_threshold: f64,
    pub scan_policy: ScanPolicy,
    pub escape: EscapeConfig,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            tolerance: Tolerance::DEFAULT,
            nudge_threshold: 0.1,
            scan_policy: ScanPolicy::default(),
            escape: EscapeConfig::default(),
        }
    }
}

impl PhysicsConfig {
    pub fn with_scan_policy(self, scan_policy: ScanPolicy) -> Self {
        Self {
            scan_policy,
            ..self
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let tolerance = self.tolerance.value();
        if !(tolerance.is_finite() && tolerance > 0.0) {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if !(self.nudge_threshold.is_finite() && self.nudge_threshold > 0.0) {
            return Err(ConfigError::InvalidNudgeThreshold(self.nudge_threshold));
        }
        if !(self.escape.speed.is_finite() && self.escape.speed >= 0.0) {
            return Err(ConfigError::InvalidEscapeSpeed(self.escape.speed));
        }
        Ok(())
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("tolerance must be positive and finite, got {0}")]
    InvalidTolerance(f64),
    #[error("nudge threshold must be positive and finite, got {0}")]
    InvalidNudgeThreshold(f64),
    #[error("escape speed must be non-negative and finite, got {0}")]
    InvalidEscapeSpeed(f64),
    #[error("invalid launch angle range: {0}")]
    InvalidLaunchRange(String),
}

mod degrees {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::Angle;

    pub fn serialize<S: Serializer>(angle: &Angle, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(angle.to_deg())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Angle, D::Error> {
        f64::deserialize(deserializer).map(Angle::from_deg)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_physics_config_default_is_valid() {
        assert_eq!(PhysicsConfig::default().validate(), Ok(()));
    }

    #[rstest]
    #[case::zero_tolerance(
        PhysicsConfig { tolerance: Tolerance::new(0.0), ..Default::default() },
        ConfigError::InvalidTolerance(0.0)
    )]
    #[case::negative_nudge(
        PhysicsConfig { nudge_threshold: -0.1, ..Default::default() },
        ConfigError::InvalidNudgeThreshold(-0.1)
    )]
    #[case::negative_escape_speed(
        PhysicsConfig {
            escape: EscapeConfig { speed: -1.0, ..Default::default() },
            ..Default::default()
        },
        ConfigError::InvalidEscapeSpeed(-1.0)
    )]
    fn test_physics_config_validate(#[case] config: PhysicsConfig, #[case] error: ConfigError) {
        assert_eq!(config.validate(), Err(error));
    }

    #[test]
    fn test_physics_config_nan_tolerance_is_rejected() {
        let config = PhysicsConfig {
            tolerance: Tolerance::new(f64::NAN),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTolerance(_))
        ));
    }

    #[test]
    fn test_physics_config_from_partial_json() {
        let config: PhysicsConfig =
            serde_json::from_str(r#"{"scan_policy": "first_match", "escape": {"angle": 30}}"#)
                .unwrap();
        assert_eq!(config.scan_policy, ScanPolicy::FirstMatch);
        assert_abs_diff_eq!(config.escape.angle, Angle::from_deg(30.0));
        assert_abs_diff_eq!(config.escape.speed, 15.0);
        assert_abs_diff_eq!(config.nudge_threshold, 0.1);
        assert_eq!(config.tolerance, Tolerance::DEFAULT);
    }

    #[test]
    fn test_error_message() {
        insta::assert_snapshot!(
            ConfigError::InvalidNudgeThreshold(-0.5).to_string(),
            @"nudge threshold must be positive and finite, got -0.5"
        );
    }
}
