//! Stage configuration.
//!
//! Field names mirror the props the page passes in (`gravX`, `gravY`,
//! `sleeping`, `debug`, `wallOptions`). Every field is optional in JSON.

use serde::{Deserialize, Serialize};

use crate::core::StageError;

/// Which container edges get a static wall
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WallOptions {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl WallOptions {
    pub const ALL: WallOptions = WallOptions { top: true, bottom: true, left: true, right: true };
    pub const NONE: WallOptions = WallOptions { top: false, bottom: false, left: false, right: false };

    /// Number of walls enabled
    pub fn count(&self) -> usize {
        [self.top, self.bottom, self.left, self.right]
            .iter()
            .filter(|on| **on)
            .count()
    }
}

impl Default for WallOptions {
    fn default() -> Self {
        Self::ALL
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StageConfig {
    pub grav_x: f32,
    pub grav_y: f32,
    /// Let resting bodies fall asleep
    pub sleeping: bool,
    /// Attach the debug overlay on mount
    pub debug: bool,
    pub wall_options: WallOptions,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            grav_x: 0.0,
            grav_y: 1.0,
            sleeping: false,
            debug: false,
            wall_options: WallOptions::default(),
        }
    }
}

impl StageConfig {
    pub fn from_json(json: &str) -> Result<Self, StageError> {
        let config: StageConfig = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Non-finite gravity is written as `null`, which `from_json` rejects.
    pub fn to_json(&self) -> Result<String, StageError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Opt-in check for hosts that want bounded input. Construction itself
    /// never calls this: values are passed to the engine as given.
    pub fn validate(&self) -> Result<(), StageError> {
        if !self.grav_x.is_finite() || !self.grav_y.is_finite() {
            return Err(StageError::InvalidConfig("gravity must be finite"));
        }
        if self.grav_x.abs() > MAX_GRAVITY || self.grav_y.abs() > MAX_GRAVITY {
            return Err(StageError::InvalidConfig("gravity out of range"));
        }
        Ok(())
    }
}

/// Upper bound used by [`StageConfig::validate`]
pub const MAX_GRAVITY: f32 = 100.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_gives_defaults() {
        let config = StageConfig::from_json("{}").unwrap();
        assert_eq!(config, StageConfig::default());
        assert_eq!(config.grav_y, 1.0);
        assert_eq!(config.wall_options, WallOptions::ALL);
    }

    #[test]
    fn partial_wall_options_keep_other_walls() {
        let config = StageConfig::from_json(
            r#"{ "gravX": 0.5, "sleeping": true, "wallOptions": { "top": false } }"#,
        )
        .unwrap();
        assert_eq!(config.grav_x, 0.5);
        assert_eq!(config.grav_y, 1.0);
        assert!(config.sleeping);
        assert!(!config.wall_options.top);
        assert!(config.wall_options.bottom);
        assert_eq!(config.wall_options.count(), 3);
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = StageConfig::from_json("{ gravX: ").unwrap_err();
        assert!(matches!(err, StageError::Config(_)));
    }

    #[test]
    fn to_json_reads_back_and_writes_nan_as_null() {
        let config = StageConfig { grav_x: -0.5, debug: true, ..StageConfig::default() };
        let json = config.to_json().unwrap();
        assert!(json.contains("\"gravX\":-0.5"));
        assert_eq!(StageConfig::from_json(&json).unwrap(), config);

        let nan = StageConfig { grav_y: f32::NAN, ..StageConfig::default() };
        let json = nan.to_json().unwrap();
        assert!(json.contains("\"gravY\":null"));
        assert!(matches!(StageConfig::from_json(&json), Err(StageError::Config(_))));
    }

    #[test]
    fn validate_rejects_non_finite_gravity_only_on_request() {
        let config = StageConfig { grav_x: f32::NAN, ..StageConfig::default() };
        assert_eq!(
            config.validate(),
            Err(StageError::InvalidConfig("gravity must be finite"))
        );

        let negative = StageConfig { grav_y: -2.0, ..StageConfig::default() };
        assert!(negative.validate().is_ok());
    }
}
