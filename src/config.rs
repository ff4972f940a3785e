use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::layout::GridShape;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Page grid the reordering table assumes.
    pub grid: GridShape,
    /// How long transition markers stay on a photo after a drop. Covers the
    /// 500ms animation plus an equal settling wait.
    pub cleanup_delay_ms: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            grid: GridShape::default(),
            cleanup_delay_ms: 1000.0,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.grid.validate()?;
        if !self.cleanup_delay_ms.is_finite() || self.cleanup_delay_ms < 0.0 {
            return Err(ConfigError::InvalidCleanupDelay);
        }
        Ok(())
    }

    /// Parse a partial JSON config; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_takes_defaults() {
        let cfg = EngineConfig::from_json(r#"{"cleanup_delay_ms": 250}"#).unwrap();
        assert_eq!(cfg.grid, GridShape::default());
        assert_eq!(cfg.cleanup_delay_ms, 250.0);

        let cfg = EngineConfig::from_json(r#"{"grid": {"columns": 1}}"#).unwrap();
        assert_eq!(cfg.grid, GridShape { columns: 1, capacity: 4 });
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(EngineConfig::from_json("  ").unwrap(), EngineConfig::default());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let cfg = EngineConfig::from_json(r#"{"grid": {"capacity": 0}}"#).unwrap();
        assert_eq!(cfg.validate(), Err(ConfigError::NoCapacity));
    }

    #[test]
    fn test_negative_delay_rejected() {
        let cfg = EngineConfig { cleanup_delay_ms: -1.0, ..Default::default() };
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidCleanupDelay));
    }
}
