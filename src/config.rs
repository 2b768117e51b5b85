// Copyright 2025 Cowboy AI, LLC.

//! Configuration for the demo core
//!
//! Holds the color palette and the range the set-size selectors offer,
//! together with the policy applied to out-of-range sizes. Loaded from JSON
//! by the presentation layer; every field has a default.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::coloring::Palette;
use crate::errors::{DemoError, DemoResult};

/// What to do with a set size outside the configured range
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum BoundsPolicy {
    /// Refuse with `DemoError::InvalidSetSize`
    #[default]
    Reject,
    /// Move the value to the nearest bound
    Clamp,
}

/// Inclusive range offered by the set-size selectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SetSizeRange {
    /// Smallest selectable size (at least 1)
    pub min: u32,
    /// Largest selectable size
    pub max: u32,
}

impl Default for SetSizeRange {
    fn default() -> Self {
        Self { min: 1, max: 3 }
    }
}

impl SetSizeRange {
    /// True if `value` lies in the range.
    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Nearest value inside the range.
    pub fn clamp(&self, value: u32) -> u32 {
        value.clamp(self.min, self.max)
    }
}

/// Demo core configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DemoConfig {
    /// Cyclic order used by click-to-cycle
    pub palette: Palette,
    /// Range accepted for each of |A|, |B|, |C|
    pub set_sizes: SetSizeRange,
    /// Handling of sizes outside `set_sizes`
    pub bounds_policy: BoundsPolicy,
}

impl DemoConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> DemoResult<Self> {
        let config: DemoConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> DemoResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check palette and range consistency.
    pub fn validate(&self) -> DemoResult<()> {
        self.palette.validate()?;
        if self.set_sizes.min == 0 {
            return Err(DemoError::InvalidConfig(
                "set sizes must start at 1".to_string(),
            ));
        }
        if self.set_sizes.min > self.set_sizes.max {
            return Err(DemoError::InvalidConfig(format!(
                "empty set size range {}..={}",
                self.set_sizes.min, self.set_sizes.max
            )));
        }
        Ok(())
    }
}

/// JSON Schema for `DemoConfig`, for editors of configuration files.
pub fn schema_json() -> DemoResult<String> {
    let schema = schemars::schema_for!(DemoConfig);
    Ok(serde_json::to_string_pretty(&schema)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coloring::Color;

    #[test]
    fn test_default_matches_selectors() {
        let config = DemoConfig::default();
        assert_eq!(config.set_sizes, SetSizeRange { min: 1, max: 3 });
        assert_eq!(config.bounds_policy, BoundsPolicy::Reject);
        assert_eq!(config.palette.len(), 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = DemoConfig::from_json(r#"{ "bounds_policy": "clamp" }"#).unwrap();
        assert_eq!(config.bounds_policy, BoundsPolicy::Clamp);
        assert_eq!(config.set_sizes, SetSizeRange::default());
    }

    #[test]
    fn test_json_round_trip() {
        let config = DemoConfig {
            palette: Palette::new(vec![Color::Green, Color::Purple]).unwrap(),
            set_sizes: SetSizeRange { min: 1, max: 5 },
            bounds_policy: BoundsPolicy::Clamp,
        };
        let json = config.to_json().unwrap();
        assert_eq!(DemoConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_invalid_configs_rejected() {
        assert!(DemoConfig::from_json(r#"{ "palette": [] }"#).is_err());
        assert!(DemoConfig::from_json(r#"{ "set_sizes": { "min": 0, "max": 3 } }"#).is_err());
        assert!(DemoConfig::from_json(r#"{ "set_sizes": { "min": 3, "max": 2 } }"#).is_err());
        assert!(matches!(
            DemoConfig::from_json("not json"),
            Err(DemoError::SerializationError(_))
        ));
    }

    #[test]
    fn test_range_clamp() {
        let range = SetSizeRange::default();
        assert_eq!(range.clamp(0), 1);
        assert_eq!(range.clamp(7), 3);
        assert!(range.contains(2));
        assert!(!range.contains(4));
    }

    #[test]
    fn test_schema_mentions_fields() {
        let schema = schema_json().unwrap();
        assert!(schema.contains("bounds_policy"));
        assert!(schema.contains("palette"));
    }
}
