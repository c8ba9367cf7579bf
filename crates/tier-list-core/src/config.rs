//! Editor Configuration
//!
//! Unifies the editor variants: whether the shortcut strip exists, whether
//! the items-only import is offered, and how a list import treats the
//! current model. Every field has a default, so `{}` is a valid config.

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};

/// How a full list import treats tiers and items already present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportMode {
    /// Imported rows go after the existing ones
    #[default]
    Append,
    /// The model is cleared first
    Replace,
}

/// Starter tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedTier {
    pub name: String,
    pub color: String,
}

impl SeedTier {
    fn new(name: &str, color: &str) -> Self {
        Self {
            name: name.to_string(),
            color: color.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Keep a shortcut strip of tier labels
    pub shortcuts: bool,
    /// Offer the flat `{ "items": [...] }` import
    pub items_only_import: bool,
    pub import_mode: ImportMode,
    /// Name for new tiers and imported rows without one
    pub default_tier_name: String,
    /// Color for new tiers and imported rows without one
    pub default_tier_color: String,
    /// `trace`, `debug`, `info`, `warn` or `error`
    pub log_level: String,
    pub seed_tiers: Vec<SeedTier>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            shortcuts: true,
            items_only_import: true,
            import_mode: ImportMode::Append,
            default_tier_name: "New Tier".to_string(),
            default_tier_color: "#FFF".to_string(),
            log_level: "info".to_string(),
            seed_tiers: vec![
                SeedTier::new("S", "#FF7F7F"),
                SeedTier::new("A", "#FFBF7F"),
                SeedTier::new("B", "#FFDF7F"),
                SeedTier::new("C", "#FFFF7F"),
                SeedTier::new("D", "#BFFF7F"),
            ],
        }
    }
}

impl Config {
    pub fn from_json(text: &str) -> DomainResult<Self> {
        let config: Config = serde_json::from_str(text).map_err(|e| DomainError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> DomainResult<()> {
        const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
        if !LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            return Err(DomainError::Config(format!("unknown log level {:?}", self.log_level)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(Config::from_json("{}").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_override() {
        let config = Config::from_json(
            r##"{"shortcuts": false, "importMode": "replace", "seedTiers": [{"name": "Top", "color": "#000"}]}"##,
        )
        .unwrap();
        assert!(!config.shortcuts);
        assert!(config.items_only_import);
        assert_eq!(config.import_mode, ImportMode::Replace);
        assert_eq!(config.seed_tiers, vec![SeedTier::new("Top", "#000")]);
        assert_eq!(config.default_tier_name, "New Tier");
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(matches!(Config::from_json("[1]"), Err(DomainError::Config(_))));
        assert!(matches!(
            Config::from_json(r#"{"logLevel": "loud"}"#),
            Err(DomainError::Config(_))
        ));
        assert!(matches!(
            Config::from_json(r#"{"importMode": "merge"}"#),
            Err(DomainError::Config(_))
        ));
    }
}
