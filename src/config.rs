use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::core::dimensions::ScoringPolicy;
use crate::models::{ScoringWeights, TierThresholds};

/// Invalid configuration values that deserialize fine but make no sense.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("scoring weights must sum to 1.0, got {0}")]
    WeightSum(f64),
    #[error("tier thresholds must be strictly decreasing (perfect > great > good > potential)")]
    TierOrder,
    #[error("budget tolerance ratio must be positive, got {0}")]
    BudgetTolerance(f64),
}

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8080
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_limit")]
    pub default_limit: u16,
    #[serde(default = "default_max_limit")]
    pub max_limit: u16,
    #[serde(default = "default_top_matches_cap")]
    pub top_matches_cap: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
            top_matches_cap: default_top_matches_cap(),
        }
    }
}

fn default_limit() -> u16 {
    20
}
fn default_max_limit() -> u16 {
    100
}
fn default_top_matches_cap() -> usize {
    5
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
    #[serde(default)]
    pub tiers: TiersConfig,
    #[serde(default)]
    pub policy: PolicyConfig,
}

/// Dimension weights. Product-tuned constants, not derived from data.
#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_goals_weight")]
    pub goals: f64,
    #[serde(default = "default_location_weight")]
    pub location: f64,
    #[serde(default = "default_budget_weight")]
    pub budget: f64,
    #[serde(default = "default_schedule_weight")]
    pub schedule: f64,
    #[serde(default = "default_personality_weight")]
    pub personality: f64,
    #[serde(default = "default_package_weight")]
    pub package: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            goals: default_goals_weight(),
            location: default_location_weight(),
            budget: default_budget_weight(),
            schedule: default_schedule_weight(),
            personality: default_personality_weight(),
            package: default_package_weight(),
        }
    }
}

fn default_goals_weight() -> f64 {
    0.30
}
fn default_location_weight() -> f64 {
    0.15
}
fn default_budget_weight() -> f64 {
    0.20
}
fn default_schedule_weight() -> f64 {
    0.15
}
fn default_personality_weight() -> f64 {
    0.10
}
fn default_package_weight() -> f64 {
    0.10
}

#[derive(Debug, Clone, Deserialize)]
pub struct TiersConfig {
    #[serde(default = "default_perfect")]
    pub perfect: u8,
    #[serde(default = "default_great")]
    pub great: u8,
    #[serde(default = "default_good")]
    pub good: u8,
    #[serde(default = "default_potential")]
    pub potential: u8,
}

impl Default for TiersConfig {
    fn default() -> Self {
        Self {
            perfect: default_perfect(),
            great: default_great(),
            good: default_good(),
            potential: default_potential(),
        }
    }
}

fn default_perfect() -> u8 {
    80
}
fn default_great() -> u8 {
    60
}
fn default_good() -> u8 {
    40
}
fn default_potential() -> u8 {
    20
}

#[derive(Debug, Clone, Deserialize)]
pub struct PolicyConfig {
    #[serde(default = "default_virtual_bonus")]
    pub virtual_coaching_bonus: f64,
    #[serde(default = "default_budget_tolerance")]
    pub budget_tolerance_ratio: f64,
    #[serde(default = "default_hybrid_score")]
    pub hybrid_location_score: f64,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            virtual_coaching_bonus: default_virtual_bonus(),
            budget_tolerance_ratio: default_budget_tolerance(),
            hybrid_location_score: default_hybrid_score(),
        }
    }
}

fn default_virtual_bonus() -> f64 {
    40.0
}
fn default_budget_tolerance() -> f64 {
    0.25
}
fn default_hybrid_score() -> f64 {
    70.0
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "json".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml, then config/local.toml)
    /// 3. Environment variables (prefixed with COACHMATCH_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., COACHMATCH_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("COACHMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("COACHMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Reject configurations that deserialized but cannot drive the matcher.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let w = &self.scoring.weights;
        let sum = w.goals + w.location + w.budget + w.schedule + w.personality + w.package;
        if (sum - 1.0).abs() > 1e-6 {
            return Err(SettingsError::WeightSum(sum));
        }

        let t = &self.scoring.tiers;
        if !(t.perfect > t.great && t.great > t.good && t.good > t.potential) {
            return Err(SettingsError::TierOrder);
        }

        if self.scoring.policy.budget_tolerance_ratio <= 0.0 {
            return Err(SettingsError::BudgetTolerance(
                self.scoring.policy.budget_tolerance_ratio,
            ));
        }

        Ok(())
    }

    pub fn scoring_weights(&self) -> ScoringWeights {
        ScoringWeights {
            goals: self.scoring.weights.goals,
            location: self.scoring.weights.location,
            budget: self.scoring.weights.budget,
            schedule: self.scoring.weights.schedule,
            personality: self.scoring.weights.personality,
            package: self.scoring.weights.package,
        }
    }

    pub fn tier_thresholds(&self) -> TierThresholds {
        TierThresholds {
            perfect: self.scoring.tiers.perfect,
            great: self.scoring.tiers.great,
            good: self.scoring.tiers.good,
            potential: self.scoring.tiers.potential,
        }
    }

    pub fn scoring_policy(&self) -> ScoringPolicy {
        ScoringPolicy {
            virtual_coaching_bonus: self.scoring.policy.virtual_coaching_bonus,
            budget_tolerance_ratio: self.scoring.policy.budget_tolerance_ratio,
            hybrid_location_score: self.scoring.policy.hybrid_location_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let weights = WeightsConfig::default();
        assert_eq!(weights.goals, 0.30);
        assert_eq!(weights.location, 0.15);
        assert_eq!(weights.budget, 0.20);
        assert_eq!(weights.schedule, 0.15);
        assert_eq!(weights.personality, 0.10);
        assert_eq!(weights.package, 0.10);

        let sum = weights.goals
            + weights.location
            + weights.budget
            + weights.schedule
            + weights.personality
            + weights.package;
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_default_tiers_are_ordered() {
        let tiers = TiersConfig::default();
        assert!(tiers.perfect > tiers.great);
        assert!(tiers.great > tiers.good);
        assert!(tiers.good > tiers.potential);
    }

    #[test]
    fn test_validate_accepts_defaults() {
        let settings = Settings {
            server: ServerSettings::default(),
            matching: MatchingSettings::default(),
            scoring: ScoringSettings::default(),
            logging: LoggingSettings::default(),
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_weight_sum() {
        let mut settings = Settings {
            server: ServerSettings::default(),
            matching: MatchingSettings::default(),
            scoring: ScoringSettings::default(),
            logging: LoggingSettings::default(),
        };
        settings.scoring.weights.goals = 0.9;
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::WeightSum(_))
        ));
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "json");
    }
}
