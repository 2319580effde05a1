//! Configuration for the evaluation framework.
//!
//! Every table is read once when the framework is built and never re-derived
//! per call. Thresholds are never adjusted from ledger output.

use serde::{Deserialize, Serialize};

use ethics::{
    ActionConstraints, JustificationThresholds, SelectionWeights, TenetThresholds, TierThresholds,
    TriggerThresholds,
};

use crate::heuristics::PressureBands;
use crate::types::{OefError, Result};

/// Configuration for an [`ObjectiveEthicsFramework`](crate::ObjectiveEthicsFramework).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OefConfig {
    /// Tier classifier thresholds
    pub classifier: ClassifierConfig,
    /// Action pathway constraints and weights
    pub pathway: PathwayConfig,
    /// Ledger analysis thresholds and retention
    pub ledger: LedgerConfig,
    /// Pressure recommendation bands
    pub pressure: PressureBands,
    /// Version stamped on every report
    pub framework_version: String,
}

impl Default for OefConfig {
    fn default() -> Self {
        Self {
            classifier: ClassifierConfig::default(),
            pathway: PathwayConfig::default(),
            ledger: LedgerConfig::default(),
            pressure: PressureBands::default(),
            framework_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl OefConfig {
    /// Load config from YAML.
    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> std::result::Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    /// Check every table.
    pub fn validate(&self) -> Result<()> {
        self.classifier.tiers.validate()?;
        self.classifier.triggers.validate()?;
        self.classifier.justification.validate()?;
        self.classifier.tenets.validate()?;
        self.pathway.constraints.validate()?;
        self.pathway.weights.validate()?;
        self.ledger.validate()?;
        self.pressure.validate()
    }
}

/// Tier classifier configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Tier decision list thresholds
    pub tiers: TierThresholds,
    /// Pattern check thresholds
    pub triggers: TriggerThresholds,
    /// Limits named in the justification text
    pub justification: JustificationThresholds,
    /// Limits for tenet resolution
    pub tenets: TenetThresholds,
}

/// Action pathway configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathwayConfig {
    /// Hard constraints every selected candidate passes
    pub constraints: ActionConstraints,
    /// Selection weights
    pub weights: SelectionWeights,
}

/// Decision ledger configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Entries needed before a tier distribution is reported
    pub min_entries_for_analysis: usize,
    /// Entries needed before substantive recommendations are issued
    pub min_entries_for_recommendations: usize,
    /// Ambiguous share of the log above which a recommendation is issued
    pub ambiguous_share_limit: f64,
    /// Retain at most this many entries (oldest evicted first); unbounded when unset
    pub max_entries: Option<usize>,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            min_entries_for_analysis: 5,
            min_entries_for_recommendations: 10,
            ambiguous_share_limit: 0.3,
            max_entries: None,
        }
    }
}

impl LedgerConfig {
    /// Check the thresholds are consistent.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.ambiguous_share_limit) {
            return Err(OefError::ConfigError(format!(
                "ambiguous_share_limit must be within [0, 1], got {}",
                self.ambiguous_share_limit
            )));
        }
        if self.min_entries_for_recommendations < self.min_entries_for_analysis {
            return Err(OefError::ConfigError(format!(
                "min_entries_for_recommendations ({}) is below min_entries_for_analysis ({})",
                self.min_entries_for_recommendations, self.min_entries_for_analysis
            )));
        }
        if self.max_entries == Some(0) {
            return Err(OefError::ConfigError(
                "max_entries must be at least 1 when set".to_string(),
            ));
        }
        Ok(())
    }
}
