//! Immutable threshold tables.
//!
//! These are built once when an evaluator is constructed and shared by every
//! evaluation afterwards. Comparisons named `*_at_least` are inclusive, `*_above`
//! and `*_below` are strict.

use serde::{Deserialize, Serialize};

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// Error raised when a threshold table is internally inconsistent.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ThresholdError {
    /// A fraction was outside [0, 1] or not finite
    #[error("{field} must be within [0, 1], got {value}")]
    FractionOutOfRange {
        /// Field name
        field: &'static str,
        /// Offending value
        value: f64,
    },

    /// A harm level was outside the 1-10 scale
    #[error("{field} must be within 1..=10, got {value}")]
    HarmOutOfRange {
        /// Field name
        field: &'static str,
        /// Offending value
        value: u8,
    },

    /// A weight was negative or not finite
    #[error("{field} must be a finite non-negative weight, got {value}")]
    InvalidWeight {
        /// Field name
        field: &'static str,
        /// Offending value
        value: f64,
    },
}

fn check_fraction(field: &'static str, value: f64) -> Result<(), ThresholdError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ThresholdError::FractionOutOfRange { field, value })
    }
}

fn check_harm(field: &'static str, value: u8) -> Result<(), ThresholdError> {
    if (1..=10).contains(&value) {
        Ok(())
    } else {
        Err(ThresholdError::HarmOutOfRange { field, value })
    }
}

fn check_weight(field: &'static str, value: f64) -> Result<(), ThresholdError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ThresholdError::InvalidWeight { field, value })
    }
}

/// Thresholds for the ordered tier rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(default)]
pub struct TierThresholds {
    /// Prohibited when harm is at least this...
    pub prohibited_harm_at_least: u8,
    /// ...and reversibility is below this
    pub prohibited_reversibility_below: f64,
    /// Ambiguous when confidence is below this
    pub ambiguous_confidence_below: f64,
    /// Ambiguous when stakeholder count is above this
    pub ambiguous_stakeholders_above: usize,
    /// High stakes when harm is at least this
    pub high_stakes_harm_at_least: u8,
    /// High stakes when reversibility is below this
    pub high_stakes_reversibility_below: f64,
    /// Standard when harm is at least this
    pub standard_harm_at_least: u8,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            prohibited_harm_at_least: 9,
            prohibited_reversibility_below: 0.1,
            ambiguous_confidence_below: 0.4,
            ambiguous_stakeholders_above: 10,
            high_stakes_harm_at_least: 6,
            high_stakes_reversibility_below: 0.5,
            standard_harm_at_least: 3,
        }
    }
}

impl TierThresholds {
    /// Check that every value is on its scale.
    pub fn validate(&self) -> Result<(), ThresholdError> {
        check_harm("prohibited_harm_at_least", self.prohibited_harm_at_least)?;
        check_fraction("prohibited_reversibility_below", self.prohibited_reversibility_below)?;
        check_fraction("ambiguous_confidence_below", self.ambiguous_confidence_below)?;
        check_harm("high_stakes_harm_at_least", self.high_stakes_harm_at_least)?;
        check_fraction(
            "high_stakes_reversibility_below",
            self.high_stakes_reversibility_below,
        )?;
        check_harm("standard_harm_at_least", self.standard_harm_at_least)
    }
}

/// Thresholds for the boolean heuristic pattern checks used during classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(default)]
pub struct TriggerThresholds {
    /// harm_reduction fires when harm is above this
    pub harm_reduction_harm_above: u8,
    /// reversibility_test fires when reversibility is below this
    pub reversibility_test_below: f64,
    /// proportionality fires when harm is above this...
    pub proportionality_harm_above: u8,
    /// ...and urgency is below this
    pub proportionality_urgency_below: u8,
    /// consensus_needed fires when stakeholder count is above this
    pub consensus_stakeholders_above: usize,
}

impl Default for TriggerThresholds {
    fn default() -> Self {
        Self {
            harm_reduction_harm_above: 3,
            reversibility_test_below: 0.7,
            proportionality_harm_above: 5,
            proportionality_urgency_below: 3,
            consensus_stakeholders_above: 3,
        }
    }
}

impl TriggerThresholds {
    /// Check that every value is on its scale.
    pub fn validate(&self) -> Result<(), ThresholdError> {
        check_fraction("reversibility_test_below", self.reversibility_test_below)
    }
}

/// Limits past which a context value is named in the tier justification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(default)]
pub struct JustificationThresholds {
    /// Harm above this is reported as high harm potential
    pub harm_above: u8,
    /// Reversibility below this is reported as low reversibility
    pub reversibility_below: f64,
    /// Confidence below this is reported as low confidence
    pub confidence_below: f64,
    /// Stakeholder counts above this are reported as many stakeholders
    pub stakeholders_above: usize,
}

impl Default for JustificationThresholds {
    fn default() -> Self {
        Self {
            harm_above: 5,
            reversibility_below: 0.5,
            confidence_below: 0.5,
            stakeholders_above: 5,
        }
    }
}

impl JustificationThresholds {
    /// Check that every value is on its scale.
    pub fn validate(&self) -> Result<(), ThresholdError> {
        check_harm("harm_above", self.harm_above)?;
        check_fraction("reversibility_below", self.reversibility_below)?;
        check_fraction("confidence_below", self.confidence_below)
    }
}

/// Limits that decide which tenets a decision engages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(default)]
pub struct TenetThresholds {
    /// Confidence below this engages intellectual honesty
    pub honesty_confidence_below: f64,
    /// Harm below this engages beneficence
    pub beneficence_harm_below: u8,
}

impl Default for TenetThresholds {
    fn default() -> Self {
        Self {
            honesty_confidence_below: 0.7,
            beneficence_harm_below: 3,
        }
    }
}

impl TenetThresholds {
    /// Check that every value is on its scale.
    pub fn validate(&self) -> Result<(), ThresholdError> {
        check_fraction("honesty_confidence_below", self.honesty_confidence_below)?;
        check_harm("beneficence_harm_below", self.beneficence_harm_below)
    }
}

/// Hard constraints a candidate action must satisfy to survive filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(default)]
pub struct ActionConstraints {
    /// Maximum admissible harm score (inclusive)
    pub max_harm: u8,
    /// Minimum admissible reversibility (inclusive)
    pub min_reversibility: f64,
    /// Minimum admissible confidence (inclusive)
    pub min_confidence: f64,
}

impl Default for ActionConstraints {
    fn default() -> Self {
        Self {
            max_harm: 5,
            min_reversibility: 0.3,
            min_confidence: 0.5,
        }
    }
}

impl ActionConstraints {
    /// Check that every value is on its scale.
    pub fn validate(&self) -> Result<(), ThresholdError> {
        check_fraction("min_reversibility", self.min_reversibility)?;
        check_fraction("min_confidence", self.min_confidence)
    }
}

/// Weights for scoring surviving candidates.
///
/// `score = (harm_ceiling - harm) * harm + reversibility * reversibility + confidence * confidence`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(default)]
pub struct SelectionWeights {
    /// Harm scale ceiling the harm term is measured against
    pub harm_ceiling: f64,
    /// Weight on harm avoided
    pub harm: f64,
    /// Weight on reversibility
    pub reversibility: f64,
    /// Weight on confidence
    pub confidence: f64,
}

impl Default for SelectionWeights {
    fn default() -> Self {
        Self {
            harm_ceiling: 10.0,
            harm: 0.4,
            reversibility: 0.3,
            confidence: 0.3,
        }
    }
}

impl SelectionWeights {
    /// Check that every weight is usable.
    pub fn validate(&self) -> Result<(), ThresholdError> {
        check_weight("harm_ceiling", self.harm_ceiling)?;
        check_weight("harm", self.harm)?;
        check_weight("reversibility", self.reversibility)?;
        check_weight("confidence", self.confidence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(TierThresholds::default().validate().is_ok());
        assert!(TriggerThresholds::default().validate().is_ok());
        assert!(ActionConstraints::default().validate().is_ok());
        assert!(SelectionWeights::default().validate().is_ok());
        assert!(JustificationThresholds::default().validate().is_ok());
        assert!(TenetThresholds::default().validate().is_ok());
    }

    #[test]
    fn test_reporting_tables_rejected() {
        let justification = JustificationThresholds {
            harm_above: 11,
            ..Default::default()
        };
        assert!(matches!(
            justification.validate(),
            Err(ThresholdError::HarmOutOfRange { field: "harm_above", .. })
        ));

        let tenets = TenetThresholds {
            honesty_confidence_below: -0.1,
            ..Default::default()
        };
        assert!(tenets.validate().is_err());
    }

    #[test]
    fn test_out_of_range_rejected() {
        let thresholds = TierThresholds {
            ambiguous_confidence_below: 1.5,
            ..Default::default()
        };
        assert_eq!(
            thresholds.validate(),
            Err(ThresholdError::FractionOutOfRange {
                field: "ambiguous_confidence_below",
                value: 1.5,
            })
        );

        let thresholds = TierThresholds {
            standard_harm_at_least: 0,
            ..Default::default()
        };
        assert!(matches!(
            thresholds.validate(),
            Err(ThresholdError::HarmOutOfRange { .. })
        ));

        let weights = SelectionWeights {
            harm: f64::NAN,
            ..Default::default()
        };
        assert!(weights.validate().is_err());
    }

    #[test]
    fn test_partial_deserialization_keeps_defaults() {
        let constraints: ActionConstraints =
            serde_json::from_str(r#"{"max_harm": 4}"#).unwrap();
        assert_eq!(constraints.max_harm, 4);
        assert_eq!(constraints.min_reversibility, 0.3);
        assert_eq!(constraints.min_confidence, 0.5);
    }
}
