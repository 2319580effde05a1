//! Domain-specific signals attached to a decision context.
//!
//! Every field is optional. Accessors return the documented default when a
//! field is absent, so scoring never fails on missing data. Unknown keys in
//! the incoming payload are ignored during deserialization.

use serde::{Deserialize, Serialize};

use crate::types::{OefError, Result};

/// Typed view of the open-ended domain data map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainSignals {
    /// Reversibility of the decision's effects (0.0 - 1.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reversibility: Option<f64>,
    /// Expected benefit magnitude (>= 0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_benefit: Option<f64>,
    /// Expected harm magnitude (>= 0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_harm: Option<f64>,
    /// Certainty of the supporting evidence (0.0 - 1.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence_certainty: Option<f64>,
    /// Quality of the supporting evidence (0.0 - 1.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence_quality: Option<f64>,
    /// Quantity of the supporting evidence (0.0 - 1.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence_quantity: Option<f64>,
    /// Alignment with what stakeholders actually want (0.0 - 1.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volitional_alignment: Option<f64>,
    /// Whether stakeholders can exercise autonomy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stakeholder_autonomy: Option<bool>,
    /// Normalized urgency (0.0 - 1.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urgency: Option<f64>,
    /// Number of comparable scenarios observed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scenario_count: Option<u32>,
    /// Success rate over those scenarios (0.0 - 1.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_rate: Option<f64>,
    /// Tier level the caller already associates with the decision (1-5)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ethical_tier: Option<u8>,
    /// "individual", "group" or "systemic"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impact_scope: Option<String>,
    /// Cognitive capacity of affected parties (0.0 - 1.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cognitive_capacity: Option<f64>,
    /// Whether affected parties have legal agency
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_agency: Option<bool>,
    /// Ability of affected parties to advocate for themselves (0.0 - 1.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_advocacy_ability: Option<f64>,
    /// Legality classification, passed through unchanged
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legality: Option<String>,
}

impl DomainSignals {
    /// Coerce a loosely typed JSON object into signals.
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Default 0.5.
    pub fn reversibility(&self) -> f64 {
        self.reversibility.unwrap_or(0.5)
    }

    /// Default 0.5.
    pub fn expected_benefit(&self) -> f64 {
        self.expected_benefit.unwrap_or(0.5)
    }

    /// Default 0.5.
    pub fn expected_harm(&self) -> f64 {
        self.expected_harm.unwrap_or(0.5)
    }

    /// Default 0.5.
    pub fn evidence_certainty(&self) -> f64 {
        self.evidence_certainty.unwrap_or(0.5)
    }

    /// Default 0.5.
    pub fn evidence_quality(&self) -> f64 {
        self.evidence_quality.unwrap_or(0.5)
    }

    /// Default 0.5.
    pub fn evidence_quantity(&self) -> f64 {
        self.evidence_quantity.unwrap_or(0.5)
    }

    /// Default 0.5.
    pub fn volitional_alignment(&self) -> f64 {
        self.volitional_alignment.unwrap_or(0.5)
    }

    /// Default true.
    pub fn stakeholder_autonomy(&self) -> bool {
        self.stakeholder_autonomy.unwrap_or(true)
    }

    /// Default 0.5.
    pub fn urgency(&self) -> f64 {
        self.urgency.unwrap_or(0.5)
    }

    /// Default 10.
    pub fn scenario_count(&self) -> u32 {
        self.scenario_count.unwrap_or(10)
    }

    /// Default 0.7.
    pub fn success_rate(&self) -> f64 {
        self.success_rate.unwrap_or(0.7)
    }

    /// Default 3.
    pub fn ethical_tier(&self) -> u8 {
        self.ethical_tier.unwrap_or(3)
    }

    /// Default "individual".
    pub fn impact_scope(&self) -> &str {
        self.impact_scope.as_deref().unwrap_or("individual")
    }

    /// Default 0.5.
    pub fn cognitive_capacity(&self) -> f64 {
        self.cognitive_capacity.unwrap_or(0.5)
    }

    /// Default true.
    pub fn legal_agency(&self) -> bool {
        self.legal_agency.unwrap_or(true)
    }

    /// Default 0.5.
    pub fn self_advocacy_ability(&self) -> f64 {
        self.self_advocacy_ability.unwrap_or(0.5)
    }

    /// Default "unclear".
    pub fn legality(&self) -> &str {
        self.legality.as_deref().unwrap_or("unclear")
    }

    /// Reject any present field that is outside its documented range.
    pub fn validate(&self) -> Result<()> {
        let fractions = [
            ("reversibility", self.reversibility),
            ("evidence_certainty", self.evidence_certainty),
            ("evidence_quality", self.evidence_quality),
            ("evidence_quantity", self.evidence_quantity),
            ("volitional_alignment", self.volitional_alignment),
            ("urgency", self.urgency),
            ("success_rate", self.success_rate),
            ("cognitive_capacity", self.cognitive_capacity),
            ("self_advocacy_ability", self.self_advocacy_ability),
        ];
        for (field, value) in fractions {
            if let Some(v) = value {
                if !v.is_finite() || !(0.0..=1.0).contains(&v) {
                    return Err(OefError::InvalidSignal(format!(
                        "{} must be within [0, 1], got {}",
                        field, v
                    )));
                }
            }
        }

        let magnitudes = [
            ("expected_benefit", self.expected_benefit),
            ("expected_harm", self.expected_harm),
        ];
        for (field, value) in magnitudes {
            if let Some(v) = value {
                if !v.is_finite() || v < 0.0 {
                    return Err(OefError::InvalidSignal(format!(
                        "{} must be a finite non-negative magnitude, got {}",
                        field, v
                    )));
                }
            }
        }

        if let Some(tier) = self.ethical_tier {
            if !(1..=5).contains(&tier) {
                return Err(OefError::InvalidSignal(format!(
                    "ethical_tier must be within 1..=5, got {}",
                    tier
                )));
            }
        }

        Ok(())
    }
}
