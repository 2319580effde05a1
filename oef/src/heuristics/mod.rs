//! Heuristic scoring functions.
//!
//! Each heuristic maps domain signals to a pressure score in [0, 1] within
//! one concern domain:
//! - **Harm**: reversibility, proportionality
//! - **Epistemic**: uncertainty, evidence adequacy
//! - **Risk**: volitional misalignment
//! - **Meta-epistemic**: reproducibility pressure
//! - **Accountability**: transparency readiness
//!
//! [`HeuristicSet`] runs them in a fixed order and folds the scores into a
//! single normalized pressure with a coarse recommendation.

mod accountability;
mod epistemic;
mod harm;
mod meta;
mod risk;
mod vulnerability;

pub use accountability::TransparencyReadinessHeuristic;
pub use epistemic::{EvidenceAdequacyHeuristic, UncertaintyHeuristic};
pub use harm::{ProportionalityHeuristic, ReversibilityHeuristic};
pub use meta::ReproducibilityPressureHeuristic;
pub use risk::VolitionalMisalignmentHeuristic;
pub use vulnerability::{legality_classification, stakeholder_vulnerability_index};

use serde::{Deserialize, Serialize};
use tracing::debug;

use ethics::ConcernDomain;

use crate::signals::DomainSignals;
use crate::types::{OefError, Result};

/// Common trait for heuristic scorers.
pub trait Heuristic: Send + Sync {
    /// Name of the heuristic.
    fn name(&self) -> &'static str;

    /// Concern domain the heuristic scores within.
    fn domain(&self) -> ConcernDomain;

    /// Score the signals (0.0 - 1.0). Absent signals take their defaults.
    fn evaluate(&self, signals: &DomainSignals) -> f64;
}

/// Round to a fixed number of decimal places.
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Upper bounds of the pressure recommendation bands (inclusive).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PressureBands {
    /// Pressure at or below this proceeds
    pub proceed_at_most: f64,
    /// Pressure at or below this proceeds with caution; above it defers
    pub caution_at_most: f64,
}

impl Default for PressureBands {
    fn default() -> Self {
        Self {
            proceed_at_most: 0.33,
            caution_at_most: 0.66,
        }
    }
}

impl PressureBands {
    /// Check the bands are ordered and within [0, 1].
    pub fn validate(&self) -> Result<()> {
        let ordered = 0.0 <= self.proceed_at_most
            && self.proceed_at_most <= self.caution_at_most
            && self.caution_at_most <= 1.0;
        if ordered {
            Ok(())
        } else {
            Err(OefError::ConfigError(format!(
                "pressure bands must satisfy 0 <= {} <= {} <= 1",
                self.proceed_at_most, self.caution_at_most
            )))
        }
    }

    /// Map a normalized pressure to its recommendation.
    pub fn recommend(&self, pressure: f64) -> PressureRecommendation {
        if pressure <= self.proceed_at_most {
            PressureRecommendation::Proceed
        } else if pressure <= self.caution_at_most {
            PressureRecommendation::ProceedWithCaution
        } else {
            PressureRecommendation::DeferOrEscalate
        }
    }
}

/// Coarse recommendation derived from normalized pressure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PressureRecommendation {
    /// Low pressure
    Proceed,
    /// Moderate pressure
    ProceedWithCaution,
    /// High pressure
    DeferOrEscalate,
}

impl PressureRecommendation {
    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            PressureRecommendation::Proceed => "Proceed",
            PressureRecommendation::ProceedWithCaution => "Proceed with caution",
            PressureRecommendation::DeferOrEscalate => "Defer or escalate",
        }
    }
}

/// Score produced by one heuristic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeuristicScore {
    /// Heuristic name
    pub name: String,
    /// Concern domain
    pub domain: ConcernDomain,
    /// Score rounded to 3 decimals
    pub score: f64,
}

/// Composite output of the heuristic set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PressureAssessment {
    /// Per-heuristic scores in evaluation order
    pub heuristic_scores: Vec<HeuristicScore>,
    /// Mean of all heuristic scores, rounded to 3 decimals
    pub normalized_pressure: f64,
    /// Recommendation band for the pressure
    pub recommendation: PressureRecommendation,
    /// Stakeholders are autonomous but misaligned, so education may help
    pub educate: bool,
    /// Stakeholder vulnerability index, rounded to 2 decimals
    pub svi: f64,
    /// Legality classification, unchanged from the input
    pub legality: String,
}

impl PressureAssessment {
    /// Look up a score by heuristic name.
    pub fn score(&self, name: &str) -> Option<f64> {
        self.heuristic_scores
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.score)
    }
}

/// Ordered collection of heuristics.
pub struct HeuristicSet {
    heuristics: Vec<Box<dyn Heuristic>>,
    bands: PressureBands,
}

impl HeuristicSet {
    /// The seven standard heuristics in their fixed order.
    pub fn standard() -> Self {
        Self::with_bands(PressureBands::default())
    }

    /// Standard heuristics with custom recommendation bands.
    pub fn with_bands(bands: PressureBands) -> Self {
        Self {
            heuristics: vec![
                Box::new(ReversibilityHeuristic),
                Box::new(ProportionalityHeuristic),
                Box::new(UncertaintyHeuristic),
                Box::new(EvidenceAdequacyHeuristic),
                Box::new(VolitionalMisalignmentHeuristic),
                Box::new(ReproducibilityPressureHeuristic),
                Box::new(TransparencyReadinessHeuristic),
            ],
            bands,
        }
    }

    /// Number of heuristics in the set.
    pub fn len(&self) -> usize {
        self.heuristics.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.heuristics.is_empty()
    }

    /// Heuristic names in evaluation order.
    pub fn names(&self) -> Vec<&'static str> {
        self.heuristics.iter().map(|h| h.name()).collect()
    }

    /// Run every heuristic and fold the results.
    ///
    /// The mean is taken over the unrounded scores and then rounded.
    pub fn assess(&self, signals: &DomainSignals) -> Result<PressureAssessment> {
        signals.validate()?;

        let mut heuristic_scores = Vec::with_capacity(self.heuristics.len());
        let mut total = 0.0;

        for heuristic in &self.heuristics {
            let score = heuristic.evaluate(signals);
            debug!(
                heuristic = heuristic.name(),
                domain = heuristic.domain().as_str(),
                score = score,
                "Heuristic scored"
            );
            total += score;
            heuristic_scores.push(HeuristicScore {
                name: heuristic.name().to_string(),
                domain: heuristic.domain(),
                score: round_to(score, 3),
            });
        }

        let normalized_pressure = if self.heuristics.is_empty() {
            0.0
        } else {
            round_to(total / self.heuristics.len() as f64, 3)
        };

        Ok(PressureAssessment {
            heuristic_scores,
            normalized_pressure,
            recommendation: self.bands.recommend(normalized_pressure),
            educate: VolitionalMisalignmentHeuristic::educable(signals),
            svi: stakeholder_vulnerability_index(signals),
            legality: legality_classification(signals).to_string(),
        })
    }
}

impl Default for HeuristicSet {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_order() {
        let set = HeuristicSet::standard();
        assert_eq!(
            set.names(),
            vec![
                "reversibility",
                "proportionality",
                "uncertainty",
                "evidence_adequacy",
                "volitional_misalignment",
                "reproducibility_pressure",
                "transparency_readiness",
            ]
        );
    }

    #[test]
    fn test_all_defaults() {
        // 0.5 + 0.5 + 0.5 + 0.5 + 0.5 + 0.4 + 0.0 = 2.9 -> 0.414
        let assessment = HeuristicSet::standard()
            .assess(&DomainSignals::default())
            .unwrap();

        assert_eq!(assessment.heuristic_scores.len(), 7);
        assert_eq!(assessment.normalized_pressure, 0.414);
        assert_eq!(
            assessment.recommendation,
            PressureRecommendation::ProceedWithCaution
        );
        assert!(!assessment.educate);
        assert_eq!(assessment.svi, 0.33);
        assert_eq!(assessment.legality, "unclear");
    }

    #[test]
    fn test_low_pressure_proceeds() {
        let signals = DomainSignals {
            reversibility: Some(1.0),
            expected_benefit: Some(1.0),
            expected_harm: Some(0.0),
            evidence_certainty: Some(1.0),
            evidence_quality: Some(1.0),
            evidence_quantity: Some(1.0),
            volitional_alignment: Some(1.0),
            success_rate: Some(0.9),
            ..Default::default()
        };
        let assessment = HeuristicSet::standard().assess(&signals).unwrap();

        // Only reproducibility contributes: 0.1 / 7
        assert_eq!(assessment.normalized_pressure, 0.014);
        assert_eq!(assessment.recommendation, PressureRecommendation::Proceed);
    }

    #[test]
    fn test_high_pressure_defers() {
        let signals = DomainSignals {
            reversibility: Some(0.0),
            expected_benefit: Some(0.0),
            expected_harm: Some(1.0),
            evidence_certainty: Some(0.0),
            evidence_quality: Some(0.0),
            evidence_quantity: Some(0.0),
            stakeholder_autonomy: Some(false),
            scenario_count: Some(20),
            success_rate: Some(0.2),
            ethical_tier: Some(5),
            impact_scope: Some("systemic".to_string()),
            ..Default::default()
        };
        let assessment = HeuristicSet::standard().assess(&signals).unwrap();

        // 1 + 1 + 1 + 1 + 0.8 + 0.9 + 0.9 = 6.6 -> 0.943
        assert_eq!(assessment.normalized_pressure, 0.943);
        assert_eq!(
            assessment.recommendation,
            PressureRecommendation::DeferOrEscalate
        );
    }

    #[test]
    fn test_scores_bounded() {
        let signals = DomainSignals {
            expected_benefit: Some(0.0),
            expected_harm: Some(40.0),
            ethical_tier: Some(4),
            impact_scope: Some("systemic".to_string()),
            ..Default::default()
        };
        let assessment = HeuristicSet::standard().assess(&signals).unwrap();
        for score in &assessment.heuristic_scores {
            assert!((0.0..=1.0).contains(&score.score), "{} out of range", score.name);
        }
    }

    #[test]
    fn test_invalid_signals_rejected() {
        let signals = DomainSignals {
            cognitive_capacity: Some(-0.5),
            ..Default::default()
        };
        assert!(HeuristicSet::standard().assess(&signals).is_err());
    }

    #[test]
    fn test_band_edges() {
        let bands = PressureBands::default();
        assert_eq!(bands.recommend(0.33), PressureRecommendation::Proceed);
        assert_eq!(bands.recommend(0.331), PressureRecommendation::ProceedWithCaution);
        assert_eq!(bands.recommend(0.66), PressureRecommendation::ProceedWithCaution);
        assert_eq!(bands.recommend(0.661), PressureRecommendation::DeferOrEscalate);

        let inverted = PressureBands {
            proceed_at_most: 0.7,
            caution_at_most: 0.5,
        };
        assert!(inverted.validate().is_err());
    }
}
