//! Structured output handed to reporting and persistence layers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ethics::RoutingDirective;

use crate::heuristics::PressureAssessment;
use crate::ledger::{LedgerStats, PatternAnalysis};
use crate::types::{ActionResult, EthicalEvaluation};

/// Stakeholders shown as primary in a report.
const PRIMARY_STAKEHOLDERS: usize = 3;

/// How tangled the set of affected parties is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StakeholderComplexity {
    /// At most two stakeholders
    Low,
    /// Three to five stakeholders
    Moderate,
    /// More than five stakeholders
    High,
}

impl StakeholderComplexity {
    /// Band for a stakeholder count.
    pub fn from_count(count: usize) -> Self {
        if count > 5 {
            Self::High
        } else if count > 2 {
            Self::Moderate
        } else {
            Self::Low
        }
    }
}

/// Summary of the affected parties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StakeholderAnalysis {
    /// First three stakeholders in caller order
    pub primary_stakeholders: Vec<String>,
    /// Total number of stakeholders
    pub total_stakeholder_count: usize,
    /// Complexity band
    pub complexity: StakeholderComplexity,
}

impl StakeholderAnalysis {
    /// Summarize a stakeholder list.
    pub fn from_stakeholders(stakeholders: &[String]) -> Self {
        Self {
            primary_stakeholders: stakeholders
                .iter()
                .take(PRIMARY_STAKEHOLDERS)
                .cloned()
                .collect(),
            total_stakeholder_count: stakeholders.len(),
            complexity: StakeholderComplexity::from_count(stakeholders.len()),
        }
    }
}

/// Coarse band for the echoed system confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceBand {
    /// Below 0.5; human review strongly advised
    Low,
    /// 0.5 up to 0.7
    Moderate,
    /// 0.7 and above
    High,
}

impl ConfidenceBand {
    /// Band for a confidence value.
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence < 0.5 {
            Self::Low
        } else if confidence < 0.7 {
            Self::Moderate
        } else {
            Self::High
        }
    }

    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }
}

/// Everything produced for one processed decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionReport {
    /// Unique decision ID
    pub decision_id: String,
    /// Tier classification
    pub evaluation: EthicalEvaluation,
    /// Chosen action
    pub action: ActionResult,
    /// Where the decision goes next
    pub routing: RoutingDirective,
    /// Heuristic pressure over the domain signals
    pub pressure: PressureAssessment,
    /// Affected parties
    pub stakeholder_analysis: StakeholderAnalysis,
    /// Confidence band
    pub confidence_band: ConfidenceBand,
    /// ID of the ledger entry recording this decision
    pub ledger_entry_id: String,
    /// When processing finished
    pub processed_at: DateTime<Utc>,
    /// Framework version
    pub framework_version: String,
}

impl DecisionReport {
    /// Whether a human must look at this decision before it executes.
    pub fn requires_human_review(&self) -> bool {
        self.routing.human_review
    }
}

/// Framework status derived from the ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemStatus {
    /// Always "operational" for a constructed framework
    pub framework_status: String,
    /// Decisions currently retained in the ledger
    pub decisions_processed: usize,
    /// Tier distribution or insufficient-data marker
    pub pattern_analysis: PatternAnalysis,
    /// Advisory recommendations
    pub recommendations: Vec<String>,
    /// Outcome statistics
    pub outcome_stats: LedgerStats,
    /// When the status was produced
    pub last_updated: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stakeholder_analysis() {
        let stakeholders: Vec<String> = ["researchers", "community", "bad_actors", "society"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let analysis = StakeholderAnalysis::from_stakeholders(&stakeholders);

        assert_eq!(analysis.primary_stakeholders, vec!["researchers", "community", "bad_actors"]);
        assert_eq!(analysis.total_stakeholder_count, 4);
        assert_eq!(analysis.complexity, StakeholderComplexity::Moderate);
    }

    #[test]
    fn test_complexity_bands() {
        assert_eq!(StakeholderComplexity::from_count(0), StakeholderComplexity::Low);
        assert_eq!(StakeholderComplexity::from_count(2), StakeholderComplexity::Low);
        assert_eq!(StakeholderComplexity::from_count(5), StakeholderComplexity::Moderate);
        assert_eq!(StakeholderComplexity::from_count(6), StakeholderComplexity::High);
    }

    #[test]
    fn test_confidence_bands() {
        assert_eq!(ConfidenceBand::from_confidence(0.49), ConfidenceBand::Low);
        assert_eq!(ConfidenceBand::from_confidence(0.5), ConfidenceBand::Moderate);
        assert_eq!(ConfidenceBand::from_confidence(0.7), ConfidenceBand::High);
        assert_eq!(ConfidenceBand::High.as_str(), "high");
    }
}
