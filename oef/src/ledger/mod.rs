//! Decision ledger and longitudinal pattern analysis.
//!
//! Every processed decision is appended here. The ledger answers aggregate
//! questions (tier distribution, drift recommendations, outcome statistics)
//! but never feeds them back into the thresholds.

pub mod store;

pub use store::{DecisionLedger, DecisionLogEntry};

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ethics::EthicalTier;

/// Result of analyzing the retained log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PatternAnalysis {
    /// Too few entries for a meaningful distribution
    InsufficientData {
        /// Entries currently retained
        entries: usize,
        /// Entries needed before analysis runs
        required: usize,
    },
    /// Tier frequencies over the full retained log
    Distribution {
        /// Entries counted
        total_decisions: usize,
        /// Count per tier; tiers never seen are omitted
        tier_distribution: BTreeMap<EthicalTier, usize>,
        /// When the analysis ran
        analyzed_at: DateTime<Utc>,
    },
}

impl PatternAnalysis {
    /// Whether this is the insufficient-data marker.
    pub fn is_insufficient(&self) -> bool {
        matches!(self, PatternAnalysis::InsufficientData { .. })
    }
}

/// Outcome statistics over the retained log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerStats {
    /// Entries retained
    pub total_entries: usize,
    /// Entries with a recorded outcome
    pub with_outcome: usize,
    /// Entries whose outcome was successful
    pub successful: usize,
    /// `successful / with_outcome`, or 0 when nothing was assessed
    pub success_rate: f64,
}
