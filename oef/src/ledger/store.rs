//! Append-only decision log.

use std::collections::{BTreeMap, VecDeque};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

use ethics::EthicalTier;

use crate::config::LedgerConfig;
use crate::context::DecisionContext;
use crate::ledger::{LedgerStats, PatternAnalysis};
use crate::types::{ActionResult, DecisionOutcome, EthicalEvaluation, OefError, Result};

const CONTINUE_MONITORING: &str = "Continue monitoring - more data needed for reliable patterns";
const AMBIGUOUS_RATE_HIGH: &str =
    "High rate of Tier 4 decisions suggests need for better heuristics or training data";
const PROHIBITED_SEEN: &str =
    "Prohibited decisions detected - review input filtering and validation";

/// One logged decision.
#[derive(Debug, Clone, Serialize)]
pub struct DecisionLogEntry {
    /// Unique entry ID
    pub id: String,
    /// Position in insertion order, starting at 1 and never reused
    pub sequence: u64,
    /// Context that was evaluated
    pub context: DecisionContext,
    /// Classification of the context
    pub evaluation: EthicalEvaluation,
    /// Action the pathway chose
    pub action: ActionResult,
    /// Post-hoc outcome, filled in by a reviewer
    pub outcome: Option<DecisionOutcome>,
    /// When the entry was appended
    pub logged_at: DateTime<Utc>,
}

impl DecisionLogEntry {
    /// Tier of the logged evaluation.
    pub fn tier(&self) -> EthicalTier {
        self.evaluation.tier
    }
}

/// Ordered, append-only log of decisions.
///
/// Mutation takes `&mut self`; hosts sharing a ledger across threads wrap it
/// in their own lock so analysis sees a consistent snapshot.
#[derive(Debug, Default)]
pub struct DecisionLedger {
    entries: VecDeque<DecisionLogEntry>,
    config: LedgerConfig,
    next_sequence: u64,
}

impl DecisionLedger {
    /// Create an unbounded ledger with default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom thresholds and retention. Fails if the config is invalid.
    pub fn with_config(config: LedgerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            entries: VecDeque::new(),
            config,
            next_sequence: 0,
        })
    }

    /// Append a decision. Returns the new entry's ID.
    pub fn append(
        &mut self,
        context: DecisionContext,
        evaluation: EthicalEvaluation,
        action: ActionResult,
    ) -> String {
        self.next_sequence += 1;
        let entry = DecisionLogEntry {
            id: uuid::Uuid::new_v4().to_string(),
            sequence: self.next_sequence,
            context,
            evaluation,
            action,
            outcome: None,
            logged_at: Utc::now(),
        };
        let id = entry.id.clone();

        info!(
            entry_id = %id,
            sequence = entry.sequence,
            tier = %entry.evaluation.tier,
            action = %entry.action.action_id,
            "Logged decision"
        );

        self.entries.push_back(entry);

        if let Some(max) = self.config.max_entries {
            while self.entries.len() > max {
                if let Some(evicted) = self.entries.pop_front() {
                    warn!(
                        entry_id = %evicted.id,
                        sequence = evicted.sequence,
                        max_entries = max,
                        "Evicted oldest ledger entry"
                    );
                }
            }
        }

        id
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the ledger is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Retained entries, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &DecisionLogEntry> {
        self.entries.iter()
    }

    /// Look up an entry by ID.
    pub fn get(&self, entry_id: &str) -> Option<&DecisionLogEntry> {
        self.entries.iter().find(|e| e.id == entry_id)
    }

    /// Count of entries per tier over the retained log.
    pub fn tier_distribution(&self) -> BTreeMap<EthicalTier, usize> {
        let mut distribution = BTreeMap::new();
        for entry in &self.entries {
            *distribution.entry(entry.tier()).or_insert(0) += 1;
        }
        distribution
    }

    /// Tier distribution, or the insufficient-data marker on a short log.
    pub fn analyze_patterns(&self) -> PatternAnalysis {
        let required = self.config.min_entries_for_analysis;
        if self.entries.len() < required {
            return PatternAnalysis::InsufficientData {
                entries: self.entries.len(),
                required,
            };
        }

        PatternAnalysis::Distribution {
            total_decisions: self.entries.len(),
            tier_distribution: self.tier_distribution(),
            analyzed_at: Utc::now(),
        }
    }

    /// Advisory text only; nothing here changes a threshold.
    pub fn recommend_adjustments(&self) -> Vec<String> {
        let total = match self.analyze_patterns() {
            PatternAnalysis::Distribution {
                total_decisions, ..
            } if total_decisions >= self.config.min_entries_for_recommendations => {
                total_decisions
            }
            _ => return vec![CONTINUE_MONITORING.to_string()],
        };

        let distribution = self.tier_distribution();
        let count = |tier: EthicalTier| distribution.get(&tier).copied().unwrap_or(0);
        let mut recommendations = Vec::new();

        if count(EthicalTier::Ambiguous) as f64 > total as f64 * self.config.ambiguous_share_limit {
            recommendations.push(AMBIGUOUS_RATE_HIGH.to_string());
        }
        if count(EthicalTier::Prohibited) > 0 {
            recommendations.push(PROHIBITED_SEEN.to_string());
        }

        recommendations
    }

    /// Fill in the outcome of a logged decision.
    pub fn record_outcome(&mut self, entry_id: &str, outcome: DecisionOutcome) -> Result<()> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id == entry_id)
            .ok_or_else(|| OefError::EntryNotFound(entry_id.to_string()))?;

        debug!(
            entry_id = %entry_id,
            successful = outcome.successful,
            replaced = entry.outcome.is_some(),
            "Recorded decision outcome"
        );

        entry.outcome = Some(outcome);
        Ok(())
    }

    /// Outcome statistics.
    pub fn stats(&self) -> LedgerStats {
        let with_outcome = self.entries.iter().filter(|e| e.outcome.is_some()).count();
        let successful = self
            .entries
            .iter()
            .filter(|e| e.outcome.as_ref().map(|o| o.successful).unwrap_or(false))
            .count();

        LedgerStats {
            total_entries: self.entries.len(),
            with_outcome,
            successful,
            success_rate: if with_outcome > 0 {
                successful as f64 / with_outcome as f64
            } else {
                0.0
            },
        }
    }
}
