//! Core types for the evaluation pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use ethics::{EthicalTenet, EthicalTier, ThresholdError};

/// Boolean pattern check evaluated during tier classification.
///
/// These are distinct from the continuous heuristic scores: each one either
/// fires for a context or it does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternCheck {
    /// Harm level calls for harm-reduction review
    HarmReduction,
    /// Reversibility is low enough to test alternatives
    ReversibilityTest,
    /// High harm with low urgency
    Proportionality,
    /// Enough stakeholders that consensus is needed
    ConsensusNeeded,
}

impl PatternCheck {
    /// All checks in evaluation order.
    pub const ALL: [PatternCheck; 4] = [
        PatternCheck::HarmReduction,
        PatternCheck::ReversibilityTest,
        PatternCheck::Proportionality,
        PatternCheck::ConsensusNeeded,
    ];

    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternCheck::HarmReduction => "harm_reduction",
            PatternCheck::ReversibilityTest => "reversibility_test",
            PatternCheck::Proportionality => "proportionality",
            PatternCheck::ConsensusNeeded => "consensus_needed",
        }
    }
}

impl fmt::Display for PatternCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classifying a decision context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EthicalEvaluation {
    /// Assigned tier
    pub tier: EthicalTier,
    /// Human-readable list of crossed thresholds
    pub justification: String,
    /// Confidence echoed from the context
    pub confidence: f64,
    /// Pattern checks that fired, in evaluation order
    pub triggered_heuristics: Vec<PatternCheck>,
    /// Tenets engaged by the decision (never empty)
    pub tenets: Vec<EthicalTenet>,
    /// Evaluation metadata
    pub metadata: EvaluationMetadata,
}

/// Metadata recorded with every evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationMetadata {
    /// When the evaluation was produced
    pub evaluated_at: DateTime<Utc>,
    /// SHA-256 fingerprint of the evaluated context
    pub context_fingerprint: String,
    /// Urgency level copied from the context
    pub urgency: u8,
}

/// A hypothetical response to a decision.
///
/// Candidates live only inside one action pathway invocation; the chosen one
/// is carried on the [`ActionResult`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionCandidate {
    /// Candidate ID
    pub id: String,
    /// What the candidate does
    pub description: String,
    /// Expected harm (0-10)
    pub harm_score: u8,
    /// Expected reversibility (0.0 - 1.0)
    pub reversibility: f64,
    /// Confidence in the candidate (0.0 - 1.0)
    pub confidence: f64,
}

/// Terminal state of the action pathway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionOutcome {
    /// Routine decision, no candidates generated
    ProceedNormally,
    /// Prohibited decision, no candidates generated
    Block,
    /// A candidate survived filtering and was selected
    Selected,
    /// Every candidate failed at least one constraint
    NoAcceptableOption,
}

/// The action chosen for a decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionResult {
    /// Terminal state
    pub outcome: ActionOutcome,
    /// Action ID
    pub action_id: String,
    /// What the action does
    pub description: String,
    /// Why this action was chosen
    pub justification: String,
    /// Selected candidate, when one was selected
    pub candidate: Option<ActionCandidate>,
    /// Weighted score of the selected candidate
    pub score: Option<f64>,
    /// Number of candidates generated
    pub alternatives_considered: usize,
    /// Number of candidates surviving the hard constraints
    pub options_after_filtering: usize,
}

impl ActionResult {
    /// Whether the pathway terminated without an acceptable option.
    pub fn is_sentinel(&self) -> bool {
        self.outcome == ActionOutcome::NoAcceptableOption
    }
}

/// Post-hoc outcome assessment for a logged decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionOutcome {
    /// Did the decision turn out well?
    pub successful: bool,
    /// Reviewer feedback
    pub feedback: Option<String>,
    /// When the outcome was assessed
    pub assessed_at: DateTime<Utc>,
}

impl DecisionOutcome {
    /// Create an outcome assessed now.
    pub fn new(successful: bool) -> Self {
        Self {
            successful,
            feedback: None,
            assessed_at: Utc::now(),
        }
    }

    /// Attach reviewer feedback.
    pub fn with_feedback(mut self, feedback: impl Into<String>) -> Self {
        self.feedback = Some(feedback.into());
        self
    }
}

/// Error types for the evaluation pipeline.
#[derive(Debug, thiserror::Error)]
pub enum OefError {
    /// Context field outside its documented range
    #[error("Invalid decision context: {0}")]
    InvalidContext(String),

    /// Domain signal outside its documented range
    #[error("Invalid domain signal: {0}")]
    InvalidSignal(String),

    /// Ledger entry lookup failed
    #[error("Ledger entry not found: {0}")]
    EntryNotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Input could not be coerced into the expected shape
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<ThresholdError> for OefError {
    fn from(err: ThresholdError) -> Self {
        OefError::ConfigError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, OefError>;
