//! Action pathway - turns a tier into a concrete action.
//!
//! Routine and Prohibited decisions short-circuit to fixed actions. The
//! deliberative tiers run generate -> filter -> score -> select over a fixed
//! set of three candidates.

use tracing::{debug, info, warn};

use ethics::{ActionConstraints, EthicalTier, SelectionWeights};

use crate::context::DecisionContext;
use crate::types::{ActionCandidate, ActionOutcome, ActionResult, EthicalEvaluation};

/// Harm removed by the safeguards candidate.
const SAFEGUARD_HARM_REDUCTION: u8 = 2;
/// Reversibility added by the safeguards candidate.
const SAFEGUARD_REVERSIBILITY_GAIN: f64 = 0.2;

/// Hard constraint a candidate must pass to survive filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionFilter {
    /// Harm at or below the ceiling
    HarmThreshold,
    /// Reversibility at or above the floor
    ReversibilityMin,
    /// Confidence at or above the floor
    ConfidenceCheck,
}

impl ActionFilter {
    /// All filters; a candidate must pass every one.
    pub const ALL: [ActionFilter; 3] = [
        ActionFilter::HarmThreshold,
        ActionFilter::ReversibilityMin,
        ActionFilter::ConfidenceCheck,
    ];

    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionFilter::HarmThreshold => "harm_threshold",
            ActionFilter::ReversibilityMin => "reversibility_min",
            ActionFilter::ConfidenceCheck => "confidence_check",
        }
    }

    /// Whether the candidate passes this filter.
    pub fn passes(&self, candidate: &ActionCandidate, constraints: &ActionConstraints) -> bool {
        match self {
            ActionFilter::HarmThreshold => candidate.harm_score <= constraints.max_harm,
            ActionFilter::ReversibilityMin => {
                candidate.reversibility >= constraints.min_reversibility
            }
            ActionFilter::ConfidenceCheck => candidate.confidence >= constraints.min_confidence,
        }
    }
}

/// Candidate generation, filtering and selection.
#[derive(Debug, Clone, Default)]
pub struct ActionPathway {
    constraints: ActionConstraints,
    weights: SelectionWeights,
}

impl ActionPathway {
    /// Create a pathway with default constraints and weights.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom constraints and weights.
    pub fn with_tables(constraints: ActionConstraints, weights: SelectionWeights) -> Self {
        Self {
            constraints,
            weights,
        }
    }

    /// Hard constraints in use.
    pub fn constraints(&self) -> &ActionConstraints {
        &self.constraints
    }

    /// Produce exactly one action for an evaluated context.
    pub fn determine_action(
        &self,
        context: &DecisionContext,
        evaluation: &EthicalEvaluation,
    ) -> ActionResult {
        match evaluation.tier {
            EthicalTier::Routine => fixed(
                ActionOutcome::ProceedNormally,
                "proceed_normally",
                "Proceed normally",
                "Routine decision, no ethical concerns",
            ),
            EthicalTier::Prohibited => fixed(
                ActionOutcome::Block,
                "block_decision",
                "Block decision",
                "Decision violates ethical boundaries",
            ),
            EthicalTier::Standard | EthicalTier::HighStakes | EthicalTier::Ambiguous => {
                self.deliberate(context, evaluation.tier)
            }
        }
    }

    fn deliberate(&self, context: &DecisionContext, tier: EthicalTier) -> ActionResult {
        let candidates = self.generate_candidates(context);
        let generated = candidates.len();
        let survivors = self.filter(candidates);
        let surviving = survivors.len();

        debug!(
            tier = %tier,
            generated = generated,
            surviving = surviving,
            "Filtered action candidates"
        );

        match self.select(survivors) {
            Some((candidate, score)) => {
                info!(
                    action = %candidate.id,
                    score = score,
                    "Selected action"
                );
                ActionResult {
                    outcome: ActionOutcome::Selected,
                    action_id: candidate.id.clone(),
                    description: candidate.description.clone(),
                    justification: format!(
                        "Selected '{}' based on {} evaluation. \
                         Balances harm minimization with practical feasibility.",
                        candidate.description, tier
                    ),
                    candidate: Some(candidate),
                    score: Some(score),
                    alternatives_considered: generated,
                    options_after_filtering: surviving,
                }
            }
            None => {
                warn!(
                    tier = %tier,
                    generated = generated,
                    "No ethically acceptable option survived filtering"
                );
                ActionResult {
                    outcome: ActionOutcome::NoAcceptableOption,
                    action_id: "no_action".to_string(),
                    description: "No ethically acceptable options found".to_string(),
                    justification: format!(
                        "All {} candidates failed at least one hard constraint",
                        generated
                    ),
                    candidate: None,
                    score: None,
                    alternatives_considered: generated,
                    options_after_filtering: 0,
                }
            }
        }
    }

    /// The three candidates: unmodified proceed, proceed with safeguards, defer.
    pub fn generate_candidates(&self, context: &DecisionContext) -> Vec<ActionCandidate> {
        let harm = context.potential_harm_level();
        let reversibility = context.reversibility_score();
        let confidence = context.system_confidence();

        vec![
            ActionCandidate {
                id: "proceed".to_string(),
                description: "Proceed with original decision".to_string(),
                harm_score: harm,
                reversibility,
                confidence,
            },
            ActionCandidate {
                id: "modified_proceed".to_string(),
                description: "Proceed with safeguards".to_string(),
                harm_score: harm.saturating_sub(SAFEGUARD_HARM_REDUCTION),
                reversibility: f64::min(reversibility + SAFEGUARD_REVERSIBILITY_GAIN, 1.0),
                confidence,
            },
            ActionCandidate {
                id: "defer".to_string(),
                description: "Defer decision for more information".to_string(),
                harm_score: 1,
                reversibility: 1.0,
                confidence: 0.9,
            },
        ]
    }

    /// Keep candidates that pass every hard constraint, preserving order.
    pub fn filter(&self, candidates: Vec<ActionCandidate>) -> Vec<ActionCandidate> {
        candidates
            .into_iter()
            .filter(|candidate| {
                ActionFilter::ALL.iter().all(|f| {
                    let passed = f.passes(candidate, &self.constraints);
                    if !passed {
                        debug!(
                            candidate = %candidate.id,
                            filter = f.as_str(),
                            "Candidate rejected"
                        );
                    }
                    passed
                })
            })
            .collect()
    }

    /// Weighted score; higher is better.
    pub fn score(&self, candidate: &ActionCandidate) -> f64 {
        let w = &self.weights;
        (w.harm_ceiling - candidate.harm_score as f64) * w.harm
            + candidate.reversibility * w.reversibility
            + candidate.confidence * w.confidence
    }

    /// Highest-scoring candidate; the first seen wins ties.
    pub fn select(&self, candidates: Vec<ActionCandidate>) -> Option<(ActionCandidate, f64)> {
        let mut best: Option<(ActionCandidate, f64)> = None;
        for candidate in candidates {
            let score = self.score(&candidate);
            let better = match &best {
                Some((_, best_score)) => score > *best_score,
                None => true,
            };
            if better {
                best = Some((candidate, score));
            }
        }
        best
    }
}

fn fixed(outcome: ActionOutcome, id: &str, description: &str, justification: &str) -> ActionResult {
    ActionResult {
        outcome,
        action_id: id.to_string(),
        description: description.to_string(),
        justification: justification.to_string(),
        candidate: None,
        score: None,
        alternatives_considered: 0,
        options_after_filtering: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ContextData;
    use crate::pipeline::TierClassifier;

    fn context(harm: i64, reversibility: f64, confidence: f64) -> DecisionContext {
        ContextData::default()
            .with_harm(harm)
            .with_reversibility(reversibility)
            .with_confidence(confidence)
            .into_context("pathway test")
            .unwrap()
    }

    fn run(ctx: &DecisionContext) -> ActionResult {
        let evaluation = TierClassifier::new().evaluate(ctx);
        ActionPathway::new().determine_action(ctx, &evaluation)
    }

    #[test]
    fn test_routine_short_circuit() {
        let result = run(&context(1, 0.9, 0.95));
        assert_eq!(result.outcome, ActionOutcome::ProceedNormally);
        assert_eq!(result.action_id, "proceed_normally");
        assert_eq!(result.alternatives_considered, 0);
    }

    #[test]
    fn test_prohibited_blocks() {
        let result = run(&context(10, 0.0, 0.9));
        assert_eq!(result.outcome, ActionOutcome::Block);
        assert_eq!(result.action_id, "block_decision");
        assert!(result.candidate.is_none());
    }

    #[test]
    fn test_candidate_generation() {
        let pathway = ActionPathway::new();
        let candidates = pathway.generate_candidates(&context(1, 0.9, 0.6));

        let ids: Vec<_> = candidates.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["proceed", "modified_proceed", "defer"]);

        // harm floors at zero, reversibility caps at one
        assert_eq!(candidates[1].harm_score, 0);
        assert_eq!(candidates[1].reversibility, 1.0);
        assert_eq!(candidates[1].confidence, 0.6);
    }

    #[test]
    fn test_harm_boundary_passes() {
        let pathway = ActionPathway::new();
        let candidate = ActionCandidate {
            id: "edge".to_string(),
            description: "edge".to_string(),
            harm_score: 5,
            reversibility: 0.3,
            confidence: 0.5,
        };
        assert!(ActionFilter::ALL
            .iter()
            .all(|f| f.passes(&candidate, pathway.constraints())));
    }

    #[test]
    fn test_defer_wins_high_stakes() {
        let result = run(&context(7, 0.3, 0.6));

        assert_eq!(result.outcome, ActionOutcome::Selected);
        assert_eq!(result.action_id, "defer");
        assert_eq!(result.alternatives_considered, 3);
        assert_eq!(result.options_after_filtering, 2);
        assert!(result
            .justification
            .starts_with("Selected 'Defer decision for more information' based on TIER_3_HIGH_STAKES"));
    }

    #[test]
    fn test_score_weights() {
        let pathway = ActionPathway::new();
        let defer = &pathway.generate_candidates(&context(7, 0.3, 0.6))[2];
        // 9 * 0.4 + 1.0 * 0.3 + 0.9 * 0.3
        assert!((pathway.score(defer) - 4.17).abs() < 1e-9);
    }

    #[test]
    fn test_first_seen_wins_ties() {
        let pathway = ActionPathway::new();
        let make = |id: &str| ActionCandidate {
            id: id.to_string(),
            description: id.to_string(),
            harm_score: 2,
            reversibility: 0.8,
            confidence: 0.8,
        };
        let (selected, _) = pathway.select(vec![make("first"), make("second")]).unwrap();
        assert_eq!(selected.id, "first");
    }

    #[test]
    fn test_sentinel_when_nothing_survives() {
        let strict = ActionConstraints {
            max_harm: 0,
            ..Default::default()
        };
        let pathway = ActionPathway::with_tables(strict, SelectionWeights::default());
        let ctx = context(4, 0.8, 0.8);
        let evaluation = TierClassifier::new().evaluate(&ctx);
        let result = pathway.determine_action(&ctx, &evaluation);

        assert!(result.is_sentinel());
        assert_eq!(result.action_id, "no_action");
        assert_eq!(result.description, "No ethically acceptable options found");
        assert_eq!(result.alternatives_considered, 3);
    }
}
