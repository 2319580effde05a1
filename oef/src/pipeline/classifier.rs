//! Tier classifier - assigns one ethical tier per decision context.

use chrono::Utc;
use tracing::{debug, info, warn};

use ethics::{
    EthicalTenet, EthicalTier, JustificationThresholds, TenetThresholds, TierThresholds,
    TriggerThresholds,
};

use crate::config::ClassifierConfig;
use crate::context::DecisionContext;
use crate::types::{EthicalEvaluation, EvaluationMetadata, PatternCheck};

/// Stateless classifier over fixed threshold tables.
#[derive(Debug, Clone, Default)]
pub struct TierClassifier {
    tiers: TierThresholds,
    triggers: TriggerThresholds,
    justification: JustificationThresholds,
    tenets: TenetThresholds,
}

impl TierClassifier {
    /// Create a classifier with default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from every classifier table.
    pub fn from_config(config: &ClassifierConfig) -> Self {
        Self {
            tiers: config.tiers.clone(),
            triggers: config.triggers.clone(),
            justification: config.justification.clone(),
            tenets: config.tenets.clone(),
        }
    }

    /// Tier thresholds in use.
    pub fn tier_thresholds(&self) -> &TierThresholds {
        &self.tiers
    }

    /// Classify a context.
    pub fn evaluate(&self, context: &DecisionContext) -> EthicalEvaluation {
        info!(
            request = %context.request_preview(),
            "Evaluating decision"
        );

        let triggered = self.detect_patterns(context);
        if !triggered.is_empty() {
            debug!(
                triggered = ?triggered,
                "Heuristic patterns triggered"
            );
        }

        let tier = self.assign_tier(context, &triggered);
        let justification = self.justify(context, tier, &triggered);
        let tenets = self.identify_tenets(context, &triggered);

        if tier == EthicalTier::Prohibited {
            warn!(
                harm = context.potential_harm_level(),
                reversibility = context.reversibility_score(),
                "Decision classified as prohibited"
            );
        }

        EthicalEvaluation {
            tier,
            justification,
            confidence: context.system_confidence(),
            triggered_heuristics: triggered,
            tenets,
            metadata: EvaluationMetadata {
                evaluated_at: Utc::now(),
                context_fingerprint: context.fingerprint(),
                urgency: context.urgency_level(),
            },
        }
    }

    /// Run the boolean pattern checks, in their fixed order.
    pub fn detect_patterns(&self, context: &DecisionContext) -> Vec<PatternCheck> {
        PatternCheck::ALL
            .into_iter()
            .filter(|check| self.check(*check, context))
            .collect()
    }

    fn check(&self, check: PatternCheck, context: &DecisionContext) -> bool {
        let t = &self.triggers;
        match check {
            PatternCheck::HarmReduction => {
                context.potential_harm_level() > t.harm_reduction_harm_above
            }
            PatternCheck::ReversibilityTest => {
                context.reversibility_score() < t.reversibility_test_below
            }
            PatternCheck::Proportionality => {
                context.potential_harm_level() > t.proportionality_harm_above
                    && context.urgency_level() < t.proportionality_urgency_below
            }
            PatternCheck::ConsensusNeeded => {
                context.stakeholder_count() > t.consensus_stakeholders_above
            }
        }
    }

    /// Ordered decision list; the first matching rule wins.
    pub fn assign_tier(&self, context: &DecisionContext, triggered: &[PatternCheck]) -> EthicalTier {
        let t = &self.tiers;
        let harm = context.potential_harm_level();
        let reversibility = context.reversibility_score();

        if harm >= t.prohibited_harm_at_least && reversibility < t.prohibited_reversibility_below {
            return EthicalTier::Prohibited;
        }

        if context.system_confidence() < t.ambiguous_confidence_below
            || context.stakeholder_count() > t.ambiguous_stakeholders_above
        {
            return EthicalTier::Ambiguous;
        }

        if harm >= t.high_stakes_harm_at_least || reversibility < t.high_stakes_reversibility_below {
            return EthicalTier::HighStakes;
        }

        if harm >= t.standard_harm_at_least || !triggered.is_empty() {
            return EthicalTier::Standard;
        }

        EthicalTier::Routine
    }

    /// List crossed thresholds in the order harm, reversibility, confidence,
    /// stakeholder count, triggered heuristics.
    pub fn justify(
        &self,
        context: &DecisionContext,
        tier: EthicalTier,
        triggered: &[PatternCheck],
    ) -> String {
        let j = &self.justification;
        let mut reasons = Vec::new();

        if context.potential_harm_level() > j.harm_above {
            reasons.push(format!(
                "high harm potential ({}/10)",
                context.potential_harm_level()
            ));
        }
        if context.reversibility_score() < j.reversibility_below {
            reasons.push(format!(
                "low reversibility ({:.2})",
                context.reversibility_score()
            ));
        }
        if context.system_confidence() < j.confidence_below {
            reasons.push(format!(
                "low confidence ({:.2})",
                context.system_confidence()
            ));
        }
        if context.stakeholder_count() > j.stakeholders_above {
            reasons.push(format!("many stakeholders ({})", context.stakeholder_count()));
        }
        if !triggered.is_empty() {
            let names: Vec<&str> = triggered.iter().map(|c| c.as_str()).collect();
            reasons.push(format!("triggered heuristics: {}", names.join(", ")));
        }

        if reasons.is_empty() {
            format!("Assigned {} based on: no risk thresholds crossed", tier)
        } else {
            format!("Assigned {} based on: {}", tier, reasons.join("; "))
        }
    }

    /// Tenets engaged by the decision. Never empty.
    pub fn identify_tenets(
        &self,
        context: &DecisionContext,
        triggered: &[PatternCheck],
    ) -> Vec<EthicalTenet> {
        let mut tenets = Vec::new();

        if context.potential_harm_level() > 0 {
            tenets.push(EthicalTenet::NonMaleficence);
        }
        if triggered.contains(&PatternCheck::ConsensusNeeded) {
            tenets.push(EthicalTenet::Justice);
        }
        if context.system_confidence() < self.tenets.honesty_confidence_below {
            tenets.push(EthicalTenet::IntellectualHonesty);
        }
        if tenets.is_empty() || context.potential_harm_level() < self.tenets.beneficence_harm_below {
            tenets.push(EthicalTenet::Beneficence);
        }

        tenets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ContextData;

    fn context(harm: i64, reversibility: f64, confidence: f64, stakeholders: usize) -> DecisionContext {
        ContextData::default()
            .with_harm(harm)
            .with_reversibility(reversibility)
            .with_confidence(confidence)
            .with_stakeholders((0..stakeholders).map(|i| format!("s{}", i)))
            .into_context("test decision")
            .unwrap()
    }

    #[test]
    fn test_routine() {
        let classifier = TierClassifier::new();
        let ctx = context(1, 0.9, 0.95, 2);
        let evaluation = classifier.evaluate(&ctx);

        assert_eq!(evaluation.tier, EthicalTier::Routine);
        assert!(evaluation.triggered_heuristics.is_empty());
        assert_eq!(
            evaluation.tenets,
            vec![EthicalTenet::NonMaleficence, EthicalTenet::Beneficence]
        );
    }

    #[test]
    fn test_prohibited_beats_high_stakes() {
        let classifier = TierClassifier::new();
        let ctx = context(9, 0.05, 0.9, 1);
        assert_eq!(classifier.evaluate(&ctx).tier, EthicalTier::Prohibited);
    }

    #[test]
    fn test_prohibited_beats_ambiguous() {
        let classifier = TierClassifier::new();
        let ctx = context(10, 0.0, 0.1, 20);
        assert_eq!(classifier.evaluate(&ctx).tier, EthicalTier::Prohibited);
    }

    #[test]
    fn test_ambiguous_beats_high_stakes() {
        let classifier = TierClassifier::new();
        assert_eq!(classifier.evaluate(&context(8, 0.2, 0.3, 1)).tier, EthicalTier::Ambiguous);
        assert_eq!(classifier.evaluate(&context(2, 0.9, 0.9, 11)).tier, EthicalTier::Ambiguous);
        assert_eq!(classifier.evaluate(&context(2, 0.9, 0.9, 10)).tier, EthicalTier::Standard);
    }

    #[test]
    fn test_high_stakes_by_reversibility() {
        let classifier = TierClassifier::new();
        assert_eq!(classifier.evaluate(&context(2, 0.49, 0.9, 1)).tier, EthicalTier::HighStakes);
        assert_eq!(classifier.evaluate(&context(6, 0.9, 0.9, 1)).tier, EthicalTier::HighStakes);
    }

    #[test]
    fn test_standard_by_trigger_only() {
        // harm below 3, but reversibility 0.6 trips reversibility_test
        let classifier = TierClassifier::new();
        let evaluation = classifier.evaluate(&context(2, 0.6, 0.9, 1));
        assert_eq!(evaluation.tier, EthicalTier::Standard);
        assert_eq!(evaluation.triggered_heuristics, vec![PatternCheck::ReversibilityTest]);
    }

    #[test]
    fn test_pattern_checks() {
        let classifier = TierClassifier::new();
        let ctx = ContextData::default()
            .with_harm(7)
            .with_urgency(2)
            .with_reversibility(0.3)
            .with_stakeholders(["a", "b", "c", "d"])
            .into_context("test")
            .unwrap();

        assert_eq!(classifier.detect_patterns(&ctx), PatternCheck::ALL.to_vec());
    }

    #[test]
    fn test_justification_order() {
        let classifier = TierClassifier::new();
        let ctx = context(7, 0.3, 0.45, 6);
        let evaluation = classifier.evaluate(&ctx);

        assert_eq!(
            evaluation.justification,
            "Assigned TIER_3_HIGH_STAKES based on: high harm potential (7/10); \
             low reversibility (0.30); low confidence (0.45); many stakeholders (6); \
             triggered heuristics: harm_reduction, reversibility_test, consensus_needed"
        );
    }

    #[test]
    fn test_justification_follows_configured_limits() {
        let config = ClassifierConfig {
            tiers: TierThresholds {
                high_stakes_harm_at_least: 8,
                ..Default::default()
            },
            justification: JustificationThresholds {
                harm_above: 7,
                ..Default::default()
            },
            ..Default::default()
        };
        let classifier = TierClassifier::from_config(&config);
        let evaluation = classifier.evaluate(&context(7, 0.9, 0.9, 1));

        assert_eq!(evaluation.tier, EthicalTier::Standard);
        assert!(!evaluation.justification.contains("high harm potential"));

        let evaluation = classifier.evaluate(&context(8, 0.9, 0.9, 1));
        assert_eq!(evaluation.tier, EthicalTier::HighStakes);
        assert!(evaluation.justification.contains("high harm potential (8/10)"));
    }

    #[test]
    fn test_configured_tenet_limits() {
        let config = ClassifierConfig {
            tenets: TenetThresholds {
                honesty_confidence_below: 0.95,
                beneficence_harm_below: 5,
            },
            ..Default::default()
        };
        let evaluation = TierClassifier::from_config(&config).evaluate(&context(4, 0.9, 0.9, 1));
        assert_eq!(
            evaluation.tenets,
            vec![
                EthicalTenet::NonMaleficence,
                EthicalTenet::IntellectualHonesty,
                EthicalTenet::Beneficence,
            ]
        );
    }

    #[test]
    fn test_tenets() {
        let classifier = TierClassifier::new();
        let evaluation = classifier.evaluate(&context(7, 0.3, 0.6, 4));
        assert_eq!(
            evaluation.tenets,
            vec![
                EthicalTenet::NonMaleficence,
                EthicalTenet::Justice,
                EthicalTenet::IntellectualHonesty,
            ]
        );
    }

    #[test]
    fn test_metadata() {
        let classifier = TierClassifier::new();
        let ctx = context(4, 0.8, 0.8, 1);
        let evaluation = classifier.evaluate(&ctx);

        assert_eq!(evaluation.confidence, 0.8);
        assert_eq!(evaluation.metadata.urgency, 5);
        assert_eq!(evaluation.metadata.context_fingerprint, ctx.fingerprint());
    }
}
