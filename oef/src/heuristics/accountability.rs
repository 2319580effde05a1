//! Accountability-domain heuristic.

use ethics::ConcernDomain;

use crate::heuristics::Heuristic;
use crate::signals::DomainSignals;

/// How much disclosure a decision demands.
///
/// Starts at 0, adds 0.4 for tier level 4 or above, then adds either 0.3 for
/// a "group" scope or 0.5 for a "systemic" scope. The scope bonuses are
/// exclusive; a systemic decision never also receives the group bonus.
pub struct TransparencyReadinessHeuristic;

impl Heuristic for TransparencyReadinessHeuristic {
    fn name(&self) -> &'static str {
        "transparency_readiness"
    }

    fn domain(&self) -> ConcernDomain {
        ConcernDomain::Accountability
    }

    fn evaluate(&self, signals: &DomainSignals) -> f64 {
        let mut score = 0.0;
        if signals.ethical_tier() >= 4 {
            score += 0.4;
        }
        match signals.impact_scope() {
            "group" => score += 0.3,
            "systemic" => score += 0.5,
            _ => {}
        }
        f64::min(score, 1.0)
    }
}
