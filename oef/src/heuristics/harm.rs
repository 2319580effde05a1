//! Harm-domain heuristics.

use ethics::ConcernDomain;

use crate::heuristics::Heuristic;
use crate::signals::DomainSignals;

/// Pressure from irreversibility: `1 - reversibility`.
pub struct ReversibilityHeuristic;

impl Heuristic for ReversibilityHeuristic {
    fn name(&self) -> &'static str {
        "reversibility"
    }

    fn domain(&self) -> ConcernDomain {
        ConcernDomain::Harm
    }

    fn evaluate(&self, signals: &DomainSignals) -> f64 {
        1.0 - signals.reversibility()
    }
}

/// Share of expected impact that is harmful: `harm / (benefit + harm)`.
///
/// When both magnitudes are zero the impact is unknown and the heuristic
/// reports maximum pressure.
pub struct ProportionalityHeuristic;

impl Heuristic for ProportionalityHeuristic {
    fn name(&self) -> &'static str {
        "proportionality"
    }

    fn domain(&self) -> ConcernDomain {
        ConcernDomain::Harm
    }

    fn evaluate(&self, signals: &DomainSignals) -> f64 {
        let benefit = signals.expected_benefit();
        let harm = signals.expected_harm();
        if benefit + harm == 0.0 {
            return 1.0;
        }
        harm / (benefit + harm)
    }
}
