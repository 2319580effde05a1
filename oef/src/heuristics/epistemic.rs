//! Epistemic-domain heuristics.

use ethics::ConcernDomain;

use crate::heuristics::Heuristic;
use crate::signals::DomainSignals;

/// `1 - evidence_certainty`.
pub struct UncertaintyHeuristic;

impl Heuristic for UncertaintyHeuristic {
    fn name(&self) -> &'static str {
        "uncertainty"
    }

    fn domain(&self) -> ConcernDomain {
        ConcernDomain::Epistemic
    }

    fn evaluate(&self, signals: &DomainSignals) -> f64 {
        1.0 - signals.evidence_certainty()
    }
}

/// `1 - mean(evidence_quality, evidence_quantity)`.
pub struct EvidenceAdequacyHeuristic;

impl Heuristic for EvidenceAdequacyHeuristic {
    fn name(&self) -> &'static str {
        "evidence_adequacy"
    }

    fn domain(&self) -> ConcernDomain {
        ConcernDomain::Epistemic
    }

    fn evaluate(&self, signals: &DomainSignals) -> f64 {
        1.0 - (signals.evidence_quality() + signals.evidence_quantity()) / 2.0
    }
}
