//! Stakeholder vulnerability and legality pass-through.

use crate::heuristics::round_to;
use crate::signals::DomainSignals;

/// Stakeholder Vulnerability Index, rounded to 2 decimals.
///
/// `((1 - cognitive_capacity) + (1 if no legal agency else 0) + (1 - self_advocacy_ability)) / 3`
pub fn stakeholder_vulnerability_index(signals: &DomainSignals) -> f64 {
    let cognitive = 1.0 - signals.cognitive_capacity();
    let legal = if signals.legal_agency() { 0.0 } else { 1.0 };
    let advocacy = 1.0 - signals.self_advocacy_ability();
    round_to((cognitive + legal + advocacy) / 3.0, 2)
}

/// Legality classification as supplied; no enforcement happens here.
pub fn legality_classification(signals: &DomainSignals) -> &str {
    signals.legality()
}
