//! Volitional misalignment: acting against what stakeholders want.

use ethics::ConcernDomain;

use crate::heuristics::Heuristic;
use crate::signals::DomainSignals;

/// Pressure applied when a decision cuts against stakeholder will.
///
/// Without stakeholder autonomy the pressure is fixed at 0.8; otherwise it is
/// `1 - volitional_alignment`.
pub struct VolitionalMisalignmentHeuristic;

impl VolitionalMisalignmentHeuristic {
    const NO_AUTONOMY_PRESSURE: f64 = 0.8;

    /// Autonomous stakeholders whose alignment is below 0.5 may be reachable
    /// through education rather than override.
    pub fn educable(signals: &DomainSignals) -> bool {
        signals.stakeholder_autonomy() && signals.volitional_alignment() < 0.5
    }
}

impl Heuristic for VolitionalMisalignmentHeuristic {
    fn name(&self) -> &'static str {
        "volitional_misalignment"
    }

    fn domain(&self) -> ConcernDomain {
        ConcernDomain::Risk
    }

    fn evaluate(&self, signals: &DomainSignals) -> f64 {
        if !signals.stakeholder_autonomy() {
            return Self::NO_AUTONOMY_PRESSURE;
        }
        1.0 - signals.volitional_alignment()
    }
}
