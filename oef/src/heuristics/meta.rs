//! Meta-epistemic heuristic: pressure from past reproducibility.

use ethics::ConcernDomain;

use crate::heuristics::Heuristic;
use crate::signals::DomainSignals;

/// Meta-epistemic pressure from how well comparable scenarios have gone.
///
/// Branches are checked in order and the first match wins; high urgency
/// overrides the volume and success signals.
pub struct ReproducibilityPressureHeuristic;

impl Heuristic for ReproducibilityPressureHeuristic {
    fn name(&self) -> &'static str {
        "reproducibility_pressure"
    }

    fn domain(&self) -> ConcernDomain {
        ConcernDomain::MetaEpistemic
    }

    fn evaluate(&self, signals: &DomainSignals) -> f64 {
        let urgency = signals.urgency();
        let scenario_count = signals.scenario_count();
        let success_rate = signals.success_rate();

        if urgency >= 0.8 {
            0.1
        } else if scenario_count > 10 && success_rate < 0.5 {
            0.9
        } else if scenario_count > 5 && success_rate < 0.6 {
            0.6
        } else if success_rate >= 0.8 {
            0.1
        } else {
            0.4
        }
    }
}
