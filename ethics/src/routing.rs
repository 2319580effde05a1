//! Fixed routing table from tier to execution route.

use serde::{Deserialize, Serialize};

#[cfg(feature = "typescript")]
use ts_rs::TS;

use crate::types::EthicalTier;

/// Where a classified decision is sent next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum Route {
    /// Execute immediately
    DirectExecution,
    /// Execute through the automatic pathway
    AutomaticExecution,
    /// Execute under longitudinal monitoring
    RapMonitoring,
    /// Hold for a human reviewer
    HumanReviewRequired,
    /// Refuse and flag for follow-up
    BlockedAndFlagged,
}

impl Route {
    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DirectExecution => "direct_execution",
            Self::AutomaticExecution => "automatic_execution",
            Self::RapMonitoring => "rap_monitoring",
            Self::HumanReviewRequired => "human_review_required",
            Self::BlockedAndFlagged => "blocked_and_flagged",
        }
    }
}

/// Routing decision attached to every processed decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct RoutingDirective {
    /// Route name
    pub route: Route,
    /// Whether a human must review before execution
    pub human_review: bool,
}

impl RoutingDirective {
    /// Look up the directive for a tier.
    pub fn for_tier(tier: EthicalTier) -> Self {
        let (route, human_review) = match tier {
            EthicalTier::Routine => (Route::DirectExecution, false),
            EthicalTier::Standard => (Route::AutomaticExecution, false),
            EthicalTier::HighStakes => (Route::RapMonitoring, false),
            EthicalTier::Ambiguous => (Route::HumanReviewRequired, true),
            EthicalTier::Prohibited => (Route::BlockedAndFlagged, true),
        };
        Self { route, human_review }
    }
}

impl EthicalTier {
    /// Routing directive for this tier.
    pub fn routing(&self) -> RoutingDirective {
        RoutingDirective::for_tier(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routing_table() {
        let expected = [
            (EthicalTier::Routine, "direct_execution", false),
            (EthicalTier::Standard, "automatic_execution", false),
            (EthicalTier::HighStakes, "rap_monitoring", false),
            (EthicalTier::Ambiguous, "human_review_required", true),
            (EthicalTier::Prohibited, "blocked_and_flagged", true),
        ];

        for (tier, route, human_review) in expected {
            let directive = tier.routing();
            assert_eq!(directive.route.as_str(), route);
            assert_eq!(directive.human_review, human_review);
        }
    }

    #[test]
    fn test_route_serializes_as_name() {
        let directive = EthicalTier::Ambiguous.routing();
        let json = serde_json::to_value(directive).unwrap();
        assert_eq!(json["route"], "human_review_required");
        assert_eq!(json["human_review"], true);
    }
}
