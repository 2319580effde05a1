//! Core vocabulary types for ethical evaluation.
//!
//! With the `typescript` feature enabled, these types can be exported to TypeScript
//! using ts-rs so that reporting front-ends share the same names.

use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// Ethical risk tier.
///
/// Tiers are totally ordered; a higher tier implies stricter handling.
/// Exactly one tier is assigned per decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum EthicalTier {
    /// Low stakes, minimal ambiguity
    Routine = 1,
    /// Moderate stakes, clear trade-offs
    Standard = 2,
    /// Irreversible impact, complex trade-offs
    HighStakes = 3,
    /// Novel or uncertain, systemic consequences
    Ambiguous = 4,
    /// Violates core boundaries
    Prohibited = 5,
}

impl EthicalTier {
    /// Numeric level (1 = Routine, 5 = Prohibited).
    pub fn level(&self) -> u8 {
        *self as u8
    }

    /// Look up a tier by its numeric level.
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Self::Routine),
            2 => Some(Self::Standard),
            3 => Some(Self::HighStakes),
            4 => Some(Self::Ambiguous),
            5 => Some(Self::Prohibited),
            _ => None,
        }
    }

    /// Canonical tier name used in justifications and reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Routine => "TIER_1_ROUTINE",
            Self::Standard => "TIER_2_STANDARD",
            Self::HighStakes => "TIER_3_HIGH_STAKES",
            Self::Ambiguous => "TIER_4_AMBIGUOUS",
            Self::Prohibited => "TIER_5_PROHIBITED",
        }
    }

    /// Whether decisions at this tier go through candidate generation.
    pub fn requires_deliberation(&self) -> bool {
        matches!(self, Self::Standard | Self::HighStakes | Self::Ambiguous)
    }

    /// All tiers from least to most strict.
    pub fn all_ascending() -> [Self; 5] {
        [
            Self::Routine,
            Self::Standard,
            Self::HighStakes,
            Self::Ambiguous,
            Self::Prohibited,
        ]
    }
}

impl fmt::Display for EthicalTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Core ethical tenets a decision can engage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum EthicalTenet {
    /// Do no harm
    NonMaleficence,
    /// Promote well-being
    Beneficence,
    /// Ensure fairness and equity
    Justice,
    /// Acknowledge uncertainty
    IntellectualHonesty,
}

impl EthicalTenet {
    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NonMaleficence => "non_maleficence",
            Self::Beneficence => "beneficence",
            Self::Justice => "justice",
            Self::IntellectualHonesty => "intellectual_honesty",
        }
    }
}

impl fmt::Display for EthicalTenet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ethical-concern domain a heuristic scores within.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "kebab-case")]
pub enum ConcernDomain {
    /// Physical or material harm
    Harm,
    /// Quality of available knowledge
    Epistemic,
    /// Misalignment with affected parties
    Risk,
    /// Reliability of the reasoning process itself
    MetaEpistemic,
    /// Obligation to explain and disclose
    Accountability,
}

impl ConcernDomain {
    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Harm => "harm",
            Self::Epistemic => "epistemic",
            Self::Risk => "risk",
            Self::MetaEpistemic => "meta-epistemic",
            Self::Accountability => "accountability",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_ordering() {
        assert!(EthicalTier::Routine < EthicalTier::Standard);
        assert!(EthicalTier::Standard < EthicalTier::HighStakes);
        assert!(EthicalTier::HighStakes < EthicalTier::Ambiguous);
        assert!(EthicalTier::Ambiguous < EthicalTier::Prohibited);
        assert_eq!(EthicalTier::Prohibited.level(), 5);
    }

    #[test]
    fn test_tier_levels_roundtrip() {
        for tier in EthicalTier::all_ascending() {
            assert_eq!(EthicalTier::from_level(tier.level()), Some(tier));
        }
        assert_eq!(EthicalTier::from_level(0), None);
        assert_eq!(EthicalTier::from_level(6), None);
    }

    #[test]
    fn test_deliberation_tiers() {
        assert!(!EthicalTier::Routine.requires_deliberation());
        assert!(EthicalTier::Standard.requires_deliberation());
        assert!(EthicalTier::Ambiguous.requires_deliberation());
        assert!(!EthicalTier::Prohibited.requires_deliberation());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&EthicalTenet::IntellectualHonesty).unwrap();
        assert_eq!(json, "\"intellectual_honesty\"");

        let json = serde_json::to_string(&ConcernDomain::MetaEpistemic).unwrap();
        assert_eq!(json, "\"meta-epistemic\"");

        let tier: EthicalTier = serde_json::from_str("\"high_stakes\"").unwrap();
        assert_eq!(tier, EthicalTier::HighStakes);
    }
}
