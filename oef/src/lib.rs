//! Objective Ethics Framework (OEF) - rule-based ethical decision evaluation
//!
//! Classifies a proposed decision into one of five ordered risk tiers, derives
//! a justified action from the tier, and logs the result for longitudinal
//! pattern analysis. All scoring is deterministic given the input context.
//!
//! - **Heuristics**: pressure scores across harm, epistemic, risk,
//!   meta-epistemic and accountability domains
//! - **Tier classification**: ordered threshold rules plus boolean pattern checks
//! - **Action pathway**: generate, filter, score and select candidate actions
//! - **Decision ledger**: append-only log with tier distribution and drift advice
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                 ObjectiveEthicsFramework                     │
//! │                                                              │
//! │  ContextData ──▶ DecisionContext (validated)                 │
//! │                        │                                     │
//! │  ┌────────────┐  ┌─────▼──────┐  ┌─────────┐  ┌─────────┐    │
//! │  │ Heuristics │  │ Classifier │──│ Pathway │──│ Ledger  │    │
//! │  └────────────┘  └────────────┘  └─────────┘  └────┬────┘    │
//! │                                                    │         │
//! │                                   RoutingDirective ◀┘         │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use oef::{ContextData, ObjectiveEthicsFramework};
//! use ethics::EthicalTier;
//!
//! let mut framework = ObjectiveEthicsFramework::new();
//! let report = framework
//!     .process_decision(
//!         "Release an irreversible data deletion",
//!         ContextData::default().with_harm(9).with_reversibility(0.05),
//!     )
//!     .unwrap();
//!
//! assert_eq!(report.evaluation.tier, EthicalTier::Prohibited);
//! assert!(report.requires_human_review());
//! ```

pub mod config;
pub mod context;
pub mod framework;
pub mod heuristics;
pub mod ledger;
pub mod pipeline;
pub mod report;
pub mod signals;
pub mod types;

// Re-export main types
pub use config::OefConfig;
pub use context::{ContextData, DecisionContext};
pub use framework::ObjectiveEthicsFramework;
pub use heuristics::{HeuristicSet, PressureAssessment, PressureRecommendation};
pub use ledger::{DecisionLedger, DecisionLogEntry, LedgerStats, PatternAnalysis};
pub use report::{ConfidenceBand, DecisionReport, StakeholderAnalysis, SystemStatus};
pub use signals::DomainSignals;
pub use types::*;
