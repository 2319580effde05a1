//! Shared vocabulary for the Objective Ethics Framework.
//!
//! This crate holds the pieces every evaluation stage agrees on and that carry
//! no pipeline logic of their own:
//!
//! - **Tiers**: the five ordered risk tiers, Routine through Prohibited
//! - **Tenets**: non-maleficence, beneficence, justice, intellectual honesty
//! - **Routing**: the fixed tier-to-route table with its human-review flag
//! - **Thresholds**: immutable tables used by classification and action filtering
//!
//! # Example
//!
//! ```
//! use ethics::{EthicalTier, Route};
//!
//! let directive = EthicalTier::Prohibited.routing();
//! assert_eq!(directive.route, Route::BlockedAndFlagged);
//! assert!(directive.human_review);
//! ```

pub mod routing;
pub mod thresholds;
pub mod types;

// Re-export main types
pub use routing::{Route, RoutingDirective};
pub use thresholds::{
    ActionConstraints, JustificationThresholds, SelectionWeights, TenetThresholds, ThresholdError,
    TierThresholds, TriggerThresholds,
};
pub use types::*;
