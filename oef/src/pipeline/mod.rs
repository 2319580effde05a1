//! Stateless evaluation stages.
//!
//! 1. **Heuristics**: score domain signals into a normalized pressure
//! 2. **Classifier**: assign one ethical tier from thresholds and pattern checks
//! 3. **Pathway**: turn the tier into exactly one action
//!
//! The ledger is the only stateful stage and lives on the framework.

mod classifier;
mod pathway;

pub use classifier::TierClassifier;
pub use pathway::{ActionFilter, ActionPathway};

use crate::config::OefConfig;
use crate::heuristics::HeuristicSet;

/// The stateless part of the pipeline.
pub struct EvaluationPipeline {
    /// Heuristic scoring
    pub heuristics: HeuristicSet,
    /// Tier classification
    pub classifier: TierClassifier,
    /// Action selection
    pub pathway: ActionPathway,
}

impl EvaluationPipeline {
    /// Create a pipeline with default tables.
    pub fn new() -> Self {
        Self {
            heuristics: HeuristicSet::standard(),
            classifier: TierClassifier::new(),
            pathway: ActionPathway::new(),
        }
    }

    /// Create with custom components.
    pub fn with_components(
        heuristics: HeuristicSet,
        classifier: TierClassifier,
        pathway: ActionPathway,
    ) -> Self {
        Self {
            heuristics,
            classifier,
            pathway,
        }
    }

    /// Build every stage from one configuration.
    pub fn from_config(config: &OefConfig) -> Self {
        Self::with_components(
            HeuristicSet::with_bands(config.pressure.clone()),
            TierClassifier::from_config(&config.classifier),
            ActionPathway::with_tables(
                config.pathway.constraints.clone(),
                config.pathway.weights.clone(),
            ),
        )
    }
}

impl Default for EvaluationPipeline {
    fn default() -> Self {
        Self::new()
    }
}
