//! ObjectiveEthicsFramework - the coordinating façade.
//!
//! Sequences the pipeline as classify -> act -> log -> route, one decision at a
//! time to completion.

use chrono::Utc;
use tracing::{info, warn};

use crate::config::OefConfig;
use crate::context::{ContextData, DecisionContext};
use crate::ledger::DecisionLedger;
use crate::pipeline::EvaluationPipeline;
use crate::report::{ConfidenceBand, DecisionReport, StakeholderAnalysis, SystemStatus};
use crate::types::{DecisionOutcome, Result};

/// The evaluation framework.
///
/// Every context that enters yields exactly one evaluation and one action,
/// and is logged before its report is returned.
pub struct ObjectiveEthicsFramework {
    config: OefConfig,
    pipeline: EvaluationPipeline,
    ledger: DecisionLedger,
}

impl ObjectiveEthicsFramework {
    /// Create a framework with default configuration.
    pub fn new() -> Self {
        Self::assemble(OefConfig::default(), DecisionLedger::new())
    }

    /// Create with custom configuration. Fails if any table is invalid.
    pub fn with_config(config: OefConfig) -> Result<Self> {
        config.validate()?;
        let ledger = DecisionLedger::with_config(config.ledger.clone())?;
        Ok(Self::assemble(config, ledger))
    }

    fn assemble(config: OefConfig, ledger: DecisionLedger) -> Self {
        info!(
            version = %config.framework_version,
            max_entries = ?config.ledger.max_entries,
            "Framework initialized"
        );

        Self {
            pipeline: EvaluationPipeline::from_config(&config),
            ledger,
            config,
        }
    }

    /// Configuration in use.
    pub fn config(&self) -> &OefConfig {
        &self.config
    }

    /// Read-only view of the ledger.
    pub fn ledger(&self) -> &DecisionLedger {
        &self.ledger
    }

    /// Validate a request and run it through the pipeline.
    pub fn process_decision(
        &mut self,
        decision_request: impl Into<String>,
        data: ContextData,
    ) -> Result<DecisionReport> {
        let context = data.into_context(decision_request).map_err(|err| {
            warn!(error = %err, "Rejected decision context");
            err
        })?;
        self.evaluate(context)
    }

    /// Coerce a loosely typed JSON payload and process it.
    pub fn process_json(
        &mut self,
        decision_request: impl Into<String>,
        data: serde_json::Value,
    ) -> Result<DecisionReport> {
        let data = ContextData::from_json(data)?;
        self.process_decision(decision_request, data)
    }

    /// Run an already validated context through classify -> act -> log -> route.
    pub fn evaluate(&mut self, context: DecisionContext) -> Result<DecisionReport> {
        let pressure = self.pipeline.heuristics.assess(context.domain_data())?;
        let evaluation = self.pipeline.classifier.evaluate(&context);
        let action = self.pipeline.pathway.determine_action(&context, &evaluation);

        let stakeholder_analysis = StakeholderAnalysis::from_stakeholders(context.stakeholders());
        let confidence_band = ConfidenceBand::from_confidence(evaluation.confidence);
        let routing = evaluation.tier.routing();

        let ledger_entry_id = self
            .ledger
            .append(context, evaluation.clone(), action.clone());

        info!(
            tier = %evaluation.tier,
            action = %action.action_id,
            route = routing.route.as_str(),
            human_review = routing.human_review,
            pressure = pressure.normalized_pressure,
            "Decision routed"
        );

        Ok(DecisionReport {
            decision_id: uuid::Uuid::new_v4().to_string(),
            evaluation,
            action,
            routing,
            pressure,
            stakeholder_analysis,
            confidence_band,
            ledger_entry_id,
            processed_at: Utc::now(),
            framework_version: self.config.framework_version.clone(),
        })
    }

    /// Fill in the outcome of a previously processed decision.
    pub fn record_outcome(&mut self, ledger_entry_id: &str, outcome: DecisionOutcome) -> Result<()> {
        self.ledger.record_outcome(ledger_entry_id, outcome)
    }

    /// Status derived from the ledger.
    pub fn system_status(&self) -> SystemStatus {
        SystemStatus {
            framework_status: "operational".to_string(),
            decisions_processed: self.ledger.len(),
            pattern_analysis: self.ledger.analyze_patterns(),
            recommendations: self.ledger.recommend_adjustments(),
            outcome_stats: self.ledger.stats(),
            last_updated: Utc::now(),
        }
    }
}

impl Default for ObjectiveEthicsFramework {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OefError;
    use ethics::{EthicalTier, Route};
    use std::sync::{Arc, Mutex};
    use tracing::field::{Field, Visit};
    use tracing::span::{Attributes, Id, Record};
    use tracing::{Event, Metadata, Subscriber};

    /// Collects the message of every event emitted while it is the default.
    #[derive(Clone, Default)]
    struct MessageCapture(Arc<Mutex<Vec<String>>>);

    struct MessageVisitor<'a>(&'a mut String);

    impl Visit for MessageVisitor<'_> {
        fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
            if field.name() == "message" {
                *self.0 = format!("{:?}", value);
            }
        }
    }

    impl Subscriber for MessageCapture {
        fn enabled(&self, _: &Metadata<'_>) -> bool {
            true
        }
        fn new_span(&self, _: &Attributes<'_>) -> Id {
            Id::from_u64(1)
        }
        fn record(&self, _: &Id, _: &Record<'_>) {}
        fn record_follows_from(&self, _: &Id, _: &Id) {}
        fn event(&self, event: &Event<'_>) {
            let mut message = String::new();
            event.record(&mut MessageVisitor(&mut message));
            self.0.lock().unwrap().push(message);
        }
        fn enter(&self, _: &Id) {}
        fn exit(&self, _: &Id) {}
    }

    fn messages_from(build: impl FnOnce()) -> Vec<String> {
        let capture = MessageCapture::default();
        tracing::subscriber::with_default(capture.clone(), build);
        let messages = capture.0.lock().unwrap().clone();
        messages
    }

    #[test]
    fn test_both_constructors_log_initialization() {
        let from_new = messages_from(|| {
            ObjectiveEthicsFramework::new();
        });
        let from_config = messages_from(|| {
            ObjectiveEthicsFramework::with_config(OefConfig::default()).unwrap();
        });

        assert!(from_new.iter().any(|m| m == "Framework initialized"));
        assert!(from_config.iter().any(|m| m == "Framework initialized"));
    }

    #[test]
    fn test_zero_retention_config_rejected() {
        let mut config = OefConfig::default();
        config.ledger.max_entries = Some(0);
        assert!(matches!(
            ObjectiveEthicsFramework::with_config(config),
            Err(OefError::ConfigError(_))
        ));
    }

    #[test]
    fn test_process_routine() {
        let mut framework = ObjectiveEthicsFramework::new();
        let report = framework
            .process_json(
                "Schedule a routine software update",
                serde_json::json!({
                    "stakeholders": ["users", "IT_team"],
                    "urgency_level": 3,
                    "reversibility_score": 0.9,
                    "potential_harm_level": 1,
                    "system_confidence": 0.95
                }),
            )
            .unwrap();

        assert_eq!(report.evaluation.tier, EthicalTier::Routine);
        assert_eq!(report.routing.route, Route::DirectExecution);
        assert_eq!(report.framework_version, "0.1.0");
        assert_eq!(framework.ledger().len(), 1);
        assert!(framework.ledger().get(&report.ledger_entry_id).is_some());
    }

    #[test]
    fn test_rejected_context_not_logged() {
        let mut framework = ObjectiveEthicsFramework::new();
        let result = framework.process_json(
            "Expedite shipment",
            serde_json::json!({"urgency_level": -1}),
        );

        assert!(matches!(result, Err(OefError::InvalidContext(_))));
        assert!(framework.ledger().is_empty());
    }

    #[test]
    fn test_type_coercion_failure() {
        let mut framework = ObjectiveEthicsFramework::new();
        let result = framework.process_json(
            "Approve loan",
            serde_json::json!({"stakeholders": "not a list"}),
        );
        assert!(matches!(result, Err(OefError::Serialization(_))));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = OefConfig::default();
        config.pressure.proceed_at_most = 0.9;
        assert!(ObjectiveEthicsFramework::with_config(config).is_err());
    }

    #[test]
    fn test_system_status() {
        let mut framework = ObjectiveEthicsFramework::new();
        let report = framework
            .process_decision("Approve refund", ContextData::default())
            .unwrap();
        framework
            .record_outcome(&report.ledger_entry_id, DecisionOutcome::new(true))
            .unwrap();

        let status = framework.system_status();
        assert_eq!(status.framework_status, "operational");
        assert_eq!(status.decisions_processed, 1);
        assert!(status.pattern_analysis.is_insufficient());
        assert_eq!(status.outcome_stats.successful, 1);
    }
}
