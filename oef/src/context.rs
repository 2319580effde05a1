//! Decision context intake and validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::signals::DomainSignals;
use crate::types::{OefError, Result};

/// Loosely typed request payload as received from a caller.
///
/// Missing fields take their documented defaults. Integer levels are kept
/// signed here so that out-of-range input reaches validation instead of
/// failing inside deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextData {
    /// Affected parties, in caller order
    pub stakeholders: Vec<String>,
    /// Urgency (1-10), default 5
    pub urgency_level: i64,
    /// Reversibility (0.0 - 1.0), default 0.5
    pub reversibility_score: f64,
    /// Potential harm (1-10), default 3
    pub potential_harm_level: i64,
    /// System confidence (0.0 - 1.0), default 0.7
    pub system_confidence: f64,
    /// Domain-specific signals
    pub domain_data: DomainSignals,
}

impl Default for ContextData {
    fn default() -> Self {
        Self {
            stakeholders: Vec::new(),
            urgency_level: 5,
            reversibility_score: 0.5,
            potential_harm_level: 3,
            system_confidence: 0.7,
            domain_data: DomainSignals::default(),
        }
    }
}

impl ContextData {
    /// Coerce a JSON object into context data. Unknown keys are ignored.
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Builder: set stakeholders.
    pub fn with_stakeholders<I, S>(mut self, stakeholders: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stakeholders = stakeholders.into_iter().map(Into::into).collect();
        self
    }

    /// Builder: set urgency level.
    pub fn with_urgency(mut self, urgency_level: i64) -> Self {
        self.urgency_level = urgency_level;
        self
    }

    /// Builder: set reversibility.
    pub fn with_reversibility(mut self, reversibility_score: f64) -> Self {
        self.reversibility_score = reversibility_score;
        self
    }

    /// Builder: set potential harm level.
    pub fn with_harm(mut self, potential_harm_level: i64) -> Self {
        self.potential_harm_level = potential_harm_level;
        self
    }

    /// Builder: set system confidence.
    pub fn with_confidence(mut self, system_confidence: f64) -> Self {
        self.system_confidence = system_confidence;
        self
    }

    /// Builder: set domain signals.
    pub fn with_domain_data(mut self, domain_data: DomainSignals) -> Self {
        self.domain_data = domain_data;
        self
    }

    /// Validate and freeze into a [`DecisionContext`].
    pub fn into_context(self, decision_request: impl Into<String>) -> Result<DecisionContext> {
        DecisionContext::new(decision_request, self)
    }
}

fn level(field: &str, value: i64) -> Result<u8> {
    if (1..=10).contains(&value) {
        Ok(value as u8)
    } else {
        Err(OefError::InvalidContext(format!(
            "{} must be within 1..=10, got {}",
            field, value
        )))
    }
}

fn fraction(field: &str, value: f64) -> Result<f64> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(OefError::InvalidContext(format!(
            "{} must be within [0, 1], got {}",
            field, value
        )))
    }
}

/// Immutable snapshot of a pending decision.
///
/// Only constructible through validation; out-of-range input is rejected
/// rather than clamped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionContext {
    decision_request: String,
    stakeholders: Vec<String>,
    urgency_level: u8,
    reversibility_score: f64,
    potential_harm_level: u8,
    system_confidence: f64,
    domain_data: DomainSignals,
    timestamp: DateTime<Utc>,
}

impl DecisionContext {
    /// Validate `data` and build a context stamped with the current time.
    pub fn new(decision_request: impl Into<String>, data: ContextData) -> Result<Self> {
        let decision_request = decision_request.into();
        if decision_request.trim().is_empty() {
            return Err(OefError::InvalidContext(
                "decision request must not be empty".to_string(),
            ));
        }

        let urgency_level = level("urgency_level", data.urgency_level)?;
        let potential_harm_level = level("potential_harm_level", data.potential_harm_level)?;
        let reversibility_score = fraction("reversibility_score", data.reversibility_score)?;
        let system_confidence = fraction("system_confidence", data.system_confidence)?;
        data.domain_data.validate()?;

        Ok(Self {
            decision_request,
            stakeholders: data.stakeholders,
            urgency_level,
            reversibility_score,
            potential_harm_level,
            system_confidence,
            domain_data: data.domain_data,
            timestamp: Utc::now(),
        })
    }

    /// Free-text description of the request.
    pub fn decision_request(&self) -> &str {
        &self.decision_request
    }

    /// Affected parties.
    pub fn stakeholders(&self) -> &[String] {
        &self.stakeholders
    }

    /// Number of affected parties.
    pub fn stakeholder_count(&self) -> usize {
        self.stakeholders.len()
    }

    /// Urgency (1-10).
    pub fn urgency_level(&self) -> u8 {
        self.urgency_level
    }

    /// Reversibility (0 = irreversible, 1 = fully reversible).
    pub fn reversibility_score(&self) -> f64 {
        self.reversibility_score
    }

    /// Potential harm (1-10).
    pub fn potential_harm_level(&self) -> u8 {
        self.potential_harm_level
    }

    /// System confidence (0.0 - 1.0).
    pub fn system_confidence(&self) -> f64 {
        self.system_confidence
    }

    /// Domain-specific signals.
    pub fn domain_data(&self) -> &DomainSignals {
        &self.domain_data
    }

    /// When the context was created.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// SHA-256 hex fingerprint over the canonical JSON form of the context.
    pub fn fingerprint(&self) -> String {
        let json = serde_json::to_string(self).unwrap_or_default();
        let mut hasher = Sha256::new();
        hasher.update(json.as_bytes());
        hex::encode(hasher.finalize())
    }

    /// Short preview of the request for log lines.
    pub fn request_preview(&self) -> &str {
        match self.decision_request.char_indices().nth(50) {
            Some((idx, _)) => &self.decision_request[..idx],
            None => &self.decision_request,
        }
    }
}
