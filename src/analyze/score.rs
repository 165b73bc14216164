//! Confidence scoring and severity tiers.
//!
//! Presentation fields, not statistics: both are fixed per risk label and
//! never depend on variant count or rule source.

use serde::{Deserialize, Serialize};

/// Severity tier derived from a risk label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Actionable risk finding
    High,
    /// No significant finding
    Low,
    /// No rule matched; risk could not be determined
    Uncertain,
}

impl Severity {
    /// Lowercase string form, matching the serialized representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "high",
            Severity::Low => "low",
            Severity::Uncertain => "uncertain",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Risk assessment triple reported in the final result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Risk label from rule evaluation (e.g., "Ineffective")
    pub risk_label: String,
    /// Fixed confidence score for the label
    pub confidence_score: f64,
    /// Severity tier, serialized lowercase
    pub severity: Severity,
}

/// Derive the fixed confidence score and severity tier for a risk label.
pub fn score_risk(risk_label: &str) -> RiskAssessment {
    let (confidence_score, severity) = match risk_label {
        "Ineffective" => (0.92, Severity::High),
        "Toxicity Risk" => (0.89, Severity::High),
        "Safe" => (0.75, Severity::Low),
        "Unknown" => (0.3, Severity::Uncertain),
        _ => (0.3, Severity::Low),
    };

    RiskAssessment {
        risk_label: risk_label.to_string(),
        confidence_score,
        severity,
    }
}
