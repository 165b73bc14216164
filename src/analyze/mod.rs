//! The deterministic analysis pipeline.
//!
//! Stages run strictly in order: annotate the extracted identifiers, then
//! evaluate the drug's risk rule and check interactions, then score, then
//! compose the recommendation, then assemble the result. No stage depends
//! on output produced later in the pipeline.

pub mod annotate;
pub mod assemble;
pub mod interaction;
pub mod recommend;
pub mod risk;
pub mod score;

pub use annotate::annotate_variants;
pub use assemble::{
    AnalysisFlags, AnalysisResult, Analyzer, DetectedVariant, PharmacogenomicProfile, PATIENT_ID,
};
pub use interaction::{detect_interactions, InteractionResult};
pub use recommend::{compose_recommendation, Recommendation};
pub use risk::{evaluate_risk, RISK_UNKNOWN};
pub use score::{score_risk, RiskAssessment, Severity};
