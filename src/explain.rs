//! Free-text explanation generation.
//!
//! The deterministic rule pipeline is decoupled from any non-deterministic
//! text generation behind a single capability trait. Implementations are
//! infallible by contract: any internal failure (missing credentials,
//! network error) must be absorbed into a placeholder string, never
//! surfaced to the caller.

/// Placeholder returned when no explanation backend is configured
pub const EXPLANATION_UNAVAILABLE: &str = "AI explanation not available (API key missing).";

/// Capability interface for generating a free-text explanation of a
/// pharmacogenomic finding.
pub trait ExplanationProvider {
    /// Generate an explanation for the given drug/gene/phenotype triple.
    ///
    /// Never fails; implementations return a placeholder on any error.
    fn generate_explanation(&self, drug: &str, gene: &str, phenotype: &str) -> String;
}

/// Stub provider that always reports the explanation as unavailable.
///
/// The default for deterministic testing and for deployments without a
/// text-generation backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopExplanation;

impl ExplanationProvider for NoopExplanation {
    fn generate_explanation(&self, _drug: &str, _gene: &str, _phenotype: &str) -> String {
        EXPLANATION_UNAVAILABLE.to_string()
    }
}

/// Deterministic provider that fills a fixed template from its inputs
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateExplanation;

impl ExplanationProvider for TemplateExplanation {
    fn generate_explanation(&self, drug: &str, gene: &str, phenotype: &str) -> String {
        format!(
            "Patient pharmacogenomic profile: drug {}, gene {}, phenotype {}. \
             Review drug metabolism impact, clinical risk, and treatment alternatives \
             with a clinical pharmacist.",
            drug, gene, phenotype
        )
    }
}

impl<T: ExplanationProvider + ?Sized> ExplanationProvider for &T {
    fn generate_explanation(&self, drug: &str, gene: &str, phenotype: &str) -> String {
        (**self).generate_explanation(drug, gene, phenotype)
    }
}
