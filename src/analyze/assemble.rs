//! Analysis assembly: the pipeline entry point.
//!
//! [`Analyzer`] wires the stages together: extract identifiers, annotate,
//! evaluate the risk rule, check interactions, score, compose the
//! recommendation, and assemble the final [`AnalysisResult`]. Each call
//! operates on its own inputs against the injected read-only knowledge
//! tables, so concurrent invocations need no locking.

use std::path::Path;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::PgxError;
use crate::explain::ExplanationProvider;
use crate::knowledge::{KnowledgeBase, VariantAnnotation};
use crate::vcf::{extract_variant_ids, open_vcf, VcfRecord};

use super::annotate::annotate_variants;
use super::interaction::{detect_interactions, InteractionResult};
use super::recommend::compose_recommendation;
use super::risk::{evaluate_risk, RISK_UNKNOWN};
use super::score::{score_risk, RiskAssessment};

/// Placeholder patient identifier (no patient registry is wired in)
pub const PATIENT_ID: &str = "PATIENT_001";

/// A detected variant as reported in the profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedVariant {
    /// rsID as it appeared in the input
    pub rsid: String,
}

/// Pharmacogenomic profile section of the result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PharmacogenomicProfile {
    /// Gene of the first annotated variant, or "Unknown"
    pub primary_gene: String,
    /// Diplotype calling is out of scope; always "Unknown"
    pub diplotype: String,
    /// Phenotype of the first annotated variant, or "Unknown"
    pub phenotype: String,
    /// Every raw identifier extracted from the input, annotated or not
    pub detected_variants: Vec<DetectedVariant>,
}

/// Quality and completeness flags for one analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisFlags {
    /// True iff at least one raw identifier was extracted
    pub vcf_parsing_success: bool,
    /// True iff the drug has no entry in the rule table
    pub unsupported_drug: bool,
    /// True iff no variant annotated successfully
    pub variants_missing: bool,
    /// True iff either of the two flags above is set
    pub partial_analysis: bool,
}

impl AnalysisFlags {
    fn compute(raw_count: usize, annotated_count: usize, drug_supported: bool) -> Self {
        let unsupported_drug = !drug_supported;
        let variants_missing = annotated_count == 0;
        Self {
            vcf_parsing_success: raw_count > 0,
            unsupported_drug,
            variants_missing,
            partial_analysis: unsupported_drug || variants_missing,
        }
    }
}

/// The complete analysis output.
///
/// Field names and nesting are a stable contract: the API layer and the
/// explanation collaborator both depend on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Placeholder patient identifier
    pub patient_id: String,
    /// Drug name, normalized uppercase
    pub drug: String,
    /// Generation time, UTC RFC 3339
    pub timestamp: String,
    /// Risk label, confidence, severity
    pub risk_assessment: RiskAssessment,
    /// Primary gene/phenotype and the raw detected-variant list
    pub pharmacogenomic_profile: PharmacogenomicProfile,
    /// Gene-level interaction check against current medications
    pub drug_interactions: InteractionResult,
    /// Clinical guidance for the prescriber
    pub clinical_recommendation: String,
    /// Biological mechanism behind the finding
    pub mechanism_explanation: String,
    /// Lay-language explanation for the patient
    pub patient_explanation: String,
    /// Free text from the explanation collaborator, if one is configured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub llm_generated_explanation: Option<String>,
    /// Quality and completeness flags
    pub analysis_flags: AnalysisFlags,
}

/// The analysis pipeline, holding the injected knowledge tables and the
/// explanation capability.
#[derive(Debug, Clone)]
pub struct Analyzer<E> {
    kb: KnowledgeBase,
    explainer: E,
}

impl<E: ExplanationProvider> Analyzer<E> {
    /// Create an analyzer over the given knowledge tables
    pub fn new(kb: KnowledgeBase, explainer: E) -> Self {
        Self { kb, explainer }
    }

    /// Access the knowledge tables
    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.kb
    }

    /// Analyze a raw variant identifier sequence for a drug.
    ///
    /// Drug and medication names are case-normalized before any table
    /// lookup. Fails only on request validation (empty drug name); rule
    /// evaluation itself cannot fail.
    pub fn analyze_ids(
        &self,
        variant_ids: Vec<String>,
        drug: &str,
        current_meds: &[String],
    ) -> Result<AnalysisResult, PgxError> {
        let drug = drug.trim().to_uppercase();
        if drug.is_empty() {
            return Err(PgxError::EmptyDrug);
        }
        let current_meds: Vec<String> = current_meds.iter().map(|m| m.to_uppercase()).collect();

        let annotations = annotate_variants(&self.kb, &variant_ids);
        let risk_label = evaluate_risk(&self.kb, &drug, &annotations);
        let interactions = detect_interactions(&self.kb, &drug, &current_meds);
        let risk_assessment = score_risk(&risk_label);
        let recommendation = compose_recommendation(&drug, &risk_label);

        let drug_supported = self.kb.rule_for(&drug).is_some();
        if !drug_supported {
            tracing::warn!(drug = %drug, "no risk rule for drug; reporting Unknown");
        }
        let flags = AnalysisFlags::compute(variant_ids.len(), annotations.len(), drug_supported);

        let (primary_gene, phenotype) = primary_annotation(&annotations);
        let llm_generated_explanation =
            Some(self.explainer.generate_explanation(&drug, &primary_gene, &phenotype));

        Ok(AnalysisResult {
            patient_id: PATIENT_ID.to_string(),
            drug,
            timestamp: Utc::now().to_rfc3339(),
            risk_assessment,
            pharmacogenomic_profile: PharmacogenomicProfile {
                primary_gene,
                diplotype: RISK_UNKNOWN.to_string(),
                phenotype,
                detected_variants: variant_ids
                    .into_iter()
                    .map(|rsid| DetectedVariant { rsid })
                    .collect(),
            },
            drug_interactions: interactions,
            clinical_recommendation: recommendation.clinical,
            mechanism_explanation: recommendation.mechanism,
            patient_explanation: recommendation.patient,
            llm_generated_explanation,
            analysis_flags: flags,
        })
    }

    /// Analyze a parsed VCF record stream
    pub fn analyze_records(
        &self,
        records: &[VcfRecord],
        drug: &str,
        current_meds: &[String],
    ) -> Result<AnalysisResult, PgxError> {
        let variant_ids = extract_variant_ids(records);
        self.analyze_ids(variant_ids, drug, current_meds)
    }

    /// Analyze a VCF file from disk.
    ///
    /// A malformed file is a hard failure; the analysis never proceeds
    /// with the records read so far.
    pub fn analyze_vcf_path<P: AsRef<Path>>(
        &self,
        path: P,
        drug: &str,
        current_meds: &[String],
    ) -> Result<AnalysisResult, PgxError> {
        tracing::info!(path = %path.as_ref().display(), "reading VCF input");
        let reader = open_vcf(path)?;
        let records: Vec<VcfRecord> = reader.records().collect::<Result<_, _>>()?;
        self.analyze_records(&records, drug, current_meds)
    }
}

/// Gene and phenotype of the first annotated variant, independent of which
/// variant determined the risk label. The two may disagree; both are
/// reported as-is.
fn primary_annotation(annotations: &[VariantAnnotation]) -> (String, String) {
    match annotations.first() {
        Some(a) => (a.gene.clone(), a.phenotype.clone()),
        None => (RISK_UNKNOWN.to_string(), RISK_UNKNOWN.to_string()),
    }
}
