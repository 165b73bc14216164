//! End-to-end pipeline tests over the testable properties of the analysis
//! core: flag derivation, rule evaluation, last-match-wins resolution,
//! profile/risk divergence, and idempotence.

use pgx_analyzer::{Analyzer, ExplanationProvider, KnowledgeBase, NoopExplanation};
use rstest::rstest;

fn analyzer() -> Analyzer<NoopExplanation> {
    Analyzer::new(KnowledgeBase::builtin(), NoopExplanation)
}

fn ids(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[rstest]
#[case(&[], false)]
#[case(&["rs3892097"], true)]
#[case(&["rs_not_in_table"], true)]
fn vcf_parsing_success_iff_ids_nonempty(#[case] input: &[&str], #[case] expected: bool) {
    let result = analyzer().analyze_ids(ids(input), "CODEINE", &[]).unwrap();
    assert_eq!(result.analysis_flags.vcf_parsing_success, expected);
}

#[rstest]
#[case("ASPIRIN")]
#[case("WARFARIN")]
#[case("IBUPROFEN")]
fn unsupported_drug_is_unknown_regardless_of_variants(#[case] drug: &str) {
    let result = analyzer()
        .analyze_ids(ids(&["rs3892097", "rs4149056"]), drug, &[])
        .unwrap();
    assert_eq!(result.risk_assessment.risk_label, "Unknown");
    assert!(result.analysis_flags.unsupported_drug);
    assert!(result.analysis_flags.partial_analysis);
}

#[test]
fn codeine_poor_metabolizer_is_ineffective() {
    let result = analyzer().analyze_ids(ids(&["rs3892097"]), "CODEINE", &[]).unwrap();

    assert_eq!(result.risk_assessment.risk_label, "Ineffective");
    assert_eq!(result.risk_assessment.confidence_score, 0.92);
    assert_eq!(result.risk_assessment.severity.as_str(), "high");
    assert!(result.clinical_recommendation.contains("Morphine"));
}

#[test]
fn simvastatin_with_cyclosporine_flags_interaction() {
    let result = analyzer()
        .analyze_ids(ids(&["rs4149056"]), "SIMVASTATIN", &ids(&["CYCLOSPORINE"]))
        .unwrap();

    assert_eq!(result.risk_assessment.risk_label, "Toxicity Risk");
    assert_eq!(result.risk_assessment.confidence_score, 0.89);
    assert!(result.drug_interactions.interactions_detected);
    assert_eq!(result.drug_interactions.interacting_medications, vec!["CYCLOSPORINE"]);
}

#[test]
fn risk_label_and_profile_may_diverge() {
    // rs3892097 annotates first, so it supplies the profile; the
    // SIMVASTATIN risk label comes from rs4149056 further down the list.
    let result = analyzer()
        .analyze_ids(ids(&["rs3892097", "rs4149056"]), "SIMVASTATIN", &[])
        .unwrap();

    assert_eq!(result.risk_assessment.risk_label, "Toxicity Risk");
    assert_eq!(result.pharmacogenomic_profile.primary_gene, "CYP2D6");
    assert_eq!(result.pharmacogenomic_profile.phenotype, "Poor Metabolizer");
}

#[test]
fn idempotent_modulo_timestamp() {
    let a = analyzer()
        .analyze_ids(ids(&["rs3892097"]), "CODEINE", &ids(&["FLUOXETINE"]))
        .unwrap();
    let mut b = analyzer()
        .analyze_ids(ids(&["rs3892097"]), "CODEINE", &ids(&["FLUOXETINE"]))
        .unwrap();

    b.timestamp = a.timestamp.clone();
    assert_eq!(a, b);
}

#[test]
fn annotated_subsequence_preserves_relative_order() {
    // Every detected identifier that is in the lookup table appears
    // exactly once, in the same relative order, in the annotated list.
    let kb = KnowledgeBase::builtin();
    let input = ids(&["rs4149056", "rs_unknown", "rs3892097", "rs4149056"]);
    let annotations = pgx_analyzer::analyze::annotate_variants(&kb, &input);

    let annotated: Vec<&str> = annotations.iter().map(|a| a.rsid.as_str()).collect();
    assert_eq!(annotated, vec!["rs4149056", "rs3892097", "rs4149056"]);
}

#[test]
fn alternate_tables_can_be_injected() {
    let mut kb = KnowledgeBase::new();
    kb.add_variant("rs4244285", "CYP2C19", "Poor Metabolizer");
    kb.add_drug_rule(
        "CLOPIDOGREL",
        pgx_analyzer::DrugRule::single("CYP2C19", "Poor Metabolizer", "Ineffective"),
    );
    kb.add_inhibitors("CYP2C19", &["OMEPRAZOLE"]);

    let analyzer = Analyzer::new(kb, NoopExplanation);
    let result = analyzer
        .analyze_ids(ids(&["rs4244285"]), "clopidogrel", &ids(&["omeprazole"]))
        .unwrap();

    assert_eq!(result.risk_assessment.risk_label, "Ineffective");
    assert!(result.drug_interactions.interactions_detected);
}

#[test]
fn explanation_provider_receives_primary_annotation() {
    struct Recorder;

    impl ExplanationProvider for Recorder {
        fn generate_explanation(&self, drug: &str, gene: &str, phenotype: &str) -> String {
            format!("{}|{}|{}", drug, gene, phenotype)
        }
    }

    let analyzer = Analyzer::new(KnowledgeBase::builtin(), Recorder);
    let result = analyzer
        .analyze_ids(ids(&["rs3892097", "rs4149056"]), "SIMVASTATIN", &[])
        .unwrap();

    // The collaborator sees the profile's primary annotation, not the
    // variant that determined the risk label.
    assert_eq!(
        result.llm_generated_explanation.as_deref(),
        Some("SIMVASTATIN|CYP2D6|Poor Metabolizer")
    );
}
