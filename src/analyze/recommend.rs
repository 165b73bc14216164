//! Clinical recommendation and explanation templates.
//!
//! Fixed texts keyed on (drug, risk label). Two variants of each text are
//! produced: a clinical mechanism explanation, and a patient-facing
//! version worded without clinical jargon.

/// Recommendation texts derived from a (drug, risk label) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    /// Clinical guidance for the prescriber
    pub clinical: String,
    /// Biological mechanism behind the finding
    pub mechanism: String,
    /// Lay-language explanation for the patient
    pub patient: String,
}

/// Compose the fixed recommendation texts for a (drug, risk label) pair.
///
/// The drug name must already be uppercased. Unmatched combinations fall
/// through to the no-guidance defaults.
pub fn compose_recommendation(drug: &str, risk_label: &str) -> Recommendation {
    match (drug, risk_label) {
        ("CODEINE", "Ineffective") => Recommendation {
            clinical: "Avoid Codeine. Consider Morphine or non-opioid alternatives.".to_string(),
            mechanism: "CYP2D6 poor metabolizers cannot convert codeine into morphine, \
                        its active form, so standard doses provide little or no pain relief."
                .to_string(),
            patient: "Your body converts this medication into its active form more slowly \
                      than usual, so it may not relieve your pain. Your doctor can choose \
                      a different pain medication that works for you."
                .to_string(),
        },
        ("SIMVASTATIN", "Toxicity Risk") => Recommendation {
            clinical: "Reduce dose or consider alternative statin.".to_string(),
            mechanism: "Impaired SLCO1B1 transporter function reduces hepatic uptake of \
                        simvastatin, raising plasma exposure and the risk of muscle toxicity \
                        (myopathy)."
                .to_string(),
            patient: "This medication may build up in your body more than usual, which can \
                      cause muscle aches or weakness. Your doctor may lower the dose or \
                      switch you to a similar medication."
                .to_string(),
        },
        _ => Recommendation {
            clinical: "No pharmacogenomic guidance available.".to_string(),
            mechanism: "No significant pharmacogenomic risk detected.".to_string(),
            patient: "No genetic issues affecting this medication were detected.".to_string(),
        },
    }
}
