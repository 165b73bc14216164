//! Drug-drug interaction detection.

use serde::{Deserialize, Serialize};

use crate::knowledge::KnowledgeBase;

/// Result of the interaction check for one analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionResult {
    /// True iff at least one current medication inhibits the drug's gene
    pub interactions_detected: bool,
    /// The inhibiting medications, in the order the caller listed them
    pub interacting_medications: Vec<String>,
}

impl InteractionResult {
    /// The empty (no interactions) result
    pub fn none() -> Self {
        Self {
            interactions_detected: false,
            interacting_medications: Vec::new(),
        }
    }

    /// One-line detail suitable for display, e.g.
    /// "Interaction with CYCLOSPORINE", or None if nothing was detected.
    pub fn summary(&self) -> Option<String> {
        if self.interactions_detected {
            Some(format!(
                "Interaction with {}",
                self.interacting_medications.join(", ")
            ))
        } else {
            None
        }
    }
}

/// Check the patient's current medications against known inhibitors of the
/// drug's gene.
///
/// Detection is gene-level, not variant-level: an inhibitor is flagged
/// whether or not the patient carries the risk variant. Medication names
/// must already be uppercased by the caller. Matches preserve the input
/// order of medications and are not deduplicated. A drug with no rule
/// (hence no gene) yields the empty result.
pub fn detect_interactions(
    kb: &KnowledgeBase,
    drug: &str,
    current_meds: &[String],
) -> InteractionResult {
    let Some(rule) = kb.rule_for(drug) else {
        return InteractionResult::none();
    };
    let Some(inhibitors) = kb.inhibitors_of(&rule.gene) else {
        return InteractionResult::none();
    };

    let interacting: Vec<String> = current_meds
        .iter()
        .filter(|med| inhibitors.contains(med.as_str()))
        .cloned()
        .collect();

    InteractionResult {
        interactions_detected: !interacting.is_empty(),
        interacting_medications: interacting,
    }
}
