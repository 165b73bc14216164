//! Drug risk rule evaluation.

use crate::knowledge::{KnowledgeBase, VariantAnnotation};

/// Default risk label when no rule matches
pub const RISK_UNKNOWN: &str = "Unknown";

/// Evaluate the drug's risk rule against the annotated variants.
///
/// Returns `"Unknown"` unconditionally when the drug has no rule, even if
/// variants match some other drug's gene. Otherwise every annotated
/// variant is scanned in order and each match overwrites the label:
/// last-match-wins. This is observable contractual behavior of the
/// existing system (a later variant with a different phenotype for the
/// same gene overwrites an earlier determination) and must not be
/// changed to first-match or best-match without product sign-off.
pub fn evaluate_risk(kb: &KnowledgeBase, drug: &str, annotations: &[VariantAnnotation]) -> String {
    let Some(rule) = kb.rule_for(drug) else {
        return RISK_UNKNOWN.to_string();
    };

    let mut risk_label = RISK_UNKNOWN.to_string();
    for annotation in annotations {
        if annotation.gene == rule.gene {
            if let Some(label) = rule.risk_label(&annotation.phenotype) {
                risk_label = label.to_string();
            }
        }
    }
    risk_label
}
