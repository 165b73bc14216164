//! Variant annotation against the knowledge tables.

use crate::knowledge::{KnowledgeBase, VariantAnnotation};

/// Map detected variant identifiers to gene/phenotype annotations.
///
/// Identifiers absent from the lookup table are silently excluded; the
/// aggregate `variants_missing` flag is computed later from the result.
/// Annotation order mirrors the order of matching identifiers in the
/// input, duplicates included.
pub fn annotate_variants(kb: &KnowledgeBase, variant_ids: &[String]) -> Vec<VariantAnnotation> {
    variant_ids
        .iter()
        .filter_map(|rsid| kb.annotation_for(rsid).cloned())
        .collect()
}
