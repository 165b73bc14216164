//! Variant identifier extraction
//!
//! Turns a stream of VCF records into the ordered rsID sequence consumed by
//! the analysis pipeline. Source order and duplicates are preserved; the
//! sequence is never deduplicated or sorted.

use super::record::VcfRecord;

/// Extract the ordered sequence of non-empty variant identifiers from a
/// record stream.
///
/// Records with no identifier are skipped without error. Multi-ID records
/// contribute each of their identifiers individually, in record order.
pub fn extract_variant_ids<'a, I>(records: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a VcfRecord>,
{
    let mut ids = Vec::new();
    for record in records {
        for id in &record.ids {
            if !id.is_empty() {
                ids.push(id.clone());
            }
        }
    }
    ids
}
