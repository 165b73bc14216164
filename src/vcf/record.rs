//! VCF record representation
//!
//! A slim record type carrying the fields the analysis pipeline consumes.
//! Multi-ID records (`rs1;rs2` in the ID column) keep each identifier as
//! a separate entry.

use serde::{Deserialize, Serialize};

/// A single VCF record representing one variant call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VcfRecord {
    /// Chromosome name (e.g., "chr1", "1", "X", "chrM")
    pub chrom: String,

    /// 1-based position of the first base in the reference allele
    pub pos: u64,

    /// Variant identifiers (e.g., rsIDs); empty if the ID column is "."
    #[serde(default)]
    pub ids: Vec<String>,

    /// Reference allele
    pub reference: String,

    /// Alternate allele(s)
    pub alternate: Vec<String>,
}

impl VcfRecord {
    /// Create a new VCF record with minimal required fields
    pub fn new(chrom: String, pos: u64, reference: String, alternate: Vec<String>) -> Self {
        Self {
            chrom,
            pos,
            ids: Vec::new(),
            reference,
            alternate,
        }
    }

    /// Create a record carrying a single variant identifier
    pub fn with_id(chrom: &str, pos: u64, id: &str) -> Self {
        let mut record = Self::new(chrom.to_string(), pos, "N".to_string(), vec!["N".to_string()]);
        record.ids.push(id.to_string());
        record
    }

    /// Check if this record carries at least one identifier
    pub fn has_id(&self) -> bool {
        self.ids.iter().any(|id| !id.is_empty())
    }

    /// Check if this is a SNV (single nucleotide variant)
    pub fn is_snv(&self) -> bool {
        self.reference.len() == 1
            && self.alternate.len() == 1
            && self.alternate[0].len() == 1
            && self.reference != self.alternate[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_has_no_ids() {
        let record = VcfRecord::new("chr22".to_string(), 42522613, "G".to_string(), vec!["A".to_string()]);
        assert!(!record.has_id());
        assert!(record.is_snv());
    }

    #[test]
    fn test_with_id() {
        let record = VcfRecord::with_id("chr22", 42522613, "rs3892097");
        assert!(record.has_id());
        assert_eq!(record.ids, vec!["rs3892097"]);
    }

    #[test]
    fn test_empty_id_does_not_count() {
        let mut record = VcfRecord::new("1".to_string(), 100, "A".to_string(), vec!["G".to_string()]);
        record.ids.push(String::new());
        assert!(!record.has_id());
    }

    #[test]
    fn test_is_snv() {
        let snv = VcfRecord::new("1".to_string(), 100, "A".to_string(), vec!["G".to_string()]);
        assert!(snv.is_snv());

        let del = VcfRecord::new("1".to_string(), 100, "AG".to_string(), vec!["A".to_string()]);
        assert!(!del.is_snv());
    }
}
