//! VCF (Variant Call Format) support
//!
//! This module provides the VCF ingestion side of the pipeline: parsing
//! files into records and extracting variant identifiers from them.

mod extract;
mod parser;
mod record;

pub use extract::extract_variant_ids;
pub use parser::{open_vcf, parse_vcf_string, VcfHeader, VcfReader};
pub use record::VcfRecord;
