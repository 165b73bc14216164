// Copyright (c) 2024-2025 Fulcrum Genomics LLC
// SPDX-License-Identifier: MIT

//! pgx-analyzer: pharmacogenomic risk analysis from VCF variant calls
//!
//! Part of the ferro bioinformatics toolkit.
//!
//! # Example
//!
//! ```
//! use pgx_analyzer::{Analyzer, KnowledgeBase, NoopExplanation};
//!
//! // Build the analyzer with the built-in knowledge tables
//! let kb = KnowledgeBase::builtin();
//! let analyzer = Analyzer::new(kb, NoopExplanation);
//!
//! // Analyze a set of detected variant identifiers for a drug
//! let result = analyzer
//!     .analyze_ids(vec!["rs3892097".to_string()], "codeine", &[])
//!     .unwrap();
//! assert_eq!(result.risk_assessment.risk_label, "Ineffective");
//! ```

pub mod analyze;
pub mod cli;
pub mod error;
pub mod explain;
pub mod knowledge;
pub mod vcf;

// Re-export commonly used types
pub use analyze::assemble::{AnalysisFlags, AnalysisResult, Analyzer};
pub use analyze::interaction::InteractionResult;
pub use analyze::score::{RiskAssessment, Severity};
pub use error::PgxError;
pub use explain::{ExplanationProvider, NoopExplanation, TemplateExplanation};
pub use knowledge::{DrugRule, KnowledgeBase, VariantAnnotation};
pub use vcf::{extract_variant_ids, open_vcf, parse_vcf_string, VcfRecord};

/// Result type alias for pgx-analyzer operations
pub type Result<T> = std::result::Result<T, PgxError>;
