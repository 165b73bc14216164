//! Pharmacogenomic knowledge tables.
//!
//! The pipeline never reaches for ambient global state: all lookups go
//! through a [`KnowledgeBase`] constructed at startup and passed in by
//! shared reference. [`KnowledgeBase::builtin`] carries the production
//! tables; tests substitute their own.
//!
//! # Example
//!
//! ```
//! use pgx_analyzer::KnowledgeBase;
//!
//! let kb = KnowledgeBase::builtin();
//! let annotation = kb.annotation_for("rs3892097").unwrap();
//! assert_eq!(annotation.gene, "CYP2D6");
//! assert_eq!(annotation.phenotype, "Poor Metabolizer");
//! ```

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// A variant identifier annotated with its gene and metabolic phenotype
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantAnnotation {
    /// rsID (e.g., "rs3892097")
    pub rsid: String,
    /// Gene symbol (e.g., "CYP2D6")
    pub gene: String,
    /// Functional classification (e.g., "Poor Metabolizer")
    pub phenotype: String,
}

/// Risk rule for a single drug: the gene it is metabolized or transported
/// by, and the risk label assigned per phenotype.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrugRule {
    /// Gene symbol the drug's pharmacokinetics depend on
    pub gene: String,
    /// Phenotype name to risk label (e.g., "Poor Metabolizer" -> "Ineffective")
    pub outcomes: HashMap<String, String>,
}

impl DrugRule {
    /// Create a rule with a single phenotype outcome
    pub fn single(gene: &str, phenotype: &str, risk_label: &str) -> Self {
        let mut outcomes = HashMap::new();
        outcomes.insert(phenotype.to_string(), risk_label.to_string());
        Self {
            gene: gene.to_string(),
            outcomes,
        }
    }

    /// Risk label for a phenotype, if this rule covers it
    pub fn risk_label(&self, phenotype: &str) -> Option<&str> {
        self.outcomes.get(phenotype).map(|s| s.as_str())
    }
}

/// Immutable knowledge tables backing an analysis run.
///
/// Holds the variant lookup (rsID to gene/phenotype), the per-drug risk
/// rules, and the gene-level inhibitor table used for drug-interaction
/// checks. Drug names are stored uppercase; callers normalize before
/// lookup.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    variants: HashMap<String, VariantAnnotation>,
    drug_rules: HashMap<String, DrugRule>,
    inhibitors: HashMap<String, HashSet<String>>,
}

impl KnowledgeBase {
    /// Create an empty knowledge base
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in production tables.
    ///
    /// Covers CYP2D6 (codeine) and SLCO1B1 (simvastatin) with their
    /// canonical no-function variants, plus known inhibitors for each
    /// gene. Extensible without changing pipeline shape.
    pub fn builtin() -> Self {
        let mut kb = Self::new();

        kb.add_variant("rs3892097", "CYP2D6", "Poor Metabolizer");
        kb.add_variant("rs4149056", "SLCO1B1", "Poor Transporter");

        kb.add_drug_rule("CODEINE", DrugRule::single("CYP2D6", "Poor Metabolizer", "Ineffective"));
        kb.add_drug_rule(
            "SIMVASTATIN",
            DrugRule::single("SLCO1B1", "Poor Transporter", "Toxicity Risk"),
        );

        // CYP2D6 inhibitors relevant to codeine activation
        kb.add_inhibitors("CYP2D6", &["FLUOXETINE", "PAROXETINE", "BUPROPION", "QUINIDINE"]);
        // SLCO1B1/OATP1B1 inhibitors raising statin exposure
        kb.add_inhibitors("SLCO1B1", &["CYCLOSPORINE", "GEMFIBROZIL", "CLARITHROMYCIN"]);

        kb
    }

    /// Add a variant annotation entry
    pub fn add_variant(&mut self, rsid: &str, gene: &str, phenotype: &str) -> &mut Self {
        self.variants.insert(
            rsid.to_string(),
            VariantAnnotation {
                rsid: rsid.to_string(),
                gene: gene.to_string(),
                phenotype: phenotype.to_string(),
            },
        );
        self
    }

    /// Add a drug risk rule; the drug name is stored uppercase
    pub fn add_drug_rule(&mut self, drug: &str, rule: DrugRule) -> &mut Self {
        self.drug_rules.insert(drug.to_uppercase(), rule);
        self
    }

    /// Add inhibitor drugs for a gene; names are stored uppercase
    pub fn add_inhibitors(&mut self, gene: &str, drugs: &[&str]) -> &mut Self {
        let entry = self.inhibitors.entry(gene.to_string()).or_default();
        for drug in drugs {
            entry.insert(drug.to_uppercase());
        }
        self
    }

    /// Look up the annotation for an rsID
    pub fn annotation_for(&self, rsid: &str) -> Option<&VariantAnnotation> {
        self.variants.get(rsid)
    }

    /// Look up the risk rule for an (uppercase) drug name
    pub fn rule_for(&self, drug: &str) -> Option<&DrugRule> {
        self.drug_rules.get(drug)
    }

    /// Look up the inhibitor set for a gene
    pub fn inhibitors_of(&self, gene: &str) -> Option<&HashSet<String>> {
        self.inhibitors.get(gene)
    }

    /// Drug names with risk rules, sorted for stable listing
    pub fn known_drugs(&self) -> Vec<&str> {
        let mut drugs: Vec<&str> = self.drug_rules.keys().map(|s| s.as_str()).collect();
        drugs.sort_unstable();
        drugs
    }

    /// Number of variant annotation entries
    pub fn variant_count(&self) -> usize {
        self.variants.len()
    }
}
