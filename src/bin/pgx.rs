// Copyright (c) 2024-2025 Fulcrum Genomics LLC
// SPDX-License-Identifier: MIT

//! pgx CLI
//!
//! Command-line interface for pharmacogenomic risk analysis of VCF files.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use pgx_analyzer::cli::{output_error, output_result, OutputFormat};
use pgx_analyzer::{Analyzer, KnowledgeBase, NoopExplanation, TemplateExplanation};

#[derive(Parser)]
#[command(name = "pgx")]
#[command(author, version, about = "Pharmacogenomic risk analysis from VCF variant calls")]
#[command(
    long_about = "Analyze a patient's VCF against pharmacogenomic risk rules for a drug.

Examples:
  pgx analyze -i patient.vcf --drug CODEINE
  pgx analyze -i patient.vcf.gz --drug SIMVASTATIN --med CYCLOSPORINE --format pretty
  pgx genes"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a VCF file for a drug
    Analyze {
        /// Input VCF file (plain or gzip-compressed)
        #[arg(short, long)]
        input: PathBuf,

        /// Drug to assess (e.g., CODEINE)
        #[arg(long)]
        drug: String,

        /// Current medication; repeat for multiple
        #[arg(long = "med")]
        meds: Vec<String>,

        /// Output format: json, pretty, or text
        #[arg(long, default_value = "json")]
        format: String,

        /// Fill the explanation field from a deterministic template
        /// instead of the unavailable placeholder
        #[arg(long)]
        template_explanation: bool,
    },

    /// List drugs and variants in the built-in knowledge tables
    Genes,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            input,
            drug,
            meds,
            format,
            template_explanation,
        } => {
            let kb = KnowledgeBase::builtin();
            let result = if template_explanation {
                Analyzer::new(kb, TemplateExplanation).analyze_vcf_path(&input, &drug, &meds)
            } else {
                Analyzer::new(kb, NoopExplanation).analyze_vcf_path(&input, &drug, &meds)
            };

            match result {
                Ok(analysis) => {
                    let format = OutputFormat::from_str(&format).unwrap_or_default();
                    if let Err(e) = output_result(&mut io::stdout(), &analysis, format) {
                        eprintln!("error: {}", e);
                        return ExitCode::FAILURE;
                    }
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    let _ = output_error(&mut io::stderr(), &e);
                    ExitCode::FAILURE
                }
            }
        }

        Commands::Genes => {
            let kb = KnowledgeBase::builtin();
            println!("Drugs with risk rules:");
            for drug in kb.known_drugs() {
                let rule = kb.rule_for(drug).expect("listed drug has a rule");
                println!("  {} ({})", drug, rule.gene);
            }
            println!("Variant annotations: {}", kb.variant_count());
            ExitCode::SUCCESS
        }
    }
}
