//! Output formatting utilities for CLI operations

use std::io::{self, Write};
use std::str::FromStr;

use crate::analyze::AnalysisResult;
use crate::error::PgxError;

/// Output format for CLI results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Compact JSON (default)
    #[default]
    Json,
    /// Pretty-printed JSON
    Pretty,
    /// Short human-readable summary
    Text,
}

impl FromStr for OutputFormat {
    type Err = std::convert::Infallible;

    /// Parse an output format from a string
    ///
    /// # Examples
    ///
    /// ```
    /// use pgx_analyzer::cli::OutputFormat;
    /// use std::str::FromStr;
    ///
    /// assert!(matches!(OutputFormat::from_str("pretty").unwrap(), OutputFormat::Pretty));
    /// assert!(matches!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text));
    /// assert!(matches!(OutputFormat::from_str("json").unwrap(), OutputFormat::Json));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "pretty" => OutputFormat::Pretty,
            "text" => OutputFormat::Text,
            _ => OutputFormat::Json,
        })
    }
}

/// Write an analysis result to the output in the requested format
pub fn output_result<W: Write>(
    writer: &mut W,
    result: &AnalysisResult,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string(result).map_err(io::Error::other)?;
            writeln!(writer, "{}", json)
        }
        OutputFormat::Pretty => {
            let json = serde_json::to_string_pretty(result).map_err(io::Error::other)?;
            writeln!(writer, "{}", json)
        }
        OutputFormat::Text => {
            writeln!(writer, "Drug:           {}", result.drug)?;
            writeln!(
                writer,
                "Risk:           {} (confidence {:.2}, severity {})",
                result.risk_assessment.risk_label,
                result.risk_assessment.confidence_score,
                result.risk_assessment.severity
            )?;
            writeln!(
                writer,
                "Profile:        {} / {}",
                result.pharmacogenomic_profile.primary_gene,
                result.pharmacogenomic_profile.phenotype
            )?;
            if let Some(detail) = result.drug_interactions.summary() {
                writeln!(writer, "Interactions:   {}", detail)?;
            }
            writeln!(writer, "Recommendation: {}", result.clinical_recommendation)?;
            if result.analysis_flags.partial_analysis {
                writeln!(writer, "Note: partial analysis (see analysis_flags)")?;
            }
            Ok(())
        }
    }
}

/// Write an error to standard error in a stable one-line form
pub fn output_error<W: Write>(writer: &mut W, error: &PgxError) -> io::Result<()> {
    writeln!(writer, "error: {}", error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explain::NoopExplanation;
    use crate::knowledge::KnowledgeBase;
    use crate::Analyzer;
    use std::io::Cursor;

    fn sample_result() -> AnalysisResult {
        Analyzer::new(KnowledgeBase::builtin(), NoopExplanation)
            .analyze_ids(vec!["rs3892097".to_string()], "CODEINE", &[])
            .unwrap()
    }

    #[test]
    fn test_json_output_is_single_line() {
        let mut buffer = Cursor::new(Vec::new());
        output_result(&mut buffer, &sample_result(), OutputFormat::Json).unwrap();
        let out = String::from_utf8(buffer.into_inner()).unwrap();
        assert_eq!(out.trim().lines().count(), 1);
        assert!(out.contains("\"risk_label\":\"Ineffective\""));
    }

    #[test]
    fn test_pretty_output_is_indented() {
        let mut buffer = Cursor::new(Vec::new());
        output_result(&mut buffer, &sample_result(), OutputFormat::Pretty).unwrap();
        let out = String::from_utf8(buffer.into_inner()).unwrap();
        assert!(out.contains("  \"risk_assessment\""));
    }

    #[test]
    fn test_text_output_summary() {
        let mut buffer = Cursor::new(Vec::new());
        output_result(&mut buffer, &sample_result(), OutputFormat::Text).unwrap();
        let out = String::from_utf8(buffer.into_inner()).unwrap();
        assert!(out.contains("Drug:           CODEINE"));
        assert!(out.contains("severity high"));
        assert!(out.contains("Morphine"));
    }

    #[test]
    fn test_error_output() {
        let mut buffer = Cursor::new(Vec::new());
        output_error(&mut buffer, &PgxError::EmptyDrug).unwrap();
        let out = String::from_utf8(buffer.into_inner()).unwrap();
        assert_eq!(out, "error: Drug name must not be empty\n");
    }
}
