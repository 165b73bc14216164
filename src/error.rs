//! Error types for pgx-analyzer
//!
//! The boundary distinguishes ingestion failures (file I/O, VCF syntax)
//! from request validation failures. Rule evaluation itself is pure and
//! cannot fail once inputs are well-formed strings, so no error variant
//! exists for it.

use thiserror::Error;

/// Main error type for pgx-analyzer operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PgxError {
    /// File IO error
    #[error("IO error: {msg}")]
    Io { msg: String },

    /// Malformed or unreadable VCF input. A hard failure: the caller must
    /// not proceed with an empty variant list.
    #[error("VCF parse error: {msg}")]
    VcfParse { msg: String },

    /// Variant identifier that is not a valid rsID token
    #[error("Invalid rsID: {rsid}")]
    InvalidRsid { rsid: String },

    /// Request validation: the drug name was empty after trimming
    #[error("Drug name must not be empty")]
    EmptyDrug,
}

impl PgxError {
    /// True for failures of the ingestion collaborator (I/O or VCF syntax),
    /// as opposed to request validation failures.
    pub fn is_ingestion_failure(&self) -> bool {
        matches!(self, PgxError::Io { .. } | PgxError::VcfParse { .. })
    }
}

impl From<std::io::Error> for PgxError {
    fn from(e: std::io::Error) -> Self {
        PgxError::Io { msg: e.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = PgxError::VcfParse {
            msg: "bad record".to_string(),
        };
        assert_eq!(err.to_string(), "VCF parse error: bad record");

        let err = PgxError::EmptyDrug;
        assert_eq!(err.to_string(), "Drug name must not be empty");
    }

    #[test]
    fn test_ingestion_failure_classification() {
        assert!(PgxError::Io {
            msg: "x".to_string()
        }
        .is_ingestion_failure());
        assert!(PgxError::VcfParse {
            msg: "x".to_string()
        }
        .is_ingestion_failure());
        assert!(!PgxError::EmptyDrug.is_ingestion_failure());
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: PgxError = io.into();
        assert!(matches!(err, PgxError::Io { .. }));
    }
}
