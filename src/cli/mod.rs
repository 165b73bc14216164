//! CLI utilities for pgx-analyzer
//!
//! Testable functions used by the `pgx` binary. I/O-abstracted formatting
//! lives here so the binary stays a thin argument-parsing shell.

pub mod format;

pub use format::{output_error, output_result, OutputFormat};
