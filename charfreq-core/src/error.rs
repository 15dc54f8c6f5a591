use std::path::PathBuf;

use thiserror::Error;

/// A character whose merged count differs from the reference count.
///
/// `expected` is the reference count and `found` the candidate count,
/// `0` standing for an absent key on either side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Mismatch {
	pub character: char,
	pub expected: usize,
	pub found: usize,
}

/// Errors raised by the analysis pipeline.
///
/// Every variant is fatal to a run: nothing is retried or recovered locally.
#[derive(Debug, Error)]
pub enum AnalyzerError {
	/// The input path does not resolve to a file that can be opened.
	#[error("input not found: {}", path.display())]
	NotFound { path: PathBuf },

	/// The input was opened but reading it failed (including invalid UTF-8).
	#[error("failed to read {}: {source}", path.display())]
	IoFailure {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// The merged table does not reproduce the reference counts.
	#[error("merged counts do not match char counts ({} mismatching characters)", mismatches.len())]
	VerificationFailure { mismatches: Vec<Mismatch> },

	/// A configuration value is out of range.
	#[error("invalid configuration: {0}")]
	InvalidConfig(String),

	/// A table could not be rendered for the report.
	#[error("failed to render report: {0}")]
	Render(#[from] serde_json::Error),
}
