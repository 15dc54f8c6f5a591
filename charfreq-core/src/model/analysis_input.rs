use super::equivalence::EquivalenceMode;
use crate::error::AnalyzerError;

/// Parameters of one analysis run.
///
/// # Responsibilities
/// - Choose between a reproducible (`seed`) and a fresh random source
/// - Set how many workers partition the sequence
/// - Select the equivalence mode used for verification
///
/// # Invariants
/// - `workers` is always >= 1
#[derive(Clone, Debug)]
pub struct AnalysisInput {
	/// Seed of the partitioning source. `None` draws a fresh OS seed.
	pub seed: Option<u64>,

	/// Verification mode (defaults to `Strict`).
	pub mode: EquivalenceMode,

	/// Number of partition workers; `1` partitions on the calling thread.
	workers: usize,
}

impl Default for AnalysisInput {
	fn default() -> Self {
		Self { seed: None, mode: EquivalenceMode::default(), workers: 1 }
	}
}

impl AnalysisInput {
	pub fn new() -> Self {
		Self::default()
	}

	/// Default input with a fixed partitioning seed.
	pub fn seeded(seed: u64) -> Self {
		Self { seed: Some(seed), ..Self::default() }
	}

	/// Returns the number of partition workers.
	pub fn workers(&self) -> usize {
		self.workers
	}

	/// Sets the number of partition workers.
	///
	/// # Errors
	/// Returns an error if `workers` is zero.
	pub fn set_workers(&mut self, workers: usize) -> Result<(), AnalyzerError> {
		if workers == 0 {
			return Err(AnalyzerError::InvalidConfig("workers must be >= 1".to_owned()));
		}
		self.workers = workers;
		Ok(())
	}
}
