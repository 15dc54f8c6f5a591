use std::fmt;

use log::debug;
use serde::Serialize;

use super::frequency_table::FrequencyTable;
use crate::error::{AnalyzerError, Mismatch};

/// How strictly a candidate table must match the reference.
#[derive(Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EquivalenceMode {
	/// Same keys and counts in both directions.
	#[default]
	Strict,
	/// Only checks that every reference character appears in the candidate
	/// with the same count. Extra candidate characters are ignored.
	Coverage,
}

/// Outcome of an equivalence check.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Verdict {
	pub mode: EquivalenceMode,
	/// Sorted by character.
	pub mismatches: Vec<Mismatch>,
}

impl Verdict {
	pub fn passed(&self) -> bool {
		self.mismatches.is_empty()
	}

	/// Turns a failed verdict into a `VerificationFailure`.
	pub fn ensure_passed(&self) -> Result<(), AnalyzerError> {
		if self.passed() {
			Ok(())
		} else {
			Err(AnalyzerError::VerificationFailure { mismatches: self.mismatches.clone() })
		}
	}
}

impl fmt::Display for Verdict {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.passed() {
			return write!(f, "Test passed: Merged counts match char counts.");
		}
		write!(f, "Test failed: Merged counts do not match char counts.")?;
		for m in &self.mismatches {
			write!(f, "\n  '{}': expected {}, found {}", m.character, m.expected, m.found)?;
		}
		Ok(())
	}
}

/// Compares a candidate table against a reference table.
///
/// In `Coverage` mode only reference characters are checked. In `Strict`
/// mode characters present only in the candidate are reported as well,
/// with an expected count of zero.
pub fn check_equivalence(reference: &FrequencyTable, candidate: &FrequencyTable, mode: EquivalenceMode) -> Verdict {
	let mut mismatches: Vec<Mismatch> = reference
		.iter()
		.filter_map(|(character, expected)| {
			let found = candidate.get(character);
			(found != expected).then_some(Mismatch { character, expected, found })
		})
		.collect();

	if mode == EquivalenceMode::Strict {
		mismatches.extend(
			candidate
				.iter()
				.filter(|(c, _)| !reference.contains(*c))
				.map(|(character, found)| Mismatch { character, expected: 0, found }),
		);
	}

	mismatches.sort_by_key(|m| m.character);
	for m in &mismatches {
		debug!("mismatch on '{}': expected {}, found {}", m.character, m.expected, m.found);
	}
	Verdict { mode, mismatches }
}
