use std::path::Path;

use log::{info, warn};
use serde::Serialize;

use super::analysis_input::AnalysisInput;
use super::equivalence::{Verdict, check_equivalence};
use super::frequency_table::FrequencyTable;
use super::partitioner::{BucketSource, PartitionSet, RandomBuckets, partition, partition_parallel};
use crate::error::AnalyzerError;
use crate::io;

/// Distinct keys and most frequent character of a table.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableSummary {
	pub distinct: usize,
	pub total: usize,
	pub max_key: Option<char>,
}

impl TableSummary {
	pub fn of(table: &FrequencyTable) -> Self {
		Self { distinct: table.len(), total: table.total(), max_key: table.max_key() }
	}
}

/// Everything one run produced, in reporting order.
#[derive(Serialize, Clone, Debug)]
pub struct AnalysisReport {
	pub counts: FrequencyTable,
	pub counts_summary: TableSummary,
	pub partitions: PartitionSet,
	pub merged: FrequencyTable,
	pub merged_summary: TableSummary,
	pub verdict: Verdict,
}

impl AnalysisReport {
	pub fn passed(&self) -> bool {
		self.verdict.passed()
	}

	/// Renders the human-readable report.
	///
	/// Sections: direct counts and their summary, the random tables, the
	/// merged table and its summary, then the verification line.
	pub fn render(&self) -> Result<String, AnalyzerError> {
		let mut out = String::new();
		out.push_str(&format!("Character counts: {}\n", self.counts.to_json()?));
		Self::push_summary(&mut out, &self.counts_summary);
		out.push_str(&format!("\nRandom character count tables: {}\n", self.partitions.to_json()?));
		out.push_str(&format!("\nMerged character count table: {}\n", self.merged.to_json()?));
		Self::push_summary(&mut out, &self.merged_summary);
		out.push_str(&format!("{}\n", self.verdict));
		Ok(out)
	}

	fn push_summary(out: &mut String, summary: &TableSummary) {
		out.push_str(&format!("Number of keys: {}\n", summary.distinct));
		match summary.max_key {
			Some(c) => out.push_str(&format!("Max value key: {}\n", c)),
			None => out.push_str("Max value key: none\n"),
		}
	}
}

/// Runs the count / partition / merge / verify pipeline.
///
/// # Responsibilities
/// - Load and strip the source once, share it with both consumers
/// - Partition with an injected or configured random source
/// - Merge the partitions and check them against the direct count
#[derive(Debug, Default)]
pub struct Analyzer {
	input: AnalysisInput,
}

impl Analyzer {
	pub fn new(input: AnalysisInput) -> Self {
		Self { input }
	}

	/// Analyzes the file at `path`.
	///
	/// # Errors
	/// - `NotFound` / `IoFailure` if the file cannot be loaded; no table is built
	///
	/// A failed verification is not an error here: it is carried by the
	/// report's verdict (see [`Verdict::ensure_passed`]).
	pub fn run<P: AsRef<Path>>(&self, path: P) -> Result<AnalysisReport, AnalyzerError> {
		let sequence = io::load_alphabetic(path)?;
		Ok(self.analyze(&sequence))
	}

	/// Analyzes an already stripped sequence with the configured source.
	pub fn analyze(&self, sequence: &str) -> AnalysisReport {
		if self.input.workers() > 1 {
			let counts = FrequencyTable::from_sequence(sequence);
			let partitions = partition_parallel(sequence, self.input.workers(), self.input.seed);
			return self.finish(counts, partitions);
		}
		match self.input.seed {
			Some(seed) => self.analyze_with(sequence, &mut RandomBuckets::seeded(seed)),
			None => self.analyze_with(sequence, &mut RandomBuckets::from_os_rng()),
		}
	}

	/// Analyzes a stripped sequence, drawing buckets from `source`.
	pub fn analyze_with<S: BucketSource + ?Sized>(&self, sequence: &str, source: &mut S) -> AnalysisReport {
		let counts = FrequencyTable::from_sequence(sequence);
		let partitions = partition(sequence, source);
		self.finish(counts, partitions)
	}

	fn finish(&self, counts: FrequencyTable, partitions: PartitionSet) -> AnalysisReport {
		info!("counted {} occurrences of {} distinct characters", counts.total(), counts.len());
		info!(
			"partitioned into tables of {:?} occurrences",
			partitions.tables().iter().map(FrequencyTable::total).collect::<Vec<_>>()
		);

		let merged = partitions.merged();
		let verdict = check_equivalence(&counts, &merged, self.input.mode);
		if verdict.passed() {
			info!("verification passed ({:?})", verdict.mode);
		} else {
			warn!("verification failed: {} mismatching characters", verdict.mismatches.len());
		}

		AnalysisReport {
			counts_summary: TableSummary::of(&counts),
			merged_summary: TableSummary::of(&merged),
			counts,
			partitions,
			merged,
			verdict,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	struct Fixed(usize);

	impl BucketSource for Fixed {
		fn next_bucket(&mut self, _buckets: usize) -> usize {
			self.0
		}
	}

	fn seeded(seed: u64) -> Analyzer {
		Analyzer::new(AnalysisInput::seeded(seed))
	}

	#[test]
	fn mixed_case_scenario() {
		let report = seeded(1).analyze("abBA");
		assert_eq!(report.counts, FrequencyTable::from_sequence("abBA"));
		assert_eq!(report.counts_summary.distinct, 4);
		assert_eq!(report.counts_summary.max_key, Some('A'));
		assert_eq!(report.merged, report.counts);
		assert!(report.passed());
	}

	#[test]
	fn empty_sequence_passes() {
		let report = seeded(1).analyze("");
		assert!(report.counts.is_empty());
		assert_eq!(report.partitions.len(), 3);
		assert!(report.merged.is_empty());
		assert_eq!(report.merged_summary.max_key, None);
		assert!(report.passed());
	}

	#[test]
	fn adversarial_source_passes() {
		let analyzer = Analyzer::default();
		for bucket in 0..3 {
			let report = analyzer.analyze_with("HelloWorld", &mut Fixed(bucket));
			assert!(report.passed());
			assert_eq!(report.partitions.tables()[bucket].total(), 10);
		}
	}

	#[test]
	fn parallel_workers_pass() {
		let mut input = AnalysisInput::new();
		input.set_workers(4).unwrap();
		let report = Analyzer::new(input).analyze(&"abcXYZ".repeat(100));
		assert!(report.passed());
		assert_eq!(report.merged.total(), 600);
	}

	#[test]
	fn render_sections_in_order() {
		let report = Analyzer::default().analyze_with("abBA", &mut Fixed(0));
		let expected = concat!(
			"Character counts: {\"A\":1,\"B\":1,\"a\":1,\"b\":1}\n",
			"Number of keys: 4\n",
			"Max value key: A\n",
			"\n",
			"Random character count tables: [{\"A\":1,\"B\":1,\"a\":1,\"b\":1},{},{}]\n",
			"\n",
			"Merged character count table: {\"A\":1,\"B\":1,\"a\":1,\"b\":1}\n",
			"Number of keys: 4\n",
			"Max value key: A\n",
			"Test passed: Merged counts match char counts.\n",
		);
		assert_eq!(report.render().unwrap(), expected);
	}

	#[test]
	fn render_empty_max_key() {
		let report = Analyzer::default().analyze_with("", &mut Fixed(0));
		assert!(report.render().unwrap().contains("Max value key: none\n"));
	}
}
