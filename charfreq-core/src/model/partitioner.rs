use std::sync::mpsc;
use std::thread;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use super::frequency_table::FrequencyTable;
use super::merger::merge_tables;

/// Number of tables in a partition set.
pub const PARTITION_COUNT: usize = 3;

/// Source of bucket indices used to distribute character occurrences.
///
/// Implementations must return a value in `0..buckets`.
pub trait BucketSource {
	fn next_bucket(&mut self, buckets: usize) -> usize;
}

/// Uniform, independent bucket draws backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomBuckets<R: Rng> {
	rng: R,
}

impl<R: Rng> RandomBuckets<R> {
	pub fn new(rng: R) -> Self {
		Self { rng }
	}
}

impl RandomBuckets<StdRng> {
	/// A fresh, OS-seeded source. Two runs give different partitions.
	pub fn from_os_rng() -> Self {
		Self::new(StdRng::from_os_rng())
	}

	/// A reproducible source: the same seed always gives the same draws.
	pub fn seeded(seed: u64) -> Self {
		Self::new(StdRng::seed_from_u64(seed))
	}
}

impl<R: Rng> BucketSource for RandomBuckets<R> {
	fn next_bucket(&mut self, buckets: usize) -> usize {
		self.rng.random_range(0..buckets)
	}
}

/// Character frequency tables produced by randomly distributing the
/// occurrences of one sequence.
///
/// # Invariants
/// - Every occurrence of the source sequence lands in exactly one table
/// - Merging the tables reproduces the direct count of the sequence
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(transparent)]
pub struct PartitionSet {
	tables: Vec<FrequencyTable>,
}

impl PartitionSet {
	fn empty(buckets: usize) -> Self {
		Self { tables: vec![FrequencyTable::new(); buckets] }
	}

	pub fn tables(&self) -> &[FrequencyTable] {
		&self.tables
	}

	pub fn into_tables(self) -> Vec<FrequencyTable> {
		self.tables
	}

	/// Number of buckets (tables) in the set.
	pub fn len(&self) -> usize {
		self.tables.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tables.is_empty()
	}

	/// Sums the tables into one.
	pub fn merged(&self) -> FrequencyTable {
		merge_tables(&self.tables)
	}

	/// Records one occurrence of `c` in table `bucket`.
	///
	/// # Panics
	/// Panics if the bucket source drew an index outside the set.
	fn add(&mut self, bucket: usize, c: char) {
		let buckets = self.tables.len();
		match self.tables.get_mut(bucket) {
			Some(table) => table.add(c),
			None => panic!("bucket source drew {} for {} buckets", bucket, buckets),
		}
	}

	/// Merges another set bucket by bucket.
	///
	/// Both sets must have the same number of buckets.
	fn absorb(&mut self, other: &Self) {
		for (mine, theirs) in self.tables.iter_mut().zip(other.tables.iter()) {
			mine.merge(theirs);
		}
	}

	/// Renders the set as a JSON array of sorted tables.
	pub fn to_json(&self) -> Result<String, serde_json::Error> {
		let sorted: Vec<_> = self.tables.iter().map(FrequencyTable::sorted).collect();
		serde_json::to_string(&sorted)
	}
}

/// Distributes every occurrence of `sequence` into one of three tables.
///
/// Each occurrence draws its bucket independently and uniformly; the split
/// is not balanced.
pub fn partition<S: BucketSource + ?Sized>(sequence: &str, source: &mut S) -> PartitionSet {
	partition_into(sequence, PARTITION_COUNT, source)
}

/// Distributes every occurrence of `sequence` into one of `buckets` tables.
///
/// # Panics
/// Panics if `buckets` is zero or if `source` draws outside `0..buckets`.
pub fn partition_into<S: BucketSource + ?Sized>(sequence: &str, buckets: usize, source: &mut S) -> PartitionSet {
	assert!(buckets > 0, "at least one bucket is required");
	let mut set = PartitionSet::empty(buckets);
	for c in sequence.chars() {
		let bucket = source.next_bucket(buckets);
		set.add(bucket, c);
	}
	set
}

/// Multi-threaded version of [`partition`].
///
/// - Splits the sequence into one chunk per worker
/// - Each worker fills a private partition set from its own random source
/// - Private sets are merged bucket by bucket once all workers are done
///
/// With `seed`, worker `i` draws from a generator seeded with `seed + i`, so
/// the result is reproducible for a fixed seed and worker count.
pub fn partition_parallel(sequence: &str, workers: usize, seed: Option<u64>) -> PartitionSet {
	let chars: Vec<char> = sequence.chars().collect();
	let workers = workers.max(1);
	if chars.is_empty() {
		return PartitionSet::empty(PARTITION_COUNT);
	}
	let chunk_size = chars.len().div_ceil(workers);

	let (tx, rx) = mpsc::channel();
	thread::scope(|scope| {
		for (index, chunk) in chars.chunks(chunk_size).enumerate() {
			let tx = tx.clone();
			scope.spawn(move || {
				let mut source = match seed {
					Some(seed) => RandomBuckets::seeded(seed.wrapping_add(index as u64)),
					None => RandomBuckets::from_os_rng(),
				};
				let mut partial = PartitionSet::empty(PARTITION_COUNT);
				for c in chunk {
					let bucket = source.next_bucket(PARTITION_COUNT);
					partial.add(bucket, *c);
				}
				debug!("partition worker {} handled {} characters", index, chunk.len());
				tx.send(partial).expect("Failed to send from thread");
			});
		}
	});
	drop(tx);

	let mut set = PartitionSet::empty(PARTITION_COUNT);
	for partial in rx.iter() {
		set.absorb(&partial);
	}
	set
}
