use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// Occurrence counts of single characters within a character sequence.
///
/// Keys are case-sensitive: `'a'` and `'A'` are counted separately.
/// Iteration order of the underlying map carries no meaning; anything
/// order-dependent (rendering, max key) goes through a sorted view.
///
/// ## Responsibilities:
/// - Accumulate occurrences while scanning a sequence
/// - Merge with another table by summing counts
/// - Summarize itself (distinct keys, total, most frequent key)
///
/// ## Invariants
/// - Every stored count is strictly positive; absence means zero
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(from = "HashMap<char, usize>", into = "HashMap<char, usize>")]
pub struct FrequencyTable {
	/// Example: { 'e' => 42, 'a' => 3 }
	counts: HashMap<char, usize>,
}

impl FrequencyTable {
	/// Creates a new empty table.
	pub fn new() -> Self {
		Self::default()
	}

	/// Counts every character of `sequence`, scanning left to right.
	///
	/// Deterministic: the same sequence always yields the same table.
	/// An empty sequence yields an empty table.
	pub fn from_sequence(sequence: &str) -> Self {
		sequence.chars().collect()
	}

	/// Records one occurrence of `c`.
	pub fn add(&mut self, c: char) {
		self.add_count(c, 1);
	}

	/// Records `count` occurrences of `c`. A zero count stores nothing.
	pub fn add_count(&mut self, c: char, count: usize) {
		if count == 0 {
			return;
		}
		*self.counts.entry(c).or_insert(0) += count;
	}

	/// Returns the count of `c`, `0` if absent.
	pub fn get(&self, c: char) -> usize {
		self.counts.get(&c).copied().unwrap_or(0)
	}

	/// Returns `true` if `c` has at least one occurrence.
	pub fn contains(&self, c: char) -> bool {
		self.counts.contains_key(&c)
	}

	/// Number of distinct characters.
	pub fn len(&self) -> usize {
		self.counts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.counts.is_empty()
	}

	/// Sum of all counts.
	pub fn total(&self) -> usize {
		self.counts.values().sum()
	}

	/// Iterates over `(character, count)` pairs in unspecified order.
	pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
		self.counts.iter().map(|(c, n)| (*c, *n))
	}

	/// Returns the table as a map ordered by character code point.
	pub fn sorted(&self) -> BTreeMap<char, usize> {
		self.iter().collect()
	}

	/// Returns the character with the highest count.
	///
	/// Ties go to the smallest character by code point, so `'A'` beats
	/// `'a'` and `'a'` beats `'b'`. Returns `None` for an empty table.
	pub fn max_key(&self) -> Option<char> {
		self.iter()
			.max_by(|(ca, na), (cb, nb)| na.cmp(nb).then_with(|| cb.cmp(ca)))
			.map(|(c, _)| c)
	}

	/// Merges another table into this one.
	///
	/// Counts of matching characters are summed, missing ones are inserted.
	pub fn merge(&mut self, other: &Self) {
		for (c, count) in other.iter() {
			self.add_count(c, count);
		}
	}

	/// Renders the table as a JSON object with sorted keys.
	///
	/// Example: `{"A":1,"B":1,"a":1,"b":1}`
	pub fn to_json(&self) -> Result<String, serde_json::Error> {
		serde_json::to_string(&self.sorted())
	}
}

impl FromIterator<char> for FrequencyTable {
	fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
		let mut table = Self::new();
		for c in iter {
			table.add(c);
		}
		table
	}
}

/// Rebuilds a table from raw counts, dropping zero entries.
impl From<HashMap<char, usize>> for FrequencyTable {
	fn from(counts: HashMap<char, usize>) -> Self {
		let mut table = Self::new();
		for (c, count) in counts {
			table.add_count(c, count);
		}
		table
	}
}

impl From<FrequencyTable> for HashMap<char, usize> {
	fn from(table: FrequencyTable) -> Self {
		table.counts
	}
}
