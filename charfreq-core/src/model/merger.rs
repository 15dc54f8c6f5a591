use super::frequency_table::FrequencyTable;

/// Merges any number of tables into one by summing counts per character.
///
/// A character absent from a table contributes zero. The result does not
/// depend on the order of `tables`, and an empty slice gives an empty table.
pub fn merge_tables(tables: &[FrequencyTable]) -> FrequencyTable {
	let mut merged = FrequencyTable::new();
	for table in tables {
		merged.merge(table);
	}
	merged
}

#[cfg(test)]
mod tests {
	use super::*;

	fn tables() -> Vec<FrequencyTable> {
		vec![
			FrequencyTable::from_sequence("aabC"),
			FrequencyTable::from_sequence("bbz"),
			FrequencyTable::new(),
			FrequencyTable::from_sequence("Caz"),
		]
	}

	#[test]
	fn empty_list_gives_empty_table() {
		assert!(merge_tables(&[]).is_empty());
	}

	#[test]
	fn single_table_is_unchanged() {
		let table = FrequencyTable::from_sequence("Hello");
		assert_eq!(merge_tables(std::slice::from_ref(&table)), table);
	}

	#[test]
	fn sums_per_character() {
		let merged = merge_tables(&tables());
		assert_eq!(merged, FrequencyTable::from_sequence("aabCbbzCaz"));
		assert_eq!(merged.get('a'), 3);
		assert_eq!(merged.get('b'), 3);
		assert_eq!(merged.get('C'), 2);
		assert_eq!(merged.get('z'), 2);
	}

	#[test]
	fn order_does_not_matter() {
		let forward = tables();
		let expected = merge_tables(&forward);

		let mut reversed = forward.clone();
		reversed.reverse();
		assert_eq!(merge_tables(&reversed), expected);

		let mut rotated = forward.clone();
		rotated.rotate_left(1);
		assert_eq!(merge_tables(&rotated), expected);

		let mut swapped = forward;
		swapped.swap(0, 3);
		assert_eq!(merge_tables(&swapped), expected);
	}

	#[test]
	fn grouping_does_not_matter() {
		let all = tables();
		let left = merge_tables(&[merge_tables(&all[..2]), merge_tables(&all[2..])]);
		assert_eq!(left, merge_tables(&all));
	}

	#[test]
	fn more_than_three_tables() {
		let many: Vec<_> = (0..10).map(|_| FrequencyTable::from_sequence("ab")).collect();
		let merged = merge_tables(&many);
		assert_eq!(merged.get('a'), 10);
		assert_eq!(merged.get('b'), 10);
	}
}
