use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{debug, info};

use crate::error::AnalyzerError;

/// Reads a text file and returns its whole content as a `String`.
///
/// - Any failure to open the file (missing, directory, permission) is `NotFound`
/// - A failure while reading, including invalid UTF-8, is `IoFailure`
pub fn load_text<P: AsRef<Path>>(filename: P) -> Result<String, AnalyzerError> {
	let path = filename.as_ref();
	let mut file = File::open(path).map_err(|e| {
		debug!("cannot open {}: {}", path.display(), e);
		AnalyzerError::NotFound { path: path.to_path_buf() }
	})?;

	// A directory opens fine on unix but fails on read, report it as not found
	if file.metadata().map(|m| m.is_dir()).unwrap_or(false) {
		return Err(AnalyzerError::NotFound { path: path.to_path_buf() });
	}

	let mut contents = String::new();
	file.read_to_string(&mut contents)
		.map_err(|source| AnalyzerError::IoFailure { path: path.to_path_buf(), source })?;
	Ok(contents)
}

/// Keeps only `A`-`Z` and `a`-`z`, in order and with their case.
///
/// Example:
/// `"abBA!! 12"` → `"abBA"`
pub fn strip_alphabetic(text: &str) -> String {
	text.chars().filter(char::is_ascii_alphabetic).collect()
}

/// Loads a file and strips it down to its Latin letters.
///
/// This is the single derivation shared by the counter and the partitioner.
pub fn load_alphabetic<P: AsRef<Path>>(filename: P) -> Result<String, AnalyzerError> {
	let text = load_text(&filename)?;
	let stripped = strip_alphabetic(&text);
	info!(
		"loaded {}: {} characters, {} alphabetic",
		filename.as_ref().display(),
		text.chars().count(),
		stripped.len()
	);
	Ok(stripped)
}
