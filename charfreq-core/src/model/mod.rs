//! Top-level module for the character frequency pipeline.
//!
//! This module provides:
//! - Character frequency tables and the single-pass counter (`FrequencyTable`)
//! - Random three-way partitioning of occurrences (`partitioner`)
//! - Merging of any number of tables (`merger`)
//! - Verification of a merged table against the direct count (`equivalence`)
//! - Run configuration (`AnalysisInput`) and orchestration (`Analyzer`)

/// Case-sensitive character occurrence counts.
///
/// Handles counting, pairwise merging, and summaries (distinct keys,
/// total, most frequent character with a deterministic tie-break).
pub mod frequency_table;

/// Random distribution of occurrences into a partition set.
///
/// Exposes the injectable `BucketSource` trait, the default
/// `rand`-backed source, and a multi-threaded variant.
pub mod partitioner;

/// Summation of a list of tables into one.
pub mod merger;

/// Comparison of a candidate table against a reference table.
pub mod equivalence;

/// Parameters of an analysis run (seed, workers, verification mode).
pub mod analysis_input;

/// High-level pipeline and its report.
pub mod analyzer;
