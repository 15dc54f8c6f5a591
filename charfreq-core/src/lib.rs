//! Character frequency analysis library.
//!
//! This crate counts the Latin letters of a text and checks the count
//! against a randomized round trip:
//! - Text loading and stripping to `A`-`Z` / `a`-`z`
//! - Single-pass character counting
//! - Random three-way partitioning of every occurrence
//! - Merging of the partitions and verification against the direct count
//!
//! The `Analyzer` runs the whole pipeline and returns a renderable report.

/// Frequency tables, partitioning, merging, verification and orchestration.
pub mod model;

/// Text loading and filtering.
pub mod io;

/// Error type shared by every stage.
pub mod error;

pub use error::{AnalyzerError, Mismatch};
pub use model::analysis_input::AnalysisInput;
pub use model::analyzer::{AnalysisReport, Analyzer, TableSummary};
pub use model::equivalence::{EquivalenceMode, Verdict, check_equivalence};
pub use model::frequency_table::FrequencyTable;
pub use model::merger::merge_tables;
pub use model::partitioner::{BucketSource, PARTITION_COUNT, PartitionSet, RandomBuckets, partition};
