//! `charfreq` — Counts the Latin letters of a text file and verifies the
//! count through a random three-way split and merge.
//!
//! **Usage:**
//! ```text
//! charfreq --file-path path/to/HadoopBlurb.txt
//! ```
//!
//! **Environment:**
//! - `CHARFREQ_SEED`: seed the random split (reproducible output)
//! - `CHARFREQ_WORKERS`: number of partition workers, or `auto`
//! - `RUST_LOG`: log verbosity (logs go to stderr)

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use charfreq_core::{AnalysisInput, Analyzer};
use clap::Parser;
use log::debug;

/// Character count from file.
#[derive(Parser)]
#[command(name = "charfreq", about = "Character count from file")]
struct Args {
    /// Path to the text file.
    #[arg(long)]
    file_path: PathBuf,
}

/// Builds the run configuration from the environment.
fn analysis_input() -> Result<AnalysisInput> {
    let mut input = AnalysisInput::new();

    if let Ok(seed) = env::var("CHARFREQ_SEED") {
        let seed = seed
            .trim()
            .parse::<u64>()
            .with_context(|| format!("CHARFREQ_SEED must be an unsigned integer, got '{}'", seed))?;
        input.seed = Some(seed);
    }

    if let Ok(workers) = env::var("CHARFREQ_WORKERS") {
        let workers = match workers.trim() {
            "auto" => num_cpus::get(),
            value => value
                .parse::<usize>()
                .with_context(|| format!("CHARFREQ_WORKERS must be a positive integer or 'auto', got '{}'", value))?,
        };
        input.set_workers(workers)?;
    }

    debug!("analysis input: {:?}", input);
    Ok(input)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let analyzer = Analyzer::new(analysis_input()?);
    let report = analyzer.run(&args.file_path)?;

    print!("{}", report.render()?);

    // Non-zero exit status when the merged table does not match
    report.verdict.ensure_passed()?;
    Ok(())
}
