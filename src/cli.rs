use std::path::PathBuf;

use clap::Parser;
use sortty::algorithms::AlgorithmId;
use sortty::engine::constants::{DEFAULT_ARRAY_LENGTH, DEFAULT_SPEED, MAX_SPEED, MIN_SPEED};

#[derive(Debug, Parser, Clone)]
#[command(name = "sortty")]
#[command(about = "Watch classic sorting and searching algorithms run in your terminal")]
pub struct Cli {
    /// Algorithm selected at startup (e.g. bubble-sort, quick-sort, binary-search).
    #[arg(long, short, default_value_t = AlgorithmId::default())]
    pub algorithm: AlgorithmId,

    /// Initial speed, 1 (slowest) to 100 (fastest).
    #[arg(long, short, default_value_t = DEFAULT_SPEED,
          value_parser = clap::value_parser!(u8).range(MIN_SPEED as i64..=MAX_SPEED as i64))]
    pub speed: u8,

    /// Value to look for when a searching algorithm is selected.
    #[arg(long, allow_hyphen_values = true)]
    pub search: Option<String>,

    /// Number of elements in each generated array.
    #[arg(long, short, default_value_t = DEFAULT_ARRAY_LENGTH)]
    pub length: usize,

    /// Seed for array generation, for reproducible runs.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Run once without the TUI and print every step to stdout.
    #[arg(long)]
    pub headless: bool,

    /// Where the TUI writes its log (defaults to sortty.log in the temp dir).
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("sortty.log"))
    }
}
