use std::path::PathBuf;

use clap::builder::RangedU64ValueParser;
use clap::Parser;
use reduction_kernel::PbSize;

pub const DEFAULT_PROBLEM_SIZE: PbSize = 1_000_000;
pub const DEFAULT_REPEATS: usize = 10;
pub const DEFAULT_WARMUP: usize = 1;

/// Time the sequential sum of `0..n`.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "reduction-bench")]
pub struct RunConfig {
    /// Number of terms to sum.
    #[arg(short = 'n', long = "problemsize", default_value_t = DEFAULT_PROBLEM_SIZE)]
    pub problem_size: PbSize,

    /// Measured iterations.
    #[arg(
        long,
        default_value_t = DEFAULT_REPEATS,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub repeats: usize,

    /// Unmeasured iterations before timing starts.
    #[arg(long, default_value_t = DEFAULT_WARMUP)]
    pub warmup: usize,

    /// Check the result against n*(n-1)/2.
    #[arg(long)]
    pub verify: bool,

    /// Write verified arrays to this file. Implies --verify.
    #[arg(long, value_name = "PATH")]
    pub verify_file: Option<PathBuf>,
}

impl RunConfig {
    pub fn verify_enabled(&self) -> bool {
        self.verify || self.verify_file.is_some()
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            problem_size: DEFAULT_PROBLEM_SIZE,
            repeats: DEFAULT_REPEATS,
            warmup: DEFAULT_WARMUP,
            verify: false,
            verify_file: None,
        }
    }
}
