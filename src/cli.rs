use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    /// Human-readable colored output
    Terminal,
    /// Machine-readable JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "coogle")]
#[command(about = "Semantic search for C/C++ function signatures", long_about = None)]
#[command(version)]
pub struct Cli {
    /// File or directory to search
    pub path: PathBuf,

    /// Signature pattern, e.g. "int(int, char *)"; `*` matches any single
    /// argument
    pub pattern: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal")]
    pub format: FormatArg,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Languages to search (c, cpp)
    #[arg(long, value_delimiter = ',')]
    pub languages: Option<Vec<String>>,

    /// Glob patterns for files to skip
    #[arg(long = "ignore", value_delimiter = ',')]
    pub ignore_patterns: Vec<String>,

    /// Disable parallel file analysis
    #[arg(long)]
    pub no_parallel: bool,

    /// Increase verbosity (can be repeated: -v, -vv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}
