//! Command-line arguments.

use clap::Parser;
use std::path::PathBuf;

/// Classify Python package filenames by project, version and package type.
///
/// Each result is printed to stdout as one JSON object per line. The exit
/// status is 1 if any filename could not be classified.
#[derive(Parser, Debug)]
#[command(name = "simple-classify")]
#[command(author, version, about)]
pub struct Args {
    /// Expected project name, used to split ambiguous filenames
    #[arg(long, value_name = "NAME")]
    pub hint: Option<String>,

    /// JSON file with parser settings
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// PEP 691 project detail JSON whose files are classified
    #[arg(long, value_name = "PATH")]
    pub project_json: Option<PathBuf>,

    /// Base URL for relative file URLs in --project-json
    #[arg(long, value_name = "URL", requires = "project_json")]
    pub base_url: Option<String>,

    /// Increase log verbosity on stderr (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Filenames to classify
    #[arg(value_name = "FILENAME")]
    pub filenames: Vec<String>,
}

impl Args {
    /// Log filter used when `RUST_LOG` is not set.
    pub fn default_log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}
