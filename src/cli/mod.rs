use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "callertree")]
#[command(author, version, about = "Reverse call tree of a function across a repository", long_about = None)]
pub struct Cli {
    /// Root directory of the repository to analyse
    pub repo_path: PathBuf,

    /// Function or method whose callers are traced (only the first line is used)
    pub function_name: String,

    /// Accepted for compatibility; not used when building a reverse tree
    pub file_path: Option<PathBuf>,

    /// Source language (python, go, c, cpp, csharp, java, javascript, ...)
    #[arg(short, long, default_value = "python")]
    pub language: String,

    /// Print the graph on a single line
    #[arg(long)]
    pub compact: bool,

    /// Write the graph to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// First line of the function name, trimmed.
    pub fn symbol(&self) -> &str {
        self.function_name.lines().next().unwrap_or("").trim()
    }

    pub fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else if self.quiet {
            Level::WARN
        } else {
            Level::INFO
        }
    }
}
