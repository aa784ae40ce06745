use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use triage_classifiers::MatchStrategy;

#[derive(Parser, Debug)]
#[command(name = "triage")]
#[command(
    author,
    version,
    about = "Classify citizen issue reports and route them to departments"
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Keyword table (YAML, or JSON by extension); defaults to the built-in table
    #[arg(short, long, global = true, env = "TRIAGE_KEYWORDS")]
    pub config: Option<PathBuf>,

    /// Override the table's matching strategy
    #[arg(short, long, global = true, value_enum)]
    pub strategy: Option<StrategyArg>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify a description and print the department
    Classify {
        /// Description text; multiple arguments are joined with spaces
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        /// Print per-department scores
        #[arg(long)]
        scores: bool,
    },

    /// Auto-assign departments across a JSON array of reports
    Triage {
        /// Reports file
        input: PathBuf,

        /// Write updated reports here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the active keyword table as YAML
    Keywords,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyArg {
    /// Match keywords inside each whitespace token
    Tokenized,
    /// Match keywords against the whole normalized description
    WholeText,
}

impl From<StrategyArg> for MatchStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Tokenized => MatchStrategy::Tokenized,
            StrategyArg::WholeText => MatchStrategy::WholeText,
        }
    }
}
