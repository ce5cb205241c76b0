use crate::report::Language;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "fitcalc",
    about = "Print distance, speed and calories for fitness-tracker workout packages"
)]
pub struct Cli {
    /// JSON file with packages, e.g. `[["RUN", [15000, 1, 75]]]`.
    ///
    /// Default: the built-in sample packages.
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Language of the report lines
    #[arg(long, value_enum, default_value_t = Language::En)]
    pub lang: Language,

    /// Log and skip failing packages instead of aborting the batch
    #[arg(long)]
    pub skip_invalid: bool,

    /// More log detail on stderr: -v adds per-package debug lines, -vv everything
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Less log detail on stderr: -q hides the batch summary, -qq also skip warnings
    #[arg(short = 'q', long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}
