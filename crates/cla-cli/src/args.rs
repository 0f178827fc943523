use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the cla binary.
#[derive(Parser, Debug)]
#[command(
    name = "cla",
    version,
    about = "Checks that Python instance attributes are first assigned in the class body, __init__, or __post_init__"
)]
pub struct CliArgs {
    /// Files or directories to check. Directories are searched recursively
    /// for *.py files.
    #[arg(value_name = "PATH", default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Output format for diagnostics.
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// List the rules this checker declares, then exit.
    #[arg(long = "list-rules")]
    pub list_rules: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}
