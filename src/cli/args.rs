//! Command-line argument definitions for the problem-set tool
//!
//! This module defines the CLI interface using the clap derive API.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::app::problem_sets::ProblemSetKind;

/// CLI arguments for the problem-set tool
///
/// Grades algorithm exercises stored in problem-set files, checks and
/// rewrites those files, and runs the built-in algorithm demonstrations.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "problem-set",
    version,
    about = "Grade algorithm problem sets stored in structured text files",
    long_about = "Reads problem-set files made of a header section and a `data:` list of \
                  problems, runs the matching algorithm on every problem, compares the answers \
                  with the reference answers and reports mistakes and running time."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Path to configuration file
    ///
    /// YAML configuration file. If not specified, looks for
    /// ~/.config/problem-set/config.yaml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        global = true,
        help = "Path to configuration file (YAML format)"
    )]
    pub config_file: Option<PathBuf>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Run an algorithm over a problem set and grade the answers
    Grade(GradeArgs),
    /// Parse a problem-set file and print statistics
    Check(CheckArgs),
    /// Parse a problem-set file and write it back in canonical form
    Normalize(NormalizeArgs),
    /// Run the built-in algorithm examples
    Demo,
    /// Replace whitespace with dashes, line by line
    ReplaceSpaces(ReplaceSpacesArgs),
}

/// Arguments for the grade command
#[derive(Debug, Clone, Parser)]
pub struct GradeArgs {
    /// Problem set to grade
    #[arg(value_name = "SET", help = "interval-scheduling, independent-set or prize-collector")]
    pub set: ProblemSetKind,

    /// Input file; defaults to the set's file inside the data directory
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Write graded answers to this results file
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Grade whatever parsed before the first malformed line
    #[arg(long = "lenient", help = "Do not fail on malformed lines")]
    pub lenient: bool,

    /// Write columns that still hold their default value
    #[arg(long = "write-defaults")]
    pub write_defaults: bool,

    /// Output format for the grading report
    #[arg(long = "format", value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Never show a progress bar
    #[arg(long = "no-progress")]
    pub no_progress: bool,
}

/// Arguments for the check command
#[derive(Debug, Clone, Parser)]
pub struct CheckArgs {
    #[arg(value_name = "SET")]
    pub set: ProblemSetKind,

    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Report the first malformed line instead of failing
    #[arg(long = "lenient")]
    pub lenient: bool,

    #[arg(long = "format", value_enum, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for the normalize command
#[derive(Debug, Clone, Parser)]
pub struct NormalizeArgs {
    #[arg(value_name = "SET")]
    pub set: ProblemSetKind,

    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Output file; prints to stdout when omitted
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    #[arg(long = "write-defaults")]
    pub write_defaults: bool,
}

/// Arguments for the replace-spaces command
#[derive(Debug, Clone, Parser)]
pub struct ReplaceSpacesArgs {
    #[arg(value_name = "IN")]
    pub input: PathBuf,

    #[arg(value_name = "OUT")]
    pub output: PathBuf,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Get the log level based on verbosity and quiet flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }

        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
