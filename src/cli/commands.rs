//! Command implementations for the problem-set CLI
//!
//! This module contains the command execution logic, report output and
//! logging setup for the CLI interface.

use std::fs::File;
use std::io::{BufReader, BufWriter};

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use crate::app::models::Job;
use crate::app::problem_sets::GradeOptions;
use crate::app::services::algorithms::{
    max_independent_set_bottom_up, max_independent_set_top_down, max_prize_path, max_prize_path_top_down,
    max_schedule_count, replace_spaces_in_stream,
};
use crate::app::services::document::ErrorMode;
use crate::app::services::grading::{render_human, render_json};
use crate::cli::args::{Args, CheckArgs, Commands, GradeArgs, NormalizeArgs, OutputFormat, ReplaceSpacesArgs};
use crate::config::Config;
use crate::{Error, Result};

/// Main command runner
///
/// Sets up logging, loads the layered configuration and dispatches to the
/// selected subcommand.
pub fn run(args: Args) -> Result<()> {
    setup_logging(&args)?;
    debug!("Command line arguments: {:?}", args);

    let config = load_configuration(&args)?;
    debug!("Loaded configuration: {:?}", config);

    match &args.command {
        Some(Commands::Grade(grade)) => run_grade(&config, grade, args.quiet),
        Some(Commands::Check(check)) => run_check(&config, check),
        Some(Commands::Normalize(normalize)) => run_normalize(&config, normalize),
        Some(Commands::Demo) => run_demo(),
        Some(Commands::ReplaceSpaces(rs)) => run_replace_spaces(rs),
        None => Err(Error::configuration("No command given")),
    }
}

/// Set up structured logging on stderr
fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("problem_set_kit={}", log_level)));

    let result = if args.quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    result.map_err(|e| Error::configuration(format!("Failed to initialize logging: {}", e)))?;
    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using layered approach (file -> env)
fn load_configuration(args: &Args) -> Result<Config> {
    let default_config_path = if args.config_file.is_none() {
        Config::default_config_path().ok()
    } else {
        None
    };

    let config_file = match &args.config_file {
        Some(path) => Some(path.as_path()),
        None => default_config_path
            .as_ref()
            .filter(|path| path.exists())
            .map(|path| path.as_path()),
    };

    if let Some(config_path) = config_file {
        info!("Using config file: {}", config_path.display());
    } else {
        debug!("No config file found, using defaults and environment variables");
    }

    let config = Config::load_layered(config_file)?;
    config.validate()?;
    Ok(config)
}

fn error_mode(lenient: bool, config: &Config) -> ErrorMode {
    if lenient || !config.strict_parsing {
        ErrorMode::Silent
    } else {
        ErrorMode::Strict
    }
}

fn run_grade(config: &Config, args: &GradeArgs, quiet: bool) -> Result<()> {
    let input = args
        .input
        .clone()
        .unwrap_or_else(|| config.input_path(args.set.default_input()));

    let progress = (config.show_progress && !args.no_progress && !quiet && args.format == OutputFormat::Human)
        .then(create_progress_bar);

    let options = GradeOptions {
        error_mode: error_mode(args.lenient, config),
        results_path: args.output.clone(),
        write_defaults: args.write_defaults || config.write_default_values,
        results_comment: Some(results_comment(config, &args.set.to_string())),
        progress,
    };

    let outcome = args.set.grade(&input, &options)?;

    match args.format {
        OutputFormat::Human => {
            if !quiet {
                println!();
                print!("{}", render_human(&outcome.report));
                if let Some(path) = &outcome.results_path {
                    println!("{} {}", "Results written to".bright_cyan(), path.display());
                }
                println!();
            }
        }
        OutputFormat::Json => println!("{}", render_json(&outcome.report)?),
    }

    Ok(())
}

fn create_progress_bar() -> ProgressBar {
    let pb = ProgressBar::new(0);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} problems")
    {
        pb.set_style(style.progress_chars("#>-"));
    }
    pb
}

/// Configured comment lines followed by a timestamp line
fn results_comment(config: &Config, set_name: &str) -> String {
    let mut comment = String::new();
    if let Some(configured) = &config.results_comment {
        comment.push_str(configured.trim_end());
        comment.push('\n');
    }
    comment.push_str(&format!(
        "# {} results generated {}\n",
        set_name,
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    ));
    comment
}

fn run_check(config: &Config, args: &CheckArgs) -> Result<()> {
    let (stats, parse_error) = args.set.check(&args.input, error_mode(args.lenient, config))?;

    match args.format {
        OutputFormat::Human => {
            println!("{} {}", "Checked".bright_green().bold(), args.input.display());
            println!("  {} {}", "Lines read:".bright_cyan(), stats.lines_read);
            println!("  {} {}", "Comment lines:".bright_cyan(), stats.comment_lines);
            println!("  {} {}", "Header fields:".bright_cyan(), stats.header_fields_set);
            println!("  {} {}", "Problems:".bright_cyan(), stats.rows_appended);
            println!("  {} {}", "Problem fields:".bright_cyan(), stats.data_fields_set);
            if let Some(error) = &parse_error {
                println!("  {} {}", "Stopped at:".bright_red(), error);
            }
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "file": args.input.display().to_string(),
                "problem_set": args.set.to_string(),
                "stats": stats,
                "error": parse_error.map(|e| e.to_string()),
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }

    Ok(())
}

fn run_normalize(config: &Config, args: &NormalizeArgs) -> Result<()> {
    let write_defaults = args.write_defaults || config.write_default_values;
    let text = args
        .set
        .normalize(&args.input, args.output.as_deref(), write_defaults)?;

    match &args.output {
        Some(path) => info!("Normalized {} into {}", args.input.display(), path.display()),
        None => print!("{}", text),
    }
    Ok(())
}

/// Long independent-set instance shown by the demo
const LONG_WEIGHTS: &[i32] = &[
    74, 1, 1, 63, 61, 63, 1, 1, 93, 94, 95, 98, 1, 121, 93, 1, 97, 1, 1, 1, 135, 1, 107, 1, 135, 1, 1, 1, 110, 160,
    149, 1, 116, 1, 1, 1, 125, 138, 142, 165, 2, 166, 170, 157, 2, 2, 190, 2, 2, 2, 172, 165, 160, 180, 207, 198, 2,
    174, 2, 204, 209, 211, 3, 224, 211, 226, 185, 187, 3, 3, 3, 244, 227, 248, 208, 3, 3, 3, 228, 255, 4, 222, 217, 4,
    231, 252, 4, 235, 239, 4, 4, 4, 4, 242, 4, 4, 276, 248, 289, 5, 295, 5, 5, 5, 5, 266, 288, 5, 5, 315, 284, 281,
    312, 287, 324, 327, 5, 5, 289, 6, 6, 6, 343, 327, 307, 322, 331, 312, 349, 323, 6, 325, 6, 346, 6, 6, 332, 6, 370,
    359, 7, 353, 379, 351, 377, 7, 371, 385, 377, 7, 7, 7, 7, 370, 7, 411, 413, 7, 385, 8, 387, 8, 376, 8, 8, 429, 8,
    8, 429, 391, 398, 407, 433, 402, 8, 444, 8, 407, 452, 9, 447, 9, 457, 455, 9, 9, 9, 9, 453, 9, 437, 9, 9, 9, 9, 9,
    9, 450, 489, 486, 498, 10, 503, 473, 483, 10, 488, 10, 10, 506, 499, 10, 490, 10, 528, 10, 501, 525, 10, 11, 11,
    509, 11, 11, 11, 509, 11, 547, 11, 11, 11, 11, 519, 546, 528, 11, 564, 11, 534, 12, 12, 567, 12, 561, 562, 12, 548,
    12, 12, 12, 584, 563, 592, 12, 572, 586, 606, 598, 589, 13, 13, 583, 13, 606, 13, 595, 625, 13, 13, 13, 636, 630,
    599, 13, 622, 13, 13, 647, 13, 14, 14, 14, 627, 662, 636, 665, 14, 14, 643, 14, 678, 657, 681, 654, 14, 690, 648,
    14, 664, 15, 691, 680, 15, 659, 15, 679, 664, 683, 15, 15, 15, 15, 15, 697, 15, 15, 733, 708, 705, 735, 16, 16,
    696, 16, 16, 16, 16, 709, 16, 16, 743, 714, 755, 761, 16, 759, 16, 16, 738, 742, 744, 738, 17, 17, 17, 785, 17,
    782, 17, 763, 17, 17, 778, 806, 773, 17, 17, 786, 17, 797, 18, 805, 801, 18, 18, 812, 796, 18, 795, 18, 795, 833,
    797, 815, 801, 804, 18, 809, 849, 843, 19, 19, 834, 19, 846, 19, 19, 19, 838, 844, 19, 19, 840, 19, 19, 19, 19, 19,
    19, 20,
];

/// Job set of the classic interval scheduling exercise
const DEMO_JOBS: &[(i32, i32)] = &[
    (1, 4),
    (3, 5),
    (0, 6),
    (5, 7),
    (3, 9),
    (5, 9),
    (6, 10),
    (8, 11),
    (8, 12),
    (2, 14),
    (12, 16),
];

fn show_sum(sum: Option<i32>) -> String {
    sum.map_or_else(|| "overflow".to_string(), |value| value.to_string())
}

fn run_demo() -> Result<()> {
    println!("{}", "Maximum independent set on a line".bright_green().bold());
    let examples: [&[i32]; 5] = [
        &[],
        &[11, 10],
        &[100, 120, 21],
        &[53, 77, 102, 76, 65, 1, 1, 1],
        LONG_WEIGHTS,
    ];
    for (i, weights) in examples.iter().enumerate() {
        let shown = if weights.len() > 10 {
            format!("[{} weights]", weights.len())
        } else {
            format!("{:?}", weights)
        };
        println!(
            "  Example {}: {} -> bottom-up {}, top-down {}",
            i + 1,
            shown,
            show_sum(max_independent_set_bottom_up(weights)),
            show_sum(max_independent_set_top_down(weights))
        );
    }

    println!("\n{}", "Interval scheduling".bright_green().bold());
    let jobs: Vec<Job> = DEMO_JOBS
        .iter()
        .map(|&(start, finish)| Job::new(start, finish))
        .collect();
    println!("  {} jobs -> {} scheduled", jobs.len(), max_schedule_count(&jobs));

    println!("\n{}", "Prize-collecting path".bright_green().bold());
    let boards = [vec![vec![5]], vec![vec![1, 1], vec![1, 1]], vec![vec![1, 9, 1], vec![1, 9, 1], vec![1, 9, 1]]];
    for board in &boards {
        println!(
            "  {:?} -> bottom-up {}, top-down {}",
            board,
            show_sum(max_prize_path(board)),
            show_sum(max_prize_path_top_down(board))
        );
    }

    Ok(())
}

fn run_replace_spaces(args: &ReplaceSpacesArgs) -> Result<()> {
    let input = File::open(&args.input)
        .map_err(|e| Error::io(format!("Cannot open the input file '{}'", args.input.display()), e))?;
    let output = File::create(&args.output)
        .map_err(|e| Error::io(format!("Cannot open the output file '{}'", args.output.display()), e))?;

    let lines = replace_spaces_in_stream(BufReader::new(input), BufWriter::new(output))
        .map_err(|e| Error::io(format!("Failed to rewrite '{}'", args.input.display()), e))?;
    info!("Wrote {} lines to {}", lines, args.output.display());
    Ok(())
}
