use std::process;

use clap::Parser;
use problem_set_kit::cli::{args::Args, commands};

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    let result = commands::run(args);
    let input_error = matches!(&result, Err(e) if e.is_input_error());

    match result.map_err(anyhow::Error::from) {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            if input_error {
                eprintln!("Hint: run `problem-set check <SET> <FILE> --lenient` to see how far the file parses");
            }
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Problem-Set Toolkit - algorithm exercise grader");
    println!("===============================================");
    println!();
    println!("Runs the built-in algorithms over problem-set files and grades the");
    println!("answers against the reference answers stored in each file.");
    println!();
    println!("USAGE:");
    println!("    problem-set <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    grade           Grade a problem set (interval-scheduling, independent-set, prize-collector)");
    println!("    check           Parse a problem-set file and print statistics");
    println!("    normalize       Rewrite a problem-set file in canonical form");
    println!("    demo            Run the built-in algorithm examples");
    println!("    replace-spaces  Replace whitespace with dashes in a text file");
    println!("    help            Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Grade the interval scheduling set from data/intervals.in:");
    println!("    problem-set grade interval-scheduling");
    println!();
    println!("    # Grade a custom file and save the answers:");
    println!("    problem-set grade prize-collector -i my_set.in -o results.out");
    println!();
    println!("For detailed help on any command, use:");
    println!("    problem-set <COMMAND> --help");
}
