//! Grading glue for problem sets
//!
//! Validates a parsed problem set, times the algorithm under test, tallies
//! mismatching answers and renders the outcome for the console or as JSON.

pub mod grader;
pub mod report;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use grader::{GradingReport, Mistake, preprocess_problem_set, process_results};
pub use report::{render_human, render_json};
