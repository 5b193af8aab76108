//! Problem-set validation and result tallying
//!
//! Grading runs in two steps around the algorithm under test:
//! [`preprocess_problem_set`] checks the header against the parsed problems
//! and starts the clock, [`process_results`] stops it and counts the answers
//! that differ from the reference.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::app::models::{GradedProblem, ProblemSetHeader};
use crate::{Error, Result};

pub const WRONG_PROBLEM_SET: &str = "Wrong problem set. Check problem set number.";
pub const CORRUPTED_INPUT: &str = "Input file is corrupted.";

/// One wrong answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mistake {
    pub id: i32,
    pub correct_answer: i32,
    pub student_answer: i32,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub help_msg: String,
}

/// Outcome of grading one problem set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradingReport {
    /// Problem-set number from the header
    pub problem_set_id: i32,

    /// Problems graded
    pub problem_count: usize,

    /// Grading time in milliseconds
    pub time_ms: i32,

    /// Wrong answers in problem order
    pub mistakes: Vec<Mistake>,
}

impl GradingReport {
    pub fn mistake_count(&self) -> usize {
        self.mistakes.len()
    }

    pub fn is_clean(&self) -> bool {
        self.mistakes.is_empty()
    }

    pub fn solved_count(&self) -> usize {
        self.problem_count - self.mistakes.len()
    }
}

/// Validate a freshly parsed problem set and start the grading clock
///
/// `expected_id` is the problem-set number the grader was written for; `None`
/// accepts any number. The declared problem count must match the number of
/// rows, and problems must be numbered `1..=n` in file order.
pub fn preprocess_problem_set<T: GradedProblem>(
    expected_id: Option<i32>,
    problems: &[T],
    header: &mut ProblemSetHeader,
) -> Result<()> {
    if let Some(expected) = expected_id {
        if header.id != expected {
            debug!("Problem set number {} does not match {}", header.id, expected);
            return Err(Error::precondition(WRONG_PROBLEM_SET));
        }
    }

    if usize::try_from(header.problem_count).ok() != Some(problems.len()) {
        debug!(
            "Header declares {} problems, file has {}",
            header.problem_count,
            problems.len()
        );
        return Err(Error::precondition(CORRUPTED_INPUT));
    }

    for (index, problem) in problems.iter().enumerate() {
        let expected_number = i32::try_from(index + 1).ok();
        if Some(problem.basic().id) != expected_number {
            debug!("Problem at position {} is numbered {}", index + 1, problem.basic().id);
            return Err(Error::precondition(CORRUPTED_INPUT));
        }
    }

    header.start_timestamp = Some(Instant::now());
    info!("Problem set {} accepted with {} problems", header.id, problems.len());
    Ok(())
}

/// Stop the clock, count mistakes and record both in the header
///
/// Without a start timestamp the elapsed time is reported as zero.
pub fn process_results<T: GradedProblem>(problems: &[T], header: &mut ProblemSetHeader) -> GradingReport {
    let elapsed = header
        .start_timestamp
        .map(|start| start.elapsed().as_secs_f64())
        .unwrap_or_default();
    header.time = (elapsed * 1000.0).round() as i32;

    let mistakes: Vec<Mistake> = problems
        .iter()
        .map(|p| p.basic())
        .filter(|p| !p.is_correct())
        .map(|p| Mistake {
            id: p.id,
            correct_answer: p.correct_answer,
            student_answer: p.student_answer,
            help_msg: p.help_msg.clone(),
        })
        .collect();

    header.test_mistakes = mistakes.len() as i32;
    info!(
        "Graded {} problems in {}ms: {} mistake(s)",
        problems.len(),
        header.time,
        mistakes.len()
    );

    GradingReport {
        problem_set_id: header.id,
        problem_count: problems.len(),
        time_ms: header.time,
        mistakes,
    }
}
