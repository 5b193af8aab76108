//! Test utilities for grading

use crate::app::models::{BasicProblem, ProblemSetHeader};


/// Problems numbered `1..=answers.len()` with the given (correct, student) answers
pub fn problems(answers: &[(i32, i32)]) -> Vec<BasicProblem> {
    answers
        .iter()
        .enumerate()
        .map(|(i, &(correct, student))| BasicProblem {
            id: i as i32 + 1,
            correct_answer: correct,
            student_answer: student,
            help_msg: String::new(),
        })
        .collect()
}

pub fn header(id: i32, problem_count: i32) -> ProblemSetHeader {
    ProblemSetHeader {
        id,
        problem_count,
        ..Default::default()
    }
}
