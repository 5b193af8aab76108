//! Data models for problem-set grading
//!
//! This module contains the header record every problem-set file starts with,
//! the fields shared by every problem record, and the column registration
//! helpers that bind them to document keys.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::app::services::record_table::TableSchema;
use crate::constants::{header_columns, problem_columns};

// =============================================================================
// Problem-Set Header
// =============================================================================

/// Header section of a problem-set file
///
/// `time` and `test_mistakes` are outputs: they are filled in by grading and
/// written back into the results document.
#[derive(Debug, Clone, PartialEq)]
pub struct ProblemSetHeader {
    /// Problem-set number (`problem_set_number`)
    pub id: i32,

    /// Declared number of problems (`problems`)
    pub problem_count: i32,

    /// Number of wrong answers after grading
    pub test_mistakes: i32,

    /// Grading time in milliseconds
    pub time: i32,

    /// Set when preprocessing accepted the problem set
    pub start_timestamp: Option<Instant>,
}

impl Default for ProblemSetHeader {
    fn default() -> Self {
        Self {
            id: -1,
            problem_count: -1,
            test_mistakes: -1,
            time: -1,
            start_timestamp: None,
        }
    }
}

// =============================================================================
// Problems
// =============================================================================

/// Fields every graded problem carries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicProblem {
    /// 1-based problem number (`problem`)
    pub id: i32,

    pub correct_answer: i32,

    /// Answer produced by the algorithm under test
    pub student_answer: i32,

    /// Optional hint shown next to a wrong answer (`msg`)
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub help_msg: String,
}

impl BasicProblem {
    pub fn is_correct(&self) -> bool {
        self.student_answer == self.correct_answer
    }
}

/// Access to the [`BasicProblem`] embedded in a concrete problem record
pub trait GradedProblem {
    fn basic(&self) -> &BasicProblem;

    fn basic_mut(&mut self) -> &mut BasicProblem;
}

impl GradedProblem for BasicProblem {
    fn basic(&self) -> &BasicProblem {
        self
    }

    fn basic_mut(&mut self) -> &mut BasicProblem {
        self
    }
}

/// A job occupying the half-open time range `[start, finish)`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub start: i32,
    pub finish: i32,
}

impl Job {
    pub fn new(start: i32, finish: i32) -> Self {
        Self { start, finish }
    }
}

// =============================================================================
// Column Registration
// =============================================================================

/// Register `problem_set_number`, `problems`, `time` and `test_mistakes`
pub fn add_default_problem_set_columns(schema: &mut TableSchema<ProblemSetHeader>) {
    schema.add_column(header_columns::PROBLEM_SET_NUMBER, |h| &h.id, |h| &mut h.id);
    schema.add_column(header_columns::PROBLEMS, |h| &h.problem_count, |h| &mut h.problem_count);
    schema.add_column(header_columns::TIME, |h| &h.time, |h| &mut h.time);
    schema.add_column(header_columns::TEST_MISTAKES, |h| &h.test_mistakes, |h| &mut h.test_mistakes);
}

/// Register the input columns shared by every problem: `problem`,
/// `correct_answer` and `msg`
pub fn add_default_problem_columns<T: GradedProblem + 'static>(schema: &mut TableSchema<T>) {
    schema.add_column(problem_columns::PROBLEM, |p| &p.basic().id, |p| &mut p.basic_mut().id);
    schema.add_column(
        problem_columns::CORRECT_ANSWER,
        |p| &p.basic().correct_answer,
        |p| &mut p.basic_mut().correct_answer,
    );
    schema.add_column(problem_columns::MESSAGE, |p| &p.basic().help_msg, |p| &mut p.basic_mut().help_msg);
}

/// Register the columns written to a results file: `problem` and
/// `student_answer`
pub fn add_default_problem_columns_for_output<T: GradedProblem + 'static>(schema: &mut TableSchema<T>) {
    schema.add_column(problem_columns::PROBLEM, |p| &p.basic().id, |p| &mut p.basic_mut().id);
    schema.add_column(
        problem_columns::STUDENT_ANSWER,
        |p| &p.basic().student_answer,
        |p| &mut p.basic_mut().student_answer,
    );
}

/// Schema for the problem-set header with every default column registered
pub fn problem_set_schema() -> TableSchema<ProblemSetHeader> {
    let mut schema = TableSchema::new();
    add_default_problem_set_columns(&mut schema);
    schema
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::services::record_table::{Segment, Table, VecTable};

    #[derive(Debug, Default)]
    struct WeightedProblem {
        basic: BasicProblem,
        weights: Vec<i32>,
    }

    impl GradedProblem for WeightedProblem {
        fn basic(&self) -> &BasicProblem {
            &self.basic
        }

        fn basic_mut(&mut self) -> &mut BasicProblem {
            &mut self.basic
        }
    }

    #[test]
    fn test_header_defaults_are_unset_markers() {
        let header = ProblemSetHeader::default();
        assert_eq!(header.id, -1);
        assert_eq!(header.problem_count, -1);
        assert_eq!(header.time, -1);
        assert_eq!(header.test_mistakes, -1);
        assert!(header.start_timestamp.is_none());
    }

    #[test]
    fn test_problem_set_schema_columns() {
        let schema = problem_set_schema();
        let names: Vec<&str> = (0..schema.column_count())
            .filter_map(|c| schema.column_name(c))
            .collect();
        assert_eq!(names, vec!["problem_set_number", "problems", "time", "test_mistakes"]);
    }

    #[test]
    fn test_problem_columns_reach_embedded_fields() {
        let mut schema: TableSchema<WeightedProblem> = TableSchema::new();
        add_default_problem_columns(&mut schema);
        assert!(schema.add_column("weights", |p| &p.weights, |p| &mut p.weights));

        let mut rows: Vec<WeightedProblem> = Vec::new();
        let mut table = VecTable::with_schema(&mut rows, schema);
        let row = table.new_row().unwrap();
        table.set_value_by_name(row, "problem", Segment::new("1")).unwrap();
        table.set_value_by_name(row, "correct_answer", Segment::new("42")).unwrap();
        table.set_value_by_name(row, "msg", Segment::new("\"hint\"")).unwrap();
        table.set_value_by_name(row, "weights", Segment::new("[3,4]")).unwrap();

        assert_eq!(rows[0].basic.id, 1);
        assert_eq!(rows[0].basic.correct_answer, 42);
        assert_eq!(rows[0].basic.help_msg, "hint");
        assert_eq!(rows[0].weights, vec![3, 4]);
    }

    #[test]
    fn test_output_columns() {
        let mut schema: TableSchema<BasicProblem> = TableSchema::new();
        add_default_problem_columns_for_output(&mut schema);
        assert_eq!(schema.column_by_name("student_answer"), Some(1));
        assert_eq!(schema.column_by_name("correct_answer"), None);
    }

    #[test]
    fn test_basic_problem_correctness() {
        let mut problem = BasicProblem {
            id: 1,
            correct_answer: 5,
            student_answer: 4,
            help_msg: String::new(),
        };
        assert!(!problem.is_correct());
        problem.basic_mut().student_answer = 5;
        assert!(problem.is_correct());
    }
}
