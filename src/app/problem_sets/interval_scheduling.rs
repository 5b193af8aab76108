//! Interval scheduling problem set
//!
//! Each problem lists job endpoints as two parallel lists, `left` and
//! `right`; the answer is the maximum number of non-overlapping jobs.

use super::ProblemSet;
use crate::app::models::{BasicProblem, GradedProblem, Job};
use crate::app::services::algorithms::max_schedule_count;
use crate::app::services::record_table::TableSchema;
use crate::constants::{INTERVAL_SCHEDULING_INPUT, INTERVAL_SCHEDULING_SET_ID};
use crate::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntervalSchedulingProblem {
    pub basic: BasicProblem,
    pub left: Vec<i32>,
    pub right: Vec<i32>,
}

impl GradedProblem for IntervalSchedulingProblem {
    fn basic(&self) -> &BasicProblem {
        &self.basic
    }

    fn basic_mut(&mut self) -> &mut BasicProblem {
        &mut self.basic
    }
}

/// Pair up endpoint lists into jobs
pub fn jobs_from_endpoints(left: &[i32], right: &[i32]) -> Result<Vec<Job>> {
    if left.len() != right.len() {
        return Err(Error::precondition(
            "Invalid data. Arrays of the left and right endpoints have different sizes.",
        ));
    }

    left.iter()
        .zip(right)
        .map(|(&start, &finish)| {
            if finish < start {
                Err(Error::precondition(
                    "Left endpoint is greater than the right endpoint. Please, check the input file.",
                ))
            } else {
                Ok(Job::new(start, finish))
            }
        })
        .collect()
}

pub struct IntervalScheduling;

impl ProblemSet for IntervalScheduling {
    type Problem = IntervalSchedulingProblem;

    const NAME: &'static str = "interval-scheduling";
    const FRAMEWORK_VERSION: u32 = 110;
    const EXPECTED_ID: Option<i32> = Some(INTERVAL_SCHEDULING_SET_ID);
    const DEFAULT_INPUT: &'static str = INTERVAL_SCHEDULING_INPUT;

    fn add_columns(schema: &mut TableSchema<Self::Problem>) {
        schema.add_column("left", |p| &p.left, |p| &mut p.left);
        schema.add_column("right", |p| &p.right, |p| &mut p.right);
    }

    fn solve(problem: &Self::Problem) -> Result<i32> {
        let jobs = jobs_from_endpoints(&problem.left, &problem.right)?;
        Ok(max_schedule_count(&jobs))
    }
}
