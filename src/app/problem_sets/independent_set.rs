//! Maximum-weight independent set problem set

use super::ProblemSet;
use crate::app::models::{BasicProblem, GradedProblem};
use crate::app::services::algorithms::max_independent_set_bottom_up;
use crate::app::services::record_table::TableSchema;
use crate::constants::INDEPENDENT_SET_INPUT;
use crate::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndependentSetProblem {
    pub basic: BasicProblem,
    pub weights: Vec<i32>,
}

impl GradedProblem for IndependentSetProblem {
    fn basic(&self) -> &BasicProblem {
        &self.basic
    }

    fn basic_mut(&mut self) -> &mut BasicProblem {
        &mut self.basic
    }
}

pub struct IndependentSet;

impl ProblemSet for IndependentSet {
    type Problem = IndependentSetProblem;

    const NAME: &'static str = "independent-set";
    const FRAMEWORK_VERSION: u32 = 110;
    const EXPECTED_ID: Option<i32> = None;
    const DEFAULT_INPUT: &'static str = INDEPENDENT_SET_INPUT;

    fn add_columns(schema: &mut TableSchema<Self::Problem>) {
        schema.add_column("weights", |p| &p.weights, |p| &mut p.weights);
    }

    fn solve(problem: &Self::Problem) -> Result<i32> {
        if problem.weights.iter().any(|&w| w < 0) {
            return Err(Error::precondition(format!(
                "Problem #{} has a negative weight. Please, check the input file.",
                problem.basic.id
            )));
        }
        max_independent_set_bottom_up(&problem.weights).ok_or_else(|| {
            Error::precondition(format!(
                "Problem #{} overflows the weight sum. Please, check the input file.",
                problem.basic.id
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve() {
        let problem = IndependentSetProblem {
            weights: vec![53, 77, 102, 76, 65, 1, 1, 1],
            ..Default::default()
        };
        assert_eq!(IndependentSet::solve(&problem).unwrap(), 178);
    }

    #[test]
    fn test_negative_weight_is_rejected() {
        let mut problem = IndependentSetProblem {
            weights: vec![3, -1],
            ..Default::default()
        };
        problem.basic.id = 4;

        let error = IndependentSet::solve(&problem).unwrap_err();
        assert!(error.to_string().starts_with("Problem #4 has a negative weight"));
    }

    #[test]
    fn test_weight_sum_overflow_is_rejected() {
        let mut problem = IndependentSetProblem {
            weights: vec![i32::MAX, 0, i32::MAX],
            ..Default::default()
        };
        problem.basic.id = 2;

        let error = IndependentSet::solve(&problem).unwrap_err();
        assert!(matches!(error, Error::Precondition { .. }));
        assert!(error.to_string().starts_with("Problem #2 overflows the weight sum"));
    }
}
