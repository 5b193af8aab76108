//! Prize-collecting path problem set
//!
//! Boards are stored row-major in a single `prizes` list whose length must be
//! a perfect square.

use super::ProblemSet;
use crate::app::models::{BasicProblem, GradedProblem};
use crate::app::services::algorithms::{board_from_flat, max_prize_path};
use crate::app::services::record_table::TableSchema;
use crate::constants::PRIZE_COLLECTOR_INPUT;
use crate::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrizeCollectorProblem {
    pub basic: BasicProblem,
    pub prizes: Vec<i32>,
}

impl GradedProblem for PrizeCollectorProblem {
    fn basic(&self) -> &BasicProblem {
        &self.basic
    }

    fn basic_mut(&mut self) -> &mut BasicProblem {
        &mut self.basic
    }
}

pub struct PrizeCollector;

impl ProblemSet for PrizeCollector {
    type Problem = PrizeCollectorProblem;

    const NAME: &'static str = "prize-collector";
    const FRAMEWORK_VERSION: u32 = 110;
    const EXPECTED_ID: Option<i32> = None;
    const DEFAULT_INPUT: &'static str = PRIZE_COLLECTOR_INPUT;

    fn add_columns(schema: &mut TableSchema<Self::Problem>) {
        schema.add_column("prizes", |p| &p.prizes, |p| &mut p.prizes);
    }

    fn solve(problem: &Self::Problem) -> Result<i32> {
        let board = board_from_flat(&problem.prizes).ok_or_else(|| {
            Error::precondition(format!(
                "Prize count {} is not a perfect square",
                problem.prizes.len()
            ))
        })?;
        max_prize_path(&board).ok_or_else(|| {
            Error::precondition(format!(
                "Problem #{} overflows the prize sum. Please, check the input file.",
                problem.basic.id
            ))
        })
    }
}
