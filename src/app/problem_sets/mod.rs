//! Built-in problem sets
//!
//! A problem set binds a concrete problem record to its document columns and
//! to the algorithm that answers it. The generic driver in this module loads
//! the file, validates it, runs the algorithm over every problem, grades the
//! answers and optionally writes a results document.
//!
//! ## Problem sets
//!
//! - [`interval_scheduling`] - `left`/`right` endpoint lists
//! - [`independent_set`] - `weights` on a line
//! - [`prize_collector`] - flattened square `prizes` board

pub mod independent_set;
pub mod interval_scheduling;
pub mod prize_collector;

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use indicatif::ProgressBar;
use tracing::{debug, info, warn};

use crate::app::models::{
    GradedProblem, ProblemSetHeader, add_default_problem_columns, add_default_problem_columns_for_output,
    problem_set_schema,
};
use crate::app::services::document::{
    DocumentParser, ErrorMode, ParseError, ParseStats, document_to_string, write_document_to_file,
};
use crate::app::services::grading::{GradingReport, preprocess_problem_set, process_results};
use crate::app::services::record_table::TableSchema;
use crate::constants::{FRAMEWORK_VERSION, PROBLEM_SET_NAMES, PROGRESS_BAR_THRESHOLD};
use crate::{Error, Result};

pub use independent_set::IndependentSet;
pub use interval_scheduling::IntervalScheduling;
pub use prize_collector::PrizeCollector;

/// A problem-set definition
pub trait ProblemSet {
    type Problem: GradedProblem + Default + 'static;

    /// Command-line name
    const NAME: &'static str;

    /// Framework version the problem set was written against
    const FRAMEWORK_VERSION: u32;

    /// Problem-set number the input must carry, if checked
    const EXPECTED_ID: Option<i32>;

    /// Input file name relative to the data directory
    const DEFAULT_INPUT: &'static str;

    /// Register the columns specific to this problem type
    fn add_columns(schema: &mut TableSchema<Self::Problem>);

    /// Answer one problem; input shape errors are preconditions
    fn solve(problem: &Self::Problem) -> Result<i32>;
}

/// Rejects a problem set built against another framework version
macro_rules! check_framework_version {
    ($($set:ty),+ $(,)?) => {
        $(
            const _: () = assert!(
                <$set as ProblemSet>::FRAMEWORK_VERSION == FRAMEWORK_VERSION,
                "Incorrect framework version for a problem set."
            );
        )+
    };
}

check_framework_version!(IntervalScheduling, IndependentSet, PrizeCollector);

/// Options for [`grade`]
#[derive(Debug, Clone, Default)]
pub struct GradeOptions {
    pub error_mode: ErrorMode,

    /// Write a results document here after grading
    pub results_path: Option<PathBuf>,

    /// Write every column of the results, including defaults
    pub write_defaults: bool,

    /// Comment lines prepended to the results document
    pub results_comment: Option<String>,

    /// Advanced once per solved problem on large sets
    pub progress: Option<ProgressBar>,
}

/// A parsed problem-set file
#[derive(Debug)]
pub struct LoadedSet<T> {
    pub header: ProblemSetHeader,
    pub problems: Vec<T>,
    pub stats: ParseStats,

    /// Set when a lenient parse stopped early
    pub parse_error: Option<ParseError>,
}

/// Result of grading one file
#[derive(Debug)]
pub struct GradeOutcome {
    pub header: ProblemSetHeader,
    pub report: GradingReport,
    pub stats: ParseStats,
    pub results_path: Option<PathBuf>,
}

/// Full input schema for a problem set's records
pub fn input_schema<P: ProblemSet>() -> TableSchema<P::Problem> {
    let mut schema = TableSchema::new();
    add_default_problem_columns(&mut schema);
    P::add_columns(&mut schema);
    schema
}

/// Parse a problem-set document into its header and problems
pub fn load<P: ProblemSet>(path: &Path, mode: ErrorMode) -> Result<LoadedSet<P::Problem>> {
    let mut header = ProblemSetHeader::default();
    let mut problems = Vec::new();

    let (stats, parse_error) = {
        let mut header_table = problem_set_schema().bind_record(&mut header);
        let mut problem_table = input_schema::<P>().bind_rows(&mut problems);
        let mut parser = DocumentParser::with_tables(&mut header_table, &mut problem_table);
        let stats = parser.parse_file(path, mode)?;
        (stats, parser.last_error().cloned())
    };

    if let Some(error) = &parse_error {
        warn!("Continuing with a partially parsed {} set: {}", P::NAME, error);
    }
    debug!("Loaded {} problems from {}", problems.len(), path.display());

    Ok(LoadedSet {
        header,
        problems,
        stats,
        parse_error,
    })
}

/// Run `P::solve` over every problem, storing the answers
pub fn solve_all<P: ProblemSet>(problems: &mut [P::Problem], progress: Option<&ProgressBar>) -> Result<()> {
    for problem in problems.iter_mut() {
        let answer = P::solve(problem)?;
        problem.basic_mut().student_answer = answer;
        if let Some(pb) = progress {
            pb.inc(1);
        }
    }
    Ok(())
}

/// Load, validate, solve and grade a problem-set file
pub fn grade<P: ProblemSet>(path: &Path, options: &GradeOptions) -> Result<GradeOutcome> {
    info!("Grading {} problem set from {}", P::NAME, path.display());

    let LoadedSet {
        mut header,
        mut problems,
        stats,
        ..
    } = load::<P>(path, options.error_mode)?;

    preprocess_problem_set(P::EXPECTED_ID, &problems, &mut header)?;

    let progress = options
        .progress
        .as_ref()
        .filter(|_| problems.len() >= PROGRESS_BAR_THRESHOLD);
    if let Some(pb) = progress {
        pb.set_length(problems.len() as u64);
    }
    solve_all::<P>(&mut problems, progress)?;
    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    let report = process_results(&problems, &mut header);

    if let Some(results_path) = &options.results_path {
        write_results(results_path, &mut header, &mut problems, options)?;
    }

    Ok(GradeOutcome {
        header,
        report,
        stats,
        results_path: options.results_path.clone(),
    })
}

fn write_results<T: GradedProblem + Default + 'static>(
    path: &Path,
    header: &mut ProblemSetHeader,
    problems: &mut Vec<T>,
    options: &GradeOptions,
) -> Result<()> {
    let header_table = problem_set_schema().bind_record(header);

    let mut schema: TableSchema<T> = TableSchema::new();
    add_default_problem_columns_for_output(&mut schema);
    let problem_table = schema.bind_rows(problems);

    write_document_to_file(
        path,
        Some(&header_table),
        &problem_table,
        options.write_defaults,
        options.results_comment.as_deref(),
    )
}

/// Parse a file and write it back in canonical form
///
/// Returns the canonical text; when `out` is given it is also written there.
pub fn normalize<P: ProblemSet>(path: &Path, out: Option<&Path>, write_defaults: bool) -> Result<String> {
    let LoadedSet {
        mut header,
        mut problems,
        ..
    } = load::<P>(path, ErrorMode::Strict)?;

    let header_table = problem_set_schema().bind_record(&mut header);
    let problem_table = input_schema::<P>().bind_rows(&mut problems);

    let text = document_to_string(Some(&header_table), &problem_table, write_defaults)?;
    if let Some(out) = out {
        write_document_to_file(out, Some(&header_table), &problem_table, write_defaults, None)?;
    }
    Ok(text)
}

/// The built-in problem sets, selectable by name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProblemSetKind {
    IntervalScheduling,
    IndependentSet,
    PrizeCollector,
}

impl ProblemSetKind {
    pub const ALL: [ProblemSetKind; 3] = [Self::IntervalScheduling, Self::IndependentSet, Self::PrizeCollector];

    pub fn name(self) -> &'static str {
        match self {
            Self::IntervalScheduling => IntervalScheduling::NAME,
            Self::IndependentSet => IndependentSet::NAME,
            Self::PrizeCollector => PrizeCollector::NAME,
        }
    }

    pub fn expected_id(self) -> Option<i32> {
        match self {
            Self::IntervalScheduling => IntervalScheduling::EXPECTED_ID,
            Self::IndependentSet => IndependentSet::EXPECTED_ID,
            Self::PrizeCollector => PrizeCollector::EXPECTED_ID,
        }
    }

    pub fn default_input(self) -> &'static str {
        match self {
            Self::IntervalScheduling => IntervalScheduling::DEFAULT_INPUT,
            Self::IndependentSet => IndependentSet::DEFAULT_INPUT,
            Self::PrizeCollector => PrizeCollector::DEFAULT_INPUT,
        }
    }

    pub fn grade(self, path: &Path, options: &GradeOptions) -> Result<GradeOutcome> {
        match self {
            Self::IntervalScheduling => grade::<IntervalScheduling>(path, options),
            Self::IndependentSet => grade::<IndependentSet>(path, options),
            Self::PrizeCollector => grade::<PrizeCollector>(path, options),
        }
    }

    /// Parse only; returns the statistics and the error a lenient parse hit
    pub fn check(self, path: &Path, mode: ErrorMode) -> Result<(ParseStats, Option<ParseError>)> {
        match self {
            Self::IntervalScheduling => load::<IntervalScheduling>(path, mode).map(|s| (s.stats, s.parse_error)),
            Self::IndependentSet => load::<IndependentSet>(path, mode).map(|s| (s.stats, s.parse_error)),
            Self::PrizeCollector => load::<PrizeCollector>(path, mode).map(|s| (s.stats, s.parse_error)),
        }
    }

    pub fn normalize(self, path: &Path, out: Option<&Path>, write_defaults: bool) -> Result<String> {
        match self {
            Self::IntervalScheduling => normalize::<IntervalScheduling>(path, out, write_defaults),
            Self::IndependentSet => normalize::<IndependentSet>(path, out, write_defaults),
            Self::PrizeCollector => normalize::<PrizeCollector>(path, out, write_defaults),
        }
    }
}

impl fmt::Display for ProblemSetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProblemSetKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                Error::configuration(format!(
                    "Unknown problem set '{}'. Available problem sets: {}",
                    s,
                    PROBLEM_SET_NAMES.join(", ")
                ))
            })
    }
}
