//! Application constants for the problem-set toolkit
//!
//! This module contains the framework version, default values and file names
//! shared by the document framework, the problem sets and the CLI.

// =============================================================================
// Framework Version
// =============================================================================

/// Version of the record/table/document framework
///
/// Problem sets declare the version they were written against and a
/// compile-time assertion checks it against this value.
pub const FRAMEWORK_VERSION: u32 = 110;

// =============================================================================
// Document Format
// =============================================================================

/// Line that switches the parser from the header section to the data section
pub const DATA_SECTION_MARKER: &str = "data:";

/// Prefix of comment lines
pub const COMMENT_PREFIX: char = '#';

/// Prefix of the first line of every data record
pub const ROW_MARKER: char = '-';

/// Separator between a key and its value
pub const KEY_VALUE_SEPARATOR: char = ':';

/// Default for integer columns registered without an explicit default
pub const DEFAULT_INT_VALUE: i32 = -1;

// =============================================================================
// Problem-Set Columns
// =============================================================================

/// Header column names
pub mod header_columns {
    pub const PROBLEM_SET_NUMBER: &str = "problem_set_number";
    pub const PROBLEMS: &str = "problems";
    pub const TIME: &str = "time";
    pub const TEST_MISTAKES: &str = "test_mistakes";
}

/// Column names shared by every problem record
pub mod problem_columns {
    pub const PROBLEM: &str = "problem";
    pub const CORRECT_ANSWER: &str = "correct_answer";
    pub const STUDENT_ANSWER: &str = "student_answer";
    pub const MESSAGE: &str = "msg";
}

// =============================================================================
// Problem Sets
// =============================================================================

/// Identifier expected in interval scheduling problem-set files
pub const INTERVAL_SCHEDULING_SET_ID: i32 = 1_005_230;

/// Default input file names, relative to the configured data directory
pub const INTERVAL_SCHEDULING_INPUT: &str = "intervals.in";
pub const INDEPENDENT_SET_INPUT: &str = "independent_set.in";
pub const PRIZE_COLLECTOR_INPUT: &str = "problem_set.in";

/// Names accepted on the command line for the built-in problem sets
pub const PROBLEM_SET_NAMES: &[&str] = &["interval-scheduling", "independent-set", "prize-collector"];

// =============================================================================
// Configuration Defaults
// =============================================================================

/// Default directory holding problem-set input files
pub const DEFAULT_DATA_DIR: &str = "data";

/// Directory name under the user's config directory
pub const CONFIG_DIR_NAME: &str = "problem-set";

/// Config file name inside [`CONFIG_DIR_NAME`]
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Environment variable overriding the data directory
pub const ENV_DATA_DIR: &str = "PROBLEM_SET_DATA_DIR";

/// Environment variable overriding strict parsing (`yes`/`no`/`true`/`false`)
pub const ENV_STRICT: &str = "PROBLEM_SET_STRICT";

/// Problem count above which the grader shows a progress bar
pub const PROGRESS_BAR_THRESHOLD: usize = 1_000;
