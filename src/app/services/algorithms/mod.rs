//! Algorithm routines graded by the built-in problem sets
//!
//! - [`interval_scheduling`] - greedy earliest-finish job selection
//! - [`independent_set`] - maximum-weight independent set on a line, bottom-up
//!   and memoised top-down
//! - [`prize_path`] - best right/down path over a square prize board
//! - [`replace_spaces`] - single-pass whitespace replacement

pub mod independent_set;
pub mod interval_scheduling;
pub mod prize_path;
pub mod replace_spaces;

// Re-export algorithms with descriptive names
pub use independent_set::{max_independent_set_bottom_up, max_independent_set_top_down};
pub use interval_scheduling::max_schedule_count;
pub use prize_path::{board_from_flat, max_prize_path, max_prize_path_top_down};
pub use replace_spaces::{replace_spaces, replace_spaces_in_stream};
