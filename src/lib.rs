//! Problem-Set Toolkit Library
//!
//! A Rust library for declaring, parsing, grading and writing the structured
//! text files used by small algorithm exercises.
//!
//! This library provides tools for:
//! - Mapping named textual keys onto typed record fields (integers, booleans,
//!   quoted strings and integer lists)
//! - Reading the two-section `header` + `data:` document format into tables
//! - Writing tables back with default-value elision
//! - Validating and grading problem sets against reference answers
//! - The algorithm routines the built-in problem sets exercise

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod problem_sets;
    pub mod services {
        pub mod algorithms;
        pub mod document;
        pub mod grading;
        pub mod record_table;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

use app::services::document::ParseError;
use app::services::record_table::TableError;

// Re-export commonly used types
pub use app::models::{BasicProblem, GradedProblem, Job, ProblemSetHeader};
pub use app::problem_sets::ProblemSetKind;
pub use config::Config;

/// Result type alias for the problem-set toolkit
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for problem-set operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Malformed document; the message carries `file:line:`
    #[error("Parse error: {0}")]
    Parse(ParseError),

    /// Structural table access failure outside the parser
    #[error("Table error: {0}")]
    Table(#[from] TableError),

    /// Problem-set input failed validation before grading
    #[error("{message}")]
    Precondition { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Report or config (de)serialization failed
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a parse error located at `file:line`
    pub fn parse(file: impl Into<String>, line: usize, message: impl Into<String>) -> Self {
        Self::Parse(ParseError::new(file, line, message))
    }

    /// Create a precondition error
    pub fn precondition(message: impl Into<String>) -> Self {
        Self::Precondition {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// True for errors caused by the input document rather than the system
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::Parse(_) | Self::Precondition { .. })
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: format!("JSON serialization failed: {}", error),
        }
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(error: serde_yaml::Error) -> Self {
        Self::Serialization {
            message: format!("YAML serialization failed: {}", error),
        }
    }
}
