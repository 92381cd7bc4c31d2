//! Error types for the tag cloud generator.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

/// Result type alias for tag cloud operations
pub type Result<T> = std::result::Result<T, TagCloudError>;

#[derive(Error, Debug)]
pub enum TagCloudError {
    /// The input file could not be opened
    #[error("Error when trying to open read file {path}: {source}")]
    InputOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input file was opened but reading it failed
    #[error("Error when reading from read file {path}: {source}")]
    InputRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error opening output file {path}: {source}")]
    OutputOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error writing output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Word count was not a positive integer
    #[error("number of words to be read must be a positive integer, got {0:?}")]
    InvalidCount(String),

    /// Console failure while prompting for a missing argument
    #[error("console input/output error: {0}")]
    Prompt(#[from] io::Error),
}

impl TagCloudError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::InvalidCount(_) => ExitCode::from(2),
            Self::InputOpen { .. } => ExitCode::from(3),
            Self::InputRead { .. } => ExitCode::from(4),
            Self::OutputOpen { .. } => ExitCode::from(5),
            Self::OutputWrite { .. } => ExitCode::from(6),
            Self::Prompt(_) => ExitCode::from(7),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_count_message_quotes_input() {
        let err = TagCloudError::InvalidCount("abc".to_string());
        assert_eq!(
            err.to_string(),
            "number of words to be read must be a positive integer, got \"abc\""
        );
    }

    #[test]
    fn input_open_message_names_path() {
        let err = TagCloudError::InputOpen {
            path: PathBuf::from("missing.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("missing.txt"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn exit_codes_are_distinct() {
        let errors = [
            TagCloudError::InvalidCount(String::new()),
            TagCloudError::InputOpen {
                path: PathBuf::new(),
                source: io::Error::other("x"),
            },
            TagCloudError::InputRead {
                path: PathBuf::new(),
                source: io::Error::other("x"),
            },
            TagCloudError::OutputOpen {
                path: PathBuf::new(),
                source: io::Error::other("x"),
            },
            TagCloudError::OutputWrite {
                path: PathBuf::new(),
                source: io::Error::other("x"),
            },
            TagCloudError::Prompt(io::Error::other("x")),
        ];
        let codes: Vec<String> = errors
            .iter()
            .map(|e| format!("{:?}", e.exit_code()))
            .collect();
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
