//! Error types and path context for corpus loading and puzzle generation

use std::fmt;
use std::path::{Path, PathBuf};

use crate::spatial::span::Direction;

/// Main error type for all corpus and generation operations
#[derive(Debug)]
pub enum CrosswordError {
    /// Failed to read a corpus file from disk
    CorpusRead {
        /// Path to the corpus file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Corpus file is not valid JSON or does not have the expected shape
    CorpusParse {
        /// Path to the corpus file
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// A corpus entry violates the word entry invariants
    InvalidEntry {
        /// Path to the corpus file containing the entry
        path: PathBuf,
        /// Position of the entry within its word list
        index: usize,
        /// Description of what's wrong with the entry
        reason: String,
    },

    /// Generation parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A word was committed at a position where it does not fit
    InvalidPlacement {
        /// Word being committed
        word: String,
        /// Starting row
        row: usize,
        /// Starting column
        col: usize,
        /// Orientation of the word
        direction: Direction,
    },

    /// The engine could not reach the minimum clue count
    ///
    /// Occurs when either:
    /// - The placement round budget ran out
    /// - A full round placed no word, so no further round can make progress
    PlacementExhausted {
        /// Placement rounds executed before giving up
        rounds: usize,
        /// Number of clues placed when giving up
        placed: usize,
        /// Minimum number of clues required
        required: usize,
    },

    /// Every top-level generation attempt failed
    GenerationFailed {
        /// Number of attempts made
        attempts: usize,
        /// Failure reason of each attempt, in order
        failures: Vec<String>,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to serialize output
    Serialization {
        /// Underlying JSON error
        source: serde_json::Error,
    },
}

impl CrosswordError {
    /// Whether a fresh attempt with a reshuffled pool may succeed
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::PlacementExhausted { .. })
    }
}

impl fmt::Display for CrosswordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CorpusRead { path, source } => {
                write!(f, "Failed to read corpus file '{}': {source}", path.display())
            }
            Self::CorpusParse { path, source } => {
                write!(f, "Failed to parse corpus file '{}': {source}", path.display())
            }
            Self::InvalidEntry {
                path,
                index,
                reason,
            } => {
                write!(
                    f,
                    "Invalid word entry {index} in '{}': {reason}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidPlacement {
                word,
                row,
                col,
                direction,
            } => {
                write!(f, "Cannot place '{word}' {direction} at ({row}, {col})")
            }
            Self::PlacementExhausted {
                rounds,
                placed,
                required,
            } => {
                write!(
                    f,
                    "Could not place enough words: {placed} of {required} after {rounds} rounds"
                )
            }
            Self::GenerationFailed { attempts, failures } => {
                write!(f, "Could not generate puzzle after {attempts} attempts")?;
                if let Some(last) = failures.last() {
                    write!(f, " (last failure: {last})")?;
                }
                Ok(())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Serialization { source } => {
                write!(f, "Serialization failed: {source}")
            }
        }
    }
}

impl std::error::Error for CrosswordError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::CorpusRead { source, .. } | Self::FileSystem { source, .. } => Some(source),
            Self::CorpusParse { source, .. } | Self::Serialization { source } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for crossword results
pub type Result<T> = std::result::Result<T, CrosswordError>;

impl From<std::io::Error> for CrosswordError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<serde_json::Error> for CrosswordError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization { source: err }
    }
}

/// Attaches the file involved to low-level I/O and JSON errors
pub trait WithPath<T> {
    /// Tag a corpus read or parse failure with its file path
    ///
    /// # Errors
    ///
    /// Propagates the original error as a corpus error for `path`
    fn with_corpus_path(self, path: &Path) -> Result<T>;

    /// Tag a general file system failure with its path and operation
    ///
    /// # Errors
    ///
    /// Propagates the original error as a file system error for `path`
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::result::Result<T, std::io::Error> {
    fn with_corpus_path(self, path: &Path) -> Result<T> {
        self.map_err(|source| CrosswordError::CorpusRead {
            path: path.to_path_buf(),
            source,
        })
    }

    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| CrosswordError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

impl<T> WithPath<T> for std::result::Result<T, serde_json::Error> {
    fn with_corpus_path(self, path: &Path) -> Result<T> {
        self.map_err(|source| CrosswordError::CorpusParse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| CrosswordError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source: std::io::Error::other(source),
        })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> CrosswordError {
    CrosswordError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
