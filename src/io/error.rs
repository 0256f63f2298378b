//! Error types and context helpers for puzzle operations

use std::fmt;
use std::path::{Path, PathBuf};

use crate::spatial::card::CardId;

/// Main error type for all puzzle operations
#[derive(Debug)]
pub enum PuzzleError {
    /// A move referenced a card id that is not on the board
    ///
    /// The id set of a board never changes, so this always indicates
    /// corrupted bookkeeping rather than an unsolvable puzzle.
    CardNotFound {
        /// The id that could not be located
        id: CardId,
    },

    /// A permutation was requested after every ordering had been handed out
    PermutationExhausted {
        /// Number of orderings produced before the request
        generated: u64,
    },

    /// Rearrangement asked for a permutation before a generator was built
    GeneratorMissing,

    /// Rearrangement found no card left to promote into the center
    CentersExhausted {
        /// Number of cards already promoted
        tried: usize,
    },

    /// Board or move target does not describe nine unique cards
    InvalidLayout {
        /// Description of what is wrong with the layout
        reason: String,
    },

    /// Layout file is not valid TOML or does not match the layout schema
    LayoutParse {
        /// Path of the layout file
        path: PathBuf,
        /// Underlying deserialization error
        source: toml::de::Error,
    },

    /// Board could not be serialized as a layout document
    LayoutExport {
        /// Underlying serialization error
        source: toml::ser::Error,
    },

    /// General file system or output stream failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The background solver thread could not be started or did not finish cleanly
    BackgroundTask {
        /// Description of the failure
        reason: String,
    },
}

impl PuzzleError {
    /// Whether the error signals broken solver bookkeeping rather than bad input
    pub const fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            Self::CardNotFound { .. }
                | Self::PermutationExhausted { .. }
                | Self::GeneratorMissing
                | Self::CentersExhausted { .. }
        )
    }
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CardNotFound { id } => write!(f, "Card with id {id} not found on the board"),
            Self::PermutationExhausted { generated } => {
                write!(
                    f,
                    "Permutation requested after all {generated} orderings were generated"
                )
            }
            Self::GeneratorMissing => write!(f, "Permutation generator was never initialized"),
            Self::CentersExhausted { tried } => {
                write!(f, "No card left to promote after {tried} center choices")
            }
            Self::InvalidLayout { reason } => write!(f, "Invalid board layout: {reason}"),
            Self::LayoutParse { path, source } => {
                write!(f, "Failed to parse layout '{}': {source}", path.display())
            }
            Self::LayoutExport { source } => write!(f, "Failed to export layout: {source}"),
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
            Self::BackgroundTask { reason } => write!(f, "Background solve failed: {reason}"),
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::LayoutParse { source, .. } => Some(source),
            Self::LayoutExport { source } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for puzzle results
pub type Result<T> = std::result::Result<T, PuzzleError>;

impl From<std::io::Error> for PuzzleError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<toml::ser::Error> for PuzzleError {
    fn from(err: toml::ser::Error) -> Self {
        Self::LayoutExport { source: err }
    }
}

/// Attaches the path and operation to I/O failures
pub trait WithPath<T> {
    /// Convert an I/O error into a [`PuzzleError::FileSystem`] naming `path`
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation attached
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| PuzzleError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

/// Create an invalid layout error
pub fn invalid_layout(reason: &impl ToString) -> PuzzleError {
    PuzzleError::InvalidLayout {
        reason: reason.to_string(),
    }
}

/// Create a background task error
pub fn background_task_error(reason: &impl ToString) -> PuzzleError {
    PuzzleError::BackgroundTask {
        reason: reason.to_string(),
    }
}
