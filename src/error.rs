//! Error types for Poozles
//!
//! Catalog construction failures are fatal and surface as [`CatalogError`].
//! Per-request query failures are recoverable and surface as [`QueryError`].

use std::path::PathBuf;
use thiserror::Error;

/// Failure while building the puzzle catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Puzzles folder not found: {}", .0.display())]
    MissingRoot(PathBuf),

    #[error("{} - not found", .0.display())]
    MissingDocument(PathBuf),

    #[error("Unable to read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No frontmatter in {}", .0.display())]
    NoFrontMatter(PathBuf),

    #[error("Unable to decode frontmatter in {}: {source}", path.display())]
    InvalidMetadata {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },

    #[error("Puzzle '{0}' needs a title")]
    MissingTitle(String),

    #[error("Puzzle '{0}' needs at least one answer")]
    NoAnswers(String),

    #[error("{} is not valid UTF-8", .0.display())]
    InvalidUtf8(PathBuf),

    #[error("Failed to walk {}: {message}", path.display())]
    Walk { path: PathBuf, message: String },
}

/// Recoverable failure of a guess or hint query
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Unknown puzzle: {0}")]
    UnknownPuzzle(String),

    #[error("Puzzle or guess is blank")]
    EmptyInput,

    #[error("Hint {index} out of range (puzzle has {count} hints)")]
    IndexOutOfRange { index: i64, count: usize },
}

#[derive(Error, Debug)]
pub enum PoozlesError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Task join error: {0}")]
    JoinError(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, PoozlesError>;
