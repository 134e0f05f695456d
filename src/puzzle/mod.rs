//! Puzzle document support
//!
//! A puzzle lives in its own directory. The directory's `index.html` holds a
//! YAML frontmatter block followed by the HTML body shown to solvers; every
//! other file in the directory is offered as a download.

pub mod frontmatter;
pub mod metadata;
pub mod normalize;

pub use frontmatter::{split_front_matter, FrontMatter, NoFrontMatter};
pub use metadata::PuzzleMetadata;
pub use normalize::normalize;

use crate::error::CatalogError;
use serde::Serialize;
use std::path::Path;

/// Primary document of a puzzle directory
pub const PUZZLE_DOCUMENT: &str = "index.html";

/// Optional document shown in place of the puzzle body once it is solved
pub const SUCCESS_DOCUMENT: &str = "success.html";

/// A single puzzle of the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Puzzle {
    /// Directory name, unique within the catalog
    pub id: String,
    pub metadata: PuzzleMetadata,
    /// Document body with the frontmatter block removed
    pub content: String,
    /// Auxiliary files available for download, sorted by name
    pub files: Vec<String>,
}

impl Puzzle {
    pub fn title(&self) -> &str {
        &self.metadata.title
    }

    /// Whether `name` is one of this puzzle's downloadable files
    pub fn has_file(&self, name: &str) -> bool {
        self.files.binary_search_by(|f| f.as_str().cmp(name)).is_ok()
    }

    /// Whether the normalized guess is a canonical answer
    pub fn is_answer(&self, normalized_guess: &str) -> bool {
        self.metadata.answers.iter().any(|a| a == normalized_guess)
    }

    /// First unlock target (in target order) triggered by the normalized guess
    pub fn unlock_for(&self, normalized_guess: &str) -> Option<&str> {
        self.metadata
            .unlocks
            .iter()
            .find(|(_, triggers)| triggers.contains(normalized_guess))
            .map(|(target, _)| target.as_str())
    }
}

/// A parsed puzzle document: validated, normalized metadata plus body
#[derive(Debug, Clone)]
pub struct PuzzleDocument {
    pub metadata: PuzzleMetadata,
    pub content: String,
}

impl PuzzleDocument {
    /// Parse the document of puzzle `id`; `path` is only used for error reports
    pub fn parse(id: &str, path: &Path, document: &[u8]) -> Result<Self, CatalogError> {
        let FrontMatter { block, body } = split_front_matter(document)
            .map_err(|NoFrontMatter| CatalogError::NoFrontMatter(path.to_path_buf()))?;

        let mut metadata =
            PuzzleMetadata::parse(block).map_err(|source| CatalogError::InvalidMetadata {
                path: path.to_path_buf(),
                source,
            })?;
        metadata.validate(id)?;
        metadata.normalize();

        let content = std::str::from_utf8(body)
            .map_err(|_| CatalogError::InvalidUtf8(path.to_path_buf()))?
            .to_string();

        Ok(PuzzleDocument { metadata, content })
    }

    /// Load and parse the document of puzzle `id` from disk
    pub fn load(id: &str, path: &Path) -> Result<Self, CatalogError> {
        let bytes = read_document(path)?;
        Self::parse(id, path, &bytes)
    }
}

/// Read a required document, keeping "not found" distinct from other failures
pub(crate) fn read_document(path: &Path) -> Result<Vec<u8>, CatalogError> {
    std::fs::read(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            CatalogError::MissingDocument(path.to_path_buf())
        } else {
            CatalogError::Unreadable {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}
