//! Immutable puzzle catalog
//!
//! The catalog is built once by [`Catalog::build`] and only read afterwards.
//! Handlers share it through an `Arc<Catalog>`.

pub mod builder;

pub use builder::{build_catalog, load_puzzle, INDEX_DOCUMENT};

use crate::error::CatalogError;
use crate::puzzle::Puzzle;
use std::collections::HashMap;
use std::path::Path;

/// Landing page body plus every puzzle, sorted by id
#[derive(Debug, Clone)]
pub struct Catalog {
    index: String,
    puzzles: Vec<Puzzle>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    /// Build the catalog from a puzzle directory tree
    pub fn build(root: &Path) -> Result<Self, CatalogError> {
        build_catalog(root)
    }

    fn new(index: String, mut puzzles: Vec<Puzzle>) -> Self {
        puzzles.sort_by(|a, b| a.id.cmp(&b.id));
        let by_id = puzzles
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id.clone(), i))
            .collect();
        Catalog {
            index,
            puzzles,
            by_id,
        }
    }

    /// Landing page body
    pub fn index(&self) -> &str {
        &self.index
    }

    pub fn puzzles(&self) -> &[Puzzle] {
        &self.puzzles
    }

    /// Look up a puzzle by id
    pub fn get(&self, id: &str) -> Option<&Puzzle> {
        self.by_id.get(id).map(|&i| &self.puzzles[i])
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.puzzles.iter().map(|p| p.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }
}

#[cfg(test)]
impl Catalog {
    /// In-memory catalog from (id, document) pairs, parsed like files on disk
    pub(crate) fn from_sources(index: &str, sources: &[(&str, &str)]) -> Self {
        use crate::puzzle::PuzzleDocument;

        let puzzles = sources
            .iter()
            .map(|(id, source)| {
                let path = Path::new(id).join(crate::puzzle::PUZZLE_DOCUMENT);
                let doc = PuzzleDocument::parse(id, &path, source.as_bytes()).unwrap();
                Puzzle {
                    id: id.to_string(),
                    metadata: doc.metadata,
                    content: doc.content,
                    files: Vec::new(),
                }
            })
            .collect();
        Catalog::new(index.to_string(), puzzles)
    }
}
