//! Success replacement lookup
//!
//! Consulted only after a correct guess, to fetch content shown in place of
//! the puzzle body.

use crate::puzzle::SUCCESS_DOCUMENT;
use std::io;
use std::path::PathBuf;

/// Source of per-puzzle success content
pub trait SuccessLookup: Send + Sync {
    /// Replacement content for `puzzle_id`, or `None` when it has none
    fn success_replacement(&self, puzzle_id: &str) -> io::Result<Option<String>>;
}

/// Reads `<root>/<id>/success.html` on demand
#[derive(Debug, Clone)]
pub struct FsSuccessLookup {
    root: PathBuf,
}

impl FsSuccessLookup {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FsSuccessLookup { root: root.into() }
    }
}

impl SuccessLookup for FsSuccessLookup {
    fn success_replacement(&self, puzzle_id: &str) -> io::Result<Option<String>> {
        let path = self.root.join(puzzle_id).join(SUCCESS_DOCUMENT);
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// Lookup that never has replacement content
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSuccessLookup;

impl SuccessLookup for NoSuccessLookup {
    fn success_replacement(&self, _puzzle_id: &str) -> io::Result<Option<String>> {
        Ok(None)
    }
}
