//! Catalog construction from a puzzle directory tree
//!
//! ```text
//! puzzles/
//!   index.html          landing page body
//!   vault/
//!     index.html        frontmatter + puzzle body
//!     success.html      optional, shown once solved
//!     map.pdf           downloadable
//! ```
//!
//! Construction is all-or-nothing: any unreadable or invalid puzzle fails
//! the whole build.

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::puzzle::{read_document, Puzzle, PuzzleDocument, PUZZLE_DOCUMENT, SUCCESS_DOCUMENT};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Landing page body at the root of the puzzle tree
pub const INDEX_DOCUMENT: &str = "index.html";

/// Build the catalog from the puzzle tree rooted at `root`
pub fn build_catalog(root: &Path) -> Result<Catalog, CatalogError> {
    if !root.is_dir() {
        return Err(CatalogError::MissingRoot(root.to_path_buf()));
    }

    let index_path = root.join(INDEX_DOCUMENT);
    let index = String::from_utf8(read_document(&index_path)?)
        .map_err(|_| CatalogError::InvalidUtf8(index_path))?;

    let dirs = puzzle_dirs(root)?;
    debug!(count = dirs.len(), root = %root.display(), "Discovered puzzle directories");

    // Parse in parallel, but report the first failure in id order
    let results: Vec<Result<Puzzle, CatalogError>> =
        dirs.par_iter().map(|(id, dir)| load_puzzle(id, dir)).collect();
    let puzzles = results.into_iter().collect::<Result<Vec<_>, _>>()?;

    let catalog = Catalog::new(index, puzzles);
    for puzzle in catalog.puzzles() {
        for target in puzzle.metadata.unlocks.keys() {
            if catalog.get(target).is_none() {
                warn!(
                    puzzle = %puzzle.id,
                    target = %target,
                    "Unlock target does not name a puzzle"
                );
            }
        }
    }

    info!(puzzles = catalog.len(), root = %root.display(), "Loaded puzzle catalog");
    Ok(catalog)
}

/// Load a single puzzle directory
pub fn load_puzzle(id: &str, dir: &Path) -> Result<Puzzle, CatalogError> {
    let document = PuzzleDocument::load(id, &dir.join(PUZZLE_DOCUMENT))?;
    let files = auxiliary_files(dir)?;

    Ok(Puzzle {
        id: id.to_string(),
        metadata: document.metadata,
        content: document.content,
        files,
    })
}

/// Immediate subdirectories of `root` as (id, path), sorted by id
fn puzzle_dirs(root: &Path) -> Result<Vec<(String, PathBuf)>, CatalogError> {
    let mut dirs = Vec::new();
    for (name, path, file_type) in list_dir(root)? {
        if file_type.is_dir() {
            dirs.push((name, path));
        }
    }
    Ok(dirs)
}

/// Every regular file of a puzzle directory except its documents, sorted
fn auxiliary_files(dir: &Path) -> Result<Vec<String>, CatalogError> {
    let mut files = Vec::new();
    for (name, _, file_type) in list_dir(dir)? {
        if file_type.is_dir() || name == PUZZLE_DOCUMENT || name == SUCCESS_DOCUMENT {
            continue;
        }
        files.push(name);
    }
    Ok(files)
}

/// Every entry directly inside `dir`, dot-prefixed ones included, sorted by
/// name
///
/// Serial walk: this runs on rayon workers already, and jwalk's default
/// parallelism would queue onto the same pool.
fn list_dir(dir: &Path) -> Result<Vec<(String, PathBuf, std::fs::FileType)>, CatalogError> {
    let mut entries = Vec::new();
    for entry in jwalk::WalkDir::new(dir)
        .parallelism(jwalk::Parallelism::Serial)
        .skip_hidden(false)
        .min_depth(1)
        .max_depth(1)
        .sort(true)
    {
        let entry = entry.map_err(|e| CatalogError::Walk {
            path: dir.to_path_buf(),
            message: e.to_string(),
        })?;
        let path = entry.path();
        let name = entry
            .file_name()
            .to_str()
            .ok_or_else(|| CatalogError::InvalidUtf8(path.clone()))?
            .to_string();
        entries.push((name, path, entry.file_type()));
    }
    Ok(entries)
}
