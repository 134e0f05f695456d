//! Static-site export
//!
//! Writes every page of the catalog plus its downloads to a directory that
//! any static file server can host. Guessing and hints still need the live
//! server, so exported puzzle pages leave out the guess form and hint list.

use crate::catalog::Catalog;
use crate::render::{self, MAIN_CSS, MAIN_JS};
use crate::Result;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// What an export wrote
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportSummary {
    /// Rendered HTML pages, including the index and not-found pages
    pub pages: usize,
    /// Auxiliary puzzle files copied
    pub files: usize,
}

/// Export the rendered site of `catalog`, built from `root`, into `out_dir`
pub fn export_site(catalog: &Catalog, root: &Path, out_dir: &Path) -> Result<ExportSummary> {
    let mut summary = ExportSummary::default();
    fs::create_dir_all(out_dir)?;

    fs::write(out_dir.join("index.html"), render::index_page(catalog).into_string())?;
    fs::write(out_dir.join("404.html"), render::not_found_page().into_string())?;
    fs::write(out_dir.join("main.css"), MAIN_CSS)?;
    fs::write(out_dir.join("main.js"), MAIN_JS)?;
    summary.pages += 2;

    for puzzle in catalog.puzzles() {
        let puzzle_dir = out_dir.join("puzzles").join(&puzzle.id);
        fs::create_dir_all(&puzzle_dir)?;
        fs::write(
            puzzle_dir.join("index.html"),
            render::static_puzzle_page(puzzle).into_string(),
        )?;
        summary.pages += 1;

        for file in &puzzle.files {
            fs::copy(root.join(&puzzle.id).join(file), puzzle_dir.join(file))?;
            summary.files += 1;
        }
        debug!(puzzle = %puzzle.id, files = puzzle.files.len(), "Exported puzzle");
    }

    info!(
        pages = summary.pages,
        files = summary.files,
        out = %out_dir.display(),
        "Exported static site"
    );
    Ok(summary)
}
