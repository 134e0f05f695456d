//! Hint resolution

use crate::catalog::Catalog;
use crate::error::QueryError;
use tracing::debug;

/// Hint `index` of puzzle `puzzle_id`, verbatim
pub fn resolve_hint<'a>(
    catalog: &'a Catalog,
    puzzle_id: &str,
    index: i64,
) -> Result<&'a str, QueryError> {
    let puzzle = catalog
        .get(puzzle_id)
        .ok_or_else(|| QueryError::UnknownPuzzle(puzzle_id.to_string()))?;

    let hints = &puzzle.metadata.hints;
    let hint = usize::try_from(index)
        .ok()
        .and_then(|i| hints.get(i))
        .ok_or(QueryError::IndexOutOfRange {
            index,
            count: hints.len(),
        })?;

    debug!(puzzle = puzzle_id, index, "Resolved hint");
    Ok(hint)
}
