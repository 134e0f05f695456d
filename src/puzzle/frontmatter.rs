//! Frontmatter splitting
//!
//! A puzzle document opens with an HTML comment holding its YAML metadata:
//!
//! ```text
//! <!--
//! title: Vault
//! answers: [gold key]
//! -->
//! <p>body</p>
//! ```

const OPEN_MARKER: &[u8] = b"<!--";
const CLOSE_MARKER: &[u8] = b"-->";

/// The opening or closing marker could not be found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoFrontMatter;

/// A document split into its metadata block and its body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontMatter<'a> {
    pub block: &'a [u8],
    pub body: &'a [u8],
}

/// Split a document into its leading metadata block and the remaining body
///
/// The opening marker must be the first line of the document and the block
/// ends at the first line consisting solely of the closing marker.
pub fn split_front_matter(document: &[u8]) -> Result<FrontMatter<'_>, NoFrontMatter> {
    let (first, mut offset) = next_line(document, 0).ok_or(NoFrontMatter)?;
    if first != OPEN_MARKER {
        return Err(NoFrontMatter);
    }

    let block_start = offset;
    while let Some((line, next)) = next_line(document, offset) {
        if line == CLOSE_MARKER {
            return Ok(FrontMatter {
                block: &document[block_start..offset],
                body: &document[next..],
            });
        }
        offset = next;
    }

    Err(NoFrontMatter)
}

/// Line starting at `start` without its terminator, plus the offset of the
/// following line
fn next_line(document: &[u8], start: usize) -> Option<(&[u8], usize)> {
    if start >= document.len() {
        return None;
    }
    let rest = &document[start..];
    let (line, next) = match rest.iter().position(|&b| b == b'\n') {
        Some(pos) => (&rest[..pos], start + pos + 1),
        None => (rest, document.len()),
    };
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    Some((line, next))
}
