//! Answer normalization
//!
//! Stored answers, stored unlock triggers and incoming guesses all pass
//! through [`normalize`] so comparisons are always normalized-to-normalized.

/// Trim surrounding whitespace and lower-case
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Normalize every string of a slice in place
pub fn normalize_all(values: &mut [String]) {
    for value in values.iter_mut() {
        *value = normalize(value);
    }
}
