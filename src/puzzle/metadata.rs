//! Puzzle metadata decoding
//!
//! Handles the YAML frontmatter block of a puzzle document

use crate::error::CatalogError;
use crate::puzzle::normalize::{normalize, normalize_all};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Puzzle metadata from the frontmatter block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleMetadata {
    #[serde(default, deserialize_with = "scalar_string")]
    pub title: String,
    #[serde(default, deserialize_with = "scalar_strings")]
    pub answers: Vec<String>,
    #[serde(default, deserialize_with = "scalar_strings")]
    pub hints: Vec<String>,
    /// Target puzzle id -> guesses that unlock it
    #[serde(default, deserialize_with = "unlock_map")]
    pub unlocks: BTreeMap<String, BTreeSet<String>>,
}

impl PuzzleMetadata {
    /// Decode a raw frontmatter block
    pub fn parse(block: &[u8]) -> Result<Self, serde_yaml_ng::Error> {
        serde_yaml_ng::from_slice(block)
    }

    /// Check the required fields of the puzzle called `id`
    pub fn validate(&self, id: &str) -> Result<(), CatalogError> {
        if self.title.trim().is_empty() {
            return Err(CatalogError::MissingTitle(id.to_string()));
        }
        if self.answers.is_empty() {
            return Err(CatalogError::NoAnswers(id.to_string()));
        }
        Ok(())
    }

    /// Normalize every answer and unlock trigger in place
    pub fn normalize(&mut self) {
        normalize_all(&mut self.answers);
        for triggers in self.unlocks.values_mut() {
            *triggers = triggers.iter().map(|t| normalize(t)).collect();
        }
    }

    /// Number of hints available
    pub fn hint_count(&self) -> usize {
        self.hints.len()
    }
}

/// YAML scalar accepted where a string is expected, so `answers: [1984]`
/// reads the same as `answers: ["1984"]`
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl From<Scalar> for String {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::Str(s) => s,
            Scalar::Int(i) => i.to_string(),
            Scalar::Float(f) => f.to_string(),
            Scalar::Bool(b) => b.to_string(),
        }
    }
}

fn scalar_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Option::<Scalar>::deserialize(deserializer).map(|s| s.map(String::from).unwrap_or_default())
}

fn scalar_strings<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let values = Option::<Vec<Scalar>>::deserialize(deserializer)?;
    Ok(values
        .unwrap_or_default()
        .into_iter()
        .map(String::from)
        .collect())
}

fn unlock_map<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<BTreeMap<String, BTreeSet<String>>, D::Error> {
    let raw = Option::<BTreeMap<String, Vec<Scalar>>>::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|(target, triggers)| (target, triggers.into_iter().map(String::from).collect()))
        .collect())
}
