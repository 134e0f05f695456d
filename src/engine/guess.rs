//! Guess evaluation
//!
//! A guess is normalized and then checked, in order, against the puzzle's
//! answers and its unlock triggers.

use crate::catalog::Catalog;
use crate::engine::success::SuccessLookup;
use crate::error::QueryError;
use crate::puzzle::normalize;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Result of evaluating a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The guess is a canonical answer
    Correct { replacement: Option<String> },
    /// The guess unlocks another puzzle
    Unlock { target: String },
    Incorrect,
}

impl Outcome {
    pub fn kind(&self) -> GuessResult {
        match self {
            Outcome::Correct { .. } => GuessResult::Correct,
            Outcome::Unlock { .. } => GuessResult::Unlock,
            Outcome::Incorrect => GuessResult::Incorrect,
        }
    }

    pub fn is_correct(&self) -> bool {
        matches!(self, Outcome::Correct { .. })
    }
}

/// Classification of a guess without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuessResult {
    Correct,
    Incorrect,
    Unlock,
}

impl GuessResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            GuessResult::Correct => "correct",
            GuessResult::Incorrect => "incorrect",
            GuessResult::Unlock => "unlock",
        }
    }
}

impl std::fmt::Display for GuessResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Evaluate `raw_guess` against puzzle `puzzle_id`
pub fn evaluate(catalog: &Catalog, puzzle_id: &str, raw_guess: &str) -> Result<Outcome, QueryError> {
    if puzzle_id.trim().is_empty() || raw_guess.trim().is_empty() {
        return Err(QueryError::EmptyInput);
    }
    let puzzle = catalog
        .get(puzzle_id)
        .ok_or_else(|| QueryError::UnknownPuzzle(puzzle_id.to_string()))?;

    let guess = normalize(raw_guess);
    let outcome = if puzzle.is_answer(&guess) {
        Outcome::Correct { replacement: None }
    } else if let Some(target) = puzzle.unlock_for(&guess) {
        Outcome::Unlock {
            target: target.to_string(),
        }
    } else {
        Outcome::Incorrect
    };

    debug!(puzzle = puzzle_id, result = %outcome.kind(), "Evaluated guess");
    Ok(outcome)
}

/// Like [`evaluate`], attaching success content to a correct outcome
///
/// The replacement is optional: a lookup that fails is logged and the guess
/// is still `Correct`, just without replacement content.
pub fn evaluate_with(
    catalog: &Catalog,
    success: &dyn SuccessLookup,
    puzzle_id: &str,
    raw_guess: &str,
) -> Result<Outcome, QueryError> {
    match evaluate(catalog, puzzle_id, raw_guess)? {
        Outcome::Correct { .. } => {
            let replacement = match success.success_replacement(puzzle_id) {
                Ok(replacement) => replacement,
                Err(e) => {
                    warn!(puzzle = puzzle_id, error = %e, "Unable to read success page");
                    None
                }
            };
            Ok(Outcome::Correct { replacement })
        }
        other => Ok(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::success::NoSuccessLookup;
    use std::io;

    const VAULT: &str = "<!--
title: Vault
answers: [gold key]
hints: [\"It's shiny\", It opens locks]
unlocks:
  treasure: [shiny key, gold]
-->
<p>Vault</p>
";

    fn catalog() -> Catalog {
        Catalog::from_sources(
            "",
            &[
                ("vault", VAULT),
                ("treasure", "<!--\ntitle: Treasure\nanswers: [chest, Coffer]\n-->\n"),
                (
                    "overlap",
                    "<!--\ntitle: Overlap\nanswers: [x]\nunlocks:\n  zulu: [both]\n  alpha: [both]\n-->\n",
                ),
            ],
        )
    }

    struct FixedLookup(&'static str);

    impl SuccessLookup for FixedLookup {
        fn success_replacement(&self, _puzzle_id: &str) -> io::Result<Option<String>> {
            Ok(Some(self.0.to_string()))
        }
    }

    struct FailingLookup;

    impl SuccessLookup for FailingLookup {
        fn success_replacement(&self, _puzzle_id: &str) -> io::Result<Option<String>> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
        }
    }

    #[test]
    fn test_vault_scenario() {
        let catalog = catalog();
        assert_eq!(
            evaluate(&catalog, "vault", "  Gold Key ").unwrap(),
            Outcome::Correct { replacement: None }
        );
        assert_eq!(
            evaluate(&catalog, "vault", "shiny key").unwrap(),
            Outcome::Unlock {
                target: "treasure".to_string()
            }
        );
        assert_eq!(
            evaluate(&catalog, "vault", "GOLD").unwrap(),
            Outcome::Unlock {
                target: "treasure".to_string()
            }
        );
        assert_eq!(evaluate(&catalog, "vault", "silver").unwrap(), Outcome::Incorrect);
    }

    #[test]
    fn test_every_answer_is_correct() {
        let catalog = catalog();
        for puzzle in catalog.puzzles() {
            for answer in &puzzle.metadata.answers {
                for variant in [
                    answer.clone(),
                    answer.to_uppercase(),
                    format!("  {answer}\t"),
                ] {
                    assert!(
                        evaluate(&catalog, &puzzle.id, &variant).unwrap().is_correct(),
                        "{variant:?} should solve {}",
                        puzzle.id
                    );
                }
            }
        }
    }

    #[test]
    fn test_every_trigger_unlocks_its_target() {
        let catalog = catalog();
        let vault = catalog.get("vault").unwrap();
        for (target, triggers) in &vault.metadata.unlocks {
            for trigger in triggers {
                assert_eq!(
                    evaluate(&catalog, "vault", trigger).unwrap(),
                    Outcome::Unlock {
                        target: target.clone()
                    }
                );
            }
        }
    }

    #[test]
    fn test_overlapping_triggers_pick_first_target() {
        let catalog = catalog();
        assert_eq!(
            evaluate(&catalog, "overlap", "both").unwrap(),
            Outcome::Unlock {
                target: "alpha".to_string()
            }
        );
    }

    #[test]
    fn test_answer_of_other_puzzle_is_incorrect() {
        let catalog = catalog();
        assert_eq!(evaluate(&catalog, "vault", "chest").unwrap(), Outcome::Incorrect);
    }

    #[test]
    fn test_errors() {
        let catalog = catalog();
        assert!(matches!(
            evaluate(&catalog, "nonexistent-id", "anything"),
            Err(QueryError::UnknownPuzzle(id)) if id == "nonexistent-id"
        ));
        assert!(matches!(
            evaluate(&catalog, "vault", "   "),
            Err(QueryError::EmptyInput)
        ));
        assert!(matches!(
            evaluate(&catalog, "", "gold key"),
            Err(QueryError::EmptyInput)
        ));
        // Blank input is reported before the puzzle is looked up
        assert!(matches!(
            evaluate(&catalog, "nonexistent-id", ""),
            Err(QueryError::EmptyInput)
        ));
    }

    #[test]
    fn test_evaluate_with_replacement() {
        let catalog = catalog();
        let lookup = FixedLookup("<p>Opened</p>");
        assert_eq!(
            evaluate_with(&catalog, &lookup, "vault", "gold key").unwrap(),
            Outcome::Correct {
                replacement: Some("<p>Opened</p>".to_string())
            }
        );
        assert_eq!(
            evaluate_with(&catalog, &lookup, "vault", "silver").unwrap(),
            Outcome::Incorrect
        );
        assert_eq!(
            evaluate_with(&catalog, &NoSuccessLookup, "vault", "gold key").unwrap(),
            Outcome::Correct { replacement: None }
        );
    }

    #[test]
    fn test_failing_lookup_keeps_outcome() {
        let catalog = catalog();
        assert_eq!(
            evaluate_with(&catalog, &FailingLookup, "vault", "shiny key").unwrap(),
            Outcome::Unlock {
                target: "treasure".to_string()
            }
        );
        assert_eq!(
            evaluate_with(&catalog, &FailingLookup, "vault", "gold key").unwrap(),
            Outcome::Correct { replacement: None }
        );
    }

    #[test]
    fn test_guess_result_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&GuessResult::Unlock).unwrap(), "\"unlock\"");
        assert_eq!(GuessResult::Correct.to_string(), "correct");
    }
}
