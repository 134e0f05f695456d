//! JSON request and response shapes of the guess and hint endpoints

use crate::engine::{GuessResult, Outcome};
use serde::{Deserialize, Serialize};

/// Form body of `POST /guess`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GuessForm {
    #[serde(default)]
    pub puzzle: String,
    #[serde(default)]
    pub guess: String,
}

/// Response of `POST /guess`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GuessResponse {
    pub puzzle: String,
    /// The guess as submitted, before normalization
    pub guess: String,
    pub result: GuessResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlock: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replacement: Option<String>,
}

impl GuessResponse {
    pub fn new(puzzle: String, guess: String, outcome: Outcome) -> Self {
        let result = outcome.kind();
        let (unlock, replacement) = match outcome {
            Outcome::Correct { replacement } => (None, replacement),
            Outcome::Unlock { target } => (Some(target), None),
            Outcome::Incorrect => (None, None),
        };
        GuessResponse {
            puzzle,
            guess,
            result,
            unlock,
            replacement,
        }
    }
}

/// JSON body of `POST /hint`
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HintRequest {
    pub puzzle: String,
    pub hint_requested: i64,
}

/// Response of `POST /hint`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HintResponse {
    pub hint_requested: i64,
    pub hint: String,
}
