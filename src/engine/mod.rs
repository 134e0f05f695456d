//! Read-only queries against the catalog
//!
//! Guess evaluation and hint resolution never mutate the catalog, so they
//! can run concurrently from any number of request handlers.

pub mod guess;
pub mod hint;
pub mod success;

pub use guess::{evaluate, evaluate_with, GuessResult, Outcome};
pub use hint::resolve_hint;
pub use success::{FsSuccessLookup, NoSuccessLookup, SuccessLookup};
