//! Guess and hint recording
//!
//! The store is a write-only sink for solver activity. Only the no-op
//! backend exists; evaluation never reads from it.

use crate::engine::GuessResult;
use crate::Result;
use clap::ValueEnum;

/// Storage backend capability
pub trait GuessStore: Send + Sync {
    fn open(&self) -> Result<()>;

    fn close(&self) -> Result<()>;

    /// Record an evaluated guess
    fn record_guess(&self, puzzle: &str, guess: &str, result: GuessResult);

    /// Record a served hint
    fn record_hint(&self, puzzle: &str, index: usize);
}

/// Store that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopStore;

impl GuessStore for NoopStore {
    fn open(&self) -> Result<()> {
        Ok(())
    }

    fn close(&self) -> Result<()> {
        Ok(())
    }

    fn record_guess(&self, _puzzle: &str, _guess: &str, _result: GuessResult) {}

    fn record_hint(&self, _puzzle: &str, _index: usize) {}
}

/// Selectable storage backends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum StoreKind {
    #[default]
    Noop,
}

impl StoreKind {
    /// Construct the backend; it still has to be opened
    pub fn create(self) -> Box<dyn GuessStore> {
        match self {
            StoreKind::Noop => Box::new(NoopStore),
        }
    }
}
