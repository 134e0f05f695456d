//! Poozles - a small puzzle-hunt web application
//!
//! Puzzles are loaded once from a directory tree into an immutable
//! [`Catalog`]. Guesses and hint requests are read-only queries against it.

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod export;
pub mod puzzle;
pub mod render;
pub mod server;
pub mod store;

pub use catalog::Catalog;
pub use engine::{evaluate, evaluate_with, resolve_hint, Outcome};
pub use error::{CatalogError, PoozlesError, QueryError, Result};
