//! Shared handler state

use crate::catalog::Catalog;
use crate::engine::{FsSuccessLookup, SuccessLookup};
use crate::store::GuessStore;
use std::path::PathBuf;
use std::sync::Arc;

/// Everything a request handler needs; cloned per request
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    /// Root of the puzzle tree, for downloads
    pub root: Arc<PathBuf>,
    pub store: Arc<dyn GuessStore>,
    pub success: Arc<dyn SuccessLookup>,
}

impl AppState {
    /// State reading success pages from the puzzle tree at `root`
    pub fn new(catalog: Arc<Catalog>, root: PathBuf, store: Arc<dyn GuessStore>) -> Self {
        let success = Arc::new(FsSuccessLookup::new(root.clone()));
        AppState {
            catalog,
            root: Arc::new(root),
            store,
            success,
        }
    }

    pub fn with_success(mut self, success: Arc<dyn SuccessLookup>) -> Self {
        self.success = success;
        self
    }
}
