use std::path::PathBuf;
use std::sync::Arc;

use arc_swap::ArcSwapOption;

use crate::data::model::TextDataset;

// ---------------------------------------------------------------------------
// Shared service state
// ---------------------------------------------------------------------------

/// State handed (behind an `Arc`) to every request handler.
///
/// The dataset is published as a single `Arc` swap: a load builds the whole
/// dataset off to the side and swaps it in with one atomic store, so readers
/// racing a `/load` always see a consistent (original, normalized) pair and
/// never a torn update. Concurrent loads are last-writer-wins.
pub struct AppState {
    /// File the `/load` endpoint reads from.
    pub source_path: PathBuf,

    /// Loaded dataset; `None` until the first successful load.
    dataset: ArcSwapOption<TextDataset>,
}

impl AppState {
    pub fn new(source_path: PathBuf) -> Self {
        Self {
            source_path,
            dataset: ArcSwapOption::const_empty(),
        }
    }

    /// Current dataset, if one has been loaded.
    pub fn dataset(&self) -> Option<Arc<TextDataset>> {
        self.dataset.load_full()
    }

    /// Atomically replace the published dataset. Returns the line count.
    pub fn publish(&self, dataset: TextDataset) -> usize {
        let total = dataset.len();
        self.dataset.store(Some(Arc::new(dataset)));
        total
    }

    /// `(is_loaded, total_lines)`; the count is 0 when nothing is loaded.
    pub fn status(&self) -> (bool, usize) {
        match self.dataset.load().as_ref() {
            Some(ds) => (true, ds.len()),
            None => (false, 0),
        }
    }
}
