//! Search Task
//!
//! Runs the cancellable search on tokio's blocking pool so an async caller
//! can await it or stop it. Still exactly one search loop per task.

use tokio::task::JoinHandle;

use crate::application::config::PowConfig;
use crate::application::search::{CancelFlag, DifficultySearch};
use crate::domain::entities::Solution;
use crate::domain::nonce_source::{NonceSource, RngNonceSource};
use crate::domain::value_objects::{Difficulty, Label};
use crate::error::{PowError, PowResult};

/// Handle to a search running on the blocking pool
#[derive(Debug)]
pub struct SearchHandle {
    cancel: CancelFlag,
    task: JoinHandle<PowResult<Solution>>,
}

impl SearchHandle {
    /// Ask the search to stop before its next attempt
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn cancel_flag(&self) -> CancelFlag {
        self.cancel.clone()
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait for the outcome
    pub async fn join(self) -> PowResult<Solution> {
        match self.task.await {
            Ok(result) => result,
            Err(e) => Err(PowError::TaskFailed(e.to_string())),
        }
    }
}

/// Spawn a search with the OS-seeded nonce source
///
/// Must be called from within a tokio runtime.
pub fn spawn_search(label: Label, difficulty: Difficulty, config: PowConfig) -> SearchHandle {
    spawn_search_with(label, difficulty, config, RngNonceSource::os)
}

/// Spawn a search whose nonce source is built on the worker thread
pub fn spawn_search_with<S, F>(
    label: Label,
    difficulty: Difficulty,
    config: PowConfig,
    make_source: F,
) -> SearchHandle
where
    S: NonceSource,
    F: FnOnce() -> S + Send + 'static,
{
    let cancel = CancelFlag::new();
    let worker_cancel = cancel.clone();

    let task = tokio::task::spawn_blocking(move || {
        let mut search = DifficultySearch::with_source(make_source(), config);
        search.search_cancellable(&label, difficulty, &worker_cancel)
    });

    SearchHandle { cancel, task }
}
