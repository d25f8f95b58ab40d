//! Progress and hint flags on top of a key-value backend.

use galaxy_model::{Mode, Table};

use crate::error::Result;
use crate::progress::ProgressMap;
use crate::store::KeyValueStore;

/// Storage key holding the progress JSON object.
pub const PROGRESS_KEY: &str = "progress";

/// Prefix of the per-mode hint flags (`hint_seen_quiz`, ...).
pub const HINT_KEY_PREFIX: &str = "hint_seen_";

const SEEN: &str = "true";

/// The app's durable state.
///
/// Progress is read from the backend once, in [`open`](Self::open), and
/// written back in full on every update.
#[derive(Debug)]
pub struct LocalStore<S> {
    backend: S,
    progress: ProgressMap,
}

impl<S: KeyValueStore> LocalStore<S> {
    pub fn open(backend: S) -> Self {
        let progress = backend
            .get(PROGRESS_KEY)
            .map(|text| ProgressMap::from_json(&text))
            .unwrap_or_default();
        tracing::debug!(tables = progress.iter().count(), "loaded progress");
        Self { backend, progress }
    }

    pub fn progress(&self) -> &ProgressMap {
        &self.progress
    }

    /// Record a finished round's score and write progress back.
    ///
    /// The in-memory best is updated even if the write fails. Returns
    /// whether the best score for `table` went up.
    pub fn record_score(&mut self, table: Table, score: u32) -> Result<bool> {
        let improved = self.progress.record(table, score);
        if improved {
            tracing::info!(%table, score, "new best score");
        }
        let json = self.progress.to_json()?;
        self.backend.set(PROGRESS_KEY, &json)?;
        Ok(improved)
    }

    pub fn hint_seen(&self, mode: Mode) -> bool {
        self.backend
            .get(&hint_key(mode))
            .is_some_and(|value| value == SEEN)
    }

    /// Mark a mode's hint as seen for good.
    pub fn dismiss_hint(&mut self, mode: Mode) -> Result<()> {
        self.backend.set(&hint_key(mode), SEEN)
    }

    /// Flush the backend.
    pub fn save(&mut self) -> Result<()> {
        self.backend.flush()
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }
}

fn hint_key(mode: Mode) -> String {
    format!("{HINT_KEY_PREFIX}{}", mode.key())
}
