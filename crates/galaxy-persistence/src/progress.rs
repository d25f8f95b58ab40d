//! Best quiz score per table.

use std::collections::BTreeMap;

use galaxy_model::{Table, is_mastered};
use serde_json::{Map, Value};

use crate::error::{PersistenceError, Result};

/// Table to best score. Scores only ever go up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressMap {
    best: BTreeMap<Table, u32>,
}

impl ProgressMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the stored JSON object (`{"7": 90, ...}`).
    ///
    /// Malformed input yields an empty map with a warning. Entries whose key
    /// is not a table 1-10 or whose value is not a non-negative integer are
    /// skipped.
    pub fn from_json(text: &str) -> Self {
        let object: Map<String, Value> = match serde_json::from_str(text) {
            Ok(object) => object,
            Err(error) => {
                tracing::warn!(%error, "stored progress is malformed, starting fresh");
                return Self::default();
            }
        };

        let mut best = BTreeMap::new();
        for (key, value) in object {
            let Ok(table) = key.parse::<Table>() else {
                tracing::debug!(key = %key, "skipping progress entry for unknown table");
                continue;
            };
            let Some(score) = value.as_u64().and_then(|s| u32::try_from(s).ok()) else {
                tracing::debug!(key = %key, %value, "skipping progress entry with invalid score");
                continue;
            };
            best.insert(table, score);
        }
        Self { best }
    }

    /// Serialize to the stored JSON object form.
    pub fn to_json(&self) -> Result<String> {
        let object: Map<String, Value> = self
            .best
            .iter()
            .map(|(table, score)| (table.to_string(), Value::from(*score)))
            .collect();
        serde_json::to_string(&object).map_err(|source| PersistenceError::Serialization { source })
    }

    /// Keep the better of the stored and the new score.
    ///
    /// Returns `true` if the stored best went up.
    pub fn record(&mut self, table: Table, score: u32) -> bool {
        let entry = self.best.entry(table).or_insert(0);
        if score > *entry {
            *entry = score;
            true
        } else {
            false
        }
    }

    /// Best score for `table`, 0 if never played.
    pub fn best(&self, table: Table) -> u32 {
        self.best.get(&table).copied().unwrap_or(0)
    }

    pub fn is_mastered(&self, table: Table) -> bool {
        is_mastered(self.best(table))
    }

    /// Tables played so far, in order.
    pub fn iter(&self) -> impl Iterator<Item = (Table, u32)> + '_ {
        self.best.iter().map(|(&table, &score)| (table, score))
    }

    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }
}
