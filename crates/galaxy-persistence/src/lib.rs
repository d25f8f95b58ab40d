//! Durable local state for Math Galaxy.
//!
//! Everything lives in a flat string key-value store:
//!
//! - `progress` - JSON object mapping table number to best quiz score
//! - `hint_seen_<mode>` - `"true"` once a mode's hint has been dismissed
//!
//! [`FileStore`] keeps the store as one JSON file and replaces it atomically
//! on every write. [`MemoryStore`] is the in-process equivalent used by tests
//! and as the fallback when no data directory is available.

mod error;
mod io;
mod local;
mod progress;
mod store;

pub use error::{PersistenceError, Result};
pub use io::write_atomic;
pub use local::{HINT_KEY_PREFIX, LocalStore, PROGRESS_KEY};
pub use progress::ProgressMap;
pub use store::{FileStore, KeyValueStore, MemoryStore};
