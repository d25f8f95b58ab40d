//! Core domain types for Math Galaxy.
//!
//! This crate holds everything that is pure data or pure arithmetic:
//!
//! - [`table`]: the `Table` and `Multiplier` operands (both 1–10)
//! - [`fact`]: `fact(a, b)` and the `Fact` helpers used by the visual modes
//! - [`mode`]: the closed set of teaching modes and their one-time hints
//! - [`question`]: quiz questions, answer feedback and scoring constants
//! - [`content`]: per-table secrets and teaching notes, with fallbacks
//!
//! No I/O happens here; the quiz engine, storage and tutor crates build on
//! these types.

pub mod content;
pub mod error;
pub mod fact;
pub mod mode;
pub mod question;
pub mod table;

pub use content::{TableSecret, TeachingNotes, fallback_secret, notes_for, secret_for};
pub use error::{ModelError, Result};
pub use fact::{Fact, NinesFingers, fact, facts_of};
pub use mode::{Mode, ModeHint};
pub use question::{
    Feedback, MASTERY_THRESHOLD, MAX_STARS, OPTIONS_PER_QUESTION, POINTS_PER_CORRECT, Question,
    is_mastered, stars,
};
pub use table::{MAX_OPERAND, MIN_OPERAND, Multiplier, Table};
