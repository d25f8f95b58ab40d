//! Timed multiplication quiz.
//!
//! A round is ten questions for one table, one per multiplier in shuffled
//! order, with a 30 second budget. The crate is split into:
//!
//! - `generator` - builds rounds and their four answer choices
//! - `engine` - the round state machine (`NotStarted -> InProgress -> Finished`)
//! - `driver` - runs a started engine on tokio against a stream of answers
//!
//! # Timing
//!
//! The engine never schedules anything itself. It exposes a single
//! [`QuizEngine::next_deadline`] (the next timer tick, or the end of the
//! feedback pause) and callers feed it the current instant through
//! [`QuizEngine::poll`]. Tests drive it with synthetic instants; the driver
//! sleeps until the deadline with `tokio::time`.

mod driver;
mod engine;
mod error;
mod generator;

pub use driver::{Answer, drive_round, now};
pub use engine::{
    FEEDBACK_DELAY, FinishReason, QuizEngine, QuizEvent, QuizState, ROUND_SECONDS, RoundOutcome,
    TICK_INTERVAL,
};
pub use error::{QuizError, Result};
pub use generator::{MAX_RANDOM_ATTEMPTS, QUESTIONS_PER_ROUND, QuizRound, build_options};
