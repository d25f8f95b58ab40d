//! Explanation Collaborator.
//!
//! Asks a generative model to explain one multiplication fact to a child, in
//! Persian. Any failure (no key, timeout, rate limit, upstream error, empty
//! reply) falls back to a fixed sentence built from the fact itself, so the
//! caller always has something to show.
//!
//! [`TutorSession`] guards against stale replies: only the answer to the
//! latest request is accepted.

mod config;
mod error;
mod explainer;
mod gemini;
mod prompt;
mod session;

pub use config::{DEFAULT_API_KEY_ENV, DEFAULT_ENDPOINT, DEFAULT_MODEL, TutorSettings};
pub use error::{Result, TutorError};
pub use explainer::{Explainer, OfflineReason, Tutor, explain_or_fallback};
pub use gemini::GeminiClient;
pub use prompt::{SYSTEM_INSTRUCTION, fallback_explanation, prompt_for};
pub use session::{ExplanationState, Ticket, TutorSession};
