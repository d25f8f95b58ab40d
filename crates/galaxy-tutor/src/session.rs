//! In-flight explanation tracking.

use std::sync::Arc;

use galaxy_model::Fact;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::AbortHandle;

use crate::explainer::{Explainer, explain_or_fallback};

/// Identifies one explanation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
    fact: Fact,
}

impl Ticket {
    pub fn fact(&self) -> Fact {
        self.fact
    }
}

/// What the tutor view shows in its explanation slot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ExplanationState {
    #[default]
    Idle,
    Loading(Fact),
    Ready { fact: Fact, text: String },
}

/// Accepts only the reply to the most recent request.
///
/// Every request bumps the generation; replies carrying an older ticket are
/// dropped. Starting a new request or calling [`invalidate`](Self::invalidate)
/// also aborts the task still working on the previous one.
#[derive(Debug, Default)]
pub struct TutorSession {
    generation: u64,
    task: Option<AbortHandle>,
    state: ExplanationState,
}

impl TutorSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request for `fact` and return its ticket.
    pub fn request(&mut self, fact: Fact) -> Ticket {
        self.cancel_task();
        self.generation += 1;
        self.state = ExplanationState::Loading(fact);
        Ticket {
            generation: self.generation,
            fact,
        }
    }

    /// Spawn the explanation on the runtime; the reply arrives on `replies`.
    pub fn spawn_request<E>(
        &mut self,
        explainer: Arc<E>,
        fact: Fact,
        replies: UnboundedSender<(Ticket, String)>,
    ) -> Ticket
    where
        E: Explainer + 'static,
    {
        let ticket = self.request(fact);
        let handle = tokio::spawn(async move {
            let text = explain_or_fallback(explainer.as_ref(), fact).await;
            // The receiver is gone when the app is shutting down.
            let _ = replies.send((ticket, text));
        });
        self.task = Some(handle.abort_handle());
        ticket
    }

    /// Deliver a reply. Returns `false` if the ticket is stale.
    pub fn accept(&mut self, ticket: Ticket, text: String) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(fact = %ticket.fact, "dropping stale explanation");
            return false;
        }
        self.task = None;
        self.state = ExplanationState::Ready {
            fact: ticket.fact,
            text,
        };
        true
    }

    /// Forget any outstanding request.
    pub fn invalidate(&mut self) {
        self.cancel_task();
        self.generation += 1;
        self.state = ExplanationState::Idle;
    }

    pub fn state(&self) -> &ExplanationState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ExplanationState::Loading(_))
    }

    fn cancel_task(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for TutorSession {
    fn drop(&mut self) {
        self.cancel_task();
    }
}
