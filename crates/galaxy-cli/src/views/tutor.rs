//! AI tutor: teaching notes for the table plus an on-demand explanation.

use std::sync::Arc;

use galaxy_model::{Fact, Multiplier, Table, notes_for};
use galaxy_tutor::{Explainer, ExplanationState, Ticket, TutorSession};
use tokio::sync::mpsc::UnboundedSender;

use super::heading;

#[derive(Debug)]
pub struct AiTutorView {
    multiplier: Multiplier,
    session: TutorSession,
    /// Set by the first `ask`; from then on every new fact is fetched.
    following: bool,
}

impl Default for AiTutorView {
    fn default() -> Self {
        Self {
            multiplier: Multiplier::clamped(5),
            session: TutorSession::new(),
            following: false,
        }
    }
}

impl AiTutorView {
    pub fn multiplier(&self) -> Multiplier {
        self.multiplier
    }

    /// A new multiplier makes any pending or shown explanation stale.
    pub fn set_multiplier(&mut self, multiplier: Multiplier) {
        if multiplier != self.multiplier {
            self.multiplier = multiplier;
            self.session.invalidate();
        }
    }

    pub fn invalidate(&mut self) {
        self.session.invalidate();
    }

    pub fn session(&self) -> &TutorSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut TutorSession {
        &mut self.session
    }

    /// The fact the explanation slot is about.
    pub fn fact(&self, table: Table) -> Fact {
        Fact::new(table, self.multiplier)
    }

    /// Fetch an explanation of the current fact in the background.
    pub fn request_explanation<E>(
        &mut self,
        table: Table,
        explainer: Arc<E>,
        replies: UnboundedSender<(Ticket, String)>,
    ) -> Ticket
    where
        E: Explainer + 'static,
    {
        self.following = true;
        let fact = self.fact(table);
        self.session.spawn_request(explainer, fact, replies)
    }

    /// The fact to fetch again after the table or multiplier changed, once
    /// the player has asked at least once.
    pub fn stale_fact(&self, table: Table) -> Option<Fact> {
        if !self.following {
            return None;
        }
        let fact = self.fact(table);
        match self.session.state() {
            ExplanationState::Loading(current) | ExplanationState::Ready { fact: current, .. }
                if *current == fact =>
            {
                None
            }
            _ => Some(fact),
        }
    }

    pub fn render(&self, table: Table) -> String {
        let notes = notes_for(table);
        let mut out = heading(
            &format!("راهنمای جدول {table}"),
            &format!("بیا با هم یاد بگیریم چطور جدول {table} رو راحت‌تر یاد بگیریم!"),
        );
        for (title, body) in [
            ("مفهوم اصلی", notes.concept),
            ("مثال از زندگی", notes.real_world),
            ("ترفند حل سریع", notes.trick),
        ] {
            out.push_str(&format!("\n# {title}\n  {body}\n"));
        }
        out.push_str(&format!("\n# تمرین کن!\n  {}\n", notes.example));

        let fact = self.fact(table);
        out.push_str(&format!("\n# از معلم کهکشانی بپرس: {fact}\n"));
        match self.session.state() {
            ExplanationState::Idle => {
                out.push_str("  (ask: توضیح بده | m <عدد>: عدد دیگه)\n");
            }
            ExplanationState::Loading(_) => out.push_str("  🤔 دارم فکر می‌کنم...\n"),
            ExplanationState::Ready { fact: shown, text } if *shown == fact => {
                out.push_str(&format!("  {}\n", text.trim()));
            }
            ExplanationState::Ready { .. } => {
                out.push_str("  (ask: توضیح بده)\n");
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use galaxy_tutor::{OfflineReason, Tutor};

    fn table(n: u32) -> Table {
        Table::new(n).unwrap()
    }

    #[test]
    fn test_idle_render_has_notes_and_prompt() {
        let view = AiTutorView::default();
        let text = view.render(table(4));
        assert!(text.contains("راهنمای جدول 4"));
        assert!(text.contains("مفهوم اصلی"));
        assert!(text.contains("ترفند حل سریع"));
        assert!(text.contains("4 × 5 = 20"));
        assert!(text.contains("ask"));
    }

    #[test]
    fn test_loading_then_ready() {
        let mut view = AiTutorView::default();
        let fact = view.fact(table(4));
        let ticket = view.session_mut().request(fact);
        assert!(view.render(table(4)).contains("دارم فکر می‌کنم"));

        assert!(view.session_mut().accept(ticket, "چهار دسته پنج تایی".to_string()));
        assert!(view.render(table(4)).contains("چهار دسته پنج تایی"));
    }

    #[test]
    fn test_new_multiplier_drops_reply() {
        let mut view = AiTutorView::default();
        let fact = view.fact(table(4));
        let ticket = view.session_mut().request(fact);
        view.set_multiplier(Multiplier::new(8).unwrap());

        assert!(!view.session_mut().accept(ticket, "late".to_string()));
        assert_eq!(view.session().state(), &ExplanationState::Idle);
        assert!(!view.render(table(4)).contains("late"));
    }

    #[test]
    fn test_same_multiplier_keeps_reply() {
        let mut view = AiTutorView::default();
        let fact = view.fact(table(3));
        let ticket = view.session_mut().request(fact);
        view.set_multiplier(Multiplier::new(5).unwrap());
        assert!(view.session_mut().accept(ticket, "ok".to_string()));
    }

    #[test]
    fn test_nothing_to_refetch_before_first_ask() {
        let mut view = AiTutorView::default();
        view.set_multiplier(Multiplier::new(7).unwrap());
        assert_eq!(view.stale_fact(table(4)), None);
    }

    #[tokio::test]
    async fn test_new_multiplier_fetches_again() {
        let tutor = Arc::new(Tutor::Offline(OfflineReason::Disabled));
        let (replies, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let mut view = AiTutorView::default();

        view.request_explanation(table(4), Arc::clone(&tutor), replies.clone());
        let (ticket, text) = rx.recv().await.unwrap();
        assert!(view.session_mut().accept(ticket, text));
        assert_eq!(view.stale_fact(table(4)), None);

        view.set_multiplier(Multiplier::new(7).unwrap());
        let fact = view.stale_fact(table(4)).expect("new fact should be fetched");
        assert_eq!(fact.product(), 28);

        view.request_explanation(table(4), tutor, replies);
        assert!(view.session().is_loading());
        let (ticket, text) = rx.recv().await.unwrap();
        assert!(view.session_mut().accept(ticket, text));
        assert!(view.render(table(4)).contains("4 دسته 7 تایی میشه 28"));
    }
}
