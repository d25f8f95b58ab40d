//! Quiz: intro, live question and result screens.

use std::time::Instant;

use galaxy_model::{Table, stars};
use galaxy_quiz::{Answer, QuizEngine, QuizEvent, QuizState, ROUND_SECONDS, RoundOutcome};

use super::heading;
use crate::render::star_string;

/// Letters used to pick an option by position.
pub const OPTION_LABELS: [char; 4] = ['a', 'b', 'c', 'd'];

/// Seconds left below which the clock is flagged.
const HURRY_SECONDS: u32 = 10;

#[derive(Debug)]
pub struct QuizView {
    engine: QuizEngine,
}

impl QuizView {
    pub fn new(table: Table) -> Self {
        Self {
            engine: QuizEngine::new(table),
        }
    }

    pub fn engine(&self) -> &QuizEngine {
        &self.engine
    }

    /// Start or restart a round.
    pub fn start(&mut self, now: Instant) -> galaxy_quiz::Result<()> {
        self.engine.start(now)
    }

    pub fn answer(&mut self, answer: Answer, now: Instant) -> Vec<QuizEvent> {
        match answer {
            Answer::Value(value) => self.engine.submit_answer(value, now),
            Answer::Slot(slot) => self.engine.submit_slot(slot, now),
        }
    }

    pub fn poll(&mut self, now: Instant) -> Vec<QuizEvent> {
        self.engine.poll(now)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.engine.next_deadline()
    }

    pub fn is_running(&self) -> bool {
        self.engine.state() == QuizState::InProgress
    }

    /// Switching tables abandons the round in progress.
    pub fn set_table(&mut self, table: Table) {
        self.engine.set_table(table);
    }

    pub fn render(&self) -> String {
        match self.engine.state() {
            QuizState::NotStarted => intro(self.engine.table()),
            QuizState::InProgress => question_screen(&self.engine),
            QuizState::Finished => match self.engine.outcome() {
                Some(outcome) => result_screen(&outcome),
                None => intro(self.engine.table()),
            },
        }
    }
}

fn intro(table: Table) -> String {
    let mut out = heading(
        &format!("آماده‌ای برای چالش ضرب عدد {table}؟"),
        "۱۰ سوال داری و ۳۰ ثانیه وقت! ببینیم چند تا ستاره میتونی بگیری.",
    );
    out.push_str("  (start: شروع مسابقه!)\n");
    out
}

/// The live question with its status line and options.
pub fn question_screen(engine: &QuizEngine) -> String {
    let Some(question) = engine.current_question() else {
        return String::new();
    };
    let time_left = engine.time_left();
    let clock = if time_left < HURRY_SECONDS {
        format!("⏰ {time_left} ثانیه!")
    } else {
        format!("⏱ {time_left} ثانیه")
    };
    let mut out = format!(
        "{clock}  |  سوال {} از {}  |  امتیاز: {}\n\n  {}\n\n",
        engine.index() + 1,
        engine.total(),
        engine.score(),
        question.prompt()
    );
    let options = question
        .options()
        .iter()
        .zip(OPTION_LABELS)
        .map(|(value, label)| format!("{label}) {value}"))
        .collect::<Vec<_>>()
        .join("    ");
    out.push_str(&format!("  {options}\n"));
    if let Some(feedback) = engine.feedback() {
        out.push_str(&format!("\n  {}\n", feedback.message()));
    }
    out
}

/// Final score with stars.
pub fn result_screen(outcome: &RoundOutcome) -> String {
    let mut out = heading("پایان مسابقه!", &star_string(outcome.score));
    out.push_str(&format!(
        "\n  {}\n  امتیاز نهایی شما\n  ({} از ۱۰ درست، {} ستاره)\n",
        outcome.score,
        outcome.correct,
        stars(outcome.score)
    ));
    if !outcome.should_record() {
        out.push_str(&format!("  وقت تموم شد! ({ROUND_SECONDS} ثانیه)\n"));
    }
    out.push_str("  (start: دوباره امتحان کن)\n");
    out
}

/// Parse a quiz answer: a number, or an option letter `a`-`d`.
pub fn parse_answer(input: &str) -> Option<Answer> {
    let input = input.trim();
    if let Ok(value) = input.parse::<u32>() {
        return Some(Answer::Value(value));
    }
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) => OPTION_LABELS
            .iter()
            .position(|&l| l == letter.to_ascii_lowercase())
            .map(Answer::Slot),
        _ => None,
    }
}
