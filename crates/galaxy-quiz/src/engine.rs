//! The quiz round state machine.

use std::time::{Duration, Instant};

use galaxy_model::{Feedback, Question, Table, stars};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Result;
use crate::generator::QuizRound;

/// Seconds on the clock at the start of a round.
pub const ROUND_SECONDS: u32 = 30;

/// How long answer feedback stays up before the round moves on.
pub const FEEDBACK_DELAY: Duration = Duration::from_secs(1);

/// Countdown resolution.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Coarse round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    NotStarted,
    InProgress,
    Finished,
}

/// Why a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    /// Every question was answered.
    Completed,
    /// The countdown reached zero first.
    TimedOut,
}

/// Final result of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOutcome {
    pub table: Table,
    pub score: u32,
    pub correct: u32,
    pub answered: u32,
    pub reason: FinishReason,
}

impl RoundOutcome {
    /// Only rounds answered to the end count towards progress.
    pub fn should_record(&self) -> bool {
        self.reason == FinishReason::Completed
    }

    pub fn stars(&self) -> u32 {
        stars(self.score)
    }
}

/// Something that happened while the engine advanced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizEvent {
    /// The countdown dropped by one second.
    Tick { time_left: u32 },
    /// An answer was accepted.
    Answered { feedback: Feedback, score: u32 },
    /// Feedback cleared and the next question is up.
    Advanced { index: usize },
    /// The round is over.
    Finished(RoundOutcome),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Phase {
    NotStarted,
    Asking {
        next_tick: Instant,
    },
    Feedback {
        feedback: Feedback,
        resolve_at: Instant,
        /// Time that was left until the next tick when the answer came in.
        tick_remaining: Duration,
    },
    Finished(RoundOutcome),
}

/// One table's quiz.
///
/// All transitions happen inside `start`, `submit_answer` and `poll`, each a
/// single synchronous step. The only pending deadline is reported by
/// [`next_deadline`](Self::next_deadline).
#[derive(Debug)]
pub struct QuizEngine<R = StdRng> {
    table: Table,
    rng: R,
    round: Option<QuizRound>,
    index: usize,
    score: u32,
    correct: u32,
    answered: u32,
    time_left: u32,
    phase: Phase,
}

impl QuizEngine<StdRng> {
    /// Create an engine seeded from the OS.
    pub fn new(table: Table) -> Self {
        Self::with_rng(table, StdRng::from_entropy())
    }
}

impl<R: Rng> QuizEngine<R> {
    /// Create an engine with an explicit random source.
    pub fn with_rng(table: Table, rng: R) -> Self {
        Self {
            table,
            rng,
            round: None,
            index: 0,
            score: 0,
            correct: 0,
            answered: 0,
            time_left: ROUND_SECONDS,
            phase: Phase::NotStarted,
        }
    }

    /// Start (or restart) with a freshly shuffled round.
    pub fn start(&mut self, now: Instant) -> Result<()> {
        let round = QuizRound::generate(self.table, &mut self.rng)?;
        self.start_round(round, now);
        Ok(())
    }

    /// Start (or restart) with a prepared round.
    pub fn start_round(&mut self, round: QuizRound, now: Instant) {
        tracing::debug!(table = %round.table(), "starting quiz round");
        self.table = round.table();
        self.round = Some(round);
        self.index = 0;
        self.score = 0;
        self.correct = 0;
        self.answered = 0;
        self.time_left = ROUND_SECONDS;
        self.phase = Phase::Asking {
            next_tick: now + TICK_INTERVAL,
        };
    }

    /// Drop the current round without reporting anything.
    ///
    /// Returns `true` if a round was in progress.
    pub fn abandon(&mut self) -> bool {
        let was_running = self.state() == QuizState::InProgress;
        if was_running {
            tracing::debug!(table = %self.table, index = self.index, "quiz round abandoned");
        }
        self.round = None;
        self.phase = Phase::NotStarted;
        was_running
    }

    /// Switch tables. Any round in progress is abandoned.
    pub fn set_table(&mut self, table: Table) {
        if table != self.table {
            self.abandon();
            self.table = table;
        }
    }

    /// Answer the current question with a value.
    ///
    /// Deadlines due at `now` are processed first, so an answer that arrives
    /// after the clock ran out is ignored. Answers are also ignored while
    /// feedback is showing or when no round is running.
    pub fn submit_answer(&mut self, choice: u32, now: Instant) -> Vec<QuizEvent> {
        let mut events = self.poll(now);

        let Phase::Asking { next_tick } = self.phase else {
            return events;
        };
        let Some(question) = self.current_question() else {
            return events;
        };

        let feedback = Feedback::from_answer(question.is_correct(choice));
        self.score += feedback.points();
        self.answered += 1;
        if feedback == Feedback::Correct {
            self.correct += 1;
        }
        self.phase = Phase::Feedback {
            feedback,
            resolve_at: now + FEEDBACK_DELAY,
            tick_remaining: next_tick.saturating_duration_since(now),
        };
        tracing::trace!(choice, ?feedback, score = self.score, "answer submitted");
        events.push(QuizEvent::Answered {
            feedback,
            score: self.score,
        });
        events
    }

    /// Answer with the option at `slot` (0-based, display order).
    ///
    /// Slots past the last option are ignored.
    pub fn submit_slot(&mut self, slot: usize, now: Instant) -> Vec<QuizEvent> {
        let choice = self
            .current_question()
            .and_then(|q| q.options().get(slot).copied());
        match choice {
            Some(value) => self.submit_answer(value, now),
            None => self.poll(now),
        }
    }

    /// Fire every deadline at or before `now`, oldest first.
    pub fn poll(&mut self, now: Instant) -> Vec<QuizEvent> {
        let mut events = Vec::new();
        while let Some(deadline) = self.next_deadline() {
            if deadline > now {
                break;
            }
            self.fire(deadline, &mut events);
        }
        events
    }

    /// The single instant at which the engine next needs attention.
    pub fn next_deadline(&self) -> Option<Instant> {
        match self.phase {
            Phase::Asking { next_tick } => Some(next_tick),
            Phase::Feedback { resolve_at, .. } => Some(resolve_at),
            Phase::NotStarted | Phase::Finished(_) => None,
        }
    }

    fn fire(&mut self, deadline: Instant, events: &mut Vec<QuizEvent>) {
        match self.phase {
            Phase::Asking { .. } => {
                self.time_left = self.time_left.saturating_sub(1);
                events.push(QuizEvent::Tick {
                    time_left: self.time_left,
                });
                if self.time_left == 0 {
                    self.finish(FinishReason::TimedOut, events);
                } else {
                    self.phase = Phase::Asking {
                        next_tick: deadline + TICK_INTERVAL,
                    };
                }
            }
            Phase::Feedback { tick_remaining, .. } => {
                let total = self.round.as_ref().map_or(0, QuizRound::len);
                if self.index + 1 < total {
                    self.index += 1;
                    self.phase = Phase::Asking {
                        next_tick: deadline + tick_remaining,
                    };
                    events.push(QuizEvent::Advanced { index: self.index });
                } else {
                    self.index = total;
                    self.finish(FinishReason::Completed, events);
                }
            }
            Phase::NotStarted | Phase::Finished(_) => {}
        }
    }

    fn finish(&mut self, reason: FinishReason, events: &mut Vec<QuizEvent>) {
        let outcome = RoundOutcome {
            table: self.table,
            score: self.score,
            correct: self.correct,
            answered: self.answered,
            reason,
        };
        tracing::info!(
            table = %self.table,
            score = outcome.score,
            ?reason,
            "quiz round finished"
        );
        self.phase = Phase::Finished(outcome);
        events.push(QuizEvent::Finished(outcome));
    }

    pub fn state(&self) -> QuizState {
        match self.phase {
            Phase::NotStarted => QuizState::NotStarted,
            Phase::Asking { .. } | Phase::Feedback { .. } => QuizState::InProgress,
            Phase::Finished(_) => QuizState::Finished,
        }
    }

    pub fn table(&self) -> Table {
        self.table
    }

    /// Zero-based question index; equals the round length once completed.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Seconds left on the clock.
    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    /// Feedback currently on screen, if any.
    pub fn feedback(&self) -> Option<Feedback> {
        match self.phase {
            Phase::Feedback { feedback, .. } => Some(feedback),
            _ => None,
        }
    }

    /// The question being asked (or whose feedback is showing).
    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            Phase::Asking { .. } | Phase::Feedback { .. } => {
                self.round.as_ref().and_then(|round| round.get(self.index))
            }
            Phase::NotStarted | Phase::Finished(_) => None,
        }
    }

    pub fn round(&self) -> Option<&QuizRound> {
        self.round.as_ref()
    }

    /// Number of questions in the running round.
    pub fn total(&self) -> usize {
        self.round.as_ref().map_or(0, QuizRound::len)
    }

    /// The final result once the round is over.
    pub fn outcome(&self) -> Option<RoundOutcome> {
        match self.phase {
            Phase::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }
}
