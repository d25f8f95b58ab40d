//! Running a round on tokio.

use std::time::Instant;

use futures_util::{Stream, StreamExt};
use rand::Rng;

use crate::engine::{QuizEngine, QuizEvent, QuizState, RoundOutcome};

/// A player's answer: either the value itself or the option slot (0-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Value(u32),
    Slot(usize),
}

/// Current instant on the tokio clock.
///
/// Under a paused test runtime this follows the mocked clock.
pub fn now() -> Instant {
    tokio::time::Instant::now().into_std()
}

/// Drive a started engine until the round ends.
///
/// Answers are read from `answers` and every event is handed to `on_event`
/// together with the engine state after it. Returns the outcome, or `None`
/// if the answer stream closed while a question was still unanswered (the
/// round is then abandoned). A closed stream does not cut short the feedback
/// of an answer already given.
pub async fn drive_round<R, S, F>(
    engine: &mut QuizEngine<R>,
    mut answers: S,
    mut on_event: F,
) -> Option<RoundOutcome>
where
    R: Rng,
    S: Stream<Item = Answer> + Unpin,
    F: FnMut(&QuizEngine<R>, &QuizEvent),
{
    let mut open = true;
    loop {
        if engine.state() != QuizState::InProgress {
            return engine.outcome();
        }
        // Once the stream is gone, only a pending feedback may still finish.
        if !open && engine.feedback().is_none() {
            engine.abandon();
            return None;
        }
        let Some(deadline) = engine.next_deadline() else {
            return engine.outcome();
        };

        let events = tokio::select! {
            answer = answers.next(), if open => match answer {
                Some(Answer::Value(value)) => engine.submit_answer(value, now()),
                Some(Answer::Slot(slot)) => engine.submit_slot(slot, now()),
                None => {
                    open = false;
                    continue;
                }
            },
            () = tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)) => {
                engine.poll(now())
            }
        };

        for event in &events {
            on_event(engine, event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{FinishReason, ROUND_SECONDS};
    use crate::generator::QuizRound;
    use futures_util::stream;
    use galaxy_model::{Multiplier, Table};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::pin::pin;
    use std::time::Duration;

    const ORDER: [u32; 10] = [3, 1, 9, 2, 4, 5, 6, 7, 8, 10];

    fn started(table: u32) -> QuizEngine {
        let table = Table::new(table).unwrap();
        let order: Vec<Multiplier> = ORDER.iter().map(|&m| Multiplier::new(m).unwrap()).collect();
        let round = QuizRound::with_order(table, &order, &mut StdRng::seed_from_u64(5)).unwrap();
        let mut engine = QuizEngine::with_rng(table, StdRng::seed_from_u64(6));
        engine.start_round(round, now());
        engine
    }

    #[tokio::test(start_paused = true)]
    async fn test_drive_completed_round() {
        let mut engine = started(6);
        // Each answer waits out the previous feedback pause.
        let answers = pin!(stream::iter(ORDER).then(|m| async move {
            tokio::time::sleep(Duration::from_millis(1100)).await;
            Answer::Value(6 * m)
        }));

        let mut advanced = 0;
        let outcome = drive_round(&mut engine, answers, |_, event| {
            if matches!(event, QuizEvent::Advanced { .. }) {
                advanced += 1;
            }
        })
        .await
        .unwrap();

        assert_eq!(outcome.reason, FinishReason::Completed);
        assert_eq!(outcome.score, 100);
        assert_eq!(advanced, 9);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drive_times_out_without_answers() {
        let mut engine = started(4);
        let mut ticks = Vec::new();
        let outcome = drive_round(&mut engine, stream::pending(), |_, event| {
            if let QuizEvent::Tick { time_left } = event {
                ticks.push(*time_left);
            }
        })
        .await
        .unwrap();

        assert_eq!(outcome.reason, FinishReason::TimedOut);
        assert_eq!(outcome.score, 0);
        assert_eq!(ticks.len(), ROUND_SECONDS as usize);
        assert_eq!(ticks.last(), Some(&0));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stream_ending_after_last_answer_still_completes() {
        let mut engine = started(6);
        // Nine wrong answers, then the last one right; the stream ends while
        // its feedback is still showing.
        let answers = pin!(stream::iter(ORDER.into_iter().enumerate()).then(|(i, m)| async move {
            tokio::time::sleep(Duration::from_millis(1100)).await;
            if i == ORDER.len() - 1 {
                Answer::Value(6 * m)
            } else {
                Answer::Value(6 * m + 1)
            }
        }));

        let mut finished = false;
        let outcome = drive_round(&mut engine, answers, |_, event| {
            if matches!(event, QuizEvent::Finished(_)) {
                finished = true;
            }
        })
        .await
        .expect("last answer should complete the round");

        assert!(finished);
        assert_eq!(outcome.reason, FinishReason::Completed);
        assert_eq!(outcome.score, 10);
        assert_eq!(outcome.correct, 1);
        assert!(outcome.should_record());
    }

    #[tokio::test(start_paused = true)]
    async fn test_closed_stream_abandons_round() {
        let mut engine = started(4);
        let outcome = drive_round(&mut engine, stream::iter([Answer::Slot(0)]), |_, _| {}).await;
        assert!(outcome.is_none());
        assert_eq!(engine.state(), QuizState::NotStarted);
    }
}
