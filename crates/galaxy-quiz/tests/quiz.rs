//! Property tests for round generation and the engine.

use std::time::{Duration, Instant};

use galaxy_model::{Multiplier, Table};
use galaxy_quiz::{
    FEEDBACK_DELAY, FinishReason, QuizEngine, QuizEvent, QuizRound, QuizState, build_options,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

proptest! {
    #[test]
    fn options_are_distinct_positive_and_contain_answer(
        seed in any::<u64>(),
        t in 1u32..=10,
        m in 1u32..=10,
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let options = build_options(Table::new(t).unwrap(), Multiplier::new(m).unwrap(), &mut rng);

        prop_assert!(options.contains(&(t * m)));
        prop_assert!(options.iter().all(|&v| v > 0));
        for (i, a) in options.iter().enumerate() {
            for b in &options[i + 1..] {
                prop_assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn generated_round_is_a_permutation(seed in any::<u64>(), t in 1u32..=10) {
        let table = Table::new(t).unwrap();
        let round = QuizRound::generate(table, &mut StdRng::seed_from_u64(seed)).unwrap();

        let mut seen: Vec<u32> = round.multipliers().into_iter().map(Multiplier::get).collect();
        seen.sort_unstable();
        prop_assert_eq!(seen, (1..=10).collect::<Vec<_>>());
        prop_assert!(round.questions().iter().all(|q| q.table() == table));
    }

    #[test]
    fn score_is_ten_per_correct_answer(seed in any::<u64>(), pattern in any::<[bool; 10]>()) {
        let table = Table::new(7).unwrap();
        let mut engine = QuizEngine::with_rng(table, StdRng::seed_from_u64(seed));
        let mut now = Instant::now();
        engine.start(now).unwrap();

        let mut outcome = None;
        for right in pattern {
            let answer = engine.current_question().unwrap().answer();
            let choice = if right { answer } else { answer + 1000 };
            engine.submit_answer(choice, now);
            now += FEEDBACK_DELAY;
            for event in engine.poll(now) {
                if let QuizEvent::Finished(done) = event {
                    outcome = Some(done);
                }
            }
        }

        let expected = 10 * pattern.iter().filter(|&&r| r).count() as u32;
        let outcome = outcome.unwrap();
        prop_assert_eq!(outcome.score, expected);
        prop_assert_eq!(outcome.reason, FinishReason::Completed);
        prop_assert!(outcome.stars() <= 3);
    }
}

#[test]
fn slow_player_runs_out_of_time() {
    let mut engine = QuizEngine::with_rng(Table::new(9).unwrap(), StdRng::seed_from_u64(11));
    let t0 = Instant::now();
    engine.start(t0).unwrap();

    // One answer every four seconds: three seconds thinking, one of feedback.
    let mut now = t0;
    let mut answered = 0;
    while engine.state() == QuizState::InProgress {
        now += Duration::from_secs(3);
        engine.submit_answer(0, now);
        if engine.feedback().is_some() {
            answered += 1;
        }
        now += FEEDBACK_DELAY;
        engine.poll(now);
    }

    let outcome = engine.outcome().unwrap();
    assert_eq!(outcome.reason, FinishReason::TimedOut);
    assert_eq!(outcome.answered, answered);
    assert!(answered < 10);
    assert!(!outcome.should_record());
}
