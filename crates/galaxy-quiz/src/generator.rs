//! Round and answer-choice generation.

use galaxy_model::{Multiplier, OPTIONS_PER_QUESTION, Question, Table, fact};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::{QuizError, Result};

/// Questions in one round, one per multiplier.
pub const QUESTIONS_PER_ROUND: usize = 10;

/// Random distractor draws before falling back to neighbours of the answer.
pub const MAX_RANDOM_ATTEMPTS: usize = 64;

/// Ten questions for one table in play order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRound {
    table: Table,
    questions: Vec<Question>,
}

impl QuizRound {
    /// Build a round with a shuffled multiplier order.
    pub fn generate<R: Rng + ?Sized>(table: Table, rng: &mut R) -> Result<Self> {
        let mut order: Vec<Multiplier> = Multiplier::all().collect();
        order.shuffle(rng);
        Self::with_order(table, &order, rng)
    }

    /// Build a round that asks the multipliers in the given order.
    ///
    /// The order must be a permutation of 1–10.
    pub fn with_order<R: Rng + ?Sized>(
        table: Table,
        order: &[Multiplier],
        rng: &mut R,
    ) -> Result<Self> {
        check_permutation(order)?;

        let questions = order
            .iter()
            .map(|&multiplier| {
                let options = build_options(table, multiplier, rng);
                Question::new(table, multiplier, options).map_err(QuizError::from)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { table, questions })
    }

    pub fn table(&self) -> Table {
        self.table
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Multipliers in play order.
    pub fn multipliers(&self) -> Vec<Multiplier> {
        self.questions.iter().map(Question::multiplier).collect()
    }
}

fn check_permutation(order: &[Multiplier]) -> Result<()> {
    let mut seen = [false; QUESTIONS_PER_ROUND];
    for m in order {
        let slot = m.get() as usize - 1;
        if seen[slot] {
            return Err(QuizError::InvalidOrder(format!("{m} appears twice")));
        }
        seen[slot] = true;
    }
    if order.len() != QUESTIONS_PER_ROUND {
        return Err(QuizError::InvalidOrder(format!(
            "expected {QUESTIONS_PER_ROUND} multipliers, got {}",
            order.len()
        )));
    }
    Ok(())
}

/// Four distinct positive choices, one of them the answer, in random order.
///
/// Distractors are near-misses from the same table: `table * k ± 1` for a
/// random `k` in 1–10. Zero and duplicates are discarded. If the random
/// draws run out before four values are found, the remaining slots take the
/// closest unused neighbours of the answer, so generation always terminates.
pub fn build_options<R: Rng + ?Sized>(
    table: Table,
    multiplier: Multiplier,
    rng: &mut R,
) -> [u32; OPTIONS_PER_QUESTION] {
    let answer = fact(table.get(), multiplier.get());
    let mut options = [answer; OPTIONS_PER_QUESTION];
    let mut filled = 1;

    let mut push = |options: &mut [u32; OPTIONS_PER_QUESTION], candidate: u32| {
        if filled < OPTIONS_PER_QUESTION && candidate > 0 && !options[..filled].contains(&candidate)
        {
            options[filled] = candidate;
            filled += 1;
        }
        filled == OPTIONS_PER_QUESTION
    };

    let mut done = false;
    for _ in 0..MAX_RANDOM_ATTEMPTS {
        let base = table.get() * rng.gen_range(1..=10);
        let candidate = if rng.gen_bool(0.5) { base + 1 } else { base - 1 };
        if push(&mut options, candidate) {
            done = true;
            break;
        }
    }

    if !done {
        tracing::debug!(%table, %multiplier, "widening distractor range");
        let mut offset = 1;
        loop {
            if push(&mut options, answer + offset) {
                break;
            }
            if let Some(below) = answer.checked_sub(offset)
                && push(&mut options, below)
            {
                break;
            }
            offset += 1;
        }
    }

    options.shuffle(rng);
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn table(n: u32) -> Table {
        Table::new(n).unwrap()
    }

    fn order(values: &[u32]) -> Vec<Multiplier> {
        values.iter().map(|&v| Multiplier::new(v).unwrap()).collect()
    }

    #[test]
    fn test_round_uses_each_multiplier_once() {
        let mut rng = StdRng::seed_from_u64(7);
        let round = QuizRound::generate(table(7), &mut rng).unwrap();
        let mut values: Vec<u32> = round.multipliers().iter().map(|m| m.get()).collect();
        values.sort_unstable();
        assert_eq!(values, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_with_order_keeps_order() {
        let mut rng = StdRng::seed_from_u64(1);
        let fixed = order(&[3, 1, 9, 2, 4, 5, 6, 7, 8, 10]);
        let round = QuizRound::with_order(table(7), &fixed, &mut rng).unwrap();
        assert_eq!(round.multipliers(), fixed);
        assert_eq!(round.get(0).unwrap().answer(), 21);
        assert_eq!(round.get(1).unwrap().answer(), 7);
    }

    #[test]
    fn test_with_order_rejects_duplicates() {
        let mut rng = StdRng::seed_from_u64(1);
        let bad = order(&[1, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert!(matches!(
            QuizRound::with_order(table(3), &bad, &mut rng),
            Err(QuizError::InvalidOrder(_))
        ));
    }

    #[test]
    fn test_with_order_rejects_short_order() {
        let mut rng = StdRng::seed_from_u64(1);
        let short = order(&[1, 2, 3]);
        assert!(QuizRound::with_order(table(3), &short, &mut rng).is_err());
    }

    #[test]
    fn test_options_for_table_one() {
        let mut rng = StdRng::seed_from_u64(99);
        for m in Multiplier::all() {
            let options = build_options(table(1), m, &mut rng);
            assert!(options.contains(&m.get()));
            assert!(options.iter().all(|&v| v > 0));
        }
    }

    /// An rng that always draws the same values forces the fallback path.
    struct Stuck;

    impl rand::RngCore for Stuck {
        fn next_u32(&mut self) -> u32 {
            0
        }
        fn next_u64(&mut self) -> u64 {
            0
        }
        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0);
        }
        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
            dest.fill(0);
            Ok(())
        }
    }

    #[test]
    fn test_options_terminate_with_stuck_rng() {
        let options = build_options(table(1), Multiplier::new(1).unwrap(), &mut Stuck);
        let mut sorted = options;
        sorted.sort_unstable();
        sorted.windows(2).for_each(|w| assert_ne!(w[0], w[1]));
        assert!(options.contains(&1));
        assert!(options.iter().all(|&v| v > 0));
    }
}
