//! Quiz questions, feedback and scoring.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::fact::Fact;
use crate::table::{Multiplier, Table};

/// Number of answer choices per question.
pub const OPTIONS_PER_QUESTION: usize = 4;

/// Points for one correct answer.
pub const POINTS_PER_CORRECT: u32 = 10;

/// Best score at or above which a table counts as mastered.
pub const MASTERY_THRESHOLD: u32 = 90;

/// Most stars a round can earn.
pub const MAX_STARS: u32 = 3;

/// One multiple-choice question. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    fact: Fact,
    options: [u32; OPTIONS_PER_QUESTION],
}

impl Question {
    /// Build a question, checking that `options` are four distinct positive
    /// values that include the product.
    pub fn new(
        table: Table,
        multiplier: Multiplier,
        options: [u32; OPTIONS_PER_QUESTION],
    ) -> Result<Self> {
        let fact = Fact::new(table, multiplier);
        let invalid = |reason| ModelError::InvalidOptions {
            table: table.into(),
            multiplier: multiplier.into(),
            reason,
        };

        if options.contains(&0) {
            return Err(invalid("options must be positive"));
        }
        if !options.contains(&fact.product()) {
            return Err(invalid("options must contain the answer"));
        }
        for (i, value) in options.iter().enumerate() {
            if options[i + 1..].contains(value) {
                return Err(invalid("options must be distinct"));
            }
        }

        Ok(Self { fact, options })
    }

    pub fn fact(&self) -> Fact {
        self.fact
    }

    pub fn table(&self) -> Table {
        self.fact.table
    }

    pub fn multiplier(&self) -> Multiplier {
        self.fact.multiplier
    }

    /// The correct answer.
    pub fn answer(&self) -> u32 {
        self.fact.product()
    }

    /// Answer choices in display order.
    pub fn options(&self) -> &[u32; OPTIONS_PER_QUESTION] {
        &self.options
    }

    pub fn is_correct(&self, choice: u32) -> bool {
        choice == self.answer()
    }

    /// The prompt as shown to the child.
    pub fn prompt(&self) -> String {
        format!("{} × {} = ؟", self.fact.table, self.fact.multiplier)
    }
}

/// Result of one answer, shown for a short moment before moving on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feedback {
    Correct,
    Wrong,
}

impl Feedback {
    pub fn from_answer(correct: bool) -> Self {
        if correct { Self::Correct } else { Self::Wrong }
    }

    /// Points earned by this answer.
    pub const fn points(self) -> u32 {
        match self {
            Self::Correct => POINTS_PER_CORRECT,
            Self::Wrong => 0,
        }
    }

    /// Banner text.
    pub const fn message(self) -> &'static str {
        match self {
            Self::Correct => "آفرین! درسته",
            Self::Wrong => "اشکال نداره، دوباره سعی کن",
        }
    }
}

/// Stars for a final score: one per 30 points, at most three.
pub const fn stars(score: u32) -> u32 {
    let earned = score / 30;
    if earned > MAX_STARS { MAX_STARS } else { earned }
}

/// Whether a best score earns the mastered badge.
pub const fn is_mastered(best_score: u32) -> bool {
    best_score >= MASTERY_THRESHOLD
}
