//! Text views, one per teaching mode.
//!
//! Each view owns its local state (multiplier, toggles, a quiz engine, a
//! tutor session) and renders to a plain string for the table it is given.
//! [`ModeView`] is the closed set; building a fresh one resets that state.

mod addition;
mod area;
mod array;
mod explore;
mod finger;
mod number_line;
mod patterns;
mod quiz;
mod tutor;

pub use addition::RepeatedAdditionView;
pub use area::AreaModelView;
pub use array::ArrayModelView;
pub use explore::ExploreView;
pub use finger::FingerMethodView;
pub use number_line::NumberLineView;
pub use patterns::PatternsView;
pub use quiz::{OPTION_LABELS, QuizView, parse_answer, question_screen, result_screen};
pub use tutor::AiTutorView;

use galaxy_model::{Mode, Multiplier, Table};

/// The view of the active mode.
#[derive(Debug)]
pub enum ModeView {
    Explore(ExploreView),
    RepeatedAddition(RepeatedAdditionView),
    ArrayModel(ArrayModelView),
    NumberLine(NumberLineView),
    AreaModel(AreaModelView),
    FingerMethod(FingerMethodView),
    Patterns(PatternsView),
    Quiz(QuizView),
    AiTutor(AiTutorView),
}

impl ModeView {
    /// A fresh view with default local state.
    pub fn for_mode(mode: Mode, table: Table) -> Self {
        match mode {
            Mode::Explore => Self::Explore(ExploreView::default()),
            Mode::RepeatedAddition => Self::RepeatedAddition(RepeatedAdditionView::default()),
            Mode::ArrayModel => Self::ArrayModel(ArrayModelView::default()),
            Mode::NumberLine => Self::NumberLine(NumberLineView::default()),
            Mode::AreaModel => Self::AreaModel(AreaModelView::default()),
            Mode::FingerMethod => Self::FingerMethod(FingerMethodView::default()),
            Mode::Patterns => Self::Patterns(PatternsView),
            Mode::Quiz => Self::Quiz(QuizView::new(table)),
            Mode::AiTutor => Self::AiTutor(AiTutorView::default()),
        }
    }

    pub fn mode(&self) -> Mode {
        match self {
            Self::Explore(_) => Mode::Explore,
            Self::RepeatedAddition(_) => Mode::RepeatedAddition,
            Self::ArrayModel(_) => Mode::ArrayModel,
            Self::NumberLine(_) => Mode::NumberLine,
            Self::AreaModel(_) => Mode::AreaModel,
            Self::FingerMethod(_) => Mode::FingerMethod,
            Self::Patterns(_) => Mode::Patterns,
            Self::Quiz(_) => Mode::Quiz,
            Self::AiTutor(_) => Mode::AiTutor,
        }
    }

    pub fn render(&self, table: Table) -> String {
        match self {
            Self::Explore(view) => view.render(table),
            Self::RepeatedAddition(view) => view.render(table),
            Self::ArrayModel(view) => view.render(table),
            Self::NumberLine(view) => view.render(table),
            Self::AreaModel(view) => view.render(table),
            Self::FingerMethod(view) => view.render(table),
            Self::Patterns(view) => view.render(table),
            Self::Quiz(view) => view.render(),
            Self::AiTutor(view) => view.render(table),
        }
    }

    /// The view's multiplier, for modes that have one.
    pub fn multiplier(&self) -> Option<Multiplier> {
        match self {
            Self::RepeatedAddition(view) => Some(view.multiplier),
            Self::ArrayModel(view) => Some(view.multiplier),
            Self::NumberLine(view) => Some(view.multiplier),
            Self::AreaModel(view) => Some(view.multiplier),
            Self::FingerMethod(view) => Some(view.multiplier),
            Self::AiTutor(view) => Some(view.multiplier()),
            Self::Explore(_) | Self::Patterns(_) | Self::Quiz(_) => None,
        }
    }

    /// Set the multiplier. Returns `false` for modes without one.
    pub fn set_multiplier(&mut self, multiplier: Multiplier) -> bool {
        match self {
            Self::RepeatedAddition(view) => view.multiplier = multiplier,
            Self::ArrayModel(view) => view.multiplier = multiplier,
            Self::NumberLine(view) => view.multiplier = multiplier,
            Self::AreaModel(view) => view.multiplier = multiplier,
            Self::FingerMethod(view) => view.multiplier = multiplier,
            Self::AiTutor(view) => view.set_multiplier(multiplier),
            Self::Explore(_) | Self::Patterns(_) | Self::Quiz(_) => return false,
        }
        true
    }

    /// React to a new table. Local multiplier state is kept.
    pub fn table_changed(&mut self, table: Table) {
        match self {
            Self::Quiz(view) => view.set_table(table),
            Self::AiTutor(view) => view.invalidate(),
            Self::Explore(_)
            | Self::RepeatedAddition(_)
            | Self::ArrayModel(_)
            | Self::NumberLine(_)
            | Self::AreaModel(_)
            | Self::FingerMethod(_)
            | Self::Patterns(_) => {}
        }
    }
}

/// Title line plus subtitle, as every view starts.
pub(crate) fn heading(title: &str, subtitle: &str) -> String {
    format!("== {title} ==\n{subtitle}\n")
}
