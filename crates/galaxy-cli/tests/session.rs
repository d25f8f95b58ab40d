//! Router, views and storage working together the way the play loop uses
//! them.

use std::time::{Duration, Instant};

use galaxy_cli::render::table_bar;
use galaxy_cli::repl::{ReplCommand, parse_command};
use galaxy_cli::router::Router;
use galaxy_cli::views::ModeView;
use galaxy_model::{Mode, Multiplier, Table};
use galaxy_persistence::{LocalStore, MemoryStore};
use galaxy_quiz::{Answer, QuizEvent};

fn table(n: u32) -> Table {
    Table::new(n).unwrap()
}

#[test]
fn typed_commands_drive_the_router() {
    let mut router = Router::new(table(2));
    for line in ["mode area_model", "table 6", "m 7"] {
        match parse_command(line).unwrap() {
            ReplCommand::Mode(key) => {
                router.select_mode_key(&key).unwrap();
            }
            ReplCommand::Table(t) => router.select_table(t),
            ReplCommand::Multiplier(m) => assert!(router.view_mut().set_multiplier(m)),
            other => panic!("unexpected {other:?}"),
        }
    }
    assert_eq!(router.active_mode(), Mode::AreaModel);
    assert_eq!(router.view().multiplier(), Some(Multiplier::new(7).unwrap()));
    assert!(router.render().contains("42"));
}

#[test]
fn every_mode_renders_for_every_table() {
    let mut router = Router::new(table(1));
    for mode in Mode::ALL {
        router.select_mode(mode);
        for t in Table::all() {
            router.select_table(t);
            assert!(!router.render().is_empty(), "{mode} on {t}");
        }
    }
}

#[test]
fn perfect_quiz_round_is_saved_and_starred() {
    let mut store = LocalStore::open(MemoryStore::new());
    let mut router = Router::new(table(4));
    router.select_mode(Mode::Quiz);

    let start = Instant::now();
    let ModeView::Quiz(view) = router.view_mut() else {
        panic!("quiz view expected");
    };
    view.start(start).unwrap();

    let mut finished = None;
    let mut clock = start;
    for _ in 0..10 {
        let answer = view.engine().current_question().unwrap().answer();
        view.answer(Answer::Value(answer), clock);
        clock += Duration::from_millis(1000);
        for event in view.poll(clock) {
            if let QuizEvent::Finished(outcome) = event {
                finished = Some(outcome);
            }
        }
    }

    let outcome = finished.expect("round should finish");
    assert_eq!(outcome.score, 100);
    assert!(outcome.should_record());
    assert!(store.record_score(outcome.table, outcome.score).unwrap());
    assert!(view.render().contains("★★★"));
    assert_eq!(table_bar(table(4), store.progress()), "1 2 3 [4★] 5 6 7 8 9 10");
}

#[test]
fn leaving_the_quiz_drops_the_round() {
    let mut router = Router::new(table(3));
    router.select_mode(Mode::Quiz);
    if let ModeView::Quiz(view) = router.view_mut() {
        view.start(Instant::now()).unwrap();
    }
    router.select_mode(Mode::Patterns);
    router.select_mode(Mode::Quiz);
    let ModeView::Quiz(view) = router.view() else {
        panic!("quiz view expected");
    };
    assert!(!view.is_running());
    assert!(view.next_deadline().is_none());
}

#[test]
fn hints_are_remembered_per_mode() {
    let mut store = LocalStore::open(MemoryStore::new());
    assert!(!store.hint_seen(Mode::Quiz));
    store.dismiss_hint(Mode::Quiz).unwrap();
    assert!(store.hint_seen(Mode::Quiz));
    assert!(!store.hint_seen(Mode::Patterns));
}
