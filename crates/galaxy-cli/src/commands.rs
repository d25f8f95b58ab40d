use std::path::Path;
use std::pin::pin;

use anyhow::{Context, Result};
use futures_util::{StreamExt, future, stream};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use galaxy_cli::render::progress_table;
use galaxy_cli::settings::Settings;
use galaxy_cli::views::{ModeView, parse_answer, question_screen, result_screen};
use galaxy_model::Fact;
use galaxy_persistence::{FileStore, KeyValueStore, LocalStore, MemoryStore};
use galaxy_quiz::{QuizEngine, QuizEvent, RoundOutcome, drive_round};
use galaxy_tutor::{Tutor, explain_or_fallback};

use crate::cli::{AskArgs, QuizArgs, ShowArgs};

/// Durable state behind whichever backend could be opened.
pub type Store = LocalStore<Box<dyn KeyValueStore>>;

/// Open the storage file, or fall back to memory when there is no data
/// directory at all.
pub fn open_store(settings: &Settings, data_dir: Option<&Path>) -> Store {
    let backend: Box<dyn KeyValueStore> = match settings.storage_path(data_dir) {
        Some(path) => {
            info!(path = %path.display(), "opening storage");
            Box::new(FileStore::open(path))
        }
        None => {
            warn!("no data directory available, progress will not be saved");
            Box::new(MemoryStore::new())
        }
    };
    LocalStore::open(backend)
}

pub fn run_show(settings: &Settings, args: &ShowArgs) -> Result<()> {
    let table = args.table.unwrap_or(settings.general.default_table);
    let mut view = ModeView::for_mode(args.mode, table);
    if let Some(multiplier) = args.multiplier
        && !view.set_multiplier(multiplier)
    {
        warn!(mode = args.mode.key(), "mode has no multiplier, ignoring --multiplier");
    }
    println!("{}", view.render(table));
    Ok(())
}

pub fn run_progress(store: &Store) -> Result<()> {
    println!("{}", progress_table(store.progress()));
    Ok(())
}

pub async fn run_ask(settings: &Settings, args: &AskArgs) -> Result<()> {
    let tutor = Tutor::from_settings(&settings.tutor);
    let text = explain_or_fallback(&tutor, Fact::new(args.table, args.multiplier)).await;
    println!("{}", text.trim());
    Ok(())
}

/// One timed round read from stdin. Returns the outcome, or `None` if stdin
/// closed before the round ended.
pub async fn run_quiz(
    settings: &Settings,
    store: &mut Store,
    args: &QuizArgs,
) -> Result<Option<RoundOutcome>> {
    let table = args.table.unwrap_or(settings.general.default_table);
    let mut engine = QuizEngine::new(table);
    engine
        .start(galaxy_quiz::now())
        .context("start quiz round")?;
    println!("{}", question_screen(&engine));

    let lines = BufReader::new(tokio::io::stdin()).lines();
    let answers = stream::unfold(lines, |mut lines| async move {
        match lines.next_line().await {
            Ok(Some(line)) => Some((line, lines)),
            Ok(None) => None,
            Err(error) => {
                warn!(%error, "failed to read stdin");
                None
            }
        }
    })
    .filter_map(|line| future::ready(parse_answer(&line)));
    let answers = pin!(answers);

    let outcome = drive_round(&mut engine, answers, |engine, event| match event {
        QuizEvent::Answered { feedback, .. } => println!("  {}", feedback.message()),
        QuizEvent::Advanced { .. } => println!("{}", question_screen(engine)),
        QuizEvent::Tick { time_left } if *time_left <= 5 && *time_left > 0 => {
            println!("  ⏰ {time_left}");
        }
        QuizEvent::Tick { .. } | QuizEvent::Finished(_) => {}
    })
    .await;

    if let Some(outcome) = &outcome {
        println!("{}", result_screen(outcome));
        record_outcome(store, outcome);
    }
    Ok(outcome)
}

/// Save a finished round. Storage failures are logged and the session goes
/// on with the score held in memory.
pub fn record_outcome(store: &mut Store, outcome: &RoundOutcome) -> bool {
    if !outcome.should_record() {
        info!(table = %outcome.table, score = outcome.score, "round timed out, not recorded");
        return false;
    }
    let previous = store.progress().best(outcome.table);
    if let Err(error) = store.record_score(outcome.table, outcome.score) {
        warn!(%error, "failed to save progress");
        eprintln!("{}", error.user_message());
    }
    outcome.score > previous
}
