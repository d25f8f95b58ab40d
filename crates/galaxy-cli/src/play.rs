//! The interactive session.
//!
//! A single loop waits on three things at once: the next stdin line, a tutor
//! reply, and the quiz deadline when a round is running. Nothing else is
//! scheduled, so leaving the quiz leaves no timer behind.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::{self, UnboundedSender};
use tracing::{debug, warn};

use galaxy_cli::render::{hint_box, mode_bar, progress_table, table_bar};
use galaxy_cli::repl::{HELP, ReplCommand, parse_command};
use galaxy_cli::router::Router;
use galaxy_cli::views::{ModeView, result_screen};
use galaxy_model::Table;
use galaxy_quiz::{Answer, QuizEvent, now};
use galaxy_tutor::{Ticket, Tutor};

use crate::commands::{Store, record_outcome};

enum Flow {
    Continue,
    Quit,
}

struct Play<'a> {
    router: Router,
    store: &'a mut Store,
    tutor: Arc<Tutor>,
    replies: UnboundedSender<(Ticket, String)>,
}

pub async fn run_play(store: &mut Store, tutor: Tutor, table: Table) -> Result<()> {
    let (replies, mut reply_rx) = mpsc::unbounded_channel();
    let mut play = Play {
        router: Router::new(table),
        store,
        tutor: Arc::new(tutor),
        replies,
    };
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    if !play.tutor.is_online() {
        println!("(معلم کهکشانی آفلاینه؛ توضیح‌های آماده نشون داده میشه.)");
    }
    play.draw();

    loop {
        let deadline = play.quiz_deadline();
        let sleep_target = tokio::time::Instant::from_std(deadline.unwrap_or_else(now));
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("read stdin")? else {
                    debug!("stdin closed");
                    break;
                };
                if let Flow::Quit = play.handle_line(&line) {
                    break;
                }
            }
            Some((ticket, text)) = reply_rx.recv() => play.deliver(ticket, text),
            () = tokio::time::sleep_until(sleep_target), if deadline.is_some() => {
                play.poll_quiz();
            }
        }
    }

    if let Err(error) = play.store.save() {
        warn!(%error, "failed to save on exit");
        eprintln!("{}", error.user_message());
    }
    Ok(())
}

impl Play<'_> {
    fn quiz_deadline(&self) -> Option<Instant> {
        match self.router.view() {
            ModeView::Quiz(view) => view.next_deadline(),
            _ => None,
        }
    }

    fn draw(&self) {
        let mode = self.router.active_mode();
        println!();
        println!("{}", mode_bar(mode));
        println!(
            "{}",
            table_bar(self.router.selected_table(), self.store.progress())
        );
        if !self.store.hint_seen(mode) {
            println!("\n{}", hint_box(mode.hint()));
        }
        println!("\n{}", self.router.render());
    }

    fn say(message: &str) {
        println!("  {message}");
    }

    fn handle_line(&mut self, line: &str) -> Flow {
        let command = match parse_command(line) {
            Ok(command) => command,
            Err(error) => {
                debug!(%error, "bad input");
                Self::say(&error.user_message());
                return Flow::Continue;
            }
        };
        match command {
            ReplCommand::Redraw => self.draw(),
            ReplCommand::Mode(key) => match self.router.select_mode_key(&key) {
                Some(_) => self.draw(),
                None => Self::say(&format!("حالت «{key}» وجود نداره.")),
            },
            ReplCommand::Table(table) => {
                self.router.select_table(table);
                self.refresh_explanation();
                self.draw();
            }
            ReplCommand::Multiplier(multiplier) => {
                if self.router.view_mut().set_multiplier(multiplier) {
                    self.refresh_explanation();
                    self.draw();
                } else {
                    Self::say("این حالت عدد ضرب‌کننده نداره.");
                }
            }
            ReplCommand::Count => match self.router.view_mut() {
                ModeView::AreaModel(view) => {
                    view.toggle_count();
                    self.draw();
                }
                _ => Self::say("count فقط در حالت area_model کار می‌کنه."),
            },
            ReplCommand::Pick(row, column) => {
                if self.router.pick(row, column) {
                    self.draw();
                } else {
                    Self::say("pick فقط در حالت explore کار می‌کنه.");
                }
            }
            ReplCommand::Start => self.start_quiz(),
            ReplCommand::Answer(answer) => self.answer(answer),
            ReplCommand::Ask => self.ask(),
            ReplCommand::Dismiss => {
                let mode = self.router.active_mode();
                if let Err(error) = self.store.dismiss_hint(mode) {
                    warn!(%error, mode = mode.key(), "failed to save hint flag");
                }
                self.draw();
            }
            ReplCommand::Progress => println!("{}", progress_table(self.store.progress())),
            ReplCommand::Help => println!("{HELP}"),
            ReplCommand::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    fn start_quiz(&mut self) {
        let ModeView::Quiz(view) = self.router.view_mut() else {
            Self::say("اول برو به حالت مسابقه: mode quiz");
            return;
        };
        match view.start(now()) {
            Ok(()) => println!("\n{}", view.render()),
            Err(error) => {
                warn!(%error, "could not start round");
                Self::say("مسابقه شروع نشد، دوباره امتحان کن.");
            }
        }
    }

    fn answer(&mut self, answer: Answer) {
        let events = match self.router.view_mut() {
            ModeView::Quiz(view) if view.is_running() => view.answer(answer, now()),
            ModeView::Quiz(_) => {
                Self::say("برای شروع بنویس: start");
                return;
            }
            _ => {
                Self::say("جواب دادن فقط در حالت مسابقه معنی داره.");
                return;
            }
        };
        self.show_events(&events);
    }

    fn poll_quiz(&mut self) {
        let events = match self.router.view_mut() {
            ModeView::Quiz(view) => view.poll(now()),
            _ => return,
        };
        self.show_events(&events);
    }

    fn show_events(&mut self, events: &[QuizEvent]) {
        for event in events {
            match event {
                QuizEvent::Answered { feedback, .. } => Self::say(feedback.message()),
                QuizEvent::Advanced { .. } => println!("\n{}", self.router.render()),
                QuizEvent::Tick { time_left } => {
                    if *time_left > 0 && (*time_left <= 5 || *time_left % 10 == 0) {
                        Self::say(&format!("⏱ {time_left}"));
                    }
                }
                QuizEvent::Finished(outcome) => {
                    println!("\n{}", result_screen(outcome));
                    if record_outcome(self.store, outcome) {
                        Self::say("🎉 رکورد جدید!");
                    }
                }
            }
        }
    }

    fn ask(&mut self) {
        let table = self.router.selected_table();
        let ModeView::AiTutor(view) = self.router.view_mut() else {
            Self::say("اول برو به حالت معلم: mode ai_tutor");
            return;
        };
        view.request_explanation(table, Arc::clone(&self.tutor), self.replies.clone());
        self.draw();
    }

    /// After a table or multiplier change, fetch the new fact if the player
    /// has been asking the tutor.
    fn refresh_explanation(&mut self) {
        let table = self.router.selected_table();
        if let ModeView::AiTutor(view) = self.router.view_mut()
            && let Some(fact) = view.stale_fact(table)
        {
            debug!(%fact, "fetching explanation for new fact");
            view.request_explanation(table, Arc::clone(&self.tutor), self.replies.clone());
        }
    }

    fn deliver(&mut self, ticket: Ticket, text: String) {
        if let ModeView::AiTutor(view) = self.router.view_mut()
            && view.session_mut().accept(ticket, text)
        {
            self.draw();
        }
    }
}

