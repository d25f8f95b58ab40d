//! Line commands for the interactive session.

use galaxy_model::{ModelError, Multiplier, Table};
use galaxy_quiz::Answer;
use thiserror::Error;

use crate::views::parse_answer;

/// One line typed by the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Blank line: redraw.
    Redraw,
    /// `mode <key>`. The key is checked by the router.
    Mode(String),
    Table(Table),
    Multiplier(Multiplier),
    /// Toggle cell numbering in the area model.
    Count,
    Pick(Table, Multiplier),
    Start,
    Ask,
    /// `ok`: dismiss the hint.
    Dismiss,
    Progress,
    Help,
    Quit,
    /// A quiz answer: a number or an option letter.
    Answer(Answer),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReplError {
    #[error("`{command}` needs {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },

    #[error(transparent)]
    InvalidValue(#[from] ModelError),

    #[error("unknown command `{0}` (type help)")]
    Unknown(String),
}

impl ReplError {
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingArgument { command, what } => {
                format!("دستور {command} به {what} نیاز داره.")
            }
            Self::InvalidValue(_) => "عدد باید بین ۱ تا ۱۰ باشه.".to_string(),
            Self::Unknown(_) => "این دستور رو نمی‌شناسم. help رو بنویس.".to_string(),
        }
    }
}

pub const HELP: &str = "\
mode <key>     change mode (explore, repeated_addition, array_model, number_line,
               area_model, finger_method, patterns, quiz, ai_tutor)
table <n>      select table 1-10
m <n>          set the multiplier 1-10
count          toggle cell numbers (area model)
pick <r> <c>   look at one cell and select table r (explore)
start          start or restart the quiz
<n> | a-d      answer the current quiz question
ask            ask the tutor about the current fact
ok             dismiss the hint
progress       best scores
help           this list
quit           save and exit";

/// Parse one input line.
pub fn parse_command(line: &str) -> Result<ReplCommand, ReplError> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(ReplCommand::Redraw);
    };
    let command = match head.to_ascii_lowercase().as_str() {
        "mode" => ReplCommand::Mode(required(words.next(), "mode", "a mode key")?.to_string()),
        "table" | "t" => ReplCommand::Table(required(words.next(), "table", "a number")?.parse()?),
        "m" => ReplCommand::Multiplier(required(words.next(), "m", "a number")?.parse()?),
        "count" => ReplCommand::Count,
        "pick" => {
            let row = required(words.next(), "pick", "a row and a column")?.parse()?;
            let column = required(words.next(), "pick", "a row and a column")?.parse()?;
            ReplCommand::Pick(row, column)
        }
        "start" => ReplCommand::Start,
        "ask" => ReplCommand::Ask,
        "ok" => ReplCommand::Dismiss,
        "progress" => ReplCommand::Progress,
        "help" | "?" => ReplCommand::Help,
        "quit" | "exit" | "q" => ReplCommand::Quit,
        _ => match parse_answer(head) {
            Some(answer) => ReplCommand::Answer(answer),
            None => return Err(ReplError::Unknown(head.to_string())),
        },
    };
    Ok(command)
}

fn required<'a>(
    word: Option<&'a str>,
    command: &'static str,
    what: &'static str,
) -> Result<&'a str, ReplError> {
    word.ok_or(ReplError::MissingArgument { command, what })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_commands() {
        assert_eq!(
            parse_command("mode number_line").unwrap(),
            ReplCommand::Mode("number_line".to_string())
        );
        assert_eq!(
            parse_command("table 7").unwrap(),
            ReplCommand::Table(Table::new(7).unwrap())
        );
        assert_eq!(
            parse_command("  m 10 ").unwrap(),
            ReplCommand::Multiplier(Multiplier::new(10).unwrap())
        );
        assert_eq!(
            parse_command("pick 3 4").unwrap(),
            ReplCommand::Pick(Table::new(3).unwrap(), Multiplier::new(4).unwrap())
        );
    }

    #[test]
    fn test_blank_line_redraws() {
        assert_eq!(parse_command("   ").unwrap(), ReplCommand::Redraw);
    }

    #[test]
    fn test_answers() {
        assert_eq!(
            parse_command("21").unwrap(),
            ReplCommand::Answer(Answer::Value(21))
        );
        assert_eq!(parse_command("c").unwrap(), ReplCommand::Answer(Answer::Slot(2)));
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            parse_command("table"),
            Err(ReplError::MissingArgument { command: "table", .. })
        ));
        assert!(matches!(
            parse_command("table 11"),
            Err(ReplError::InvalidValue(_))
        ));
        assert!(matches!(parse_command("pick 3"), Err(ReplError::MissingArgument { .. })));
        assert_eq!(
            parse_command("dance"),
            Err(ReplError::Unknown("dance".to_string()))
        );
    }

    #[test]
    fn test_user_message_is_persian() {
        let error = parse_command("m 0").unwrap_err();
        assert!(error.user_message().contains("۱ تا ۱۰"));
    }
}
