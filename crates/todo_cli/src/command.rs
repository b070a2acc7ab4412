//! Input-line parsing.
//!
//! Maps one line typed at the prompt to either a store action or a
//! session-level command. Anything that is not a known command is a new task,
//! so the prompt behaves like the add form.

use std::error::Error;
use std::fmt::{Display, Formatter};
use todo_core::{TaskAction, TaskId};

/// Parsed prompt input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Action(TaskAction),
    List,
    Help,
    Quit,
    Empty,
}

/// Input the prompt cannot act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    MissingId { command: &'static str },
    InvalidId { command: &'static str, raw: String },
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingId { command } => write!(f, "`{command}` needs a task id"),
            Self::InvalidId { command, raw } => {
                write!(f, "`{command}` expects a numeric task id, got `{raw}`")
            }
        }
    }
}

impl Error for CommandError {}

pub const HELP: &str = "\
commands:
  add <text>    add a task (alias: a); any other text is added as-is
  done <id>     mark a task as done (alias: d)
  delete <id>   delete a task (alias: rm)
  list          show all tasks (alias: ls)
  help          show this help (alias: ?)
  quit          leave (aliases: q, exit)";

/// Parses one prompt line.
pub fn parse_line(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Command::Empty);
    }

    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    let command = match (head.to_ascii_lowercase().as_str(), rest.is_empty()) {
        ("add" | "a", _) => Command::Action(TaskAction::add(rest)),
        ("done" | "d", _) => Command::Action(TaskAction::mark_done(parse_id("done", rest)?)),
        ("delete" | "rm", _) => Command::Action(TaskAction::delete(parse_id("delete", rest)?)),
        ("list" | "ls", true) => Command::List,
        ("help" | "?", true) => Command::Help,
        ("quit" | "q" | "exit", true) => Command::Quit,
        _ => Command::Action(TaskAction::add(line)),
    };
    Ok(command)
}

fn parse_id(command: &'static str, raw: &str) -> Result<TaskId, CommandError> {
    if raw.is_empty() {
        return Err(CommandError::MissingId { command });
    }
    raw.parse::<TaskId>().map_err(|_| CommandError::InvalidId {
        command,
        raw: raw.to_string(),
    })
}
