// File: ./src/command/mod.rs
//! Parsed form of one input line.
pub mod parser;

use crate::model::Task;
use strum::{Display, EnumIter, IntoStaticStr};

pub use parser::parse;

/// The command tag, without arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum CommandKind {
    Todo,
    Deadline,
    Event,
    List,
    Find,
    Mark,
    Unmark,
    Delete,
    #[strum(serialize = "consent-yes")]
    Consent,
    #[strum(serialize = "consent-no")]
    Decline,
    Bye,
}

impl CommandKind {
    /// How the command is typed, for help screens.
    pub fn usage(&self) -> &'static str {
        match self {
            CommandKind::Todo => "todo <description>",
            CommandKind::Deadline => "deadline <description> /by <d/m/yyyy hh:mm>",
            CommandKind::Event => "event <description> /from <d/m/yyyy hh:mm> /to <d/m/yyyy hh:mm>",
            CommandKind::List => "list",
            CommandKind::Find => "find <text>",
            CommandKind::Mark => "mark <number>",
            CommandKind::Unmark => "unmark <number>",
            CommandKind::Delete => "delete <number>",
            CommandKind::Consent => "Y",
            CommandKind::Decline => "N",
            CommandKind::Bye => "bye",
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            CommandKind::Todo => "Add a plain task",
            CommandKind::Deadline => "Add a task due at a given time",
            CommandKind::Event => "Add a task spanning a time range",
            CommandKind::List => "Show every task",
            CommandKind::Find => "Show tasks whose description contains the text (case-sensitive)",
            CommandKind::Mark => "Mark a task as done",
            CommandKind::Unmark => "Mark a task as not done",
            CommandKind::Delete => "Remove a task",
            CommandKind::Consent => "Tell Derek you are ready to work",
            CommandKind::Decline => "Tell Derek you are not",
            CommandKind::Bye => "Save and quit",
        }
    }
}

/// A validated command. Index arguments are 1-based and were in range for the
/// list they were parsed against; creation commands carry the finished task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(Task),
    List,
    Find(String),
    Mark(i64),
    Unmark(i64),
    Delete(i64),
    Consent,
    Decline,
    Bye,
}

impl Command {
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::Add(task) => match task.tag() {
                crate::model::TaskKindTag::Todo => CommandKind::Todo,
                crate::model::TaskKindTag::Deadline => CommandKind::Deadline,
                crate::model::TaskKindTag::Event => CommandKind::Event,
            },
            Command::List => CommandKind::List,
            Command::Find(_) => CommandKind::Find,
            Command::Mark(_) => CommandKind::Mark,
            Command::Unmark(_) => CommandKind::Unmark,
            Command::Delete(_) => CommandKind::Delete,
            Command::Consent => CommandKind::Consent,
            Command::Decline => CommandKind::Decline,
            Command::Bye => CommandKind::Bye,
        }
    }
}
