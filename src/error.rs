// File: ./src/error.rs
//! Errors produced while interpreting a command line.
//!
//! Every variant is recoverable: the interpreter turns it into the reply string
//! shown to the user, so the `Display` text *is* the user-facing message.
use crate::model::TaskKindTag;
use std::fmt;
use thiserror::Error;

/// Which usage hint to show for a malformed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Usage {
    /// A single unrecognised word.
    General,
    /// An unknown verb that reached the task-creation grammar.
    TaskKind,
    Deadline,
    Event,
}

impl fmt::Display for Usage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Usage::General => write!(
                f,
                "Please enter your commands correctly for Derek (e.g. todo (task)), he keeps throwing tantrums"
            ),
            Usage::TaskKind => write!(
                f,
                "Is it a todo, event, or deadline?\nPlease enter your commands correctly for Derek (e.g. todo (task)), he keeps throwing tantrums"
            ),
            Usage::Deadline => write!(
                f,
                "Please enter your commands correctly for Derek (deadline (task) /by (date))"
            ),
            Usage::Event => write!(
                f,
                "Please enter your commands correctly for Derek (event (task) /from (time) /to (time))"
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("{0}")]
    MalformedCommand(Usage),

    #[error("The description of a {0} cannot be empty. Derek refuses to track nothing.")]
    EmptyDescription(TaskKindTag),

    #[error("A {0} has to fit on one line. Derek cannot keep line breaks in a description.")]
    MultiLineDescription(TaskKindTag),

    #[error("Please enter your date in the correct format: DD/MM/YYYY HH:MM")]
    InvalidDateFormat(String),

    #[error("'{0}' is not a task number. Derek only understands digits.")]
    InvalidIndexFormat(String),

    #[error("do you not know how to count??")]
    IndexOutOfRange { index: i64, size: usize },
}
