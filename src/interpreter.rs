// File: ./src/interpreter.rs
//! Applies one input line to a task list.
//!
//! This is the boundary where every `CommandError` becomes a reply string.
//! Parsing validates everything first, so a rejected line never touches the list.
use crate::command::{self, Command, CommandKind};
use crate::error::CommandError;
use crate::reply;
use crate::tasklist::TaskList;

/// Result of one interpretation cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub reply: String,
    /// `None` when the line was rejected.
    pub kind: Option<CommandKind>,
    /// Whether the list changed and should be persisted.
    pub mutated: bool,
}

impl Outcome {
    fn rejected(err: CommandError) -> Self {
        Self {
            reply: err.to_string(),
            kind: None,
            mutated: false,
        }
    }

    pub fn is_exit(&self) -> bool {
        self.kind == Some(CommandKind::Bye)
    }
}

/// Interprets `line` against `tasks` and returns Derek's reply.
pub fn interpret(line: &str, tasks: &mut TaskList) -> String {
    execute(line, tasks).reply
}

/// Like [`interpret`], but also reports what kind of command ran and whether
/// the list changed.
pub fn execute(line: &str, tasks: &mut TaskList) -> Outcome {
    let result = command::parse(line, tasks).and_then(|cmd| apply(cmd, tasks));
    match result {
        Ok(outcome) => {
            log::debug!(
                "Applied {:?} (mutated: {})",
                outcome.kind,
                outcome.mutated
            );
            outcome
        }
        Err(e) => {
            log::debug!("Rejected '{}': {:?}", line.trim(), e);
            Outcome::rejected(e)
        }
    }
}

fn apply(cmd: Command, tasks: &mut TaskList) -> Result<Outcome, CommandError> {
    let kind = cmd.kind();
    let (reply, mutated) = match cmd {
        Command::Add(task) => {
            let reply = reply::added(&task, tasks.size() + 1);
            tasks.append(task);
            (reply, true)
        }
        Command::Delete(index) => {
            let task = tasks.remove_at(index)?;
            (reply::removed(&task, tasks.size()), true)
        }
        Command::Mark(index) => {
            let task = tasks.get_mut(index)?;
            let changed = !task.completed;
            task.mark_completed();
            (reply::marked(task), changed)
        }
        Command::Unmark(index) => {
            let task = tasks.get_mut(index)?;
            let changed = task.completed;
            task.mark_incomplete();
            (reply::unmarked(task), changed)
        }
        Command::Find(query) => {
            let hits = tasks.find(|d| d.contains(query.as_str()));
            (reply::matches(&query, &hits), false)
        }
        Command::List => (reply::listing(tasks), false),
        Command::Consent => (reply::consent(), false),
        Command::Decline => (reply::decline(), false),
        Command::Bye => (reply::farewell(), false),
    };
    Ok(Outcome {
        reply,
        kind: Some(kind),
        mutated,
    })
}
