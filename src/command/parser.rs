// File: ./src/command/parser.rs
// Turns a raw input line into a validated Command.
use crate::command::Command;
use crate::error::{CommandError, Usage};
use crate::model::Task;
use crate::tasklist::TaskList;

const BY: &str = "/by";
const FROM: &str = "/from";
const TO: &str = "/to";

/// Classifies `line` and validates its arguments against `tasks`.
///
/// Nothing is mutated here. A returned `Command::Add` already holds a fully
/// built task, and index commands hold an index that is in range for `tasks`.
pub fn parse(line: &str, tasks: &TaskList) -> Result<Command, CommandError> {
    let line = line.trim();

    match line {
        "bye" => return Ok(Command::Bye),
        "list" => return Ok(Command::List),
        _ => {}
    }
    if line.eq_ignore_ascii_case("y") {
        return Ok(Command::Consent);
    }
    if line.eq_ignore_ascii_case("n") {
        return Ok(Command::Decline);
    }

    // A lone word never reaches the task grammar.
    let Some((verb, rest)) = line.split_once(char::is_whitespace) else {
        return Err(CommandError::MalformedCommand(Usage::General));
    };
    let rest = rest.trim();

    match verb {
        "delete" => Ok(Command::Delete(parse_index(rest, tasks)?)),
        "mark" => Ok(Command::Mark(parse_index(rest, tasks)?)),
        "unmark" => Ok(Command::Unmark(parse_index(rest, tasks)?)),
        "find" => Ok(Command::Find(rest.to_string())),
        _ => parse_task(verb, rest).map(Command::Add),
    }
}

/// Reads the first token of `rest` as a 1-based task number. Trailing tokens are ignored.
fn parse_index(rest: &str, tasks: &TaskList) -> Result<i64, CommandError> {
    let token = rest.split_whitespace().next().unwrap_or_default();
    let index = token
        .parse::<i64>()
        .map_err(|_| CommandError::InvalidIndexFormat(token.to_string()))?;
    tasks.check_index(index)?;
    Ok(index)
}

fn parse_task(verb: &str, rest: &str) -> Result<Task, CommandError> {
    match verb {
        "todo" => Task::todo(rest),
        "deadline" => {
            let malformed = CommandError::MalformedCommand(Usage::Deadline);
            let (description, by) = split_exactly_once(rest, BY).ok_or(malformed.clone())?;
            if by.trim().is_empty() {
                return Err(malformed);
            }
            Task::deadline(description, by)
        }
        "event" => {
            let malformed = CommandError::MalformedCommand(Usage::Event);
            let (description, times) =
                split_exactly_once(rest, FROM).ok_or(malformed.clone())?;
            let (from, to) = split_exactly_once(times, TO).ok_or(malformed.clone())?;
            if from.trim().is_empty() || to.trim().is_empty() {
                return Err(malformed);
            }
            Task::event(description, from, to)
        }
        _ => Err(CommandError::MalformedCommand(Usage::TaskKind)),
    }
}

/// Splits around `delimiter` only when it occurs exactly once.
fn split_exactly_once<'a>(text: &'a str, delimiter: &str) -> Option<(&'a str, &'a str)> {
    if text.matches(delimiter).count() != 1 {
        return None;
    }
    text.split_once(delimiter)
}
