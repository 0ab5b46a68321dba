// File: ./src/model/item.rs
use crate::error::CommandError;
use crate::model::timestamp::parse_timestamp;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Variant name without payload. Used in messages and the `[T]`/`[D]`/`[E]` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum TaskKindTag {
    Todo,
    Deadline,
    Event,
}

impl TaskKindTag {
    pub fn letter(&self) -> char {
        match self {
            TaskKindTag::Todo => 'T',
            TaskKindTag::Deadline => 'D',
            TaskKindTag::Event => 'E',
        }
    }

    pub fn from_letter(c: char) -> Option<Self> {
        match c {
            'T' => Some(TaskKindTag::Todo),
            'D' => Some(TaskKindTag::Deadline),
            'E' => Some(TaskKindTag::Event),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TaskKind {
    Todo,
    Deadline {
        due: NaiveDateTime,
    },
    Event {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

impl TaskKind {
    pub fn tag(&self) -> TaskKindTag {
        match self {
            TaskKind::Todo => TaskKindTag::Todo,
            TaskKind::Deadline { .. } => TaskKindTag::Deadline,
            TaskKind::Event { .. } => TaskKindTag::Event,
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub description: String,
    #[serde(default)]
    pub completed: bool,
    pub kind: TaskKind,
}

impl Task {
    /// Builds a task from already-parsed parts. The description is trimmed and
    /// must be a single non-empty line.
    pub fn from_parts(description: &str, kind: TaskKind) -> Result<Self, CommandError> {
        check_description(description, kind.tag())?;
        Ok(Self {
            description: description.trim().to_string(),
            completed: false,
            kind,
        })
    }

    /// Runs the constructor checks again on a task that did not come through
    /// a constructor, such as one read from a hand-edited file.
    pub fn revalidated(self) -> Result<Self, CommandError> {
        let mut task = Self::from_parts(&self.description, self.kind)?;
        task.completed = self.completed;
        Ok(task)
    }

    pub fn todo(description: &str) -> Result<Self, CommandError> {
        Self::from_parts(description, TaskKind::Todo)
    }

    pub fn deadline(description: &str, by: &str) -> Result<Self, CommandError> {
        check_description(description, TaskKindTag::Deadline)?;
        let due = parse_timestamp(by)?;
        Self::from_parts(description, TaskKind::Deadline { due })
    }

    pub fn event(description: &str, from: &str, to: &str) -> Result<Self, CommandError> {
        check_description(description, TaskKindTag::Event)?;
        let start = parse_timestamp(from)?;
        let end = parse_timestamp(to)?;
        Self::from_parts(description, TaskKind::Event { start, end })
    }

    pub fn tag(&self) -> TaskKindTag {
        self.kind.tag()
    }

    pub fn mark_completed(&mut self) {
        self.completed = true;
    }

    pub fn mark_incomplete(&mut self) {
        self.completed = false;
    }
}

// Description errors win over date errors, so check it before touching timestamps.
fn check_description(description: &str, tag: TaskKindTag) -> Result<(), CommandError> {
    let description = description.trim();
    if description.is_empty() {
        return Err(CommandError::EmptyDescription(tag));
    }
    // One task is one rendered line.
    if description.contains(['\n', '\r']) {
        return Err(CommandError::MultiLineDescription(tag));
    }
    Ok(())
}
