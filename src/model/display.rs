// File: ./src/model/display.rs
// Canonical one-line text form of a task, used for listings and plain-text export.
use crate::model::item::{Task, TaskKind, TaskKindTag};
use crate::model::timestamp::{format_display, parse_display};
use anyhow::{Result, anyhow};
use std::fmt;

impl Task {
    pub fn checkbox_symbol(&self) -> char {
        if self.completed { 'X' } else { ' ' }
    }

    /// `[T][ ] read book`, `[D][X] report (by: Dec 02 2024 18:00)`,
    /// `[E][ ] trip (from: Jan 01 2025 10:00 to: Jan 02 2025 10:00)`.
    pub fn render(&self) -> String {
        let head = format!(
            "[{}][{}] {}",
            self.tag().letter(),
            self.checkbox_symbol(),
            self.description
        );
        match &self.kind {
            TaskKind::Todo => head,
            TaskKind::Deadline { due } => format!("{} (by: {})", head, format_display(due)),
            TaskKind::Event { start, end } => format!(
                "{} (from: {} to: {})",
                head,
                format_display(start),
                format_display(end)
            ),
        }
    }

    /// Inverse of [`Task::render`].
    pub fn from_rendered(line: &str) -> Result<Self> {
        let line = line.trim_end_matches(['\r', '\n']);
        let bytes = line.as_bytes();
        if bytes.len() < 7
            || bytes[0] != b'['
            || bytes[2] != b']'
            || bytes[3] != b'['
            || bytes[5] != b']'
            || bytes[6] != b' '
        {
            return Err(anyhow!("Not a task line: '{}'", line));
        }

        let tag = TaskKindTag::from_letter(bytes[1] as char)
            .ok_or_else(|| anyhow!("Unknown task type '{}' in '{}'", bytes[1] as char, line))?;
        let completed = match bytes[4] {
            b'X' => true,
            b' ' => false,
            other => return Err(anyhow!("Unknown completion mark '{}'", other as char)),
        };
        // The first seven bytes are ASCII, so this is a char boundary.
        let body = &line[7..];

        let (description, kind) = match tag {
            TaskKindTag::Todo => (body, TaskKind::Todo),
            TaskKindTag::Deadline => {
                let (desc, due) = body
                    .strip_suffix(')')
                    .and_then(|b| b.rsplit_once(" (by: "))
                    .ok_or_else(|| anyhow!("Deadline without '(by: ...)': '{}'", line))?;
                let due = parse_display(due)
                    .ok_or_else(|| anyhow!("Bad deadline date in '{}'", line))?;
                (desc, TaskKind::Deadline { due })
            }
            TaskKindTag::Event => {
                let (desc, range) = body
                    .strip_suffix(')')
                    .and_then(|b| b.rsplit_once(" (from: "))
                    .ok_or_else(|| anyhow!("Event without '(from: ... to: ...)': '{}'", line))?;
                let (start, end) = range
                    .split_once(" to: ")
                    .ok_or_else(|| anyhow!("Event without end time: '{}'", line))?;
                let start = parse_display(start)
                    .ok_or_else(|| anyhow!("Bad event start in '{}'", line))?;
                let end =
                    parse_display(end).ok_or_else(|| anyhow!("Bad event end in '{}'", line))?;
                (desc, TaskKind::Event { start, end })
            }
        };

        let mut task = Task::from_parts(description, kind).map_err(|e| anyhow!("{}", e))?;
        task.completed = completed;
        Ok(task)
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_variants() {
        let mut t = Task::todo("read book").unwrap();
        assert_eq!(t.render(), "[T][ ] read book");
        t.mark_completed();
        assert_eq!(t.to_string(), "[T][X] read book");

        let d = Task::deadline("submit report", "2/12/2024 18:00").unwrap();
        assert_eq!(d.render(), "[D][ ] submit report (by: Dec 02 2024 18:00)");

        let e = Task::event("trip", "1/1/2025 10:00", "2/1/2025 10:00").unwrap();
        assert_eq!(
            e.render(),
            "[E][ ] trip (from: Jan 01 2025 10:00 to: Jan 02 2025 10:00)"
        );
    }

    #[test]
    fn test_decode_tolerates_parens_in_description() {
        let d = Task::deadline("call (mom) (by: never", "3/4/2024 9:05").unwrap();
        assert_eq!(Task::from_rendered(&d.render()).unwrap(), d);

        let e = Task::event("party (from: mine", "1/1/2025 20:00", "2/1/2025 02:00").unwrap();
        assert_eq!(Task::from_rendered(&e.render()).unwrap(), e);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        for bad in [
            "",
            "[T]",
            "[Q][ ] what",
            "[T][?] what",
            "[T][ ] ",
            "[D][ ] no date",
            "[D][ ] bad date (by: someday)",
            "[E][ ] half (from: Jan 01 2025 10:00)",
        ] {
            assert!(Task::from_rendered(bad).is_err(), "'{}' should fail", bad);
        }
    }

    #[test]
    fn test_decode_strips_line_endings() {
        let t = Task::from_rendered("[T][X] water plants\r\n").unwrap();
        assert_eq!(t.description, "water plants");
        assert!(t.completed);
    }
}
