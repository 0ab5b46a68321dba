// Malformed input must come back as a reply, never a panic, and never change the list.
use derek::{TaskList, execute, interpret};

const HOSTILE: &[&str] = &[
    "",
    "   ",
    "\t\n",
    "mark",
    "mark  ",
    "mark x",
    "mark -0",
    "mark 0",
    "mark 18446744073709551616",
    "delete +9",
    "unmark 1e3",
    "deadline",
    "deadline /by",
    "deadline x /by",
    "deadline x /by /by 1/1/2024 10:00",
    "deadline x /by 31/2/2024 10:00",
    "deadline   /by 1/1/2024 10:00",
    "event",
    "event /from",
    "event x /from",
    "event x /to",
    "event x /from /to",
    "event x /to 1/1/2024 10:00 /from 1/1/2024 09:00",
    "event x /from 1/1/2024 10:00 /to",
    "event x /from 1/1/2024 10:00 /to 1/1/2024 11:00 /from 1/1/2024 12:00",
    "event x /from 1/1/2024 10:00 /to /to",
    "event /from 1/1/2024 10:00 /to 1/1/2024 11:00",
    "todo",
    "todo a\nb",
    "deadline a\r\nb /by 1/1/2024 10:00",
    "TODO x",
    "List",
    "BYE",
    "yes",
    "no",
    "/by /from /to",
    "ünïcödé ✓",
];

#[test]
fn test_hostile_lines_leave_list_untouched() {
    let mut tasks = TaskList::new();
    interpret("todo a", &mut tasks);
    interpret("deadline b /by 1/1/2024 10:00", &mut tasks);
    let before = tasks.clone();

    for line in HOSTILE {
        let out = execute(line, &mut tasks);
        assert!(!out.reply.is_empty(), "'{}' gave an empty reply", line);
        assert_eq!(out.kind, None, "'{}' should be rejected", line);
        assert!(!out.mutated);
        assert_eq!(tasks, before, "'{}' changed the list", line);
    }
}

#[test]
fn test_hostile_lines_on_empty_list() {
    let mut tasks = TaskList::new();
    for line in HOSTILE {
        interpret(line, &mut tasks);
        assert!(tasks.is_empty(), "'{}' added something", line);
    }
    assert_eq!(
        interpret("mark 1", &mut tasks),
        "do you not know how to count??"
    );
}
