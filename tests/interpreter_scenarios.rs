// End-to-end behaviour of `interpret` on a live task list.
use chrono::{Datelike, Timelike};
use derek::{TaskKind, TaskList, interpret};

fn list_with(lines: &[&str]) -> TaskList {
    let mut tasks = TaskList::new();
    for line in lines {
        interpret(line, &mut tasks);
    }
    tasks
}

#[test]
fn test_todo_is_added() {
    let mut tasks = TaskList::new();
    let reply = interpret("todo read book", &mut tasks);

    assert_eq!(tasks.size(), 1);
    let t = tasks.get(1).unwrap();
    assert_eq!(t.description, "read book");
    assert!(!t.completed);
    assert_eq!(t.kind, TaskKind::Todo);

    assert!(reply.contains("[T][ ] read book"), "{}", reply);
    assert!(reply.contains("1 task in the list"), "{}", reply);
}

#[test]
fn test_deadline_is_added_with_due_time() {
    let mut tasks = TaskList::new();
    interpret("deadline submit report /by 2/12/2024 18:00", &mut tasks);

    assert_eq!(tasks.size(), 1);
    let t = tasks.get(1).unwrap();
    assert_eq!(t.description, "submit report");
    match t.kind {
        TaskKind::Deadline { due } => {
            assert_eq!((due.day(), due.month(), due.year()), (2, 12, 2024));
            assert_eq!((due.hour(), due.minute()), (18, 0));
        }
        ref other => panic!("Expected deadline, got {:?}", other),
    }
}

#[test]
fn test_deadline_without_by_is_rejected() {
    let mut tasks = list_with(&["todo read book"]);
    let reply = interpret("deadline submit report", &mut tasks);
    assert_eq!(tasks.size(), 1);
    assert!(reply.contains("deadline (task) /by (date)"), "{}", reply);
}

#[test]
fn test_mark_within_and_beyond_bounds() {
    let mut tasks = list_with(&["todo read book"]);

    let reply = interpret("mark 1", &mut tasks);
    assert!(tasks.get(1).unwrap().completed);
    assert!(reply.contains("[T][X] read book"), "{}", reply);

    let before = tasks.clone();
    let reply = interpret("mark 2", &mut tasks);
    assert_eq!(reply, "do you not know how to count??");
    assert_eq!(tasks, before);

    // unmark uses the same message
    assert_eq!(
        interpret("unmark 7", &mut tasks),
        "do you not know how to count??"
    );
}

#[test]
fn test_unmark_restores_incomplete() {
    let mut tasks = list_with(&["todo read book", "mark 1"]);
    let reply = interpret("unmark 1", &mut tasks);
    assert!(!tasks.get(1).unwrap().completed);
    assert!(reply.contains("not done yet"), "{}", reply);
}

#[test]
fn test_find_lists_only_matches() {
    let mut tasks = list_with(&["todo submit report", "todo read book"]);
    let reply = interpret("find report", &mut tasks);
    assert!(reply.contains("submit report"), "{}", reply);
    assert!(!reply.contains("read book"), "{}", reply);

    // Case-sensitive
    let reply = interpret("find Report", &mut tasks);
    assert!(reply.contains("No tasks match"), "{}", reply);
}

#[test]
fn test_find_keeps_list_positions() {
    let mut tasks = list_with(&["todo read book", "todo write report", "todo file report"]);
    let reply = interpret("find report", &mut tasks);
    let lines: Vec<&str> = reply.lines().skip(1).collect();
    assert_eq!(
        lines,
        vec!["2.[T][ ] write report", "3.[T][ ] file report"]
    );
}

#[test]
fn test_event_with_and_without_from() {
    let mut tasks = TaskList::new();
    interpret("event trip /from 1/1/2025 10:00 /to 2/1/2025 10:00", &mut tasks);
    assert_eq!(tasks.size(), 1);
    match tasks.get(1).unwrap().kind {
        TaskKind::Event { start, end } => {
            assert_eq!((start.day(), start.month()), (1, 1));
            assert_eq!((end.day(), end.month()), (2, 1));
            assert!(start < end);
        }
        ref other => panic!("Expected event, got {:?}", other),
    }

    let reply = interpret("event trip /to 2/1/2025 10:00", &mut tasks);
    assert_eq!(tasks.size(), 1);
    assert!(reply.contains("event (task) /from (time) /to (time)"), "{}", reply);
}

#[test]
fn test_delete_shifts_positions() {
    let mut tasks = list_with(&["todo a", "todo b", "todo c"]);
    let reply = interpret("delete 2", &mut tasks);
    assert!(reply.contains("[T][ ] b"), "{}", reply);
    assert!(reply.contains("2 tasks"), "{}", reply);
    assert_eq!(tasks.get(2).unwrap().description, "c");
}

#[test]
fn test_bad_index_text_is_an_error_reply() {
    let mut tasks = list_with(&["todo a"]);
    let reply = interpret("delete first", &mut tasks);
    assert!(reply.contains("'first' is not a task number"), "{}", reply);
    assert_eq!(tasks.size(), 1);
}

#[test]
fn test_bad_date_is_an_error_reply() {
    let mut tasks = TaskList::new();
    let reply = interpret("deadline report /by next friday", &mut tasks);
    assert_eq!(
        reply,
        "Please enter your date in the correct format: DD/MM/YYYY HH:MM"
    );
    let reply = interpret("event x /from 1/1/2025 10:00 /to 2025-01-02", &mut tasks);
    assert!(reply.contains("DD/MM/YYYY HH:MM"));
    assert!(tasks.is_empty());
}

#[test]
fn test_list_and_farewell() {
    let mut tasks = list_with(&["todo a", "deadline b /by 3/3/2024 12:00"]);
    let reply = interpret("list", &mut tasks);
    assert_eq!(
        reply,
        "Here are the tasks in your list:\n1.[T][ ] a\n2.[D][ ] b (by: Mar 03 2024 12:00)"
    );
    assert!(interpret("bye", &mut tasks).starts_with("Bye"));
}

#[test]
fn test_consent_replies() {
    let mut tasks = TaskList::new();
    assert!(interpret("y", &mut tasks).contains("ready"));
    assert!(interpret("N", &mut tasks).contains("Say Y"));
}

#[test]
fn test_unknown_commands() {
    let mut tasks = TaskList::new();
    assert!(interpret("blah", &mut tasks).contains("e.g. todo (task)"));
    let reply = interpret("buy milk", &mut tasks);
    assert!(reply.starts_with("Is it a todo, event, or deadline?"), "{}", reply);
    assert!(tasks.is_empty());
}
