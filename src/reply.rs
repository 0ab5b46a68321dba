// File: ./src/reply.rs
// Derek's side of the conversation. Pure string builders, no state.
use crate::model::Task;
use crate::tasklist::TaskList;

const INDENT: &str = "  ";

fn count_phrase(size: usize) -> String {
    if size == 1 {
        "Now you have 1 task in the list.".to_string()
    } else {
        format!("Now you have {} tasks in the list.", size)
    }
}

pub fn greeting(user_name: Option<&str>) -> String {
    match user_name {
        Some(name) => format!("Hello {}! I'm Derek.\nWhat can I do for you?", name),
        None => "Hello! I'm Derek.\nWhat can I do for you?".to_string(),
    }
}

pub fn consent_prompt() -> &'static str {
    "Shall we get to work? (Y/N)"
}

pub fn consent() -> String {
    "Great! Derek is ready. Give him something to do.".to_string()
}

pub fn decline() -> String {
    "Fine. Derek will just sit here then. Say Y when you change your mind.".to_string()
}

pub fn farewell() -> String {
    "Bye. Hope to see you again soon!".to_string()
}

pub fn added(task: &Task, size: usize) -> String {
    format!(
        "Got it. I've added this task:\n{}{}\n{}",
        INDENT,
        task,
        count_phrase(size)
    )
}

pub fn removed(task: &Task, size: usize) -> String {
    format!(
        "Noted. I've removed this task:\n{}{}\n{}",
        INDENT,
        task,
        count_phrase(size)
    )
}

pub fn marked(task: &Task) -> String {
    format!("Nice! I've marked this task as done:\n{}{}", INDENT, task)
}

pub fn unmarked(task: &Task) -> String {
    format!(
        "OK, I've marked this task as not done yet:\n{}{}",
        INDENT, task
    )
}

pub fn listing(tasks: &TaskList) -> String {
    if tasks.is_empty() {
        return "Your list is empty. Derek is bored.".to_string();
    }
    let mut s = String::from("Here are the tasks in your list:");
    for (i, task) in tasks.iter().enumerate() {
        s.push_str(&format!("\n{}.{}", i + 1, task));
    }
    s
}

pub fn matches(query: &str, hits: &[(usize, &Task)]) -> String {
    if hits.is_empty() {
        return format!("No tasks match '{}'.", query);
    }
    let mut s = String::from("Here are the matching tasks in your list:");
    for (position, task) in hits {
        s.push_str(&format!("\n{}.{}", position, task));
    }
    s
}
