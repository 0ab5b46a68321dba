// File: ./src/tasklist.rs
//! Ordered list of tasks addressed by 1-based position.
//!
//! Positions are not stable ids: removing task 2 moves task 3 into slot 2.
//! Every indexed accessor checks the range itself, even when the caller
//! already did, so a bad index can never corrupt the list.
use crate::error::CommandError;
use crate::model::Task;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn append(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Checks `index` against `[1, size]` and returns the 0-based offset.
    pub fn check_index(&self, index: i64) -> Result<usize, CommandError> {
        if index < 1 || index as u64 > self.tasks.len() as u64 {
            return Err(CommandError::IndexOutOfRange {
                index,
                size: self.tasks.len(),
            });
        }
        Ok((index - 1) as usize)
    }

    pub fn get(&self, index: i64) -> Result<&Task, CommandError> {
        let i = self.check_index(index)?;
        Ok(&self.tasks[i])
    }

    pub fn get_mut(&mut self, index: i64) -> Result<&mut Task, CommandError> {
        let i = self.check_index(index)?;
        Ok(&mut self.tasks[i])
    }

    pub fn remove_at(&mut self, index: i64) -> Result<Task, CommandError> {
        let i = self.check_index(index)?;
        Ok(self.tasks.remove(i))
    }

    /// Tasks whose description satisfies `predicate`, with their 1-based positions,
    /// in list order.
    pub fn find<P>(&self, mut predicate: P) -> Vec<(usize, &Task)>
    where
        P: FnMut(&str) -> bool,
    {
        self.tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| predicate(t.description.as_str()))
            .map(|(i, t)| (i + 1, t))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }
}

impl From<Vec<Task>> for TaskList {
    fn from(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }
}

impl Extend<Task> for TaskList {
    fn extend<I: IntoIterator<Item = Task>>(&mut self, iter: I) {
        self.tasks.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(names: &[&str]) -> TaskList {
        names
            .iter()
            .map(|n| Task::todo(n).unwrap())
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn test_bounds_enforced_without_mutation() {
        let mut list = list_of(&["a", "b", "c"]);
        let before = list.clone();

        for bad in [i64::MIN, -1, 0, 4, 5, i64::MAX] {
            assert!(matches!(
                list.get(bad),
                Err(CommandError::IndexOutOfRange { size: 3, .. })
            ));
            assert!(list.get_mut(bad).is_err());
            assert!(list.remove_at(bad).is_err());
        }
        assert_eq!(list, before);
    }

    #[test]
    fn test_empty_list_has_no_valid_index() {
        let mut list = TaskList::new();
        assert!(list.get(1).is_err());
        assert!(list.remove_at(1).is_err());
        assert!(list.is_empty());
    }

    #[test]
    fn test_remove_shifts_later_positions() {
        let names = ["a", "b", "c", "d", "e"];
        for i in 1..=names.len() as i64 {
            let mut list = list_of(&names);
            let removed = list.remove_at(i).unwrap();
            assert_eq!(removed.description, names[(i - 1) as usize]);
            assert_eq!(list.size(), names.len() - 1);

            for j in 1..=names.len() as i64 {
                let original = names[(j - 1) as usize];
                if j < i {
                    assert_eq!(list.get(j).unwrap().description, original);
                } else if j > i {
                    assert_eq!(list.get(j - 1).unwrap().description, original);
                }
            }
        }
    }

    #[test]
    fn test_find_keeps_order_and_positions() {
        let list = list_of(&["submit report", "read book", "report bug"]);
        let hits = list.find(|d| d.contains("report"));
        let hits: Vec<_> = hits.iter().map(|(i, t)| (*i, t.description.as_str())).collect();
        assert_eq!(hits, vec![(1, "submit report"), (3, "report bug")]);
        assert!(list.find(|d| d.contains("Report")).is_empty());
    }

    #[test]
    fn test_get_mut_changes_in_place() {
        let mut list = list_of(&["a", "b"]);
        list.get_mut(2).unwrap().mark_completed();
        assert!(list.get(2).unwrap().completed);
        assert!(!list.get(1).unwrap().completed);
    }
}
