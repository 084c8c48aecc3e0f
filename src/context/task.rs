use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// A single to-do item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: i64,
    pub name: String,
    #[serde(rename = "isCompleted")]
    pub is_completed: bool,
}

impl Task {
    /// Status label used by `show`.
    pub fn status_label(&self) -> &'static str {
        if self.is_completed {
            "Complete"
        } else {
            "Incomplete"
        }
    }

    fn checkbox(&self) -> &'static str {
        if self.is_completed { "[x]" } else { "[ ]" }
    }
}

/// Renders the task as a list line: `<id>. [x] <name>`.
impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {} {}", self.id, self.checkbox(), self.name)
    }
}

/// Ordered collection of tasks. Insertion order is display order.
///
/// Lookups scan linearly and act on the first task carrying the requested
/// id, so a file with duplicated ids only ever has its first copy touched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskList {
    #[serde(default, deserialize_with = "null_as_empty")]
    tasks: Vec<Task>,
}

/// Older saves may contain `"tasks": null` for a list that was never filled.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Task>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Task>>::deserialize(deserializer)?.unwrap_or_default())
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// The id the next added task will receive.
    ///
    /// `None` once the highest stored id is `i64::MAX`.
    pub fn next_id(&self) -> Option<i64> {
        match self.tasks.iter().map(|t| t.id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        }
    }

    /// Append a new incomplete task and return it.
    ///
    /// Returns `None` without touching the list when no id is left.
    pub fn add(&mut self, name: impl Into<String>) -> Option<&Task> {
        let task = Task {
            id: self.next_id()?,
            name: name.into(),
            is_completed: false,
        };
        self.tasks.push(task);
        self.tasks.last()
    }

    pub fn get(&self, id: i64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn get_mut(&mut self, id: i64) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Remove the task with the given id, keeping the others in order.
    pub fn remove(&mut self, id: i64) -> Option<Task> {
        let index = self.tasks.iter().position(|t| t.id == id)?;
        Some(self.tasks.remove(index))
    }

    /// Mark a task complete. Completing an already complete task is a no-op.
    pub fn complete(&mut self, id: i64) -> Option<&Task> {
        let task = self.get_mut(id)?;
        task.is_completed = true;
        Some(task)
    }

    /// Replace a task's name, leaving its id and completion flag alone.
    pub fn rename(&mut self, id: i64, name: impl Into<String>) -> Option<&Task> {
        let task = self.get_mut(id)?;
        task.name = name.into();
        Some(task)
    }

    /// Drop every task, returning how many were removed.
    pub fn clear(&mut self) -> usize {
        let count = self.tasks.len();
        self.tasks.clear();
        count
    }
}

impl FromIterator<Task> for TaskList {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        Self {
            tasks: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: i64, name: &str) -> Task {
        Task {
            id,
            name: name.to_string(),
            is_completed: false,
        }
    }

    #[test]
    fn test_add_assigns_sequential_ids() {
        let mut list = TaskList::new();
        assert_eq!(list.add("Buy milk").unwrap().id, 1);
        assert_eq!(list.add("Walk dog").unwrap().id, 2);
        assert_eq!(list.add("Call mom").unwrap().id, 3);

        let names: Vec<_> = list.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Buy milk", "Walk dog", "Call mom"]);
        assert!(list.iter().all(|t| !t.is_completed));
    }

    #[test]
    fn test_add_uses_max_id_not_last() {
        let mut list: TaskList = vec![make_task(7, "seven"), make_task(3, "three")]
            .into_iter()
            .collect();

        assert_eq!(list.add("next").unwrap().id, 8);
    }

    #[test]
    fn test_removed_ids_are_not_renumbered_or_reused() {
        let mut list = TaskList::new();
        list.add("a");
        list.add("b");
        list.add("c");

        assert!(list.remove(1).is_some());
        assert!(list.remove(2).is_some());
        assert_eq!(list.add("d").unwrap().id, 4);

        let ids: Vec<_> = list.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 4]);
    }

    #[test]
    fn test_next_id_follows_current_max() {
        let mut list = TaskList::new();
        list.add("a");
        list.add("b");

        // the id is derived from what is stored, so dropping the highest
        // task frees its id; see "Id assignment" in DESIGN.md
        list.remove(2);
        assert_eq!(list.next_id(), Some(2));
    }

    #[test]
    fn test_add_refuses_when_ids_exhausted() {
        let mut list: TaskList = vec![make_task(i64::MAX, "last"), make_task(4, "four")]
            .into_iter()
            .collect();

        assert_eq!(list.next_id(), None);
        assert!(list.add("one more").is_none());
        assert_eq!(list.len(), 2);

        // freeing the top id makes room again
        list.remove(i64::MAX);
        assert_eq!(list.add("five").unwrap().id, 5);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut list = TaskList::new();
        list.add("a");
        list.add("b");
        list.add("c");

        let removed = list.remove(2).unwrap();
        assert_eq!(removed.name, "b");

        let ids: Vec<_> = list.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_remove_missing_leaves_list_unchanged() {
        let mut list = TaskList::new();
        list.add("a");
        let before = list.clone();

        assert!(list.remove(99).is_none());
        assert_eq!(list, before);
    }

    #[test]
    fn test_complete_is_idempotent() {
        let mut list = TaskList::new();
        list.add("a");

        assert!(list.complete(1).unwrap().is_completed);
        assert!(list.complete(1).unwrap().is_completed);
        assert!(list.complete(2).is_none());
    }

    #[test]
    fn test_rename_changes_only_name() {
        let mut list = TaskList::new();
        list.add("old");
        list.complete(1);

        let task = list.rename(1, "new").unwrap();
        assert_eq!(task, &Task { id: 1, name: "new".to_string(), is_completed: true });
        assert!(list.rename(5, "nope").is_none());
    }

    #[test]
    fn test_duplicate_ids_affect_first_match_only() {
        let mut list: TaskList = vec![make_task(1, "first"), make_task(1, "second")]
            .into_iter()
            .collect();

        list.complete(1);
        let flags: Vec<_> = list.iter().map(|t| t.is_completed).collect();
        assert_eq!(flags, vec![true, false]);

        let removed = list.remove(1).unwrap();
        assert_eq!(removed.name, "first");
        assert_eq!(list.get(1).map(|t| t.name.as_str()), Some("second"));
    }

    #[test]
    fn test_clear() {
        let mut list = TaskList::new();
        list.add("a");
        list.add("b");

        assert_eq!(list.clear(), 2);
        assert!(list.is_empty());
        assert_eq!(list.next_id(), Some(1));
    }

    #[test]
    fn test_display_line() {
        let mut task = make_task(4, "Walk dog");
        assert_eq!(task.to_string(), "4. [ ] Walk dog");
        assert_eq!(task.status_label(), "Incomplete");

        task.is_completed = true;
        assert_eq!(task.to_string(), "4. [x] Walk dog");
        assert_eq!(task.status_label(), "Complete");
    }

    #[test]
    fn test_json_field_names() {
        let mut list = TaskList::new();
        list.add("Buy milk");

        let json = serde_json::to_value(&list).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "tasks": [{ "id": 1, "name": "Buy milk", "isCompleted": false }] })
        );
    }

    #[test]
    fn test_json_null_or_missing_tasks_is_empty() {
        let list: TaskList = serde_json::from_str(r#"{"tasks":null}"#).unwrap();
        assert!(list.is_empty());

        let list: TaskList = serde_json::from_str("{}").unwrap();
        assert!(list.is_empty());
    }
}
