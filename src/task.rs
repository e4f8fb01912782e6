//! Task records and the immutable task list.
//!
//! A [`TaskList`] is a value: every transformation returns a new list and
//! leaves the receiver untouched. Lookups are by exact id match and a
//! missing id is never an error.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique task identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TaskId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// One to-do item.
///
/// Serialized with camelCase keys, which is also the seed-data format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub is_urgent: bool,
}

impl TaskRecord {
    /// A freshly created record: both flags cleared.
    pub fn new(id: TaskId, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            is_completed: false,
            is_urgent: false,
        }
    }

    pub fn flag(&self, flag: TaskFlag) -> bool {
        match flag {
            TaskFlag::Completed => self.is_completed,
            TaskFlag::Urgent => self.is_urgent,
        }
    }

    /// Copy of this record with `flag` inverted.
    pub fn toggled(&self, flag: TaskFlag) -> Self {
        let mut next = self.clone();
        match flag {
            TaskFlag::Completed => next.is_completed = !next.is_completed,
            TaskFlag::Urgent => next.is_urgent = !next.is_urgent,
        }
        next
    }
}

/// The boolean fields a toggle can flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskFlag {
    Completed,
    Urgent,
}

impl TaskFlag {
    pub fn as_str(self) -> &'static str {
        match self {
            TaskFlag::Completed => "completed",
            TaskFlag::Urgent => "urgent",
        }
    }
}

impl fmt::Display for TaskFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Insertion-ordered collection of task records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList(Vec<TaskRecord>);

impl TaskList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[TaskRecord] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TaskRecord> {
        self.0.iter()
    }

    pub fn get(&self, id: TaskId) -> Option<&TaskRecord> {
        self.0.iter().find(|task| task.id == id)
    }

    pub fn contains(&self, id: TaskId) -> bool {
        self.get(id).is_some()
    }

    pub fn max_id(&self) -> Option<TaskId> {
        self.0.iter().map(|task| task.id).max()
    }

    /// Smallest id starting from 1 that no record uses.
    pub fn lowest_free_id(&self) -> TaskId {
        let mut ids: Vec<u64> = self.0.iter().map(|task| task.id.get()).collect();
        ids.sort_unstable();
        let mut candidate = 1u64;
        for id in ids {
            if id == candidate {
                candidate += 1;
            } else if id > candidate {
                break;
            }
        }
        TaskId::new(candidate)
    }

    /// New list with `record` appended at the end.
    pub fn with_added(&self, record: TaskRecord) -> Self {
        let mut next = Vec::with_capacity(self.0.len() + 1);
        next.extend(self.0.iter().cloned());
        next.push(record);
        Self(next)
    }

    /// New list without the record matching `id`.
    pub fn without(&self, id: TaskId) -> Self {
        Self(self.0.iter().filter(|task| task.id != id).cloned().collect())
    }

    /// New list with `flag` inverted on the record matching `id`.
    pub fn with_toggled(&self, id: TaskId, flag: TaskFlag) -> Self {
        Self(
            self.0
                .iter()
                .map(|task| {
                    if task.id == id {
                        task.toggled(flag)
                    } else {
                        task.clone()
                    }
                })
                .collect(),
        )
    }

    /// First id that appears more than once, if any.
    pub fn duplicate_id(&self) -> Option<TaskId> {
        let mut seen = std::collections::HashSet::with_capacity(self.0.len());
        self.0
            .iter()
            .map(|task| task.id)
            .find(|id| !seen.insert(*id))
    }
}

impl From<Vec<TaskRecord>> for TaskList {
    fn from(records: Vec<TaskRecord>) -> Self {
        Self(records)
    }
}

impl FromIterator<TaskRecord> for TaskList {
    fn from_iter<I: IntoIterator<Item = TaskRecord>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a TaskRecord;
    type IntoIter = std::slice::Iter<'a, TaskRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for TaskList {
    type Item = TaskRecord;
    type IntoIter = std::vec::IntoIter<TaskRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u64, title: &str) -> TaskRecord {
        TaskRecord::new(TaskId::new(id), title, "")
    }

    fn sample() -> TaskList {
        TaskList::from(vec![record(1, "one"), record(2, "two"), record(3, "three")])
    }

    #[test]
    fn lowest_free_id_fills_first_gap() {
        assert_eq!(TaskList::new().lowest_free_id(), TaskId::new(1));
        assert_eq!(sample().lowest_free_id(), TaskId::new(4));
        let gapped = TaskList::from(vec![record(3, "c"), record(1, "a"), record(u64::MAX, "z")]);
        assert_eq!(gapped.lowest_free_id(), TaskId::new(2));
    }

    #[test]
    fn with_added_appends_and_leaves_source_untouched() {
        let before = sample();
        let after = before.with_added(record(9, "nine"));
        assert_eq!(before.len(), 3);
        assert_eq!(after.len(), 4);
        assert_eq!(after.as_slice()[3].id, TaskId::new(9));
    }

    #[test]
    fn without_drops_only_matching_record() {
        let list = sample().without(TaskId::new(2));
        let ids: Vec<u64> = list.iter().map(|task| task.id.get()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn without_unknown_id_is_noop() {
        let list = sample();
        assert_eq!(list.without(TaskId::new(42)), list);
    }

    #[test]
    fn with_toggled_flips_one_field() {
        let list = sample().with_toggled(TaskId::new(2), TaskFlag::Urgent);
        let task = list.get(TaskId::new(2)).expect("task");
        assert!(task.is_urgent);
        assert!(!task.is_completed);
        assert_eq!(task.title, "two");
        assert!(!list.get(TaskId::new(1)).expect("task").is_urgent);
    }

    #[test]
    fn with_toggled_twice_restores() {
        let list = sample();
        let twice = list
            .with_toggled(TaskId::new(3), TaskFlag::Completed)
            .with_toggled(TaskId::new(3), TaskFlag::Completed);
        assert_eq!(twice, list);
    }

    #[test]
    fn duplicate_id_detected() {
        let list = TaskList::from(vec![record(1, "a"), record(2, "b"), record(1, "c")]);
        assert_eq!(list.duplicate_id(), Some(TaskId::new(1)));
        assert_eq!(sample().duplicate_id(), None);
    }

    #[test]
    fn record_uses_camel_case_keys() {
        let mut task = record(7, "Buy milk");
        task.is_urgent = true;
        let json = serde_json::to_value(&task).expect("json");
        assert_eq!(json["id"], 7);
        assert_eq!(json["isUrgent"], true);
        assert_eq!(json["isCompleted"], false);
    }

    #[test]
    fn record_defaults_missing_optional_fields() {
        let task: TaskRecord =
            serde_json::from_str(r#"{"id": 5, "title": "Walk dog"}"#).expect("parse");
        assert_eq!(task.description, "");
        assert!(!task.is_completed);
        assert!(!task.is_urgent);
    }
}
