//! Derived views over a task list.
//!
//! Lanes are recomputed from scratch on every call. Each lane keeps the
//! insertion order of the source list, and every record lands in exactly one
//! lane.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::task::{TaskList, TaskRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lane {
    Urgent,
    Normal,
    Completed,
}

impl Lane {
    pub const ALL: [Lane; 3] = [Lane::Urgent, Lane::Normal, Lane::Completed];

    pub fn of(task: &TaskRecord) -> Lane {
        if task.is_completed {
            Lane::Completed
        } else if task.is_urgent {
            Lane::Urgent
        } else {
            Lane::Normal
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Lane::Urgent => "Urgent",
            Lane::Normal => "To do",
            Lane::Completed => "Completed",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Lane::Urgent => "urgent",
            Lane::Normal => "normal",
            Lane::Completed => "completed",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Lane::Urgent => 0,
            Lane::Normal => 1,
            Lane::Completed => 2,
        }
    }

    pub fn next(self) -> Lane {
        Lane::ALL[(self.index() + 1) % Lane::ALL.len()]
    }

    pub fn prev(self) -> Lane {
        Lane::ALL[(self.index() + Lane::ALL.len() - 1) % Lane::ALL.len()]
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pending tasks flagged urgent.
pub fn pending_urgent(tasks: &TaskList) -> Vec<&TaskRecord> {
    in_lane(tasks, Lane::Urgent)
}

/// Pending tasks not flagged urgent.
pub fn pending_normal(tasks: &TaskList) -> Vec<&TaskRecord> {
    in_lane(tasks, Lane::Normal)
}

/// Completed tasks, urgent or not.
pub fn completed(tasks: &TaskList) -> Vec<&TaskRecord> {
    in_lane(tasks, Lane::Completed)
}

pub fn in_lane(tasks: &TaskList, lane: Lane) -> Vec<&TaskRecord> {
    tasks.iter().filter(|task| Lane::of(task) == lane).collect()
}

/// All three lanes of one task list.
#[derive(Debug, Clone, Serialize)]
pub struct Board<'a> {
    pub urgent: Vec<&'a TaskRecord>,
    pub normal: Vec<&'a TaskRecord>,
    pub completed: Vec<&'a TaskRecord>,
}

impl<'a> Board<'a> {
    pub fn new(tasks: &'a TaskList) -> Self {
        Self {
            urgent: pending_urgent(tasks),
            normal: pending_normal(tasks),
            completed: completed(tasks),
        }
    }

    pub fn lane(&self, lane: Lane) -> &[&'a TaskRecord] {
        match lane {
            Lane::Urgent => &self.urgent,
            Lane::Normal => &self.normal,
            Lane::Completed => &self.completed,
        }
    }

    pub fn counts(&self) -> LaneCounts {
        LaneCounts {
            urgent: self.urgent.len(),
            normal: self.normal.len(),
            completed: self.completed.len(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LaneCounts {
    pub urgent: usize,
    pub normal: usize,
    pub completed: usize,
}

impl LaneCounts {
    pub fn get(&self, lane: Lane) -> usize {
        match lane {
            Lane::Urgent => self.urgent,
            Lane::Normal => self.normal,
            Lane::Completed => self.completed,
        }
    }

    pub fn total(&self) -> usize {
        self.urgent + self.normal + self.completed
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::task::{TaskId, TaskRecord};

    fn record(id: u64, completed: bool, urgent: bool) -> TaskRecord {
        let mut task = TaskRecord::new(TaskId::new(id), format!("task {id}"), "");
        task.is_completed = completed;
        task.is_urgent = urgent;
        task
    }

    fn mixed() -> TaskList {
        TaskList::from(vec![
            record(1, false, true),
            record(2, false, false),
            record(3, true, true),
            record(4, false, true),
            record(5, true, false),
            record(6, false, false),
        ])
    }

    fn ids(lane: &[&TaskRecord]) -> Vec<u64> {
        lane.iter().map(|task| task.id.get()).collect()
    }

    #[test]
    fn lanes_keep_insertion_order() {
        let tasks = mixed();
        assert_eq!(ids(&pending_urgent(&tasks)), vec![1, 4]);
        assert_eq!(ids(&pending_normal(&tasks)), vec![2, 6]);
        assert_eq!(ids(&completed(&tasks)), vec![3, 5]);
    }

    #[test]
    fn lanes_partition_every_flag_combination() {
        let tasks = mixed();
        let board = Board::new(&tasks);
        let mut seen = HashSet::new();
        for lane in Lane::ALL {
            for task in board.lane(lane) {
                assert!(seen.insert(task.id), "{} in two lanes", task.id);
                assert_eq!(Lane::of(task), lane);
            }
        }
        let all: HashSet<TaskId> = tasks.iter().map(|task| task.id).collect();
        assert_eq!(seen, all);
        assert_eq!(board.counts().total(), tasks.len());
    }

    #[test]
    fn empty_list_has_empty_lanes() {
        let tasks = TaskList::new();
        let counts = Board::new(&tasks).counts();
        assert_eq!(counts.total(), 0);
    }

    #[test]
    fn lane_cycles_both_ways() {
        assert_eq!(Lane::Urgent.next(), Lane::Normal);
        assert_eq!(Lane::Completed.next(), Lane::Urgent);
        assert_eq!(Lane::Urgent.prev(), Lane::Completed);
    }
}
