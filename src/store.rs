//! The task store: the current task list plus its id source.
//!
//! Every mutation builds a new [`TaskList`] from the current one and
//! installs it. Callers holding a clone of an earlier list keep seeing the
//! old contents.

use tracing::debug;

use crate::id::{IdGenerator, IdStrategy};
use crate::task::{TaskFlag, TaskId, TaskList, TaskRecord};

#[derive(Debug, Clone)]
pub struct TaskStore {
    tasks: TaskList,
    ids: IdGenerator,
}

impl TaskStore {
    /// Empty store using sequential ids.
    pub fn new() -> Self {
        Self::with_strategy(TaskList::new(), IdStrategy::default())
    }

    /// Store seeded with `tasks`. New ids start above the highest seeded id.
    pub fn with_strategy(tasks: TaskList, strategy: IdStrategy) -> Self {
        let mut ids = IdGenerator::new(strategy);
        if let Some(max) = tasks.max_id() {
            ids.observe(max);
        }
        debug!(tasks = tasks.len(), strategy = %strategy, "task store seeded");
        Self { tasks, ids }
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&TaskRecord> {
        self.tasks.get(id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Append a new record with both flags cleared. The title is not checked.
    ///
    /// Ids come from the generator; once it is exhausted the lowest id not
    /// in the list is used instead.
    pub fn add(&mut self, title: impl Into<String>, description: impl Into<String>) -> &TaskList {
        let id = match self.ids.next_id() {
            Some(id) => id,
            None => {
                let id = self.tasks.lowest_free_id();
                debug!(%id, "id space exhausted, reusing free id");
                id
            }
        };
        let record = TaskRecord::new(id, title, description);
        debug!(%id, title = %record.title, "task added");
        self.tasks = self.tasks.with_added(record);
        &self.tasks
    }

    /// Drop the record matching `id`. Unknown ids leave the list unchanged.
    pub fn remove(&mut self, id: TaskId) -> &TaskList {
        if self.tasks.contains(id) {
            debug!(%id, "task removed");
        } else {
            debug!(%id, "remove ignored: no such task");
        }
        self.tasks = self.tasks.without(id);
        &self.tasks
    }

    /// Invert `flag` on the record matching `id`. Unknown ids leave the list
    /// unchanged.
    pub fn toggle(&mut self, id: TaskId, flag: TaskFlag) -> &TaskList {
        match self.tasks.get(id) {
            Some(task) => debug!(%id, %flag, value = !task.flag(flag), "task toggled"),
            None => debug!(%id, %flag, "toggle ignored: no such task"),
        }
        self.tasks = self.tasks.with_toggled(id, flag);
        &self.tasks
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}
