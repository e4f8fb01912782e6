use std::collections::HashSet;

use todo_board::id::IdStrategy;
use todo_board::view::{self, Lane};
use todo_board::{TaskFlag, TaskId, TaskList, TaskRecord, TaskStore};

/// Every flag combination, several times over, with gaps in the ids.
fn collections() -> Vec<TaskList> {
    let mut out = vec![TaskList::new()];
    for size in 1..=12u64 {
        let list: TaskList = (0..size)
            .map(|idx| {
                let mut task = TaskRecord::new(
                    TaskId::new(idx * 3 + 1),
                    format!("task {idx}"),
                    if idx % 2 == 0 { "" } else { "details" },
                );
                task.is_completed = idx % 4 >= 2;
                task.is_urgent = idx % 2 == 1;
                task
            })
            .collect();
        out.push(list);
    }
    out
}

#[test]
fn add_grows_by_one_with_cleared_flags() {
    for tasks in collections() {
        let before = tasks.len();
        let mut store = TaskStore::with_strategy(tasks.clone(), IdStrategy::Sequential);
        let after = store.add("Buy milk", "2% milk").clone();
        assert_eq!(after.len(), before + 1);
        let added = after.as_slice().last().expect("added");
        assert!(!added.is_completed);
        assert!(!added.is_urgent);
        assert!(!tasks.contains(added.id));
        assert_eq!(&after.as_slice()[..before], tasks.as_slice());
    }
}

#[test]
fn remove_present_and_absent_ids() {
    for tasks in collections() {
        for task in &tasks {
            let mut store = TaskStore::with_strategy(tasks.clone(), IdStrategy::Sequential);
            let after = store.remove(task.id);
            assert_eq!(after.len(), tasks.len() - 1);
            assert!(!after.contains(task.id));
        }

        let mut store = TaskStore::with_strategy(tasks.clone(), IdStrategy::Sequential);
        assert_eq!(store.remove(TaskId::new(2)), &tasks);
    }
}

#[test]
fn toggle_inverts_one_field_and_is_an_involution() {
    for tasks in collections() {
        for task in &tasks {
            for flag in [TaskFlag::Completed, TaskFlag::Urgent] {
                let mut store = TaskStore::with_strategy(tasks.clone(), IdStrategy::Sequential);
                let once = store.toggle(task.id, flag).clone();
                assert_eq!(once.len(), tasks.len());
                for (before, after) in tasks.iter().zip(once.iter()) {
                    if before.id == task.id {
                        assert_eq!(after, &before.toggled(flag));
                        assert_ne!(after.flag(flag), before.flag(flag));
                    } else {
                        assert_eq!(after, before);
                    }
                }
                assert_eq!(store.toggle(task.id, flag), &tasks);
            }
        }
    }
}

#[test]
fn lanes_partition_every_collection() {
    for tasks in collections() {
        let urgent = view::pending_urgent(&tasks);
        let normal = view::pending_normal(&tasks);
        let completed = view::completed(&tasks);

        let mut seen = HashSet::new();
        for task in urgent.iter().chain(&normal).chain(&completed) {
            assert!(seen.insert(task.id), "task {} in two lanes", task.id);
        }
        let all: HashSet<TaskId> = tasks.iter().map(|task| task.id).collect();
        assert_eq!(seen, all);

        for lane in Lane::ALL {
            let ids: Vec<TaskId> = view::in_lane(&tasks, lane).iter().map(|t| t.id).collect();
            let mut sorted_by_position = ids.clone();
            sorted_by_position.sort_by_key(|id| {
                tasks.iter().position(|task| task.id == *id).unwrap_or(usize::MAX)
            });
            assert_eq!(ids, sorted_by_position);
        }
    }
}

#[test]
fn earlier_snapshots_are_untouched() {
    let mut store = TaskStore::new();
    let empty = store.tasks().clone();
    store.add("Buy milk", "2% milk");
    let one = store.tasks().clone();
    let id = one.as_slice()[0].id;
    store.toggle(id, TaskFlag::Urgent);
    store.remove(id);

    assert!(empty.is_empty());
    assert_eq!(one.len(), 1);
    assert!(!one.as_slice()[0].is_urgent);
    assert!(store.is_empty());
}

#[test]
fn buy_milk_walkthrough() {
    let mut store = TaskStore::new();
    store.add("Buy milk", "2% milk");
    let id = store.tasks().as_slice()[0].id;
    let lane = |store: &TaskStore| Lane::of(store.get(id).expect("task"));

    assert_eq!(lane(&store), Lane::Normal);
    assert!(view::pending_urgent(store.tasks()).is_empty());
    assert!(view::completed(store.tasks()).is_empty());

    store.toggle(id, TaskFlag::Urgent);
    assert_eq!(lane(&store), Lane::Urgent);

    store.toggle(id, TaskFlag::Completed);
    assert_eq!(lane(&store), Lane::Completed);

    let before = store.tasks().clone();
    assert_eq!(store.remove(TaskId::new(id.get() + 100)), &before);
}
