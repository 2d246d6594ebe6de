use std::sync::RwLock;

use shared::{Task, TaskPayload};

/// In-memory task collection, scoped to the process lifetime.
///
/// Every operation is a linear scan over an ordered `Vec` behind one coarse
/// lock, held for the operation's full duration and never across an await.
/// Concurrent requests serialize on the lock but see no further guarantees:
/// two racing updates to the same id resolve in lock-acquisition order.
pub struct TaskStore {
    tasks: RwLock<Vec<Task>>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self {
            tasks: RwLock::new(Vec::new()),
        }
    }

    /// A store pre-populated with the two fixed sample tasks served out of
    /// the box on ids "1" and "2".
    pub fn with_sample_tasks() -> Self {
        Self {
            tasks: RwLock::new(vec![
                Task {
                    id: "1".to_string(),
                    task_name: "New project idea".to_string(),
                    task_details: "Brainstorm new project ideas for Q3".to_string(),
                    date: "2023-11-25".to_string(),
                    completed: false,
                },
                Task {
                    id: "2".to_string(),
                    task_name: "Weekly report".to_string(),
                    task_details: "Prepare weekly status report for management".to_string(),
                    date: "2023-11-26".to_string(),
                    completed: true,
                },
            ]),
        }
    }

    /// Full ordered snapshot of the collection.
    pub fn list(&self) -> Vec<Task> {
        self.tasks.read().unwrap().clone()
    }

    /// First task whose id matches exactly, if any.
    pub fn get(&self, id: &str) -> Option<Task> {
        self.tasks.read().unwrap().iter().find(|t| t.id == id).cloned()
    }

    /// Appends a new task built from the payload (server-assigned id, date
    /// defaulted when blank) and returns the stored record. No uniqueness
    /// check is made against existing ids.
    pub fn create(&self, payload: TaskPayload) -> Task {
        let task = Task::new(payload);
        self.tasks.write().unwrap().push(task.clone());
        task
    }

    /// Replaces the whole record at the matching id with the payload, keeping
    /// its position. The path id wins over any id in the payload; fields the
    /// payload omitted come back as their defaults, not the prior values.
    pub fn update(&self, id: &str, payload: TaskPayload) -> Option<Task> {
        let mut tasks = self.tasks.write().unwrap();
        let slot = tasks.iter_mut().find(|t| t.id == id)?;
        *slot = payload.into_task(id.to_string());
        Some(slot.clone())
    }

    /// Removes the first task with the matching id, preserving the order of
    /// the rest. Returns whether anything was removed.
    pub fn delete(&self, id: &str) -> bool {
        let mut tasks = self.tasks.write().unwrap();
        match tasks.iter().position(|t| t.id == id) {
            Some(index) => {
                tasks.remove(index);
                true
            }
            None => false,
        }
    }

    /// Flips the completion flag of the matching task in place and returns
    /// the updated record.
    pub fn toggle(&self, id: &str) -> Option<Task> {
        let mut tasks = self.tasks.write().unwrap();
        let task = tasks.iter_mut().find(|t| t.id == id)?;
        task.completed = !task.completed;
        Some(task.clone())
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: &str, details: &str) -> TaskPayload {
        TaskPayload {
            task_name: name.to_string(),
            task_details: details.to_string(),
            ..TaskPayload::default()
        }
    }

    fn task(id: &str, name: &str) -> Task {
        Task {
            id: id.to_string(),
            task_name: name.to_string(),
            task_details: String::new(),
            date: "2024-01-01".to_string(),
            completed: false,
        }
    }

    #[test]
    fn sample_store_serves_both_seed_tasks() {
        let store = TaskStore::with_sample_tasks();
        let tasks = store.list();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].id, "1");
        assert_eq!(tasks[0].task_name, "New project idea");
        assert!(!tasks[0].completed);
        assert_eq!(tasks[1].id, "2");
        assert!(tasks[1].completed);
    }

    #[test]
    fn get_matches_exact_id_only() {
        let store = TaskStore::with_sample_tasks();
        assert_eq!(store.get("1").unwrap().task_name, "New project idea");
        assert!(store.get("10").is_none());
        assert!(store.get("").is_none());
    }

    #[test]
    fn create_appends_to_the_end() {
        let store = TaskStore::with_sample_tasks();
        let created = store.create(payload("third", "details"));
        let tasks = store.list();
        assert_eq!(tasks.len(), 3);
        assert_eq!(tasks[2], created);
    }

    #[test]
    fn create_accepts_duplicate_content() {
        let store = TaskStore::new();
        let first = store.create(payload("twin", "same"));
        let second = store.create(payload("twin", "same"));
        assert_eq!(store.list().len(), 2);
        // Each record stays retrievable under its own id (identical ids are
        // possible with the bounded random generator, in which case both
        // lookups resolve to the first record).
        assert_eq!(store.get(&first.id).unwrap().task_name, "twin");
        assert_eq!(store.get(&second.id).unwrap().task_name, "twin");
    }

    #[test]
    fn update_replaces_record_in_place() {
        let store = TaskStore::with_sample_tasks();
        let updated = store.update("1", payload("renamed", "")).unwrap();
        assert_eq!(updated.id, "1");
        assert_eq!(updated.task_name, "renamed");
        assert_eq!(updated.task_details, "");
        assert_eq!(updated.date, "");
        assert!(!updated.completed);

        let tasks = store.list();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0], updated, "updated record keeps its slot");
    }

    #[test]
    fn update_overrides_payload_id_with_argument() {
        let store = TaskStore::with_sample_tasks();
        let mut p = payload("renamed", "");
        p.id = "999".to_string();
        let updated = store.update("2", p).unwrap();
        assert_eq!(updated.id, "2");
        assert!(store.get("999").is_none());
    }

    #[test]
    fn update_unknown_id_is_none() {
        let store = TaskStore::with_sample_tasks();
        assert!(store.update("42", payload("x", "y")).is_none());
        assert_eq!(store.list().len(), 2);
    }

    #[test]
    fn delete_removes_exactly_one_record() {
        let store = TaskStore::with_sample_tasks();
        assert!(store.delete("1"));
        let tasks = store.list();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, "2");
        assert!(store.get("1").is_none());
    }

    #[test]
    fn delete_removes_only_the_first_match() {
        let store = TaskStore {
            tasks: RwLock::new(vec![task("7", "first"), task("7", "second")]),
        };
        assert!(store.delete("7"));
        let tasks = store.list();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].task_name, "second");
    }

    #[test]
    fn delete_unknown_id_is_false() {
        let store = TaskStore::with_sample_tasks();
        assert!(!store.delete("42"));
        assert_eq!(store.list().len(), 2);
    }

    #[test]
    fn toggle_flips_in_place_and_back() {
        let store = TaskStore::with_sample_tasks();
        assert!(store.toggle("1").unwrap().completed);
        assert!(store.get("1").unwrap().completed, "flip is persisted");
        assert!(!store.toggle("1").unwrap().completed);
        assert!(!store.get("1").unwrap().completed);
    }

    #[test]
    fn toggle_changes_nothing_else() {
        let store = TaskStore::with_sample_tasks();
        let before = store.get("2").unwrap();
        let after = store.toggle("2").unwrap();
        assert_eq!(after.task_name, before.task_name);
        assert_eq!(after.task_details, before.task_details);
        assert_eq!(after.date, before.date);
        assert_eq!(after.completed, !before.completed);
    }

    #[test]
    fn toggle_unknown_id_is_none() {
        let store = TaskStore::with_sample_tasks();
        assert!(store.toggle("42").is_none());
    }
}
