use chrono::Local;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub task_name: String,
    pub task_details: String,
    pub date: String,
    pub completed: bool,
}

/// Request body for creating or updating a task. Every field is optional on
/// the wire; absent fields decode to their defaults, so an update payload
/// overwrites the whole record rather than merging into it. The `id` field is
/// accepted but never trusted: the server assigns it on create and the path
/// id wins on update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskPayload {
    pub id: String,
    pub task_name: String,
    pub task_details: String,
    pub date: String,
    pub completed: bool,
}

impl Task {
    /// Builds a stored task from a create payload: assigns a fresh id (the
    /// decimal form of a random integer below 10000, unique best-effort
    /// only) and defaults a blank date to today.
    pub fn new(payload: TaskPayload) -> Self {
        let id = rand::thread_rng().gen_range(0..10_000).to_string();
        let mut task = payload.into_task(id);
        if task.date.is_empty() {
            task.date = today();
        }
        task
    }
}

impl TaskPayload {
    /// Maps the payload onto a task verbatim under the given id, discarding
    /// any id submitted in the body.
    pub fn into_task(self, id: String) -> Task {
        Task {
            id,
            task_name: self.task_name,
            task_details: self.task_details,
            date: self.date,
            completed: self.completed,
        }
    }
}

fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}
