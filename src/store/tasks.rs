//! The task store: the in-memory task collection and its persistence.
//!
//! The whole collection is kept as one JSON array under a single storage
//! key. Every mutation reads nothing incrementally and writes nothing
//! incrementally: it builds the next collection, persists it in full,
//! and only then replaces the in-memory state. A failed write therefore
//! leaves both the durable value and the in-memory collection untouched.
//!
//! Ids come from a monotonic counter seeded at `max(existing) + 1`, so
//! they stay unique under rapid successive creates and across reloads.

use super::error::StoreError;
use crate::libs::storage::{LocalStorage, Storage};
use crate::libs::task::{Mode, Task};
use std::collections::HashSet;
use tracing::warn;

/// Storage key holding the serialized task collection.
pub const STORAGE_KEY: &str = "todoData";

pub struct TaskStore {
    storage: Box<dyn Storage>,
    tasks: Vec<Task>,
    next_id: i64,
    recovered_raw: Option<String>,
}

impl TaskStore {
    /// Opens the store on the default file-backed storage.
    pub fn new() -> Result<TaskStore, StoreError> {
        Self::open(Box::new(LocalStorage::new()?))
    }

    /// Opens the store on the given storage, loading the full collection.
    ///
    /// A never-initialized storage starts as an empty collection and is
    /// persisted immediately. A malformed stored value is not an error:
    /// the raw value is kept for diagnostics, a warning is logged, and
    /// the collection restarts empty.
    pub fn open(mut storage: Box<dyn Storage>) -> Result<TaskStore, StoreError> {
        let mut recovered_raw = None;
        let tasks = match storage.get(STORAGE_KEY)? {
            Some(raw) => match serde_json::from_str::<Vec<Task>>(&raw) {
                Ok(tasks) => tasks,
                Err(err) => {
                    warn!(%err, "stored task data is malformed, resetting to an empty list");
                    storage.set(STORAGE_KEY, "[]")?;
                    recovered_raw = Some(raw);
                    Vec::new()
                }
            },
            None => {
                storage.set(STORAGE_KEY, "[]")?;
                Vec::new()
            }
        };
        let next_id = tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;

        Ok(TaskStore {
            storage,
            tasks,
            next_id,
            recovered_raw,
        })
    }

    /// The current collection, in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get_by_id(&self, id: i64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// The raw stored value that failed to parse on open, if any.
    pub fn recovered_raw(&self) -> Option<&str> {
        self.recovered_raw.as_deref()
    }

    /// Appends a new task and persists the collection.
    pub fn create(&mut self, title: &str, desc: Option<&str>) -> Result<Task, StoreError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(StoreError::EmptyTitle);
        }

        let task = Task::new(self.next_id, title, desc);
        let mut next = self.tasks.clone();
        next.push(task.clone());
        self.persist(&next)?;
        self.tasks = next;
        self.next_id += 1;

        Ok(task)
    }

    /// Replaces title and description of the task with `id` in place.
    /// Id and position in the collection are preserved.
    pub fn update(&mut self, id: i64, title: &str, desc: Option<&str>) -> Result<Task, StoreError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(StoreError::EmptyTitle);
        }
        let pos = self.tasks.iter().position(|t| t.id == id).ok_or(StoreError::NotFound(id))?;

        let mut next = self.tasks.clone();
        next[pos] = Task::new(id, title, desc);
        self.persist(&next)?;
        self.tasks = next;

        Ok(self.tasks[pos].clone())
    }

    /// Removes the task with `id`. Deleting an absent id is a no-op,
    /// not an error.
    pub fn delete(&mut self, id: i64) -> Result<(), StoreError> {
        if !self.tasks.iter().any(|t| t.id == id) {
            return Ok(());
        }
        let next: Vec<Task> = self.tasks.iter().filter(|t| t.id != id).cloned().collect();
        self.persist(&next)?;
        self.tasks = next;

        Ok(())
    }

    /// Removes every task whose id is in `ids` with a single rewrite.
    /// Returns the number of tasks removed.
    pub fn delete_many(&mut self, ids: &HashSet<i64>) -> Result<usize, StoreError> {
        let next: Vec<Task> = self.tasks.iter().filter(|t| !ids.contains(&t.id)).cloned().collect();
        let removed = self.tasks.len() - next.len();
        if removed == 0 {
            return Ok(0);
        }
        self.persist(&next)?;
        self.tasks = next;

        Ok(removed)
    }

    /// Case-insensitive substring search over title and description.
    /// Preserves order, does not mutate or persist; an empty query
    /// returns the full collection.
    pub fn search(&self, query: &str) -> Vec<Task> {
        self.tasks.iter().filter(|t| t.matches(query)).cloned().collect()
    }

    /// Dispatches a form submission to create or update.
    pub fn submit(&mut self, mode: Mode, title: &str, desc: Option<&str>) -> Result<Task, StoreError> {
        match mode {
            Mode::Create => self.create(title, desc),
            Mode::Edit(id) => self.update(id, title, desc),
        }
    }

    fn persist(&mut self, tasks: &[Task]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(tasks).map_err(|err| StoreError::Storage(err.into()))?;
        self.storage.set(STORAGE_KEY, &raw)?;
        Ok(())
    }
}
