use super::task::Task;
use std::collections::HashSet;

/// Session-local set of task ids marked as done.
///
/// This is UI state, not part of the durable model: it starts empty on
/// every run and is never persisted. Ids can go stale when tasks are
/// deleted elsewhere, so callers prune against the current collection
/// before displaying checked state or clearing completed tasks.
#[derive(Debug, Default, Clone)]
pub struct CheckedSet {
    ids: HashSet<i64>,
}

impl CheckedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `id` if absent, removes it if present.
    pub fn toggle(&mut self, id: i64) {
        if !self.ids.insert(id) {
            self.ids.remove(&id);
        }
    }

    pub fn contains(&self, id: i64) -> bool {
        self.ids.contains(&id)
    }

    /// Drops ids that no longer correspond to a task in `tasks`.
    pub fn prune(&mut self, tasks: &[Task]) {
        self.ids.retain(|id| tasks.iter().any(|t| t.id == *id));
    }

    pub fn as_set(&self) -> &HashSet<i64> {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
