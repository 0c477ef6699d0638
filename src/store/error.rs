use thiserror::Error;

/// Errors surfaced by [`TaskStore`](super::tasks::TaskStore) operations.
///
/// Validation failures are rejected before anything is written; a
/// `Storage` failure means the durable write did not happen and the
/// in-memory collection was rolled back to its pre-operation state.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("task title cannot be empty")]
    EmptyTitle,

    #[error("task with ID {0} not found")]
    NotFound(i64),

    #[error("description is {0} characters, the limit is 100")]
    DescTooLong(usize),

    #[error("failed to persist tasks: {0}")]
    Storage(anyhow::Error),
}

impl From<anyhow::Error> for StoreError {
    fn from(err: anyhow::Error) -> Self {
        StoreError::Storage(err)
    }
}
