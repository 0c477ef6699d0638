//! Display implementation for application messages.
//!
//! All user-facing text lives here, in one place, so the wording stays
//! consistent and a future localization pass has a single surface to
//! replace. Commands never format message strings themselves; they pass
//! `Message` variants to the `msg_*` macros.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(title) => format!("Task '{}' created successfully.", title),
            Message::TaskUpdated(title) => format!("Task '{}' updated successfully.", title),
            Message::TaskDeleted(id) => format!("Task {} deleted.", id),
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found.", id),
            Message::TasksDeletedCount(count) => format!("Cleared {} completed task(s).", count),
            Message::NoTasksFound => "No tasks yet. Create one with 'tudo new'.".to_string(),
            Message::NoTasksMatchingQuery(query) => format!("No tasks matching '{}'.", query),
            Message::NoTasksSelected => "No tasks selected.".to_string(),

            // === VALIDATION MESSAGES ===
            Message::TitleCannotBeEmpty => "Task title cannot be empty".to_string(),
            Message::DescTooLong(len) => format!("Description is {} characters, the limit is 100", len),

            // === STORAGE MESSAGES ===
            Message::StorageWriteFailed(error) => format!("Your change was not saved: {}", error),
            Message::StoredDataRecovered => "Stored task data was unreadable and has been reset to an empty list.".to_string(),

            // === PROMPTS ===
            Message::PromptTaskTitle => "Task title".to_string(),
            Message::PromptTaskDesc => "Description (optional)".to_string(),
            Message::PromptSelectDone => "Select completed tasks (space to select, enter to confirm)".to_string(),
            Message::ConfirmDeleteTask(title) => format!("Are you sure you want to delete task '{}'?", title),
            Message::ConfirmClearDone(count) => format!("Are you sure you want to clear {} completed task(s)?", count),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };

        write!(f, "{}", text)
    }
}
