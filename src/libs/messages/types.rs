#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskUpdated(String),
    TaskDeleted(i64),
    TaskNotFoundWithId(i64),
    TasksDeletedCount(usize),
    NoTasksFound,
    NoTasksMatchingQuery(String),
    NoTasksSelected,

    // === VALIDATION MESSAGES ===
    TitleCannotBeEmpty,
    DescTooLong(usize),

    // === STORAGE MESSAGES ===
    StorageWriteFailed(String),
    StoredDataRecovered,

    // === PROMPTS ===
    PromptTaskTitle,
    PromptTaskDesc,
    PromptSelectDone,
    ConfirmDeleteTask(String),
    ConfirmClearDone(usize),

    // === GENERAL MESSAGES ===
    OperationCancelled,
}
