#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use tudo::libs::storage::LocalStorage;
    use tudo::libs::task::Mode;
    use tudo::store::error::StoreError;
    use tudo::store::tasks::TaskStore;

    struct TaskTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            TaskTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl TaskTestContext {
        fn store(&self) -> TaskStore {
            let storage = LocalStorage::with_dir(self.temp_dir.path().to_path_buf()).unwrap();
            TaskStore::open(Box::new(storage)).unwrap()
        }
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_create_appends_and_persists(ctx: &mut TaskTestContext) {
        let mut store = ctx.store();

        store.create("Buy milk", None).unwrap();
        store.create("Walk dog", Some("evening")).unwrap();

        // Reopen from the same storage: the persisted state must equal
        // the in-memory result of the last mutation.
        let reopened = ctx.store();
        assert_eq!(reopened.tasks(), store.tasks());
        assert_eq!(reopened.tasks().len(), 2);
        assert_eq!(reopened.tasks()[0].title, "Buy milk");
        assert_eq!(reopened.tasks()[1].title, "Walk dog");
        assert_eq!(reopened.tasks()[1].desc.as_deref(), Some("evening"));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_ids_unique_under_rapid_creates(ctx: &mut TaskTestContext) {
        let mut store = ctx.store();

        for i in 0..50 {
            store.create(&format!("Task {}", i), None).unwrap();
        }

        let ids: HashSet<i64> = store.tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), 50);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_ids_stay_unique_across_reopen(ctx: &mut TaskTestContext) {
        let mut store = ctx.store();
        store.create("First", None).unwrap();
        let max_id = store.tasks().iter().map(|t| t.id).max().unwrap();

        let mut reopened = ctx.store();
        let task = reopened.create("Second", None).unwrap();
        assert!(task.id > max_id);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_preserves_id_and_position(ctx: &mut TaskTestContext) {
        let mut store = ctx.store();
        store.create("Buy milk", None).unwrap();
        let target = store.create("Walk dog", Some("evening")).unwrap();
        store.create("Water plants", None).unwrap();

        let updated = store.update(target.id, "Walk dog", Some("morning")).unwrap();
        assert_eq!(updated.id, target.id);
        assert_eq!(updated.desc.as_deref(), Some("morning"));

        let tasks = store.tasks();
        assert_eq!(tasks.len(), 3);
        assert_eq!(tasks[0].title, "Buy milk");
        assert_eq!(tasks[1].id, target.id);
        assert_eq!(tasks[1].desc.as_deref(), Some("morning"));
        assert_eq!(tasks[2].title, "Water plants");
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_missing_id_is_not_found(ctx: &mut TaskTestContext) {
        let mut store = ctx.store();
        store.create("Only task", None).unwrap();
        let before = store.tasks().to_vec();

        let result = store.update(999, "New title", None);
        assert!(matches!(result, Err(StoreError::NotFound(999))));
        assert_eq!(store.tasks(), &before[..]);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_delete_is_idempotent(ctx: &mut TaskTestContext) {
        let mut store = ctx.store();
        let task = store.create("Buy milk", None).unwrap();
        store.create("Walk dog", None).unwrap();

        store.delete(task.id).unwrap();
        let after_first = store.tasks().to_vec();
        store.delete(task.id).unwrap();
        assert_eq!(store.tasks(), &after_first[..]);

        let reopened = ctx.store();
        assert_eq!(reopened.tasks(), &after_first[..]);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_delete_many_single_rewrite(ctx: &mut TaskTestContext) {
        let mut store = ctx.store();
        let a = store.create("Buy milk", None).unwrap();
        let b = store.create("Walk dog", Some("evening")).unwrap();
        store.create("Water plants", None).unwrap();

        let ids: HashSet<i64> = [a.id, b.id].into_iter().collect();
        let removed = store.delete_many(&ids).unwrap();
        assert_eq!(removed, 2);
        assert_eq!(store.tasks().len(), 1);
        assert_eq!(store.tasks()[0].title, "Water plants");
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_delete_many_all_tasks(ctx: &mut TaskTestContext) {
        let mut store = ctx.store();
        let a = store.create("Buy milk", None).unwrap();
        let b = store.create("Walk dog", Some("evening")).unwrap();

        let ids: HashSet<i64> = [a.id, b.id].into_iter().collect();
        store.delete_many(&ids).unwrap();

        let reopened = ctx.store();
        assert!(reopened.tasks().is_empty());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_empty_title_is_rejected(ctx: &mut TaskTestContext) {
        let mut store = ctx.store();
        let task = store.create("Valid", None).unwrap();
        let before = store.tasks().to_vec();

        assert!(matches!(store.create("", None), Err(StoreError::EmptyTitle)));
        assert!(matches!(store.create("   ", Some("desc")), Err(StoreError::EmptyTitle)));
        assert!(matches!(store.update(task.id, "", None), Err(StoreError::EmptyTitle)));

        // Nothing persisted: reopen and compare.
        assert_eq!(store.tasks(), &before[..]);
        let reopened = ctx.store();
        assert_eq!(reopened.tasks(), &before[..]);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_title_is_trimmed(ctx: &mut TaskTestContext) {
        let mut store = ctx.store();
        let task = store.create("  Buy milk  ", None).unwrap();
        assert_eq!(task.title, "Buy milk");
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_submit_dispatches_by_mode(ctx: &mut TaskTestContext) {
        let mut store = ctx.store();

        let created = store.submit(Mode::Create, "Buy milk", None).unwrap();
        assert_eq!(store.tasks().len(), 1);

        let edited = store.submit(Mode::Edit(created.id), "Buy oat milk", Some("2 liters")).unwrap();
        assert_eq!(edited.id, created.id);
        assert_eq!(store.tasks().len(), 1);
        assert_eq!(store.tasks()[0].title, "Buy oat milk");

        assert!(matches!(
            store.submit(Mode::Edit(999), "Missing", None),
            Err(StoreError::NotFound(999))
        ));
    }
}
