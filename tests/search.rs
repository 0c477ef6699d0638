#[cfg(test)]
mod tests {
    use tudo::libs::storage::MemoryStorage;
    use tudo::store::tasks::TaskStore;

    fn store_with_fixtures() -> TaskStore {
        let mut store = TaskStore::open(Box::new(MemoryStorage::default())).unwrap();
        store.create("Buy milk", None).unwrap();
        store.create("Walk dog", Some("evening")).unwrap();
        store.create("Call the DOGgroomer", None).unwrap();
        store
    }

    #[test]
    fn test_search_matches_title_case_insensitively() {
        let store = store_with_fixtures();
        let hits = store.search("DOG");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].title, "Walk dog");
        assert_eq!(hits[1].title, "Call the DOGgroomer");
    }

    #[test]
    fn test_search_matches_description() {
        let store = store_with_fixtures();
        let hits = store.search("EVENING");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Walk dog");
    }

    #[test]
    fn test_search_empty_query_returns_all_in_order() {
        let store = store_with_fixtures();
        let hits = store.search("");
        assert_eq!(hits.len(), 3);
        assert_eq!(hits[0].title, "Buy milk");
        assert_eq!(hits[1].title, "Walk dog");
        assert_eq!(hits[2].title, "Call the DOGgroomer");
    }

    #[test]
    fn test_search_no_match() {
        let store = store_with_fixtures();
        assert!(store.search("groceries").is_empty());
    }

    #[test]
    fn test_search_absent_desc_matches_as_empty() {
        // A task without a description must not match a non-empty query
        // through its missing desc, and must not panic.
        let mut store = TaskStore::open(Box::new(MemoryStorage::default())).unwrap();
        store.create("Buy milk", None).unwrap();
        assert!(store.search("evening").is_empty());
        assert_eq!(store.search("").len(), 1);
    }

    #[test]
    fn test_search_does_not_mutate() {
        let mut store = TaskStore::open(Box::new(MemoryStorage::default())).unwrap();
        store.create("Buy milk", None).unwrap();
        store.create("Walk dog", Some("evening")).unwrap();
        let before = store.tasks().to_vec();

        store.search("dog");
        assert_eq!(store.tasks(), &before[..]);
    }
}
