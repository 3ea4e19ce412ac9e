use todo_core::{display::Tasks, TaskStore};

/// Helper function to create a store pre-filled with tasks
pub fn create_test_store(texts: &[&str]) -> TaskStore {
    let mut store = TaskStore::new();
    for text in texts {
        store.add(text).expect("Failed to add task");
    }
    store
}

/// Numbered listing lines of the store, as the menu prints them
pub fn listing(store: &TaskStore) -> Vec<String> {
    Tasks(store.list()).lines()
}
