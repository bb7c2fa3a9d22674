//! Application Context
//!
//! Shared todo state provided via Leptos Context API.

use leptos::prelude::*;

use crate::models::Todo;
use crate::persistence::LocalStoragePersistence;
use crate::store::TodoStore;

/// Session-only key of a rendered row
pub type RowKey = u64;

/// Row keys kept parallel to the todo list.
///
/// Todos have no id of their own, so rows are keyed by these instead of by
/// position; removing one row leaves the keys of the others untouched.
#[derive(Clone, Debug, Default)]
pub struct RowKeys {
    keys: Vec<RowKey>,
    next: RowKey,
}

impl RowKeys {
    pub fn with_len(len: usize) -> Self {
        let mut rows = Self::default();
        for _ in 0..len {
            rows.push();
        }
        rows
    }

    pub fn push(&mut self) -> RowKey {
        let key = self.next;
        self.next += 1;
        self.keys.push(key);
        key
    }

    pub fn remove(&mut self, index: usize) {
        if index < self.keys.len() {
            self.keys.remove(index);
        }
    }

    pub fn index_of(&self, key: RowKey) -> Option<usize> {
        self.keys.iter().position(|k| *k == key)
    }

    pub fn keys(&self) -> &[RowKey] {
        &self.keys
    }
}

/// Todo list signals shared by the Todolist view and its rows
#[derive(Clone, Copy)]
pub struct TodoContext {
    store: RwSignal<TodoStore<LocalStoragePersistence>>,
    rows: RwSignal<RowKeys>,
}

impl TodoContext {
    /// Restore todos from local storage
    pub fn load() -> Self {
        let store = TodoStore::load(LocalStoragePersistence::default());
        let rows = RowKeys::with_len(store.len());
        Self {
            store: RwSignal::new(store),
            rows: RwSignal::new(rows),
        }
    }

    /// Current list with row keys (tracked)
    pub fn rows(&self) -> Vec<(RowKey, Todo)> {
        let keys = self.rows.with(|rows| rows.keys().to_vec());
        self.store
            .with(|store| keys.into_iter().zip(store.todos().iter().cloned()).collect())
    }

    pub fn count(&self) -> usize {
        self.store.with(|store| store.len())
    }

    pub fn add(&self, text: String) {
        self.store.update(|store| report("add", store.add(text)));
        self.rows.update(|rows| {
            rows.push();
        });
    }

    pub fn remove(&self, key: RowKey) {
        let Some(index) = self.index_of(key) else { return };
        self.store.update(|store| report("remove", store.remove(index)));
        self.rows.update(|rows| rows.remove(index));
    }

    pub fn toggle_edit(&self, key: RowKey) {
        if let Some(index) = self.index_of(key) {
            self.store.update(|store| store.toggle_edit(index));
        }
    }

    /// Write the edited text and commit it
    pub fn commit_edit(&self, key: RowKey, text: String) {
        let Some(index) = self.index_of(key) else { return };
        self.store.update(|store| {
            store.edit_text(index, text);
            report("update", store.update(index));
        });
    }

    fn index_of(&self, key: RowKey) -> Option<usize> {
        self.rows.with_untracked(|rows| rows.index_of(key))
    }
}

fn report(action: &str, result: Result<(), String>) {
    if let Err(e) = result {
        log::error!("[STORE] {} not persisted: {}", action, e);
    }
}

/// Get the todo context provided by the app shell
pub fn use_todos() -> TodoContext {
    expect_context::<TodoContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_keys_survive_earlier_removal() {
        let mut rows = RowKeys::with_len(3);
        let [first, second, third] = [rows.keys()[0], rows.keys()[1], rows.keys()[2]];

        rows.remove(0);

        assert_eq!(rows.keys(), [second, third]);
        assert_eq!(rows.index_of(first), None);
        assert_eq!(rows.index_of(second), Some(0));
        assert_eq!(rows.index_of(third), Some(1));
    }

    #[test]
    fn test_row_keys_are_never_reused() {
        let mut rows = RowKeys::with_len(1);
        let old = rows.keys()[0];

        rows.remove(0);
        let new = rows.push();

        assert_ne!(old, new);
        assert_eq!(rows.index_of(new), Some(0));
    }

    #[test]
    fn test_row_keys_remove_out_of_range() {
        let mut rows = RowKeys::with_len(2);
        rows.remove(7);
        assert_eq!(rows.keys().len(), 2);
    }
}
