//! Todo Persistence
//!
//! Storage strategy for the todo list plus the JSON codec for the `todos` key.

use web_sys::Storage;

use crate::models::Todo;

/// Local storage key holding the full todo list
pub const TODOS_STORAGE_KEY: &str = "todos";

/// Where the todo list is written after each mutation.
///
/// `load` returns `Ok(None)` when nothing has been stored yet.
pub trait TodoPersistence {
    fn load(&self) -> Result<Option<Vec<Todo>>, String>;
    fn save(&self, todos: &[Todo]) -> Result<(), String>;
}

pub fn encode_todos(todos: &[Todo]) -> Result<String, String> {
    serde_json::to_string(todos).map_err(|e| format!("Failed to encode todos: {}", e))
}

pub fn decode_todos(json: &str) -> Result<Vec<Todo>, String> {
    serde_json::from_str(json).map_err(|e| format!("Failed to decode todos: {}", e))
}

/// Browser `localStorage` backend
#[derive(Clone, Copy, Debug)]
pub struct LocalStoragePersistence {
    key: &'static str,
}

impl LocalStoragePersistence {
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }

    fn storage() -> Result<Storage, String> {
        web_sys::window()
            .ok_or("No window available")?
            .local_storage()
            .map_err(|_| "localStorage access denied".to_string())?
            .ok_or_else(|| "localStorage not supported".to_string())
    }
}

impl Default for LocalStoragePersistence {
    fn default() -> Self {
        Self::new(TODOS_STORAGE_KEY)
    }
}

impl TodoPersistence for LocalStoragePersistence {
    fn load(&self) -> Result<Option<Vec<Todo>>, String> {
        let raw = Self::storage()?
            .get_item(self.key)
            .map_err(|_| format!("Failed to read '{}' from localStorage", self.key))?;
        raw.as_deref().map(decode_todos).transpose()
    }

    fn save(&self, todos: &[Todo]) -> Result<(), String> {
        let json = encode_todos(todos)?;
        Self::storage()?
            .set_item(self.key, &json)
            .map_err(|_| format!("Failed to write '{}' to localStorage (quota exceeded?)", self.key))
    }
}
