//! Todo Store
//!
//! Ordered todo list that writes itself through a [`TodoPersistence`] strategy
//! after every mutation that changes persisted state.

use crate::models::Todo;
use crate::persistence::TodoPersistence;

#[derive(Clone, Debug)]
pub struct TodoStore<P> {
    todos: Vec<Todo>,
    persistence: P,
}

impl<P: TodoPersistence> TodoStore<P> {
    pub fn new(persistence: P) -> Self {
        Self {
            todos: Vec::new(),
            persistence,
        }
    }

    /// Restore the list from storage. Missing or unreadable data yields an empty list.
    pub fn load(persistence: P) -> Self {
        let todos = match persistence.load() {
            Ok(Some(todos)) => todos,
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("[STORE] Ignoring stored todos: {}", e);
                Vec::new()
            }
        };
        log::info!("[STORE] Loaded {} todos", todos.len());
        Self { todos, persistence }
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn add(&mut self, text: impl Into<String>) -> Result<(), String> {
        self.todos.push(Todo::new(text));
        self.persist()
    }

    pub fn remove(&mut self, index: usize) -> Result<(), String> {
        if index >= self.todos.len() {
            return Ok(());
        }
        self.todos.remove(index);
        self.persist()
    }

    /// Flip edit mode. Edit mode is transient UI state and is not written.
    pub fn toggle_edit(&mut self, index: usize) {
        if let Some(todo) = self.todos.get_mut(index) {
            todo.editable = !todo.editable;
        }
    }

    /// Replace the text of an item being edited; committed later by [`Self::update`].
    pub fn edit_text(&mut self, index: usize, text: impl Into<String>) {
        if let Some(todo) = self.todos.get_mut(index) {
            todo.text = text.into();
        }
    }

    /// Commit an edit: leave edit mode and write the list.
    pub fn update(&mut self, index: usize) -> Result<(), String> {
        match self.todos.get_mut(index) {
            Some(todo) => todo.editable = false,
            None => return Ok(()),
        }
        self.persist()
    }

    fn persist(&self) -> Result<(), String> {
        self.persistence.save(&self.todos)
    }
}
