//! Todo Item Component
//!
//! A single row of the todo list, with inline editing.

use leptos::prelude::*;

use crate::context::{use_todos, RowKey};
use crate::models::{normalize_text, Todo};

/// A single todo row
///
/// In edit mode the input keeps a local draft; it is written to the store
/// only when the edit is committed (Enter or Save). A blank draft is not saved.
#[component]
pub fn TodoItem(row: RowKey, todo: Todo) -> impl IntoView {
    let todos = use_todos();
    let (draft, set_draft) = signal(todo.text.clone());

    let commit = move || {
        if let Some(text) = normalize_text(&draft.get()) {
            todos.commit_edit(row, text);
        }
    };

    if todo.editable {
        view! {
            <li class="todo-item editing">
                <input
                    type="text"
                    class="todo-edit-input"
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            commit();
                        }
                    }
                />
                <button class="save-btn" on:click=move |_| commit()>"Save"</button>
                <button class="edit-btn" on:click=move |_| todos.toggle_edit(row)>"Cancel"</button>
            </li>
        }.into_any()
    } else {
        view! {
            <li class="todo-item">
                <span class="todo-text">{todo.text.clone()}</span>
                <button class="edit-btn" on:click=move |_| todos.toggle_edit(row)>"Edit"</button>
                <button class="delete-btn" on:click=move |_| todos.remove(row)>"×"</button>
            </li>
        }.into_any()
    }
}
