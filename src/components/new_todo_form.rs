//! New Todo Form Component
//!
//! Text input that appends a todo on submit.

use leptos::prelude::*;

use crate::context::use_todos;
use crate::models::normalize_text;

/// Form for adding a todo to the end of the list
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let todos = use_todos();
    let (new_text, set_new_text) = signal(String::new());

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(text) = normalize_text(&new_text.get()) else { return };
        todos.add(text);
        set_new_text.set(String::new());
    };

    view! {
        <form class="new-todo-form" on:submit=add_todo>
            <input
                type="text"
                placeholder="Add a new todo..."
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
