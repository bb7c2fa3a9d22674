//! Todolist View
//!
//! The todo list page served at `/`.

use leptos::prelude::*;

use crate::components::{NewTodoForm, TodoItem};
use crate::context::use_todos;

#[component]
pub fn Todolist() -> impl IntoView {
    let todos = use_todos();

    let rows = move || todos.rows();

    view! {
        <section class="todolist">
            <h1>"Todo List"</h1>

            <NewTodoForm />

            // Text and edit flag are part of the key so a row re-renders when either changes;
            // the row key keeps other rows (and their drafts) alive across removals
            <ul class="todo-list">
                <For
                    each=rows
                    key=|(row, todo)| (*row, todo.text.clone(), todo.editable)
                    children=move |(row, todo)| view! { <TodoItem row=row todo=todo /> }
                />
            </ul>

            <p class="todo-count">{move || format!("{} todos", todos.count())}</p>
        </section>
    }
}
