//! Routed Views
//!
//! One page component per entry in the route table, plus the factories the
//! table uses to build them on navigation.

mod todolist;
mod about;
mod portfolio;

use leptos::prelude::*;

pub use todolist::Todolist;
pub use about::AboutView;
pub use portfolio::Portfolio;

pub fn todolist_page() -> AnyView {
    view! { <Todolist /> }.into_any()
}

pub fn about_page() -> AnyView {
    view! { <AboutView /> }.into_any()
}

pub fn portfolio_page() -> AnyView {
    view! { <Portfolio /> }.into_any()
}

pub fn not_found_page() -> AnyView {
    view! { <p class="not-found">"Page not found."</p> }.into_any()
}
