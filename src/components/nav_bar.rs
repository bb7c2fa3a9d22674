//! Navigation Bar Component
//!
//! Links generated from the route table; the active route is highlighted.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::routes::{resolve, ROUTES};

#[component]
pub fn NavBar() -> impl IntoView {
    let location = use_location();
    let current = Memo::new(move |_| resolve(&location.pathname.get()));

    view! {
        <nav class="nav-bar">
            {ROUTES.iter().map(|def| {
                let route = def.route;
                let link_class = move || {
                    if current.get() == Some(route) { "nav-link active" } else { "nav-link" }
                };
                view! {
                    <span class=link_class data-route=def.name>
                        <A href=def.path>{route.label()}</A>
                    </span>
                }
            }).collect_view()}
        </nav>
    }
}
