//! Todolist App
//!
//! Application shell: navigation bar plus the routed view.

use leptos::prelude::*;
use leptos_router::components::Router;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;

use crate::components::NavBar;
use crate::context::TodoContext;
use crate::routes::{legacy_hash_path, route_for};
use crate::views::not_found_page;

#[component]
pub fn App() -> impl IntoView {
    // Provide context to all children
    provide_context(TodoContext::load());

    view! {
        <Router>
            <div class="app-layout">
                <NavBar />

                <main class="main-content">
                    <RoutedView />
                </main>
            </div>
        </Router>
    }
}

/// Renders the route table's view for the current path
#[component]
fn RoutedView() -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();

    // Old bookmarks use hash history (`/#/about`); move them onto the path
    Effect::new(move |_| {
        let hash = location.hash.get();
        if let Some(path) = legacy_hash_path(&hash) {
            log::info!("[APP] Redirecting legacy URL {} to {}", hash, path);
            navigate(path, NavigateOptions { replace: true, ..Default::default() });
        }
    });

    move || match route_for(&location.pathname.get()) {
        Some(def) => (def.view)(),
        None => not_found_page(),
    }
}
