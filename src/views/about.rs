//! About View

use leptos::prelude::*;

use crate::markdown::parse_markdown;

const ABOUT_MD: &str = include_str!("../../content/about.md");

#[component]
pub fn AboutView() -> impl IntoView {
    view! {
        <section class="about markdown-body" inner_html=parse_markdown(ABOUT_MD)></section>
    }
}
