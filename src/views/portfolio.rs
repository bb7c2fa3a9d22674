//! Portfolio View

use leptos::prelude::*;

use crate::markdown::parse_markdown;

const PORTFOLIO_MD: &str = include_str!("../../content/portfolio.md");

#[component]
pub fn Portfolio() -> impl IntoView {
    view! {
        <section class="portfolio markdown-body" inner_html=parse_markdown(PORTFOLIO_MD)></section>
    }
}
