//! Todolist Frontend Entry Point

mod models;
mod persistence;
mod store;
mod context;
mod routes;
mod markdown;
mod components;
mod views;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("[APP] Todolist starting");
    mount_to_body(App);
}
