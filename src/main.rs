//! Todo Manager Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod controller;
mod dialogs;
mod error;
mod filter;
mod forms;
mod models;
mod repository;
mod session;
mod storage;
mod store;
#[cfg(test)]
mod testing;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_tracing::set_as_global_default();

    tracing::info!("starting Todo Manager frontend");
    mount_to_body(App);
}
