#![allow(warnings)]
//! Todos Frontend Entry Point

mod config;
mod error;
mod models;
mod storage;
mod api;
mod todos;
mod routes;
mod context;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_logger::init(log::Level::Info) {
        web_sys::console::error_1(&format!("[MAIN] Logger not installed: {}", e).into());
    }
    log::info!("[MAIN] Mounting todos app");
    mount_to_body(App);
}
