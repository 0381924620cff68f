//! Daily Games Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod error;
mod games;
mod models;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(config::LOG_LEVEL));
    mount_to_body(App);
}
