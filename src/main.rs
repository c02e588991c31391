//! League Board Frontend Entry Point

mod app;
mod board;
mod components;
mod context;
mod models;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
