//! Order Sheet Frontend Entry Point

mod app;
mod clipboard;
mod components;
mod context;
mod dialog;
mod hash;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
