//! TMS Frontend Entry Point

mod models;
mod nav;
mod toast;
mod overlay;
mod validate;
mod submit;
mod dialog;
mod observe;
mod context;
mod store;
mod components;
mod pages;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
