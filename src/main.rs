//! Todo Widget Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod delegation;
mod dialog;
mod logging;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = config::body_config();
    logging::init(&config.log_level);

    mount_to_body(move || view! { <App config=config /> });
}
