mod app;
mod components;

use app::App;
use leptos::{mount_to_body, view};

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    mount_to_body(|| view! { <App/> });
}
