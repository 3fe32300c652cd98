//! Vitrine storefront entry point (client-side rendered).

mod api;
mod app;
mod components;
mod pages;
mod state;

use app::App;

pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
