//! Browser sandbox rendering every `moon_ui` component demo.

mod catalog;
mod demos;
mod pages;
mod web_app;

pub use catalog::{demo_entries, find_demo, DemoEntry, DemoKind};
pub use web_app::EarthApp;

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    if let Some(path) = web_sys::window().and_then(|window| window.location().pathname().ok()) {
        leptos::logging::log!("earth sandbox mounting at {path}");
    }
    leptos::mount_to_body(|| leptos::view! { <EarthApp /> })
}
