#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod config;
pub mod content;
pub mod filter;
pub mod reveal;
pub mod scroll;
pub mod subscription;
pub mod terminal;
pub mod theme;
pub mod typewriter;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("couldn't start console logging: {e}");
    }
    leptos::mount::hydrate_body(App);
}
