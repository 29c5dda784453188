pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

/// Boots the console: panic hook, browser logging, runtime config, then the
/// router. Config resolution runs in the background; the API client resolves
/// its base URL lazily on the first request.
pub fn run() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger unavailable: {}", err).into());
    }
    log::info!("Starting Procurement Console (wasm)");

    leptos::spawn_local(async move {
        config::init().await;
    });

    router::mount_app();
}
