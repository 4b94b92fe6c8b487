//! Chartboard Entry Point
//!
//! Boots the app in the browser: reads startup options from the host page,
//! mounts the selected view, and leaves it running.

use chartboard::{start_with, BootOptions, MountConfig};

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    let options = BootOptions::from_host();
    let view = options.view();

    log::info!(
        "Chartboard v{} starting {} view",
        env!("CARGO_PKG_VERSION"),
        view.label()
    );

    let config = MountConfig::from_options(&options);

    match start_with(view, config) {
        Ok(app) => app.forget(),
        Err(err) => {
            log::error!("Failed to start: {}", err);
            wasm_bindgen::throw_str(&err.to_string());
        }
    }
}
