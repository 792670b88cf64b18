//! wasm-bindgen surface of the provisioning core
//!
//! The page served by the device forwards user actions to `process_event`,
//! performs the returned HTTP effects with `fetch()` and hands the results
//! back through `handle_response`. All payloads are bincode.

use std::str::FromStr;

use lazy_static::lazy_static;
use wasm_bindgen::prelude::wasm_bindgen;

use crux_core::{bridge::Bridge, Core};

use crate::App;

lazy_static! {
    static ref CORE: Bridge<App> = Bridge::new(Core::new());
}

/// Runs when the module is loaded. Logs go to the browser console at `Info`
/// until the page calls [`set_log_level`].
#[wasm_bindgen(start)]
pub fn init_wasm() {
    console_log::init_with_level(log::Level::Info).expect("Failed to initialize logger");
    log::info!(
        "wifi provisioning core {} loaded",
        env!("CARGO_PKG_VERSION")
    );
}

/// Change the console log level at runtime (`error`, `warn`, `info`,
/// `debug`, `trace` or `off`). Unknown names keep the current level.
#[wasm_bindgen]
pub fn set_log_level(level: &str) {
    match log::LevelFilter::from_str(level) {
        Ok(filter) => log::set_max_level(filter),
        Err(_) => log::warn!("unknown log level {level:?}, keeping {}", log::max_level()),
    }
}

/// Feed a serialized `Event` from the page, get back the serialized effects.
#[wasm_bindgen]
pub fn process_event(event_bytes: &[u8]) -> Vec<u8> {
    let mut effects = Vec::new();
    CORE.update(event_bytes, &mut effects)
        .expect("Failed to process event");
    effects
}

/// Serialized `Model`, which is what the page renders.
#[wasm_bindgen]
pub fn view() -> Vec<u8> {
    let mut view = Vec::new();
    CORE.view(&mut view).expect("Failed to get view model");
    view
}

/// Resolve the HTTP effect `id` with the outcome of the page's `fetch()`.
/// Returns any follow-up effects.
#[wasm_bindgen]
pub fn handle_response(id: u32, response_bytes: &[u8]) -> Vec<u8> {
    let mut effects = Vec::new();
    CORE.resolve(
        crux_core::bridge::EffectId(id),
        response_bytes,
        &mut effects,
    )
    .expect("Failed to handle response");
    effects
}
