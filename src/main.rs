//! Todo Dashboard Frontend Entry Point

mod app;
mod components;
mod context;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;
use rolling_logger::{LogLine, RollingLogger, DEFAULT_CAPACITY};
use tracing::Level;
use wasm_bindgen::JsValue;

/// Mirrors each log line to the browser console at the matching level
fn console_sink(line: &LogLine) {
    let text = JsValue::from(line.to_string());
    match line.level {
        Level::ERROR => web_sys::console::error_1(&text),
        Level::WARN => web_sys::console::warn_1(&text),
        Level::INFO => web_sys::console::info_1(&text),
        _ => web_sys::console::debug_1(&text),
    }
}

fn main() {
    console_error_panic_hook::set_once();
    let logger = rolling_logger::init(DEFAULT_CAPACITY, Level::DEBUG, console_sink).unwrap_or_else(|e| {
        web_sys::console::warn_1(&format!("[APP] Logging already initialised: {}", e).into());
        RollingLogger::new(DEFAULT_CAPACITY)
    });
    mount_to_body(move || view! { <App logger=logger /> });
}
