mod browser_environment;
mod browser_storage;
mod utils;

pub use browser_environment::BrowserEnvironment;
pub use browser_storage::BrowserStorage;

pub(crate) use utils::js_error_text;

use tracing::Level;
use tracing_wasm::{ConsoleConfig, WASMLayerConfigBuilder};
use wasm_bindgen::prelude::*;

use crate::prelude::*;

#[wasm_bindgen(start)]
pub fn wasm_init() -> Result<(), JsValue> {
    // Only run this in debug mode, in release mode this bloats up the library quite a bit
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();

    let wasm_log_config = if cfg!(debug_assertions) {
        WASMLayerConfigBuilder::default()
            .set_report_logs_in_timings(true)
            .set_max_level(Level::DEBUG)
            .set_console_config(ConsoleConfig::ReportWithoutConsoleColor)
            .build()
    } else {
        WASMLayerConfigBuilder::default()
            .set_report_logs_in_timings(false)
            .set_max_level(Level::INFO)
            .set_console_config(ConsoleConfig::ReportWithoutConsoleColor)
            .build()
    };

    tracing_wasm::set_as_global_default_with_config(wasm_log_config);
    tracing::debug!("successfully loaded bilo-session WASM module {}", minimal_version());

    Ok(())
}

/// Generate an anonymous session ID for non-authenticated users.
#[wasm_bindgen(js_name = generateSessionId)]
pub fn wasm_generate_session_id() -> String {
    generate_session_id()
}

/// Get or create the session ID kept in `localStorage`. Whatever the storage throws is rethrown
/// as the same value.
#[wasm_bindgen(js_name = getSessionId)]
pub fn wasm_get_session_id() -> Result<String, JsValue> {
    let mut storage = BrowserStorage::local()?;
    Ok(get_session_id(&mut storage)?)
}

/// Device and browser information as `{ userAgent, screenSize, language, referrer, platform }`.
#[wasm_bindgen(js_name = getDeviceInfo)]
pub fn wasm_get_device_info() -> Result<JsValue, JsValue> {
    let env = BrowserEnvironment::current()?;
    let info = get_device_info(&env)?;

    Ok(serde_wasm_bindgen::to_value(&info)?)
}
