use wasm_bindgen::{JsCast, JsValue};

/// Console log. A no-op off wasm so native test runs never touch JS.
pub fn clog(msg: &str) {
    if cfg!(target_arch = "wasm32") {
        web_sys::console::log_1(&JsValue::from_str(msg));
    }
}

/// Best-effort text for a thrown JS value.
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
