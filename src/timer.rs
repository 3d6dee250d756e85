//! Browser timers that clear themselves when dropped.
//! Moving one into a `use_effect_with` cleanup ties the timer to the
//! lifetime of the effect's dependencies.

use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;

use crate::util::js_error_message;

#[derive(Error, Debug)]
pub enum TimerError {
    #[error("no global `window` exists")]
    NoWindow,
    #[error("failed to schedule timer: {0}")]
    Js(String),
    #[error("delay of {0} ms is too long for the browser")]
    Delay(u32),
}

fn delay(millis: u32) -> Result<i32, TimerError> {
    i32::try_from(millis).map_err(|_| TimerError::Delay(millis))
}

impl From<JsValue> for TimerError {
    fn from(value: JsValue) -> Self {
        TimerError::Js(js_error_message(&value))
    }
}

/// One-shot `setTimeout`.
pub struct Timeout {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Timeout {
    pub fn new<F: FnMut() + 'static>(millis: u32, callback: F) -> Result<Self, TimerError> {
        let millis = delay(millis)?;
        let window = web_sys::window().ok_or(TimerError::NoWindow)?;
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        let id = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            millis,
        )?;
        Ok(Self { id, _callback: callback })
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            window.clear_timeout_with_handle(self.id);
        }
    }
}

/// Repeating `setInterval`.
pub struct Interval {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn new<F: FnMut() + 'static>(millis: u32, callback: F) -> Result<Self, TimerError> {
        let millis = delay(millis)?;
        let window = web_sys::window().ok_or(TimerError::NoWindow)?;
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        let id = window.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            millis,
        )?;
        Ok(Self { id, _callback: callback })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            window.clear_interval_with_handle(self.id);
        }
    }
}
