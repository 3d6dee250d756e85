//! High-score persistence behind a small key/value trait.

use std::cell::RefCell;
use std::collections::HashMap;
use std::num::ParseIntError;
use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::util::js_error_message;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("storage call failed: {0}")]
    Js(String),
    #[error("stored value is not a score")]
    Parse(#[from] ParseIntError),
}

impl From<JsValue> for StorageError {
    fn from(value: JsValue) -> Self {
        StorageError::Js(js_error_message(&value))
    }
}

/// Integer key/value store used for the high score.
pub trait HighScoreStore {
    fn get(&self, key: &str) -> Result<Option<u32>, StorageError>;
    fn set(&self, key: &str, value: u32) -> Result<(), StorageError>;

    /// Reads `key`, treating absence as 0.
    fn load(&self, key: &str) -> Result<u32, StorageError> {
        Ok(self.get(key)?.unwrap_or(0))
    }

    /// Writes `value` only if it beats what is stored. Returns whether it wrote.
    fn record(&self, key: &str, value: u32) -> Result<bool, StorageError> {
        let current = match self.get(key) {
            Ok(v) => v.unwrap_or(0),
            // A corrupt value is replaced rather than blocking the write.
            Err(StorageError::Parse(_)) => 0,
            Err(e) => return Err(e),
        };
        if value <= current {
            return Ok(false);
        }
        self.set(key, value)?;
        Ok(true)
    }
}

/// `window.localStorage`, as used by the running app. Besides the high
/// score it holds raw string entries such as the intro flag.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LocalStore;

impl LocalStore {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        let win = web_sys::window().ok_or(StorageError::Unavailable)?;
        win.local_storage()?.ok_or(StorageError::Unavailable)
    }

    pub fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(Self::storage()?.get_item(key)?)
    }

    pub fn set_raw(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Ok(Self::storage()?.set_item(key, value)?)
    }
}

impl HighScoreStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<u32>, StorageError> {
        match self.get_raw(key)? {
            Some(raw) => Ok(Some(raw.trim().parse::<u32>()?)),
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: u32) -> Result<(), StorageError> {
        self.set_raw(key, &value.to_string())
    }
}

/// In-memory store for tests.
#[derive(Debug, Default)]
pub struct MemoryHighScoreStore {
    values: RefCell<HashMap<String, String>>,
    writes: RefCell<u32>,
}

impl MemoryHighScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a raw string value, e.g. to simulate a corrupt entry.
    pub fn insert_raw(&self, key: &str, raw: &str) {
        self.values.borrow_mut().insert(key.to_string(), raw.to_string());
    }

    /// Number of successful `set` calls so far.
    pub fn writes(&self) -> u32 {
        *self.writes.borrow()
    }
}

impl HighScoreStore for MemoryHighScoreStore {
    fn get(&self, key: &str) -> Result<Option<u32>, StorageError> {
        match self.values.borrow().get(key) {
            Some(raw) => Ok(Some(raw.trim().parse::<u32>()?)),
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: u32) -> Result<(), StorageError> {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
        *self.writes.borrow_mut() += 1;
        Ok(())
    }
}
