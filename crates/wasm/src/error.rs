//! Error handling for WASM bindings.
//!
//! Converts folio's error types into JavaScript-friendly errors.

use folio_core::{BehaviorError, ConfigError};
use std::fmt;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Error codes for TypeScript consumption.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Configuration error (invalid selectors or values)
    Config,
    /// No window, document or body to work with
    Environment,
    /// A DOM call threw
    Dom,
    /// Boot was requested twice on the same page
    AlreadyBooted,
    /// Unknown error
    Unknown,
}

/// A JavaScript-friendly error type.
///
/// Note: This is NOT a wasm_bindgen struct because we need custom
/// conversion to JavaScript Error objects.
#[derive(Debug)]
pub struct FolioError {
    code: ErrorCode,
    message: String,
}

impl FolioError {
    /// Create a new error with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Config, message)
    }

    /// Get the error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Get the error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for FolioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl From<BehaviorError> for FolioError {
    fn from(err: BehaviorError) -> Self {
        let code = match &err {
            BehaviorError::Config(_) => ErrorCode::Config,
            BehaviorError::Environment(_) => ErrorCode::Environment,
            BehaviorError::Dom(_) => ErrorCode::Dom,
            BehaviorError::AlreadyBooted => ErrorCode::AlreadyBooted,
            BehaviorError::Other(_) => ErrorCode::Unknown,
        };

        Self {
            code,
            message: err.to_string(),
        }
    }
}

impl From<ConfigError> for FolioError {
    fn from(err: ConfigError) -> Self {
        Self::new(ErrorCode::Config, err.to_string())
    }
}

impl From<FolioError> for JsValue {
    fn from(err: FolioError) -> Self {
        let js_error = js_sys::Error::new(&err.message);

        // Add the error code as a property
        let code_str = match err.code {
            ErrorCode::Config => "CONFIG_ERROR",
            ErrorCode::Environment => "ENVIRONMENT_ERROR",
            ErrorCode::Dom => "DOM_ERROR",
            ErrorCode::AlreadyBooted => "ALREADY_BOOTED",
            ErrorCode::Unknown => "UNKNOWN_ERROR",
        };

        js_sys::Reflect::set(&js_error, &"code".into(), &JsValue::from_str(code_str)).ok();

        js_error.into()
    }
}

/// Renders a thrown JavaScript value for logs and error messages.
pub fn describe(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        let name = String::from(error.name());
        let message = String::from(error.message());
        return if message.is_empty() {
            name
        } else {
            format!("{}: {}", name, message)
        };
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Wraps a failed DOM call into a [`BehaviorError`].
pub fn dom_error(context: &str, value: JsValue) -> BehaviorError {
    BehaviorError::Dom(format!("{}: {}", context, describe(&value)))
}
