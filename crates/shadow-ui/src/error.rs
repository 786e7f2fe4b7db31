use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Failures while building a shadow boundary. Components log these and
/// carry on; they never reach the caller.
#[derive(Debug, Error)]
pub enum BoundaryError {
    #[error("host already carries a shadow root it did not get from this component")]
    ForeignShadowRoot,
    #[error("attachShadow failed: {0}")]
    Attach(String),
    #[error("failed to create <{tag}>: {message}")]
    CreateElement { tag: &'static str, message: String },
    #[error("failed to append to shadow root: {0}")]
    Append(String),
}

/// Best-effort message for a thrown JavaScript value
pub(crate) fn js_message(err: &JsValue) -> String {
    if let Some(err) = err.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    err.as_string().unwrap_or_else(|| "(JavaScript Error)".to_string())
}
