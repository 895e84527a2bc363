//!
//! Errors returned by the [`landportal_widget`](super) crate
//!
use thiserror::Error;
use workflow_core::channel::RecvError;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;
#[cfg(target_arch = "wasm32")]
use workflow_wasm::printable::Printable;

/// Errors returned by the [`landportal_widget`](super) crate
#[derive(Error, Debug, Clone)]
pub enum Error {
    /// Custom string error
    #[error("{0}")]
    Custom(String),

    /// The injector was given a resource tag other than `js` or `css`
    #[error("unsupported resource kind `{0}` (expected `js` or `css`)")]
    UnsupportedResourceKind(String),

    /// The configured container parent is not present in the document
    #[error("render parent `{0}` not found in the document")]
    ParentNotFound(String),

    /// An element with the container id is already present
    #[error("render target `{0}` already exists in the document")]
    DuplicateTarget(String),

    /// The container element could not be located after insertion
    #[error("render target `{0}` is not attached to the document")]
    TargetNotAttached(String),

    /// The rendering library has not registered its global namespace
    #[error("rendering library `{0}` is not loaded")]
    DependencyNotReady(String),

    /// A script or stylesheet reported an `error` event
    #[error("unable to load resource `{0}`")]
    ResourceLoad(String),

    /// Payload rejected a write of one of the target fields
    #[error("unable to set `{0}` on the render payload")]
    PayloadNotWritable(String),

    #[error("{0}")]
    Serde(String),

    #[error("{0}")]
    Recv(#[from] RecvError),

    /// Error containing a [`wasm_bindgen::JsValue`]
    #[cfg(target_arch = "wasm32")]
    #[error("{0}")]
    JsValue(Printable),
}

impl From<String> for Error {
    fn from(v: String) -> Self {
        Self::Custom(v)
    }
}

impl From<&str> for Error {
    fn from(v: &str) -> Self {
        Self::Custom(v.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<JsValue> for Error {
    fn from(v: JsValue) -> Self {
        Self::JsValue(Printable::new(v))
    }
}

#[cfg(target_arch = "wasm32")]
impl From<workflow_wasm::callback::CallbackError> for Error {
    fn from(err: workflow_wasm::callback::CallbackError) -> Self {
        Self::Custom(err.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<Error> for JsValue {
    fn from(err: Error) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
