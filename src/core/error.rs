use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors surfaced by the stage and its browser facade
#[derive(Debug, Error, PartialEq)]
pub enum StageError {
    #[error("invalid stage config json: {0}")]
    Config(String),
    #[error("invalid stage config: {0}")]
    InvalidConfig(&'static str),
    #[error("stage is already mounted")]
    AlreadyMounted,
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("2d canvas context unavailable")]
    CanvasUnavailable,
    #[error("dom operation failed: {0}")]
    Dom(String),
}

impl StageError {
    /// Wrap a JS exception raised by a DOM call
    pub fn dom(err: JsValue) -> Self {
        StageError::Dom(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
    }
}

impl From<serde_json::Error> for StageError {
    fn from(err: serde_json::Error) -> Self {
        StageError::Config(err.to_string())
    }
}

impl From<StageError> for JsValue {
    fn from(err: StageError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
