//! Error Types

use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("page global `{0}` is missing")]
    MissingGlobal(&'static str),
    #[error("element `{0}` not found")]
    MissingElement(String),
    #[error("JavaScript error: {0}")]
    Js(String),
    #[error("server responded with HTTP {status}")]
    Http { status: u16 },
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("server reported failure: {0}")]
    Server(String),
}

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&value, &JsValue::from_str("message"))
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{:?}", value));
        Error::Js(message)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Decode(e.to_string())
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
