use wasm_bindgen::JsValue;

/// Failures talking to the browser. None of these are fatal for the page,
/// callers log them and leave the widget in its initial state.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("browser window is not available")]
    NoWindow,

    #[error("document is not available")]
    NoDocument,

    #[error("no element with id '{0}'")]
    MissingElement(String),

    #[error("node is not mounted")]
    Unmounted,

    #[error("{api} failed: {message}")]
    Js { api: &'static str, message: String },
}

impl HostError {
    pub fn js(api: &'static str, value: JsValue) -> Self {
        let message = value.as_string().unwrap_or_else(|| format!("{:?}", value));
        HostError::Js { api, message }
    }
}

pub fn window() -> Result<web_sys::Window, HostError> {
    web_sys::window().ok_or(HostError::NoWindow)
}

pub fn document() -> Result<web_sys::Document, HostError> {
    window()?.document().ok_or(HostError::NoDocument)
}
