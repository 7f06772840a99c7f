use web_sys::wasm_bindgen;

/// Custom error implementation.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Unable to retrieve window.
    ///
    /// This error occurs when [`web_sys::window()`] returns `None`.
    #[error("Unable to retrieve window")]
    UnableToRetrieveWindow,

    /// Unable to retrieve document.
    ///
    /// This error occurs when `window.document()` returns `None`.
    #[error("Unable to retrieve document")]
    UnableToRetrieveDocument,

    /// Unable to retrieve body.
    ///
    /// This error occurs when `document.body()` returns `None`.
    #[error("Unable to retrieve body")]
    UnableToRetrieveBody,

    /// Unable to retrieve an element by its id.
    #[error("Unable to retrieve element by id: {0}")]
    UnableToRetrieveElementById(String),

    /// Unable to retrieve the WebGL2 context.
    ///
    /// This error occurs when `canvas.get_context("webgl2")` returns `None`,
    /// i.e. the browser does not support WebGL2.
    #[error("Unable to retrieve WebGL2 context")]
    UnableToRetrieveWebGl2Context,

    /// The graphics context refused to allocate a shader object.
    #[error("Unable to create shader")]
    UnableToCreateShader,

    /// The graphics context refused to allocate a program object.
    #[error("Unable to create program")]
    UnableToCreateProgram,

    /// The graphics context refused to allocate a buffer object.
    #[error("Unable to create buffer")]
    UnableToCreateBuffer,

    /// A mesh has more indices than one draw call can address.
    #[error("Too many indices for one draw call: {0}")]
    TooManyIndices(usize),

    /// A shader stage failed to compile.
    ///
    /// Holds the info log reported by the driver.
    #[error("Shader compilation failed: {0}")]
    ShaderCompilation(String),

    /// The shader stages failed to link into a program.
    ///
    /// Holds the info log reported by the driver.
    #[error("Program link failed: {0}")]
    ProgramLink(String),

    /// JS value error.
    #[error("JS value error: {0:?}")]
    JsValue(wasm_bindgen::JsValue),
}

/// Convert [`wasm_bindgen::JsValue`] to [`Error`].
impl From<wasm_bindgen::JsValue> for Error {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::JsValue(value)
    }
}

/// Convert [`Error`] to [`std::io::Error`].
impl From<Error> for std::io::Error {
    fn from(error: Error) -> Self {
        std::io::Error::new(std::io::ErrorKind::Other, error.to_string())
    }
}
