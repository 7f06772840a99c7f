use web_sys::{
    wasm_bindgen::{JsCast, JsValue},
    Document, Element, HtmlCanvasElement, Performance, Window,
};

use crate::error::Error;

pub(crate) fn get_window() -> Result<Window, Error> {
    web_sys::window().ok_or(Error::UnableToRetrieveWindow)
}

pub(crate) fn get_document() -> Result<Document, Error> {
    get_window()?
        .document()
        .ok_or(Error::UnableToRetrieveDocument)
}

/// Returns the element with the given id, or `<body>` when no id is given.
pub(crate) fn get_element_by_id_or_body(id: Option<&str>) -> Result<Element, Error> {
    match id {
        Some(id) => get_document()?
            .get_element_by_id(id)
            .ok_or_else(|| Error::UnableToRetrieveElementById(id.to_string())),
        None => get_document()?
            .body()
            .ok_or(Error::UnableToRetrieveBody)
            .map(|body| body.into()),
    }
}

/// Returns the `<canvas>` with the given id, creating one under `<body>` if
/// no id is given.
pub fn get_or_create_canvas(id: Option<&str>) -> Result<HtmlCanvasElement, Error> {
    match id {
        Some(_) => Ok(get_element_by_id_or_body(id)?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(JsValue::from)?),
        None => {
            let canvas = get_document()?
                .create_element("canvas")?
                .dyn_into::<HtmlCanvasElement>()
                .map_err(JsValue::from)?;
            get_element_by_id_or_body(None)?.append_child(&canvas)?;
            Ok(canvas)
        }
    }
}

/// Returns the size of the browser viewport in pixels.
pub fn get_raw_window_size() -> (u32, u32) {
    fn js_val_to_int<I: TryFrom<usize>>(val: JsValue) -> Option<I> {
        val.as_f64().and_then(|i| I::try_from(i as usize).ok())
    }

    web_sys::window()
        .and_then(|s| {
            s.inner_width()
                .ok()
                .and_then(js_val_to_int::<u32>)
                .zip(s.inner_height().ok().and_then(js_val_to_int::<u32>))
        })
        .unwrap_or((800, 600))
}

pub(crate) fn performance() -> Option<Performance> {
    web_sys::window().and_then(|window| window.performance())
}

/// Shows a blocking `alert()` dialog.
pub fn alert(message: &str) -> Result<(), Error> {
    get_window()?.alert_with_message(message)?;
    Ok(())
}
