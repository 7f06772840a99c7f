use std::{cell::RefCell, rc::Rc};
use web_sys::wasm_bindgen::prelude::*;

use crate::{error::Error, utils::get_window};

/// Requests an animation frame.
fn request_animation_frame(f: &Closure<dyn FnMut()>) -> Result<i32, Error> {
    Ok(get_window()?.request_animation_frame(f.as_ref().unchecked_ref())?)
}

/// Runs `frame_callback` on every [`requestAnimationFrame`] tick.
///
/// The next frame is requested after the callback returns. An error from the
/// callback is logged and stops the loop.
///
/// [`requestAnimationFrame`]: https://developer.mozilla.org/en-US/docs/Web/API/Window/requestAnimationFrame
pub fn run_animation_loop<F>(mut frame_callback: F) -> Result<(), Error>
where
    F: FnMut() -> Result<(), Error> + 'static,
{
    let callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    *callback.borrow_mut() = Some(Closure::wrap(Box::new({
        let cb = callback.clone();
        move || {
            if let Err(error) = frame_callback() {
                log::error!("animation loop stopped: {error}");
                return;
            }
            if let Some(closure) = cb.borrow().as_ref() {
                if let Err(error) = request_animation_frame(closure) {
                    log::error!("unable to request the next frame: {error}");
                }
            }
        }
    }) as Box<dyn FnMut()>));

    let result = match callback.borrow().as_ref() {
        Some(closure) => request_animation_frame(closure).map(|_| ()),
        None => Ok(()),
    };
    result
}
