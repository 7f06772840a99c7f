use crate::{
    error::Error,
    event::{InputQueue, PointerEvent},
};
use web_sys::{
    wasm_bindgen::{closure::Closure, JsCast},
    Element,
};

/// Pointer events that are forwarded to the input queue.
const POINTER_EVENTS: &[&str] = &["mousedown", "mouseup", "mousemove"];

/// Pointer listener on the canvas, forwarding into an [`InputQueue`].
pub(crate) type PointerListener = EventCallback<web_sys::MouseEvent>;

/// Manages web event listeners with automatic cleanup.
///
/// This struct wraps JavaScript event listeners with proper lifecycle management,
/// automatically removing event listeners when the struct is dropped.
#[derive(Debug)]
pub(crate) struct EventCallback<T> {
    event_types: &'static [&'static str],
    element: Element,
    closure: Closure<dyn FnMut(T)>,
}

impl EventCallback<web_sys::MouseEvent> {
    /// Listens for pointer events on `element` and pushes them, converted to
    /// element-relative coordinates, into `queue`.
    pub fn new_pointer(element: Element, queue: InputQueue) -> Result<Self, Error> {
        let target = element.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::MouseEvent| {
            queue.push(PointerEvent::from_mouse_event(&event, &target));
        });

        POINTER_EVENTS.iter().try_for_each(|event| {
            element
                .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
                .map_err(Error::from)
        })?;

        Ok(Self {
            event_types: POINTER_EVENTS,
            element,
            closure,
        })
    }
}

impl EventCallback<web_sys::Event> {
    /// Listens for `event_types` on a form element such as an `<input>` or a
    /// `<button>`.
    pub fn new_form<F>(
        element: Element,
        event_types: &'static [&'static str],
        callback: F,
    ) -> Result<Self, Error>
    where
        F: FnMut(web_sys::Event) + 'static,
    {
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(callback);

        event_types.iter().try_for_each(|event| {
            element
                .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
                .map_err(Error::from)
        })?;

        Ok(Self {
            event_types,
            element,
            closure,
        })
    }
}

impl<T> Drop for EventCallback<T> {
    fn drop(&mut self) {
        let closure = &self.closure.as_ref();
        for event_type in self.event_types {
            let _ = self
                .element
                .remove_event_listener_with_callback(event_type, closure.unchecked_ref());
        }
    }
}
