//! Pointer input.
//!
//! Browser callbacks only push [`PointerEvent`]s into an [`InputQueue`]; the
//! renderer drains the queue once per frame and folds the events into a
//! [`PointerState`].

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use glam::Vec2;
use web_sys::Element;

/// A pointer event kind.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum PointerEventKind {
    /// Mouse button pressed
    Pressed,
    /// Mouse button released
    Released,
    /// Mouse moved
    Moved,
    /// Unidentified mouse event
    Unidentified,
}

/// Convert a DOM event type to a [`PointerEventKind`].
impl From<&str> for PointerEventKind {
    fn from(event: &str) -> Self {
        match event {
            "mousedown" => PointerEventKind::Pressed,
            "mouseup" => PointerEventKind::Released,
            "mousemove" => PointerEventKind::Moved,
            _ => PointerEventKind::Unidentified,
        }
    }
}

/// A pointer event in canvas-relative pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// The triggered event.
    pub kind: PointerEventKind,
    /// Horizontal offset from the element's left edge.
    pub x: f32,
    /// Vertical offset from the element's top edge.
    pub y: f32,
}

impl PointerEvent {
    /// Constructs a new [`PointerEvent`].
    pub fn new(kind: PointerEventKind, x: f32, y: f32) -> Self {
        Self { kind, x, y }
    }

    /// Converts a browser event into coordinates relative to `element`.
    pub fn from_mouse_event(event: &web_sys::MouseEvent, element: &Element) -> Self {
        let rect = element.get_bounding_client_rect();
        Self {
            kind: event.type_().as_str().into(),
            x: (event.client_x() as f64 - rect.left()) as f32,
            y: (event.client_y() as f64 - rect.top()) as f32,
        }
    }
}

/// Mouse position and drag state as seen by the shaders.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    /// Last pointer position.
    pub mouse: Vec2,
    /// Last pointer position observed while a button was held.
    pub drag: Vec2,
    /// Whether a button is held.
    pub dragging: bool,
}

impl PointerState {
    /// Folds one event into the state.
    ///
    /// Moves always update `mouse`; they update `drag` only while dragging.
    pub fn apply(&mut self, event: &PointerEvent) {
        match event.kind {
            PointerEventKind::Pressed => self.dragging = true,
            PointerEventKind::Released => self.dragging = false,
            PointerEventKind::Moved => {
                let position = Vec2::new(event.x, event.y);
                self.mouse = position;
                if self.dragging {
                    self.drag = position;
                }
            }
            PointerEventKind::Unidentified => {}
        }
    }
}

/// A shared FIFO of pointer events.
///
/// Cloning yields another handle to the same queue.
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    events: Rc<RefCell<VecDeque<PointerEvent>>>,
}

impl InputQueue {
    /// Constructs a new, empty [`InputQueue`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event.
    pub fn push(&self, event: PointerEvent) {
        self.events.borrow_mut().push_back(event);
    }

    /// Removes and returns every queued event, oldest first.
    pub fn drain(&self) -> VecDeque<PointerEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    /// Returns `true` if no events are queued.
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PointerEventKind::*;

    fn replay(events: &[PointerEvent]) -> PointerState {
        let mut state = PointerState::default();
        events.iter().for_each(|event| state.apply(event));
        state
    }

    #[test]
    fn event_type_names() {
        assert_eq!(PointerEventKind::from("mousedown"), Pressed);
        assert_eq!(PointerEventKind::from("mouseup"), Released);
        assert_eq!(PointerEventKind::from("mousemove"), Moved);
        assert_eq!(PointerEventKind::from("wheel"), Unidentified);
    }

    #[test]
    fn move_without_drag_leaves_drag_unchanged() {
        let state = replay(&[PointerEvent::new(Moved, 10.0, 20.0)]);
        assert_eq!(state.mouse, Vec2::new(10.0, 20.0));
        assert_eq!(state.drag, Vec2::ZERO);
        assert!(!state.dragging);
    }

    #[test]
    fn move_while_dragging_updates_both() {
        let state = replay(&[
            PointerEvent::new(Pressed, 1.0, 1.0),
            PointerEvent::new(Moved, 30.0, 40.0),
        ]);
        assert_eq!(state.mouse, Vec2::new(30.0, 40.0));
        assert_eq!(state.drag, Vec2::new(30.0, 40.0));
    }

    #[test]
    fn press_alone_does_not_move_drag() {
        let state = replay(&[PointerEvent::new(Pressed, 5.0, 5.0)]);
        assert!(state.dragging);
        assert_eq!(state.drag, Vec2::ZERO);
        assert_eq!(state.mouse, Vec2::ZERO);
    }

    #[test]
    fn release_freezes_drag() {
        let state = replay(&[
            PointerEvent::new(Pressed, 0.0, 0.0),
            PointerEvent::new(Moved, 3.0, 4.0),
            PointerEvent::new(Released, 3.0, 4.0),
            PointerEvent::new(Moved, 50.0, 60.0),
        ]);
        assert_eq!(state.drag, Vec2::new(3.0, 4.0));
        assert_eq!(state.mouse, Vec2::new(50.0, 60.0));
        assert!(!state.dragging);
    }

    #[test]
    fn queue_drains_in_order_and_empties() {
        let queue = InputQueue::new();
        let handle = queue.clone();
        handle.push(PointerEvent::new(Pressed, 0.0, 0.0));
        handle.push(PointerEvent::new(Moved, 1.0, 2.0));

        let drained: Vec<_> = queue.drain().into_iter().map(|e| e.kind).collect();
        assert_eq!(drained, [Pressed, Moved]);
        assert!(queue.is_empty());
        assert!(handle.is_empty());
    }
}
