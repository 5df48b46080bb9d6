//! Leptos DragDrop Utilities
//!
//! Sortable drag-and-drop across containers for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag.
//!
//! The crate only tracks the pointer and the hovered drop target. What a
//! drag means for the caller's data is decided in the four lifecycle
//! callbacks, each receiving a [`DndEvent`].

use leptos::ev;
use leptos::leptos_dom::helpers::WindowListenerHandle;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// The item being dragged
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Active {
    pub id: String,
}

/// The drop target under the pointer: an item or a container
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Over {
    pub id: String,
}

/// Payload delivered to every lifecycle callback
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DndEvent {
    pub active: Active,
    pub over: Option<Over>,
}

impl DndEvent {
    pub fn new(active: impl Into<String>, over: Option<impl Into<String>>) -> Self {
        Self {
            active: Active { id: active.into() },
            over: over.map(|id| Over { id: id.into() }),
        }
    }

    /// Id of the hovered target, if any
    pub fn over_id(&self) -> Option<&str> {
        self.over.as_ref().map(|o| o.id.as_str())
    }
}

/// Lifecycle callbacks
#[derive(Clone, Copy)]
pub struct DndCallbacks {
    pub on_drag_start: Callback<DndEvent>,
    pub on_drag_over: Callback<DndEvent>,
    pub on_drag_end: Callback<DndEvent>,
    pub on_drag_cancel: Callback<DndEvent>,
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub active_id_read: ReadSignal<Option<String>>,
    pub active_id_write: WriteSignal<Option<String>>,
    pub over_id_read: ReadSignal<Option<String>>,
    pub over_id_write: WriteSignal<Option<String>>,
    /// Pending item id (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<String>>,
    pub pending_id_write: WriteSignal<Option<String>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
    /// Pointer position while dragging, for the drag overlay
    pub pointer_read: ReadSignal<(i32, i32)>,
    pub pointer_write: WriteSignal<(i32, i32)>,
    /// Movement in pixels needed before a pending press becomes a drag
    pub threshold_px: i32,
}

/// Movement threshold in pixels to start dragging
pub const DEFAULT_DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_dnd_signals(threshold_px: i32) -> DndSignals {
    let (active_id_read, active_id_write) = signal(None::<String>);
    let (over_id_read, over_id_write) = signal(None::<String>);
    let (pending_id_read, pending_id_write) = signal(None::<String>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    let (pointer_read, pointer_write) = signal((0i32, 0i32));
    DndSignals {
        active_id_read,
        active_id_write,
        over_id_read,
        over_id_write,
        pending_id_read,
        pending_id_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
        pointer_read,
        pointer_write,
        threshold_px,
    }
}

/// True once the pointer has moved beyond `threshold_px` on either axis
pub fn exceeds_threshold(start: (i32, i32), current: (i32, i32), threshold_px: i32) -> bool {
    let dx = (current.0 - start.0).abs();
    let dy = (current.1 - start.1).abs();
    dx > threshold_px || dy > threshold_px
}

/// Marks a draggable element; its value is the item id
pub const ITEM_ATTR: &str = "data-dnd-item";

/// Drop target for a hover landing on `item_id` inside `container_id`
///
/// Anything inside the container that is not an item is its empty area.
pub fn hover_target(item_id: Option<String>, container_id: &str) -> String {
    item_id.unwrap_or_else(|| container_id.to_string())
}

impl DndSignals {
    /// Is `id` the item currently being dragged?
    pub fn is_active(&self, id: &str) -> bool {
        self.active_id_read.with(|a| a.as_deref() == Some(id))
    }

    /// Is `id` the current drop target?
    pub fn is_over(&self, id: &str) -> bool {
        self.over_id_read.with(|o| o.as_deref() == Some(id))
    }

    fn current_event(&self) -> Option<DndEvent> {
        let active = self.active_id_read.get_untracked()?;
        Some(DndEvent::new(active, self.over_id_read.get_untracked()))
    }

    /// Record a press on `item_id` at `at`; dragging starts once the pointer moves
    pub fn press(&self, item_id: String, at: (i32, i32)) {
        self.pending_id_write.set(Some(item_id));
        self.start_x_write.set(at.0);
        self.start_y_write.set(at.1);
    }

    /// Track the pointer, promoting a pending press past the threshold
    pub fn pointer_moved(&self, callbacks: &DndCallbacks, at: (i32, i32)) {
        if self.active_id_read.get_untracked().is_some() {
            self.pointer_write.set(at);
            return;
        }

        let Some(pending) = self.pending_id_read.get_untracked() else { return; };
        let start = (self.start_x_read.get_untracked(), self.start_y_read.get_untracked());
        if exceeds_threshold(start, at, self.threshold_px) {
            self.pointer_write.set(at);
            self.active_id_write.set(Some(pending.clone()));
            // The pressed item is the first thing under the pointer
            self.over_id_write.set(Some(pending.clone()));
            callbacks.on_drag_start.run(DndEvent::new(pending.clone(), Some(pending)));
        }
    }

    /// Move the hover target, firing `on_drag_over` when it changes
    pub fn hover(&self, callbacks: &DndCallbacks, over: Option<String>) {
        if self.active_id_read.get_untracked().is_none() {
            return;
        }
        if self.over_id_read.with_untracked(|o| *o == over) {
            return;
        }
        self.over_id_write.set(over);
        if let Some(event) = self.current_event() {
            callbacks.on_drag_over.run(event);
        }
    }

    /// Pointer released: finish the drag over the current target
    pub fn release(&self, callbacks: &DndCallbacks) {
        match self.current_event() {
            Some(event) => {
                end_drag(self);
                callbacks.on_drag_end.run(event);
            }
            None => end_drag(self),
        }
    }

    /// Abort the drag without a drop
    pub fn cancel(&self, callbacks: &DndCallbacks) {
        match self.current_event() {
            Some(event) => {
                log::debug!("drag cancelled: {}", event.active.id);
                end_drag(self);
                callbacks.on_drag_cancel.run(event);
            }
            None => end_drag(self),
        }
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.active_id_write.set(None);
    dnd.over_id_write.set(None);
    dnd.pending_id_write.set(None);
}

/// Create mousedown handler for draggable items
/// Records pending drag with start position
pub fn make_on_mousedown(dnd: DndSignals, item_id: String) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            ev.prevent_default();
            dnd.press(item_id.clone(), (ev.client_x(), ev.client_y()));
        }
    }
}

/// Item id of the draggable element under the event target, if any
fn item_under(ev: &web_sys::MouseEvent) -> Option<String> {
    let el = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let item = el.closest(&format!("[{ITEM_ATTR}]")).ok()??;
    item.get_attribute(ITEM_ATTR)
}

/// Create mouseover handler for containers
///
/// `mouseover` bubbles from whatever child is under the pointer, so the
/// hovered item is resolved from the event target. Entering a container
/// straight onto an item reports only that item.
pub fn make_on_container_mouseover(dnd: DndSignals, callbacks: DndCallbacks, container_id: String) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if dnd.active_id_read.get_untracked().is_none() {
            return;
        }
        dnd.hover(&callbacks, Some(hover_target(item_under(&ev), &container_id)));
    }
}

/// Create mouseleave handler for containers
pub fn make_on_container_mouseleave(dnd: DndSignals, callbacks: DndCallbacks) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        dnd.hover(&callbacks, None);
    }
}

/// Window listeners installed by [`bind_global_listeners`]
pub struct DndListeners {
    handles: Vec<WindowListenerHandle>,
}

impl DndListeners {
    /// Detach every listener
    pub fn remove(self) {
        for handle in self.handles {
            handle.remove();
        }
    }
}

/// Bind window-level handlers that start, finish and cancel drags
///
/// - mousemove promotes a pending press to a drag past the threshold
/// - mouseup ends the drag over the current target
/// - Escape or losing window focus cancels it
pub fn bind_global_listeners(dnd: DndSignals, callbacks: DndCallbacks) -> DndListeners {
    let on_mousemove = window_event_listener(ev::mousemove, move |ev: web_sys::MouseEvent| {
        dnd.pointer_moved(&callbacks, (ev.client_x(), ev.client_y()));
    });

    let on_mouseup = window_event_listener(ev::mouseup, move |_ev: web_sys::MouseEvent| {
        dnd.release(&callbacks);
    });

    let on_keydown = window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" && dnd.active_id_read.get_untracked().is_some() {
            ev.prevent_default();
            dnd.cancel(&callbacks);
        }
    });

    let on_blur = window_event_listener(ev::blur, move |_ev: web_sys::FocusEvent| {
        dnd.cancel(&callbacks);
    });

    DndListeners {
        handles: vec![on_mousemove, on_mouseup, on_keydown, on_blur],
    }
}
