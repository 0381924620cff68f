//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag.
//!
//! Generic over the dragged key `K` and the drop target `T`, so the caller
//! decides what a draggable thing and a drop spot are.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

/// How long `drag_just_ended` stays set after a drop, in milliseconds
const JUST_ENDED_MS: u32 = 100;

/// Bounds shared by drag keys and drop targets
pub trait DndValue: Copy + PartialEq + Send + Sync + 'static {}

impl<V: Copy + PartialEq + Send + Sync + 'static> DndValue for V {}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals<K: DndValue, T: DndValue> {
    pub dragging_read: ReadSignal<Option<K>>,
    pub dragging_write: WriteSignal<Option<K>>,
    pub drop_target_read: ReadSignal<Option<T>>,
    pub drop_target_write: WriteSignal<Option<T>>,
    /// Set briefly after a drop so the trailing click can be swallowed
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending key (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<K>>,
    pub pending_write: WriteSignal<Option<K>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

impl<K: DndValue, T: DndValue> DndSignals<K, T> {
    /// Is `key` the one currently being dragged?
    pub fn is_dragging(&self, key: K) -> bool {
        self.dragging_read.get() == Some(key)
    }

    /// Is any drag in progress?
    pub fn any_dragging(&self) -> bool {
        self.dragging_read.get().is_some()
    }

    /// Is `target` the current drop target?
    pub fn is_target(&self, target: T) -> bool {
        self.drop_target_read.get() == Some(target)
    }
}

pub fn create_dnd_signals<K: DndValue, T: DndValue>() -> DndSignals<K, T> {
    let (dragging_read, dragging_write) = signal(None::<K>);
    let (drop_target_read, drop_target_write) = signal(None::<T>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_read, pending_write) = signal(None::<K>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_read,
        dragging_write,
        drop_target_read,
        drop_target_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_read,
        pending_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// True once the pointer has travelled far enough from the mousedown point
pub fn exceeds_threshold(start: (i32, i32), now: (i32, i32)) -> bool {
    let dx = (now.0 - start.0).abs();
    let dy = (now.1 - start.1).abs();
    dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX
}

/// End drag operation
pub fn end_drag<K: DndValue, T: DndValue>(dnd: &DndSignals<K, T>) {
    dnd.dragging_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_write.set(None);
    dnd.drag_just_ended_write.set(true);

    let clear = dnd.drag_just_ended_write;
    Timeout::new(JUST_ENDED_MS, move || clear.set(false)).forget();
}

/// Create mousedown handler for draggable elements
/// Records pending drag with start position
pub fn make_on_mousedown<K: DndValue, T: DndValue>(
    dnd: DndSignals<K, T>,
    key: K,
) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Controls keep their own click behaviour
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlSelectElement>().is_some() { return; }
        }
        dnd.pending_write.set(Some(key));
        dnd.start_x_write.set(ev.client_x());
        dnd.start_y_write.set(ev.client_y());
    }
}

/// Create mouseenter handler for a drop target
pub fn make_on_target_mouseenter<K: DndValue, T: DndValue>(
    dnd: DndSignals<K, T>,
    target: T,
) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.drop_target_write.set(Some(target));
        }
    }
}

/// Create mouseleave handler for a drop target.
///
/// `restore` is the target to fall back to, for targets nested inside
/// another target (a zone inside its list). `None` clears the target.
pub fn make_on_target_mouseleave<K: DndValue, T: DndValue>(
    dnd: DndSignals<K, T>,
    restore: Option<T>,
) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.drop_target_write.set(restore);
        }
    }
}

/// Create click handler that swallows the click trailing a drop,
/// so releasing a dragged link does not navigate.
pub fn make_on_click_guard<K: DndValue, T: DndValue>(
    dnd: DndSignals<K, T>,
) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if dnd.drag_just_ended_read.get_untracked() {
            ev.prevent_default();
        }
    }
}

/// Create mousemove handler for document - starts drag if moved enough
fn bind_global_mousemove<K: DndValue, T: DndValue>(dnd: DndSignals<K, T>) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_read.get_untracked();

        // If we have a pending drag and haven't started dragging yet
        if pending.is_some() && dnd.dragging_read.get_untracked().is_none() {
            let start = (dnd.start_x_read.get_untracked(), dnd.start_y_read.get_untracked());
            if exceeds_threshold(start, (ev.client_x(), ev.client_y())) {
                log::debug!("[DND] drag started");
                dnd.dragging_write.set(pending);
            }
        }
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
    }
    on_mousemove.forget();
}

/// Bind global mouseup handler for drop detection.
///
/// `on_drop` runs only when a real drag ended over a target; a release
/// outside every target, or a plain click, just resets the state.
pub fn bind_global_mouseup<K, T, F>(dnd: DndSignals<K, T>, on_drop: F)
where
    K: DndValue,
    T: DndValue,
    F: Fn(K, T) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging_read.get_untracked();
        let drop_target = dnd.drop_target_read.get_untracked();

        dnd.pending_write.set(None);

        match (dragging, drop_target) {
            (Some(dragged), Some(target)) => {
                end_drag(&dnd);
                on_drop(dragged, target);
            }
            (Some(_), None) => {
                log::debug!("[DND] dropped outside any target");
                end_drag(&dnd);
            }
            // Not dragging - click event will fire naturally on the element
            (None, _) => {}
        }
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
    }
    on_mouseup.forget();

    // Also bind global mousemove
    bind_global_mousemove(dnd);
}
