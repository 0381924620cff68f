//! Drop Zone Component
//!
//! A horizontal line drop zone between games for drag-and-drop reordering.

use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::components::GameDnd;
use crate::models::DropSpot;

/// Drop zone shown between games to indicate drop position
#[component]
pub fn DropZone(
    dnd: GameDnd,
    /// Spot a drop here commits to
    spot: DropSpot,
) -> impl IntoView {
    let list = match spot {
        DropSpot::List(kind) | DropSpot::Slot(kind, _) => kind,
    };
    let on_mouseenter = make_on_target_mouseenter(dnd, spot);
    // Leaving a zone lands back on the enclosing list
    let on_mouseleave = make_on_target_mouseleave(dnd, Some(DropSpot::List(list)));

    let zone_class = move || {
        let mut c = String::from("drop-zone");
        if !dnd.any_dragging() { c.push_str(" hidden"); }
        if dnd.is_target(spot) { c.push_str(" active"); }
        c
    };

    view! {
        <li
            class=zone_class
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        />
    }
}
