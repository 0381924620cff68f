//! Game Board Component
//!
//! Both game lists side by side, sharing one drag-and-drop state.

use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::components::GameListView;
use crate::context::AppContext;
use crate::models::{DropSpot, ItemRef, ListKind};

/// Drag state: items are dragged by reference, dropped on a list or zone
pub type GameDnd = DndSignals<ItemRef, DropSpot>;

#[component]
pub fn GameBoard() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let dnd: GameDnd = create_dnd_signals();

    // One global mouseup handler commits drops for both lists
    bind_global_mouseup(dnd, move |item, spot| {
        log::debug!("[DND] Drop: item={:?}, spot={:?}", item, spot);
        ctx.drop_on(item, spot);
    });

    view! {
        <div class="game-board">
            {ListKind::ALL.into_iter().map(|kind| view! {
                <GameListView kind=kind dnd=dnd />
            }).collect_view()}
        </div>
    }
}
