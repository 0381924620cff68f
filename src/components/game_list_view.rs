//! Game List View Component
//!
//! One list container with its items, drop zones, and Show More toggle.

use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::components::{DropZone, GameDnd, GameItem};
use crate::context::AppContext;
use crate::models::{DropSpot, ItemRef, ListKind};
use crate::store::{store_games, store_is_collapsed, toggle_label};

#[component]
pub fn GameListView(
    kind: ListKind,
    dnd: GameDnd,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store;

    let games = move || store_games(&store, kind).into_iter().enumerate().collect::<Vec<_>>();
    let collapsed = move || store_is_collapsed(&store, kind);

    // The container itself appends; zones inside it fall back to it on leave
    let list_spot = DropSpot::List(kind);
    let on_mouseenter = make_on_target_mouseenter(dnd, list_spot);
    let on_mouseleave = make_on_target_mouseleave(dnd, None);

    let list_class = move || {
        let mut c = String::from("game-list");
        if collapsed() { c.push_str(" collapsed"); }
        if dnd.is_target(list_spot) { c.push_str(" drag-over"); }
        c
    };

    view! {
        <section class="game-section">
            <h2>{kind.heading()}</h2>
            <ul
                id=kind.container_id()
                class=list_class
                on:mouseenter=on_mouseenter
                on:mouseleave=on_mouseleave
            >
                <For
                    each=games
                    // Index and content together, so a shifted entry re-renders with its new ref
                    key=|(index, game)| (*index, game.clone())
                    children=move |(index, game)| {
                        view! {
                            <DropZone dnd=dnd spot=DropSpot::Slot(kind, index) />
                            <GameItem game=game item=ItemRef::new(kind, index) dnd=dnd />
                        }
                    }
                />
                {move || {
                    let len = store_games(&store, kind).len();
                    view! { <DropZone dnd=dnd spot=DropSpot::Slot(kind, len) /> }
                }}
            </ul>
            <button class="toggle-button" on:click=move |_| ctx.toggle_list(kind)>
                {move || toggle_label(collapsed())}
            </button>
        </section>
    }
}
