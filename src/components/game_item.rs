//! Game Item Component
//!
//! A single game row: link plus remove button.

use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::components::GameDnd;
use crate::context::AppContext;
use crate::models::{Game, ItemRef};

/// A game in one of the lists. The row is a drag source.
#[component]
pub fn GameItem(
    game: Game,
    item: ItemRef,
    dnd: GameDnd,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let on_mousedown = make_on_mousedown(dnd, item);
    // Releasing a dragged link must not open it
    let on_link_click = make_on_click_guard(dnd);

    let item_class = move || {
        if dnd.is_dragging(item) { "game-item dragging" } else { "game-item" }
    };

    view! {
        <li class=item_class data-drag-source="true" on:mousedown=on_mousedown>
            <a
                href=game.url.clone()
                class="game-link"
                target="_blank"
                rel="noopener noreferrer"
                draggable="false"
                on:click=on_link_click
            >
                {game.label()}
            </a>
            <button class="remove-button" on:click=move |_| ctx.remove(item)>"×"</button>
        </li>
    }
}
