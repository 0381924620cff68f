//! New Game Form Component
//!
//! Form for adding a game to either list.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::{Game, ListKind};

#[component]
pub fn NewGameForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (name, set_name) = signal(String::new());
    let (url, set_url) = signal(String::new());
    let (emoji, set_emoji) = signal(String::new());
    let (list, set_list) = signal(ListKind::Daily.form_value().to_string());

    let reset = move || {
        set_name.set(String::new());
        set_url.set(String::new());
        set_emoji.set(String::new());
        set_list.set(ListKind::Daily.form_value().to_string());
    };

    let add_game = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let game = Game::new(name.get(), url.get(), emoji.get());
        let kind = ListKind::from_form_value(&list.get());
        if ctx.add(game, kind) {
            reset();
        }
    };

    view! {
        <form id="addGameForm" class="add-game-form" on:submit=add_game>
            <input
                id="gameName"
                type="text"
                placeholder="Game name"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <input
                id="gameUrl"
                type="url"
                placeholder="https://..."
                required
                prop:value=move || url.get()
                on:input=move |ev| set_url.set(event_target_value(&ev))
            />
            <input
                id="gameEmoji"
                type="text"
                placeholder="Emoji"
                prop:value=move || emoji.get()
                on:input=move |ev| set_emoji.set(event_target_value(&ev))
            />
            <select
                id="gameType"
                prop:value=move || list.get()
                on:change=move |ev| set_list.set(event_target_value(&ev))
            >
                {ListKind::ALL.into_iter().map(|kind| view! {
                    <option value=kind.form_value()>{kind.heading()}</option>
                }).collect_view()}
            </select>
            <button type="submit">"Add Game"</button>
        </form>
    }
}
