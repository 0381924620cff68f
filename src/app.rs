//! Daily Games Frontend App
//!
//! Root component: add form on top, both game lists below.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ErrorBanner, GameBoard, NewGameForm};
use crate::context::AppContext;
use crate::storage::LocalStorage;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());
    let ctx = AppContext::new(store, LocalStorage);

    // Provide context to all children
    provide_context(ctx);

    // Load stored games on mount
    Effect::new(move |_| {
        log::info!("[APP] Loading games");
        ctx.load();
    });

    view! {
        <main class="app-layout">
            <h1>"Daily Games"</h1>
            <ErrorBanner />
            <NewGameForm />
            <GameBoard />
        </main>
    }
}
