//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! Holds the rendered projection of the game lists plus view-only state;
//! the lists themselves are owned by [`GameList`](crate::games::GameList).

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::START_COLLAPSED;
use crate::models::{Game, GameCollections, ListKind};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// Daily list as rendered
    pub daily: Vec<Game>,
    /// Other list as rendered
    pub other: Vec<Game>,
    pub daily_collapsed: bool,
    pub other_collapsed: bool,
    /// Last storage error, shown until dismissed or the next successful save
    pub error: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            daily: Vec::new(),
            other: Vec::new(),
            daily_collapsed: START_COLLAPSED,
            other_collapsed: START_COLLAPSED,
            error: None,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Label of the expand/collapse button under a list
pub fn toggle_label(collapsed: bool) -> &'static str {
    if collapsed { "Show More" } else { "Show Less" }
}

// ========================
// Store Helper Functions
// ========================

/// Replace both rendered lists with `collections`
pub fn store_sync(store: &AppStore, collections: &GameCollections) {
    *store.daily().write() = collections.daily.clone();
    *store.other().write() = collections.other.clone();
}

/// Rendered games of one list (tracked)
pub fn store_games(store: &AppStore, kind: ListKind) -> Vec<Game> {
    match kind {
        ListKind::Daily => store.daily().get(),
        ListKind::Other => store.other().get(),
    }
}

/// Is this list collapsed? (tracked)
pub fn store_is_collapsed(store: &AppStore, kind: ListKind) -> bool {
    match kind {
        ListKind::Daily => store.daily_collapsed().get(),
        ListKind::Other => store.other_collapsed().get(),
    }
}

/// Flip one list between collapsed and expanded
pub fn store_toggle_list(store: &AppStore, kind: ListKind) {
    match kind {
        ListKind::Daily => store.daily_collapsed().update(|c| *c = !*c),
        ListKind::Other => store.other_collapsed().update(|c| *c = !*c),
    }
}

pub fn store_error(store: &AppStore) -> Option<String> {
    store.error().get()
}

pub fn store_set_error(store: &AppStore, error: Option<String>) {
    // Avoid waking the banner when nothing changed
    if store.error().get_untracked() != error {
        *store.error().write() = error;
    }
}
