//! Application Context
//!
//! Shared handle provided via Leptos Context API. Runs every mutation on the
//! game lists, then re-projects them into the reactive store.

use leptos::prelude::*;

use crate::error::StoreResult;
use crate::games::{GameList, LoadOutcome};
use crate::models::{DropSpot, Game, ItemRef, ListKind};
use crate::storage::{GameStorage, LocalStorage};
use crate::store::{store_set_error, store_sync, store_toggle_list, AppStore};

/// App-wide handles provided via context
pub struct AppContext<S: 'static = LocalStorage> {
    /// Structured game lists, persisted through `S`
    games: StoredValue<GameList<S>>,
    /// Rendered projection
    pub store: AppStore,
}

impl<S: 'static> Clone for AppContext<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: 'static> Copy for AppContext<S> {}

impl<S> AppContext<S>
where
    S: GameStorage + Send + Sync + 'static,
{
    pub fn new(store: AppStore, storage: S) -> Self {
        Self {
            games: StoredValue::new(GameList::new(storage)),
            store,
        }
    }

    /// Load stored lists (or seed defaults) and render them
    pub fn load(&self) {
        if let Some(LoadOutcome::Seeded(reason)) = self.apply("load", |games| games.load()) {
            log::info!("[APP] Started from default games ({:?})", reason);
        }
    }

    /// Add a game to the end of `list`. Returns true once it is saved;
    /// on false the lists are unchanged.
    pub fn add(&self, game: Game, list: ListKind) -> bool {
        self.apply("add", |games| games.add(game, list)).is_some()
    }

    pub fn remove(&self, item: ItemRef) {
        self.apply("remove", |games| games.remove(item));
    }

    /// Commit a finished drag
    pub fn drop_on(&self, item: ItemRef, spot: DropSpot) {
        if let Some(false) = self.apply("move", |games| games.drop_on(item, spot)) {
            log::debug!("[APP] Drop left {:?} in place", item);
        }
    }

    pub fn toggle_list(&self, list: ListKind) {
        store_toggle_list(&self.store, list);
    }

    pub fn dismiss_error(&self) {
        store_set_error(&self.store, None);
    }

    /// Run `op`, re-render from the lists, and record any error
    fn apply<T>(
        &self,
        action: &str,
        op: impl FnOnce(&mut GameList<S>) -> StoreResult<T>,
    ) -> Option<T> {
        let result = self.games.try_update_value(op)?;
        self.games
            .with_value(|games| store_sync(&self.store, games.collections()));
        match result {
            Ok(value) => {
                store_set_error(&self.store, None);
                Some(value)
            }
            Err(err) => {
                log::error!("[APP] {} failed: {}", action, err);
                store_set_error(&self.store, Some(err.to_string()));
                None
            }
        }
    }
}
