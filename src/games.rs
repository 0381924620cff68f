//! Game List Store
//!
//! Owns the two ordered game lists and keeps them in step with storage.
//! The view is a projection of these lists; every mutation goes through
//! here by index and is followed by one save.

use serde_json::Value;

use crate::config::{default_collections, STORAGE_KEY};
use crate::error::{StoreError, StoreResult};
use crate::models::{DropSpot, Game, GameCollections, ItemRef, ListKind};
use crate::storage::GameStorage;

/// Why the default record was used
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedReason {
    /// Nothing stored under the key
    Missing,
    /// Stored value did not parse as a record
    Malformed(String),
}

/// Result of [`GameList::load`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Restored,
    Seeded(SeedReason),
}

/// Parse a stored record.
///
/// Both `daily` and `other` must be arrays of objects. Anything else is
/// reported as an error message. Field values inside an entry are read
/// leniently (see `Game`).
pub fn parse_collections(raw: &str) -> Result<GameCollections, String> {
    let value: Value = serde_json::from_str(raw).map_err(|e| e.to_string())?;
    let Value::Object(record) = &value else {
        return Err("record is not an object".to_string());
    };
    for kind in ListKind::ALL {
        let key = kind.form_value();
        match record.get(key) {
            Some(Value::Array(entries)) => {
                if let Some(pos) = entries.iter().position(|entry| !entry.is_object()) {
                    return Err(format!("{}[{}] is not an object", key, pos));
                }
            }
            Some(_) => return Err(format!("'{}' is not a list", key)),
            None => return Err(format!("'{}' is missing", key)),
        }
    }
    serde_json::from_value(value).map_err(|e| e.to_string())
}

/// The two game lists plus the storage they persist to
#[derive(Debug)]
pub struct GameList<S> {
    storage: S,
    collections: GameCollections,
    /// Last load could not read storage; saving would clobber the real record
    read_failed: bool,
}

impl<S: GameStorage> GameList<S> {
    /// Empty lists; call [`load`](Self::load) to fill them
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            collections: GameCollections::default(),
            read_failed: false,
        }
    }

    pub fn collections(&self) -> &GameCollections {
        &self.collections
    }

    pub fn list(&self, kind: ListKind) -> &[Game] {
        self.collections.list(kind)
    }

    #[cfg(test)]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    #[cfg(test)]
    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Read the stored record, falling back to the defaults.
    ///
    /// Bad data never fails: the defaults replace it and are written back.
    /// A storage error is returned as-is, with the defaults left in memory so
    /// the lists can still be shown. After a failed read nothing is saved
    /// until a later `load` succeeds, so the unread record is never replaced.
    pub fn load(&mut self) -> StoreResult<LoadOutcome> {
        let raw = match self.storage.get_item(STORAGE_KEY) {
            Ok(raw) => raw,
            Err(err) => {
                log::error!("[STORE] {}", err);
                self.read_failed = true;
                self.collections = default_collections();
                return Err(err);
            }
        };
        self.read_failed = false;

        let reason = match raw.as_deref().map(parse_collections) {
            Some(Ok(collections)) => {
                log::info!(
                    "[STORE] Restored {} daily and {} other games",
                    collections.daily.len(),
                    collections.other.len()
                );
                self.collections = collections;
                return Ok(LoadOutcome::Restored);
            }
            Some(Err(detail)) => SeedReason::Malformed(detail),
            None => SeedReason::Missing,
        };

        log::warn!("[STORE] Resetting to defaults: {:?}", reason);
        self.collections = default_collections();
        self.save()?;
        Ok(LoadOutcome::Seeded(reason))
    }

    /// Append `game` to the end of `list` without saving
    pub fn push(&mut self, game: Game, list: ListKind) {
        self.collections.list_mut(list).push(game);
    }

    /// Append `game` to `list` and save
    pub fn add(&mut self, game: Game, list: ListKind) -> StoreResult<()> {
        log::info!("[STORE] Adding '{}' to {}", game.name, list);
        self.commit(|collections| collections.list_mut(list).push(game))
    }

    /// Remove the game `item` points at and save
    pub fn remove(&mut self, item: ItemRef) -> StoreResult<Game> {
        self.check(item)?;
        let game = self.commit(|collections| collections.list_mut(item.list).remove(item.index))?;
        log::info!("[STORE] Removed '{}' from {}", game.name, item.list);
        Ok(game)
    }

    /// Move the game `item` points at to `spot`.
    ///
    /// Returns `false` without saving when the drop leaves it where it is:
    /// a drop on its own list, or on a slot next to itself.
    pub fn drop_on(&mut self, item: ItemRef, spot: DropSpot) -> StoreResult<bool> {
        self.check(item)?;
        let source_len = self.collections.list(item.list).len();

        let (to, index) = match spot {
            DropSpot::List(to) if to == item.list => return Ok(false),
            DropSpot::List(to) => (to, self.collections.list(to).len()),
            DropSpot::Slot(to, position) if to == item.list => {
                // Slot positions count the list before the game is lifted out
                let index = if position > item.index { position - 1 } else { position };
                let index = index.min(source_len - 1);
                if index == item.index {
                    return Ok(false);
                }
                (to, index)
            }
            DropSpot::Slot(to, position) => (to, position.min(self.collections.list(to).len())),
        };

        log::info!("[STORE] Moving {} #{} to {} #{}", item.list, item.index, to, index);
        self.commit(|collections| {
            let game = collections.list_mut(item.list).remove(item.index);
            collections.list_mut(to).insert(index, game);
        })?;
        Ok(true)
    }

    /// Write both lists to storage, replacing what was there
    pub fn save(&mut self) -> StoreResult<()> {
        if self.read_failed {
            return Err(StoreError::Unloaded);
        }
        let raw = serde_json::to_string(&self.collections)?;
        self.storage.set_item(STORAGE_KEY, &raw)
    }

    /// Apply `change` and save it. A failed save restores the previous
    /// lists, so memory never holds changes storage has not accepted.
    fn commit<T>(&mut self, change: impl FnOnce(&mut GameCollections) -> T) -> StoreResult<T> {
        let before = self.collections.clone();
        let value = change(&mut self.collections);
        if let Err(err) = self.save() {
            self.collections = before;
            return Err(err);
        }
        Ok(value)
    }

    fn check(&self, item: ItemRef) -> StoreResult<()> {
        if item.index < self.collections.list(item.list).len() {
            Ok(())
        } else {
            Err(StoreError::NoSuchGame {
                list: item.list,
                index: item.index,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn game(name: &str) -> Game {
        Game::new(name, format!("https://example.com/{}", name.to_lowercase()), "🎮")
    }

    fn record(daily: &[&str], other: &[&str]) -> GameCollections {
        GameCollections {
            daily: daily.iter().map(|n| game(n)).collect(),
            other: other.iter().map(|n| game(n)).collect(),
        }
    }

    fn loaded(collections: &GameCollections) -> GameList<MemoryStorage> {
        let raw = serde_json::to_string(collections).unwrap();
        let mut games = GameList::new(MemoryStorage::with_item(STORAGE_KEY, &raw));
        assert_eq!(games.load().unwrap(), LoadOutcome::Restored);
        games
    }

    fn stored(games: &GameList<MemoryStorage>) -> GameCollections {
        let raw = games.storage().items.get(STORAGE_KEY).expect("nothing stored");
        serde_json::from_str(raw).unwrap()
    }

    fn names(list: &[Game]) -> Vec<&str> {
        list.iter().map(|g| g.name.as_str()).collect()
    }

    fn assert_seeded_from(raw: &str) {
        let mut games = GameList::new(MemoryStorage::with_item(STORAGE_KEY, raw));
        let outcome = games.load().unwrap();
        assert!(matches!(outcome, LoadOutcome::Seeded(SeedReason::Malformed(_))), "{}: {:?}", raw, outcome);
        assert_eq!(games.collections(), &default_collections());
        assert_eq!(stored(&games), default_collections());
    }

    #[test]
    fn test_load_missing_seeds_defaults() {
        let mut games = GameList::new(MemoryStorage::default());
        assert_eq!(games.load().unwrap(), LoadOutcome::Seeded(SeedReason::Missing));
        assert_eq!(games.collections(), &default_collections());
        assert_eq!(stored(&games), default_collections());
    }

    #[test]
    fn test_load_corrupt_values_seed_defaults() {
        assert_seeded_from("not json");
        assert_seeded_from("null");
        assert_seeded_from("[[], []]");
        assert_seeded_from(r#"{"daily": []}"#);
        assert_seeded_from(r#"{"other": []}"#);
        assert_seeded_from(r#"{"daily": {}, "other": []}"#);
        assert_seeded_from(r#"{"daily": [], "other": "none"}"#);
        assert_seeded_from(r#"{"daily": [1, 2], "other": []}"#);
    }

    #[test]
    fn test_load_valid_record_does_not_write() {
        let games = loaded(&record(&["Termo"], &["Globle"]));
        assert_eq!(games.storage().writes, 0);
        assert_eq!(names(games.list(ListKind::Daily)), ["Termo"]);
        assert_eq!(names(games.list(ListKind::Other)), ["Globle"]);
    }

    #[test]
    fn test_load_accepts_partial_entries_and_extra_fields() {
        let raw = r#"{"daily": [{"url": "https://term.ooo/"}], "other": [], "version": 2}"#;
        let mut games = GameList::new(MemoryStorage::with_item(STORAGE_KEY, raw));
        assert_eq!(games.load().unwrap(), LoadOutcome::Restored);
        assert_eq!(games.list(ListKind::Daily), [Game::new("", "https://term.ooo/", "")]);
    }

    #[test]
    fn test_load_reads_odd_field_types_as_strings() {
        let raw = r#"{"daily": [{"name": null, "url": "https://term.ooo/", "emoji": 7}], "other": []}"#;
        let mut games = GameList::new(MemoryStorage::with_item(STORAGE_KEY, raw));
        assert_eq!(games.load().unwrap(), LoadOutcome::Restored);
        assert_eq!(games.list(ListKind::Daily), [Game::new("", "https://term.ooo/", "7")]);
    }

    #[test]
    fn test_round_trip_keeps_entries_verbatim() {
        let original = GameCollections {
            daily: vec![
                Game::new("Flagle Game", "https://flagle-game.com/", "🎌"),
                Game::new("NYT Connections", "https://www.nytimes.com/games/connections", "🔗"),
            ],
            other: vec![Game::new("two  spaces", "https://example.com", "🏳️‍🌈 ✍️")],
        };
        let mut games = loaded(&original);
        games.save().unwrap();
        assert_eq!(stored(&games), original);
    }

    #[test]
    fn test_push_does_not_save() {
        let mut games = loaded(&record(&[], &[]));
        games.push(game("Termo"), ListKind::Daily);
        assert_eq!(games.storage().writes, 0);
        assert_eq!(names(games.list(ListKind::Daily)), ["Termo"]);
    }

    #[test]
    fn test_add_appends_to_chosen_list_only() {
        let mut games = loaded(&record(&["Termo", "Globle"], &["Worldle"]));
        games.add(game("Gamedle"), ListKind::Daily).unwrap();

        let saved = stored(&games);
        assert_eq!(names(&saved.daily), ["Termo", "Globle", "Gamedle"]);
        assert_eq!(names(&saved.other), ["Worldle"]);
        assert_eq!(&saved, games.collections());
    }

    #[test]
    fn test_add_accepts_duplicates_and_empty_fields() {
        let mut games = loaded(&record(&["Termo"], &[]));
        games.add(game("Termo"), ListKind::Daily).unwrap();
        games.add(Game::new("", "not a url", ""), ListKind::Other).unwrap();

        let saved = stored(&games);
        assert_eq!(names(&saved.daily), ["Termo", "Termo"]);
        assert_eq!(saved.other, [Game::new("", "not a url", "")]);
    }

    #[test]
    fn test_remove_default_first_entry() {
        let mut games = GameList::new(MemoryStorage::default());
        games.load().unwrap();

        let removed = games.remove(ItemRef::new(ListKind::Daily, 0)).unwrap();
        assert_eq!(removed.name, "NYT Wordle");

        let saved = stored(&games);
        assert_eq!(saved.daily[0].name, "Termo");
        assert_eq!(saved.daily.len(), default_collections().daily.len() - 1);
    }

    #[test]
    fn test_remove_keeps_relative_order() {
        let mut games = loaded(&record(&["A", "B", "C", "D"], &["E"]));
        games.remove(ItemRef::new(ListKind::Daily, 2)).unwrap();

        let saved = stored(&games);
        assert_eq!(names(&saved.daily), ["A", "B", "D"]);
        assert_eq!(names(&saved.other), ["E"]);
    }

    #[test]
    fn test_remove_stale_index_changes_nothing() {
        let mut games = loaded(&record(&["A"], &[]));
        let err = games.remove(ItemRef::new(ListKind::Other, 0)).unwrap_err();
        assert_eq!(err, StoreError::NoSuchGame { list: ListKind::Other, index: 0 });
        assert_eq!(games.storage().writes, 0);
        assert_eq!(names(games.list(ListKind::Daily)), ["A"]);
    }

    #[test]
    fn test_cross_list_drop_moves_to_end_with_one_save() {
        let mut games = loaded(&record(&["A", "B", "C"], &["X", "Y"]));
        let moved = games
            .drop_on(ItemRef::new(ListKind::Daily, 1), DropSpot::List(ListKind::Other))
            .unwrap();
        assert!(moved);
        assert_eq!(games.storage().writes, 1);

        let saved = stored(&games);
        assert_eq!(names(&saved.daily), ["A", "C"]);
        assert_eq!(names(&saved.other), ["X", "Y", "B"]);
    }

    #[test]
    fn test_drop_on_own_list_is_noop() {
        let mut games = loaded(&record(&["A", "B"], &["X"]));
        let moved = games
            .drop_on(ItemRef::new(ListKind::Other, 0), DropSpot::List(ListKind::Other))
            .unwrap();
        assert!(!moved);
        assert_eq!(games.storage().writes, 0);
        assert_eq!(games.collections(), &record(&["A", "B"], &["X"]));
    }

    #[test]
    fn test_slot_drop_reorders_within_list() {
        let mut games = loaded(&record(&["A", "B", "C", "D"], &[]));
        // A dropped on the zone before D
        assert!(games.drop_on(ItemRef::new(ListKind::Daily, 0), DropSpot::Slot(ListKind::Daily, 3)).unwrap());
        assert_eq!(names(&stored(&games).daily), ["B", "C", "A", "D"]);

        // D dropped on the zone before B
        assert!(games.drop_on(ItemRef::new(ListKind::Daily, 3), DropSpot::Slot(ListKind::Daily, 0)).unwrap());
        assert_eq!(names(&stored(&games).daily), ["D", "B", "C", "A"]);
    }

    #[test]
    fn test_slot_drop_next_to_itself_is_noop() {
        let mut games = loaded(&record(&["A", "B", "C"], &[]));
        let item = ItemRef::new(ListKind::Daily, 1);
        assert!(!games.drop_on(item, DropSpot::Slot(ListKind::Daily, 1)).unwrap());
        assert!(!games.drop_on(item, DropSpot::Slot(ListKind::Daily, 2)).unwrap());
        assert_eq!(games.storage().writes, 0);

        // Past the end of its own list clamps to last
        let last = ItemRef::new(ListKind::Daily, 2);
        assert!(!games.drop_on(last, DropSpot::Slot(ListKind::Daily, 9)).unwrap());
    }

    #[test]
    fn test_slot_drop_inserts_into_other_list() {
        let mut games = loaded(&record(&["A", "B"], &["X", "Y"]));
        assert!(games.drop_on(ItemRef::new(ListKind::Daily, 0), DropSpot::Slot(ListKind::Other, 1)).unwrap());
        let saved = stored(&games);
        assert_eq!(names(&saved.daily), ["B"]);
        assert_eq!(names(&saved.other), ["X", "A", "Y"]);

        assert!(games.drop_on(ItemRef::new(ListKind::Other, 0), DropSpot::Slot(ListKind::Daily, 7)).unwrap());
        assert_eq!(names(&stored(&games).daily), ["B", "X"]);
    }

    #[test]
    fn test_drop_stale_item_errors() {
        let mut games = loaded(&record(&["A"], &[]));
        let err = games
            .drop_on(ItemRef::new(ListKind::Daily, 4), DropSpot::List(ListKind::Other))
            .unwrap_err();
        assert!(matches!(err, StoreError::NoSuchGame { .. }));
        assert_eq!(games.storage().writes, 0);
    }

    #[test]
    fn test_failed_write_rolls_back_the_change() {
        let mut storage = MemoryStorage::default();
        storage.fail_writes = true;
        let mut games = GameList::new(storage);

        let err = games.load().unwrap_err();
        assert!(matches!(err, StoreError::Write { .. }));
        assert_eq!(games.collections(), &default_collections());

        // Retrying the same add must not stack up copies
        for _ in 0..2 {
            let err = games.add(game("Termo"), ListKind::Other).unwrap_err();
            assert!(err.to_string().contains("QuotaExceededError"));
            assert!(games.list(ListKind::Other).is_empty());
        }

        assert!(games.remove(ItemRef::new(ListKind::Daily, 0)).is_err());
        assert!(games.drop_on(ItemRef::new(ListKind::Daily, 0), DropSpot::List(ListKind::Other)).is_err());
        assert_eq!(games.collections(), &default_collections());

        games.storage_mut().fail_writes = false;
        games.add(game("Termo"), ListKind::Other).unwrap();
        assert_eq!(names(&stored(&games).other), ["Termo"]);
    }

    #[test]
    fn test_read_failure_shows_defaults_without_overwriting() {
        let mut storage = MemoryStorage::with_item(STORAGE_KEY, "keep me");
        storage.fail_reads = true;
        let mut games = GameList::new(storage);

        assert!(matches!(games.load().unwrap_err(), StoreError::Read { .. }));
        assert_eq!(games.collections(), &default_collections());

        // Later edits are refused rather than replacing the unread record
        assert_eq!(games.add(game("New"), ListKind::Other).unwrap_err(), StoreError::Unloaded);
        assert_eq!(games.remove(ItemRef::new(ListKind::Daily, 0)).unwrap_err(), StoreError::Unloaded);
        assert_eq!(games.collections(), &default_collections());
        assert_eq!(games.storage().items.get(STORAGE_KEY).map(String::as_str), Some("keep me"));
        assert_eq!(games.storage().writes, 0);
    }

    #[test]
    fn test_successful_reload_after_read_failure_allows_saving() {
        let raw = serde_json::to_string(&record(&["A"], &[])).unwrap();
        let mut storage = MemoryStorage::with_item(STORAGE_KEY, &raw);
        storage.fail_reads = true;
        let mut games = GameList::new(storage);
        assert!(games.load().is_err());

        games.storage_mut().fail_reads = false;
        assert_eq!(games.load().unwrap(), LoadOutcome::Restored);
        games.add(game("B"), ListKind::Daily).unwrap();
        assert_eq!(names(&stored(&games).daily), ["A", "B"]);
    }
}
