//! UI Components
//!
//! Leptos components rendering the two game lists.

mod drop_zone;
mod error_banner;
mod game_board;
mod game_item;
mod game_list_view;
mod new_game_form;

pub use drop_zone::DropZone;
pub use error_banner::ErrorBanner;
pub use game_board::{GameBoard, GameDnd};
pub use game_item::GameItem;
pub use game_list_view::GameListView;
pub use new_game_form::NewGameForm;
