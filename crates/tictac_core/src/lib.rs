//! Tile-board tic-tac-toe logic.
//!
//! Everything a front-end needs to run a game without owning any rules:
//!
//! - **Tiles and occupancy**: nine named tiles `T1`..`T9` and the map of
//!   which player holds which tile.
//! - **Rules**: win/draw evaluation over the eight fixed triples.
//! - **Session**: turn order, pause and input locking, terminal detection.
//! - **Opponent**: the random-move computer player.
//! - **Skins**: catalog of cosmetic asset sets.
//!
//! # Example
//!
//! ```
//! use tictac_core::{GameMode, GameSession, Outcome, Player, Tile};
//!
//! let mut session = GameSession::new(GameMode::HumanVsHuman);
//! for tile in [Tile::T1, Tile::T4, Tile::T2, Tile::T5, Tile::T3] {
//!     session.place(tile).unwrap();
//! }
//! assert_eq!(session.outcome(), Some(Outcome::Winner(Player::One)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod invariants;
mod mode;
mod opponent;
mod outcome;
pub mod rules;
mod session;
mod skins;
mod tile;
mod types;

pub use action::{Move, MoveError};
pub use mode::GameMode;
pub use opponent::{RandomOpponent, pick_random_move};
pub use outcome::Outcome;
pub use rules::{check_winner, evaluate, is_draw, winning_triple};
pub use session::{GameSession, Placement, ResumeAction};
pub use skins::{DEFAULT_SKIN, Palette, Skin, SkinCatalog};
pub use tile::{Tile, TileParseError};
pub use types::{Occupancy, Player};
