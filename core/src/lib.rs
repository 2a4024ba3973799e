//
// vim: set expandtab softtabstop=4 tabstop=4 shiftwidth=4:
//

//! Game state for "Fool" (Durak): deck, hands, trump and the cards on the table.
//!
//! Drawing the game is somebody else's job: they send [`Command`]s (or call the matching
//! [`GameState`] methods) and redraw on the [`Notification`]s that come back.

pub mod error;
pub mod card;
pub mod deck;
pub mod player;
pub mod table;
pub mod rules;
pub mod events;
pub mod game;
pub mod view;
pub mod repr;

#[cfg(test)]
mod tests;

pub use card::{Card, Rank, Suit};
pub use deck::{CardSet, Deck};
pub use error::{Error, Result};
pub use events::{Command, Notification};
pub use game::{GameState, TrickPhase};
pub use player::{Player, SortingMode};
pub use rules::{RuleSet, Termination, DEAL_LIMIT};
pub use table::{Seat, Table, TablePair};
pub use view::PlayerView;
