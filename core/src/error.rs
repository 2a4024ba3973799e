//
// vim: set expandtab softtabstop=4 tabstop=4 shiftwidth=4:
//

use thiserror::Error;

use super::card::Card;
use super::table::Seat;

pub type Result<T> = std::result::Result<T, Error>;

/// Reasons a command or a conversion was rejected.
///
/// None of these are fatal: a rejected command leaves the game untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("the deck is empty")]
    EmptyDeck,
    #[error("card {0} is already in the hand")]
    DuplicateCard(Card),
    #[error("card {0} is not in the hand")]
    CardNotFound(Card),

    #[error("it is not {0}'s turn")]
    NotPlayersTurn(Seat),
    #[error("{0} does not hold {1}")]
    CardNotInHand(Seat, Card),
    #[error("no room on the table for another attack")]
    AttackPileFull,
    #[error("{defense} does not beat {attack}")]
    IllegalDefense { attack: Card, defense: Card },
    #[error("there is no open attack to answer")]
    NothingToDefend,
    #[error("cannot throw {0}: its rank is not on the table")]
    IllegalThrow(Card),
    #[error("cannot pass with {0}")]
    IllegalPass(Card),
    #[error("not every attack on the table has been beaten")]
    TrickNotBeaten,
    #[error("there are no cards on the table")]
    EmptyTable,
    #[error("the game is over")]
    GameOver,
    #[error("trump has not been determined yet")]
    TrumpNotDetermined,
    #[error("trump has already been determined")]
    TrumpAlreadyDetermined,

    #[error("invalid rules: {0}")]
    InvalidRules(String),

    /// Number -> Rank conversion failed (argument is given number)
    #[error("invalid rank number: {0}")]
    InvalidRankNumber(u8),
    /// Char -> Rank conversion failed (argument is given character)
    #[error("invalid rank character: {0:?}")]
    InvalidRankChar(char),
    /// Char -> Suit conversion failed (argument is given character)
    #[error("invalid suit character: {0:?}")]
    InvalidSuitChar(char),
    #[error("invalid card notation: {0:?}")]
    InvalidCardRepr(String),
}
