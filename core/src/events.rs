//
// vim: set expandtab softtabstop=4 tabstop=4 shiftwidth=4:
//

use serde::{Deserialize, Serialize};

use super::card::Card;
use super::table::Seat;

/// Everything that can be asked of the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    DealInitialHands { deal_limit: usize },
    DetermineTrump,
    Attack { seat: Seat, card: Card },
    Defend { seat: Seat, card: Card },
    Pass { seat: Seat, card: Card },
    ResolveBeaten,
    ResolveTaken { seat: Seat },
    RefillHands { deal_limit: usize },
}

/// What happened, in order, for whoever draws the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notification {
    CardsDealt { seat: Seat, count: usize },
    TrumpRevealed { card: Card, first_attacker: Seat },
    CardThrown { seat: Seat, card: Card },
    CardBeaten { attack: Card, defense: Card },
    CardPassed { seat: Seat, card: Card },
    PlayerTook { seat: Seat, cards: Vec<Card> },
    Discarded { cards: Vec<Card> },
    TurnDone { next_attacker: Seat },
    PlayerOut { seat: Seat, place: usize },
    GameOver { winners: Vec<Seat> },
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Notification::*;
        match self {
            CardsDealt { seat, count } => write!(f, "{} draws {} card(s)", seat, count),
            TrumpRevealed { card, first_attacker } => {
                write!(f, "trump is {}, {} attacks first", card, first_attacker)
            }
            CardThrown { seat, card } => write!(f, "{} throws {}", seat, card),
            CardBeaten { attack, defense } => write!(f, "{} beaten with {}", attack, defense),
            CardPassed { seat, card } => write!(f, "{} passes with {}", seat, card),
            PlayerTook { seat, cards } => write!(f, "{} takes {:?}", seat, cards),
            Discarded { cards } => write!(f, "discarded {:?}", cards),
            TurnDone { next_attacker } => write!(f, "turn done, {} attacks", next_attacker),
            PlayerOut { seat, place } => write!(f, "{} is out (place {})", seat, place),
            GameOver { winners } => write!(f, "game over, winners: {:?}", winners),
        }
    }
}
