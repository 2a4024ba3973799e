//
// vim: set expandtab softtabstop=4 tabstop=4 shiftwidth=4:
//

use serde::{Deserialize, Serialize};

use super::card::{Card, Suit};
use super::game::{GameState, TrickPhase};
use super::table::{Seat, TablePair};

/// This is the view from a given player's point of view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerView {
    pub seat: Seat,
    pub own_hand: Vec<Card>,
    pub table: Vec<TablePair>,
    pub trump_suit: Option<Suit>,
    /// bottom card of the deck, shown face up while it is still there
    pub trump_card: Option<Card>,

    pub deck_size: usize,
    pub discard_size: usize,
    /// hand sizes, indexed by seat
    pub hand_sizes: Vec<usize>,
    pub names: Vec<String>,

    pub attacker: Seat,
    pub defender: Option<Seat>,
    pub phase: TrickPhase,
    pub places: Vec<Option<usize>>,
}

impl PlayerView {
    pub fn is_my_turn_to_defend(&self) -> bool {
        self.defender == Some(self.seat) && self.phase == TrickPhase::Defending
    }

    pub fn is_my_lead(&self) -> bool {
        self.attacker == self.seat && self.phase == TrickPhase::Idle
    }
}

impl GameState {
    pub fn view(&self, seat: Seat) -> PlayerView {
        let trump_card = if self.deck().is_empty() {
            None
        } else {
            self.trump_card()
        };

        PlayerView {
            seat,
            own_hand: self.player(seat).hand().to_vec(),
            table: self.table().pairs().to_vec(),
            trump_suit: self.trump_suit(),
            trump_card,

            deck_size: self.cards_remaining_in_deck(),
            discard_size: self.discard_pile().len(),
            hand_sizes: self.players().iter().map(|p| p.hand_size()).collect(),
            names: self.players().iter().map(|p| p.name().to_string()).collect(),

            attacker: self.attacker(),
            defender: self.defender(),
            phase: self.phase(),
            places: self.places().to_vec(),
        }
    }
}
