//
// vim: set expandtab softtabstop=4 tabstop=4 shiftwidth=4:
//

use serde::{Deserialize, Serialize};

use super::card::{Card, Suit};
use super::error::{Error, Result};
use super::table::Seat;

/// How a hand is ordered for display.
///
/// Suit orderings put the trump suit last; rank orderings go by rank first, then suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortingMode {
    Unsorted,
    SuitAscending,
    SuitDescending,
    RankAscending,
    RankDescending,
}

impl Default for SortingMode {
    fn default() -> Self {
        SortingMode::Unsorted
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    name: String,
    seat: Seat,
    /// insertion order, unless sorted
    hand: Vec<Card>,
}

impl Player {
    pub fn new<T: Into<String>>(name: T, seat: Seat) -> Player {
        Player {
            name: name.into(),
            seat,
            hand: vec![],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn seat(&self) -> Seat {
        self.seat
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    pub fn has_card(&self, card: &Card) -> bool {
        self.hand.contains(card)
    }

    pub fn add_card(&mut self, card: Card) -> Result<()> {
        if self.has_card(&card) {
            return Err(Error::DuplicateCard(card));
        }
        self.hand.push(card);
        Ok(())
    }

    pub fn remove_card(&mut self, card: &Card) -> Result<Card> {
        let idx = self.hand
            .iter()
            .position(|c| c == card)
            .ok_or(Error::CardNotFound(*card))?;
        Ok(self.hand.remove(idx))
    }

    pub fn sort_hand(&mut self, mode: SortingMode, trump: Suit) {
        // trump is the highest suit
        let suit_key = |s: Suit| (s == trump, s);
        match mode {
            SortingMode::Unsorted => (),
            SortingMode::SuitAscending => self.hand.sort_by_key(|c| (suit_key(c.suit), c.rank)),
            SortingMode::SuitDescending => {
                self.hand.sort_by_key(|c| std::cmp::Reverse((suit_key(c.suit), c.rank)))
            }
            SortingMode::RankAscending => self.hand.sort_by_key(|c| (c.rank, suit_key(c.suit))),
            SortingMode::RankDescending => {
                self.hand.sort_by_key(|c| std::cmp::Reverse((c.rank, suit_key(c.suit))))
            }
        }
    }

    /// The player's lowest trump, if any
    pub fn lowest_trump(&self, trump: Suit) -> Option<Card> {
        self.hand
            .iter()
            .filter(|c| c.suit == trump)
            .min_by_key(|c| c.rank)
            .cloned()
    }
}
