//
// vim: set expandtab softtabstop=4 tabstop=4 shiftwidth=4:
//

use rand::prelude::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use super::card::{Card, Rank, Suit};
use super::error::{Error, Result};

/// The cards a game is played with: every suit, ranks from `lowest_rank` up to the ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSet {
    pub lowest_rank: Rank,
}

impl CardSet {
    /// 9 to A
    pub const CARDS_24: CardSet = CardSet { lowest_rank: Rank::NINE };
    /// 6 to A, the usual Fool deck
    pub const CARDS_36: CardSet = CardSet { lowest_rank: Rank::SIX };
    /// 2 to A
    pub const CARDS_52: CardSet = CardSet { lowest_rank: Rank::TWO };

    pub fn ncards(&self) -> usize {
        Suit::ALL.len() * self.lowest_rank.up_to_ace().count()
    }

    pub fn cards(&self) -> impl Iterator<Item = Card> {
        let lowest = self.lowest_rank;
        Suit::ALL
            .to_vec()
            .into_iter()
            .flat_map(move |suit| lowest.up_to_ace().map(move |rank| Card::new(suit, rank)))
    }
}

impl Default for CardSet {
    fn default() -> Self {
        CardSet::CARDS_36
    }
}

/// A Deck is an ordered collection of cards
///
/// The top of the deck is the end of `cards`, so drawing is a `pop()`. The bottom card, the one
/// that decides the trump suit, is `cards[0]` and it is the last one to be drawn.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn empty() -> Deck {
        Deck { cards: vec![] }
    }

    pub fn build(card_set: CardSet) -> Deck {
        let mut cards: Vec<Card> = card_set.cards().collect();
        // first card of the enumeration on top
        cards.reverse();
        Deck { cards }
    }

    /// Deck with the given cards, `top_first[0]` being the first to be drawn
    pub fn from_top(top_first: Vec<Card>) -> Deck {
        let mut cards = top_first;
        cards.reverse();
        Deck { cards }
    }

    pub fn shuffle<R>(&mut self, rng: &mut R)
    where R: rand::Rng {
        self.cards.shuffle(rng);
    }

    /// Shuffle deterministically: the same seed always gives the same order
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = rand_pcg::Pcg64::seed_from_u64(seed);
        self.shuffle(&mut rng);
    }

    pub fn draw(&mut self) -> Result<Card> {
        let card = self.cards.pop().ok_or(Error::EmptyDeck)?;
        log::trace!("drew {} ({} left)", card, self.cards.len());
        Ok(card)
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The bottom card, which stays in the deck until everything else has been drawn
    pub fn peek_trump_card(&self) -> Result<&Card> {
        self.cards.first().ok_or(Error::EmptyDeck)
    }

    pub fn ncards(&self) -> usize {
        self.cards.len()
    }

    /// Cards from the top of the deck to the bottom
    pub fn iter_from_top(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().rev()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::convert::TryFrom;

    #[test]
    fn build_covers_card_set() {
        for (set, n) in [(CardSet::CARDS_24, 24), (CardSet::CARDS_36, 36), (CardSet::CARDS_52, 52)].iter() {
            let deck = Deck::build(*set);
            assert_eq!(deck.ncards(), *n);
            assert_eq!(set.ncards(), *n);

            let uniq: HashSet<Card> = deck.iter_from_top().cloned().collect();
            assert_eq!(uniq.len(), *n);
            for card in uniq.iter() {
                assert!(card.rank >= set.lowest_rank && card.rank <= Rank::ACE);
            }
        }
    }

    #[test]
    fn draw_until_empty() {
        let mut deck = Deck::build(CardSet::CARDS_24);
        let bottom = *deck.peek_trump_card().unwrap();
        let mut last = None;
        for _ in 0..24 {
            assert!(!deck.is_empty());
            last = Some(deck.draw().unwrap());
        }
        assert_eq!(last, Some(bottom));
        assert!(deck.is_empty());
        assert_eq!(deck.draw(), Err(Error::EmptyDeck));
        assert_eq!(deck.draw(), Err(Error::EmptyDeck));
        assert_eq!(deck.peek_trump_card(), Err(Error::EmptyDeck));
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let mut d1 = Deck::build(CardSet::CARDS_36);
        let mut d2 = Deck::build(CardSet::CARDS_36);
        d1.shuffle_seeded(42);
        d2.shuffle_seeded(42);
        let v1: Vec<Card> = d1.iter_from_top().cloned().collect();
        let v2: Vec<Card> = d2.iter_from_top().cloned().collect();
        assert_eq!(v1, v2);

        let mut d3 = Deck::build(CardSet::CARDS_36);
        d3.shuffle_seeded(43);
        let v3: Vec<Card> = d3.iter_from_top().cloned().collect();
        assert_ne!(v1, v3);

        let mut sorted = v1.clone();
        sorted.sort();
        let mut expected: Vec<Card> = CardSet::CARDS_36.cards().collect();
        expected.sort();
        assert_eq!(sorted, expected);
    }

    #[test]
    fn from_top_order() {
        let c = |s: &str| -> Card { Card::try_from(s).unwrap() };
        let mut deck = Deck::from_top(vec![c("S6"), c("C7"), c("HA")]);
        assert_eq!(*deck.peek_trump_card().unwrap(), c("HA"));
        assert_eq!(deck.draw().unwrap(), c("S6"));
        assert_eq!(deck.draw().unwrap(), c("C7"));
        assert_eq!(deck.draw().unwrap(), c("HA"));
    }
}
