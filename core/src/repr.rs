//
// vim: set expandtab softtabstop=4 tabstop=4 shiftwidth=4:


// string representation for hands and decks
// Each card is two characters:
//   - first suit (S, C, H, D, or the suit symbol)
//   - then rank (2-9,T,J,Q,K,A)
//
// Cards are separated by whitespace. Decks are listed from the top down, so the last card is the
// one that shows the trump.

use std::convert::TryFrom;

use super::card::Card;
use super::deck::Deck;
use super::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HandRepr(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeckRepr(pub String);


/**
 * Hand
 */

impl HandRepr {
    pub fn new<T: Into<String>>(s: T) -> Self {
        Self(s.into())
    }

    pub fn parse(&self) -> Result<Vec<Card>> {
        parse_cards(self.0.split_whitespace())
    }

    pub fn fmt_cards(cards: &[Card], f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut sep = "";
        for card in cards.iter() {
            f.write_str(sep)?;
            sep = " ";
            write!(f, "{}", card)?;
        }

        Ok(())
    }
}

fn parse_cards<'a, I>(iter: I) -> Result<Vec<Card>> where
    I: Iterator<Item=&'a str>,
{
    let mut cards: Vec<Card> = vec![];
    for tok in iter {
        let card = Card::try_from(tok)?;
        if cards.contains(&card) {
            return Err(Error::DuplicateCard(card));
        }
        cards.push(card);
    }
    Ok(cards)
}


/**
 * Deck
 */

impl DeckRepr {
    pub fn new<T: Into<String>>(s: T) -> Self {
        Self(s.into())
    }

    pub fn parse(&self) -> Result<Deck> {
        let cards = parse_cards(self.0.split_whitespace())?;
        Ok(Deck::from_top(cards))
    }
}

/**
 * Implementation of std::fmt::Display traits
 */

impl std::fmt::Display for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cards: Vec<Card> = self.iter_from_top().cloned().collect();
        HandRepr::fmt_cards(&cards, f)
    }
}

impl std::fmt::Display for HandRepr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.parse() {
            Ok(cards) => HandRepr::fmt_cards(&cards, f),
            Err(_) => f.write_str(&self.0),
        }
    }
}


#[test]
fn t0() {
    let hand = HandRepr::new("S6 ♥T DA").parse().unwrap();
    assert_eq!(hand.len(), 3);
    assert_eq!(format!("{}", HandRepr::new("S6 ♥T DA")), "♠6 ♥T ♦A");

    let deck = DeckRepr::new("C7 S9 HA").parse().unwrap();
    assert_eq!(deck.ncards(), 3);
    assert_eq!(deck.peek_trump_card().unwrap().to_string(), "♥A");
    assert_eq!(format!("{}", deck), "♣7 ♠9 ♥A");
}

#[test]
fn bad_reprs() {
    assert_eq!(HandRepr::new("S6 X7").parse(), Err(Error::InvalidSuitChar('X')));
    assert_eq!(HandRepr::new("S1").parse(), Err(Error::InvalidRankChar('1')));
    assert_eq!(HandRepr::new("S66").parse(), Err(Error::InvalidCardRepr("S66".to_string())));
    assert!(HandRepr::new("S6 S6").parse().is_err());
    assert_eq!(HandRepr::new("").parse(), Ok(vec![]));
}
