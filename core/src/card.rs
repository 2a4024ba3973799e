//
// vim: set expandtab softtabstop=4 tabstop=4 shiftwidth=4:
//

use std::convert::TryFrom;
use super::error as e;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    /// ♠
    Spade,
    /// ♣
    Club,
    /// ♥
    Heart,
    /// ♦
    Diamond,
}

/// Card rank. Ace is high (14), Two is the lowest possible rank.
///
/// Built from the constants below or with `TryFrom<u8>`/`TryFrom<char>`, so it is always in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank(u8);

/// Game card
#[derive(PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl TryFrom<u8> for Rank {
    type Error = e::Error;

    fn try_from(val: u8) -> Result<Rank, e::Error> {
        if val < Rank::TWO.0 || val > Rank::ACE.0 {
            Err(e::Error::InvalidRankNumber(val))
        } else {
            Ok(Rank(val))
        }
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> u8 {
        rank.0
    }
}

impl Rank {
    pub const TWO: Rank = Rank(2);
    pub const SIX: Rank = Rank(6);
    pub const NINE: Rank = Rank(9);
    pub const TEN: Rank = Rank(10);
    pub const JACK: Rank = Rank(11);
    pub const QUEEN: Rank = Rank(12);
    pub const KING: Rank = Rank(13);
    pub const ACE: Rank = Rank(14);

    /// '2'-'9', then T J Q K A
    pub fn to_symbol(&self) -> char {
        match self.0 {
            2..=9 => (b'0' + self.0) as char,
            _ => ['T', 'J', 'Q', 'K', 'A'][(self.0 - 10) as usize],
        }
    }

    /// All ranks from `self` up to the ace
    pub fn up_to_ace(self) -> impl Iterator<Item = Rank> {
        (self.0..=Rank::ACE.0).map(Rank)
    }
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spade, Suit::Club, Suit::Heart, Suit::Diamond];

    pub fn to_symbol(self) -> char {
        ['♠', '♣', '♥', '♦'][self as usize]
    }
}

impl Card {
    pub fn new(suit: Suit, rank: Rank) -> Card {
        Card { suit, rank }
    }

    /// Does `self`, played as a defense, beat `attack`?
    ///
    /// A card beats a lower card of the same suit, and any trump beats any non-trump. With
    /// `deuce_beats_ace`, a two also beats the ace of its own suit.
    pub fn beats(&self, attack: &Card, trump: Suit, deuce_beats_ace: bool) -> bool {
        if self.suit == attack.suit {
            if deuce_beats_ace && self.rank == Rank::TWO && attack.rank == Rank::ACE {
                return true;
            }
            self.rank > attack.rank
        } else {
            self.suit == trump
        }
    }
}

impl TryFrom<char> for Rank {
    type Error = e::Error;

    fn try_from(val: char) -> Result<Rank, e::Error> {
        match val {
            'a' | 'A' => Ok(Rank::ACE),
            't' | 'T' => Ok(Rank::TEN),
            'j' | 'J' => Ok(Rank::JACK),
            'q' | 'Q' => Ok(Rank::QUEEN),
            'k' | 'K' => Ok(Rank::KING),
            '2'..='9' => Rank::try_from((val as u8) - b'0'),
            _ => Err(e::Error::InvalidRankChar(val)),
        }
    }
}

impl TryFrom<char> for Suit {
    type Error = e::Error;

    fn try_from(val: char) -> Result<Suit, e::Error> {
        match val {
            's' | 'S' | '♠' => Ok(Suit::Spade),
            'c' | 'C' | '♣' => Ok(Suit::Club),
            'd' | 'D' | '♦' => Ok(Suit::Diamond),
            'h' | 'H' | '♥' => Ok(Suit::Heart),
            _ => Err(e::Error::InvalidSuitChar(val)),
        }
    }
}

impl TryFrom<[char; 2]> for Card {
    type Error = e::Error;

    /// suit first
    fn try_from(val: [char; 2]) -> Result<Card, e::Error> {
        let suit = Suit::try_from(val[0])?;
        let rank = Rank::try_from(val[1])?;
        Ok(Card { suit, rank })
    }
}

impl TryFrom<&str> for Card {
    type Error = e::Error;

    fn try_from(val: &str) -> Result<Card, e::Error> {
        let mut chars = val.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(s), Some(r), None) => Card::try_from([s, r]),
            _ => Err(e::Error::InvalidCardRepr(val.to_string())),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.to_symbol())
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.suit.to_symbol(), self.rank.to_symbol())
    }
}

// same as Display, so that assertion failures read like a hand
impl std::fmt::Debug for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        std::fmt::Display::fmt(self, f)
    }
}

#[test]
fn try_from_tests() {
    // rank
    assert_eq!(Rank::try_from('6').unwrap(), Rank::SIX);
    assert_eq!(Rank::try_from('A').unwrap(), Rank::ACE);
    assert_eq!(Rank::try_from(12u8).unwrap(), Rank::QUEEN);
    assert_eq!(u8::from(Rank::KING), 13);
    assert!(Rank::try_from('1').is_err());
    assert!(Rank::try_from('x').is_err());
    assert!(Rank::try_from(15u8).is_err());
    // suit
    assert_eq!(Suit::try_from('♥').unwrap(), Suit::Heart);
    assert!(Suit::try_from('x').is_err());
    // card
    assert_eq!(Card::try_from(['♥', 'T']).unwrap(), Card { suit: Suit::Heart, rank: Rank::TEN });
    assert_eq!(Card::try_from("SQ").unwrap(), Card::new(Suit::Spade, Rank::QUEEN));
    assert_eq!(Card::try_from("SQ7"), Err(e::Error::InvalidCardRepr("SQ7".to_string())));
}

#[test]
fn beats_tests() {
    let c = |s: &str| Card::try_from(s).unwrap();
    let trump = Suit::Heart;

    // same suit, higher rank
    assert!(c("S7").beats(&c("S6"), trump, false));
    assert!(!c("S6").beats(&c("S7"), trump, false));
    assert!(!c("S6").beats(&c("S6"), trump, false));
    // trump over non-trump, whatever the rank
    assert!(c("H6").beats(&c("SA"), trump, false));
    // non-trump never beats another suit
    assert!(!c("CA").beats(&c("S6"), trump, false));
    // a higher trump is needed to beat a trump
    assert!(!c("S7").beats(&c("H6"), trump, false));
    assert!(c("H7").beats(&c("H6"), trump, false));
    // deuce over ace
    assert!(!c("D2").beats(&c("DA"), trump, false));
    assert!(c("D2").beats(&c("DA"), trump, true));
    assert!(!c("C2").beats(&c("DA"), trump, true));
}
