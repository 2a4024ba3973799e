//
// vim: set expandtab softtabstop=4 tabstop=4 shiftwidth=4:
//

use serde::{Deserialize, Serialize};
use super::card::{Card, Rank};


/// Player identifier based on their position on the table
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Seat(pub u8);

impl Seat {
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat to the left, wrapping around a table of `nplayers`
    pub fn next(self, nplayers: usize) -> Seat {
        Seat(((self.index() + 1) % nplayers) as u8)
    }

    /// The seat across the table, in team play
    pub fn partner(self, nplayers: usize) -> Seat {
        self.next(nplayers).next(nplayers)
    }

    /// Team number in team play: partners share it
    pub fn team(self) -> usize {
        self.index() % 2
    }
}

/// An attack card and, once answered, the card that beat it
#[derive(Clone, Copy, Hash, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct TablePair {
    pub attack: Card,
    pub defense: Option<Card>,
}

impl TablePair {
    pub fn is_beaten(&self) -> bool {
        self.defense.is_some()
    }
}

/// Cards in play for the current trick.
///
/// Defenses are always given in order, so the beaten pairs are a prefix of `pairs`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Table {
    pairs: Vec<TablePair>,
}

impl Table {
    pub fn new() -> Table {
        Table { pairs: vec![] }
    }

    pub fn pairs(&self) -> &[TablePair] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn nattacks(&self) -> usize {
        self.pairs.len()
    }

    pub fn ndefenses(&self) -> usize {
        self.pairs.iter().filter(|p| p.is_beaten()).count()
    }

    /// Number of attacks still waiting for a defense
    pub fn nopen(&self) -> usize {
        self.nattacks() - self.ndefenses()
    }

    pub fn all_beaten(&self) -> bool {
        !self.is_empty() && self.nopen() == 0
    }

    /// The oldest attack that has not been answered yet
    pub fn first_open(&self) -> Option<&Card> {
        self.pairs.iter().find(|p| !p.is_beaten()).map(|p| &p.attack)
    }

    pub fn attack_cards(&self) -> Vec<Card> {
        self.pairs.iter().map(|p| p.attack).collect()
    }

    pub fn defense_cards(&self) -> Vec<Card> {
        self.pairs.iter().filter_map(|p| p.defense).collect()
    }

    /// Is there a card of this rank on the table (attack or defense)?
    pub fn has_rank(&self, rank: Rank) -> bool {
        self.iter_cards().any(|c| c.rank == rank)
    }

    /// All attacks share a single rank, and nothing has been beaten yet
    pub fn single_rank_unbeaten(&self) -> Option<Rank> {
        let first = self.pairs.first()?.attack.rank;
        if self.pairs.iter().all(|p| !p.is_beaten() && p.attack.rank == first) {
            Some(first)
        } else {
            None
        }
    }

    pub fn iter_cards(&self) -> impl Iterator<Item = &Card> {
        self.pairs
            .iter()
            .flat_map(|p| std::iter::once(&p.attack).chain(p.defense.iter()))
    }

    pub fn add_attack(&mut self, card: Card) {
        self.pairs.push(TablePair { attack: card, defense: None })
    }

    /// Answer the oldest open attack, returning the attack card
    pub fn add_defense(&mut self, card: Card) -> Option<Card> {
        let pair = self.pairs.iter_mut().find(|p| !p.is_beaten())?;
        pair.defense = Some(card);
        Some(pair.attack)
    }

    /// Clear the table, returning its cards in the order they were played (pair by pair)
    pub fn take_all(&mut self) -> Vec<Card> {
        let cards = self.iter_cards().cloned().collect();
        self.pairs.clear();
        cards
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let Seat(pid) = *self;
        write!(f, "P{}", pid)
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut sep = "";
        for pair in self.pairs.iter() {
            f.write_str(sep)?;
            sep = " ";
            match pair.defense {
                Some(d) => write!(f, "{}/{}", pair.attack, d)?,
                None => write!(f, "{}", pair.attack)?,
            }
        }
        Ok(())
    }
}
