//
// vim: set expandtab softtabstop=4 tabstop=4 shiftwidth=4:
//


use crate::{
    card::Card,
    repr::{DeckRepr, HandRepr},
    deck::Deck,
};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn mk_card(s: &str) -> Card {
    use std::convert::TryFrom;
    Card::try_from(s).unwrap()
}

pub fn mk_hand(s: &str) -> Vec<Card> {
    HandRepr::new(s).parse().unwrap()
}

pub fn mk_deck(s: &str) -> Deck {
    DeckRepr::new(s).parse().unwrap()
}
