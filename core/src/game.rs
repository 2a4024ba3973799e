//
// vim: set expandtab softtabstop=4 tabstop=4 shiftwidth=4:
//

use std::collections::HashSet;

use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use super::card::{Card, Suit};
use super::deck::Deck;
use super::error::{Error, Result};
use super::events::{Command, Notification};
use super::player::Player;
use super::rules::{RuleSet, Termination};
use super::table::{Seat, Table};

// Rules:
//  - https://en.wikipedia.org/wiki/Durak
//
// Design: cards are moved around, never copied. Every card lives in exactly one container: the
// deck, a hand, the table or the discard pile. Commands validate everything before touching any
// container, so a rejected command leaves the game as it was.

// Some terminology:
//  - A trick is one round of attacks: it ends when everything on the table is beaten (cards go to
//    the discard pile) or the defender takes the table.
//  - The attacker leads the trick. Once the table has cards, anybody but the defender may throw in
//    cards with a rank already on the table.
//  - A player is out when the deck is empty and their hand is empty. Out players keep their place
//    and are skipped from then on.
//  - In team play turns go around the table by seat, and an out player's turn is played by their
//    partner. `attacker` is then the seat whose turn it is, not necessarily the one playing it.

/// Where the current trick stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrickPhase {
    /// nothing on the table, the attacker has to lead
    Idle,
    /// there are attacks waiting for an answer
    Defending,
    /// everything is answered: more cards may be thrown in, or the trick may be resolved
    Attacking,
}

#[derive(Debug, Clone, Copy)]
struct TrickSeats {
    attacker: Seat,
    defender: Seat,
}

#[derive(Debug, Clone)]
pub struct GameState {
    rules: RuleSet,
    players: Vec<Player>,
    deck: Deck,
    table: Table,
    discard: Vec<Card>,

    trump_suit: Option<Suit>,
    trump_card: Option<Card>,
    dealt: bool,

    /// whose turn it is to attack (see `stand_in` for team play)
    attacker: Seat,
    /// finishing place of each seat, once out
    places: Vec<Option<usize>>,
    last_trick: Option<TrickSeats>,
    finished: bool,

    notifications: Vec<Notification>,
}

impl GameState {

    /// New game with a shuffled deck. Hands are not dealt yet.
    pub fn new<R, I, S>(rules: RuleSet, names: I, rng: &mut R) -> Result<GameState>
    where
        R: rand::Rng,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut deck = Deck::build(rules.card_set);
        deck.shuffle(rng);
        Self::init(rules, names, deck)
    }

    /// Same seed, same game
    pub fn with_seed<I, S>(rules: RuleSet, names: I, seed: u64) -> Result<GameState>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut rng = rand_pcg::Pcg64::seed_from_u64(seed);
        Self::new(rules, names, &mut rng)
    }

    /// New game with the deck as given (no shuffling)
    pub fn with_deck<I, S>(rules: RuleSet, names: I, deck: Deck) -> Result<GameState>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::init(rules, names, deck)
    }

    /// Game in progress with the given hands, deck and trump. Seat 0 attacks.
    ///
    /// Meant for debugging and tests: the cards are not checked against the card set, but no card
    /// may appear twice.
    pub fn new_debug(rules: RuleSet, hands: Vec<Vec<Card>>, deck: Deck, trump: Suit) -> Result<GameState> {
        check_unique(deck.iter_from_top().chain(hands.iter().flatten()))?;
        let names = (0..hands.len()).map(|i| format!("P{}", i));
        let mut game = Self::init(rules, names, deck)?;
        for (player, hand) in game.players.iter_mut().zip(hands.into_iter()) {
            for card in hand {
                player.add_card(card)?;
            }
        }
        game.dealt = true;
        game.trump_suit = Some(trump);
        game.trump_card = game.deck.peek_trump_card().ok().cloned();
        Ok(game)
    }

    fn init<I, S>(rules: RuleSet, names: I, deck: Deck) -> Result<GameState>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        rules.validate()?;
        check_unique(deck.iter_from_top())?;

        let players: Vec<Player> = names
            .into_iter()
            .enumerate()
            .map(|(i, name)| Player::new(name, Seat(i as u8)))
            .collect();
        if players.len() != rules.player_count {
            return Err(Error::InvalidRules(format!(
                "expected {} players, got {}",
                rules.player_count,
                players.len()
            )));
        }

        let nplayers = players.len();
        Ok(GameState {
            rules,
            players,
            deck,
            table: Table::new(),
            discard: vec![],
            trump_suit: None,
            trump_card: None,
            dealt: false,
            attacker: Seat(0),
            places: vec![None; nplayers],
            last_trick: None,
            finished: false,
            notifications: vec![],
        })
    }

    /**
     * Queries
     */

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn trump_suit(&self) -> Option<Suit> {
        self.trump_suit
    }

    /// The card that revealed the trump. It stays at the bottom of the deck until drawn.
    pub fn trump_card(&self) -> Option<Card> {
        self.trump_card
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn attack_cards(&self) -> Vec<Card> {
        self.table.attack_cards()
    }

    pub fn defense_cards(&self) -> Vec<Card> {
        self.table.defense_cards()
    }

    pub fn discard_pile(&self) -> &[Card] {
        &self.discard
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn cards_remaining_in_deck(&self) -> usize {
        self.deck.ncards()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, seat: Seat) -> &Player {
        self.check_seat(seat);
        &self.players[seat.index()]
    }

    /// The player leading the current trick
    pub fn attacker(&self) -> Seat {
        self.stand_in(self.attacker)
    }

    /// The first player still in play after the attacker (in team play: the next seat, or its
    /// partner), `None` if nobody is left to defend
    pub fn defender(&self) -> Option<Seat> {
        let attacker = self.attacker();
        self.defender_slot()
            .map(|slot| self.stand_in(slot))
            .filter(|d| *d != attacker && !self.is_out(*d))
    }

    pub fn phase(&self) -> TrickPhase {
        if self.table.is_empty() {
            TrickPhase::Idle
        } else if self.table.nopen() > 0 {
            TrickPhase::Defending
        } else {
            TrickPhase::Attacking
        }
    }

    pub fn places(&self) -> &[Option<usize>] {
        &self.places
    }

    pub fn is_out(&self, seat: Seat) -> bool {
        self.places[seat.index()].is_some()
    }

    /// Is the game over, and who is out of it (best place first)?
    pub fn is_game_over(&self) -> (bool, Vec<Seat>) {
        let mut winners: Vec<(usize, Seat)> = self.places
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.map(|place| (place, Seat(i as u8))))
            .collect();
        winners.sort();
        let winners: Vec<Seat> = winners.into_iter().map(|(_, s)| s).collect();

        let over = if self.rules.team_play {
            self.winning_team().is_some()
        } else {
            match self.rules.termination {
                Termination::LastFool => self.in_play_count() <= 1,
                Termination::FirstOut => !winners.is_empty(),
            }
        };
        (over, winners)
    }

    /// In team play, the team (see [`Seat::team`]) whose players are both out
    ///
    /// If both teams got there, the one holding first place wins.
    pub fn winning_team(&self) -> Option<usize> {
        if !self.rules.team_play {
            return None;
        }
        let n = self.players.len();
        let team_out = |seat: Seat| self.is_out(seat) && self.is_out(seat.partner(n));
        match (team_out(Seat(0)), team_out(Seat(1))) {
            (true, false) => Some(0),
            (false, true) => Some(1),
            (true, true) => self.places.iter().position(|p| *p == Some(1)).map(|i| i % 2),
            (false, false) => None,
        }
    }

    /// The player left holding cards at the end of the game
    pub fn fool(&self) -> Option<Seat> {
        if !self.is_game_over().0 {
            return None;
        }
        let mut in_play = self.seats().filter(|s| !self.is_out(*s));
        match (in_play.next(), in_play.next()) {
            (Some(s), None) => Some(s),
            _ => None,
        }
    }

    /// Cards that may still be thrown in: the table has room and the defender can still answer
    pub fn throw_limit(&self) -> usize {
        if self.rules.lowered_first_discard_limit && self.discard.is_empty() {
            self.rules.deal_limit - 1
        } else {
            self.rules.deal_limit
        }
    }

    /// Notifications raised since the last call
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::replace(&mut self.notifications, vec![])
    }

    /**
     * Commands
     */

    pub fn apply(&mut self, cmd: Command) -> Result<Vec<Notification>> {
        match cmd {
            Command::DealInitialHands { deal_limit } => self.deal_initial_hands(deal_limit)?,
            Command::DetermineTrump => {
                self.determine_trump()?;
            }
            Command::Attack { seat, card } => self.play_attack_card(seat, card)?,
            Command::Defend { seat, card } => self.play_defense_card(seat, card)?,
            Command::Pass { seat, card } => self.pass_card(seat, card)?,
            Command::ResolveBeaten => self.resolve_beaten()?,
            Command::ResolveTaken { seat } => self.resolve_taken(seat)?,
            Command::RefillHands { deal_limit } => self.refill_hands(deal_limit)?,
        }
        Ok(self.take_notifications())
    }

    /// Deal the first hands, player by player in seat order. Must come before the trump.
    pub fn deal_initial_hands(&mut self, deal_limit: usize) -> Result<()> {
        assert!(!self.dealt, "initial hands already dealt");
        assert!(self.trump_suit.is_none(), "dealing after the trump was revealed");

        for idx in 0..self.players.len() {
            let count = self.draw_up_to(idx, deal_limit)?;
            self.notify(Notification::CardsDealt { seat: Seat(idx as u8), count });
        }
        self.dealt = true;
        log::debug!("dealt {} card(s) each, {} left in the deck", deal_limit, self.deck.ncards());
        Ok(())
    }

    /// Reveal the trump from the bottom card of the deck. The holder of the lowest trump leads.
    pub fn determine_trump(&mut self) -> Result<Suit> {
        if self.trump_suit.is_some() {
            return Err(Error::TrumpAlreadyDetermined);
        }
        let card = *self.deck.peek_trump_card()?;
        self.trump_suit = Some(card.suit);
        self.trump_card = Some(card);
        log::debug!("trump suit is {} ({})", card.suit, card);

        let lowest = self.players
            .iter()
            .filter_map(|p| p.lowest_trump(card.suit).map(|c| (c.rank, p.seat())))
            .min();
        if let Some((rank, seat)) = lowest {
            log::debug!("{} ({}) has the lowest trump {}", self.player(seat).name(), seat, rank.to_symbol());
            self.attacker = seat;
        }

        self.notify(Notification::TrumpRevealed { card, first_attacker: self.attacker });
        Ok(card.suit)
    }

    /// Lead a trick, or throw a card into it
    pub fn play_attack_card(&mut self, seat: Seat, card: Card) -> Result<()> {
        self.check_seat(seat);
        self.check_playing()?;
        let defender = self.defender().ok_or(Error::GameOver)?;

        if seat == defender || self.is_out(seat) {
            return Err(Error::NotPlayersTurn(seat));
        }
        if self.table.is_empty() && seat != self.attacker() {
            return Err(Error::NotPlayersTurn(seat));
        }
        // partners never attack each other
        if self.rules.team_play && seat.team() == defender.team() {
            return Err(Error::NotPlayersTurn(seat));
        }
        if !self.player(seat).has_card(&card) {
            return Err(Error::CardNotInHand(seat, card));
        }
        if !self.table.is_empty() && !self.table.has_rank(card.rank) {
            return Err(Error::IllegalThrow(card));
        }
        if self.table.nattacks() >= self.throw_limit()
            || self.table.nopen() >= self.player(defender).hand_size()
        {
            return Err(Error::AttackPileFull);
        }

        let card = self.players[seat.index()].remove_card(&card)?;
        self.table.add_attack(card);
        log::debug!("{} ({}) throws {}", self.player(seat).name(), seat, card);
        self.notify(Notification::CardThrown { seat, card });
        Ok(())
    }

    /// Answer the oldest open attack
    pub fn play_defense_card(&mut self, seat: Seat, card: Card) -> Result<()> {
        self.check_seat(seat);
        let trump = self.check_playing()?;
        let defender = self.defender().ok_or(Error::GameOver)?;

        if seat != defender {
            return Err(Error::NotPlayersTurn(seat));
        }
        if !self.player(seat).has_card(&card) {
            return Err(Error::CardNotInHand(seat, card));
        }
        let attack = *self.table.first_open().ok_or(Error::NothingToDefend)?;
        if !card.beats(&attack, trump, self.rules.deuce_beats_ace) {
            return Err(Error::IllegalDefense { attack, defense: card });
        }

        let card = self.players[seat.index()].remove_card(&card)?;
        self.table.add_defense(card);
        log::debug!("{} ({}) beats {} with {}", self.player(seat).name(), seat, attack, card);
        self.notify(Notification::CardBeaten { attack, defense: card });
        Ok(())
    }

    /// Pass the attack on to the next player by adding a card of the attacking rank.
    ///
    /// Only possible before anything is beaten, and only if the next defender can answer every
    /// attack. The passing player becomes the attacker.
    pub fn pass_card(&mut self, seat: Seat, card: Card) -> Result<()> {
        self.check_seat(seat);
        self.check_playing()?;
        let defender = self.defender().ok_or(Error::GameOver)?;

        if seat != defender {
            return Err(Error::NotPlayersTurn(seat));
        }
        if !self.player(seat).has_card(&card) {
            return Err(Error::CardNotInHand(seat, card));
        }
        if !self.rules.allow_pass {
            return Err(Error::IllegalPass(card));
        }
        match self.table.single_rank_unbeaten() {
            Some(rank) if rank == card.rank => (),
            _ => return Err(Error::IllegalPass(card)),
        }
        let nattacks = self.table.nattacks() + 1;
        let slot = self.defender_slot().ok_or(Error::GameOver)?;
        let next_defender = match self.turn_after(slot).map(|s| self.stand_in(s)) {
            Some(s) if s != seat && !self.is_out(s) => s,
            _ => return Err(Error::IllegalPass(card)),
        };
        if nattacks > self.throw_limit() || nattacks > self.player(next_defender).hand_size() {
            return Err(Error::IllegalPass(card));
        }

        let card = self.players[seat.index()].remove_card(&card)?;
        self.table.add_attack(card);
        self.attacker = slot;
        log::debug!("{} ({}) passes with {}, {} defends", self.player(seat).name(), seat, card, next_defender);
        self.notify(Notification::CardPassed { seat, card });
        Ok(())
    }

    /// Everything on the table was beaten: discard it, the defender attacks next
    pub fn resolve_beaten(&mut self) -> Result<()> {
        self.check_playing()?;
        if self.table.is_empty() {
            return Err(Error::EmptyTable);
        }
        if !self.table.all_beaten() {
            return Err(Error::TrickNotBeaten);
        }
        let defender = self.defender().ok_or(Error::GameOver)?;
        let slot = self.defender_slot().ok_or(Error::GameOver)?;

        let cards = self.table.take_all();
        log::debug!("{} card(s) go to the discard pile", cards.len());
        self.discard.extend(cards.iter().cloned());
        self.notify(Notification::Discarded { cards });
        self.end_trick(defender, slot)
    }

    /// The defender gives up and takes every card on the table; the player after them attacks next
    pub fn resolve_taken(&mut self, seat: Seat) -> Result<()> {
        self.check_seat(seat);
        self.check_playing()?;
        let defender = self.defender().ok_or(Error::GameOver)?;

        if seat != defender {
            return Err(Error::NotPlayersTurn(seat));
        }
        if self.table.is_empty() {
            return Err(Error::EmptyTable);
        }
        if let Some(card) = self.table.iter_cards().find(|c| self.player(seat).has_card(c)) {
            return Err(Error::DuplicateCard(*card));
        }
        let slot = self.defender_slot().ok_or(Error::GameOver)?;

        let cards = self.table.take_all();
        for card in cards.iter() {
            self.players[seat.index()].add_card(*card)?;
        }
        log::debug!("{} ({}) takes {} card(s)", self.player(seat).name(), seat, cards.len());
        self.notify(Notification::PlayerTook { seat, cards });

        let next = self.turn_after(slot).unwrap_or(slot);
        self.end_trick(defender, next)
    }

    /// Fill hands up to `deal_limit`: the last attacker first, then around the table, the last
    /// defender last. Only between tricks.
    pub fn refill_hands(&mut self, deal_limit: usize) -> Result<()> {
        self.check_playing()?;
        if !self.table.is_empty() {
            return Err(Error::TrickNotBeaten);
        }

        for seat in self.refill_order() {
            if self.is_out(seat) || self.deck.is_empty() {
                continue;
            }
            let count = self.draw_up_to(seat.index(), deal_limit)?;
            if count > 0 {
                self.notify(Notification::CardsDealt { seat, count });
            }
        }

        self.settle_out_of_play();
        if !self.rules.team_play && self.is_out(self.attacker) {
            if let Some(next) = self.next_in_play(self.attacker) {
                self.attacker = next;
                self.notify(Notification::TurnDone { next_attacker: next });
            }
        }
        Ok(())
    }

    pub fn cards_in_play(&self) -> usize {
        self.deck.ncards()
            + self.table.iter_cards().count()
            + self.discard.len()
            + self.players.iter().map(|p| p.hand_size()).sum::<usize>()
    }

    /**
     * Helpers
     */

    fn notify(&mut self, n: Notification) {
        self.notifications.push(n)
    }

    fn check_seat(&self, seat: Seat) {
        assert!(seat.index() < self.players.len(), "invalid seat {}", seat);
    }

    /// Returns the trump suit if commands can be played
    fn check_playing(&self) -> Result<Suit> {
        let trump = self.trump_suit.ok_or(Error::TrumpNotDetermined)?;
        if self.finished || self.is_game_over().0 {
            return Err(Error::GameOver);
        }
        Ok(trump)
    }

    fn seats(&self) -> impl Iterator<Item = Seat> {
        (0..self.players.len()).map(|i| Seat(i as u8))
    }

    /// Every seat once, going around the table starting at `start`
    fn around_from(&self, start: Seat) -> impl Iterator<Item = Seat> {
        let n = self.players.len();
        std::iter::successors(Some(start), move |s| Some(s.next(n))).take(n)
    }

    fn in_play_count(&self) -> usize {
        self.places.iter().filter(|p| p.is_none()).count()
    }

    /// The seat playing `turn`: itself, or in team play its partner once it is out
    fn stand_in(&self, turn: Seat) -> Seat {
        if self.rules.team_play && self.is_out(turn) {
            turn.partner(self.players.len())
        } else {
            turn
        }
    }

    /// The turn that follows `turn`. In team play every seat keeps its turn, out or not.
    fn turn_after(&self, turn: Seat) -> Option<Seat> {
        if self.rules.team_play {
            Some(turn.next(self.players.len()))
        } else {
            self.next_in_play(turn)
        }
    }

    fn defender_slot(&self) -> Option<Seat> {
        self.turn_after(self.attacker).filter(|s| *s != self.attacker)
    }

    /// First seat after `from` (going around, `from` included last) that is still in play
    fn next_in_play(&self, from: Seat) -> Option<Seat> {
        self.around_from(from.next(self.players.len()))
            .find(|s| !self.is_out(*s))
    }

    fn draw_up_to(&mut self, idx: usize, limit: usize) -> Result<usize> {
        let mut count = 0;
        while self.players[idx].hand_size() < limit && !self.deck.is_empty() {
            let card = self.deck.draw()?;
            self.players[idx].add_card(card)?;
            count += 1;
        }
        Ok(count)
    }

    fn refill_order(&self) -> Vec<Seat> {
        let (start, last) = match self.last_trick {
            Some(t) => (t.attacker, Some(t.defender)),
            None => (self.attacker(), None),
        };
        let mut order: Vec<Seat> = self.around_from(start)
            .filter(|s| Some(*s) != last)
            .collect();
        order.extend(last);
        order
    }

    /// `next` is the turn that attacks next
    fn end_trick(&mut self, defender: Seat, next: Seat) -> Result<()> {
        self.last_trick = Some(TrickSeats {
            attacker: self.attacker(),
            defender,
        });

        self.settle_out_of_play();
        if self.finished {
            return Ok(());
        }

        let next = if self.is_out(next) && !self.rules.team_play {
            self.next_in_play(next).unwrap_or(next)
        } else {
            next
        };
        self.attacker = next;
        let next = self.attacker();
        log::debug!("turn done: {} attacks {:?}", next, self.defender());
        self.notify(Notification::TurnDone { next_attacker: next });
        Ok(())
    }

    /// Once the deck is gone, players without cards leave the game
    fn settle_out_of_play(&mut self) {
        if !self.deck.is_empty() || !self.table.is_empty() {
            return;
        }

        for seat in self.seats().collect::<Vec<_>>() {
            if self.is_out(seat) || self.player(seat).hand_size() > 0 {
                continue;
            }
            let place = self.places.iter().filter(|p| p.is_some()).count() + 1;
            self.places[seat.index()] = Some(place);
            log::debug!("{} ({}) is out, place {}", self.player(seat).name(), seat, place);
            self.notify(Notification::PlayerOut { seat, place });
        }

        let (over, winners) = self.is_game_over();
        if over && !self.finished {
            self.finished = true;
            log::debug!("game over, fool: {:?}", self.fool());
            self.notify(Notification::GameOver { winners });
        }
    }
}

fn check_unique<'a, I>(cards: I) -> Result<()>
where
    I: Iterator<Item = &'a Card>,
{
    let mut seen = HashSet::new();
    for card in cards {
        if !seen.insert(*card) {
            return Err(Error::DuplicateCard(*card));
        }
    }
    Ok(())
}
