//
// vim: set expandtab softtabstop=4 tabstop=4 shiftwidth=4:
//

use serde::{Deserialize, Serialize};

use super::deck::CardSet;
use super::error::{Error, Result};

pub const DEAL_LIMIT: usize = 6;
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 6;
pub const TEAM_PLAYERS: usize = 4;

/// When the game is considered finished
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    /// Play on until at most one player holds cards: that one is the fool.
    LastFool,
    /// Stop as soon as someone is out.
    FirstOut,
}

/// Game configuration.
///
/// Every field has a default, so a partial description (e.g. `{"player_count": 4}`) is enough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSet {
    pub player_count: usize,
    pub card_set: CardSet,
    /// cards a hand is filled up to, also the maximum number of attacks in a trick
    pub deal_limit: usize,
    /// a two beats the ace of the same suit
    pub deuce_beats_ace: bool,
    /// the defender may pass the attack on with a card of the same rank
    pub allow_pass: bool,
    /// the first trick of the game allows one attack less
    pub lowered_first_discard_limit: bool,
    pub termination: Termination,
    /// four players in two teams, partners sitting across the table (seats 0+2 and 1+3)
    ///
    /// An out player's turns are played by their partner, and the game ends as soon as both
    /// players of one team are out. Overrides `termination`.
    pub team_play: bool,
}

impl Default for RuleSet {
    fn default() -> Self {
        RuleSet {
            player_count: 2,
            card_set: CardSet::default(),
            deal_limit: DEAL_LIMIT,
            deuce_beats_ace: false,
            allow_pass: false,
            lowered_first_discard_limit: false,
            termination: Termination::LastFool,
            team_play: false,
        }
    }
}

impl RuleSet {
    pub fn with_players(player_count: usize) -> RuleSet {
        RuleSet {
            player_count,
            ..RuleSet::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.player_count < MIN_PLAYERS || self.player_count > MAX_PLAYERS {
            return Err(Error::InvalidRules(format!(
                "player count must be between {} and {}, not {}",
                MIN_PLAYERS, MAX_PLAYERS, self.player_count
            )));
        }

        if self.team_play && self.player_count != TEAM_PLAYERS {
            return Err(Error::InvalidRules(format!(
                "team play needs {} players, not {}",
                TEAM_PLAYERS, self.player_count
            )));
        }

        if self.deal_limit == 0 {
            return Err(Error::InvalidRules("deal limit must be positive".to_string()));
        }

        if self.lowered_first_discard_limit && self.deal_limit < 2 {
            return Err(Error::InvalidRules(
                "a lowered first discard limit needs a deal limit of at least 2".to_string(),
            ));
        }

        // at least one card must stay in the deck to show the trump
        let ncards = self.card_set.ncards();
        if self.player_count * self.deal_limit >= ncards {
            return Err(Error::InvalidRules(format!(
                "{} players with {} cards each need more than {} cards",
                self.player_count, self.deal_limit, ncards
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Rank;

    #[test]
    fn defaults_are_valid() {
        let rules = RuleSet::default();
        assert!(rules.validate().is_ok());
        assert_eq!(rules.card_set.ncards(), 36);
        assert_eq!(rules.deal_limit, DEAL_LIMIT);
    }

    #[test]
    fn invalid_rules() {
        assert!(RuleSet::with_players(1).validate().is_err());
        assert!(RuleSet::with_players(7).validate().is_err());
        // 6 * 6 = 36: nothing left for the trump
        assert!(RuleSet::with_players(6).validate().is_err());
        let rules = RuleSet {
            card_set: CardSet::CARDS_52,
            ..RuleSet::with_players(6)
        };
        assert!(rules.validate().is_ok());
        let rules = RuleSet {
            deal_limit: 0,
            ..RuleSet::default()
        };
        assert!(rules.validate().is_err());

        let teams = RuleSet { team_play: true, ..RuleSet::with_players(4) };
        assert!(teams.validate().is_ok());
        let teams = RuleSet { team_play: true, ..RuleSet::with_players(3) };
        assert!(matches!(teams.validate(), Err(Error::InvalidRules(_))));
    }

    #[test]
    fn from_json() {
        let rules: RuleSet = serde_json::from_str(r#"{"player_count": 4, "allow_pass": true}"#).unwrap();
        assert_eq!(rules.player_count, 4);
        assert!(rules.allow_pass);
        assert_eq!(rules.card_set, CardSet::CARDS_36);
        assert_eq!(rules.termination, Termination::LastFool);
        assert!(!rules.team_play);

        let json = serde_json::to_string(&RuleSet {
            card_set: CardSet { lowest_rank: Rank::TWO },
            ..RuleSet::default()
        })
        .unwrap();
        let back: RuleSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back.card_set.ncards(), 52);
    }
}
