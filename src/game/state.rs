use serde::Serialize;
use std::fmt;

use crate::config::Config;
use crate::dice::{HeldSet, RollState};
use crate::scoring::{evaluate, held_dice_score, Evaluation, RulesConfig, ScoringConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Player {
    Human,
    Computer,
}

/// The computer's turn. There is no computer strategy yet, so the only turn
/// it can take is an explicit placeholder the player has to acknowledge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComputerTurn {
    NotImplemented,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Start of the human turn, no dice on the table yet
    AwaitingRoll,
    /// Dice rolled; the player may hold, bank, or roll again
    Deciding,
    ComputerTurn(ComputerTurn),
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::AwaitingRoll => write!(f, "awaiting roll"),
            Phase::Deciding => write!(f, "deciding"),
            Phase::ComputerTurn(_) => write!(f, "computer turn"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Scores {
    pub human: u32,
    pub computer: u32,
}

/// Scoring values and thresholds a game is played under.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameRules {
    pub scoring: ScoringConfig,
    pub rules: RulesConfig,
}

impl From<&Config> for GameRules {
    fn from(config: &Config) -> Self {
        Self {
            scoring: config.scoring.clone(),
            rules: config.rules.clone(),
        }
    }
}

/// Complete game state. Every transition takes a `GameState` and returns a new
/// one; nothing else holds game data.
///
/// The round score is not stored. It is `carried` plus the engine score of the
/// held dice of the current roll, where `carried` collects the held subtotals
/// set aside by hot-dice continuations earlier in the same turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub phase: Phase,
    pub roll: Option<RollState>,
    pub held: HeldSet,
    pub carried: u32,
    pub banked: Scores,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            phase: Phase::AwaitingRoll,
            roll: None,
            held: HeldSet::new(),
            carried: 0,
            banked: Scores::default(),
        }
    }

    /// Points from the held dice of the current roll, combinations included.
    pub fn held_score(&self, scoring: &ScoringConfig) -> u32 {
        self.roll
            .map(|roll| held_dice_score(&roll, &self.held, scoring))
            .unwrap_or(0)
    }

    pub fn round_score(&self, scoring: &ScoringConfig) -> u32 {
        self.carried + self.held_score(scoring)
    }

    /// Full evaluation of the dice on the table, if any.
    pub fn evaluation(&self, scoring: &ScoringConfig) -> Option<Evaluation> {
        self.roll
            .map(|roll| evaluate(&roll, &self.held, scoring))
    }

    /// True when the next roll is a free re-roll of all six dice.
    pub fn is_hot_dice(&self, scoring: &ScoringConfig) -> bool {
        self.held.is_full()
            && self
                .evaluation(scoring)
                .is_some_and(|evaluation| evaluation.all_scored)
    }

    pub fn is_human_turn(&self) -> bool {
        !matches!(self.phase, Phase::ComputerTurn(_))
    }

    /// Drop the dice and round progress, keeping banked scores.
    pub(crate) fn clear_round(&mut self) {
        self.roll = None;
        self.held.clear();
        self.carried = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_state() {
        let state = GameState::new();
        assert_eq!(state.phase, Phase::AwaitingRoll);
        assert!(state.roll.is_none());
        assert_eq!(state.round_score(&ScoringConfig::default()), 0);
        assert!(state.is_human_turn());
    }

    #[test]
    fn test_round_score_is_carried_plus_held() {
        let mut state = GameState::new();
        state.phase = Phase::Deciding;
        state.roll = Some(RollState::from_faces(&[1, 5, 3, 3, 2, 6]).unwrap());
        state.held = HeldSet::from_indices(&[0, 1, 2]).unwrap();
        state.carried = 300;

        let scoring = ScoringConfig::default();
        assert_eq!(state.held_score(&scoring), 150);
        assert_eq!(state.round_score(&scoring), 450);
    }

    #[test]
    fn test_held_straight_scores_in_full() {
        let mut state = GameState::new();
        state.phase = Phase::Deciding;
        state.roll = Some(RollState::from_faces(&[3, 1, 6, 5, 2, 4]).unwrap());
        state.held = HeldSet::from_indices(&[0, 1, 2, 3, 4, 5]).unwrap();
        assert_eq!(state.round_score(&ScoringConfig::default()), 1500);
    }

    #[test]
    fn test_hot_dice_needs_every_die_held() {
        let mut state = GameState::new();
        state.roll = Some(RollState::from_faces(&[1, 1, 1, 5, 5, 5]).unwrap());
        let scoring = ScoringConfig::default();

        state.held = HeldSet::from_indices(&[0, 1, 2, 3, 4]).unwrap();
        assert!(!state.is_hot_dice(&scoring));
        state.held.insert(5).unwrap();
        assert!(state.is_hot_dice(&scoring));
    }

    #[test]
    fn test_rules_from_config() {
        let mut config = Config::default();
        config.rules.win_target = 3000;
        let rules = GameRules::from(&config);
        assert_eq!(rules.rules.win_target, 3000);
        assert_eq!(rules.scoring, ScoringConfig::default());
    }
}
