//! Game transitions. Each function takes the current `GameState` by value and
//! returns the next one together with any notices for the player.

use thiserror::Error;

use super::notice::Notice;
use super::state::{ComputerTurn, GameRules, GameState, Phase, Player};
use crate::dice::{roll_unheld, DiceError, DiceRoller, DieValue};
use crate::scoring::{check_win, score_faces, try_bank, BankRejection};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Roll,
    ToggleHold(usize),
    Bank,
    ResolveComputerTurn,
    ResetRound,
    ResetGame,
}

impl Action {
    fn name(self) -> &'static str {
        match self {
            Action::Roll => "roll",
            Action::ToggleHold(_) => "hold",
            Action::Bank => "bank",
            Action::ResolveComputerTurn => "resolve computer turn",
            Action::ResetRound => "reset round",
            Action::ResetGame => "reset game",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("cannot {action} during {phase}")]
    NotAllowed { action: &'static str, phase: Phase },
    #[error(transparent)]
    Dice(#[from] DiceError),
}

/// Result of a successful transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: GameState,
    pub notices: Vec<Notice>,
}

impl Transition {
    fn quiet(state: GameState) -> Self {
        Self {
            state,
            notices: Vec::new(),
        }
    }
}

pub fn new_game() -> GameState {
    GameState::new()
}

/// Apply one action. `roller` is only consulted by `Action::Roll`.
pub fn apply<R: DiceRoller + ?Sized>(
    state: GameState,
    action: Action,
    rules: &GameRules,
    roller: &mut R,
) -> Result<Transition, GameError> {
    match action {
        Action::Roll => roll(state, rules, roller),
        Action::ToggleHold(index) => toggle_hold(state, index),
        Action::Bank => bank(state, rules),
        Action::ResolveComputerTurn => resolve_computer_turn(state),
        Action::ResetRound => reset_round(state),
        Action::ResetGame => Ok(reset_game(state)),
    }
}

fn require(state: &GameState, action: Action, allowed: &[Phase]) -> Result<(), GameError> {
    if allowed.contains(&state.phase) {
        Ok(())
    } else {
        Err(GameError::NotAllowed {
            action: action.name(),
            phase: state.phase,
        })
    }
}

/// Roll every unheld die.
///
/// With every die held and scored, the held subtotal is carried and all six
/// dice are rolled afresh. If the freshly rolled dice score nothing the round
/// is forfeited and play passes to the computer.
pub fn roll<R: DiceRoller + ?Sized>(
    mut state: GameState,
    rules: &GameRules,
    roller: &mut R,
) -> Result<Transition, GameError> {
    require(&state, Action::Roll, &[Phase::AwaitingRoll, Phase::Deciding])?;
    let mut notices = Vec::new();

    if state.is_hot_dice(&rules.scoring) {
        state.carried += state.held_score(&rules.scoring);
        state.held.clear();
        state.roll = None;
        tracing::debug!(carried = state.carried, "hot dice");
        notices.push(Notice::HotDice {
            carried: state.carried,
        });
    }

    let next = roll_unheld(roller, state.roll.as_ref(), &state.held);
    let fresh: Vec<DieValue> = next
        .iter()
        .enumerate()
        .filter(|(index, _)| !state.held.contains(*index))
        .map(|(_, die)| die)
        .collect();
    let fresh_score = score_faces(&fresh, &rules.scoring);
    state.roll = Some(next);

    tracing::debug!(roll = %next, fresh_score, "rolled");

    if fresh_score == 0 {
        let lost = state.round_score(&rules.scoring);
        state.held.clear();
        state.carried = 0;
        state.phase = Phase::ComputerTurn(ComputerTurn::NotImplemented);
        tracing::debug!(lost, "forfeit");
        notices.push(Notice::Forfeit { lost });
    } else {
        state.phase = Phase::Deciding;
    }

    Ok(Transition { state, notices })
}

/// Hold or release one die. The round score follows from the new held set.
pub fn toggle_hold(mut state: GameState, index: usize) -> Result<Transition, GameError> {
    require(&state, Action::ToggleHold(index), &[Phase::Deciding])?;
    let now_held = state.held.toggle(index)?;
    tracing::debug!(index, now_held, "toggled hold");
    Ok(Transition::quiet(state))
}

/// Bank the round score for the human player.
pub fn bank(mut state: GameState, rules: &GameRules) -> Result<Transition, GameError> {
    require(&state, Action::Bank, &[Phase::AwaitingRoll, Phase::Deciding])?;

    let round = state.round_score(&rules.scoring);
    let outcome = try_bank(round, state.banked.human, &rules.rules);

    match outcome.reason {
        Some(BankRejection::BelowMinimum) => {
            // The player keeps the turn but starts the round over
            state.clear_round();
            state.phase = Phase::AwaitingRoll;
            Ok(Transition {
                state,
                notices: vec![Notice::BelowMinimum {
                    minimum: rules.rules.opening_minimum,
                }],
            })
        }
        Some(BankRejection::NothingToBank) => Ok(Transition {
            state,
            notices: vec![Notice::NothingToBank],
        }),
        None => {
            state.banked.human = outcome.new_banked;
            state.clear_round();
            tracing::debug!(points = round, total = outcome.new_banked, "banked");

            let mut notices = vec![Notice::Banked {
                points: round,
                total: outcome.new_banked,
            }];

            if check_win(outcome.new_banked, &rules.rules) {
                tracing::info!(score = outcome.new_banked, "game won");
                notices.push(Notice::Won {
                    player: Player::Human,
                    score: outcome.new_banked,
                });
                return Ok(Transition {
                    state: GameState::new(),
                    notices,
                });
            }

            state.phase = Phase::ComputerTurn(ComputerTurn::NotImplemented);
            Ok(Transition { state, notices })
        }
    }
}

/// Play out the computer's turn and hand the dice back to the player.
pub fn resolve_computer_turn(mut state: GameState) -> Result<Transition, GameError> {
    let turn = match state.phase {
        Phase::ComputerTurn(turn) => turn,
        phase => {
            return Err(GameError::NotAllowed {
                action: Action::ResolveComputerTurn.name(),
                phase,
            })
        }
    };

    let notice = match turn {
        ComputerTurn::NotImplemented => Notice::ComputerTurnSkipped,
    };

    state.clear_round();
    state.phase = Phase::AwaitingRoll;
    Ok(Transition {
        state,
        notices: vec![notice],
    })
}

/// Abandon the current round without banking.
pub fn reset_round(mut state: GameState) -> Result<Transition, GameError> {
    require(&state, Action::ResetRound, &[Phase::AwaitingRoll, Phase::Deciding])?;
    state.clear_round();
    state.phase = Phase::AwaitingRoll;
    Ok(Transition::quiet(state))
}

pub fn reset_game(_state: GameState) -> Transition {
    Transition::quiet(GameState::new())
}
