use serde::Serialize;
use std::fmt;

use super::state::Player;

/// Something the player should be told about after a transition. These are
/// advisory; the front end decides how to show them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    HotDice { carried: u32 },
    Forfeit { lost: u32 },
    Banked { points: u32, total: u32 },
    BelowMinimum { minimum: u32 },
    NothingToBank,
    Won { player: Player, score: u32 },
    ComputerTurnSkipped,
}

impl Notice {
    /// Notices that block or end the player's progress.
    pub fn is_setback(&self) -> bool {
        matches!(
            self,
            Notice::Forfeit { .. } | Notice::BelowMinimum { .. } | Notice::NothingToBank
        )
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::HotDice { carried } => {
                write!(f, "Hot dice! {} points carried, rolling all six.", carried)
            }
            Notice::Forfeit { .. } => write!(
                f,
                "No scoring dice rolled. Your turn is over! You forfeit all accumulated points this turn."
            ),
            Notice::Banked { points, total } => {
                write!(f, "Banked {} points (total {}).", points, total)
            }
            Notice::BelowMinimum { minimum } => write!(
                f,
                "You must score at least {} points in the first round to continue!",
                minimum
            ),
            Notice::NothingToBank => write!(f, "No points to bank. Roll again!"),
            Notice::Won { player, score } => match player {
                Player::Human => write!(f, "Congratulations! You win with {} points!", score),
                Player::Computer => write!(f, "The computer wins with {} points.", score),
            },
            Notice::ComputerTurnSkipped => {
                write!(f, "The computer has no strategy yet and passes its turn.")
            }
        }
    }
}
