pub mod notice;
pub mod reducer;
pub mod state;

pub use notice::Notice;
pub use reducer::{
    apply, bank, new_game, reset_game, reset_round, resolve_computer_turn, roll, toggle_hold,
    Action, GameError, Transition,
};
pub use state::{ComputerTurn, GameRules, GameState, Phase, Player, Scores};
