pub mod roller;
pub mod types;

pub use roller::{roll_unheld, DiceRoller, RandomRoller};
pub use types::{DiceError, DieValue, HeldSet, RollState, DICE_COUNT};
