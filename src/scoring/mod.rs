pub mod bank;
pub mod config;
pub mod engine;
pub mod held;
pub mod validation;

pub use bank::{check_win, try_bank, BankOutcome, BankRejection};
pub use config::*;
pub use engine::{
    evaluate, of_a_kind_points, score_faces, score_held_faces, Combo, ComboContribution,
    Evaluation, ScoreBreakdown,
};
pub use held::{held_dice_score, recompute_held_score};
pub use validation::{validate_rules, validate_scoring};
