use serde::Serialize;

use super::config::RulesConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BankRejection {
    /// First bank of the game is below the opening minimum
    BelowMinimum,
    /// Round score is zero
    NothingToBank,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BankOutcome {
    pub success: bool,
    pub new_banked: u32,
    pub reason: Option<BankRejection>,
}

/// Decide whether `round` may be banked on top of `banked`.
///
/// The opening-minimum check runs first, so an empty round on a fresh score
/// reports `BelowMinimum` rather than `NothingToBank`.
pub fn try_bank(round: u32, banked: u32, rules: &RulesConfig) -> BankOutcome {
    let reject = |reason| BankOutcome {
        success: false,
        new_banked: banked,
        reason: Some(reason),
    };

    if banked == 0 && round < rules.opening_minimum {
        return reject(BankRejection::BelowMinimum);
    }
    if round == 0 {
        return reject(BankRejection::NothingToBank);
    }

    BankOutcome {
        success: true,
        new_banked: banked.saturating_add(round),
        reason: None,
    }
}

pub fn check_win(banked: u32, rules: &RulesConfig) -> bool {
    banked >= rules.win_target
}
