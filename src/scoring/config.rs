use serde::{Deserialize, Serialize};

/// Point values for the fixed scoring combinations.
///
/// Of-a-kind bonuses follow a fixed table (see `engine::of_a_kind_points`);
/// only the flat combinations and single-die values are tunable.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   straight: 1500
///   three_pairs: 1500
///   single_one: 100
///   single_five: 50
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringConfig {
    /// One of each face, 1 through 6
    pub straight: u32,

    /// Exactly three distinct faces showing twice each
    pub three_pairs: u32,

    /// A single 1, held or left over after an of-a-kind on 1s
    pub single_one: u32,

    /// A single held 5
    pub single_five: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            straight: 1500,
            three_pairs: 1500,
            single_one: 100,
            single_five: 50,
        }
    }
}

/// Banking and win thresholds.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct RulesConfig {
    /// Minimum round score for a player's first bank
    pub opening_minimum: u32,

    /// Banked score that wins the game
    pub win_target: u32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            opening_minimum: 1000,
            win_target: 10000,
        }
    }
}
