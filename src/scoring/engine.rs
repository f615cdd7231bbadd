use serde::Serialize;

use super::config::ScoringConfig;
use crate::dice::{DieValue, HeldSet, RollState};

/// A scoring combination found in a set of dice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Combo {
    Straight,
    ThreePairs,
    OfAKind { face: u8, count: u8 },
    SingleOnes { count: u8 },
    SingleFives { count: u8 },
}

impl Combo {
    pub fn label(&self) -> String {
        match self {
            Combo::Straight => "Straight (1-6)".to_string(),
            Combo::ThreePairs => "Three pairs".to_string(),
            Combo::OfAKind { face, count } => format!("{} x {}s", count, face),
            Combo::SingleOnes { count } if *count == 1 => "Single 1".to_string(),
            Combo::SingleOnes { count } => format!("{} single 1s", count),
            Combo::SingleFives { count } if *count == 1 => "Single 5".to_string(),
            Combo::SingleFives { count } => format!("{} single 5s", count),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComboContribution {
    pub combo: Combo,
    pub points: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub combos: Vec<ComboContribution>,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.combos.iter().map(|c| c.points).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub score: u32,
    /// Every die on the table is held, a 1, or part of an of-a-kind
    pub all_scored: bool,
    pub breakdown: ScoreBreakdown,
}

/// Score a full roll and decide whether every die contributed.
///
/// Reads `roll` and `held` only; the same inputs always give the same result.
pub fn evaluate(roll: &RollState, held: &HeldSet, config: &ScoringConfig) -> Evaluation {
    let counts = tally(roll.dice());
    let breakdown = score_counts(&counts, config);

    let all_scored = roll.iter().enumerate().all(|(index, die)| {
        held.contains(index) || die == DieValue::ONE || counts[die.face() as usize] >= 3
    });

    Evaluation {
        score: breakdown.total(),
        all_scored,
        breakdown,
    }
}

/// Score an arbitrary subset of dice with the same rules as `evaluate`.
pub fn score_faces(dice: &[DieValue], config: &ScoringConfig) -> u32 {
    score_counts(&tally(dice), config).total()
}

/// Score dice the player has set aside.
///
/// Uses the same combinations as `score_faces` and also pays for 5s that are
/// not part of a straight, three pairs or an of-a-kind.
pub fn score_held_faces(dice: &[DieValue], config: &ScoringConfig) -> ScoreBreakdown {
    let counts = tally(dice);
    let mut breakdown = score_counts(&counts, config);

    let flat = breakdown
        .combos
        .iter()
        .any(|c| matches!(c.combo, Combo::Straight | Combo::ThreePairs));
    let fives = counts[5];
    if !flat && (1..3).contains(&fives) {
        breakdown.combos.push(ComboContribution {
            combo: Combo::SingleFives { count: fives },
            points: u32::from(fives) * config.single_five,
        });
    }

    breakdown
}

/// Face frequencies, indexed by face value (slot 0 unused).
fn tally(dice: &[DieValue]) -> [u8; 7] {
    let mut counts = [0u8; 7];
    for die in dice {
        counts[die.face() as usize] += 1;
    }
    counts
}

fn score_counts(counts: &[u8; 7], config: &ScoringConfig) -> ScoreBreakdown {
    let mut combos = Vec::new();

    if counts[1..].iter().all(|&c| c == 1) {
        combos.push(ComboContribution {
            combo: Combo::Straight,
            points: config.straight,
        });
        return ScoreBreakdown { combos };
    }

    if counts[1..].iter().filter(|&&c| c == 2).count() == 3 {
        combos.push(ComboContribution {
            combo: Combo::ThreePairs,
            points: config.three_pairs,
        });
        return ScoreBreakdown { combos };
    }

    for face in 1..=6u8 {
        let count = counts[face as usize];
        if count >= 3 {
            combos.push(ComboContribution {
                combo: Combo::OfAKind { face, count },
                points: of_a_kind_points(face, count),
            });
        }
    }

    // Ones not consumed by a triple
    let leftover_ones = counts[1] % 3;
    if leftover_ones > 0 {
        combos.push(ComboContribution {
            combo: Combo::SingleOnes {
                count: leftover_ones,
            },
            points: u32::from(leftover_ones) * config.single_one,
        });
    }

    ScoreBreakdown { combos }
}

/// Of-a-kind value: the three-of-a-kind base plus the increment for the exact
/// count reached. Increments stack on the base; they do not replace it.
pub fn of_a_kind_points(face: u8, count: u8) -> u32 {
    if count < 3 {
        return 0;
    }
    let unit = if face == 1 { 1000 } else { u32::from(face) * 100 };
    let increment = match count {
        4 => unit * 2,
        5 => unit * 3,
        6 => unit * 4,
        _ => 0,
    };
    unit + increment
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn roll(faces: [u8; 6]) -> RollState {
        RollState::from_faces(&faces).unwrap()
    }

    fn eval(faces: [u8; 6]) -> Evaluation {
        evaluate(&roll(faces), &HeldSet::new(), &ScoringConfig::default())
    }

    #[test]
    fn test_straight() {
        let result = eval([3, 1, 4, 6, 5, 2]);
        assert_eq!(result.score, 1500);
        assert_eq!(result.breakdown.combos.len(), 1);
        assert_eq!(result.breakdown.combos[0].combo, Combo::Straight);
    }

    #[test]
    fn test_three_pairs() {
        assert_eq!(eval([2, 2, 4, 4, 6, 6]).score, 1500);
    }

    #[test]
    fn test_three_pairs_with_ones_skips_single_ones() {
        // Pairs win outright; the two 1s are not scored again
        assert_eq!(eval([1, 1, 3, 3, 5, 5]).score, 1500);
    }

    #[test]
    fn test_three_ones() {
        assert_eq!(eval([1, 1, 1, 2, 3, 4]).score, 1000);
    }

    #[test]
    fn test_four_fives_stacks_on_triple() {
        // 500 for the triple plus 5 * 200 for the fourth
        assert_eq!(eval([5, 5, 5, 5, 2, 3]).score, 1500);
    }

    #[test]
    fn test_two_single_ones() {
        assert_eq!(eval([1, 1, 2, 3, 4, 6]).score, 200);
    }

    #[test]
    fn test_three_sixes() {
        assert_eq!(eval([2, 3, 4, 6, 6, 6]).score, 600);
    }

    #[test]
    fn test_four_ones_counts_leftover() {
        // 1000 base + 2000 increment + one leftover 1
        assert_eq!(eval([1, 1, 1, 1, 2, 3]).score, 3100);
    }

    #[test]
    fn test_six_twos() {
        assert_eq!(eval([2, 2, 2, 2, 2, 2]).score, 200 + 800);
    }

    #[test]
    fn test_two_triples() {
        let result = eval([3, 3, 3, 4, 4, 4]);
        assert_eq!(result.score, 700);
        assert_eq!(result.breakdown.combos.len(), 2);
    }

    #[test]
    fn test_single_five_scores_nothing() {
        assert_eq!(eval([5, 2, 3, 4, 6, 6]).score, 0);
    }

    #[test]
    fn test_of_a_kind_table() {
        assert_eq!(of_a_kind_points(1, 3), 1000);
        assert_eq!(of_a_kind_points(1, 5), 4000);
        assert_eq!(of_a_kind_points(1, 6), 5000);
        assert_eq!(of_a_kind_points(4, 4), 1200);
        assert_eq!(of_a_kind_points(6, 2), 0);
    }

    #[test]
    fn test_all_scored_with_ones_and_triple() {
        assert!(eval([1, 1, 3, 3, 3, 1]).all_scored);
    }

    #[test]
    fn test_all_scored_false_for_loose_five() {
        assert!(!eval([1, 1, 1, 4, 4, 5]).all_scored);
    }

    #[test]
    fn test_all_scored_counts_held_dice() {
        let held = HeldSet::from_indices(&[3, 4, 5]).unwrap();
        let result = evaluate(&roll([1, 1, 1, 4, 4, 5]), &held, &ScoringConfig::default());
        assert!(result.all_scored);
        // Holding does not change the roll's score
        assert_eq!(result.score, 1000);
    }

    #[test]
    fn test_straight_is_not_all_scored() {
        assert!(!eval([1, 2, 3, 4, 5, 6]).all_scored);
    }

    #[test]
    fn test_score_faces_subset() {
        let config = ScoringConfig::default();
        let dice: Vec<DieValue> = [1, 4, 4, 4]
            .iter()
            .map(|&f| DieValue::new(f).unwrap())
            .collect();
        assert_eq!(score_faces(&dice, &config), 500);
        assert_eq!(score_faces(&[], &config), 0);
    }

    #[test]
    fn test_custom_config_values() {
        let config = ScoringConfig {
            straight: 2500,
            single_one: 150,
            ..ScoringConfig::default()
        };
        let held = HeldSet::new();
        assert_eq!(evaluate(&roll([1, 2, 3, 4, 5, 6]), &held, &config).score, 2500);
        assert_eq!(evaluate(&roll([1, 2, 2, 3, 4, 6]), &held, &config).score, 150);
    }

    fn faces(values: &[u8]) -> Vec<DieValue> {
        values.iter().map(|&f| DieValue::new(f).unwrap()).collect()
    }

    #[test]
    fn test_held_faces_pay_combinations() {
        let config = ScoringConfig::default();
        assert_eq!(score_held_faces(&faces(&[1, 2, 3, 4, 5, 6]), &config).total(), 1500);
        assert_eq!(score_held_faces(&faces(&[5, 5, 2, 2, 3, 3]), &config).total(), 1500);
        assert_eq!(score_held_faces(&faces(&[1, 1, 1, 4, 4, 4]), &config).total(), 1400);
        assert_eq!(score_held_faces(&faces(&[5, 5, 5]), &config).total(), 500);
    }

    #[test]
    fn test_held_faces_pay_loose_fives() {
        let config = ScoringConfig::default();
        let breakdown = score_held_faces(&faces(&[2, 2, 2, 5, 5, 1]), &config);
        assert_eq!(breakdown.total(), 200 + 100 + 100);
        assert!(breakdown
            .combos
            .iter()
            .any(|c| c.combo == Combo::SingleFives { count: 2 }));
        assert_eq!(score_held_faces(&[], &config).total(), 0);
    }

    #[test]
    fn test_combo_labels() {
        assert_eq!(Combo::OfAKind { face: 4, count: 3 }.label(), "3 x 4s");
        assert_eq!(Combo::SingleOnes { count: 1 }.label(), "Single 1");
        assert_eq!(Combo::SingleOnes { count: 2 }.label(), "2 single 1s");
        assert_eq!(Combo::SingleFives { count: 1 }.label(), "Single 5");
    }

    fn faces_strategy() -> impl Strategy<Value = [u8; 6]> {
        prop::array::uniform6(1u8..=6)
    }

    proptest! {
        #[test]
        fn prop_evaluate_is_idempotent(faces in faces_strategy(), mask in 0usize..64) {
            let r = roll(faces);
            let indices: Vec<usize> = (0..6).filter(|i| mask & (1 << i) != 0).collect();
            let held = HeldSet::from_indices(&indices).unwrap();
            let config = ScoringConfig::default();

            let first = evaluate(&r, &held, &config);
            let second = evaluate(&r, &held, &config);
            prop_assert_eq!(first, second);
            prop_assert_eq!(r.faces(), faces);
        }

        #[test]
        fn prop_all_scored_matches_definition(faces in faces_strategy(), mask in 0usize..64) {
            let indices: Vec<usize> = (0..6).filter(|i| mask & (1 << i) != 0).collect();
            let held = HeldSet::from_indices(&indices).unwrap();
            let result = evaluate(&roll(faces), &held, &ScoringConfig::default());

            let expected = faces.iter().enumerate().all(|(i, &f)| {
                held.contains(i) || f == 1 || faces.iter().filter(|&&g| g == f).count() >= 3
            });
            prop_assert_eq!(result.all_scored, expected);
        }

        #[test]
        fn prop_score_matches_breakdown(faces in faces_strategy()) {
            let result = evaluate(&roll(faces), &HeldSet::new(), &ScoringConfig::default());
            prop_assert_eq!(result.score, result.breakdown.total());
            prop_assert_eq!(result.score % 50, 0);
        }
    }
}
