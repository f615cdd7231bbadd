use super::config::ScoringConfig;
use super::engine::score_held_faces;
use crate::dice::{DieValue, HeldSet, RollState};

/// Round points for the held dice, scored with the full combination rules.
///
/// Like `recompute_held_score` this is rebuilt from the current roll and held
/// set on every toggle, so it replaces the previous subtotal.
pub fn held_dice_score(roll: &RollState, held: &HeldSet, config: &ScoringConfig) -> u32 {
    let dice: Vec<DieValue> = held.iter().filter_map(|index| roll.get(index)).collect();
    score_held_faces(&dice, config).total()
}

/// Points for the currently held dice: single 1s and 5s only.
///
/// Recomputed from scratch on every hold toggle, so the result depends only on
/// the current roll and held set, never on earlier toggles.
pub fn recompute_held_score(roll: &RollState, held: &HeldSet, config: &ScoringConfig) -> u32 {
    held.iter()
        .filter_map(|index| roll.get(index))
        .map(|die| match die {
            DieValue::ONE => config.single_one,
            DieValue::FIVE => config.single_five,
            _ => 0,
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roll(faces: [u8; 6]) -> RollState {
        RollState::from_faces(&faces).unwrap()
    }

    #[test]
    fn test_nothing_held() {
        let score = recompute_held_score(
            &roll([1, 1, 5, 5, 2, 3]),
            &HeldSet::new(),
            &ScoringConfig::default(),
        );
        assert_eq!(score, 0);
    }

    #[test]
    fn test_ones_and_fives() {
        let held = HeldSet::from_indices(&[0, 2, 4]).unwrap();
        let score = recompute_held_score(&roll([1, 1, 5, 5, 2, 3]), &held, &ScoringConfig::default());
        assert_eq!(score, 150);
    }

    #[test]
    fn test_other_faces_worth_nothing() {
        let held = HeldSet::from_indices(&[0, 1, 2]).unwrap();
        let score = recompute_held_score(&roll([4, 4, 4, 5, 2, 3]), &held, &ScoringConfig::default());
        assert_eq!(score, 0);
    }

    #[test]
    fn test_held_dice_score_counts_combinations() {
        let config = ScoringConfig::default();
        let all = HeldSet::from_indices(&[0, 1, 2, 3, 4, 5]).unwrap();
        assert_eq!(held_dice_score(&roll([6, 2, 4, 1, 3, 5]), &all, &config), 1500);
        assert_eq!(held_dice_score(&roll([1, 1, 1, 4, 4, 4]), &all, &config), 1400);

        // Singles still score the same way as recompute_held_score
        let held = HeldSet::from_indices(&[0, 2, 4]).unwrap();
        assert_eq!(held_dice_score(&roll([1, 1, 5, 5, 2, 3]), &held, &config), 150);
    }

    #[test]
    fn test_held_dice_score_follows_held_set() {
        let r = roll([4, 4, 4, 5, 2, 3]);
        let config = ScoringConfig::default();
        let mut held = HeldSet::from_indices(&[0, 1]).unwrap();
        assert_eq!(held_dice_score(&r, &held, &config), 0);
        held.insert(2).unwrap();
        assert_eq!(held_dice_score(&r, &held, &config), 400);
        held.insert(3).unwrap();
        assert_eq!(held_dice_score(&r, &held, &config), 450);
        held.remove(0).unwrap();
        assert_eq!(held_dice_score(&r, &held, &config), 50);
    }

    #[test]
    fn test_replaces_rather_than_accumulates() {
        let r = roll([1, 5, 2, 3, 4, 6]);
        let config = ScoringConfig::default();
        let mut held = HeldSet::new();

        held.toggle(0).unwrap();
        assert_eq!(recompute_held_score(&r, &held, &config), 100);
        held.toggle(1).unwrap();
        assert_eq!(recompute_held_score(&r, &held, &config), 150);
        held.toggle(0).unwrap();
        assert_eq!(recompute_held_score(&r, &held, &config), 50);
        // Same set reached in a different order gives the same score
        held.toggle(0).unwrap();
        assert_eq!(recompute_held_score(&r, &held, &config), 150);
    }
}
