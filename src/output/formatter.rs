use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::IsTerminal;

use crate::dice::{HeldSet, RollState};
use crate::scoring::{Evaluation, ScoreBreakdown};

/// Everything `hot-dice score` reports about one roll.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub dice: RollState,
    pub held: HeldSet,
    pub score: u32,
    pub all_scored: bool,
    pub held_score: u32,
    pub breakdown: ScoreBreakdown,
}

impl ScoreReport {
    pub fn new(dice: RollState, held: HeldSet, evaluation: Evaluation, held_score: u32) -> Self {
        Self {
            dice,
            held,
            score: evaluation.score,
            all_scored: evaluation.all_scored,
            held_score,
            breakdown: evaluation.breakdown,
        }
    }
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format points with thousands separators (10000 -> "10,000")
pub fn format_points(points: u32) -> String {
    let digits = points.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Dice on one line; held dice are bracketed: "[1] 2 3 [5] 6 6"
pub fn format_dice(roll: &RollState, held: &HeldSet, use_colors: bool) -> String {
    roll.iter()
        .enumerate()
        .map(|(index, die)| {
            if held.contains(index) {
                let text = format!("[{}]", die);
                if use_colors {
                    text.yellow().bold().to_string()
                } else {
                    text
                }
            } else {
                die.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// One line per scoring combination, points right-aligned.
pub fn format_breakdown(breakdown: &ScoreBreakdown, use_colors: bool) -> String {
    if breakdown.combos.is_empty() {
        return "  (no scoring combinations)".to_string();
    }

    breakdown
        .combos
        .iter()
        .map(|c| {
            let label = format!("{:<16}", c.combo.label());
            let points = format!("{:>7}", format_points(c.points));
            if use_colors {
                format!("  {}{}", label, points.green())
            } else {
                format!("  {}{}", label, points)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Multi-line report for `hot-dice score`
pub fn format_report(report: &ScoreReport, use_colors: bool) -> String {
    let dice = format_dice(&report.dice, &report.held, use_colors);
    let score = format_points(report.score);
    let hot = if report.all_scored { "yes" } else { "no" };
    let breakdown = format_breakdown(&report.breakdown, use_colors);

    if use_colors {
        format!(
            "Dice: {}\nScore: {}\nAll dice scored: {}\nHeld dice: {}\n{}",
            dice,
            score.bold(),
            hot.cyan(),
            format_points(report.held_score),
            breakdown
        )
    } else {
        format!(
            "Dice: {}\nScore: {}\nAll dice scored: {}\nHeld dice: {}\n{}",
            dice,
            score,
            hot,
            format_points(report.held_score),
            breakdown
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{evaluate, ScoringConfig};

    fn report(faces: [u8; 6], held: &[usize]) -> ScoreReport {
        let roll = RollState::from_faces(&faces).unwrap();
        let held = HeldSet::from_indices(held).unwrap();
        let evaluation = evaluate(&roll, &held, &ScoringConfig::default());
        ScoreReport::new(roll, held, evaluation, 0)
    }

    #[test]
    fn test_format_points() {
        assert_eq!(format_points(0), "0");
        assert_eq!(format_points(950), "950");
        assert_eq!(format_points(1500), "1,500");
        assert_eq!(format_points(10000), "10,000");
        assert_eq!(format_points(1234567), "1,234,567");
    }

    #[test]
    fn test_format_dice_brackets_held() {
        let roll = RollState::from_faces(&[1, 2, 3, 4, 5, 6]).unwrap();
        let held = HeldSet::from_indices(&[0, 4]).unwrap();
        assert_eq!(format_dice(&roll, &held, false), "[1] 2 3 4 [5] 6");
    }

    #[test]
    fn test_format_report_plain() {
        let text = format_report(&report([1, 1, 1, 2, 3, 4], &[]), false);
        assert!(text.contains("Dice: 1 1 1 2 3 4"));
        assert!(text.contains("Score: 1,000"));
        assert!(text.contains("All dice scored: no"));
        assert!(text.contains("3 x 1s"));
    }

    #[test]
    fn test_format_report_held_line() {
        let roll = RollState::from_faces(&[1, 2, 3, 4, 5, 6]).unwrap();
        let held = HeldSet::from_indices(&[0, 1, 2, 3, 4, 5]).unwrap();
        let evaluation = evaluate(&roll, &held, &ScoringConfig::default());
        let text = format_report(&ScoreReport::new(roll, held, evaluation, 1500), false);
        assert!(text.contains("Held dice: 1,500"));
    }

    #[test]
    fn test_format_breakdown_empty() {
        let text = format_breakdown(&ScoreBreakdown::default(), false);
        assert_eq!(text, "  (no scoring combinations)");
    }

    #[test]
    fn test_report_json() {
        let json = serde_json::to_value(report([2, 2, 4, 4, 6, 6], &[1])).unwrap();
        assert_eq!(json["score"], 1500);
        assert_eq!(json["held"], serde_json::json!([1]));
        assert_eq!(json["dice"], serde_json::json!([2, 2, 4, 4, 6, 6]));
        assert_eq!(json["breakdown"]["combos"][0]["combo"]["kind"], "three_pairs");
    }
}
