//! Centralized theme module for TUI color constants and styles

use ratatui::prelude::*;

/// Complete color palette for the TUI
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Progress-toward-win colors (traffic light pattern)
    pub progress_high: Color,
    pub progress_mid: Color,
    pub progress_low: Color,
    pub bar_empty: Color,

    // Dice
    pub die_border: Color,
    pub die_face: Style,
    pub die_held_border: Color,
    pub die_held_face: Style,
    pub die_rolling: Style,

    // General colors
    pub muted: Color,
    pub title_color: Color,
    pub turn_marker: Color,
    pub hot_dice: Style,

    // Status bar colors
    pub status_bar_bg: Color,
    pub status_key_color: Color,
    pub flash_success: Color,
    pub flash_error: Color,

    // Popup overlay colors
    pub popup_border: Color,
    pub popup_title: Style,
    pub popup_key: Style,
}

impl ThemeColors {
    pub fn dark() -> Self {
        Self {
            progress_high: Color::Green,
            progress_mid: Color::Yellow,
            progress_low: Color::Red,
            bar_empty: Color::DarkGray,
            die_border: Color::Gray,
            die_face: Style::new().fg(Color::White).bold(),
            die_held_border: Color::Indexed(214),
            die_held_face: Style::new().fg(Color::Indexed(214)).bold(),
            die_rolling: Style::new().fg(Color::DarkGray),
            muted: Color::Gray,
            title_color: Color::Cyan,
            turn_marker: Color::Yellow,
            hot_dice: Style::new().fg(Color::Red).bold(),
            status_bar_bg: Color::Indexed(236),
            status_key_color: Color::Cyan,
            flash_success: Color::Green,
            flash_error: Color::Red,
            popup_border: Color::Cyan,
            popup_title: Style::new().fg(Color::Cyan).bold(),
            popup_key: Style::new().fg(Color::Cyan).bold(),
        }
    }

    /// Color for a banked score based on how close it is to the win target
    pub fn progress_color(&self, score: u32, target: u32) -> Color {
        let percentage = if target > 0 {
            f64::from(score) / f64::from(target) * 100.0
        } else {
            0.0
        };

        if percentage >= 70.0 {
            self.progress_high
        } else if percentage >= 40.0 {
            self.progress_mid
        } else {
            self.progress_low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_color_bands() {
        let theme = ThemeColors::dark();
        assert_eq!(theme.progress_color(8000, 10000), Color::Green);
        assert_eq!(theme.progress_color(4000, 10000), Color::Yellow);
        assert_eq!(theme.progress_color(100, 10000), Color::Red);
        assert_eq!(theme.progress_color(100, 0), Color::Red);
    }
}
