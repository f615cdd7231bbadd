use ratatui::layout::Flex;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Cell, Clear, Paragraph, Row, Table};

use crate::dice::{DiceRoller, DICE_COUNT};
use crate::game::{Phase, Player};
use crate::output::format_points;
use crate::scoring::of_a_kind_points;
use crate::tui::app::{App, InputMode};

const DIE_WIDTH: u16 = 9;
const DIE_HEIGHT: u16 = 5;

pub fn draw<R: DiceRoller>(frame: &mut Frame, app: &App<R>) {
    let area = frame.area();

    // Handle very small terminal sizes gracefully
    if area.height < 16 || area.width < DIE_WIDTH * DICE_COUNT as u16 + 2 {
        let msg = Paragraph::new("Terminal too small").alignment(Alignment::Center);
        frame.render_widget(msg, area);
        return;
    }

    // Layout: Title(1) + Scores(4) + Dice(5) + Round(fill) + Status(1)
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Length(DIE_HEIGHT),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(area);

    render_title(frame, chunks[0], app);
    render_scoreboard(frame, chunks[1], app);
    render_dice(frame, chunks[2], app);
    render_round(frame, chunks[3], app);
    render_status_bar(frame, chunks[4], app);

    match app.input_mode {
        InputMode::Rules => render_rules_popup(frame, app),
        InputMode::ScoringTable => render_scoring_popup(frame, app),
        InputMode::Breakdown => render_breakdown_popup(frame, app),
        InputMode::Normal => {}
    }
}

fn render_title<R: DiceRoller>(frame: &mut Frame, area: Rect, app: &App<R>) {
    let theme = &app.theme;
    let left = "Hot Dice";
    let right = format!("first to {}", format_points(app.rules.rules.win_target));
    let padding_len = (area.width as usize).saturating_sub(left.len() + right.len());

    let title = Line::from(vec![
        Span::styled(left, Style::default().fg(theme.title_color).bold()),
        Span::raw(" ".repeat(padding_len)),
        Span::styled(right, Style::default().fg(theme.muted)),
    ]);
    frame.render_widget(Paragraph::new(title), area);
}

fn render_scoreboard<R: DiceRoller>(frame: &mut Frame, area: Rect, app: &App<R>) {
    let target = app.rules.rules.win_target;
    let banked = app.state.banked;
    let on_turn = if app.state.is_human_turn() {
        Player::Human
    } else {
        Player::Computer
    };

    let rows = [
        (Player::Human, app.player_name.as_str(), banked.human),
        (Player::Computer, "Computer", banked.computer),
    ]
    .into_iter()
    .map(|(player, name, score)| {
        let marker = if player == on_turn { "▶" } else { " " };
        let color = app.theme.progress_color(score, target);
        Row::new(vec![
            Cell::from(marker).style(Style::default().fg(app.theme.turn_marker)),
            Cell::from(name.to_string()),
            Cell::from(format!("{:>7}", format_points(score)))
                .style(Style::default().fg(color)),
            Cell::from(progress_bar(app, score, target, 20)),
        ])
    })
    .collect::<Vec<_>>();

    let widths = [
        Constraint::Length(2),
        Constraint::Length(16),
        Constraint::Length(8),
        Constraint::Fill(1),
    ];

    let table = Table::new(rows, widths).block(Block::bordered().title(" Banked "));
    frame.render_widget(table, area);
}

fn progress_bar<R: DiceRoller>(
    app: &App<R>,
    score: u32,
    target: u32,
    width: usize,
) -> Line<'static> {
    let ratio = if target > 0 {
        (f64::from(score) / f64::from(target)).min(1.0)
    } else {
        0.0
    };
    let filled = (ratio * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);
    let bar_color = app.theme.progress_color(score, target);

    let mut spans = Vec::new();
    if filled > 0 {
        spans.push(Span::styled("█".repeat(filled), Style::default().fg(bar_color)));
    }
    if empty > 0 {
        spans.push(Span::styled(
            "░".repeat(empty),
            Style::default().fg(app.theme.bar_empty),
        ));
    }
    Line::from(spans)
}

fn render_dice<R: DiceRoller>(frame: &mut Frame, area: Rect, app: &App<R>) {
    let theme = &app.theme;
    let slots = Layout::horizontal([Constraint::Length(DIE_WIDTH); DICE_COUNT])
        .flex(Flex::Center)
        .split(area);

    let roll = app.displayed_roll();
    let rolling = app.is_rolling();

    for (index, slot) in slots.iter().enumerate() {
        let held = app.state.held.contains(index);
        let face = roll
            .and_then(|r| r.get(index))
            .map(|d| d.to_string())
            .unwrap_or_else(|| "·".to_string());

        let (border, face_style) = if held {
            (theme.die_held_border, theme.die_held_face)
        } else if rolling {
            (theme.die_border, theme.die_rolling)
        } else {
            (theme.die_border, theme.die_face)
        };

        let mut block = Block::bordered()
            .title(format!(" {} ", index + 1))
            .border_style(Style::default().fg(border));
        if held {
            block = block.title_bottom(Line::from(" held ").centered());
        }

        let die = Paragraph::new(vec![Line::from(""), Line::from(Span::styled(face, face_style))])
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(die, *slot);
    }
}

fn render_round<R: DiceRoller>(frame: &mut Frame, area: Rect, app: &App<R>) {
    let theme = &app.theme;
    let scoring = &app.rules.scoring;
    let block = Block::bordered().title(" This round ");

    if let Phase::ComputerTurn(_) = app.state.phase {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Computer's turn",
                Style::default().fg(theme.turn_marker).bold(),
            )),
            Line::from(Span::styled(
                "Press Enter to continue",
                Style::default().fg(theme.muted),
            )),
        ];
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center).block(block),
            area,
        );
        return;
    }

    let label = |text: &'static str| Span::styled(text, Style::default().fg(theme.muted));
    let mut lines = vec![
        Line::from(vec![
            label("Round score   "),
            Span::styled(
                format_points(app.state.round_score(scoring)),
                Style::default().bold(),
            ),
        ]),
        Line::from(vec![
            label("Held dice     "),
            Span::raw(format_points(app.state.held_score(scoring))),
        ]),
        Line::from(vec![
            label("Carried       "),
            Span::raw(format_points(app.state.carried)),
        ]),
    ];

    if !app.is_rolling() {
        if let Some(evaluation) = app.state.evaluation(scoring) {
            lines.push(Line::from(vec![
                label("Roll value    "),
                Span::raw(format_points(evaluation.score)),
            ]));
        }
        if app.state.is_hot_dice(scoring) {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "HOT DICE! Roll again to carry your points",
                theme.hot_dice,
            )));
        }
    }

    if app.state.banked.human == 0 {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(
                "Opening bank needs at least {} points",
                format_points(app.rules.rules.opening_minimum)
            ),
            Style::default().fg(theme.muted),
        )));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_status_bar<R: DiceRoller>(frame: &mut Frame, area: Rect, app: &App<R>) {
    let theme = &app.theme;
    let text = if let Some(flash) = &app.flash {
        let color = if flash.is_error {
            theme.flash_error
        } else {
            theme.flash_success
        };
        Line::from(Span::styled(flash.message.clone(), Style::default().fg(color)))
    } else {
        let hints: &[(&str, &str)] = match app.state.phase {
            Phase::ComputerTurn(_) => &[("Enter", ":continue "), ("q", ":quit")],
            Phase::AwaitingRoll => &[
                ("Space", ":roll "),
                ("?", ":rules "),
                ("s", ":scoring "),
                ("q", ":quit"),
            ],
            Phase::Deciding => &[
                ("Space", ":roll "),
                ("1-6", ":hold "),
                ("b", ":bank "),
                ("n", ":reset "),
                ("e", ":breakdown "),
                ("?", ":rules "),
                ("q", ":quit"),
            ],
        };

        let mut spans = vec![
            Span::styled(app.state.phase.to_string(), Style::default().fg(theme.muted)),
            Span::raw("  "),
        ];
        for (i, (key, label)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(*key, Style::default().fg(theme.status_key_color)));
            spans.push(Span::raw(*label));
        }
        Line::from(spans)
    };

    frame.render_widget(
        Paragraph::new(text).style(Style::default().bg(theme.status_bar_bg)),
        area,
    );
}

/// Create a centered rectangle with fixed width and height
fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    // Clamp dimensions to area bounds
    let width = width.min(area.width);
    let height = height.min(area.height);

    // Calculate centered position
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect {
        x,
        y,
        width,
        height,
    }
}

fn popup<R: DiceRoller>(
    frame: &mut Frame,
    app: &App<R>,
    title: &str,
    width: u16,
    height: u16,
) -> Rect {
    let popup_area = centered_rect_fixed(width, height, frame.area());
    frame.render_widget(Clear, popup_area);

    let block = Block::bordered()
        .title(Span::styled(title, app.theme.popup_title))
        .border_style(Style::default().fg(app.theme.popup_border));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);
    inner
}

fn render_rules_popup<R: DiceRoller>(frame: &mut Frame, app: &App<R>) {
    let inner = popup(frame, app, " How to play ", 60, 17);
    let key = app.theme.popup_key;
    let rules = &app.rules.rules;

    let lines = vec![
        Line::from("Roll six dice and hold the scoring dice you want to keep."),
        Line::from("Held dice add to the round score. Roll the rest again"),
        Line::from("or bank the round."),
        Line::from(""),
        Line::from(format!(
            "Your first bank must be at least {} points.",
            format_points(rules.opening_minimum)
        )),
        Line::from("A roll where the new dice score nothing loses the round."),
        Line::from("Hold all six scoring dice for hot dice: roll all six again."),
        Line::from(format!(
            "First to {} points wins.",
            format_points(rules.win_target)
        )),
        Line::from(""),
        Line::from(vec![Span::styled("Space / r   ", key), Span::raw("Roll")]),
        Line::from(vec![Span::styled("1-6         ", key), Span::raw("Hold or release a die")]),
        Line::from(vec![Span::styled("b           ", key), Span::raw("Bank the round")]),
        Line::from(vec![Span::styled("n           ", key), Span::raw("Reset the round")]),
        Line::from(vec![Span::styled("q / Ctrl-c  ", key), Span::raw("Quit")]),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(app.theme.muted),
        )),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_scoring_popup<R: DiceRoller>(frame: &mut Frame, app: &App<R>) {
    let inner = popup(frame, app, " Scoring ", 44, 16);
    let scoring = &app.rules.scoring;

    let mut entries = vec![
        ("Single 1".to_string(), format_points(scoring.single_one)),
        ("Single 5".to_string(), format_points(scoring.single_five)),
        ("Straight 1-6".to_string(), format_points(scoring.straight)),
        ("Three pairs".to_string(), format_points(scoring.three_pairs)),
    ];
    for face in 1..=6u8 {
        entries.push((
            format!("Three {}s", face),
            format_points(of_a_kind_points(face, 3)),
        ));
    }
    for (count, multiple) in [("Four", 3), ("Five", 4), ("Six", 5)] {
        entries.push((format!("{} of a kind", count), format!("{}x triple", multiple)));
    }

    let rows = entries
        .into_iter()
        .map(|(name, value)| Row::new(vec![Cell::from(name), Cell::from(value)]))
        .collect::<Vec<_>>();

    let table = Table::new(rows, [Constraint::Fill(1), Constraint::Length(10)]);
    frame.render_widget(table, inner);
}

fn render_breakdown_popup<R: DiceRoller>(frame: &mut Frame, app: &App<R>) {
    let Some(evaluation) = app.state.evaluation(&app.rules.scoring) else {
        return;
    };
    let height = evaluation.breakdown.combos.len() as u16 + 6;
    let inner = popup(frame, app, " Roll breakdown ", 40, height);

    let mut lines: Vec<Line> = if evaluation.breakdown.combos.is_empty() {
        vec![Line::from(Span::styled(
            "No scoring combinations",
            Style::default().fg(app.theme.muted),
        ))]
    } else {
        evaluation
            .breakdown
            .combos
            .iter()
            .map(|c| Line::from(format!("{:<22}{:>8}", c.combo.label(), format_points(c.points))))
            .collect()
    };

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("{:<22}{:>8}", "Total", format_points(evaluation.score)),
        Style::default().bold(),
    )));
    let all_scored = if evaluation.all_scored { "yes" } else { "no" };
    lines.push(Line::from(format!("All dice scoring: {}", all_scored)));

    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::dice::roller::ScriptedRoller;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render(app: &App<ScriptedRoller>, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app() -> App<ScriptedRoller> {
        let mut config = Config::default();
        config.animation.frames = 1;
        App::with_roller(&config, ScriptedRoller::new(&[1, 1, 1, 5, 5, 5]))
    }

    #[test]
    fn test_too_small() {
        let screen = render(&app(), 20, 5);
        assert!(screen.contains("Terminal too small"));
    }

    #[test]
    fn test_draw_after_roll() {
        let mut app = app();
        app.start_roll();
        app.on_tick();
        app.toggle_hold(0);

        let screen = render(&app, 80, 24);
        assert!(screen.contains("Hot Dice"));
        assert!(screen.contains("first to 10,000"));
        assert!(screen.contains("Round score"));
        assert!(screen.contains("held"));
        assert!(screen.contains("Roll value    1,500"));
    }

    #[test]
    fn test_draw_computer_turn_prompt() {
        let mut app =
            App::with_roller(&Config::default(), ScriptedRoller::new(&[2, 3, 4, 6, 2, 3]));
        app.frames_per_roll = 1;
        app.start_roll();
        app.on_tick();
        app.flash = None;

        let screen = render(&app, 80, 24);
        assert!(screen.contains("Computer's turn"));
        assert!(screen.contains("Enter:continue"));
    }

    #[test]
    fn test_draw_overlays() {
        let mut app = app();
        app.show_scoring_table();
        assert!(render(&app, 80, 24).contains("Three 2s"));

        app.show_rules();
        assert!(render(&app, 80, 24).contains("How to play"));
    }
}
