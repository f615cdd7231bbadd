pub mod app;
pub mod event;
pub mod theme;
pub mod ui;

pub use app::App;
pub use theme::ThemeColors;

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use event::{Event, EventHandler};

use crate::dice::DiceRoller;

/// Run the game until the player quits. `tick` drives the roll animation.
pub async fn run_tui<R: DiceRoller>(mut app: App<R>, tick: Duration) -> anyhow::Result<()> {
    // Buffer stderr while TUI is active to prevent output corrupting the display
    crate::stderr_buffer::activate();

    // Init terminal (sets up panic hooks automatically)
    let mut terminal = ratatui::init();
    let mut events = EventHandler::new(tick);

    tracing::debug!(tick = ?tick, "tui started");

    let result = loop {
        if let Err(e) = terminal.draw(|frame| ui::draw(frame, &app)) {
            break Err(e.into());
        }

        match events.next().await {
            Some(Event::Key(key)) => handle_key_event(&mut app, key),
            Some(Event::Tick) => app.on_tick(),
            None => break Err(anyhow::anyhow!("terminal event stream closed")),
        }

        if app.should_quit {
            break Ok(());
        }
    };

    // Restore terminal
    ratatui::restore();

    // Flush buffered stderr messages now that the terminal is restored
    for msg in crate::stderr_buffer::drain() {
        eprintln!("{}", msg);
    }

    result
}

fn handle_key_event<R: DiceRoller>(app: &mut App<R>, key: KeyEvent) {
    // Quit works in every mode
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
            return;
        }
        _ => {}
    }

    if app.is_rolling() {
        return;
    }

    match app.input_mode {
        app::InputMode::Normal => match key.code {
            // Roll
            KeyCode::Char(' ') | KeyCode::Char('r') => app.start_roll(),

            // Hold / release die 1-6
            KeyCode::Char(c @ '1'..='6') => {
                let index = (c as u8 - b'1') as usize;
                app.toggle_hold(index);
            }

            KeyCode::Char('b') => app.bank(),
            KeyCode::Char('n') => app.reset_round(),

            // Acknowledge the computer turn
            KeyCode::Enter => app.resolve_computer_turn(),

            // Overlays
            KeyCode::Char('?') => app.show_rules(),
            KeyCode::Char('s') => app.show_scoring_table(),
            KeyCode::Char('e') => app.show_breakdown(),

            _ => {}
        },
        app::InputMode::Breakdown => match key.code {
            KeyCode::Esc | KeyCode::Char('e') | KeyCode::Enter => app.dismiss_overlay(),
            _ => {}
        },
        app::InputMode::Rules | app::InputMode::ScoringTable => {
            // Any key exits the overlay
            app.dismiss_overlay();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::dice::roller::ScriptedRoller;
    use crate::game::Phase;

    fn app() -> App<ScriptedRoller> {
        let mut config = Config::default();
        config.animation.frames = 1;
        App::with_roller(&config, ScriptedRoller::new(&[1, 5, 2, 3, 4, 6]))
    }

    fn press(app: &mut App<ScriptedRoller>, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_number_keys_hold_dice() {
        let mut app = app();
        press(&mut app, KeyCode::Char(' '));
        app.on_tick();
        assert_eq!(app.state.phase, Phase::Deciding);

        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('2'));
        assert!(app.state.held.contains(0));
        assert!(app.state.held.contains(1));
        assert_eq!(app.state.round_score(&app.rules.scoring), 150);
    }

    #[test]
    fn test_only_quit_while_rolling() {
        let mut app = app();
        press(&mut app, KeyCode::Char('r'));
        assert!(app.is_rolling());
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.input_mode, app::InputMode::Normal);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = app();
        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn test_overlay_swallows_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.input_mode, app::InputMode::ScoringTable);
        // The roll key only closes the overlay
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.input_mode, app::InputMode::Normal);
        assert!(!app.is_rolling());
    }
}
