use std::time::Instant;

use crate::config::Config;
use crate::dice::{roll_unheld, DiceRoller, HeldSet, RandomRoller, RollState};
use crate::game::{apply, Action, GameRules, GameState, Notice, Phase};
use crate::tui::theme::ThemeColors;

const FLASH_SECS: u64 = 3;

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    Rules,
    ScoringTable,
    Breakdown,
}

/// Cosmetic roll in progress: random faces shown for the rolling dice until
/// the frames run out, then the real roll is made once.
#[derive(Debug, Clone)]
pub struct RollAnimation {
    pub frames_left: u32,
    pub preview: RollState,
}

#[derive(Debug, Clone)]
pub struct Flash {
    pub message: String,
    pub is_error: bool,
    pub shown_at: Instant,
}

pub struct App<R: DiceRoller = RandomRoller> {
    pub state: GameState,
    pub rules: GameRules,
    pub roller: R,
    pub player_name: String,
    pub frames_per_roll: u32,
    pub input_mode: InputMode,
    pub flash: Option<Flash>,
    pub rolling: Option<RollAnimation>,
    pub should_quit: bool,
    pub theme: ThemeColors,
}

impl App<RandomRoller> {
    pub fn new(config: &Config, seed: Option<u64>) -> Self {
        Self::with_roller(config, RandomRoller::new(seed))
    }
}

impl<R: DiceRoller> App<R> {
    pub fn with_roller(config: &Config, roller: R) -> Self {
        Self {
            state: GameState::new(),
            rules: GameRules::from(config),
            roller,
            player_name: config.player_name().to_string(),
            frames_per_roll: config.animation.frames,
            input_mode: InputMode::Normal,
            flash: None,
            rolling: None,
            should_quit: false,
            theme: ThemeColors::dark(),
        }
    }

    /// Dice to draw: the animation preview while rolling, else the real roll.
    pub fn displayed_roll(&self) -> Option<RollState> {
        match &self.rolling {
            Some(animation) => Some(animation.preview),
            None => self.state.roll,
        }
    }

    pub fn is_rolling(&self) -> bool {
        self.rolling.is_some()
    }

    /// Held set the next roll will respect (empty when hot dice will clear it).
    fn held_for_next_roll(&self) -> HeldSet {
        if self.state.is_hot_dice(&self.rules.scoring) {
            HeldSet::new()
        } else {
            self.state.held
        }
    }

    /// Begin a roll. The game state is untouched until the animation ends.
    pub fn start_roll(&mut self) {
        if self.is_rolling() {
            return;
        }
        if !matches!(self.state.phase, Phase::AwaitingRoll | Phase::Deciding) {
            self.show_error("Wait for the computer turn to finish (Enter)".to_string());
            return;
        }
        let held = self.held_for_next_roll();
        let preview = roll_unheld(&mut self.roller, self.state.roll.as_ref(), &held);
        self.rolling = Some(RollAnimation {
            frames_left: self.frames_per_roll,
            preview,
        });
    }

    /// Advance the animation by one frame, making the real roll on the last one.
    pub fn advance_animation(&mut self) {
        let Some(mut animation) = self.rolling.take() else {
            return;
        };

        if animation.frames_left > 1 {
            let held = self.held_for_next_roll();
            animation.preview = roll_unheld(&mut self.roller, self.state.roll.as_ref(), &held);
            animation.frames_left -= 1;
            self.rolling = Some(animation);
        } else {
            self.dispatch(Action::Roll);
        }
    }

    pub fn toggle_hold(&mut self, index: usize) {
        if self.is_rolling() {
            return;
        }
        self.dispatch(Action::ToggleHold(index));
    }

    pub fn bank(&mut self) {
        if self.is_rolling() {
            return;
        }
        self.dispatch(Action::Bank);
    }

    pub fn reset_round(&mut self) {
        if self.is_rolling() {
            return;
        }
        if self.dispatch(Action::ResetRound) {
            self.show_flash("Round reset".to_string());
        }
    }

    pub fn resolve_computer_turn(&mut self) {
        if matches!(self.state.phase, Phase::ComputerTurn(_)) {
            self.dispatch(Action::ResolveComputerTurn);
        }
    }

    /// Run one action through the reducer and surface its notices.
    /// Returns false when the reducer rejected the action.
    fn dispatch(&mut self, action: Action) -> bool {
        match apply(self.state.clone(), action, &self.rules, &mut self.roller) {
            Ok(transition) => {
                self.state = transition.state;
                self.report(&transition.notices);
                true
            }
            Err(e) => {
                self.show_error(capitalize(&e.to_string()));
                false
            }
        }
    }

    fn report(&mut self, notices: &[Notice]) {
        if notices.is_empty() {
            return;
        }
        let message = notices
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        let is_error = notices.iter().any(Notice::is_setback);
        self.flash = Some(Flash {
            message,
            is_error,
            shown_at: Instant::now(),
        });
    }

    pub fn on_tick(&mut self) {
        self.advance_animation();
        self.update_flash();
    }

    pub fn update_flash(&mut self) {
        if let Some(flash) = &self.flash {
            if flash.shown_at.elapsed().as_secs() >= FLASH_SECS {
                self.flash = None;
            }
        }
    }

    pub fn show_flash(&mut self, message: String) {
        self.flash = Some(Flash {
            message,
            is_error: false,
            shown_at: Instant::now(),
        });
    }

    pub fn show_error(&mut self, message: String) {
        self.flash = Some(Flash {
            message,
            is_error: true,
            shown_at: Instant::now(),
        });
    }

    pub fn show_rules(&mut self) {
        self.input_mode = InputMode::Rules;
    }

    pub fn show_scoring_table(&mut self) {
        self.input_mode = InputMode::ScoringTable;
    }

    /// Show the combination breakdown of the dice on the table
    pub fn show_breakdown(&mut self) {
        if self.state.roll.is_some() && !self.is_rolling() {
            self.input_mode = InputMode::Breakdown;
        }
    }

    pub fn dismiss_overlay(&mut self) {
        self.input_mode = InputMode::Normal;
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
