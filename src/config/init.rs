use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::config::{get_config_path, AnimationConfig, Config};
use crate::scoring::{RulesConfig, ScoringConfig};

/// Prompt user with a message and return their trimmed input.
fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    std::io::stdout()
        .flush()
        .context("Failed to flush stdout")?;
    let mut input = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read input")?;
    Ok(input.trim().to_string())
}

/// Prompt user with a message and a default value. Returns default if input is empty.
fn prompt_with_default(message: &str, default: &str) -> Result<String> {
    let input = prompt(&format!("{} [{}]: ", message, default))?;
    if input.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(input)
    }
}

/// Prompt user with a yes/no question. Returns bool based on input and default.
fn prompt_yes_no(message: &str, default_yes: bool) -> Result<bool> {
    let hint = if default_yes { "Y/n" } else { "y/N" };
    let input = prompt(&format!("{} [{}]: ", message, hint))?;
    let input = input.to_lowercase();
    if input.is_empty() {
        Ok(default_yes)
    } else {
        Ok(input == "y" || input == "yes")
    }
}

/// Prompt until the user enters a point value that is a positive multiple of 50.
fn prompt_points(message: &str, default: u32) -> Result<u32> {
    loop {
        let input = prompt_with_default(message, &default.to_string())?;
        match parse_points(&input) {
            Ok(v) => return Ok(v),
            Err(e) => println!("  Invalid: {}. Try again.", e),
        }
    }
}

fn parse_points(input: &str) -> Result<u32, String> {
    match input.trim().parse::<u32>() {
        Ok(0) => Err("must be positive".to_string()),
        Ok(v) if v % 50 != 0 => Err("must be a multiple of 50".to_string()),
        Ok(v) => Ok(v),
        Err(_) => Err("must be a whole number".to_string()),
    }
}

/// Run the interactive init wizard to create a config file.
///
/// With `force`, an existing file is overwritten without asking.
pub fn run_init_wizard(default_path: Option<PathBuf>, force: bool) -> Result<()> {
    println!();
    println!("Hot Dice Configuration Wizard");
    println!("=============================");
    println!();

    let name = prompt_with_default("Your player name", "You")?;

    let customize = prompt_yes_no("Customize house rules? (n accepts defaults)", false)?;
    let (rules, scoring) = if customize {
        let defaults = RulesConfig::default();
        println!();
        println!("Your first bank of the game must reach the opening minimum.");
        let opening_minimum = prompt_points("Opening minimum", defaults.opening_minimum)?;
        let win_target = loop {
            let target = prompt_points("Points needed to win", defaults.win_target)?;
            if target >= opening_minimum {
                break target;
            }
            println!("  Invalid: must be at least the opening minimum. Try again.");
        };

        let scoring_defaults = ScoringConfig::default();
        println!();
        println!("Flat combinations and single dice. Of-a-kind values are fixed.");
        let scoring = ScoringConfig {
            straight: prompt_points("Straight (1-6)", scoring_defaults.straight)?,
            three_pairs: prompt_points("Three pairs", scoring_defaults.three_pairs)?,
            single_one: prompt_points("Single 1", scoring_defaults.single_one)?,
            single_five: prompt_points("Single 5", scoring_defaults.single_five)?,
        };

        (
            RulesConfig {
                opening_minimum,
                win_target,
            },
            scoring,
        )
    } else {
        (RulesConfig::default(), ScoringConfig::default())
    };

    let default_config_path = default_path.unwrap_or_else(get_config_path);
    println!();
    let path_str = prompt_with_default(
        "Where should the config be saved?",
        &default_config_path.display().to_string(),
    )?;
    let config_path = PathBuf::from(&path_str);

    if config_path.exists() && !force {
        let overwrite = prompt_yes_no(
            &format!(
                "Config already exists at {}. Overwrite?",
                config_path.display()
            ),
            false,
        )?;
        if !overwrite {
            println!("Aborted.");
            return Ok(());
        }
    }

    let config = Config {
        rules,
        scoring,
        animation: AnimationConfig::default(),
        player_name: if name == "You" { None } else { Some(name) },
    };

    let yaml = serde_saphyr::to_string(&config)
        .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    std::fs::write(&config_path, &yaml)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    println!();
    println!("Config written to {}", config_path.display());
    println!("Run `hot-dice` to start a game.");

    Ok(())
}
