use clap::{Parser, Subcommand};
use std::path::PathBuf;

use hot_dice::config::Config;
use hot_dice::dice::{DiceError, HeldSet, RollState};

const EXIT_SUCCESS: i32 = 0;
const EXIT_ERROR: i32 = 1;
const EXIT_INVALID_DICE: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Play a game in the terminal (default if no subcommand)
    Play,
    /// Score a single roll of six dice
    Score {
        /// Six die faces, 1-6
        #[arg(num_args = 6, required = true)]
        dice: Vec<u8>,

        /// Held dice as 0-based positions, comma separated (e.g. 0,2)
        #[arg(long, value_delimiter = ',')]
        held: Option<Vec<usize>>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Create a config file interactively
    Init {
        /// Overwrite an existing config without asking
        #[arg(long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "hot-dice")]
#[command(about = "Farkle-style dice game with a pure scoring engine", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/hot-dice/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Seed the dice for a reproducible game
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Play);
    let config_path = cli.config.map(PathBuf::from);

    hot_dice::logging::init(cli.verbose);

    match command {
        Commands::Init { force } => {
            if let Err(e) = hot_dice::config::run_init_wizard(config_path, force) {
                eprintln!("Init failed: {:#}", e);
                std::process::exit(EXIT_CONFIG);
            }
        }
        Commands::Score { dice, held, json } => {
            let config = load_config_or_exit(config_path);
            let held = held.unwrap_or_default();
            match score_command(&config, &dice, &held, json) {
                Ok(output) => println!("{}", output),
                Err(e) => {
                    if e.downcast_ref::<DiceError>().is_some() {
                        eprintln!("Invalid dice: {}", e);
                        std::process::exit(EXIT_INVALID_DICE);
                    }
                    eprintln!("Error: {:#}", e);
                    std::process::exit(EXIT_ERROR);
                }
            }
        }
        Commands::Play => {
            let config = load_config_or_exit(config_path);
            let tick = match config.animation.interval() {
                Ok(tick) => tick,
                Err(e) => {
                    eprintln!("Config error: {:#}", e);
                    std::process::exit(EXIT_CONFIG);
                }
            };
            let app = hot_dice::tui::App::new(&config, cli.seed);
            if let Err(e) = hot_dice::tui::run_tui(app, tick).await {
                eprintln!("TUI error: {:#}", e);
                std::process::exit(EXIT_ERROR);
            }
        }
    }

    std::process::exit(EXIT_SUCCESS);
}

/// Load and validate the config, exiting with `EXIT_CONFIG` on any problem.
fn load_config_or_exit(path: Option<PathBuf>) -> Config {
    let config = match hot_dice::config::load_config(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(errors) = hot_dice::config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    tracing::debug!(
        win_target = config.rules.win_target,
        opening_minimum = config.rules.opening_minimum,
        "config ready"
    );
    config
}

/// Evaluate one roll and render it as text or JSON.
fn score_command(
    config: &Config,
    faces: &[u8],
    held: &[usize],
    json: bool,
) -> anyhow::Result<String> {
    let roll = RollState::from_faces(faces)?;
    let held = HeldSet::from_indices(held)?;

    let evaluation = hot_dice::scoring::evaluate(&roll, &held, &config.scoring);
    let held_score = hot_dice::scoring::held_dice_score(&roll, &held, &config.scoring);
    let report = hot_dice::output::ScoreReport::new(roll, held, evaluation, held_score);

    if json {
        Ok(serde_json::to_string_pretty(&report)?)
    } else {
        let use_colors = hot_dice::output::should_use_colors();
        Ok(hot_dice::output::format_report(&report, use_colors))
    }
}
