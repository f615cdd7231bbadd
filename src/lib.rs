pub mod config;
pub mod dice;
pub mod game;
pub mod logging;
pub mod output;
pub mod scoring;
pub mod stderr_buffer;
pub mod tui;
