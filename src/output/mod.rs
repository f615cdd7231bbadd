pub mod formatter;

pub use formatter::{
    format_breakdown, format_dice, format_points, format_report, should_use_colors, ScoreReport,
};
