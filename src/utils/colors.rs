/// ANSI color helper utilities for terminal output.
use crate::models::Level;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Level color:
/// 7 → green
/// 5 → yellow
/// 3 → grey
pub fn color_for_level(level: Level) -> &'static str {
    match level {
        Level::Seven => GREEN,
        Level::Five => YELLOW,
        Level::Three => GREY,
    }
}

/// Rotating palette for chart bars.
pub fn palette(index: usize) -> &'static str {
    const COLORS: [&str; 4] = [BLUE, CYAN, MAGENTA, YELLOW];
    COLORS[index % COLORS.len()]
}
