/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

use crate::models::Shift;

/// Shift A in blue, shift B in magenta.
pub fn color_for_shift(shift: Shift) -> &'static str {
    match shift {
        Shift::A => BLUE,
        Shift::B => MAGENTA,
    }
}

/// Defects:
/// \>0 → red
/// 0 → reset
pub fn color_for_defects(value: u32) -> &'static str {
    if value > 0 { RED } else { RESET }
}

/// Grey placeholder for empty optional fields.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() {
        format!("{GREY}--{RESET}")
    } else {
        value.to_string()
    }
}
