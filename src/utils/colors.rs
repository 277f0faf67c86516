//! ANSI color helper utilities for terminal output.

use crate::models::metrics::AlertStatus;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

pub fn color_for_status(status: AlertStatus) -> &'static str {
    match status {
        AlertStatus::Ok => GREEN,
        AlertStatus::Warning => YELLOW,
        AlertStatus::Critical => RED,
    }
}

/// Gap color:
/// \>0 → red (late)
/// otherwise → green
pub fn color_for_gap(gap: f64) -> &'static str {
    if gap > 0.0 { RED } else { GREEN }
}

pub fn colorize(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}

/// Grey out zero values (idle hours in the history grid).
pub fn colorize_quantity(value: &str, qty: f64) -> String {
    if qty == 0.0 {
        colorize(value, GREY)
    } else {
        value.to_string()
    }
}
