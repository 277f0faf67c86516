//! Formatting utilities used for CLI and export outputs.

use crate::models::metrics::HoursNeeded;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn fmt_num(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}

/// Hours gap as shown on the dashboard cards: `+3.5h` when late,
/// `never` for the infeasible case, `OK` otherwise.
pub fn fmt_gap(gap: f64, needed: HoursNeeded) -> String {
    if needed.is_infeasible() {
        "never".to_string()
    } else if gap > 0.0 {
        format!("+{:.1}h", gap)
    } else {
        "OK".to_string()
    }
}

/// Remove ANSI color sequences.
pub fn strip_ansi(s: &str) -> String {
    match regex::Regex::new(r"\x1B\[[0-9;]*[mK]") {
        Ok(re) => re.replace_all(s, "").into_owned(),
        Err(_) => s.to_string(),
    }
}

pub fn fmt_pct(value: f64) -> String {
    format!("{:.1}%", value)
}
