use crate::config::Config;
use crate::core::store::ScenarioStore;
use crate::errors::AppResult;
use crate::ui::messages::{info, warning};
use crate::utils::formatting::strip_ansi;
use ansi_term::Colour;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

const MAX_OP_WIDTH: usize = 60;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Append one line to the journal (JSON lines).
pub fn ttlog(path: &Path, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let entry = JournalEntry {
        date: Local::now().to_rfc3339(),
        operation: operation.to_string(),
        target: target.to_string(),
        message: message.to_string(),
    };

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", serde_json::to_string(&entry)?)?;
    Ok(())
}

/// Journal a state change. Never blocking: failures only warn.
pub fn journal(cfg: &Config, store: &ScenarioStore, operation: &str, target: &str, message: &str) {
    if !cfg.journal {
        return;
    }

    if let Err(e) = ttlog(&store.journal_path(), operation, target, message) {
        warning(format!("Failed to write journal: {e}"));
    }
}

pub fn read_journal(path: &Path) -> AppResult<Vec<JournalEntry>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    let mut entries = Vec::new();
    for line in content.lines().filter(|l| !l.trim().is_empty()) {
        entries.push(serde_json::from_str(line)?);
    }
    Ok(entries)
}

fn color_for_operation(op: &str) -> Colour {
    match op {
        "setup" => Colour::RGB(255, 153, 51),
        "record" => Colour::Green,
        "product" => Colour::Yellow,
        "schedule" => Colour::Cyan,
        "import" => Colour::Purple,
        "export" => Colour::Blue,
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(store: &ScenarioStore) -> AppResult<()> {
        let entries = read_journal(&store.journal_path())?;

        if entries.is_empty() {
            info("Journal is empty.");
            return Ok(());
        }

        let rows: Vec<(usize, String, &JournalEntry)> = entries
            .iter()
            .enumerate()
            .map(|(i, e)| {
                let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or_else(|_| e.date.clone());
                (i + 1, date, e)
            })
            .collect();

        let op_w = rows
            .iter()
            .map(|(_, _, e)| op_target(e).len())
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);
        let id_w = rows.len().to_string().len();
        let date_w = rows.iter().map(|(_, d, _)| d.len()).max().unwrap_or(0);

        println!("📜 Journal:\n");

        for (id, date, entry) in rows {
            let color = color_for_operation(&entry.operation);

            let mut visible = op_target(entry);
            if visible.chars().count() > MAX_OP_WIDTH {
                visible = visible.chars().take(MAX_OP_WIDTH - 3).collect::<String>() + "...";
            }

            // only the operation word is coloured
            let colored = match visible.split_once(' ') {
                Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                None => color.paint(visible.as_str()).to_string(),
            };

            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).chars().count()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                id,
                date,
                colored,
                padding,
                entry.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}

fn op_target(e: &JournalEntry) -> String {
    if e.target.is_empty() {
        e.operation.clone()
    } else {
        format!("{} ({})", e.operation, e.target)
    }
}
