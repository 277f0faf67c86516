//! Unified application error type.
//! Every fallible module (config, scenario, cli, export) returns AppError.
//! The forecasting engine itself never fails: degenerate arithmetic is
//! normalised to 0 instead of being reported.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Data entry
    // ---------------------------
    #[error("Invalid shift: {0} (use 1 or 2)")]
    InvalidShift(String),

    #[error("Invalid hour slot: {0}")]
    InvalidSlot(String),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),

    #[error("Invalid product definition: {0}")]
    InvalidProductSpec(String),

    #[error("Unknown product: {0}")]
    UnknownProduct(String),

    // ---------------------------
    // Scenario
    // ---------------------------
    #[error("Invalid scenario: {0}")]
    InvalidScenario(String),

    #[error("Scenario file not found: {0} (run `industrack setup` first)")]
    ScenarioNotFound(String),

    #[error("Scenario file already exists: {0} (use --force to start a new run)")]
    ScenarioExists(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
