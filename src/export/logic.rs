// src/export/logic.rs

use crate::core::calculator::summary::summarize;
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{
    metrics_headers, metrics_rows, metrics_to_row, trend_headers, trend_rows, trend_to_row,
};
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use crate::models::scenario::Scenario;
use crate::ui::messages::warning;
use chrono::Local;
use serde_json::Value;
use std::path::Path;

/// High-level report export.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the metrics snapshot, or the trend series when `trend` is set.
    ///
    /// - `format`: csv | json | xlsx | pdf
    /// - `file`: absolute path of the output file
    /// - `force`: overwrite without asking
    pub fn export(
        scenario: &Scenario,
        format: ExportFormat,
        file: &str,
        trend: bool,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let forecast = Core::evaluate(scenario);

        if trend {
            if forecast.trend.is_empty() {
                warning("No hours logged yet: the trend series is empty.");
            }

            let rows = trend_rows(&forecast.trend);
            match format {
                ExportFormat::Csv => export_csv(&rows, path)?,
                ExportFormat::Json => {
                    let chart: Vec<Value> = forecast
                        .trend
                        .iter()
                        .map(|p| Value::Object(p.chart_row()))
                        .collect();
                    export_json(&chart, path)?
                }
                ExportFormat::Xlsx => {
                    let table: Vec<Vec<String>> = rows.iter().map(trend_to_row).collect();
                    export_xlsx("Trend", &trend_headers(), &table, path)?
                }
                ExportFormat::Pdf => {
                    let table: Vec<Vec<String>> = rows.iter().map(trend_to_row).collect();
                    let summary = format!(
                        "{} logged hour(s) out of {} planned.",
                        forecast.hours_logged, forecast.total_planned_hours
                    );
                    export_pdf(&build_pdf_title("Pace trend"), &summary, &trend_headers(), &table, path)?
                }
            }
            return Ok(());
        }

        let rows = metrics_rows(&forecast);
        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
            ExportFormat::Xlsx => {
                let table: Vec<Vec<String>> = rows.iter().map(metrics_to_row).collect();
                export_xlsx("Metrics", &metrics_headers(), &table, path)?
            }
            ExportFormat::Pdf => {
                let table: Vec<Vec<String>> = rows.iter().map(metrics_to_row).collect();
                let s = summarize(&forecast);
                let summary = format!(
                    "Demand fulfilled: {:.1}% ({:.0} of {:.0}). Hours remaining: {} of {}. \
                     Status: {} OK, {} warning, {} critical. Consolidated SES pace: {:.1} u/h.",
                    s.global_progress_pct,
                    s.global_completed,
                    s.global_demand,
                    forecast.remaining_global_hours,
                    forecast.total_planned_hours,
                    s.ok,
                    s.warning,
                    s.critical,
                    s.avg_ses
                );
                export_pdf(&build_pdf_title("Production report"), &summary, &metrics_headers(), &table, path)?
            }
        }

        Ok(())
    }
}

/// PDF title carrying the generation date.
fn build_pdf_title(kind: &str) -> String {
    format!("{kind} - {}", Local::now().format("%Y-%m-%d %H:%M"))
}
