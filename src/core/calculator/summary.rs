//! Plant-wide roll-up of the per-product snapshot (executive view and
//! printable report).

use serde::Serialize;

use super::forecast::Forecast;
use crate::models::metrics::{AlertStatus, ProductMetrics};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantSummary {
    pub global_demand: f64,
    pub global_completed: f64,
    /// 0 when there is no demand at all.
    pub global_progress_pct: f64,
    pub hours_progress_pct: f64,
    pub ok: usize,
    pub warning: usize,
    pub critical: usize,
    pub health_score: f64,
    pub avg_ses: f64,
    pub alerting: Vec<String>,
}

pub fn summarize(forecast: &Forecast) -> PlantSummary {
    let metrics = &forecast.metrics;
    let n = metrics.len().max(1) as f64;

    let count = |status: AlertStatus| metrics.iter().filter(|m| m.status == status).count();

    let global_demand: f64 = metrics.iter().map(|m| m.total_demand).sum();
    let global_completed: f64 = metrics.iter().map(|m| m.completed).sum();

    let global_progress_pct = if global_demand > 0.0 {
        global_completed / global_demand * 100.0
    } else {
        0.0
    };

    let hours_progress_pct = if forecast.total_planned_hours > 0 {
        forecast.hours_logged as f64 / forecast.total_planned_hours as f64 * 100.0
    } else {
        0.0
    };

    let critical = count(AlertStatus::Critical);

    PlantSummary {
        global_demand,
        global_completed,
        global_progress_pct,
        hours_progress_pct,
        ok: count(AlertStatus::Ok),
        warning: count(AlertStatus::Warning),
        critical,
        health_score: 100.0 - critical as f64 * (100.0 / n),
        avg_ses: metrics.iter().map(|m| m.ses_rate).sum::<f64>() / n,
        alerting: metrics
            .iter()
            .filter(|m| m.status != AlertStatus::Ok)
            .map(|m| m.name.clone())
            .collect(),
    }
}

/// Percent of demand completed for one product, guarded against 0 demand.
pub fn completion_pct(m: &ProductMetrics) -> f64 {
    if m.total_demand > 0.0 {
        m.completed / m.total_demand * 100.0
    } else {
        0.0
    }
}
