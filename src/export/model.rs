// src/export/model.rs

use crate::core::calculator::forecast::Forecast;
use crate::core::calculator::round1;
use crate::core::calculator::summary::completion_pct;
use crate::models::metrics::{ProductMetrics, TrendPoint};
use serde::Serialize;

/// Flat metrics row shared by every export format.
#[derive(Serialize, Clone, Debug)]
pub struct MetricsExport {
    pub id: String,
    pub name: String,
    pub status: String,
    pub total_demand: f64,
    pub completed: f64,
    pub extra_completed: f64,
    pub remaining: f64,
    pub completion_pct: f64,
    pub ses_rate: f64,
    pub required_target_per_hour: f64,
    pub planned_target: f64,
    pub estimated_hours_gap: f64,
    pub infeasible: bool,
    pub viable: bool,
    pub estimated_final_output: f64,
}

impl From<&ProductMetrics> for MetricsExport {
    fn from(m: &ProductMetrics) -> Self {
        Self {
            id: m.id.clone(),
            name: m.name.clone(),
            status: m.status.as_str().to_string(),
            total_demand: m.total_demand,
            completed: m.completed,
            extra_completed: m.extra_completed,
            remaining: m.remaining,
            completion_pct: round1(completion_pct(m)),
            ses_rate: round1(m.ses_rate),
            required_target_per_hour: round1(m.required_target_per_hour),
            planned_target: m.planned_target,
            estimated_hours_gap: round1(m.estimated_hours_gap),
            infeasible: m.hours_needed.is_infeasible(),
            viable: m.is_viable,
            estimated_final_output: round1(m.estimated_final_output),
        }
    }
}

/// One trend value in long format (one row per hour and product).
#[derive(Serialize, Clone, Debug)]
pub struct TrendExport {
    pub time_label: String,
    pub elapsed_index: u64,
    pub product: String,
    pub ses: f64,
    pub meta: f64,
    pub avg: f64,
}

pub fn metrics_rows(forecast: &Forecast) -> Vec<MetricsExport> {
    forecast.metrics.iter().map(MetricsExport::from).collect()
}

pub(crate) fn trend_rows(trend: &[TrendPoint]) -> Vec<TrendExport> {
    trend
        .iter()
        .flat_map(|p| {
            p.values.iter().map(move |v| TrendExport {
                time_label: p.label.clone(),
                elapsed_index: p.elapsed_index,
                product: v.product_name.clone(),
                ses: v.ses,
                meta: v.meta,
                avg: v.avg,
            })
        })
        .collect()
}

/// Header for XLSX / PDF metrics tables
pub fn metrics_headers() -> Vec<&'static str> {
    vec![
        "product", "status", "demand", "done", "extra", "left", "%", "SES", "required", "planned",
        "gap h", "viable", "final",
    ]
}

pub fn metrics_to_row(m: &MetricsExport) -> Vec<String> {
    // negative = hours ahead of schedule
    let gap = if m.infeasible {
        "never".to_string()
    } else {
        format!("{:+.1}", m.estimated_hours_gap)
    };

    vec![
        m.name.clone(),
        m.status.clone(),
        format!("{:.0}", m.total_demand),
        format!("{:.0}", m.completed),
        format!("{:.0}", m.extra_completed),
        format!("{:.0}", m.remaining),
        format!("{:.1}", m.completion_pct),
        format!("{:.1}", m.ses_rate),
        format!("{:.1}", m.required_target_per_hour),
        format!("{}", m.planned_target),
        gap,
        if m.viable { "yes" } else { "no" }.to_string(),
        format!("{:.1}", m.estimated_final_output),
    ]
}

/// Header for XLSX / PDF trend tables
pub(crate) fn trend_headers() -> Vec<&'static str> {
    vec!["hour", "product", "SES", "required", "average"]
}

pub(crate) fn trend_to_row(t: &TrendExport) -> Vec<String> {
    vec![
        t.time_label.clone(),
        t.product.clone(),
        format!("{:.1}", t.ses),
        format!("{:.1}", t.meta),
        format!("{:.1}", t.avg),
    ]
}
