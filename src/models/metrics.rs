use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

/// Hours-needed value reported when a product has work left but no pace.
pub const INFEASIBLE_HOURS: f64 = 999.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AlertStatus {
    Ok,
    Warning,
    Critical,
}

impl AlertStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertStatus::Ok => "OK",
            AlertStatus::Warning => "WARNING",
            AlertStatus::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for AlertStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hours a product still needs at its projected pace.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "hours", rename_all = "camelCase")]
pub enum HoursNeeded {
    /// Nothing left to produce.
    NotNeeded,
    Finite(f64),
    /// Work left but zero pace.
    Infeasible,
}

impl HoursNeeded {
    /// Numeric form used for the gap arithmetic (0 / h / 999).
    pub fn as_hours(&self) -> f64 {
        match self {
            HoursNeeded::NotNeeded => 0.0,
            HoursNeeded::Finite(h) => *h,
            HoursNeeded::Infeasible => INFEASIBLE_HOURS,
        }
    }

    pub fn is_infeasible(&self) -> bool {
        matches!(self, HoursNeeded::Infeasible)
    }
}

/// Snapshot metrics of one product, recomputed on every call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductMetrics {
    pub id: String,
    pub name: String,
    pub total_demand: f64,
    pub completed: f64,
    pub extra_completed: f64,
    pub remaining: f64,
    pub required_target_per_hour: f64,
    pub planned_target: f64,
    pub status: AlertStatus,
    pub is_manual_demand: bool,
    pub hours_needed: HoursNeeded,
    pub estimated_hours_gap: f64,
    pub is_viable: bool,
    pub avg_per_hour: f64,
    pub ses_rate: f64,
    pub last4_avg: f64,
    pub trend_delta: f64,
    pub estimated_final_output: f64,
}

/// Per-product values of one trend point, already rounded to one decimal.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendValue {
    pub product_id: String,
    pub product_name: String,
    pub ses: f64,
    pub meta: f64,
    pub avg: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub elapsed_index: u64,
    pub label: String,
    pub values: Vec<TrendValue>,
}

impl TrendPoint {
    pub fn value_for(&self, product_name: &str) -> Option<&TrendValue> {
        self.values.iter().find(|v| v.product_name == product_name)
    }

    /// Flat row for charting: `timeLabel`, `<name>_SES`, `<name>_Meta`, `<name>_Avg`.
    pub fn chart_row(&self) -> Map<String, Value> {
        let mut row = Map::new();
        row.insert("timeLabel".into(), Value::from(self.label.clone()));

        for v in &self.values {
            row.insert(format!("{}_SES", v.product_name), Value::from(v.ses));
            row.insert(format!("{}_Meta", v.product_name), Value::from(v.meta));
            row.insert(format!("{}_Avg", v.product_name), Value::from(v.avg));
        }

        row
    }
}
