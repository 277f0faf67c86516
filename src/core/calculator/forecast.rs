//! Forecasting engine: one pass over the ordered events produces the
//! running trend series and the final per-product snapshot.
//!
//! The computation is pure. Zero denominators (no hours left, no events,
//! no pace) resolve to 0, except the infeasible hours-needed sentinel.

use serde::Serialize;

use super::round1;
use super::smoothing::Ses;
use crate::models::event::ProductionEvent;
use crate::models::metrics::{AlertStatus, HoursNeeded, ProductMetrics, TrendPoint, TrendValue};
use crate::models::product::ProductDefinition;
use crate::models::schedule::ScheduleConfig;

/// Required pace above `planned * CRITICAL_FACTOR` is critical.
pub const CRITICAL_FACTOR: f64 = 1.5;

/// Number of trailing hourly samples behind `last4_avg`.
const RECENT_WINDOW: usize = 4;

/// Everything the dashboard reads after a recomputation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Forecast {
    pub total_planned_hours: u64,
    pub hours_logged: u64,
    pub remaining_global_hours: u64,
    pub trend: Vec<TrendPoint>,
    pub metrics: Vec<ProductMetrics>,
}

impl Forecast {
    pub fn metrics_for(&self, product_id: &str) -> Option<&ProductMetrics> {
        self.metrics.iter().find(|m| m.id == product_id)
    }
}

/// Running state of one product during the pass.
#[derive(Debug, Default)]
struct Accumulator {
    cumulative: f64,
    ses: Ses,
    samples: Vec<f64>,
}

fn divide_or_zero(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

/// Status precedence: critical, then warning, then ok.
pub fn classify(required_target: f64, planned_target: f64) -> AlertStatus {
    if required_target > planned_target * CRITICAL_FACTOR {
        AlertStatus::Critical
    } else if required_target > planned_target {
        AlertStatus::Warning
    } else {
        AlertStatus::Ok
    }
}

/// Hours still needed at `rate` to produce `remaining`.
pub fn hours_needed(remaining: f64, rate: f64) -> HoursNeeded {
    if remaining <= 0.0 {
        HoursNeeded::NotNeeded
    } else if rate > 0.0 {
        HoursNeeded::Finite(remaining / rate)
    } else {
        HoursNeeded::Infeasible
    }
}

/// Run the engine.
///
/// `events` must be in chronological order (see `flatten`); the elapsed
/// hour of each event is its 1-based position in the slice.
pub fn forecast(
    schedule: &ScheduleConfig,
    products: &[ProductDefinition],
    events: &[ProductionEvent],
) -> Forecast {
    let total_planned_hours = schedule.total_planned_hours();
    let demands: Vec<f64> = products
        .iter()
        .map(|p| p.total_demand(total_planned_hours))
        .collect();

    let mut acc: Vec<Accumulator> = products.iter().map(|_| Accumulator::default()).collect();
    let mut trend = Vec::with_capacity(events.len());

    // -----------------------------
    // Running trend series
    // -----------------------------
    for (idx, event) in events.iter().enumerate() {
        let elapsed = idx as u64 + 1;
        let remaining_global = total_planned_hours.saturating_sub(elapsed) as f64;

        let values = products
            .iter()
            .zip(acc.iter_mut())
            .zip(demands.iter())
            .map(|((product, state), demand)| {
                let qty = event.quantity(&product.id);
                state.cumulative += qty;
                state.samples.push(qty);
                let ses = state.ses.update(qty);

                let remaining = (demand - (state.cumulative + product.extra())).max(0.0);
                let required = divide_or_zero(remaining, remaining_global);

                TrendValue {
                    product_id: product.id.clone(),
                    product_name: product.name.clone(),
                    ses: round1(ses),
                    meta: round1(required),
                    avg: round1(state.cumulative / elapsed as f64),
                }
            })
            .collect();

        trend.push(TrendPoint {
            elapsed_index: elapsed,
            label: format!("H{elapsed}"),
            values,
        });
    }

    // -----------------------------
    // Final snapshot
    // -----------------------------
    let hours_logged = events.len() as u64;
    let remaining_global_hours = total_planned_hours.saturating_sub(hours_logged);
    let remaining_global = remaining_global_hours as f64;

    let metrics = products
        .iter()
        .zip(acc.iter())
        .zip(demands.iter())
        .map(|((product, state), &total_demand)| {
            snapshot(product, state, total_demand, hours_logged, remaining_global)
        })
        .collect();

    Forecast {
        total_planned_hours,
        hours_logged,
        remaining_global_hours,
        trend,
        metrics,
    }
}

fn snapshot(
    product: &ProductDefinition,
    state: &Accumulator,
    total_demand: f64,
    hours_logged: u64,
    remaining_global: f64,
) -> ProductMetrics {
    let extra = product.extra();
    let completed = state.cumulative + extra;
    let remaining = (total_demand - completed).max(0.0);
    let required = divide_or_zero(remaining, remaining_global);
    let avg_per_hour = completed / hours_logged.max(1) as f64;

    // With nothing logged the planned pace stands in for the smoothed one.
    let ses_rate = state.ses.value().unwrap_or(0.0);
    let projection_rate = match state.ses.value() {
        Some(ses) => ses,
        None => product.planned_target_per_hour,
    };

    // Infeasible stays non-viable even when more than 999 hours are left.
    let needed = hours_needed(remaining, projection_rate);
    let estimated_hours_gap = needed.as_hours() - remaining_global;

    let (last4_avg, trend_delta) = recent_trend(&state.samples, state.cumulative);

    ProductMetrics {
        id: product.id.clone(),
        name: product.name.clone(),
        total_demand,
        completed,
        extra_completed: extra,
        remaining,
        required_target_per_hour: required,
        planned_target: product.planned_target_per_hour,
        status: classify(required, product.planned_target_per_hour),
        is_manual_demand: product.is_manual_demand(),
        hours_needed: needed,
        estimated_hours_gap,
        is_viable: !needed.is_infeasible() && estimated_hours_gap <= 0.0,
        avg_per_hour,
        ses_rate,
        last4_avg,
        trend_delta,
        estimated_final_output: completed + projection_rate * remaining_global,
    }
}

/// Mean of the last samples and its percent deviation from the mean of
/// all logged samples (extra production excluded).
fn recent_trend(samples: &[f64], logged_total: f64) -> (f64, f64) {
    if samples.is_empty() {
        return (0.0, 0.0);
    }

    let tail = &samples[samples.len().saturating_sub(RECENT_WINDOW)..];
    let last_avg = tail.iter().sum::<f64>() / tail.len() as f64;
    let overall = logged_total / samples.len() as f64;

    let delta = divide_or_zero(last_avg - overall, overall) * 100.0;
    (last_avg, delta)
}
