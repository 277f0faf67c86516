//! Hour-by-hour efficiency and idle-hour statistics.

use serde::Serialize;

use super::round1;
use crate::models::event::ProductionEvent;
use crate::models::product::ProductDefinition;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HourEfficiency {
    pub product_id: String,
    pub quantity: f64,
    /// `quantity / max(1, planned) * 100`, one decimal.
    pub efficiency_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRow {
    pub label: String,
    pub elapsed_index: u64,
    pub total_quantity: f64,
    pub total_planned: f64,
    pub products: Vec<HourEfficiency>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdleStat {
    pub product_id: String,
    pub product_name: String,
    pub idle_hours: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyHistory {
    pub rows: Vec<HistoryRow>,
    pub idle: Vec<IdleStat>,
}

pub fn hourly_history(products: &[ProductDefinition], events: &[ProductionEvent]) -> HourlyHistory {
    let rows = events
        .iter()
        .map(|ev| {
            let items: Vec<HourEfficiency> = products
                .iter()
                .map(|p| {
                    let qty = ev.quantity(&p.id);
                    HourEfficiency {
                        product_id: p.id.clone(),
                        quantity: qty,
                        efficiency_pct: round1(qty / p.planned_target_per_hour.max(1.0) * 100.0),
                    }
                })
                .collect();

            HistoryRow {
                label: ev.slot().label(),
                elapsed_index: ev.elapsed_index,
                total_quantity: items.iter().map(|i| i.quantity).sum(),
                total_planned: products.iter().map(|p| p.planned_target_per_hour).sum(),
                products: items,
            }
        })
        .collect();

    let idle = products
        .iter()
        .map(|p| IdleStat {
            product_id: p.id.clone(),
            product_name: p.name.clone(),
            idle_hours: events.iter().filter(|ev| ev.quantity(&p.id) == 0.0).count(),
        })
        .collect();

    HourlyHistory { rows, idle }
}
