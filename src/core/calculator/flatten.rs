//! Log flattener & sequencer: turns the sparse production grid into the
//! chronological list of logged hours every forecast is computed on.

use crate::models::event::ProductionEvent;
use crate::models::production_log::ProductionLog;

/// Flatten the log into events ordered by (day, shift, hour).
///
/// - every slot present in the log is an event, even if all its
///   quantities are zero; slots never entered produce nothing
/// - `elapsed_index` is the 1-based position in that order
/// - each event carries one quantity per known product, 0 when the
///   product is missing from the slot; ids not in `product_ids` are dropped
pub fn flatten(log: &ProductionLog, product_ids: &[String]) -> Vec<ProductionEvent> {
    log.iter()
        .enumerate()
        .map(|(idx, (slot, logged))| ProductionEvent {
            day: slot.day,
            shift: slot.shift,
            hour: slot.hour,
            elapsed_index: idx as u64 + 1,
            quantities: product_ids
                .iter()
                .map(|id| (id.clone(), logged.get(id).copied().unwrap_or(0) as f64))
                .collect(),
        })
        .collect()
}
