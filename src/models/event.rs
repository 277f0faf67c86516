use std::collections::BTreeMap;

use super::production_log::HourSlot;
use super::shift::Shift;

/// One logged hour placed on the plant-wide time axis.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductionEvent {
    pub day: u32,
    pub shift: Shift,
    pub hour: u32,
    /// 1-based rank among all logged hours ("the Nth hour logged").
    pub elapsed_index: u64,
    /// One entry per known product; products missing from the log read 0.
    pub quantities: BTreeMap<String, f64>,
}

impl ProductionEvent {
    pub fn slot(&self) -> HourSlot {
        HourSlot::new(self.day, self.shift, self.hour)
    }

    pub fn quantity(&self, product_id: &str) -> f64 {
        self.quantities.get(product_id).copied().unwrap_or(0.0)
    }
}
