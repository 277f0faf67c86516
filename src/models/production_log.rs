use crate::errors::{AppError, AppResult};
use std::collections::BTreeMap;
use std::fmt;

use super::shift::Shift;

/// Composite key of one logged hour. The derived ordering is the
/// chronological one: day, then shift, then hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HourSlot {
    pub day: u32,
    pub shift: Shift,
    pub hour: u32,
}

impl HourSlot {
    pub fn new(day: u32, shift: Shift, hour: u32) -> Self {
        Self { day, shift, hour }
    }

    /// Label used by the hourly history (`D1-T2-H3`).
    pub fn label(&self) -> String {
        format!("D{}-T{}-H{}", self.day, self.shift.number(), self.hour)
    }

    /// Parse a `D1-T2-H3` label (case-insensitive).
    pub fn parse_label(input: &str) -> AppResult<Self> {
        let re = regex::Regex::new(r"^[dD](\d+)-[tT]([12])-[hH](\d+)$")
            .map_err(|e| AppError::Other(e.to_string()))?;

        let caps = re
            .captures(input.trim())
            .ok_or_else(|| AppError::InvalidSlot(input.to_string()))?;

        let day = caps[1]
            .parse::<u32>()
            .map_err(|_| AppError::InvalidSlot(input.to_string()))?;
        let shift = Shift::parse(&caps[2])?;
        let hour = caps[3]
            .parse::<u32>()
            .map_err(|_| AppError::InvalidSlot(input.to_string()))?;

        Ok(Self::new(day, shift, hour))
    }
}

impl fmt::Display for HourSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Quantities of one logged hour, keyed by product id.
pub type HourQuantities = BTreeMap<String, u64>;

/// Sparse production grid. A missing slot means "not logged yet",
/// never "zero".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductionLog {
    entries: BTreeMap<HourSlot, HourQuantities>,
}

impl ProductionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whole-hour upsert: replaces every quantity of the slot.
    pub fn upsert(&mut self, slot: HourSlot, quantities: HourQuantities) {
        self.entries.insert(slot, quantities);
    }

    pub fn get(&self, slot: &HourSlot) -> Option<&HourQuantities> {
        self.entries.get(slot)
    }

    /// Quantity of a product in a slot; missing product or slot reads as 0.
    pub fn quantity(&self, slot: &HourSlot, product_id: &str) -> u64 {
        self.entries
            .get(slot)
            .and_then(|q| q.get(product_id))
            .copied()
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (&HourSlot, &HourQuantities)> {
        self.entries.iter()
    }
}

impl FromIterator<(HourSlot, HourQuantities)> for ProductionLog {
    fn from_iter<I: IntoIterator<Item = (HourSlot, HourQuantities)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
