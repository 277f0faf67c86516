use crate::config::Config;
use crate::core::log::journal;
use crate::core::store::ScenarioStore;
use crate::errors::{AppError, AppResult};
use crate::models::production_log::{HourQuantities, HourSlot};
use crate::models::scenario::Scenario;
use crate::ui::messages::success;

/// High-level logic of the `record` command (data-entry grid).
pub struct RecordLogic;

impl RecordLogic {
    pub fn apply(
        cfg: &Config,
        store: &ScenarioStore,
        slot: HourSlot,
        entries: &[String],
    ) -> AppResult<Scenario> {
        let mut scenario = store.load()?;
        let quantities = parse_quantities(&scenario, entries)?;

        let total: u64 = quantities.values().sum();
        let replaced = scenario.log.get(&slot).is_some();

        scenario.record_hour(slot, quantities)?;
        store.save(&scenario)?;

        let verb = if replaced { "replaced" } else { "logged" };
        let message = format!("{verb} {total} unit(s)");
        journal(cfg, store, "record", &slot.label(), &message);
        success(format!("{slot}: {message}"));

        Ok(scenario)
    }
}

/// Parse `PRODUCT=QTY` pairs. PRODUCT is an id or a product name;
/// QTY must be a non-negative integer.
pub fn parse_quantities(scenario: &Scenario, entries: &[String]) -> AppResult<HourQuantities> {
    let mut quantities = HourQuantities::new();

    for entry in entries {
        let (key, qty) = entry
            .split_once('=')
            .ok_or_else(|| AppError::InvalidQuantity(format!("'{entry}' (expected PRODUCT=QTY)")))?;

        let product = scenario.resolve_product(key.trim())?;
        let qty = qty
            .trim()
            .parse::<u64>()
            .map_err(|_| AppError::InvalidQuantity(format!("'{}' for {}", qty.trim(), product.name)))?;

        quantities.insert(product.id.clone(), qty);
    }

    Ok(quantities)
}

/// High-level logic of the `select` command: move the entry cursor.
pub fn select(store: &ScenarioStore, slot: HourSlot) -> AppResult<()> {
    let mut scenario = store.load()?;
    scenario.select(slot)?;
    store.save(&scenario)?;
    success(format!("Cursor moved to {slot}"));
    Ok(())
}
