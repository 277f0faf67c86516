use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

use super::product::{ProductDefinition, is_valid_amount};
use super::production_log::{HourQuantities, HourSlot, ProductionLog};
use super::schedule::{ScheduleConfig, ScheduleDimension};
use super::shift::Shift;

/// Full dashboard state: schedule, products, production log and the
/// data-entry cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub schedule: ScheduleConfig,
    pub products: Vec<ProductDefinition>,
    pub log: ProductionLog,
    pub cursor: HourSlot,
}

// ---------------------------
// Wire format
// ---------------------------

#[derive(Debug, Default, Serialize, Deserialize)]
struct DayWire {
    #[serde(default)]
    shift1: BTreeMap<u32, HourQuantities>,
    #[serde(default)]
    shift2: BTreeMap<u32, HourQuantities>,
}

fn default_cursor() -> u32 {
    1
}

fn default_cursor_shift() -> u8 {
    1
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScenarioWire {
    #[serde(default)]
    days_shift1: u32,
    #[serde(default)]
    days_shift2: u32,
    #[serde(default)]
    hours_shift1: u32,
    #[serde(default)]
    hours_shift2: u32,
    models: Vec<ProductDefinition>,
    production_data: BTreeMap<u32, DayWire>,
    #[serde(default = "default_cursor")]
    selected_day: u32,
    #[serde(default = "default_cursor_shift")]
    selected_shift: u8,
    #[serde(default = "default_cursor")]
    selected_hour: u32,
}

impl From<&Scenario> for ScenarioWire {
    fn from(s: &Scenario) -> Self {
        let mut production_data: BTreeMap<u32, DayWire> = BTreeMap::new();

        for (slot, quantities) in s.log.iter() {
            let day = production_data.entry(slot.day).or_default();
            let shift = match slot.shift {
                Shift::First => &mut day.shift1,
                Shift::Second => &mut day.shift2,
            };
            shift.insert(slot.hour, quantities.clone());
        }

        Self {
            days_shift1: s.schedule.days_a,
            days_shift2: s.schedule.days_b,
            hours_shift1: s.schedule.hours_a,
            hours_shift2: s.schedule.hours_b,
            models: s.products.clone(),
            production_data,
            selected_day: s.cursor.day,
            selected_shift: s.cursor.shift.number(),
            selected_hour: s.cursor.hour,
        }
    }
}

impl TryFrom<ScenarioWire> for Scenario {
    type Error = AppError;

    fn try_from(w: ScenarioWire) -> AppResult<Self> {
        validate_products(&w.models)?;

        let selected_shift = Shift::from_number(w.selected_shift).ok_or_else(|| {
            AppError::InvalidScenario(format!("selectedShift must be 1 or 2, got {}", w.selected_shift))
        })?;

        let mut log = ProductionLog::new();
        for (day, data) in w.production_data {
            for (hour, quantities) in data.shift1 {
                log.upsert(HourSlot::new(day, Shift::First, hour), quantities);
            }
            for (hour, quantities) in data.shift2 {
                log.upsert(HourSlot::new(day, Shift::Second, hour), quantities);
            }
        }

        Ok(Self {
            schedule: ScheduleConfig::new(
                w.days_shift1,
                w.hours_shift1,
                w.days_shift2,
                w.hours_shift2,
            ),
            products: w.models,
            log,
            cursor: HourSlot::new(w.selected_day, selected_shift, w.selected_hour),
        })
    }
}

/// Imported products get the same checks as the setup form: unique ids and
/// non-negative amounts.
fn validate_products(products: &[ProductDefinition]) -> AppResult<()> {
    let mut seen = BTreeSet::new();

    for p in products {
        if !seen.insert(p.id.as_str()) {
            return Err(AppError::InvalidScenario(format!("duplicate product id '{}'", p.id)));
        }

        let amounts = [
            ("plannedTargetPerHour", Some(p.planned_target_per_hour)),
            ("manualTotalDemand", p.manual_total_demand),
            ("extraProduction", p.extra_production),
        ];

        for (field, value) in amounts {
            if let Some(v) = value
                && !is_valid_amount(v)
            {
                return Err(AppError::InvalidScenario(format!(
                    "{field} of product '{}' must be a non-negative number, got {v}",
                    p.id
                )));
            }
        }
    }

    Ok(())
}

/// Top-level fields an imported scenario must carry.
const REQUIRED_FIELDS: [&str; 2] = ["models", "productionData"];

impl Scenario {
    /// Start a fresh run: empty log, cursor back on day 1 / shift 1 / hour 1.
    pub fn new(schedule: ScheduleConfig, products: Vec<ProductDefinition>) -> Self {
        Self {
            schedule,
            products,
            log: ProductionLog::new(),
            cursor: HourSlot::new(1, Shift::First, 1),
        }
    }

    /// Import a scenario from its JSON text.
    ///
    /// The payload must be an object with both `models` and `productionData`.
    /// Any failure leaves the caller's current state untouched, since a new
    /// value is returned instead of mutating one.
    pub fn from_json(text: &str) -> AppResult<Self> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| AppError::InvalidScenario(format!("not valid JSON: {e}")))?;

        let obj = value
            .as_object()
            .ok_or_else(|| AppError::InvalidScenario("top level is not an object".into()))?;

        for field in REQUIRED_FIELDS {
            match obj.get(field) {
                None | Some(Value::Null) => {
                    return Err(AppError::InvalidScenario(format!("missing field '{field}'")));
                }
                Some(_) => {}
            }
        }

        let wire: ScenarioWire = serde_json::from_str(text)
            .map_err(|e| AppError::InvalidScenario(e.to_string()))?;

        Scenario::try_from(wire)
    }

    /// Export as pretty-printed JSON (same shape accepted by `from_json`).
    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(&ScenarioWire::from(self))?)
    }

    pub fn product(&self, id: &str) -> AppResult<&ProductDefinition> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::UnknownProduct(id.to_string()))
    }

    fn product_mut(&mut self, id: &str) -> AppResult<&mut ProductDefinition> {
        self.products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::UnknownProduct(id.to_string()))
    }

    /// Resolve a product by id first, then by (case-insensitive) name.
    pub fn resolve_product(&self, key: &str) -> AppResult<&ProductDefinition> {
        self.products
            .iter()
            .find(|p| p.id == key)
            .or_else(|| self.products.iter().find(|p| p.name.eq_ignore_ascii_case(key)))
            .ok_or_else(|| AppError::UnknownProduct(key.to_string()))
    }

    pub fn product_ids(&self) -> Vec<String> {
        self.products.iter().map(|p| p.id.clone()).collect()
    }

    /// Next free `p<N>` identifier.
    pub fn next_product_id(products: &[ProductDefinition]) -> String {
        let mut n = products.len() + 1;
        while products.iter().any(|p| p.id == format!("p{n}")) {
            n += 1;
        }
        format!("p{n}")
    }

    // ---------------------------
    // Discrete updates
    // ---------------------------

    pub fn set_planned_target(&mut self, id: &str, target: f64) -> AppResult<()> {
        self.product_mut(id)?.planned_target_per_hour = target;
        Ok(())
    }

    pub fn set_manual_demand(&mut self, id: &str, demand: Option<f64>) -> AppResult<()> {
        self.product_mut(id)?.manual_total_demand = demand;
        Ok(())
    }

    pub fn set_extra_production(&mut self, id: &str, extra: Option<f64>) -> AppResult<()> {
        self.product_mut(id)?.extra_production = extra;
        Ok(())
    }

    pub fn set_schedule_dimension(&mut self, dim: ScheduleDimension, value: u32) {
        self.schedule.set(dim, value);
    }

    /// Check that a slot lies inside the planned schedule of its shift.
    pub fn validate_slot(&self, slot: &HourSlot) -> AppResult<()> {
        let days = self.schedule.days_for(slot.shift);
        let hours = self.schedule.hours_for(slot.shift);

        if slot.day < 1 || slot.day > days {
            return Err(AppError::InvalidSlot(format!(
                "{slot}: day must be within 1..={days} for shift {}",
                slot.shift.number()
            )));
        }
        if slot.hour < 1 || slot.hour > hours {
            return Err(AppError::InvalidSlot(format!(
                "{slot}: hour must be within 1..={hours} for shift {}",
                slot.shift.number()
            )));
        }
        Ok(())
    }

    /// Whole-hour upsert from the data-entry grid. The previous entry of the
    /// slot, if any, is replaced, not merged. Moves the cursor to the slot.
    pub fn record_hour(&mut self, slot: HourSlot, quantities: HourQuantities) -> AppResult<()> {
        self.validate_slot(&slot)?;

        for id in quantities.keys() {
            self.product(id)?;
        }

        self.log.upsert(slot, quantities);
        self.cursor = slot;
        Ok(())
    }

    pub fn select(&mut self, slot: HourSlot) -> AppResult<()> {
        self.validate_slot(&slot)?;
        self.cursor = slot;
        Ok(())
    }
}
