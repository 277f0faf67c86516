use crate::config::Config;
use crate::core::log::journal;
use crate::core::store::ScenarioStore;
use crate::errors::AppResult;
use crate::models::schedule::ScheduleDimension;
use crate::ui::messages::{info, success};

/// Requested changes to one product. `None` leaves the field as is.
#[derive(Debug, Default)]
pub struct ProductChanges {
    pub target: Option<f64>,
    pub demand: Option<Option<f64>>,
    pub extra: Option<Option<f64>>,
}

/// High-level logic of the `product` and `schedule` commands.
pub struct AdjustLogic;

impl AdjustLogic {
    pub fn product(cfg: &Config, store: &ScenarioStore, key: &str, changes: ProductChanges) -> AppResult<()> {
        let mut scenario = store.load()?;
        let id = scenario.resolve_product(key)?.id.clone();

        let mut applied = Vec::new();

        if let Some(target) = changes.target {
            scenario.set_planned_target(&id, target)?;
            applied.push(format!("target={target}"));
        }
        if let Some(demand) = changes.demand {
            scenario.set_manual_demand(&id, demand)?;
            applied.push(match demand {
                Some(d) => format!("demand={d}"),
                None => "demand=auto".to_string(),
            });
        }
        if let Some(extra) = changes.extra {
            scenario.set_extra_production(&id, extra)?;
            applied.push(match extra {
                Some(e) => format!("extra={e}"),
                None => "extra=none".to_string(),
            });
        }

        if applied.is_empty() {
            info("Nothing to update.");
            return Ok(());
        }

        store.save(&scenario)?;

        let message = applied.join(", ");
        journal(cfg, store, "product", &id, &message);
        success(format!("Product {id} updated: {message}"));
        Ok(())
    }

    pub fn schedule(cfg: &Config, store: &ScenarioStore, changes: &[(ScheduleDimension, u32)]) -> AppResult<()> {
        let mut scenario = store.load()?;

        if changes.is_empty() {
            info("Nothing to update.");
            return Ok(());
        }

        for (dim, value) in changes {
            scenario.set_schedule_dimension(*dim, *value);
        }
        store.save(&scenario)?;

        let message = changes
            .iter()
            .map(|(d, v)| format!("{}={v}", d.as_str()))
            .collect::<Vec<_>>()
            .join(", ");
        journal(cfg, store, "schedule", "", &message);
        success(format!(
            "Schedule updated: {message} ({} planned hours)",
            scenario.schedule.total_planned_hours()
        ));
        Ok(())
    }
}
