use crate::config::Config;
use crate::core::log::journal;
use crate::core::store::ScenarioStore;
use crate::errors::{AppError, AppResult};
use crate::models::product::ProductDefinition;
use crate::models::scenario::Scenario;
use crate::models::schedule::ScheduleConfig;
use crate::ui::messages::success;

/// High-level logic of the `setup` command: start a new run.
pub struct SetupLogic;

impl SetupLogic {
    pub fn apply(
        cfg: &Config,
        store: &ScenarioStore,
        schedule: ScheduleConfig,
        product_specs: &[String],
        force: bool,
    ) -> AppResult<Scenario> {
        if store.exists() && !force {
            return Err(AppError::ScenarioExists(store.path.display().to_string()));
        }

        if product_specs.is_empty() {
            return Err(AppError::InvalidProductSpec(
                "at least one --product NAME:TARGET is required".into(),
            ));
        }

        let products = Self::parse_products(product_specs)?;
        let scenario = Scenario::new(schedule, products);
        store.save(&scenario)?;

        let message = format!(
            "{} product(s), {} planned hours",
            scenario.products.len(),
            schedule.total_planned_hours()
        );
        journal(cfg, store, "setup", &store.path.display().to_string(), &message);
        success(format!("New run started: {message}"));

        Ok(scenario)
    }

    /// Parse `NAME:TARGET` specs, assigning `p1`, `p2`, ... ids.
    pub fn parse_products(specs: &[String]) -> AppResult<Vec<ProductDefinition>> {
        let mut products: Vec<ProductDefinition> = Vec::with_capacity(specs.len());

        for spec in specs {
            let id = Scenario::next_product_id(&products);
            let product = ProductDefinition::parse_spec(id, spec)?;

            if products.iter().any(|p| p.name.eq_ignore_ascii_case(&product.name)) {
                return Err(AppError::InvalidProductSpec(format!(
                    "duplicate product name '{}'",
                    product.name
                )));
            }
            products.push(product);
        }

        Ok(products)
    }
}
