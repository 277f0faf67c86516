use crate::core::calculator::flatten::flatten;
use crate::core::calculator::forecast::{Forecast, forecast};
use crate::core::calculator::history::{HourlyHistory, hourly_history};
use crate::core::calculator::summary::{PlantSummary, summarize};
use crate::models::event::ProductionEvent;
use crate::models::scenario::Scenario;

pub struct Core;

impl Core {
    /// Ordered production events of the scenario's log.
    pub fn events(scenario: &Scenario) -> Vec<ProductionEvent> {
        flatten(&scenario.log, &scenario.product_ids())
    }

    /// Flatten + forecast. Pure: calling it twice on the same scenario
    /// yields the same result.
    pub fn evaluate(scenario: &Scenario) -> Forecast {
        let events = Self::events(scenario);
        forecast(&scenario.schedule, &scenario.products, &events)
    }

    pub fn summary(scenario: &Scenario) -> (Forecast, PlantSummary) {
        let fc = Self::evaluate(scenario);
        let summary = summarize(&fc);
        (fc, summary)
    }

    pub fn history(scenario: &Scenario) -> HourlyHistory {
        hourly_history(&scenario.products, &Self::events(scenario))
    }
}

impl Scenario {
    pub fn forecast(&self) -> Forecast {
        Core::evaluate(self)
    }
}
