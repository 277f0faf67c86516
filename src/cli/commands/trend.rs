use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::store::ScenarioStore;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::table::{Column, Table};
use serde_json::Value;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Trend { product, json } = cmd {
        let scenario = ScenarioStore::new(&cfg.scenario).load()?;
        let forecast = Core::evaluate(&scenario);

        let selected: Vec<String> = match product {
            Some(key) => vec![scenario.resolve_product(key)?.name.clone()],
            None => scenario.products.iter().map(|p| p.name.clone()).collect(),
        };

        if *json {
            let keys: Vec<String> = selected
                .iter()
                .flat_map(|n| ["SES", "Meta", "Avg"].map(|series| format!("{n}_{series}")))
                .collect();

            let rows: Vec<Value> = forecast
                .trend
                .iter()
                .map(|p| {
                    let mut row = p.chart_row();
                    row.retain(|k, _| k == "timeLabel" || keys.contains(k));
                    Value::Object(row)
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
            return Ok(());
        }

        if forecast.trend.is_empty() {
            info("No hours logged yet.");
            return Ok(());
        }

        for name in &selected {
            header(name);

            let mut table = Table::new(
                vec![
                    Column::new("HOUR", 6),
                    Column::new("SES", 8),
                    Column::new("REQUIRED", 8),
                    Column::new("AVERAGE", 8),
                ],
                &cfg.separator_char,
            );

            for point in &forecast.trend {
                if let Some(v) = point.value_for(name) {
                    table.add_row(vec![
                        point.label.clone(),
                        format!("{:.1}", v.ses),
                        format!("{:.1}", v.meta),
                        format!("{:.1}", v.avg),
                    ]);
                }
            }

            println!("{}", table.render());
        }
    }
    Ok(())
}
