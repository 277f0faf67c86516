use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::store::ScenarioStore;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::colors::colorize_quantity;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::History) {
        let scenario = ScenarioStore::new(&cfg.scenario).load()?;
        let history = Core::history(&scenario);

        if history.rows.is_empty() {
            info("No hours logged yet.");
            return Ok(());
        }

        let mut columns = vec![Column::new("SLOT", 10)];
        for p in &scenario.products {
            columns.push(Column::new(&p.name, 14));
        }
        columns.push(Column::new("TOTAL", 12));

        let mut table = Table::new(columns, &cfg.separator_char);

        for row in &history.rows {
            let mut cells = vec![row.label.clone()];
            for item in &row.products {
                let text = format!("{} ({:.1}%)", item.quantity, item.efficiency_pct);
                cells.push(colorize_quantity(&text, item.quantity));
            }
            cells.push(format!("{}/{}", row.total_quantity, row.total_planned));
            table.add_row(cells);
        }

        println!("{}", table.render());

        header("Idle hours");
        for stat in &history.idle {
            println!(
                "{:<14} {} of {} logged hour(s)",
                stat.product_name,
                stat.idle_hours,
                history.rows.len()
            );
        }
    }
    Ok(())
}
