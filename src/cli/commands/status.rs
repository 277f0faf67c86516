use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::forecast::Forecast;
use crate::core::calculator::summary::{PlantSummary, completion_pct};
use crate::core::logic::Core;
use crate::core::store::ScenarioStore;
use crate::errors::AppResult;
use crate::ui::messages::{header, success, warning};
use crate::utils::colors::{color_for_gap, color_for_status, colorize};
use crate::utils::formatting::{bold, fmt_pct};
use crate::utils::table::{Column, Table};
use crate::utils::{fmt_gap, fmt_num};
use serde_json::json;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { json } = cmd {
        let scenario = ScenarioStore::new(&cfg.scenario).load()?;
        let (forecast, summary) = Core::summary(&scenario);

        if *json {
            let out = json!({ "forecast": forecast, "summary": summary });
            println!("{}", serde_json::to_string_pretty(&out)?);
            return Ok(());
        }

        print_metrics(&forecast, cfg);
        print_summary(&forecast, &summary);
        print_alerts(&forecast);
    }
    Ok(())
}

fn print_metrics(forecast: &Forecast, cfg: &Config) {
    let d = cfg.decimals;

    let mut table = Table::new(
        vec![
            Column::new("PRODUCT", 14),
            Column::new("STATUS", 8),
            Column::new("DONE/DEMAND", 15),
            Column::new("%", 6),
            Column::new("SES", 7),
            Column::new("REQUIRED", 8),
            Column::new("PLANNED", 7),
            Column::new("GAP", 7),
            Column::new("FINAL", 9),
        ],
        &cfg.separator_char,
    );

    for m in &forecast.metrics {
        let demand = if m.is_manual_demand {
            format!("{}*", fmt_num(m.total_demand, 0))
        } else {
            fmt_num(m.total_demand, 0)
        };

        table.add_row(vec![
            m.name.clone(),
            colorize(m.status.as_str(), color_for_status(m.status)),
            format!("{}/{}", fmt_num(m.completed, 0), demand),
            fmt_pct(completion_pct(m)),
            fmt_num(m.ses_rate, d),
            fmt_num(m.required_target_per_hour, d),
            fmt_num(m.planned_target, d),
            colorize(
                &fmt_gap(m.estimated_hours_gap, m.hours_needed),
                color_for_gap(m.estimated_hours_gap),
            ),
            fmt_num(m.estimated_final_output, d),
        ]);
    }

    println!("{}", table.render());

    if forecast.metrics.iter().any(|m| m.is_manual_demand) {
        println!("  * manual demand\n");
    }
}

fn print_summary(forecast: &Forecast, s: &PlantSummary) {
    header("Plant");

    println!(
        "{} {}/{} h logged ({}), {} h remaining",
        bold("Hours:"),
        forecast.hours_logged,
        forecast.total_planned_hours,
        fmt_pct(s.hours_progress_pct),
        forecast.remaining_global_hours
    );
    println!(
        "{} {} of {} ({})",
        bold("Output:"),
        fmt_num(s.global_completed, 0),
        fmt_num(s.global_demand, 0),
        fmt_pct(s.global_progress_pct)
    );
    println!(
        "{} {} OK, {} warning, {} critical (health {:.0}%)",
        bold("Status:"),
        s.ok,
        s.warning,
        s.critical,
        s.health_score
    );
    println!("{} {:.1} u/h\n", bold("Avg SES:"), s.avg_ses);
}

fn print_alerts(forecast: &Forecast) {
    let alerting: Vec<_> = forecast
        .metrics
        .iter()
        .filter(|m| m.status != crate::models::metrics::AlertStatus::Ok)
        .collect();

    if alerting.is_empty() {
        success("All product lines on plan.");
        return;
    }

    for m in alerting {
        warning(format!(
            "{} {}: needs {:.1} u/h (plan {:.1}), SES {:.1}, gap {}",
            m.status,
            m.name,
            m.required_target_per_hour,
            m.planned_target,
            m.ses_rate,
            fmt_gap(m.estimated_hours_gap, m.hours_needed)
        ));
    }
}
