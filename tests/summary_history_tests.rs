mod common;
use common::{approx, product, qty, single_product_log, slot};

use industrack::core::calculator::flatten::flatten;
use industrack::core::calculator::forecast::forecast;
use industrack::core::calculator::history::hourly_history;
use industrack::core::calculator::summary::{completion_pct, summarize};
use industrack::models::production_log::ProductionLog;
use industrack::models::schedule::ScheduleConfig;

fn ids(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_health_score_and_counts() {
    // 10 planned hours, nothing logged
    let schedule = ScheduleConfig::new(1, 10, 0, 0);
    let products = vec![
        product("a", 10.0),
        product("b", 10.0).with_manual_demand(500.0),
    ];

    let s = summarize(&forecast(&schedule, &products, &[]));

    assert_eq!(s.ok, 1);
    assert_eq!(s.warning, 0);
    assert_eq!(s.critical, 1);
    assert_eq!(s.health_score, 50.0);
    assert_eq!(s.alerting, vec!["B".to_string()]);
    assert_eq!(s.global_demand, 600.0);
    assert_eq!(s.hours_progress_pct, 0.0);
}

#[test]
fn test_progress_with_zero_demand() {
    let schedule = ScheduleConfig::default();
    let fc = forecast(&schedule, &[product("a", 0.0)], &[]);
    let s = summarize(&fc);

    assert_eq!(s.global_progress_pct, 0.0);
    assert_eq!(s.hours_progress_pct, 0.0);
    assert_eq!(completion_pct(&fc.metrics[0]), 0.0);
    assert_eq!(s.health_score, 100.0);
}

#[test]
fn test_summary_without_products() {
    let s = summarize(&forecast(&ScheduleConfig::new(1, 4, 0, 0), &[], &[]));
    assert_eq!(s.health_score, 100.0);
    assert_eq!(s.avg_ses, 0.0);
    assert!(s.alerting.is_empty());
}

#[test]
fn test_progress_and_consolidated_pace() {
    let schedule = ScheduleConfig::new(1, 4, 0, 0);
    let log = single_product_log("a", &[10, 20]);
    let fc = forecast(&schedule, &[product("a", 10.0)], &flatten(&log, &ids(&["a"])));
    let s = summarize(&fc);

    assert_eq!(s.global_progress_pct, 75.0);
    assert_eq!(s.hours_progress_pct, 50.0);
    assert!(approx(s.avg_ses, 12.0));
}

#[test]
fn test_hourly_history_efficiency() {
    let mut log = ProductionLog::new();
    log.upsert(slot(1, 1, 1), qty(&[("a", 5), ("z", 3)]));
    log.upsert(slot(1, 1, 2), qty(&[("a", 0)]));
    log.upsert(slot(1, 2, 1), qty(&[("a", 20), ("z", 0)]));

    let products = vec![product("a", 10.0), product("z", 0.0)];
    let history = hourly_history(&products, &flatten(&log, &ids(&["a", "z"])));

    assert_eq!(history.rows.len(), 3);

    let first = &history.rows[0];
    assert_eq!(first.label, "D1-T1-H1");
    assert_eq!(first.total_quantity, 8.0);
    assert_eq!(first.total_planned, 10.0);
    assert_eq!(first.products[0].efficiency_pct, 50.0);
    // planned 0 is treated as 1
    assert_eq!(first.products[1].efficiency_pct, 300.0);

    assert_eq!(history.rows[1].products[0].efficiency_pct, 0.0);
    assert_eq!(history.rows[2].label, "D1-T2-H1");
    assert_eq!(history.rows[2].products[0].efficiency_pct, 200.0);

    assert_eq!(history.idle[0].idle_hours, 1);
    assert_eq!(history.idle[1].idle_hours, 2);
}
