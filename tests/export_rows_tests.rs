mod common;
use common::{product, single_product_log};

use industrack::core::calculator::flatten::flatten;
use industrack::core::calculator::forecast::forecast;
use industrack::export::model::{metrics_headers, metrics_rows, metrics_to_row};
use industrack::models::schedule::ScheduleConfig;

fn gap_column() -> usize {
    metrics_headers()
        .iter()
        .position(|h| *h == "gap h")
        .expect("gap column")
}

#[test]
fn test_report_gap_keeps_sign() {
    // 14 planned hours, pace 10 with 5 extra: 13.5 h needed, 0.5 h ahead
    let schedule = ScheduleConfig::new(2, 5, 1, 4);
    let fc = forecast(&schedule, &[product("a", 10.0).with_extra_production(5.0)], &[]);

    let row = metrics_to_row(&metrics_rows(&fc)[0]);
    assert_eq!(row[gap_column()], "-0.5");
}

#[test]
fn test_report_gap_late_and_never() {
    let schedule = ScheduleConfig::new(1, 10, 0, 0);
    let log = single_product_log("a", &[5, 0]);
    let events = flatten(&log, &["a".to_string(), "b".to_string()]);

    let products = vec![
        product("a", 10.0),
        product("b", 10.0).with_manual_demand(50.0),
    ];
    let rows = metrics_rows(&forecast(&schedule, &products, &events));

    // a: 95 left at SES 4.0 = 23.75 h against 8 left
    assert_eq!(metrics_to_row(&rows[0])[gap_column()], "+15.8");
    // b: nothing produced
    assert_eq!(metrics_to_row(&rows[1])[gap_column()], "never");
}
