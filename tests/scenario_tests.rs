mod common;
use common::{product, qty, slot};

use industrack::core::setup::SetupLogic;
use industrack::errors::AppError;
use industrack::models::product::ProductDefinition;
use industrack::models::production_log::HourSlot;
use industrack::models::scenario::Scenario;
use industrack::models::schedule::{ScheduleConfig, ScheduleDimension};
use industrack::models::shift::Shift;

fn sample() -> Scenario {
    Scenario::new(
        ScheduleConfig::new(2, 8, 1, 6),
        vec![product("p1", 10.0), product("p2", 4.0)],
    )
}

// ---------------------------
// Import / export
// ---------------------------

#[test]
fn test_import_minimal_payload() {
    let text = r#"{
        "daysShift1": 1,
        "hoursShift1": 2,
        "models": [
            { "id": "p1", "name": "Widget", "plannedTargetPerHour": 10 }
        ],
        "productionData": {
            "1": { "shift1": { "1": { "p1": 8 }, "2": { "p1": 12 } } }
        }
    }"#;

    let s = Scenario::from_json(text).expect("valid scenario");

    assert_eq!(s.schedule, ScheduleConfig::new(1, 2, 0, 0));
    assert_eq!(s.products.len(), 1);
    assert_eq!(s.products[0].name, "Widget");
    assert_eq!(s.log.len(), 2);
    assert_eq!(s.log.quantity(&slot(1, 1, 2), "p1"), 12);
    assert_eq!(s.cursor, slot(1, 1, 1));

    let fc = s.forecast();
    assert_eq!(fc.metrics[0].completed, 20.0);
}

#[test]
fn test_import_rejects_missing_fields() {
    for text in [
        r#"{ "productionData": {} }"#,
        r#"{ "models": [] }"#,
        r#"{ "models": null, "productionData": {} }"#,
        r#"[1, 2, 3]"#,
        "not json at all",
    ] {
        let err = Scenario::from_json(text).unwrap_err();
        assert!(matches!(err, AppError::InvalidScenario(_)), "{text}: {err}");
    }
}

#[test]
fn test_import_rejects_negative_amounts() {
    for product in [
        r#"{ "id": "p1", "name": "A", "plannedTargetPerHour": -10 }"#,
        r#"{ "id": "p1", "name": "A", "plannedTargetPerHour": 10, "manualTotalDemand": -1 }"#,
        r#"{ "id": "p1", "name": "A", "plannedTargetPerHour": 10, "extraProduction": -50 }"#,
    ] {
        let text = format!(r#"{{ "models": [{product}], "productionData": {{}} }}"#);
        let err = Scenario::from_json(&text).unwrap_err();
        assert!(matches!(err, AppError::InvalidScenario(_)), "{product}: {err}");
    }
}

#[test]
fn test_import_rejects_duplicate_ids() {
    let text = r#"{
        "models": [
            { "id": "p1", "name": "A", "plannedTargetPerHour": 1 },
            { "id": "p1", "name": "B", "plannedTargetPerHour": 2 }
        ],
        "productionData": {}
    }"#;

    let err = Scenario::from_json(text).unwrap_err();
    assert!(matches!(err, AppError::InvalidScenario(ref m) if m.contains("duplicate")));
}

#[test]
fn test_import_accepts_zero_amounts() {
    let text = r#"{
        "models": [
            { "id": "p1", "name": "A", "plannedTargetPerHour": 0, "manualTotalDemand": 0, "extraProduction": 0 }
        ],
        "productionData": {}
    }"#;
    assert!(Scenario::from_json(text).is_ok());
}

#[test]
fn test_import_rejects_bad_cursor_shift() {
    let text = r#"{ "models": [], "productionData": {}, "selectedShift": 3 }"#;
    assert!(matches!(
        Scenario::from_json(text),
        Err(AppError::InvalidScenario(_))
    ));
}

#[test]
fn test_export_then_import_keeps_state() {
    let mut s = sample();
    s.set_manual_demand("p2", Some(75.0)).unwrap();
    s.set_extra_production("p1", Some(3.0)).unwrap();
    s.record_hour(slot(1, 1, 3), qty(&[("p1", 9), ("p2", 2)])).unwrap();
    s.record_hour(slot(1, 2, 1), qty(&[("p1", 0)])).unwrap();

    let text = s.to_json().unwrap();
    assert!(text.contains("\"productionData\""));
    assert!(text.contains("\"manualTotalDemand\""));

    let back = Scenario::from_json(&text).unwrap();
    assert_eq!(back, s);
    assert_eq!(back.forecast(), s.forecast());
}

// ---------------------------
// Data entry
// ---------------------------

#[test]
fn test_record_hour_replaces_whole_hour() {
    let mut s = sample();
    s.record_hour(slot(1, 1, 1), qty(&[("p1", 5), ("p2", 3)])).unwrap();
    s.record_hour(slot(1, 1, 1), qty(&[("p1", 7)])).unwrap();

    assert_eq!(s.log.len(), 1);
    assert_eq!(s.log.quantity(&slot(1, 1, 1), "p1"), 7);
    assert_eq!(s.log.quantity(&slot(1, 1, 1), "p2"), 0);
    assert_eq!(s.cursor, slot(1, 1, 1));
}

#[test]
fn test_record_hour_rejects_out_of_schedule_slots() {
    let mut s = sample();

    for bad in [slot(0, 1, 1), slot(3, 1, 1), slot(1, 1, 9), slot(2, 2, 1), slot(1, 2, 7)] {
        let err = s.record_hour(bad, qty(&[("p1", 1)])).unwrap_err();
        assert!(matches!(err, AppError::InvalidSlot(_)), "{bad}");
    }
    assert!(s.log.is_empty());
}

#[test]
fn test_record_hour_rejects_unknown_product() {
    let mut s = sample();
    let err = s.record_hour(slot(1, 1, 1), qty(&[("p9", 1)])).unwrap_err();
    assert!(matches!(err, AppError::UnknownProduct(_)));
    assert!(s.log.is_empty());
}

#[test]
fn test_select_moves_cursor_only() {
    let mut s = sample();
    s.select(slot(2, 1, 8)).unwrap();
    assert_eq!(s.cursor, slot(2, 1, 8));
    assert!(s.log.is_empty());
    assert!(s.select(slot(2, 2, 1)).is_err());
}

// ---------------------------
// Updates
// ---------------------------

#[test]
fn test_product_updates() {
    let mut s = sample();

    s.set_planned_target("p1", 12.5).unwrap();
    s.set_manual_demand("p1", Some(400.0)).unwrap();
    assert_eq!(s.forecast().metrics[0].total_demand, 400.0);

    s.set_manual_demand("p1", None).unwrap();
    // (2*8 + 1*6) * 12.5
    assert_eq!(s.forecast().metrics[0].total_demand, 275.0);
    assert!(!s.forecast().metrics[0].is_manual_demand);

    assert!(matches!(
        s.set_planned_target("nope", 1.0),
        Err(AppError::UnknownProduct(_))
    ));
}

#[test]
fn test_schedule_dimension_update() {
    let mut s = sample();
    s.set_schedule_dimension(ScheduleDimension::HoursB, 8);
    assert_eq!(s.schedule, ScheduleConfig::new(2, 8, 1, 8));
    assert_eq!(s.schedule.total_planned_hours(), 24);
    assert_eq!(s.schedule.days_for(Shift::Second), 1);
    assert_eq!(s.schedule.hours_for(Shift::Second), 8);
}

#[test]
fn test_new_run_starts_empty() {
    let s = sample();
    assert!(s.log.is_empty());
    assert_eq!(s.cursor, HourSlot::new(1, Shift::First, 1));
    assert!(s.forecast().trend.is_empty());
}

#[test]
fn test_resolve_product_by_id_or_name() {
    let s = Scenario::new(
        ScheduleConfig::new(1, 1, 0, 0),
        vec![ProductDefinition::new("p1", "Bolt", 3.0)],
    );
    assert_eq!(s.resolve_product("p1").unwrap().name, "Bolt");
    assert_eq!(s.resolve_product("bolt").unwrap().id, "p1");
    assert!(s.resolve_product("nut").is_err());
}

#[test]
fn test_parse_products() {
    let specs = vec!["Bolt:3".to_string(), "Nut: 4.5".to_string()];
    let products = SetupLogic::parse_products(&specs).unwrap();

    assert_eq!(products[0].id, "p1");
    assert_eq!(products[1].id, "p2");
    assert_eq!(products[1].planned_target_per_hour, 4.5);

    for bad in ["Bolt", ":3", "Bolt:-1", "Bolt:abc"] {
        assert!(SetupLogic::parse_products(&[bad.to_string()]).is_err(), "{bad}");
    }

    let dup = vec!["Bolt:1".to_string(), "bolt:2".to_string()];
    assert!(SetupLogic::parse_products(&dup).is_err());
}

// ---------------------------
// Slot labels
// ---------------------------

#[test]
fn test_slot_label_round() {
    let s = slot(3, 2, 11);
    assert_eq!(s.label(), "D3-T2-H11");
    assert_eq!(HourSlot::parse_label("d3-t2-h11").unwrap(), s);
    assert!(HourSlot::parse_label("D3-T3-H1").is_err());
    assert!(HourSlot::parse_label("day 3").is_err());
}
