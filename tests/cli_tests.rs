mod common;
use common::{init_scenario_with_data, itk, setup_test_scenario, temp_out};

use predicates::prelude::*;
use predicates::str::contains;
use std::fs;

#[test]
fn test_setup_record_status() {
    let scenario = setup_test_scenario("cli_status");
    init_scenario_with_data(&scenario);

    itk()
        .args(["--scenario", &scenario, "status"])
        .assert()
        .success()
        .stdout(contains("Widget"))
        .stdout(contains("OK"))
        .stdout(contains("2/2 h logged"));
}

#[test]
fn test_status_json() {
    let scenario = setup_test_scenario("cli_status_json");
    init_scenario_with_data(&scenario);

    let output = itk()
        .args(["--scenario", &scenario, "status", "--json"])
        .output()
        .expect("run status");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("status --json prints JSON");
    let m = &value["forecast"]["metrics"][0];

    assert_eq!(m["completed"], 20.0);
    assert_eq!(m["totalDemand"], 20.0);
    assert_eq!(m["status"], "OK");
    assert_eq!(m["isViable"], true);
    assert_eq!(value["forecast"]["remainingGlobalHours"], 0);
    assert_eq!(value["summary"]["healthScore"], 100.0);
}

#[test]
fn test_setup_twice_requires_force() {
    let scenario = setup_test_scenario("cli_setup_twice");
    init_scenario_with_data(&scenario);

    itk()
        .args(["--scenario", &scenario, "setup", "--days-a", "1", "--hours-a", "4", "-p", "Bolt:2"])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    itk()
        .args([
            "--scenario", &scenario, "setup", "--days-a", "1", "--hours-a", "4", "-p", "Bolt:2", "--force",
        ])
        .assert()
        .success();

    // new run: empty log
    itk()
        .args(["--scenario", &scenario, "status"])
        .assert()
        .success()
        .stdout(contains("Bolt"))
        .stdout(contains("0/4 h logged"));
}

#[test]
fn test_setup_requires_a_product() {
    let scenario = setup_test_scenario("cli_setup_noproduct");

    itk()
        .args(["--scenario", &scenario, "setup", "--days-a", "1", "--hours-a", "4"])
        .assert()
        .failure()
        .stderr(contains("at least one"));
}

#[test]
fn test_record_rejects_bad_input() {
    let scenario = setup_test_scenario("cli_record_bad");
    init_scenario_with_data(&scenario);

    // negative quantity
    itk()
        .args(["--scenario", &scenario, "record", "1", "1", "1", "Widget=-3"])
        .assert()
        .failure()
        .stderr(contains("Invalid quantity"));

    // hour outside the schedule
    itk()
        .args(["--scenario", &scenario, "record", "1", "1", "3", "Widget=1"])
        .assert()
        .failure()
        .stderr(contains("Invalid hour slot"));

    // shift 3
    itk()
        .args(["--scenario", &scenario, "record", "1", "3", "1", "Widget=1"])
        .assert()
        .failure()
        .stderr(contains("Invalid shift"));

    itk()
        .args(["--scenario", &scenario, "record", "1", "1", "1", "Gadget=1"])
        .assert()
        .failure()
        .stderr(contains("Unknown product"));

    // the log is unchanged
    itk()
        .args(["--scenario", &scenario, "status"])
        .assert()
        .success()
        .stdout(contains("20/20"));
}

#[test]
fn test_product_and_schedule_updates() {
    let scenario = setup_test_scenario("cli_adjust");
    init_scenario_with_data(&scenario);

    itk()
        .args(["--scenario", &scenario, "schedule", "--hours-a", "4"])
        .assert()
        .success()
        .stdout(contains("4 planned hours"));

    itk()
        .args(["--scenario", &scenario, "product", "Widget", "--demand", "100"])
        .assert()
        .success();

    // 80 left over 2 hours = 40 u/h against a plan of 10
    itk()
        .args(["--scenario", &scenario, "status"])
        .assert()
        .success()
        .stdout(contains("CRITICAL"));

    itk()
        .args(["--scenario", &scenario, "product", "p1", "--clear-demand", "--extra", "5"])
        .assert()
        .success()
        .stdout(contains("demand=auto"));

    itk()
        .args(["--scenario", &scenario, "status"])
        .assert()
        .success()
        .stdout(contains("25/40"));
}

#[test]
fn test_trend_json() {
    let scenario = setup_test_scenario("cli_trend");
    init_scenario_with_data(&scenario);

    itk()
        .args(["--scenario", &scenario, "trend", "--json"])
        .assert()
        .success()
        .stdout(contains("\"timeLabel\": \"H2\""))
        .stdout(contains("\"Widget_SES\": 8.8"));
}

#[test]
fn test_trend_json_single_product_with_shared_prefix() {
    let scenario = setup_test_scenario("cli_trend_prefix");

    itk()
        .args([
            "--scenario", &scenario, "setup", "--days-a", "1", "--hours-a", "2", "-p", "A:10", "-p", "A_B:10",
        ])
        .assert()
        .success();

    itk()
        .args(["--scenario", &scenario, "record", "1", "1", "1", "p1=5", "p2=7"])
        .assert()
        .success();

    let output = itk()
        .args(["--scenario", &scenario, "trend", "--product", "A", "--json"])
        .output()
        .expect("run trend");
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).expect("JSON rows");
    let row = rows[0].as_object().expect("chart row");

    let mut keys: Vec<&str> = row.keys().map(|k| k.as_str()).collect();
    keys.sort();
    assert_eq!(keys, vec!["A_Avg", "A_Meta", "A_SES", "timeLabel"]);
    assert_eq!(row["A_SES"], 5.0);
}

#[test]
fn test_history() {
    let scenario = setup_test_scenario("cli_history");
    init_scenario_with_data(&scenario);

    itk()
        .args(["--scenario", &scenario, "history"])
        .assert()
        .success()
        .stdout(contains("D1-T1-H1"))
        .stdout(contains("D1-T1-H2"));
}

#[test]
fn test_export_csv() {
    let scenario = setup_test_scenario("cli_export_csv");
    init_scenario_with_data(&scenario);
    let out = temp_out("cli_export_csv", "csv");

    itk()
        .args(["--scenario", &scenario, "export", "--format", "csv", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("csv written");
    assert!(content.lines().count() >= 2);
    assert!(content.contains("Widget"));
}

#[test]
fn test_export_trend_json() {
    let scenario = setup_test_scenario("cli_export_trend");
    init_scenario_with_data(&scenario);
    let out = temp_out("cli_export_trend", "json");

    itk()
        .args(["--scenario", &scenario, "export", "--format", "json", "--trend", "--file", &out])
        .assert()
        .success();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).expect("json written")).expect("valid JSON");
    let rows = value.as_array().expect("array of chart rows");

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["timeLabel"], "H1");
    assert_eq!(rows[0]["Widget_SES"], 8.0);
    assert_eq!(rows[0]["Widget_Meta"], 12.0);
    assert_eq!(rows[1]["Widget_Avg"], 10.0);
}

#[test]
fn test_export_pdf_and_xlsx() {
    let scenario = setup_test_scenario("cli_export_pdf");
    init_scenario_with_data(&scenario);

    let pdf = temp_out("cli_export_pdf", "pdf");
    itk()
        .args(["--scenario", &scenario, "export", "--format", "pdf", "--file", &pdf])
        .assert()
        .success();
    let bytes = fs::read(&pdf).expect("pdf written");
    assert!(bytes.starts_with(b"%PDF"));

    let xlsx = temp_out("cli_export_xlsx", "xlsx");
    itk()
        .args(["--scenario", &scenario, "export", "--format", "xlsx", "--file", &xlsx])
        .assert()
        .success();
    // xlsx is a zip container
    assert!(fs::read(&xlsx).expect("xlsx written").starts_with(b"PK"));
}

#[test]
fn test_export_requires_absolute_path() {
    let scenario = setup_test_scenario("cli_export_rel");
    init_scenario_with_data(&scenario);

    itk()
        .args(["--scenario", &scenario, "export", "--file", "report.csv"])
        .assert()
        .failure()
        .stderr(contains("absolute"));
}

#[test]
fn test_scenario_export_import() {
    let source = setup_test_scenario("cli_scn_src");
    init_scenario_with_data(&source);
    let copy = temp_out("cli_scn_copy", "json");

    itk()
        .args(["--scenario", &source, "scenario", "--export", &copy])
        .assert()
        .success();

    let target = setup_test_scenario("cli_scn_dst");
    itk()
        .args(["--scenario", &target, "setup", "--days-a", "3", "--hours-a", "8", "-p", "Other:1"])
        .assert()
        .success();

    itk()
        .args(["--scenario", &target, "scenario", "--import", &copy])
        .assert()
        .success()
        .stdout(contains("2 logged hour(s)"));

    itk()
        .args(["--scenario", &target, "status"])
        .assert()
        .success()
        .stdout(contains("Widget"))
        .stdout(contains("Other").not());
}

#[test]
fn test_invalid_import_keeps_state() {
    let scenario = setup_test_scenario("cli_bad_import");
    init_scenario_with_data(&scenario);
    let before = fs::read_to_string(&scenario).expect("scenario saved");

    let bad = temp_out("cli_bad_import", "json");
    fs::write(&bad, r#"{ "models": [] }"#).expect("write payload");

    itk()
        .args(["--scenario", &scenario, "scenario", "--import", &bad])
        .assert()
        .failure()
        .stderr(contains("Invalid scenario"));

    assert_eq!(fs::read_to_string(&scenario).expect("still there"), before);
}

#[test]
fn test_missing_scenario() {
    let scenario = setup_test_scenario("cli_missing");

    itk()
        .args(["--scenario", &scenario, "status"])
        .assert()
        .failure()
        .stderr(contains("not found"));
}

#[test]
fn test_journal_print() {
    let scenario = setup_test_scenario("cli_journal");
    init_scenario_with_data(&scenario);

    itk()
        .args(["--scenario", &scenario, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("setup"))
        .stdout(contains("record"))
        .stdout(contains("D1-T1-H2"));
}

#[test]
fn test_init_in_test_mode() {
    let scenario = setup_test_scenario("cli_init");

    itk()
        .args(["--scenario", &scenario, "--test", "init"])
        .assert()
        .success()
        .stdout(contains(scenario.as_str()));
}
