#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use industrack::models::product::ProductDefinition;
use industrack::models::production_log::{HourQuantities, HourSlot, ProductionLog};
use industrack::models::shift::Shift;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn itk() -> Command {
    cargo_bin_cmd!("industrack")
}

/// Unique scenario path inside the system temp dir; any previous file
/// (and its journal) is removed.
pub fn setup_test_scenario(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_industrack.json", name));
    fs::remove_file(&path).ok();
    fs::remove_file(path.with_extension("journal")).ok();
    path.to_string_lossy().to_string()
}

/// Temporary output file path inside tempdir, removed beforehand.
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// One-product run: 1 day x 2 hours, "Widget" at 10 u/h, hours logged 8 and 12.
pub fn init_scenario_with_data(scenario: &str) {
    itk()
        .args([
            "--scenario",
            scenario,
            "setup",
            "--days-a",
            "1",
            "--hours-a",
            "2",
            "-p",
            "Widget:10",
        ])
        .assert()
        .success();

    itk()
        .args(["--scenario", scenario, "record", "1", "1", "1", "Widget=8"])
        .assert()
        .success();

    itk()
        .args(["--scenario", scenario, "record", "1", "1", "2", "p1=12"])
        .assert()
        .success();
}

pub fn slot(day: u32, shift: u8, hour: u32) -> HourSlot {
    HourSlot::new(day, Shift::from_number(shift).expect("shift"), hour)
}

pub fn qty(pairs: &[(&str, u64)]) -> HourQuantities {
    pairs.iter().map(|(id, q)| (id.to_string(), *q)).collect()
}

/// Log with one product quantity per hour, shift 1, day 1, hours 1..=n.
pub fn single_product_log(id: &str, quantities: &[u64]) -> ProductionLog {
    quantities
        .iter()
        .enumerate()
        .map(|(i, q)| (slot(1, 1, i as u32 + 1), qty(&[(id, *q)])))
        .collect()
}

pub fn product(id: &str, target: f64) -> ProductDefinition {
    ProductDefinition::new(id, id.to_uppercase(), target)
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
