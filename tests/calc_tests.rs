//! `gentol calc` tests

mod common;

use common::{gentol, write_config};
use predicates::prelude::*;

#[test]
fn test_calc_medium_10mm() {
    gentol()
        .args(["calc", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("medium (m)"))
        .stdout(predicate::str::contains("±0.2"))
        .stdout(predicate::str::contains("10.2"))
        .stdout(predicate::str::contains("9.8"));
}

#[test]
fn test_calc_rounds_limits_for_display() {
    // 2.8 + 0.1 is 2.9000000000000004 in binary floating point
    gentol()
        .args(["calc", "2.8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2.9\n"))
        .stdout(predicate::str::contains("2.9000").not());
}

#[test]
fn test_calc_boundary_uses_first_bucket() {
    gentol()
        .args(["calc", "3", "--grade", "coarse"])
        .assert()
        .success()
        .stdout(predicate::str::contains("±0.2"));

    gentol()
        .args(["calc", "3.0001", "--grade", "coarse"])
        .assert()
        .success()
        .stdout(predicate::str::contains("±0.3"));
}

#[test]
fn test_calc_upper_bound_is_valid() {
    gentol()
        .args(["calc", "4000", "-g", "v"])
        .assert()
        .success()
        .stdout(predicate::str::contains("±8"))
        .stdout(predicate::str::contains("4008"))
        .stdout(predicate::str::contains("3992"));
}

#[test]
fn test_calc_unspecified_grade() {
    gentol()
        .args(["calc", "3000", "--grade", "fine"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not specified by the standard"))
        .stdout(predicate::str::contains("3000 mm"));
}

#[test]
fn test_calc_below_range_fails() {
    gentol()
        .args(["calc", "0.4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside the covered range"));
}

#[test]
fn test_calc_negative_dimension_fails() {
    gentol()
        .args(["calc", "-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside the covered range"));
}

#[test]
fn test_calc_garbage_fails() {
    gentol()
        .args(["calc", "ten"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a number"));
}

#[test]
fn test_calc_json_output() {
    let output = gentol()
        .args(["calc", "10", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["status"], "ok");
    assert_eq!(value["grade"], "medium");
    assert_eq!(value["tolerance"], 0.2);
    assert_eq!(value["upper_limit"], 10.2);
    assert_eq!(value["lower_limit"], 9.8);
    assert!(value["message"].is_null());
}

#[test]
fn test_calc_json_unspecified() {
    let output = gentol()
        .args(["calc", "2", "-g", "very-coarse", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["status"], "unspecified");
    assert_eq!(value["grade"], "very-coarse");
    assert!(value["tolerance"].is_null());
}

#[test]
fn test_calc_yaml_output() {
    gentol()
        .args(["calc", "50", "-o", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("status: ok"))
        .stdout(predicate::str::contains("tolerance: 0.3"));
}

#[test]
fn test_calc_grade_from_env() {
    gentol()
        .env("GENTOL_GRADE", "v")
        .args(["calc", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("very-coarse (v)"))
        .stdout(predicate::str::contains("±1\n"));
}

#[test]
fn test_calc_grade_from_config_file() {
    let (_tmp, path) = write_config("default_grade: coarse\n");

    gentol()
        .args(["calc", "10", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("coarse (c)"))
        .stdout(predicate::str::contains("±0.5"));
}

#[test]
fn test_flag_overrides_config_grade() {
    let (_tmp, path) = write_config("default_grade: coarse\n");

    gentol()
        .args(["calc", "10", "-g", "fine", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("±0.1"));
}

#[test]
fn test_calc_decimals_flag() {
    gentol()
        .args(["calc", "100", "-g", "c", "--decimals", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("±1\n"))
        .stdout(predicate::str::contains("101\n"))
        .stdout(predicate::str::contains("99\n"));
}

#[test]
fn test_calc_decimals_flag_rejects_large_values() {
    gentol()
        .args(["calc", "10", "--decimals", "11"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("decimals must be at most 10"));
}

#[test]
fn test_comment_only_config_uses_defaults() {
    let (_tmp, path) = write_config("# default_grade: fine\n# decimals: 3\n");

    gentol()
        .args(["calc", "10", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("medium (m)"))
        .stdout(predicate::str::contains("±0.2"));
}

#[test]
fn test_invalid_config_reported() {
    let (_tmp, path) = write_config("default_grade: ultra\n");

    gentol()
        .args(["calc", "10", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config file"));
}

#[test]
fn test_missing_config_reported() {
    gentol()
        .env("GENTOL_CONFIG", "/nonexistent/gentol/config.yaml")
        .args(["calc", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}
