//! End-to-end tests of the `metron` binary

use pretty_assertions::assert_eq;
use serde_json::Value;
use std::process::{Command, Output};

fn metron(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_metron"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run metron")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_convert_speed() {
    let output = metron(&["convert", "1.1", "m/s", "km/h", "--format", "F2"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "3.96 km/h");
}

#[test]
fn test_convert_temperature_by_alias() {
    let output = metron(&["convert", "100", "degF", "degC", "-f", "F2"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "37.78°C");
}

#[test]
fn test_convert_with_unit_names() {
    let output = metron(&["convert", "3", "ft", "in", "-f", "F0;N"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "36 inch");
}

#[test]
fn test_convert_json() {
    let output = metron(&["convert", "2", "km", "m", "--json"]);
    assert!(output.status.success(), "{}", stderr(&output));

    let report: Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(report["value"], "2");
    assert_eq!(report["from"], "km");
    assert_eq!(report["to"], "m");
    assert_eq!(report["result"], "2000");
    assert_eq!(report["formatted"], "2000 m");
}

#[test]
fn test_unknown_unit_fails() {
    let output = metron(&["convert", "1", "parsec", "m"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Unknown unit 'parsec'"));
}

#[test]
fn test_incompatible_units_fail() {
    let output = metron(&["convert", "1", "m", "s"]);
    assert!(!output.status.success());
    let message = stderr(&output);
    assert!(message.contains("Cannot convert metre to second"), "{message}");
    assert!(message.contains("not compatible"), "{message}");
}

#[test]
fn test_invalid_number_fails() {
    let output = metron(&["convert", "ten", "m", "km"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Invalid number 'ten'"));
}

#[test]
fn test_list_filters_by_dimension() {
    let output = metron(&["list", "--dimension", "L^2"]);
    assert!(output.status.success(), "{}", stderr(&output));

    let listing = stdout(&output);
    assert!(listing.contains("acre"));
    assert!(listing.contains("hectare"));
    for line in listing.lines() {
        assert!(line.ends_with("L^2"), "unexpected line {line}");
    }
}

#[test]
fn test_describe() {
    let output = metron(&["describe", "acre"]);
    assert!(output.status.success(), "{}", stderr(&output));

    let description = stdout(&output);
    assert!(description.contains("symbol:    acre"));
    assert!(description.contains("formula:   L^2"));
    assert!(description.contains("system:    Imperial"));
}

#[test]
fn test_out_of_range_conversion_fails_cleanly() {
    let output = metron(&["convert", "79228162514264337593543950335", "km", "m"]);
    assert!(!output.status.success());
    let message = stderr(&output);
    assert!(message.contains("overflows a decimal"), "{message}");
}
