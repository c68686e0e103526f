//! End-to-end integration tests for the timing chart generator
//!
//! These tests exercise the complete CLI workflow against generated CSV
//! fixture trees, covering chart output, mode filtering, error exit codes
//! and the help system.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

const MODES: [&str; 3] = ["TRA2", "TDRA2", "ARA2"];
const BITSIZES: [u32; 2] = [512, 1024];
const DEALERS: [u32; 4] = [2, 3, 4, 5];
const GUARDS: [u32; 4] = [3, 5, 6, 8];

/// Helper function to create a test command
fn create_test_cmd() -> Command {
    Command::cargo_bin("ptc").unwrap()
}

/// Write one timing summary CSV with the benchmark file naming convention
fn write_timing_file(dir: &Path, dealers: u32, guards: u32, bitsize: u32, mode: &str, row: &str) {
    let name = format!(
        "times_dealers_{}_guards_{}_bitsize_{}_mode_{}.csv",
        dealers, guards, bitsize, mode
    );
    let content = format!("GetToken,TokenStd,GetAccess,AccessStd,Total,TotalStd\n{}\n", row);
    fs::write(dir.join(name), content).unwrap();
}

/// Populate a data directory with a complete fixture grid for all modes
fn populate_full_grid(data_dir: &Path) {
    for mode in MODES {
        for bitsize in BITSIZES {
            for i in 0..4 {
                let dealers = if mode == "TRA2" { 1 } else { DEALERS[i] };
                write_timing_file(
                    data_dir,
                    dealers,
                    GUARDS[i],
                    bitsize,
                    mode,
                    "120.5,4.5,80.25,3.0,250.75,6.0",
                );
            }
        }
    }
}

/// Set up a temp workspace with data/ populated and an imgs path reserved
fn setup_workspace() -> (TempDir, std::path::PathBuf, std::path::PathBuf) {
    let temp = TempDir::new().unwrap();
    let data_dir = temp.path().join("data");
    let out_dir = temp.path().join("imgs");
    fs::create_dir_all(&data_dir).unwrap();
    populate_full_grid(&data_dir);
    (temp, data_dir, out_dir)
}

#[test]
fn test_full_run_writes_one_chart_per_mode() {
    let (_temp, data_dir, out_dir) = setup_workspace();

    create_test_cmd()
        .arg("--data-dir")
        .arg(&data_dir)
        .arg("--out-dir")
        .arg(&out_dir)
        .arg("--no-color")
        .assert()
        .success()
        .stdout(predicate::str::contains("TRA2_times.svg"))
        .stdout(predicate::str::contains("TDRA2_times.svg"))
        .stdout(predicate::str::contains("ARA2_times.svg"))
        .stdout(predicate::str::contains("3 chart(s) written"));

    for mode in MODES {
        let path = out_dir.join(format!("{}_times.svg", mode));
        assert!(path.is_file(), "missing chart for {}", mode);
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("<svg"), "chart for {} is not SVG", mode);
    }
}

#[test]
fn test_mode_filter_renders_subset() {
    let (_temp, data_dir, out_dir) = setup_workspace();

    create_test_cmd()
        .arg("--data-dir")
        .arg(&data_dir)
        .arg("--out-dir")
        .arg(&out_dir)
        .arg("--mode")
        .arg("ARA2")
        .arg("--no-color")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 chart(s) written"));

    assert!(out_dir.join("ARA2_times.svg").is_file());
    assert!(!out_dir.join("TRA2_times.svg").exists());
    assert!(!out_dir.join("TDRA2_times.svg").exists());
}

#[test]
fn test_mode_filter_is_case_insensitive() {
    let (_temp, data_dir, out_dir) = setup_workspace();

    create_test_cmd()
        .arg("--data-dir")
        .arg(&data_dir)
        .arg("--out-dir")
        .arg(&out_dir)
        .arg("--mode")
        .arg("tdra2")
        .arg("--no-color")
        .assert()
        .success();

    assert!(out_dir.join("TDRA2_times.svg").is_file());
}

#[test]
fn test_verbose_run_prints_timing_tables() {
    let (_temp, data_dir, out_dir) = setup_workspace();

    create_test_cmd()
        .arg("--data-dir")
        .arg(&data_dir)
        .arg("--out-dir")
        .arg(&out_dir)
        .arg("--mode")
        .arg("TRA2")
        .arg("--verbose")
        .arg("--no-color")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mode TRA2"))
        .stdout(predicate::str::contains("512 bits:"))
        .stdout(predicate::str::contains("1024 bits:"))
        .stdout(predicate::str::contains("1D / 3G"))
        // Derived communication time: 250.75 - 120.5 - 80.25
        .stdout(predicate::str::contains("50.00"));
}

#[test]
fn test_missing_file_aborts_with_dataset_exit_code() {
    let (_temp, data_dir, out_dir) = setup_workspace();
    fs::remove_file(data_dir.join("times_dealers_3_guards_5_bitsize_1024_mode_ARA2.csv")).unwrap();

    create_test_cmd()
        .arg("--data-dir")
        .arg(&data_dir)
        .arg("--out-dir")
        .arg(&out_dir)
        .arg("--no-color")
        .assert()
        .failure()
        .code(6)
        .stderr(predicate::str::contains("Missing timing file"));
}

#[test]
fn test_malformed_field_aborts_with_parse_exit_code() {
    let (_temp, data_dir, out_dir) = setup_workspace();
    write_timing_file(&data_dir, 2, 3, 512, "TDRA2", "not_a_number,4.5,80.0,3.0,250.0,6.0");

    create_test_cmd()
        .arg("--data-dir")
        .arg(&data_dir)
        .arg("--out-dir")
        .arg(&out_dir)
        .arg("--mode")
        .arg("TDRA2")
        .arg("--no-color")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Parsing error"));
}

#[test]
fn test_unknown_mode_rejected_before_any_work() {
    let temp = TempDir::new().unwrap();

    create_test_cmd()
        .current_dir(temp.path())
        .arg("--mode")
        .arg("NOPE")
        .arg("--no-color")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unknown protocol mode"));
}

#[test]
fn test_conflicting_color_flags_rejected() {
    create_test_cmd()
        .arg("--color")
        .arg("--no-color")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Cannot specify both"));
}

#[test]
fn test_help_flag() {
    create_test_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--data-dir"))
        .stdout(predicate::str::contains("--out-dir"))
        .stdout(predicate::str::contains("--mode"));
}

#[test]
fn test_topic_help_short_circuits_run() {
    // No data directory needed; topic help must exit successfully
    create_test_cmd()
        .arg("--help-topic")
        .arg("data")
        .arg("--no-color")
        .assert()
        .success()
        .stdout(predicate::str::contains("INPUT DATA REFERENCE"))
        .stdout(predicate::str::contains("times_dealers_"));
}

#[test]
fn test_env_var_overrides() {
    let (_temp, data_dir, out_dir) = setup_workspace();

    create_test_cmd()
        .env("PTC_DATA_DIR", &data_dir)
        .env("PTC_OUTPUT_DIR", &out_dir)
        .env("PTC_MODES", "TRA2")
        .arg("--no-color")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 chart(s) written"));

    assert!(out_dir.join("TRA2_times.svg").is_file());
}

#[test]
fn test_output_directory_created_on_demand() {
    let (_temp, data_dir, out_dir) = setup_workspace();
    let nested = out_dir.join("nested").join("deep");

    create_test_cmd()
        .arg("--data-dir")
        .arg(&data_dir)
        .arg("--out-dir")
        .arg(&nested)
        .arg("--mode")
        .arg("TRA2")
        .arg("--no-color")
        .assert()
        .success();

    assert!(nested.join("TRA2_times.svg").is_file());
}

#[test]
fn test_rerun_overwrites_existing_charts() {
    let (_temp, data_dir, out_dir) = setup_workspace();

    for _ in 0..2 {
        create_test_cmd()
            .arg("--data-dir")
            .arg(&data_dir)
            .arg("--out-dir")
            .arg(&out_dir)
            .arg("--mode")
            .arg("ARA2")
            .arg("--no-color")
            .assert()
            .success();
    }

    assert!(out_dir.join("ARA2_times.svg").is_file());
}
