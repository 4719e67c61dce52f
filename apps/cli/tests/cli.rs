//! End-to-end tests of the `bs-calc` binary.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

/// `bs-calc` isolated from the caller's locale, configuration and logging.
fn bs_calc(home: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("bs-calc");
    cmd.env_clear()
        .env("LC_ALL", "C")
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path());
    cmd
}

#[test]
fn lists_every_binary_unit() {
    let home = TempDir::new().unwrap();
    bs_calc(&home)
        .args(["1", "GiB"])
        .assert()
        .success()
        .stdout("1073741824 B\n1048576.00 KiB\n   1024.00 MiB\n      1.00 GiB\n");
}

#[test]
fn evaluates_mixed_expression() {
    let home = TempDir::new().unwrap();
    bs_calc(&home)
        .args(["(1 GiB + 512 MiB) * 2"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("3221225472 B\n"))
        .stdout(predicate::str::ends_with("      3.00 GiB\n"));
}

#[test]
fn shows_requested_unit() {
    let home = TempDir::new().unwrap();
    bs_calc(&home)
        .args(["--MiB", "1", "GiB"])
        .assert()
        .success()
        .stdout("1024 MiB\n");
    bs_calc(&home)
        .args(["-u", "GB", "1 GiB"])
        .assert()
        .success()
        .stdout("1.07 GB\n");
}

#[test]
fn number_results_print_plainly() {
    let home = TempDir::new().unwrap();
    bs_calc(&home)
        .args(["10 GiB // 3 GiB"])
        .assert()
        .success()
        .stdout("3\n");
    bs_calc(&home)
        .args(["1 MiB / 1 KiB"])
        .assert()
        .success()
        .stdout("1024\n");
}

#[test]
fn negative_leading_operand() {
    let home = TempDir::new().unwrap();
    bs_calc(&home)
        .args(["-k", "-1", "KiB", "-", "512", "B"])
        .assert()
        .success()
        .stdout("-1.50 KiB\n");
}

#[test]
fn parse_error_exits_with_one() {
    let home = TempDir::new().unwrap();
    bs_calc(&home)
        .args(["3 apples + 1"])
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("Error while parsing expression: "));
}

#[test]
fn evaluation_error_exits_with_one() {
    let home = TempDir::new().unwrap();
    bs_calc(&home)
        .args(["1 KiB * 1 KiB"])
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("Error during evaluation: Cannot multiply Size by Size"));
    bs_calc(&home)
        .args(["1 KiB / 0"])
        .assert()
        .code(1)
        .stdout("Error during evaluation: division by zero\n");
}

#[test]
fn conflicting_unit_flags_are_rejected() {
    let home = TempDir::new().unwrap();
    bs_calc(&home)
        .args(["-k", "--GB", "1 KiB"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn radix_follows_locale() {
    let home = TempDir::new().unwrap();
    bs_calc(&home)
        .env("LC_ALL", "cs_CZ.UTF-8")
        .args(["-k", "1,5 KiB"])
        .assert()
        .success()
        .stdout("1.50 KiB\n");
}

#[test]
fn settings_file_and_environment() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("calc.toml");
    std::fs::write(&config, "places = 3\nunit = \"KiB\"\n").unwrap();

    bs_calc(&home)
        .arg("--config")
        .arg(&config)
        .arg("1000 B")
        .assert()
        .success()
        .stdout("0.977 KiB\n");

    bs_calc(&home)
        .env("BS_CALC_CONFIG", &config)
        .env("BS_CALC_PLACES", "1")
        .arg("1000 B")
        .assert()
        .success()
        .stdout("1.0 KiB\n");
}

#[test]
fn missing_config_file_is_a_setup_error() {
    let home = TempDir::new().unwrap();
    bs_calc(&home)
        .args(["--config", "/nonexistent/bs-calc.toml", "1 KiB"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn diagnostics_stay_on_stderr() {
    let home = TempDir::new().unwrap();
    bs_calc(&home)
        .env("BS_CALC_LOG", "debug")
        .args(["-b", "1 KiB"])
        .assert()
        .success()
        .stdout("1024 B\n")
        .stderr(predicate::str::contains("evaluating"));
}

#[test]
fn runaway_power_chain_is_an_evaluation_error() {
    let home = TempDir::new().unwrap();
    let expression = format!("{}2", "2** ".repeat(30_000));
    bs_calc(&home)
        .arg(expression)
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("Error during evaluation: "));
}
