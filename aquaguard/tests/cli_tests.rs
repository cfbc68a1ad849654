use anyhow::Result;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

const FULL_HEADER: &str =
    "ph,Hardness,Solids,Chloramines,Sulfate,Conductivity,Organic_carbon,Trihalomethanes,Turbidity";

/// A fresh working directory so no stray aquaguard.yaml or model artifact
/// leaks into the test.
fn aquaguard_in(dir: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("aquaguard"));
    cmd.current_dir(dir.path());
    cmd.env_remove("AQUAGUARD_MODEL_PATH");
    cmd.env_remove("AQUAGUARD_OUTPUT");
    cmd
}

#[test]
fn test_ranges_prints_column_contract() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    aquaguard_in(&tmp)
        .arg("ranges")
        .assert()
        .success()
        .stdout(predicate::str::contains("Trihalomethanes"))
        .stdout(predicate::str::contains("[6.5, 8.5]"))
        .stdout(predicate::str::contains("µS/cm"));
    Ok(())
}

#[test]
fn test_check_refuses_to_run_without_model_artifact() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    aquaguard_in(&tmp)
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Model artifact not found"));
    Ok(())
}

#[test]
fn test_score_refuses_to_run_without_model_artifact() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let input = tmp.path().join("batch.csv");
    std::fs::write(&input, format!("{FULL_HEADER}\n7.0,180,15000,7.5,330,500,10,70,3\n"))?;

    aquaguard_in(&tmp)
        .arg("score")
        .arg("batch.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Model artifact not found"));
    Ok(())
}

#[test]
fn test_model_flag_points_at_explicit_path() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    aquaguard_in(&tmp)
        .args(["check", "--model", "models/water_v9.onnx"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("water_v9.onnx"));
    Ok(())
}

#[test]
fn test_config_file_supplies_model_path() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    std::fs::write(
        tmp.path().join("aquaguard.yaml"),
        "model-path: from_config.onnx\n",
    )?;

    aquaguard_in(&tmp)
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("from_config.onnx"));
    Ok(())
}

#[test]
fn test_env_var_overrides_config_file_model_path() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    std::fs::write(
        tmp.path().join("aquaguard.yaml"),
        "model-path: from_config.onnx\n",
    )?;

    // Resolution chain: env beats the YAML file
    aquaguard_in(&tmp)
        .env("AQUAGUARD_MODEL_PATH", "from_env.onnx")
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("from_env.onnx"));
    Ok(())
}

#[test]
fn test_model_flag_beats_env_var() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    aquaguard_in(&tmp)
        .env("AQUAGUARD_MODEL_PATH", "from_env.onnx")
        .args(["check", "--model", "from_flag.onnx"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("from_flag.onnx"));
    Ok(())
}

#[test]
fn test_check_help_lists_all_nine_readings() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let assert = aquaguard_in(&tmp).args(["check", "--help"]).assert().success();
    let help = String::from_utf8(assert.get_output().stdout.clone())?;
    for flag in [
        "--ph",
        "--hardness",
        "--solids",
        "--chloramines",
        "--sulfate",
        "--conductivity",
        "--organic-carbon",
        "--trihalomethanes",
        "--turbidity",
    ] {
        assert!(help.contains(flag), "missing {flag} in help");
    }
    Ok(())
}
