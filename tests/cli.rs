//! End-to-end tests for the tempo binary.
//!
//! Each test points `HOME` at a fresh temp dir so the database and config
//! live under `<tmp>/.tempo`.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tempo(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tempo").unwrap();
    cmd.env("HOME", home.path())
        .env_remove("TEMPO_LOG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help() {
    let home = TempDir::new().unwrap();
    tempo(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("routine"))
        .stdout(predicate::str::contains("workout"))
        .stdout(predicate::str::contains("goals"))
        .stdout(predicate::str::contains("water"))
        .stdout(predicate::str::contains("meal"));
}

#[test]
fn test_routine_list_seeds_catalog() {
    let home = TempDir::new().unwrap();
    tempo(&home)
        .args(["routine", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Full Body Basics"))
        .stdout(predicate::str::contains("Legs & Core"));

    assert!(home.path().join(".tempo").join("tempo.db").exists());
}

#[test]
fn test_routine_show_json() {
    let home = TempDir::new().unwrap();
    let output = tempo(&home)
        .args(["-o", "json", "routine", "show", "full-body"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["id"], "full-body");
    assert_eq!(value["exercises"].as_array().unwrap().len(), 2);
}

#[test]
fn test_routine_import() {
    let home = TempDir::new().unwrap();
    let file = home.path().join("tabata.yaml");
    std::fs::write(
        &file,
        r"
id: tabata
name: Tabata
exercises:
  - exercise: {id: burpee, name: Burpees, calories_per_minute: 10}
    sets: 8
    duration_seconds: 20
    rest_seconds: 10
",
    )
    .unwrap();

    tempo(&home)
        .args(["routine", "import"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported"));

    tempo(&home)
        .args(["routine", "show", "tabata"])
        .assert()
        .success()
        .stdout(predicate::str::contains("8 × 20s"));
}

#[test]
fn test_drop_in_routine_directory() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join(".tempo").join("routines");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("stretch.yaml"),
        "id: stretch\nname: Stretch\nexercises:\n  - exercise: {id: fold, name: Forward Fold}\n    sets: 1\n    duration_seconds: 30\n",
    )
    .unwrap();

    tempo(&home)
        .args(["routine", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Stretch"));
}

#[test]
fn test_simulate_and_history() {
    let home = TempDir::new().unwrap();

    tempo(&home)
        .args(["workout", "simulate", "full-body", "--record", "--notes", "first"])
        .assert()
        .success()
        .stdout(predicate::str::contains("8:30"))
        .stdout(predicate::str::contains("Recorded"));

    tempo(&home)
        .args(["workout", "history"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Full Body Basics"))
        .stdout(predicate::str::contains("9 min"))
        .stdout(predicate::str::contains("first"));

    tempo(&home)
        .args(["workout", "today"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Today (1)"));
}

#[test]
fn test_simulate_without_record_leaves_log_empty() {
    let home = TempDir::new().unwrap();

    tempo(&home)
        .args(["workout", "simulate", "legs-core"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not recorded"));

    tempo(&home)
        .args(["workout", "history"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No workouts"));
}

#[test]
fn test_unknown_routine_fails() {
    let home = TempDir::new().unwrap();
    tempo(&home)
        .args(["workout", "simulate", "nope"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not found: routine nope"));
}

#[test]
fn test_goals_workout() {
    let home = TempDir::new().unwrap();
    tempo(&home)
        .args(["goals", "workout", "--activity", "active", "--goal", "muscle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Workouts   6"))
        .stdout(predicate::str::contains("45 min each"));
}

#[test]
fn test_goals_nutrition_with_flags() {
    let home = TempDir::new().unwrap();
    let output = tempo(&home)
        .args([
            "-o", "json", "goals", "nutrition", "--weight", "60", "--height", "165", "--age",
            "25", "--sex", "female", "--activity", "sedentary",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    // 600 + 1031.25 - 125 - 161 = 1345.25; x1.2 = 1614.3
    assert_eq!(value["tdee"], 1614);
    assert_eq!(value["water_ml"], 1980);
}

#[test]
fn test_goals_nutrition_missing_profile() {
    let home = TempDir::new().unwrap();
    tempo(&home)
        .args(["goals", "nutrition"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("weight"));
}

#[test]
fn test_goals_progress_counts_recorded_workouts() {
    let home = TempDir::new().unwrap();
    tempo(&home)
        .args(["workout", "simulate", "full-body", "--record"])
        .assert()
        .success();

    let output = tempo(&home)
        .args(["-o", "json", "goals", "progress"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["workouts"], 1);
    assert_eq!(value["minutes"], 9);
}

#[test]
fn test_config_default_output() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join(".tempo");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.yaml"), "general:\n  default_output: json\n").unwrap();

    tempo(&home)
        .args(["goals", "workout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"workouts_per_week\": 4"));
}

#[test]
fn test_malformed_config_fails() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join(".tempo");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.yaml"), "workout: [1, 2]\n").unwrap();

    tempo(&home)
        .args(["routine", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration error"));
}

#[test]
fn test_completions() {
    let home = TempDir::new().unwrap();
    tempo(&home)
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tempo"));
}

#[test]
fn test_goals_profile_feeds_nutrition() {
    let home = TempDir::new().unwrap();
    tempo(&home)
        .args([
            "goals", "profile", "--weight", "70", "--height", "175", "--age", "30", "--sex",
            "male",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("70 kg"));

    assert!(home.path().join(".tempo").join("config.yaml").exists());

    tempo(&home)
        .args(["-o", "json", "goals", "nutrition"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"tdee\": 2556"));
}

#[test]
fn test_water_log_against_profile_target() {
    let home = TempDir::new().unwrap();
    tempo(&home)
        .args(["goals", "profile", "--weight", "70"])
        .assert()
        .success();

    tempo(&home).args(["water", "add", "1000"]).assert().success();
    tempo(&home)
        .args(["water", "add", "386"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1386/2772 ml"))
        .stdout(predicate::str::contains("50%"));

    tempo(&home)
        .args(["water", "remove", "2000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0/2772 ml"));
}

#[test]
fn test_water_week_json() {
    let home = TempDir::new().unwrap();
    tempo(&home)
        .args(["water", "set", "1800", "--date", "2024-03-12"])
        .assert()
        .success();

    let output = tempo(&home)
        .args(["-o", "json", "water", "week", "--date", "2024-03-14"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["week_start"], "2024-03-11");
    assert_eq!(value["total_ml"], 1800);
    assert_eq!(value["days"][1]["amount_ml"], 1800);
}

#[test]
fn test_meal_log_today() {
    let home = TempDir::new().unwrap();
    tempo(&home)
        .args([
            "meal",
            "add",
            "Oatmeal",
            "--type",
            "breakfast",
            "--calories",
            "350",
            "--protein",
            "12",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Oatmeal"));

    tempo(&home)
        .args(["meal", "today"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(1)"))
        .stdout(predicate::str::contains("350 kcal"));
}

#[test]
fn test_meal_delete_missing() {
    let home = TempDir::new().unwrap();
    tempo(&home)
        .args(["meal", "delete", "99"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not found: meal #99"));
}
