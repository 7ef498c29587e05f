use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn mealboard(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("mealboard").unwrap();
    cmd.env("MEALBOARD_HOME", home).env_remove("RUST_LOG");
    cmd
}

fn add(home: &Path, name: &str, calories: &str, day: &str, meal_type: &str) {
    mealboard(home)
        .args(["add", name, "-c", calories, "-d", day, "-t", meal_type])
        .assert()
        .success();
}

#[test]
fn add_then_list_shows_meal_and_persists_file() {
    let home = TempDir::new().unwrap();

    mealboard(home.path())
        .args(["add", "Oatmeal", "-c", "300", "-d", "monday", "-t", "breakfast"])
        .args(["--protein", "10", "--carbs", "54", "--fat", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Meal added (mon.1): Oatmeal (300 cal)"));

    mealboard(home.path())
        .args(["list", "mon"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mon.1"))
        .stdout(predicate::str::contains("Oatmeal"))
        .stdout(predicate::str::contains("P 10g C 54g F 5g"));

    let raw = std::fs::read_to_string(home.path().join("meals.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let meal = &json["monday"][0];
    assert_eq!(meal["name"], "Oatmeal");
    assert_eq!(meal["calories"], 300);
    assert_eq!(meal["type"], "breakfast");
    assert_eq!(meal["day"], "monday");
    assert_eq!(json["sunday"], serde_json::json!([]));
}

#[test]
fn default_command_lists_the_week() {
    let home = TempDir::new().unwrap();
    add(home.path(), "Curry", "700", "sat", "dinner");

    mealboard(home.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Monday"))
        .stdout(predicate::str::contains("Saturday"))
        .stdout(predicate::str::contains("Week total: 700 cal"));
}

#[test]
fn invalid_meal_is_rejected_and_nothing_written() {
    let home = TempDir::new().unwrap();

    mealboard(home.path())
        .args(["add", "Toast", "-d", "monday", "-t", "breakfast"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Invalid calories"));

    mealboard(home.path())
        .args(["add", "Toast", "-c", "200", "-d", "monday", "-t", "brunch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid type"));

    assert!(!home.path().join("meals.json").exists());
}

#[test]
fn edit_moves_meal_to_new_day() {
    let home = TempDir::new().unwrap();
    add(home.path(), "Oatmeal", "300", "monday", "breakfast");

    mealboard(home.path())
        .args(["edit", "mon.1", "--day", "sunday", "--calories", "350"])
        .assert()
        .success()
        .stdout(predicate::str::contains("moved monday -> sunday"));

    mealboard(home.path())
        .args(["list", "sunday"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Oatmeal"))
        .stdout(predicate::str::contains("350 cal"));

    mealboard(home.path())
        .args(["list", "monday"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no meals"));
}

#[test]
fn edit_without_fields_fails() {
    let home = TempDir::new().unwrap();
    add(home.path(), "Oatmeal", "300", "monday", "breakfast");

    mealboard(home.path())
        .args(["edit", "mon.1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to change"));
}

#[test]
fn rm_and_mv_by_slot() {
    let home = TempDir::new().unwrap();
    add(home.path(), "Toast", "250", "tue", "breakfast");
    add(home.path(), "Soup", "300", "tue", "lunch");
    add(home.path(), "Salad", "200", "wed", "lunch");

    mealboard(home.path())
        .args(["mv", "wed.1", "tue", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Meal moved to tue.1: Salad"));

    mealboard(home.path())
        .args(["rm", "tue.2", "nope-id"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Meal deleted (tuesday): Toast (250 cal)"))
        .stdout(predicate::str::contains("No meal matches nope-id"));

    mealboard(home.path())
        .args(["list", "tue"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tue.1").and(predicate::str::contains("Salad")))
        .stdout(predicate::str::contains("Toast").not());
}

#[test]
fn missing_slot_is_an_error() {
    let home = TempDir::new().unwrap();

    mealboard(home.path())
        .args(["mv", "fri.3", "monday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No meal at fri.3"));
}

#[test]
fn say_adds_meal_from_phrase() {
    let home = TempDir::new().unwrap();

    mealboard(home.path())
        .args(["say", "add grilled chicken for dinner on friday with 450 calories"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(fri.1)"));

    mealboard(home.path())
        .args(["say", "remove everything"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid phrase"));
}

#[test]
fn suggest_can_add_to_a_day() {
    let home = TempDir::new().unwrap();

    mealboard(home.path())
        .args(["suggest", "-t", "snack"])
        .assert()
        .success()
        .stdout(predicate::str::contains("How about"));
    assert!(!home.path().join("meals.json").exists());

    mealboard(home.path())
        .args(["suggest", "--add", "thu"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Meal added (thu.1)"));
}

#[test]
fn export_then_import_into_another_home() {
    let source = TempDir::new().unwrap();
    add(source.path(), "Toast", "250", "mon", "breakfast");
    add(source.path(), "Curry", "700", "sat", "dinner");

    let output = mealboard(source.path()).arg("export").output().unwrap();
    assert!(output.status.success());
    let export_file = source.path().join("export.json");
    std::fs::write(&export_file, &output.stdout).unwrap();

    let target = TempDir::new().unwrap();
    add(target.path(), "Leftovers", "400", "sun", "lunch");

    mealboard(target.path())
        .arg("import")
        .arg(&export_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Board imported: 2 meals (replaced 1)"));

    mealboard(target.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Curry"))
        .stdout(predicate::str::contains("Leftovers").not());
}

#[test]
fn legacy_board_file_is_readable() {
    let home = TempDir::new().unwrap();
    std::fs::write(
        home.path().join("meals.json"),
        r#"{"monday":[{"id":1700000000000,"name":"Eggs","calories":"150.7","type":"Breakfast"}]}"#,
    )
    .unwrap();

    mealboard(home.path())
        .args(["list", "monday"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Eggs"))
        .stdout(predicate::str::contains("150 cal"));

    mealboard(home.path())
        .args(["rm", "1700000000000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Meal deleted (monday): Eggs"));
}

#[test]
fn corrupt_board_file_is_left_untouched() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("meals.json");
    std::fs::write(&path, "{not json").unwrap();

    mealboard(home.path())
        .args(["add", "Toast", "-c", "200", "-d", "mon", "-t", "breakfast"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Serialization error"));

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{not json");
}

#[test]
fn config_target_flags_stats() {
    let home = TempDir::new().unwrap();
    add(home.path(), "Pizza", "900", "fri", "dinner");

    mealboard(home.path())
        .args(["config", "calorie-target", "800"])
        .assert()
        .success()
        .stdout(predicate::str::contains("calorie-target set to 800"));

    mealboard(home.path())
        .args(["config", "calorie-target"])
        .assert()
        .success()
        .stdout(predicate::str::contains("calorie-target = 800"));

    mealboard(home.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Busiest day: friday"))
        .stdout(predicate::str::contains("over on friday"));

    mealboard(home.path())
        .args(["config", "colour", "blue"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn version_flag() {
    let home = TempDir::new().unwrap();
    mealboard(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("mealboard "));
}
