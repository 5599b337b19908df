use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const SCENARIO_YAML: &str = r#"
categories: [Food, Auto]
operations:
  - { op: deposit, category: Food, amount: 100, description: deposit }
  - { op: deposit, category: Auto, amount: 100, description: deposit }
  - { op: withdraw, category: Food, amount: 50, description: groceries }
  - { op: withdraw, category: Auto, amount: "50.00", description: fuel }
  - { op: withdraw, category: Auto, amount: 500, description: new tyres }
"#;

fn budget(base: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("budget").unwrap();
    cmd.env("BUDGET_LEDGER_DIR", base.path());
    cmd
}

fn write_scenario(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn demo_prints_ledgers_and_chart() {
    let base = TempDir::new().unwrap();

    budget(&base)
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("*************Food*************"))
        .stdout(predicate::str::contains("restaurant and more foo -15.89"))
        .stdout(predicate::str::contains("Total: 923.96"))
        .stdout(predicate::str::contains(" 60| o        "))
        .stderr(predicate::str::contains("step 6"));
}

#[test]
fn run_reports_rejections_without_failing() {
    let base = TempDir::new().unwrap();
    let file = write_scenario(&base, "month.yaml", SCENARIO_YAML);

    budget(&base)
        .arg("run")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("fuel                    -50.00"))
        .stdout(predicate::str::contains(" 50| o  o  "))
        .stderr(predicate::str::contains(
            "Insufficient funds in category 'Auto': need $500.00, have $50.00",
        ));
}

#[test]
fn run_strict_fails_on_insufficient_funds() {
    let base = TempDir::new().unwrap();
    let file = write_scenario(&base, "month.yml", SCENARIO_YAML);

    budget(&base)
        .args(["run", "--strict"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Insufficient funds"));
}

#[test]
fn chart_prints_only_the_chart() {
    let base = TempDir::new().unwrap();
    let file = write_scenario(
        &base,
        "split.json",
        r#"{"operations": [
            {"op": "deposit", "category": "Food", "amount": 100},
            {"op": "deposit", "category": "Auto", "amount": 100},
            {"op": "withdraw", "category": "Food", "amount": 50},
            {"op": "withdraw", "category": "Auto", "amount": 50}
        ]}"#,
    );

    let expected = [
        "Percentage spent by category",
        "100|       ",
        " 90|       ",
        " 80|       ",
        " 70|       ",
        " 60|       ",
        " 50| o  o  ",
        " 40| o  o  ",
        " 30| o  o  ",
        " 20| o  o  ",
        " 10| o  o  ",
        "  0| o  o  ",
        "    -------",
        "     F  A  ",
        "     o  u  ",
        "     o  t  ",
        "     d  o  ",
    ]
    .join("\n");

    budget(&base)
        .arg("chart")
        .arg(&file)
        .assert()
        .success()
        .stdout(format!("{}\n", expected));
}

#[test]
fn run_exports_csv_and_json() {
    let base = TempDir::new().unwrap();
    let file = write_scenario(&base, "month.yaml", SCENARIO_YAML);
    let csv_path = base.path().join("ledger.csv");
    let json_path = base.path().join("ledger.json");

    budget(&base)
        .args(["run", "--no-ledgers", "--no-chart"])
        .arg(&file)
        .arg("--csv")
        .arg(&csv_path)
        .arg("--json")
        .arg(&json_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let csv = fs::read_to_string(&csv_path).unwrap();
    assert!(csv.starts_with("Category,Index,Description,Amount\n"));
    assert!(csv.contains("Auto,2,fuel,-50.00"));

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(json["categories"][0]["name"], "Food");
    assert_eq!(json["categories"][0]["balance"], 5000);
}

#[test]
fn run_rejects_unknown_extension() {
    let base = TempDir::new().unwrap();
    let file = write_scenario(&base, "month.txt", SCENARIO_YAML);

    budget(&base)
        .arg("run")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported scenario file"));
}

#[test]
fn audit_lists_operations_from_previous_runs() {
    let base = TempDir::new().unwrap();
    let file = write_scenario(&base, "month.yaml", SCENARIO_YAML);

    budget(&base).arg("audit").assert().success().stdout(
        predicate::str::contains("No audit entries recorded."),
    );

    budget(&base).arg("run").arg(&file).assert().success();

    budget(&base)
        .args(["audit", "--limit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("WITHDRAW Auto"))
        .stdout(predicate::str::contains("REJECTED"));
}

#[test]
fn init_writes_settings_that_config_reports() {
    let base = TempDir::new().unwrap();

    budget(&base).arg("init").assert().success();
    assert!(base.path().join("config.json").exists());

    budget(&base)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Audit enabled: true"));
}

#[test]
fn init_resets_settings_to_defaults() {
    let base = TempDir::new().unwrap();
    fs::write(
        base.path().join("config.json"),
        r#"{"strict_funds": true, "show_chart": false}"#,
    )
    .unwrap();

    budget(&base).arg("init").assert().success();

    budget(&base)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Strict funds:  false"))
        .stdout(predicate::str::contains("Show chart:    true"));
}

#[test]
fn run_rejects_amounts_with_fractional_cents() {
    let base = TempDir::new().unwrap();
    let file = write_scenario(
        &base,
        "month.yaml",
        "operations:\n  - { op: deposit, category: Food, amount: \"1.999\" }\n",
    );

    budget(&base)
        .arg("run")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Scenario error"));
}

#[test]
fn disabled_audit_writes_no_log() {
    let base = TempDir::new().unwrap();
    fs::write(base.path().join("config.json"), r#"{"audit_enabled": false}"#).unwrap();

    budget(&base).arg("demo").assert().success();
    assert!(!base.path().join("audit.log").exists());
}
