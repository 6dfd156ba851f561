use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn homefin(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("homefin").unwrap();
    cmd.env("HOMEFIN_DATA_DIR", config_dir.path())
        .env_remove("RUST_LOG")
        .env_remove("HOMEFIN_FORMAT");
    cmd
}

#[test]
fn test_budget_table() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("budget.json");
    std::fs::write(
        &file,
        r#"{
            "income": [{"source": "Job 1", "amount": 3000}, {"source": "Job 2", "amount": 2000}],
            "expenses": [
                {"category": "mortgage", "description": "Mortgage payment", "amount": 1500},
                {"category": "utility", "description": "Electric bill", "amount": 500},
                {"category": "insurance", "description": "Car insurance", "amount": 250}
            ]
        }"#,
    )
    .unwrap();

    homefin(&dir)
        .arg("budget")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("mortgage"))
        .stdout(predicate::str::contains("30.00%"))
        .stdout(predicate::str::contains("$2250.00"));
}

#[test]
fn test_budget_invalid_category_fails() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("budget.yaml");
    std::fs::write(
        &file,
        "income:\n  - source: Job\n    amount: 5000\nexpenses:\n  - category: entertainment\n    description: Concert tickets\n    amount: 100\n",
    )
    .unwrap();

    homefin(&dir)
        .arg("budget")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid category: entertainment"));
}

#[test]
fn test_depreciation() {
    let dir = TempDir::new().unwrap();

    homefin(&dir)
        .args(["depreciation", "10000", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$2000.00"));

    homefin(&dir)
        .args(["--format", "json", "depreciation", "5000", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5000"));
}

#[test]
fn test_depreciation_rejects_zero_lifespan() {
    let dir = TempDir::new().unwrap();

    homefin(&dir)
        .args(["depreciation", "6000", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid argument"));
}

#[test]
fn test_expense_appends_to_log() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("log.json");
    std::fs::write(
        &log,
        r#"{"2023-03-04": [{"amount": 55, "date": "2023-03-04", "category": "meals"}]}"#,
    )
    .unwrap();

    let output = homefin(&dir)
        .args(["--format", "json", "expense", "--amount", "95", "--category", "travel"])
        .args(["--date", "2023-03-04", "--log"])
        .arg(&log)
        .output()
        .unwrap();
    assert!(output.status.success());

    let updated: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = updated["2023-03-04"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1]["category"], "travel");
}

#[test]
fn test_expense_rejects_negative_amount() {
    let dir = TempDir::new().unwrap();

    homefin(&dir)
        .args(["expense", "--amount", "-50", "--category", "travel", "--date", "2023-03-02"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expense amount must be positive."));
}

#[test]
fn test_expense_requires_category() {
    let dir = TempDir::new().unwrap();

    homefin(&dir)
        .args(["expense", "--amount", "50", "--date", "2023-03-03"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("date and category"));
}

#[test]
fn test_loan_from_flags() {
    let dir = TempDir::new().unwrap();

    homefin(&dir)
        .args(["loan", "--balance", "20000", "--payment", "1000", "--rate", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$19083.33"))
        .stdout(predicate::str::contains("$83.33"));
}

#[test]
fn test_loan_negative_balance_fails() {
    let dir = TempDir::new().unwrap();

    homefin(&dir)
        .args(["loan", "--balance", "-2000", "--payment", "1000", "--rate", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be non-negative"));
}

#[test]
fn test_loan_state_with_negative_interest_paid_fails() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("loan.json");
    std::fs::write(
        &file,
        r#"{"loan_balance": 20000, "monthly_payment": 1000, "interest_rate": 5, "total_interest_paid": -5}"#,
    )
    .unwrap();

    homefin(&dir)
        .arg("loan")
        .arg("--state")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Total interest paid must be non-negative."));
}

#[test]
fn test_mileage_trips() {
    let dir = TempDir::new().unwrap();

    let output = homefin(&dir)
        .args(["--format", "json", "mileage", "--trip", "15.5:business"])
        .args(["--trip", "7.5:personal", "--trip", "4.5:business"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let record: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(record["business_miles"], 20.0);
    assert_eq!(record["personal_miles"], 7.5);
}

#[test]
fn test_mileage_invalid_trip_type() {
    let dir = TempDir::new().unwrap();

    homefin(&dir)
        .args(["mileage", "--trip", "10:party"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Trip type must be 'business' or 'personal'."));
}

#[test]
fn test_mileage_state_with_negative_total_fails() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("mileage.yaml");
    std::fs::write(&file, "business_miles: -10\npersonal_miles: 0\n").unwrap();

    homefin(&dir)
        .arg("mileage")
        .arg("--state")
        .arg(&file)
        .args(["--trip", "5:business"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Mileage totals must be non-negative numbers."));
}

#[test]
fn test_format_from_environment() {
    let dir = TempDir::new().unwrap();

    let output = homefin(&dir)
        .env("HOMEFIN_FORMAT", "json")
        .args(["mileage", "--trip", "12:personal"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let record: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(record["personal_miles"], 12.0);

    // the flag wins over the environment
    homefin(&dir)
        .env("HOMEFIN_FORMAT", "json")
        .args(["--format", "yaml", "mileage", "--trip", "12:personal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("personal_miles: 12"));
}

#[test]
fn test_init_and_config() {
    let dir = TempDir::new().unwrap();

    homefin(&dir).arg("init").assert().success();
    assert!(dir.path().join("config.json").exists());

    homefin(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized:      true"));
}
