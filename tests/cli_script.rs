use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn script_command(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expense_tracker_cli").unwrap();
    cmd.env("EXPENSE_TRACKER_CLI_SCRIPT", "1")
        .env("EXPENSE_TRACKER_HOME", home.path())
        .env("NO_COLOR", "1")
        .current_dir(home.path());
    cmd
}

#[test]
fn script_mode_records_and_summarizes() {
    let home = TempDir::new().unwrap();
    let input = "\
add 2024-01-01 Food 50 lunch
add 2024-01-02 Food 30
add 2024-01-03 Transport 20 \"bus pass\"
budget set 100
summary
exit
";

    script_command(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Expense added: 2024-01-01 Food RM 50.00"))
        .stdout(contains("Total expenses : RM 100.00"))
        .stdout(contains("Daily average  : RM 33.33 over 3 day(s)"))
        .stdout(contains("Budget status  : NEAR"))
        .stdout(contains("You are close to your budget limit"))
        .stdout(contains("You spend the most on Food"));
}

#[test]
fn script_mode_exports_csv() {
    let home = TempDir::new().unwrap();
    let export_path = home.path().join("out.csv");
    let input = format!(
        "add 2024-02-10 Books 42.50 \"calculus, 3rd ed\"\nexport {}\nexit\n",
        export_path.display()
    );

    script_command(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Exported 1 expense(s)"));

    let csv = std::fs::read_to_string(&export_path).unwrap();
    assert_eq!(
        csv,
        "Date,Category,Amount,Description\n2024-02-10,Books,42.50,\"calculus, 3rd ed\"\n"
    );
}

#[test]
fn script_mode_reports_rejections_and_continues() {
    let home = TempDir::new().unwrap();
    let input = "\
add 2024-01-01 Food -5
category add \"\"
budget set -1
sumary
list
";

    script_command(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("expense amounts cannot be negative"))
        .stdout(contains("Category name cannot be empty"))
        .stdout(contains("the monthly budget cannot be negative"))
        .stdout(contains("Did you mean `summary`?"))
        .stdout(contains("No expenses recorded yet"));
}

#[test]
fn empty_session_summary_shows_no_expenses() {
    let home = TempDir::new().unwrap();
    script_command(&home)
        .write_stdin("summary\nchart\n")
        .assert()
        .success()
        .stdout(contains("Total expenses : RM 0.00"))
        .stdout(contains("No expenses recorded yet"))
        .stdout(contains("Expenses by category").not());
}

#[test]
fn unlisted_category_warns_but_records() {
    let home = TempDir::new().unwrap();
    script_command(&home)
        .write_stdin("add 2024-03-01 Gym 25\ncategory list\n")
        .assert()
        .success()
        .stdout(contains("`Gym` is not in the category list"))
        .stdout(contains("Gym (unlisted)"));
}

#[test]
fn summary_json_is_machine_readable() {
    let home = TempDir::new().unwrap();
    let output = script_command(&home)
        .write_stdin("add 2024-01-01 Food 12.5\nadd 2024-01-01 Books 7.5\nsummary --json\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let json_start = stdout.find('{').expect("json object in output");
    let value: serde_json::Value = serde_json::from_str(&stdout[json_start..]).unwrap();
    assert_eq!(value["total"], "20.0");
    assert_eq!(value["top_category"], "Food");
    assert_eq!(value["status"], "Ok");
    assert_eq!(value["span_days"], 1);
}

#[test]
fn oversized_amounts_are_rejected_without_crashing() {
    let home = TempDir::new().unwrap();
    let input = "\
add 2024-01-01 Food 79228162514264337593543950335
add 2024-01-01 Food 79228162514264337593543950335
budget set 79228162514264337593543950335
add 2024-01-01 Food 1000000000000
add 2024-01-02 Food 1000000000000
summary
";

    script_command(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("cannot be negative or exceed 1000000000000"))
        .stdout(contains("Total expenses : RM 2000000000000.00"))
        .stdout(contains("Budget status  : EXCEEDED"));
}
