use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Temporary data directory the binary is pointed at
struct TestFixture {
    temp_dir: TempDir,
}

impl TestFixture {
    fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("expenses").expect("Failed to find expenses binary");
        cmd.env("EXPENSE_TRACKER_DATA_DIR", self.temp_dir.path());
        cmd
    }

    /// Record an expense and return its short ID
    fn add(&self, amount: &str, category: &str, description: &str, date: &str) -> String {
        let output = self
            .command()
            .args(["add", amount, category, description, "--date", date])
            .output()
            .expect("Failed to run add");
        assert!(
            output.status.success(),
            "add failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        let stdout = String::from_utf8_lossy(&output.stdout);
        stdout
            .lines()
            .next()
            .and_then(|line| line.split_whitespace().nth(2))
            .expect("add should print the new ID")
            .to_string()
    }
}

#[test]
fn test_add_then_list() {
    let fixture = TestFixture::new();
    let id = fixture.add("12.50", "food", "Coffee beans", "2025-01-05");
    assert!(id.starts_with("exp-"));

    fixture
        .command()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Coffee beans"))
        .stdout(predicate::str::contains("$12.50"))
        .stdout(predicate::str::contains("Jan 5, 2025"));
}

#[test]
fn test_add_rejects_invalid_input() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["add", "0", "food", "Free sample"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Amount must be greater than zero"));

    fixture
        .command()
        .args(["add", "5", "food", "ab"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 3 characters"));

    fixture
        .command()
        .args(["add", "5", "gadgets", "New phone case"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category"));

    fixture
        .command()
        .args(["add", "12.999", "food", "Bulk rice"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid money format"));

    fixture
        .command()
        .args(["add", "100000000000000000", "bills", "Typo rent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Amount is too large"));

    fixture
        .command()
        .args(["add", "2000000000", "bills", "Typo rent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Amount must be at most"));

    fixture
        .command()
        .args(["list", "--min", "1.234"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid money format"));
}

#[test]
fn test_list_filters_and_groups() {
    let fixture = TestFixture::new();
    fixture.add("8.00", "food", "Bagels", "2025-02-01");
    fixture.add("60.00", "bills", "Electric bill", "2025-02-03");
    fixture.add("15.00", "food", "Pizza", "2025-02-10");

    fixture
        .command()
        .args(["list", "--category", "food", "--group", "category"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Food (2 expenses, $23.00)"))
        .stdout(predicate::str::contains("Electric bill").not());

    fixture
        .command()
        .args(["list", "--min", "10", "--search", "pizza"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pizza"))
        .stdout(predicate::str::contains("Bagels").not());
}

#[test]
fn test_export_csv_to_stdout() {
    let fixture = TestFixture::new();
    fixture.add("30.00", "shopping", "Shirt, blue", "2025-03-02");
    fixture.add("4.25", "transport", "Bus \"express\"", "2025-03-01");

    let output = fixture
        .command()
        .args(["export", "--format", "csv", "--sort", "amount", "--order", "asc"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let csv = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        csv,
        "Date,Amount,Category,Description\n\
         \"Mar 1, 2025\",\"4.25\",\"Transportation\",\"Bus \"\"express\"\"\"\n\
         \"Mar 2, 2025\",\"30.00\",\"Shopping\",\"Shirt, blue\"\n"
    );
}

#[test]
fn test_export_json_to_file() {
    let fixture = TestFixture::new();
    fixture.add("9.99", "entertainment", "Movie rental", "2025-04-04");
    let out = fixture.temp_dir.path().join("export.json");

    fixture
        .command()
        .args(["export", "--format", "json", "--pretty", "--output"])
        .arg(&out)
        .assert()
        .success();

    let text = std::fs::read_to_string(&out).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["metadata"]["expense_count"], 1);
    assert_eq!(value["expenses"][0]["description"], "Movie rental");
}

#[test]
fn test_presets_round_trip() {
    let fixture = TestFixture::new();
    fixture.add("8.00", "food", "Bagels", "2025-02-01");
    fixture.add("60.00", "bills", "Electric bill", "2025-02-03");

    fixture
        .command()
        .args(["preset", "save", "Utilities", "--category", "bills"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved preset 'Utilities'"));

    fixture
        .command()
        .args(["preset", "save", "utilities"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    fixture
        .command()
        .args(["preset", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("categories: Bills"));

    fixture
        .command()
        .args(["list", "--preset", "utilities"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Electric bill"))
        .stdout(predicate::str::contains("Bagels").not());

    fixture
        .command()
        .args(["preset", "delete", "Utilities"])
        .assert()
        .success();

    fixture
        .command()
        .args(["list", "--preset", "utilities"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Preset not found"));
}

#[test]
fn test_summary_json() {
    let fixture = TestFixture::new();
    fixture.add("10.00", "food", "Lunch", "2025-01-01");
    fixture.add("30.00", "bills", "Phone bill", "2025-01-02");

    let output = fixture
        .command()
        .args(["summary", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["expense_count"], 2);
    assert_eq!(value["total_expenses"], 4000);
    assert_eq!(value["average_expense"], 2000);
    assert_eq!(value["top_category"]["category"], "Bills");
    assert_eq!(value["highest_expense"]["description"], "Phone bill");
}

#[test]
fn test_edit_delete_and_history() {
    let fixture = TestFixture::new();
    let id = fixture.add("5.00", "food", "Tea", "2025-05-05");

    fixture
        .command()
        .args(["edit", &id, "--amount", "6.50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$6.50"));

    fixture
        .command()
        .args(["edit", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to change"));

    fixture
        .command()
        .args(["delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted expense"));

    fixture
        .command()
        .args(["history", "--plain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE Expense"))
        .stdout(predicate::str::contains("amount: $5.00 -> $6.50"))
        .stdout(predicate::str::contains("DELETE Expense"));
}

#[test]
fn test_config_changes_currency() {
    let fixture = TestFixture::new();
    fixture.add("3.00", "other", "Stamps", "2025-06-06");

    fixture
        .command()
        .args(["config", "--currency", "€"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Currency symbol: €"));

    fixture
        .command()
        .args(["config", "--sort", "amount", "--order", "asc", "--group", "amount-range"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Default sort:    amount asc"))
        .stdout(predicate::str::contains("Default group:   amount-range"));

    fixture
        .command()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("€3.00"));
}
