use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

const BIN: &str = "expense_tracker";

fn script_command(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BIN).unwrap();
    cmd.env("EXPENSE_TRACKER_CLI_SCRIPT", "1")
        .env(
            "EXPENSE_TRACKER_CONFIG",
            config_dir.path().join("config.json"),
        )
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn script_mode_runs_basic_flow() {
    let dir = TempDir::new().unwrap();
    let input = "6\nAlice\n\
                 1\n100\nPaycheck\n4\n2024-01-01\n\
                 2\n30\nGroceries\n1\n2024-01-02\n\
                 3\n5\n8\n";

    script_command(&dir)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Logged in to the account: Alice"))
        .stdout(contains("Credit Transaction added successfully."))
        .stdout(contains("Debit Transaction added successfully."))
        .stdout(contains("Transactions for account: Alice"))
        .stdout(contains("Amount: -30.00"))
        .stdout(contains("Account Balance for Alice: 70.00"))
        .stdout(contains("Exiting Expense Tracker."));
}

#[test]
fn script_mode_lists_known_accounts_on_login() {
    let dir = TempDir::new().unwrap();
    let input = "7\n6\nAlice\n\
                 1\n10\nGift\n4\n2024-01-01\n\
                 7\n6\nBob\n8\n";

    script_command(&dir)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Logged out from the current account."))
        .stdout(contains("Please log in to an account first.").not())
        .stdout(contains("Accounts with transactions: Alice"))
        .stdout(contains("Logged in to the account: Bob"));
}

#[test]
fn script_mode_reports_missing_login_and_bad_input() {
    let dir = TempDir::new().unwrap();
    script_command(&dir)
        .write_stdin("3\nhello\n12\n8\n")
        .assert()
        .success()
        .stdout(contains("Please log in to an account first."))
        .stdout(contains(
            "Invalid input. Please enter a valid menu option (1-8).",
        ))
        .stdout(contains("Invalid option. Please try again."));
}

#[test]
fn script_mode_balance_without_transactions() {
    let dir = TempDir::new().unwrap();
    script_command(&dir)
        .write_stdin("6\nBob\n5\n4\nfod\n")
        .assert()
        .success()
        .stdout(contains("No account balance found for the account."))
        .stdout(contains("Account Balance for Bob: none"))
        .stdout(contains("No transactions found for the category: fod"))
        .stdout(contains("Did you mean `food`?"));
}

#[test]
fn script_mode_rejects_overdraft() {
    let dir = TempDir::new().unwrap();
    script_command(&dir)
        .write_stdin("6\nCarol\n2\n15\n8\n")
        .assert()
        .success()
        .stdout(contains("Debit Transaction failed: Insufficient balance"))
        .stdout(contains("Enter a description").not());
}

#[test]
fn config_file_supplies_categories() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{ "categories": ["rent", "travel"], "show_banner": false }"#,
    )
    .unwrap();

    script_command(&dir)
        .write_stdin("6\nDan\n1\n500\nDeposit\n1\n2024-02-01\n4\nrent\n8\n")
        .assert()
        .success()
        .stdout(contains("1. rent"))
        .stdout(contains("2. travel"))
        .stdout(contains("Transactions for category: rent"))
        .stdout(contains("Category: rent"));
}

#[test]
fn invalid_config_fails_startup() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), r#"{ "categories": [] }"#).unwrap();

    script_command(&dir)
        .write_stdin("8\n")
        .assert()
        .failure()
        .stderr(contains("Invalid configuration"));
}
