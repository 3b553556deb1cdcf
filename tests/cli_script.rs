use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn run_script(home: &TempDir, script: &str) -> assert_cmd::assert::Assert {
    let mut cmd = Command::cargo_bin("ukay_cli").unwrap();
    cmd.env("UKAY_CLI_SCRIPT", "1")
        .env("UKAY_CORE_HOME", home.path())
        .write_stdin(script.to_string())
        .assert()
}

#[test]
fn script_mode_runs_basic_flow() {
    let home = TempDir::new().unwrap();
    let script = "\
new shop
bundle add \"Jacket Lot\" jackets 6000 20
item add 1 \"Denim jacket\" 700
sale record 2024-01-02 1
report 2024-01-02
save
exit
";
    run_script(&home, script)
        .success()
        .stdout(contains("New inventory created: shop"))
        .stdout(contains("Bundle added: Jacket Lot"))
        .stdout(contains("Sale recorded for 2024-01-02"))
        .stdout(contains("Inventory saved"));

    let file = home.path().join("inventories").join("shop.json");
    let json = std::fs::read_to_string(file).unwrap();
    assert!(json.contains("Jacket Lot"));
    assert!(json.contains("Denim jacket"));
}

#[test]
fn script_mode_aborts_on_bad_command() {
    let home = TempDir::new().unwrap();
    let script = "new shop\nnonsense\nsave\n";
    run_script(&home, script)
        .failure()
        .stderr(contains("unknown command"));
    assert!(!home.path().join("inventories").join("shop.json").exists());
}

#[test]
fn reopening_restores_saved_state() {
    let home = TempDir::new().unwrap();
    run_script(
        &home,
        "new shop\nbundle add \"Hoodie Lot\" hoodies 1000 10\nsave\nexit\n",
    )
    .success();

    run_script(&home, "open shop\nbundle list\nexit\n")
        .success()
        .stdout(contains("Hoodie Lot"));
}
