mod support;

use predicates::str::contains;

#[test]
fn todo_help_works() {
    support::todo_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("Todo Board"));
}

#[test]
fn subcommand_help_works() {
    for cmd in ["list", "count", "replay", "tui"] {
        support::todo_cmd().arg(cmd).arg("--help").assert().success();
    }
}

#[test]
fn list_uses_bundled_sample_without_seed() -> Result<(), Box<dyn std::error::Error>> {
    let dir = support::TestDir::new()?;
    dir.todo_cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(contains("bundled sample"))
        .stdout(contains("Urgent ("))
        .stdout(contains("Completed ("));
    Ok(())
}

#[test]
fn tui_rejects_json() -> Result<(), Box<dyn std::error::Error>> {
    let dir = support::TestDir::new()?;
    dir.todo_cmd()
        .args(["tui", "--json"])
        .assert()
        .code(2)
        .stdout(contains("\"status\": \"error\""));
    Ok(())
}
