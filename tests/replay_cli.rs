mod support;

use predicates::str::contains;
use serde_json::Value;

use support::TestDir;

const SCRIPT: &str = r#"{"op":"add","title":"Buy milk","description":"2% milk"}
{"op":"toggle","id":5,"flag":"urgent"}

{"op":"toggle","id":1,"flag":"completed"}
{"op":"remove","id":2}
{"op":"remove","id":42}
"#;

#[test]
fn replay_applies_operations_to_seed() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TestDir::new()?;
    let seed = dir.write_seed()?;
    let script = dir.write_file("ops.jsonl", SCRIPT)?;

    let output = dir
        .todo_cmd()
        .arg("--seed")
        .arg(&seed)
        .arg("replay")
        .arg(&script)
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: Value = serde_json::from_slice(&output)?;
    let data = &json["data"];

    assert_eq!(data["applied"], 5);
    let urgent = data["board"]["urgent"].as_array().expect("urgent");
    assert_eq!(urgent.len(), 1);
    assert_eq!(urgent[0]["id"], 5);
    assert_eq!(urgent[0]["title"], "Buy milk");

    let normal = data["board"]["normal"].as_array().expect("normal");
    assert_eq!(normal.len(), 1);
    assert_eq!(normal[0]["id"], 4);

    let completed = data["board"]["completed"].as_array().expect("completed");
    let ids: Vec<i64> = completed.iter().filter_map(|t| t["id"].as_i64()).collect();
    assert_eq!(ids, vec![1, 3]);
    Ok(())
}

#[test]
fn replay_reads_stdin() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TestDir::new()?;
    let seed = dir.write_seed()?;

    dir.todo_cmd()
        .arg("--seed")
        .arg(&seed)
        .args(["replay", "-"])
        .write_stdin("{\"op\":\"add\",\"title\":\"From stdin\"}\n")
        .assert()
        .success()
        .stdout(contains("Operations: 1"))
        .stdout(contains("[5] From stdin"));
    Ok(())
}

#[test]
fn replay_reports_bad_line() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TestDir::new()?;
    let seed = dir.write_seed()?;
    let script = dir.write_file("bad.jsonl", "{\"op\":\"add\",\"title\":\"ok\"}\nnot json\n")?;

    dir.todo_cmd()
        .arg("--seed")
        .arg(&seed)
        .arg("replay")
        .arg(&script)
        .assert()
        .code(2)
        .stderr(contains("line 2"));
    Ok(())
}

#[test]
fn replay_missing_script() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TestDir::new()?;

    dir.todo_cmd()
        .args(["replay", "missing.jsonl"])
        .assert()
        .code(2)
        .stderr(contains("replay script not found"));
    Ok(())
}
