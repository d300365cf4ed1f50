use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn plays_a_round_and_quits() {
    Command::cargo_bin("blackjack")
        .expect("binary builds")
        .args(["--seed", "7", "--pace-ms", "0"])
        .write_stdin("s\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hit or stick"))
        .stdout(predicate::str::contains("Play again"))
        .stdout(predicate::str::contains("Thanks for playing."));
}

#[test]
fn rejects_an_empty_shoe() {
    Command::cargo_bin("blackjack")
        .expect("binary builds")
        .args(["--packs", "0", "--pace-ms", "0"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("pack"));
}

#[test]
fn records_rounds_as_jsonl() {
    let dir = tempfile::tempdir().expect("temp dir");
    let record = dir.path().join("rounds.jsonl");

    Command::cargo_bin("blackjack")
        .expect("binary builds")
        .args(["--seed", "11", "--pace-ms", "0", "--record"])
        .arg(&record)
        .write_stdin("s\ny\ns\nn\n")
        .assert()
        .success();

    let contents = std::fs::read_to_string(&record).expect("record file written");
    assert_eq!(contents.lines().count(), 2);
    for line in contents.lines() {
        let row: serde_json::Value = serde_json::from_str(line).expect("valid json row");
        assert!(row["round"].is_u64());
    }
}
