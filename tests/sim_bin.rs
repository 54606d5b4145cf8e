use std::process::Command;

fn flotilla_at(level: &str, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_flotilla"))
        .args(args)
        .env(flotilla::LOG_ENV, level)
        .output()
        .expect("failed to run flotilla binary")
}

fn flotilla(args: &[&str]) -> std::process::Output {
    flotilla_at("error", args)
}

#[test]
fn simulate_prints_json_summary() {
    let output = flotilla(&["simulate", "--seed", "1", "--size", "12", "--json"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    let winner = v["winner"].as_str().expect("winner missing");
    assert!(winner == "player1" || winner == "player2");
    assert!(v["turns"].as_u64().unwrap() >= 1);
    assert!(v["shots"].as_u64().unwrap() > 0);
    let sunk = [v["sunk"]["player1"].as_u64().unwrap(), v["sunk"]["player2"].as_u64().unwrap()];
    assert!(sunk.contains(&6));
}

#[test]
fn same_seed_same_game() {
    let args = ["simulate", "--seed", "42", "--size", "12", "--json"];
    let first = flotilla(&args);
    let second = flotilla(&args);
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn trace_prints_one_report_per_turn() {
    let output = flotilla(&["simulate", "--seed", "3", "--size", "12", "--trace", "--json"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let lines: Vec<&str> = stdout.lines().collect();
    let (summary, reports) = lines.split_last().expect("no output");
    let summary: serde_json::Value = serde_json::from_str(summary).unwrap();
    assert!(!reports.is_empty());
    let first: serde_json::Value = serde_json::from_str(reports[0]).unwrap();
    assert_eq!(first["turn"], 1);
    assert_eq!(first["attacker"], "One");
    let shots: usize = reports
        .iter()
        .map(|l| {
            let r: serde_json::Value = serde_json::from_str(l).unwrap();
            r["shots"].as_array().unwrap().len()
        })
        .sum();
    assert_eq!(summary["shots"].as_u64().unwrap() as usize, shots);
}

#[test]
fn max_turns_can_end_without_winner() {
    let output = flotilla(&["simulate", "--seed", "9", "--max-turns", "1", "--json"]);
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(v["winner"].is_null());
    assert_eq!(v["turns"], 1);
}

#[test]
fn rejects_oversized_board() {
    let output = flotilla(&["simulate", "--size", "40"]);
    assert!(!output.status.success());
}

#[test]
fn classes_lists_every_hull() {
    let output = flotilla(&["classes"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    for abbrev in ["BB", "CC", "DD", "FF", "SM", "CV"] {
        assert!(stdout.contains(abbrev), "missing {abbrev}");
    }
}

#[test]
fn log_lines_name_their_module() {
    let output = flotilla_at("info", &["simulate", "--seed", "1", "--size", "12", "--json"]);
    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.lines().any(|l| l.starts_with("INFO  fleet: ")));
    assert!(stderr.lines().any(|l| l.starts_with("INFO  game: ") && l.contains("wins")));

    let quiet = flotilla_at("error", &["simulate", "--seed", "1", "--size", "12", "--json"]);
    assert!(quiet.stderr.is_empty());
}
