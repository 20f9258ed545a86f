use std::process::Command;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "livescore-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

#[test]
fn cli_list_events_writes_output() {
    let exe = env!("CARGO_BIN_EXE_livescore");
    let output_path = temp_path("list");
    let status = Command::new(exe)
        .args(["--list-events", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    assert!(content.contains("Available events"));
    assert!(content.contains("333fm"));
}

#[test]
fn cli_scores_round_with_json_report() {
    let exe = env!("CARGO_BIN_EXE_livescore");
    let output_path = temp_path("json");
    let status = Command::new(exe)
        .args([
            "--event",
            "333",
            "--results",
            "9.00,8.00,7.00,40.00,6.00",
            "--time-limit",
            "30.00",
            "--report",
            "json",
            "--output",
        ])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    let report: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(report["event_id"], "333");
    assert_eq!(report["attempts"][3], -1);
    assert_eq!(report["best"], 600);
    assert_eq!(report["formatted"]["average"], "8.00");
}

#[test]
fn cli_applies_cutoff_in_markdown_report() {
    let exe = env!("CARGO_BIN_EXE_livescore");
    let output_path = temp_path("markdown");
    let status = Command::new(exe)
        .args([
            "--event",
            "333",
            "--results",
            "1:10.00,1:05.00,58.00,,",
            "--cutoff-attempts",
            "2",
            "--cutoff-result",
            "1:00.00",
            "--report",
            "markdown",
            "--output",
        ])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    assert!(content.contains("- **Cutoff**: not met"));
    assert!(content.contains("| 3 | - |"));
    assert!(content.contains("- **Best**: 1:05.00"));
}

#[test]
fn cli_rejects_unknown_event() {
    let exe = env!("CARGO_BIN_EXE_livescore");
    let output = Command::new(exe)
        .args(["--event", "999", "--results", "10.00"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown event"));
}

#[test]
fn cli_rejects_malformed_results() {
    let exe = env!("CARGO_BIN_EXE_livescore");
    let output = Command::new(exe)
        .args(["--event", "333fm", "--results", "28,twenty"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("attempt 2"));
}
