use std::process::Command;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "forfeit-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

#[test]
fn cli_runs_simulation_and_writes_json_report() {
    let exe = env!("CARGO_BIN_EXE_forfeit-tester");
    let output_path = temp_path("json");
    let status = Command::new(exe)
        .args([
            "--players",
            "3",
            "--spins-per-turn",
            "2",
            "--rounds",
            "2",
            "--policies",
            "keen,coin",
            "--seeds",
            "7,FW-DISCO42",
            "--iterations",
            "3",
            "--report",
            "json",
            "--output",
        ])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());

    let content = std::fs::read_to_string(&output_path).expect("read report");
    let results: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let results = results.as_array().expect("array of scenarios");
    // 2 policies x 2 seeds.
    assert_eq!(results.len(), 4);
    assert!(results.iter().all(|r| r["passed"] == true));
    assert!(
        results
            .iter()
            .any(|r| r["seed_label"] == "FW-DISCO42")
    );
    let _ = std::fs::remove_file(output_path);
}

#[test]
fn cli_rejects_single_player_game() {
    let exe = env!("CARGO_BIN_EXE_forfeit-tester");
    let output = Command::new(exe)
        .args(["--players", "1"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
}

#[test]
fn cli_rejects_bad_seed_token() {
    let exe = env!("CARGO_BIN_EXE_forfeit-tester");
    let output = Command::new(exe)
        .args(["--seeds", "not-a-seed"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
}
