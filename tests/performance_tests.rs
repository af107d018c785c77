use assert_cmd::cargo_bin;
use std::process::Command;

mod common;

#[test]
fn test_many_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("many_sessions.csv");
    common::generate_events_csv(&path, 5_000).expect("Failed to generate events");

    let output = Command::new(cargo_bin!("bankform"))
        .arg(&path)
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success(), "Binary failed to replay sessions");

    let stdout = String::from_utf8_lossy(&output.stdout);
    // Header + one row per session
    assert_eq!(stdout.lines().count(), 5_001);
    assert!(stdout.lines().skip(1).all(|line| line.contains(",linked,false,")));
    assert!(stdout.contains("5000,linked,false,Test Bank,6789,10 OFF,true,"));
}
