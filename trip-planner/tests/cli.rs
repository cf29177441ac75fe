use std::process::Command;

#[test]
fn fatal_error_is_reported_once() {
    let dir = tempfile::tempdir().unwrap();
    let clients = dir.path().join("requests.cli");
    std::fs::write(&clients, "0\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_trip-planner"))
        .arg(dir.path().join("missing.maps"))
        .arg(&clients)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("failed to read").count(), 1, "{stderr}");
    assert!(stderr.contains("missing.maps"));
}
