//! End-to-end tests for `furnish doctor`.

mod fixtures;
use fixtures::*;

#[test]
fn test_doctor_passes() {
    let output = run(&["doctor"]);
    assert_exit_code(&output, 0);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("asset catalog"));
    assert!(stdout.contains("bundled presets"));
}

#[test]
fn test_doctor_json() {
    let output = run(&["doctor", "--json"]);
    assert_exit_code(&output, 0);

    let result = stdout_json(&output);
    assert_eq!(result["ok"], true);
    let checks = result["checks"].as_array().unwrap();
    assert!(checks.iter().all(|c| c["ok"] == true));
    assert!(checks.iter().any(|c| c["name"] == "asset catalog"));
    assert!(checks.iter().any(|c| c["name"] == "render capability"));
}
