//! End-to-end tests for `furnish validate`.

mod fixtures;
use fixtures::*;

#[test]
fn test_validate_valid_query() {
    let output = run(&["validate", "--query", "type=wardrobe&w=150&sections=2"]);
    assert_exit_code(&output, 0);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("✓"), "output should indicate success");
}

#[test]
fn test_validate_valid_query_json() {
    let output = run(&[
        "validate",
        "--query",
        "type=wardrobe&w=150&sections=2",
        "--json",
    ]);
    assert_exit_code(&output, 0);

    let result = stdout_json(&output);
    assert_eq!(result["valid"], true);
    assert_eq!(result["violations"].as_array().unwrap().len(), 0);
}

#[test]
fn test_validate_section_count_violation() {
    // stand allows at most 3 sections
    let output = run(&["validate", "--query", "type=stand&sections=4", "--json"]);
    assert_exit_code(&output, 1);

    let result = stdout_json(&output);
    assert_eq!(result["valid"], false);
    let violations = result["violations"].as_array().unwrap();
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0]["field"], "selected_sections");
    assert_eq!(violations[0]["kind"], "section-count-out-of-range");
    assert_eq!(violations[0]["allowed"], "1..3 sections");
}

#[test]
fn test_validate_clamp_reports_adjustments() {
    let output = run(&[
        "validate",
        "--query",
        "type=wardrobe&w=400",
        "--policy",
        "clamp",
        "--json",
    ]);
    assert_exit_code(&output, 0);

    let result = stdout_json(&output);
    assert_eq!(result["valid"], true);
    let adjustments = result["adjustments"].as_array().unwrap();
    assert_eq!(adjustments.len(), 1);
    assert_eq!(adjustments[0]["field"], "width");
    assert_eq!(adjustments[0]["to"], 300.0);
}

#[test]
fn test_validate_reject_policy_blocks() {
    let output = run(&[
        "validate",
        "--query",
        "type=wardrobe&w=400",
        "--policy",
        "reject",
        "--json",
    ]);
    assert_exit_code(&output, 1);

    let result = stdout_json(&output);
    assert_eq!(result["valid"], false);
    assert_eq!(result["violations"][0]["kind"], "dimension-out-of-range");
}

#[test]
fn test_validate_reports_degraded_query_fields() {
    let output = run(&[
        "validate",
        "--query",
        "type=wardrobe&w=abc&sections=2",
        "--json",
    ]);
    assert_exit_code(&output, 0);

    let result = stdout_json(&output);
    let issues = result["query_issues"].as_array().unwrap();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0]["key"], "w");
    assert_eq!(issues[0]["kind"], "invalid-value");
}
