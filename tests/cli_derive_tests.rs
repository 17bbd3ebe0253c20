//! End-to-end tests for `furnish derive`.

mod fixtures;
use fixtures::*;

#[test]
fn test_derive_wardrobe_two_sections() {
    let output = run(&[
        "derive",
        "--query",
        "type=wardrobe&w=150&h=210&d=60&ph=5&sections=2&c0=double-door&c1=single-door",
        "--json",
    ]);
    assert_exit_code(&output, 0);

    let result = stdout_json(&output);
    assert_eq!(result["layout"]["derived_sections"], 2);

    let columns = result["layout"]["columns"].as_array().unwrap();
    assert_eq!(columns.len(), 2);

    // the double door has no opening side; the single door defaults left
    assert!(columns[0].get("door_opening_side").is_none());
    assert_eq!(columns[1]["door_opening_side"], "left");

    // widths sum to the overall width minus side panels and divider
    let sum: f64 = columns.iter().map(|c| c["width"].as_f64().unwrap()).sum();
    let expected = 150.0 - 2.0 * 2.0 - 1.8;
    assert!((sum - expected).abs() < 1e-3, "sum={sum}, expected={expected}");

    // the configured price is stamped
    assert!(result["configuration"]["price"].as_i64().unwrap() > 0);
}

#[test]
fn test_derive_emits_canonical_query() {
    let output = run(&["derive", "--query", "type=stand&w=90", "--json"]);
    assert_exit_code(&output, 0);

    let result = stdout_json(&output);
    let canonical = result["canonical_query"].as_str().unwrap();
    assert!(canonical.starts_with("type=stand&w=90&"));
    assert!(canonical.contains("&color=white&"));
}

#[test]
fn test_derive_with_viewer_config() {
    let output = run(&["derive", "--query", "type=bedside", "--viewer", "--json"]);
    assert_exit_code(&output, 0);

    let result = stdout_json(&output);
    let viewer = &result["viewer"];
    assert!(viewer["camera_distance"].is_array());
    assert!(viewer["azimuth"].is_array());
    assert!(viewer["target"].is_array());
}

#[test]
fn test_derive_tampered_type_degrades() {
    let output = run(&["derive", "--query", "type=hovercraft&w=150", "--json"]);
    assert_exit_code(&output, 0);

    let result = stdout_json(&output);
    assert_eq!(result["configuration"]["furniture_type"], "wardrobe");
    let issues = result["query_issues"].as_array().unwrap();
    assert!(issues
        .iter()
        .any(|i| i["kind"] == "unknown-furniture-type"));
}

#[test]
fn test_derive_mirror_variant_imagery() {
    let output = run(&[
        "derive",
        "--query",
        "type=wardrobe&sections=2&c0=single-door&mirror0=1&c1=single-door",
        "--json",
    ]);
    assert_exit_code(&output, 0);

    let result = stdout_json(&output);
    let columns = result["layout"]["columns"].as_array().unwrap();
    let first = columns[0]["arrangement_image"].as_str().unwrap();
    let second = columns[1]["arrangement_image"].as_str().unwrap();
    assert!(first.ends_with("-mirrored.webp"), "got {first}");
    assert!(!second.ends_with("-mirrored.webp"), "got {second}");
}

#[test]
fn test_derive_human_output() {
    let output = run(&["derive", "--query", "type=tv-stand"]);
    assert_exit_code(&output, 0);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("TV Stand"));
    assert!(stdout.contains("3 sections"));
}
