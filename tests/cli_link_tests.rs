//! End-to-end tests for `furnish link`.

mod fixtures;
use fixtures::*;

#[test]
fn test_encode_builds_canonical_query() {
    let output = run(&[
        "link",
        "encode",
        "--type",
        "wardrobe",
        "--width",
        "150",
        "--column",
        "double-door",
        "--column",
        "single-door",
    ]);
    assert_exit_code(&output, 0);

    let query = String::from_utf8_lossy(&output.stdout);
    let query = query.trim();
    assert!(query.starts_with("type=wardrobe&w=150&"));
    assert!(query.contains("sections=2"));
    assert!(query.contains("c0=double-door"));
    assert!(query.contains("c1=single-door"));
}

#[test]
fn test_encode_decode_round_trip() {
    let encoded = run(&[
        "link",
        "encode",
        "--type",
        "stand",
        "--width",
        "90",
        "--color",
        "oak",
        "--opening",
        "profile-handle",
    ]);
    assert_exit_code(&encoded, 0);
    let query = String::from_utf8_lossy(&encoded.stdout).trim().to_string();

    let decoded = run(&["link", "decode", "--query", &query, "--json"]);
    assert_exit_code(&decoded, 0);

    let result = stdout_json(&decoded);
    assert_eq!(result["configuration"]["furniture_type"], "stand");
    assert_eq!(result["configuration"]["dimensions"]["width"], 90.0);
    assert_eq!(result["configuration"]["color"], "oak");
    assert_eq!(result["configuration"]["options"]["opening"], "profile-handle");
    assert_eq!(result["query_issues"].as_array().unwrap().len(), 0);
    // decoding is canonical: re-encoding yields the same query
    assert_eq!(result["canonical_query"], query.as_str());
}

#[test]
fn test_decode_tampered_type_degrades() {
    let output = run(&["link", "decode", "--query", "type=hovercraft", "--json"]);
    assert_exit_code(&output, 0);

    let result = stdout_json(&output);
    assert_eq!(result["configuration"]["furniture_type"], "wardrobe");
    assert_eq!(result["query_issues"][0]["kind"], "unknown-furniture-type");
}

#[test]
fn test_encode_rejects_unknown_type() {
    let output = run(&["link", "encode", "--type", "hovercraft"]);
    assert_exit_code(&output, 2);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("hovercraft"));
}

#[test]
fn test_encode_rejects_unknown_column_kind() {
    let output = run(&[
        "link",
        "encode",
        "--type",
        "wardrobe",
        "--column",
        "portal-door",
    ]);
    assert_exit_code(&output, 2);
}
