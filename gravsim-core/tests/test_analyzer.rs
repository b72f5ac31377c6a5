//! Analyzer diagnostics for scenarios

use gravsim_core::tests::test_helpers::test_data_path;
use gravsim_core::{analyze_scenario, load_scenario, parse_scenario, DiagnosticSeverity};

#[test]
fn test_valid_scenario_is_clean() {
    let scenario = load_scenario(test_data_path("two_body.json")).unwrap();
    let diagnostics = analyze_scenario(&scenario);
    assert!(diagnostics.is_empty(), "{:?}", diagnostics);
}

#[test]
fn test_coincident_bodies_warn() {
    let scenario = load_scenario(test_data_path("coincident.json")).unwrap();
    let diagnostics = analyze_scenario(&scenario);

    assert!(!diagnostics.has_errors());
    let warnings: Vec<_> = diagnostics.warnings().collect();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].severity, DiagnosticSeverity::Warning);
    assert!(warnings[0].message.contains("'a' and 'b' share position"));
}

#[test]
fn test_zero_steps_warns() {
    let scenario = parse_scenario(
        r#"{ "g": 1.0, "steps": 0, "bodies": [
            { "name": "a", "mass": 1.0, "pos": [0.0, 0.0] }
        ] }"#,
    )
    .unwrap();
    let diagnostics = analyze_scenario(&scenario);

    assert!(!diagnostics.has_errors());
    assert_eq!(diagnostics.warnings().count(), 1);
}

#[test]
fn test_every_problem_is_reported() {
    let scenario = parse_scenario(
        r#"{ "g": -1.0, "dt": 0.0, "softening": -2.0, "bodies": [
            { "name": "a", "mass": 0.0, "pos": [0.0, 0.0] },
            { "name": "a", "mass": 1.0, "pos": [1.0, 0.0] }
        ] }"#,
    )
    .unwrap();
    let diagnostics = analyze_scenario(&scenario);

    // g, dt, softening, mass of the first 'a', duplicate 'a'
    assert_eq!(diagnostics.errors().count(), 5);
    let rendered: Vec<String> = diagnostics.iter().map(|d| d.to_string()).collect();
    assert!(rendered.iter().any(|s| s.starts_with("error: mass must be finite")
        && s.ends_with("(body 'a')")));
}
