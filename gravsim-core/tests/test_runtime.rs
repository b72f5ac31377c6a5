//! Runtime context: stepping, trails and headless runs

use gravsim_core::tests::test_helpers::{approx_eq, run_scenario_file, test_data_path};
use gravsim_core::{
    build_simulation_context, build_simulation_context_from_source, get_body_states,
    load_scenario, step_simulation, SimError,
};

#[test]
fn test_two_body_run_summary() {
    let result = run_scenario_file("two_body.json").unwrap();

    assert_eq!(result.steps, 2000);
    assert!(approx_eq(result.elapsed, 2.0, 1e-9));
    assert_eq!(result.bodies.len(), 2);
    assert!(result.energy_drift < 0.01, "drift {}", result.energy_drift);
    assert!(result.initial_energy < 0.0);
}

#[test]
fn test_sun_earth_in_si_units() {
    let result = run_scenario_file("sun_earth.json").unwrap();
    let earth = result.bodies.iter().find(|b| b.name == "Earth").unwrap();

    // 100 s of travel at 29.78 km/s, falling slightly sunward
    assert!(approx_eq(earth.pos.y, 2.978e6, 10.0), "y = {}", earth.pos.y);
    assert!(earth.pos.x < 1.496e11);
    assert!(earth.vel.x < 0.0);
}

#[test]
fn test_step_simulation_reports_completion() {
    let source = r#"{ "g": 1.0, "dt": 0.01, "steps": 3, "bodies": [
        { "name": "a", "mass": 1.0, "pos": [0.0, 0.0] },
        { "name": "b", "mass": 1.0, "pos": [1.0, 0.0] }
    ] }"#;
    let (mut ctx, diagnostics) = build_simulation_context_from_source(source).unwrap();
    assert!(diagnostics.is_empty());

    assert!(!step_simulation(&mut ctx).unwrap());
    assert!(!step_simulation(&mut ctx).unwrap());
    assert!(step_simulation(&mut ctx).unwrap());
    assert_eq!(ctx.current_step, 3);
    assert!(approx_eq(ctx.elapsed, 0.03, 1e-12));

    // Stepping on after the last scheduled step keeps going quietly
    assert!(!step_simulation(&mut ctx).unwrap());
    assert!(!step_simulation(&mut ctx).unwrap());
    assert_eq!(ctx.current_step, 5);
    assert!(ctx.is_finished());
}

#[test]
fn test_trails_follow_bodies() {
    let scenario = load_scenario(test_data_path("two_body.json")).unwrap();
    let mut ctx = build_simulation_context(&scenario).unwrap();

    // Initial positions are recorded on build
    assert_eq!(ctx.trails.trail("satellite").unwrap().len(), 1);

    for _ in 0..60 {
        step_simulation(&mut ctx).unwrap();
    }

    let states = get_body_states(&ctx);
    let satellite = states.iter().find(|s| s.name == "satellite").unwrap();
    let trail = ctx.trails.trail("satellite").unwrap();
    assert_eq!(trail.len(), 50);
    assert_eq!(*trail.back().unwrap(), satellite.pos);
}

#[test]
fn test_rejected_source_reports_error_count() {
    let source = r#"{ "g": 1.0, "dt": -0.5, "bodies": [] }"#;
    match build_simulation_context_from_source(source) {
        Err(SimError::Rejected(count)) => assert_eq!(count, 2),
        other => panic!("expected rejection, got {:?}", other.map(|(_, d)| d)),
    }
}

#[test]
fn test_warnings_are_returned_with_context() {
    let source = std::fs::read_to_string(test_data_path("coincident.json")).unwrap();
    let (ctx, diagnostics) = build_simulation_context_from_source(&source).unwrap();

    assert_eq!(diagnostics.warnings().count(), 1);
    assert_eq!(ctx.engine.len(), 2);
}

#[test]
fn test_energy_drift_tracks_context() {
    let scenario = load_scenario(test_data_path("two_body.json")).unwrap();
    let mut ctx = build_simulation_context(&scenario).unwrap();
    assert_eq!(ctx.energy_drift(), 0.0);

    for _ in 0..500 {
        step_simulation(&mut ctx).unwrap();
    }
    assert!(ctx.energy_drift() < 0.01);
    assert!(!ctx.is_finished());
}
