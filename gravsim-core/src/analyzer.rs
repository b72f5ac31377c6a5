//! Static checks on scenarios
//!
//! Catches configuration mistakes before an engine is built, and flags
//! setups that are legal but probably unintended.

use crate::config::ScenarioConfig;
use crate::diagnostics::{Diagnostic, Diagnostics};
use std::collections::HashMap;

/// Analyze a scenario and return diagnostics
pub fn analyze_scenario(scenario: &ScenarioConfig) -> Diagnostics {
    let mut diagnostics = Diagnostics::new();

    if scenario.bodies.is_empty() {
        diagnostics.push(Diagnostic::error("scenario declares no bodies", None));
    }

    if !scenario.g.is_finite() || scenario.g <= 0.0 {
        diagnostics.push(Diagnostic::error(
            format!("gravitational constant must be finite and > 0, got {}", scenario.g),
            None,
        ));
    }

    if !scenario.dt.is_finite() || scenario.dt <= 0.0 {
        diagnostics.push(Diagnostic::error(
            format!("time step must be finite and > 0, got {}", scenario.dt),
            None,
        ));
    }

    if let Some(softening) = scenario.softening {
        if !softening.is_finite() || softening < 0.0 {
            diagnostics.push(Diagnostic::error(
                format!("softening must be finite and >= 0, got {}", softening),
                None,
            ));
        }
    }

    if scenario.steps == 0 {
        diagnostics.push(Diagnostic::warning("steps = 0, nothing will be simulated", None));
    }

    let mut names = HashMap::new();
    for (idx, body) in scenario.bodies.iter().enumerate() {
        if names.insert(body.name.as_str(), idx).is_some() {
            diagnostics.push(Diagnostic::error(
                format!("duplicate body name '{}'", body.name),
                Some(body.name.as_str()),
            ));
        }

        if !body.mass.is_finite() || body.mass <= 0.0 {
            diagnostics.push(Diagnostic::error(
                format!("mass must be finite and > 0, got {}", body.mass),
                Some(body.name.as_str()),
            ));
        }

        if !body.pos.iter().chain(body.vel.iter()).all(|c| c.is_finite()) {
            diagnostics.push(Diagnostic::error(
                "position and velocity must be finite",
                Some(body.name.as_str()),
            ));
        }
    }

    // Coincident pairs are skipped by the engine, which is rarely what was meant
    for (i, a) in scenario.bodies.iter().enumerate() {
        for b in &scenario.bodies[i + 1..] {
            if a.pos == b.pos {
                diagnostics.push(Diagnostic::warning(
                    format!(
                        "bodies '{}' and '{}' share position ({}, {}); they exert no force on each other",
                        a.name, b.name, a.pos[0], a.pos[1]
                    ),
                    Some(a.name.as_str()),
                ));
            }
        }
    }

    diagnostics
}
