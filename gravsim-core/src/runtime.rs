use crate::analyzer::analyze_scenario;
use crate::config::{parse_scenario, ScenarioConfig};
use crate::diagnostics::Diagnostics;
use crate::engine::Engine;
use crate::error::{Result, SimError};
use crate::observables::{relative_drift, total_energy};
use crate::trail::TrailHistory;
use glam::DVec2;

/// Read-only snapshot of one body for display or logging
#[derive(Debug, Clone, PartialEq)]
pub struct BodyState {
    pub name: String,
    pub mass: f64,
    pub pos: DVec2,
    pub vel: DVec2,
}

/// A running simulation: engine plus the bookkeeping around it
#[derive(Debug, Clone)]
pub struct SimulationContext {
    pub engine: Engine,
    pub trails: TrailHistory,
    pub dt: f64,
    pub current_step: u64,
    pub max_steps: u64,
    pub elapsed: f64,
    pub initial_energy: f64,
}

impl SimulationContext {
    pub fn is_finished(&self) -> bool {
        self.current_step >= self.max_steps
    }

    pub fn energy(&self) -> f64 {
        total_energy(self.engine.bodies(), self.engine.gravitational_constant())
    }

    pub fn energy_drift(&self) -> f64 {
        relative_drift(self.initial_energy, self.energy())
    }
}

/// Final result of a headless run
#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub bodies: Vec<BodyState>,
    pub steps: u64,
    pub elapsed: f64,
    pub initial_energy: f64,
    pub final_energy: f64,
    pub energy_drift: f64,
}

/// Build a context from an already-parsed scenario
pub fn build_simulation_context(scenario: &ScenarioConfig) -> Result<SimulationContext> {
    let engine = scenario.build_engine()?;
    let initial_energy = total_energy(engine.bodies(), engine.gravitational_constant());

    let mut trails = TrailHistory::new(scenario.trail_length);
    trails.record(engine.bodies());

    Ok(SimulationContext {
        engine,
        trails,
        dt: scenario.dt,
        current_step: 0,
        max_steps: scenario.steps,
        elapsed: 0.0,
        initial_energy,
    })
}

/// Parse, analyze and build in one go.
///
/// Fails if the analyzer reports any error; warnings are returned alongside
/// the context.
pub fn build_simulation_context_from_source(
    source: &str,
) -> Result<(SimulationContext, Diagnostics)> {
    let scenario = parse_scenario(source)?;
    let diagnostics = analyze_scenario(&scenario);
    if diagnostics.has_errors() {
        return Err(SimError::Rejected(diagnostics.errors().count()));
    }
    let ctx = build_simulation_context(&scenario)?;
    Ok((ctx, diagnostics))
}

/// Advance one step and record trails.
///
/// Returns `true` only for the step that reaches the scenario's step count.
/// Stepping past it is allowed and returns `false`.
pub fn step_simulation(ctx: &mut SimulationContext) -> Result<bool> {
    ctx.engine.step(ctx.dt)?;
    ctx.trails.record(ctx.engine.bodies());
    ctx.current_step += 1;
    ctx.elapsed += ctx.dt;
    Ok(ctx.current_step == ctx.max_steps)
}

pub fn get_body_states(ctx: &SimulationContext) -> Vec<BodyState> {
    ctx.engine
        .bodies()
        .iter()
        .map(|b| BodyState {
            name: b.name().to_string(),
            mass: b.mass(),
            pos: b.position(),
            vel: b.velocity(),
        })
        .collect()
}

/// Run a scenario to completion without any presentation
pub fn run_scenario(scenario: &ScenarioConfig) -> Result<SimulationResult> {
    let mut ctx = build_simulation_context(scenario)?;
    while !ctx.is_finished() {
        step_simulation(&mut ctx)?;
    }

    let final_energy = ctx.energy();
    Ok(SimulationResult {
        bodies: get_body_states(&ctx),
        steps: ctx.current_step,
        elapsed: ctx.elapsed,
        initial_energy: ctx.initial_energy,
        final_energy,
        energy_drift: relative_drift(ctx.initial_energy, final_energy),
    })
}

/// Main entry point: parse and run a scenario from JSON text
pub fn run_program(source: &str) -> Result<SimulationResult> {
    let scenario = parse_scenario(source)?;
    let diagnostics = analyze_scenario(&scenario);
    if diagnostics.has_errors() {
        return Err(SimError::Rejected(diagnostics.errors().count()));
    }
    run_scenario(&scenario)
}
