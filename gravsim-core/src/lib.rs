pub mod analyzer;
pub mod body;
pub mod config;
pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod integrator;
pub mod observables;
pub mod runtime;
pub mod trail;

pub use analyzer::analyze_scenario;
pub use body::Body;
pub use config::{load_scenario, parse_scenario, BodyConfig, ScenarioConfig};
pub use diagnostics::{Diagnostic, DiagnosticSeverity, Diagnostics};
pub use engine::{Engine, ForceLaw, G_SI};
pub use error::{Result, SimError};
pub use runtime::{
    build_simulation_context, build_simulation_context_from_source, get_body_states,
    run_program, run_scenario, step_simulation, BodyState, SimulationContext, SimulationResult,
};
pub use trail::TrailHistory;
