//! Scenario files: initial bodies plus run parameters, loaded from JSON.
//!
//! Two shapes are accepted. The short form is a bare list of bodies:
//!
//! ```json
//! [
//!   { "name": "Sun",   "mass": 1.989e30, "pos": [0.0, 0.0],     "vel": [0.0, 0.0] },
//!   { "name": "Earth", "mass": 5.972e24, "pos": [1.496e11, 0.0], "vel": [0.0, 29780.0] }
//! ]
//! ```
//!
//! The full form wraps the list with run parameters, all optional:
//!
//! ```json
//! {
//!   "g": 1.0,
//!   "dt": 0.001,
//!   "steps": 5000,
//!   "trail_length": 300,
//!   "softening": 0.0,
//!   "bodies": [ ... ]
//! }
//! ```

use crate::body::Body;
use crate::engine::{Engine, ForceLaw, G_SI};
use crate::error::{Result, SimError};
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

pub const DEFAULT_DT: f64 = 0.1;
pub const DEFAULT_STEPS: u64 = 1000;

/// Initial conditions for one body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BodyConfig {
    pub name: String,
    pub mass: f64,
    #[serde(alias = "position")]
    pub pos: [f64; 2],
    #[serde(alias = "velocity", default)]
    pub vel: [f64; 2],
}

impl BodyConfig {
    pub fn build(&self) -> Result<Body> {
        Body::new(
            self.name.clone(),
            self.mass,
            DVec2::from(self.pos),
            DVec2::from(self.vel),
        )
    }
}

/// A complete simulation setup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    #[serde(default = "default_g", alias = "G")]
    pub g: f64,
    #[serde(default = "default_dt")]
    pub dt: f64,
    #[serde(default = "default_steps")]
    pub steps: u64,
    #[serde(default)]
    pub trail_length: usize,
    #[serde(default)]
    pub softening: Option<f64>,
    pub bodies: Vec<BodyConfig>,
}

fn default_g() -> f64 {
    G_SI
}

fn default_dt() -> f64 {
    DEFAULT_DT
}

fn default_steps() -> u64 {
    DEFAULT_STEPS
}

impl ScenarioConfig {
    /// Scenario with default parameters around `bodies`
    pub fn from_bodies(bodies: Vec<BodyConfig>) -> Self {
        Self {
            g: G_SI,
            dt: DEFAULT_DT,
            steps: DEFAULT_STEPS,
            trail_length: 0,
            softening: None,
            bodies,
        }
    }

    pub fn force_law(&self) -> ForceLaw {
        match self.softening {
            Some(softening) => ForceLaw::Plummer { softening },
            None => ForceLaw::Newtonian,
        }
    }

    /// Construct the body set in file order.
    ///
    /// Rejects an empty list and repeated names.
    pub fn build_bodies(&self) -> Result<Vec<Body>> {
        if self.bodies.is_empty() {
            return Err(SimError::EmptyScenario);
        }

        let mut seen = HashSet::new();
        self.bodies
            .iter()
            .map(|decl| {
                if !seen.insert(decl.name.as_str()) {
                    return Err(SimError::DuplicateBody(decl.name.clone()));
                }
                decl.build()
            })
            .collect()
    }

    pub fn build_engine(&self) -> Result<Engine> {
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(SimError::InvalidTimeStep(self.dt));
        }
        Engine::with_force_law(self.build_bodies()?, self.g, self.force_law())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Parse a scenario from JSON text.
///
/// The leading character picks the shape, so serde's error names the
/// offending field along with its line and column.
pub fn parse_scenario(source: &str) -> Result<ScenarioConfig> {
    if source.trim_start().starts_with('[') {
        let bodies: Vec<BodyConfig> = serde_json::from_str(source)?;
        Ok(ScenarioConfig::from_bodies(bodies))
    } else {
        Ok(serde_json::from_str(source)?)
    }
}

pub fn load_scenario(path: impl AsRef<Path>) -> Result<ScenarioConfig> {
    let source = fs::read_to_string(path)?;
    parse_scenario(&source)
}
