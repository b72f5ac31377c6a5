use crate::error::{Result, SimError};
use glam::DVec2;

/// A point mass in the simulation
///
/// Physical state is read-only outside the crate; only the engine and the
/// integrator move bodies.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    name: String,
    mass: f64,
    pub(crate) pos: DVec2,
    pub(crate) vel: DVec2,
    pub(crate) acc: DVec2,
}

impl Body {
    /// Create a body at rest acceleration-wise.
    ///
    /// Fails when `mass` is not a finite positive number or when the initial
    /// state contains NaN or infinite components.
    pub fn new(
        name: impl Into<String>,
        mass: f64,
        position: DVec2,
        velocity: DVec2,
    ) -> Result<Self> {
        let name = name.into();
        if !mass.is_finite() || mass <= 0.0 {
            return Err(SimError::InvalidMass { name, mass });
        }
        if !position.is_finite() || !velocity.is_finite() {
            return Err(SimError::NonFiniteState { name });
        }

        Ok(Self {
            name,
            mass,
            pos: position,
            vel: velocity,
            acc: DVec2::ZERO,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn position(&self) -> DVec2 {
        self.pos
    }

    pub fn velocity(&self) -> DVec2 {
        self.vel
    }

    /// Acceleration from the most recent force computation.
    ///
    /// Zero until the first step; only meaningful right after a step.
    pub fn acceleration(&self) -> DVec2 {
        self.acc
    }

    pub fn momentum(&self) -> DVec2 {
        self.vel * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.vel.length_squared()
    }
}
