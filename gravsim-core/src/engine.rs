use crate::body::Body;
use crate::error::{Result, SimError};
use crate::integrator::semi_implicit_euler;
use glam::DVec2;

/// Gravitational constant in SI units (m³ kg⁻¹ s⁻²)
pub const G_SI: f64 = 6.67430e-11;

/// Pairwise force law used by the engine
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ForceLaw {
    /// Unregularised inverse-square gravity
    #[default]
    Newtonian,
    /// Plummer-softened gravity: `G m r / (d² + ε²)^(3/2)`
    Plummer { softening: f64 },
}

impl ForceLaw {
    /// Acceleration on a body from `mass` displaced by `r`.
    ///
    /// Returns `None` for coincident points.
    fn pull(&self, g: f64, mass: f64, r: DVec2) -> Option<DVec2> {
        let dist_sq = r.length_squared();
        if dist_sq == 0.0 {
            return None;
        }
        match *self {
            ForceLaw::Newtonian => {
                let dist = dist_sq.sqrt();
                Some(r / dist * (g * mass / dist_sq))
            }
            ForceLaw::Plummer { softening } => {
                let soft_sq = dist_sq + softening * softening;
                Some(r * (g * mass / (soft_sq * soft_sq.sqrt())))
            }
        }
    }
}

/// Direct-summation gravity engine bound to a fixed set of bodies
#[derive(Debug, Clone)]
pub struct Engine {
    bodies: Vec<Body>,
    g: f64,
    law: ForceLaw,
}

impl Engine {
    /// Bind a Newtonian engine to `bodies`.
    ///
    /// An empty body set is accepted; stepping it does nothing.
    pub fn new(bodies: Vec<Body>, g: f64) -> Result<Self> {
        Self::with_force_law(bodies, g, ForceLaw::Newtonian)
    }

    pub fn with_force_law(bodies: Vec<Body>, g: f64, law: ForceLaw) -> Result<Self> {
        if !g.is_finite() || g <= 0.0 {
            return Err(SimError::InvalidGravitationalConstant(g));
        }
        if let ForceLaw::Plummer { softening } = law {
            if !softening.is_finite() || softening < 0.0 {
                return Err(SimError::InvalidSoftening(softening));
            }
        }
        Ok(Self { bodies, g, law })
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, idx: usize) -> Option<&Body> {
        self.bodies.get(idx)
    }

    pub fn body_by_name(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.name() == name)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn gravitational_constant(&self) -> f64 {
        self.g
    }

    pub fn force_law(&self) -> ForceLaw {
        self.law
    }

    /// Release the body set, e.g. to rebind it to a new engine
    pub fn into_bodies(self) -> Vec<Body> {
        self.bodies
    }

    /// Sum of the pull of every other body on the body at `idx`
    fn acceleration_on(&self, idx: usize) -> DVec2 {
        let pos = self.bodies[idx].pos;
        self.bodies
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != idx)
            .filter_map(|(_, other)| self.law.pull(self.g, other.mass(), other.pos - pos))
            .fold(DVec2::ZERO, |acc, a| acc + a)
    }

    /// Recompute every body's acceleration from the current positions.
    ///
    /// All accelerations are evaluated against the same snapshot before any
    /// of them is stored. Coincident pairs contribute nothing.
    pub fn compute_accelerations(&mut self) {
        let accelerations: Vec<_> = (0..self.bodies.len())
            .map(|i| self.acceleration_on(i))
            .collect();

        for (body, acc) in self.bodies.iter_mut().zip(accelerations) {
            body.acc = acc;
        }
    }

    /// Advance the system by `dt` with semi-implicit Euler.
    ///
    /// A non-positive or non-finite `dt` is rejected before any state changes.
    pub fn step(&mut self, dt: f64) -> Result<()> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(SimError::InvalidTimeStep(dt));
        }

        self.compute_accelerations();
        semi_implicit_euler(&mut self.bodies, dt);
        Ok(())
    }
}
