//! Conserved quantities and summary measurements over a body set
//!
//! These are read-only and never feed back into the integration; they exist
//! so callers can check energy drift, momentum and centre-of-mass motion.

use crate::body::Body;
use glam::DVec2;

/// Total kinetic energy, Σ ½ m v²
pub fn kinetic_energy(bodies: &[Body]) -> f64 {
    bodies.iter().map(Body::kinetic_energy).sum()
}

/// Newtonian potential energy, each pair counted once.
///
/// Coincident pairs are skipped, matching the force computation.
pub fn potential_energy(bodies: &[Body], g: f64) -> f64 {
    bodies
        .iter()
        .enumerate()
        .flat_map(move |(i, a)| {
            bodies[i + 1..].iter().filter_map(move |b| {
                let dist = a.position().distance(b.position());
                (dist > 0.0).then(|| -g * a.mass() * b.mass() / dist)
            })
        })
        .sum()
}

pub fn total_energy(bodies: &[Body], g: f64) -> f64 {
    kinetic_energy(bodies) + potential_energy(bodies, g)
}

/// Mass-weighted mean position, `None` for an empty set
pub fn center_of_mass(bodies: &[Body]) -> Option<DVec2> {
    let total_mass: f64 = bodies.iter().map(Body::mass).sum();
    if total_mass <= 0.0 {
        return None;
    }
    let weighted = bodies
        .iter()
        .fold(DVec2::ZERO, |acc, b| acc + b.position() * b.mass());
    Some(weighted / total_mass)
}

pub fn total_momentum(bodies: &[Body]) -> DVec2 {
    bodies.iter().fold(DVec2::ZERO, |acc, b| acc + b.momentum())
}

/// z-component of the total angular momentum about the origin
pub fn angular_momentum(bodies: &[Body]) -> f64 {
    bodies
        .iter()
        .map(|b| b.mass() * b.position().perp_dot(b.velocity()))
        .sum()
}

/// |current − initial| / |initial|, or the absolute change when `initial` is zero
pub fn relative_drift(initial: f64, current: f64) -> f64 {
    let delta = (current - initial).abs();
    if initial == 0.0 {
        delta
    } else {
        delta / initial.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> Vec<Body> {
        vec![
            Body::new("a", 1.0, DVec2::new(0.0, 0.0), DVec2::new(0.0, 1.0)).unwrap(),
            Body::new("b", 3.0, DVec2::new(4.0, 0.0), DVec2::new(0.0, -1.0)).unwrap(),
        ]
    }

    #[test]
    fn test_potential_energy_pair() {
        let bodies = pair();
        // -G m_a m_b / d = -2 * 1 * 3 / 4
        assert!((potential_energy(&bodies, 2.0) + 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_kinetic_energy_pair() {
        let bodies = pair();
        assert!((kinetic_energy(&bodies) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_center_of_mass_weighted() {
        let com = center_of_mass(&pair()).unwrap();
        assert!((com.x - 3.0).abs() < 1e-12);
        assert_eq!(com.y, 0.0);
        assert!(center_of_mass(&[]).is_none());
    }

    #[test]
    fn test_momentum_and_angular_momentum() {
        let bodies = pair();
        let p = total_momentum(&bodies);
        assert!((p.y + 2.0).abs() < 1e-12);
        // only b has a lever arm: 3 * (4 * -1 - 0 * 0)
        assert!((angular_momentum(&bodies) + 12.0).abs() < 1e-12);
    }

    #[test]
    fn test_coincident_pair_has_no_potential() {
        let bodies = vec![
            Body::new("a", 1.0, DVec2::ZERO, DVec2::ZERO).unwrap(),
            Body::new("b", 1.0, DVec2::ZERO, DVec2::ZERO).unwrap(),
        ];
        assert_eq!(potential_energy(&bodies, 1.0), 0.0);
    }

    #[test]
    fn test_relative_drift() {
        assert!((relative_drift(-2.0, -2.1) - 0.05).abs() < 1e-12);
        assert_eq!(relative_drift(0.0, 0.5), 0.5);
    }
}
