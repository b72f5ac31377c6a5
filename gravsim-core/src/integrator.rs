use crate::body::Body;

/// Semi-implicit Euler update using each body's stored acceleration:
/// `v += a*dt`, then `x += v*dt` with the updated velocity
pub fn semi_implicit_euler(bodies: &mut [Body], dt: f64) {
    for body in bodies.iter_mut() {
        body.vel += body.acc * dt;
        body.pos += body.vel * dt;
    }
}
