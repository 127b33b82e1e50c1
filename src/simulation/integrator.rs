//! Fixed-step Euler integrator for the body set
//!
//! One tick is: velocity picks up the acceleration, position picks up the new
//! velocity, and the new position is appended to the trail. There is no time
//! step parameter; velocities are already in world units per tick.

use super::forces::AccelSet;
use super::states::{Body, NVec2};

/// Advance a single body by one tick given its acceleration
pub fn euler_step(body: &mut Body, acc: NVec2) {
    // v_n+1 = v_n + a_n
    body.v += acc;
    // x_n+1 = x_n + v_n+1
    body.x += body.v;
    body.trail.push(body.x);
}

/// Advance one body against a snapshot of the body set
///
/// An empty snapshot, or one holding only `body`, leaves it drifting on its
/// current velocity.
pub fn integrate_body(body: &mut Body, snapshot: &[Body], forces: &AccelSet) {
    let acc = forces.net_acceleration(body, snapshot);
    euler_step(body, acc);
}

/// Advance every body by one tick
///
/// All accelerations are evaluated from the positions at the start of the
/// tick before any body moves, so the result does not depend on body order.
pub fn integrate(bodies: &mut [Body], forces: &AccelSet) {
    let n = bodies.len();
    if n == 0 {
        return;
    }

    // a[i] holds the acceleration on body i at the start of the tick
    let mut a = vec![NVec2::zeros(); n];
    forces.accumulate_accels(bodies, &mut a);

    for (b, acc) in bodies.iter_mut().zip(a) {
        euler_step(b, acc);
    }
}
