//! Acceleration contributors for the orbit engine
//!
//! Each term implements [`Acceleration`] and returns the acceleration it
//! imparts on one target body, given the body set at the start of the tick.
//! [`AccelSet`] sums the registered terms.

use tracing::trace;

use crate::simulation::errors::PhysicsError;
use crate::simulation::geometry;
use crate::simulation::states::{Body, NVec2};

/// Trait for acceleration sources acting on a single body
///
/// `bodies` may contain `target` itself (matched by id); implementations must
/// skip it.
pub trait Acceleration {
    fn acceleration(&self, target: &Body, bodies: &[Body]) -> NVec2;
}

/// Collection of acceleration terms whose contributions are summed per body
#[derive(Default)]
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Net acceleration on `target` from every term
    pub fn net_acceleration(&self, target: &Body, bodies: &[Body]) -> NVec2 {
        self.terms
            .iter()
            .fold(NVec2::zeros(), |acc, term| acc + term.acceleration(target, bodies))
    }

    /// Accelerations for every body in `bodies`, all taken from the same snapshot
    /// - `out[i]` is overwritten with the net acceleration on `bodies[i]`
    pub fn accumulate_accels(&self, bodies: &[Body], out: &mut [NVec2]) {
        for (a, body) in out.iter_mut().zip(bodies) {
            *a = self.net_acceleration(body, bodies);
        }
    }
}

/// Gravity with the attracted body's own mass left out
///
/// Each other body `j` contributes `g * m_j / d^2` towards itself, which is
/// added straight onto the target's velocity each tick. `g` is a tuning knob
/// for the feel of the simulation, not the physical constant.
///
/// Close encounters: if `0 < d < min_distance` the magnitude is evaluated at
/// `min_distance`. Bodies whose centres coincide exactly (`d == 0`) have no
/// direction between them and contribute nothing. `min_distance` must be
/// large enough that its square is a normal float, so the divisor is never
/// zero or subnormal; a pair whose magnitude still overflows is skipped the
/// same way as a coincident one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OneSidedGravity {
    pub g: f64,
    pub min_distance: f64,
}

impl OneSidedGravity {
    pub fn new(g: f64, min_distance: f64) -> Result<Self, PhysicsError> {
        if !g.is_finite() {
            return Err(PhysicsError::InvalidParameter { name: "G", value: g });
        }
        if !min_distance.is_finite() || min_distance * min_distance < f64::MIN_POSITIVE {
            return Err(PhysicsError::InvalidParameter {
                name: "min_distance",
                value: min_distance,
            });
        }
        Ok(Self { g, min_distance })
    }

    /// Net pull on `target` from every other body in `others`
    pub fn force_on(&self, target: &Body, others: &[Body]) -> NVec2 {
        let mut acc = NVec2::zeros();

        for other in others {
            if other.id == target.id {
                continue;
            }

            let dx = other.x.x - target.x.x;
            let dy = other.x.y - target.x.y;
            let distance = (dx * dx + dy * dy).sqrt();
            if distance == 0.0 {
                trace!(body = %target.id, other = %other.id, "coincident centres, skipping");
                continue;
            }

            let d = distance.max(self.min_distance);
            let magnitude = self.g * other.m / (d * d);
            if !magnitude.is_finite() {
                trace!(body = %target.id, other = %other.id, "unbounded pull, skipping");
                continue;
            }

            let angle = geometry::angle_between(&target.x, &other.x);
            acc.x += magnitude * angle.cos();
            acc.y -= magnitude * angle.sin();
        }

        acc
    }
}

impl Acceleration for OneSidedGravity {
    fn acceleration(&self, target: &Body, bodies: &[Body]) -> NVec2 {
        self.force_on(target, bodies)
    }
}
