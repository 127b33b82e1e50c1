//! Physical and bookkeeping parameters for a simulation run
//!
//! `Parameters` holds runtime settings:
//! - gravity strength `g` (a tuning constant, not the physical G),
//! - `min_distance`, the separation floor used for the force magnitude,
//! - `trail_capacity`, how many past positions each body keeps

use super::errors::PhysicsError;
use super::forces::OneSidedGravity;

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub g: f64,
    pub min_distance: f64,
    pub trail_capacity: usize,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            g: 1.0,
            min_distance: 1.0,
            trail_capacity: 175,
        }
    }
}

impl Parameters {
    pub fn validate(&self) -> Result<(), PhysicsError> {
        self.gravity().map(|_| ())
    }

    /// Gravity term configured from these parameters
    pub fn gravity(&self) -> Result<OneSidedGravity, PhysicsError> {
        OneSidedGravity::new(self.g, self.min_distance)
    }
}
