//! Core state types for the orbit simulation.
//!
//! A `Body` is a plain data record: a point mass with a collision radius and a
//! bounded trail of past positions. It holds no reference to the rest of the
//! body set; forces are computed against whatever set the caller passes in.
//!
//! World coordinates follow the screen convention of the host (y grows
//! downwards), but nothing in here depends on a camera or a renderer.

use std::fmt;

use nalgebra::Vector2;

use super::errors::PhysicsError;
use super::geometry;
use super::trail::Trail;

pub type NVec2 = Vector2<f64>;

/// Stable identity of a body within one body set
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BodyId(pub u32);

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Construction parameters for a [`Body`]
#[derive(Debug, Clone)]
pub struct BodySpec {
    pub name: String,
    pub position: NVec2,
    pub radius: f64,
    pub mass: f64,
    /// Initial `(speed, direction in degrees)`; `None` starts at rest
    pub launch: Option<(f64, f64)>,
    pub trail_capacity: usize,
}

impl BodySpec {
    pub fn new(name: impl Into<String>, x: f64, y: f64, radius: f64, mass: f64) -> Self {
        Self {
            name: name.into(),
            position: NVec2::new(x, y),
            radius,
            mass,
            launch: None,
            trail_capacity: 0,
        }
    }

    pub fn launched(mut self, speed: f64, direction_deg: f64) -> Self {
        self.launch = Some((speed, direction_deg));
        self
    }

    pub fn with_trail(mut self, capacity: usize) -> Self {
        self.trail_capacity = capacity;
        self
    }

    fn check_common(&self) -> Result<NVec2, PhysicsError> {
        if !self.position.x.is_finite() || !self.position.y.is_finite() {
            return Err(PhysicsError::NonFinite { field: "position" });
        }
        if !self.radius.is_finite() {
            return Err(PhysicsError::NonFinite { field: "radius" });
        }
        if self.radius < 0.0 {
            return Err(PhysicsError::NegativeRadius(self.radius));
        }

        let velocity = match self.launch {
            Some((speed, direction_deg)) => {
                if !speed.is_finite() || !direction_deg.is_finite() {
                    return Err(PhysicsError::NonFinite { field: "launch" });
                }
                let direction = direction_deg.to_radians();
                NVec2::new(speed * direction.cos(), speed * direction.sin())
            }
            None => NVec2::zeros(),
        };
        Ok(velocity)
    }
}

#[derive(Debug, Clone)]
pub struct Body {
    pub id: BodyId,
    pub name: String,
    pub x: NVec2, // position
    pub v: NVec2, // velocity, world units per tick
    pub radius: f64, // collision extent
    pub m: f64, // mass
    pub trail: Trail, // recent positions, oldest first
    pub marked: bool, // set by the host, never by physics
}

impl Body {
    /// Build a gravitating body; mass must be strictly positive
    pub fn new(id: BodyId, spec: BodySpec) -> Result<Self, PhysicsError> {
        let v = spec.check_common()?;
        if !spec.mass.is_finite() {
            return Err(PhysicsError::NonFinite { field: "mass" });
        }
        if spec.mass <= 0.0 {
            return Err(PhysicsError::NonPositiveMass(spec.mass));
        }
        let m = spec.mass;
        Ok(Self::assemble(id, spec, v, m))
    }

    /// Build a massless probe: pulled by others and collidable, but exerts no force.
    /// `spec.mass` is ignored.
    pub fn test_particle(id: BodyId, spec: BodySpec) -> Result<Self, PhysicsError> {
        let v = spec.check_common()?;
        Ok(Self::assemble(id, spec, v, 0.0))
    }

    fn assemble(id: BodyId, spec: BodySpec, v: NVec2, m: f64) -> Self {
        Self {
            id,
            name: spec.name,
            x: spec.position,
            v,
            radius: spec.radius,
            m,
            trail: Trail::with_capacity(spec.trail_capacity),
            marked: false,
        }
    }

    pub fn distance_to(&self, other: &Body) -> f64 {
        geometry::distance(&self.x, &other.x)
    }

    pub fn angle_to(&self, other: &Body) -> f64 {
        geometry::angle_between(&self.x, &other.x)
    }

    pub fn speed(&self) -> f64 {
        self.v.norm()
    }
}
