//! Per-frame orchestration
//!
//! [`step`] is the whole physics update for one frame: integrate (unless
//! paused) and then report overlapping pairs. [`Simulation`] bundles a body
//! set with its forces, parameters and run state for hosts that want one
//! owner for all of it.

use std::collections::HashSet;

use tracing::{debug, trace};

use super::collision::{detect_collisions, CollisionPair};
use super::errors::PhysicsError;
use super::forces::AccelSet;
use super::integrator::integrate;
use super::params::Parameters;
use super::states::{Body, BodyId, BodySpec};

/// Advance `bodies` by one tick if `integrate_tick`, then return every
/// overlapping pair on the resulting positions
pub fn step(bodies: &mut [Body], integrate_tick: bool, forces: &AccelSet) -> Vec<CollisionPair> {
    if integrate_tick {
        integrate(bodies, forces);
    }
    detect_collisions(bodies)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Paused,
}

impl RunState {
    pub fn toggled(self) -> Self {
        match self {
            RunState::Running => RunState::Paused,
            RunState::Paused => RunState::Running,
        }
    }
}

pub struct Simulation {
    bodies: Vec<Body>,
    forces: AccelSet,
    parameters: Parameters,
    state: RunState,
    tick: u64, // integrated ticks so far
    next_id: u64, // one past u32::MAX once ids run out
    contacts: HashSet<CollisionPair>, // pairs overlapping after the last step
}

impl Simulation {
    /// Empty simulation with Newtonian one-sided gravity from `parameters`
    pub fn new(parameters: Parameters) -> Result<Self, PhysicsError> {
        let forces = AccelSet::new().with(parameters.gravity()?);
        Ok(Self::with_forces(parameters, forces))
    }

    /// Empty simulation with a caller-supplied force set
    pub fn with_forces(parameters: Parameters, forces: AccelSet) -> Self {
        Self {
            bodies: Vec::new(),
            forces,
            parameters,
            state: RunState::Running,
            tick: 0,
            next_id: 0,
            contacts: HashSet::new(),
        }
    }

    /// Adopt pre-built bodies; ids must be unique. Trails are resized to
    /// `parameters.trail_capacity`.
    pub fn from_bodies(parameters: Parameters, mut bodies: Vec<Body>) -> Result<Self, PhysicsError> {
        let mut seen = HashSet::with_capacity(bodies.len());
        for body in &bodies {
            if !seen.insert(body.id) {
                return Err(PhysicsError::DuplicateId(body.id));
            }
        }

        let mut sim = Self::new(parameters)?;
        sim.next_id = bodies.iter().map(|b| u64::from(b.id.0) + 1).max().unwrap_or(0);
        for body in &mut bodies {
            body.trail.set_capacity(sim.parameters.trail_capacity);
        }
        sim.bodies = bodies;
        Ok(sim)
    }

    fn prepare(&self, spec: BodySpec) -> BodySpec {
        spec.with_trail(self.parameters.trail_capacity)
    }

    fn peek_id(&self) -> Result<BodyId, PhysicsError> {
        u32::try_from(self.next_id)
            .map(BodyId)
            .map_err(|_| PhysicsError::IdsExhausted)
    }

    /// Add a gravitating body and return its id
    pub fn add_body(&mut self, spec: BodySpec) -> Result<BodyId, PhysicsError> {
        let id = self.peek_id()?;
        let spec = self.prepare(spec);
        let body = Body::new(id, spec)?;
        self.insert(body);
        Ok(id)
    }

    /// Add a massless probe and return its id
    pub fn add_test_particle(&mut self, spec: BodySpec) -> Result<BodyId, PhysicsError> {
        let id = self.peek_id()?;
        let spec = self.prepare(spec);
        let body = Body::test_particle(id, spec)?;
        self.insert(body);
        Ok(id)
    }

    // ids are only consumed once the body is accepted
    fn insert(&mut self, body: Body) {
        self.next_id += 1;
        debug!(id = %body.id, name = %body.name, m = body.m, radius = body.radius, "body added");
        self.bodies.push(body);
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Mutable access for host-side bookkeeping such as `marked`
    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn forces(&self) -> &AccelSet {
        &self.forces
    }

    /// Apply a new trail length to every body
    pub fn set_trail_capacity(&mut self, capacity: usize) {
        self.parameters.trail_capacity = capacity;
        for body in &mut self.bodies {
            body.trail.set_capacity(capacity);
        }
    }

    pub fn run_state(&self) -> RunState {
        self.state
    }

    pub fn is_paused(&self) -> bool {
        self.state == RunState::Paused
    }

    pub fn set_run_state(&mut self, state: RunState) {
        if state != self.state {
            debug!(?state, tick = self.tick, "run state changed");
        }
        self.state = state;
    }

    pub fn toggle_pause(&mut self) -> RunState {
        self.set_run_state(self.state.toggled());
        self.state
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// One frame: integrate while running, then detect collisions
    pub fn step(&mut self) -> Vec<CollisionPair> {
        let running = self.state == RunState::Running;
        let pairs = self::step(&mut self.bodies, running, &self.forces);
        if running {
            self.tick += 1;
        }
        trace!(tick = self.tick, collisions = pairs.len(), "step");

        let current: HashSet<CollisionPair> = pairs.iter().copied().collect();
        for pair in &pairs {
            if !self.contacts.contains(pair) {
                debug!(a = %pair.a, b = %pair.b, tick = self.tick, "collision started");
            }
        }
        self.contacts = current;
        pairs
    }
}
