pub mod simulation;
pub mod configuration;
#[cfg(feature = "viewer")]
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, BodyId, BodySpec, NVec2};
pub use simulation::errors::PhysicsError;
pub use simulation::trail::Trail;
pub use simulation::geometry::{angle_between, distance, heading};
pub use simulation::forces::{AccelSet, Acceleration, OneSidedGravity};
pub use simulation::integrator::{euler_step, integrate, integrate_body};
pub use simulation::collision::{detect_collisions, is_colliding, mark_collisions, CollisionPair};
pub use simulation::engine::{step, RunState, Simulation};
pub use simulation::params::Parameters;
pub use simulation::scenario::{Engine, Scenario};

pub use configuration::config::{BodyConfig, EngineConfig, ParametersConfig, ScenarioConfig};

#[cfg(feature = "viewer")]
pub use visualization::orbit_vis2d::run_2d;

pub use benchmark::benchmark::bench_step;
