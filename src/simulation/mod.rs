pub mod states;
pub mod errors;
pub mod trail;
pub mod geometry;
pub mod params;
pub mod engine;
pub mod forces;
pub mod integrator;
pub mod collision;
pub mod scenario;
