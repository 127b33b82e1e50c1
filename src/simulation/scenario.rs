//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime `Scenario`
//! containing:
//! - engine settings (`Engine`)
//! - the `Simulation` with every body added and validated
//! - per-body display colours, indexed like the body set
//!
//! A body configured with `m: 0` is added as a massless test particle.

use tracing::info;

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::simulation::engine::{RunState, Simulation};
use crate::simulation::errors::PhysicsError;
use crate::simulation::params::Parameters;
use crate::simulation::states::BodySpec;

pub struct Scenario {
    pub engine: Engine,
    pub simulation: Simulation,
    pub colors: Vec<Option<[f32; 3]>>,
}

/// Run options carried over from `EngineConfig`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Engine {
    pub ticks: u64,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, PhysicsError> {
        // Parameters (runtime) from ParametersConfig
        let parameters = Parameters::from(&cfg.parameters);
        let mut simulation = Simulation::new(parameters)?;

        // Bodies: map `BodyConfig` -> runtime `Body` through the simulation
        let mut colors = Vec::with_capacity(cfg.bodies.len());
        for bc in &cfg.bodies {
            let spec = body_spec(bc);
            if bc.m == 0.0 {
                simulation.add_test_particle(spec)?;
            } else {
                simulation.add_body(spec)?;
            }
            colors.push(bc.color);
        }

        if cfg.engine.start_paused {
            simulation.set_run_state(RunState::Paused);
        }

        info!(bodies = simulation.bodies().len(), paused = cfg.engine.start_paused, "scenario built");

        Ok(Self {
            engine: Engine { ticks: cfg.engine.ticks },
            simulation,
            colors,
        })
    }
}

fn body_spec(bc: &BodyConfig) -> BodySpec {
    let spec = BodySpec::new(bc.name.clone(), bc.x[0], bc.x[1], bc.radius, bc.m);
    if bc.speed != 0.0 {
        spec.launched(bc.speed, bc.direction)
    } else {
        spec
    }
}
