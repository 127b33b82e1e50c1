use std::time::Instant;

use crate::simulation::engine::Simulation;
use crate::simulation::errors::PhysicsError;
use crate::simulation::params::Parameters;
use crate::simulation::states::BodySpec;

/// Timing for one body count
#[derive(Debug, Clone, Copy)]
pub struct StepTiming {
    pub n: usize,
    pub secs_per_step: f64,
    pub collisions: usize, // pairs reported by the last timed step
}

/// Helper to build a simulation of size `n`: one heavy body at the origin
/// and the rest spread over a ring around it
fn make_simulation(n: usize) -> Result<Simulation, PhysicsError> {
    let mut sim = Simulation::new(Parameters::default())?;
    if n == 0 {
        return Ok(sim);
    }

    // deterministic placement, no rand needed
    sim.add_body(BodySpec::new("centre", 0.0, 0.0, 10.0, 20000.0))?;
    for i in 1..n {
        let i_f = i as f64;
        let angle = i_f * 0.37;
        let r = 150.0 + (i_f * 0.13).sin() * 50.0;
        let spec = BodySpec::new(format!("b{i}"), r * angle.cos(), r * angle.sin(), 2.0, 10.0)
            .launched(5.0, angle.to_degrees() + 90.0);
        sim.add_body(spec)?;
    }
    Ok(sim)
}

/// Time `Simulation::step` for each body count in `ns`
/// Output is CSV so it can be pasted straight into a spreadsheet
pub fn bench_step(ns: &[usize], steps: usize) -> Result<Vec<StepTiming>, PhysicsError> {
    let steps = steps.max(1);
    println!("N,step_ms,collisions");

    let mut timings = Vec::with_capacity(ns.len());
    for &n in ns {
        let mut sim = make_simulation(n)?;

        // Warm up
        sim.step();

        let t0 = Instant::now();
        let mut collisions = 0;
        for _ in 0..steps {
            collisions = sim.step().len();
        }
        let secs_per_step = t0.elapsed().as_secs_f64() / steps as f64;

        println!("{},{:.6},{}", n, secs_per_step * 1000.0, collisions);
        timings.push(StepTiming { n, secs_per_step, collisions });
    }
    Ok(timings)
}
