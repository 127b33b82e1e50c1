use orbitsim::{bench_step, mark_collisions, CollisionPair, Scenario, ScenarioConfig};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Gravitational sandbox for a handful of bodies on a plane")]
struct Args {
    /// Scenario YAML; a bare name is looked up under `scenarios/`.
    /// Without it the built-in Earth/Rocket setup is used.
    #[arg(short, long)]
    file_name: Option<String>,

    /// Override the number of headless steps
    #[arg(short, long)]
    ticks: Option<u64>,

    /// Time the step function for growing body counts and exit
    #[arg(long)]
    bench: bool,

    /// Run without opening a window
    #[cfg(feature = "viewer")]
    #[arg(long)]
    headless: bool,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }
}

fn resolve_scenario_path(file_name: &str) -> PathBuf {
    let direct = PathBuf::from(file_name);
    if direct.exists() {
        return direct;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
}

// load here to keep main clean
fn load_scenario(file_name: Option<&str>) -> Result<ScenarioConfig> {
    let Some(file_name) = file_name else {
        return Ok(ScenarioConfig::default());
    };

    let config_path = resolve_scenario_path(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg = ScenarioConfig::from_reader(reader)
        .with_context(|| format!("failed to parse scenario {}", config_path.display()))?;

    info!(path = %config_path.display(), bodies = scenario_cfg.bodies.len(), "scenario loaded");
    Ok(scenario_cfg)
}

fn run_headless(mut scenario: Scenario, ticks: u64) {
    let sim = &mut scenario.simulation;
    let mut seen: HashSet<CollisionPair> = HashSet::new();

    for _ in 0..ticks {
        let pairs = sim.step();
        for pair in &pairs {
            if seen.insert(*pair) {
                let name = |id| sim.body(id).map(|b| b.name.as_str()).unwrap_or("?");
                info!(tick = sim.tick(), a = name(pair.a), b = name(pair.b), "collision");
            }
        }
        mark_collisions(sim.bodies_mut(), &pairs);
    }

    for b in sim.bodies() {
        info!(
            name = %b.name,
            x = b.x.x,
            y = b.x.y,
            vx = b.v.x,
            vy = b.v.y,
            trail = b.trail.len(),
            collided = b.marked,
            "final state"
        );
    }
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    if args.bench {
        bench_step(&[2, 5, 10, 20, 40, 80, 160, 320], 200)?;
        return Ok(());
    }

    let scenario_cfg = load_scenario(args.file_name.as_deref())?;
    let scenario = Scenario::build_scenario(scenario_cfg).context("invalid scenario")?;
    let ticks = args.ticks.unwrap_or(scenario.engine.ticks);

    #[cfg(feature = "viewer")]
    if !args.headless {
        orbitsim::run_2d(scenario);
        return Ok(());
    }

    run_headless(scenario, ticks);
    Ok(())
}
