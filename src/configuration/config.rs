//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – run options (start paused, headless run length)
//! - [`ParametersConfig`] – gravity strength, distance floor, trail length
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! The built-in Earth/Rocket scenario written out as YAML:
//!
//! ```yaml
//! engine:
//!   start_paused: false
//!   ticks: 2000             # steps for a headless run
//!
//! parameters:
//!   G: 1.0                  # gravity strength (tuning constant)
//!   min_distance: 1.0       # separation floor for the force magnitude
//!   trail_capacity: 175     # positions kept per body
//!
//! bodies:
//!   - name: Earth
//!     x: [500.0, 450.0]
//!     radius: 10.0
//!     m: 20000.0
//!     color: [0.0, 0.0, 1.0]
//!   - name: Rocket
//!     x: [500.0, 225.0]
//!     radius: 5.0
//!     m: 200.0
//!     speed: 10.0           # launch speed, world units per tick
//!     direction: 0.0        # launch direction in degrees
//!     color: [0.0, 1.0, 0.0]
//! ```
//!
//! Every field except `bodies` has a default, so a file can list bodies only.

use serde::Deserialize;

use crate::simulation::params::Parameters;

/// Run options that do not affect the physics
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    pub start_paused: bool, // begin in the paused state
    pub ticks: u64,         // number of steps for a headless run
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            start_paused: false,
            ticks: 2000,
        }
    }
}

/// Global physical parameters for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ParametersConfig {
    pub G: f64,                // gravity strength
    pub min_distance: f64,     // floor on separation when computing force magnitude
    pub trail_capacity: usize, // positions kept per body for trail drawing
}

impl Default for ParametersConfig {
    fn default() -> Self {
        let p = Parameters::default();
        Self {
            G: p.g,
            min_distance: p.min_distance,
            trail_capacity: p.trail_capacity,
        }
    }
}

impl From<&ParametersConfig> for Parameters {
    fn from(cfg: &ParametersConfig) -> Self {
        Parameters {
            g: cfg.G,
            min_distance: cfg.min_distance,
            trail_capacity: cfg.trail_capacity,
        }
    }
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BodyConfig {
    pub name: String,
    pub x: [f64; 2], // initial centre in world units
    pub radius: f64, // collision and draw radius
    #[serde(default)]
    pub m: f64, // mass; 0 makes the body a massless probe
    #[serde(default)]
    pub speed: f64, // launch speed, world units per tick
    #[serde(default)]
    pub direction: f64, // launch direction in degrees
    #[serde(default)]
    pub color: Option<[f32; 3]>, // linear RGB for the viewer
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub parameters: ParametersConfig,
    pub bodies: Vec<BodyConfig>,
}

impl Default for ScenarioConfig {
    /// A planet at the centre of a 1000x900 view with a rocket launched
    /// sideways from halfway up the screen
    fn default() -> Self {
        let earth = BodyConfig {
            name: "Earth".to_string(),
            x: [500.0, 450.0],
            radius: 10.0,
            m: 20000.0,
            speed: 0.0,
            direction: 0.0,
            color: Some([0.0, 0.0, 1.0]),
        };
        let rocket = BodyConfig {
            name: "Rocket".to_string(),
            x: [earth.x[0], earth.x[1] / 2.0],
            radius: 5.0,
            m: 200.0,
            speed: 10.0,
            direction: 0.0,
            color: Some([0.0, 1.0, 0.0]),
        };

        Self {
            engine: EngineConfig::default(),
            parameters: ParametersConfig::default(),
            bodies: vec![earth, rocket],
        }
    }
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(s)
    }

    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_reader(reader)
    }
}
