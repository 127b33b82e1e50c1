//! Bevy 2D host for the simulation.
//!
//! Owns the body set for the lifetime of the window and drives it once per
//! frame. Everything camera-related lives here: the world is drawn relative
//! to the focused body, which sits in the middle of the window.
//!
//! Controls:
//! - Space: pause / resume
//! - Up / Down: cycle the focused body
//! - Left mouse: press at the new body's centre, drag out its radius,
//!   release, then click again to launch it towards the cursor

use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use tracing::{info, warn};

use crate::simulation::collision::mark_collisions;
use crate::simulation::engine::{RunState, Simulation};
use crate::simulation::geometry::{angle_between, distance};
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{BodySpec, NVec2};

const WIDTH: f32 = 1000.0;
const HEIGHT: f32 = 900.0;

/// Drag length (world units) per unit of launch speed
const LAUNCH_SCALE: f64 = 10.0;

const COLLIDED: Color = Color::srgb(0.65, 0.16, 0.16);
const PLACED: Color = Color::srgb(1.0, 0.0, 0.0);
const FALLBACK: Color = Color::srgb(0.5, 0.5, 0.5);

#[derive(Debug, Clone, Copy, PartialEq)]
enum Placement {
    Idle,
    Sizing { anchor: NVec2, radius: f64, resume: bool },
    Aiming { anchor: NVec2, radius: f64, resume: bool },
}

#[derive(Resource)]
struct OrbitView {
    simulation: Simulation,
    colors: Vec<Color>,
    focus: usize,
    placement: Placement,
    last_cursor: Option<NVec2>,
}

impl OrbitView {
    /// World position the window is centred on
    fn offset(&self) -> NVec2 {
        self.simulation
            .bodies()
            .get(self.focus)
            .map(|b| b.x)
            .unwrap_or_else(NVec2::zeros)
    }

    /// World y grows downwards, Bevy's grows upwards
    fn to_screen(&self, p: &NVec2) -> Vec2 {
        let offset = self.offset();
        Vec2::new((p.x - offset.x) as f32, -((p.y - offset.y) as f32))
    }

    fn cursor_world(&self, window: &Window) -> Option<NVec2> {
        let cursor = window.cursor_position()?;
        let offset = self.offset();
        Some(NVec2::new(
            offset.x + (cursor.x - window.width() / 2.0) as f64,
            offset.y + (cursor.y - window.height() / 2.0) as f64,
        ))
    }
}

pub fn run_2d(scenario: Scenario) {
    info!(bodies = scenario.simulation.bodies().len(), "starting 2D viewer");

    let colors = scenario
        .colors
        .iter()
        .map(|c| c.map(|[r, g, b]| Color::srgb(r, g, b)).unwrap_or(FALLBACK))
        .collect();

    let view = OrbitView {
        simulation: scenario.simulation,
        colors,
        focus: 0,
        placement: Placement::Idle,
        last_cursor: None,
    };

    App::new()
        .insert_resource(view)
        .insert_resource(ClearColor(Color::WHITE))
        .add_plugins(
            DefaultPlugins
                .build()
                .disable::<LogPlugin>()
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "orbitsim".into(),
                        resolution: (WIDTH, HEIGHT).into(),
                        ..default()
                    }),
                    ..default()
                }),
        )
        .add_systems(Startup, setup_camera_system)
        .add_systems(
            Update,
            (keyboard_system, placement_system, physics_step_system, draw_system).chain(),
        )
        .run();
}

fn setup_camera_system(mut commands: Commands) {
    commands.spawn(Camera2dBundle::default());
}

fn keyboard_system(keys: Res<ButtonInput<KeyCode>>, mut view: ResMut<OrbitView>) {
    if keys.just_pressed(KeyCode::Space) {
        let state = view.simulation.toggle_pause();
        info!(?state, "toggled");
    }

    let n = view.simulation.bodies().len();
    if n == 0 {
        return;
    }
    if keys.just_pressed(KeyCode::ArrowUp) {
        view.focus = (view.focus + 1) % n;
    }
    if keys.just_pressed(KeyCode::ArrowDown) {
        view.focus = (view.focus + n - 1) % n;
    }
}

fn placement_system(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut view: ResMut<OrbitView>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Some(cursor) = view.cursor_world(window) else {
        return;
    };
    view.last_cursor = Some(cursor);

    let placement = view.placement;
    match placement {
        Placement::Idle => {
            if buttons.just_pressed(MouseButton::Left) {
                let resume = !view.simulation.is_paused();
                view.simulation.set_run_state(RunState::Paused);
                view.placement = Placement::Sizing { anchor: cursor, radius: 0.0, resume };
            }
        }
        Placement::Sizing { anchor, resume, .. } => {
            let radius = distance(&anchor, &cursor);
            view.placement = if buttons.just_released(MouseButton::Left) {
                Placement::Aiming { anchor, radius, resume }
            } else {
                Placement::Sizing { anchor, radius, resume }
            };
        }
        Placement::Aiming { anchor, radius, resume } => {
            if !buttons.just_released(MouseButton::Left) {
                return;
            }

            let speed = distance(&anchor, &cursor) / LAUNCH_SCALE;
            // launch directions turn the opposite way to angle_between
            let direction = -angle_between(&anchor, &cursor).to_degrees();
            let name = format!("Body {}", view.simulation.bodies().len() + 1);
            let spec = BodySpec::new(name, anchor.x, anchor.y, radius, 0.0).launched(speed, direction);

            match view.simulation.add_test_particle(spec) {
                Ok(id) => {
                    view.colors.push(PLACED);
                    info!(%id, speed, "body placed");
                }
                Err(err) => warn!(%err, "placement rejected"),
            }

            if resume {
                view.simulation.set_run_state(RunState::Running);
            }
            view.placement = Placement::Idle;
        }
    }
}

fn physics_step_system(mut view: ResMut<OrbitView>) {
    let pairs = view.simulation.step();
    if !pairs.is_empty() {
        mark_collisions(view.simulation.bodies_mut(), &pairs);
    }
}

fn draw_system(view: Res<OrbitView>, mut gizmos: Gizmos) {
    for (i, body) in view.simulation.bodies().iter().enumerate() {
        let color = if body.marked {
            COLLIDED
        } else {
            view.colors.get(i).copied().unwrap_or(FALLBACK)
        };

        gizmos.circle_2d(view.to_screen(&body.x), body.radius as f32, color);

        if body.trail.len() > 1 {
            gizmos.linestrip_2d(body.trail.iter().map(|p| view.to_screen(p)), Color::BLACK);
        }
    }

    match view.placement {
        Placement::Idle => {}
        Placement::Sizing { anchor, radius, .. } => {
            gizmos.circle_2d(view.to_screen(&anchor), radius as f32, PLACED);
        }
        Placement::Aiming { anchor, radius, .. } => {
            let centre = view.to_screen(&anchor);
            gizmos.circle_2d(centre, radius as f32, PLACED);
            if let Some(end) = view.last_cursor {
                gizmos.line_2d(centre, view.to_screen(&end), Color::BLACK);
            }
        }
    }
}
