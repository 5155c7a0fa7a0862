mod drag;
mod hint;
mod reset;

use drag::*;
use hint::*;
use reset::*;

use bevy::{
    math::DVec2,
    prelude::*,
    window::{close_on_esc, PrimaryWindow, WindowResized},
};
use bevy_inspector_egui::quick::{ResourceInspectorPlugin, WorldInspectorPlugin};
use bevy_prototype_debug_lines::{DebugLines, DebugLinesPlugin};
use double_pendulum::{
    layout::screen_to_world,
    resources::{member_color, Config, RunState},
    trail::TRAIL_MAX_ALPHA,
    ConfigError, PendulumEnsemble,
};

// Arm lengths used until the first window layout replaces them.
const INITIAL_LENGTHS: (f64, f64) = (140.0, 110.0);

fn main() -> Result<(), ConfigError> {
    let config = Config::default();
    let params = config.parameters(INITIAL_LENGTHS.0, INITIAL_LENGTHS.1)?;
    let ensemble = PendulumEnsemble::new(params, DVec2::ZERO, config.base_angle);

    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugin(WorldInspectorPlugin::new())
        .insert_resource(ClearColor(Color::rgb(0.0, 0.008, 0.06)))
        .insert_resource(config)
        .insert_resource(ensemble)
        .init_resource::<RunState>()
        .add_plugin(ResourceInspectorPlugin::<Config>::default())
        .add_plugin(DebugLinesPlugin::default())
        .add_plugin(ResetPlugin)
        .add_plugin(DragPlugin)
        .add_plugin(HintPlugin)
        .add_startup_system(setup)
        .add_system(fit_to_window)
        .add_systems(
            (simulate, record_trails)
                .chain()
                .after(fit_to_window)
                .in_set(OnUpdate(ResetState::Playing)),
        )
        .add_system(draw_pendulums.after(record_trails))
        .add_system(close_on_esc)
        .register_type::<Config>()
        .register_type::<RunState>()
        .run();

    Ok(())
}

fn setup(mut commands: Commands) {
    commands.spawn(Camera2dBundle {
        transform: Transform::from_xyz(0., 0., 100.),
        ..Default::default()
    });

    info!("Press 'R' to reset, 'Space' to pause, 'Esc' to quit");
}

/// Keeps pivot and arm lengths in step with the window and the inspector.
fn fit_to_window(
    mut resized: EventReader<WindowResized>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    config: Res<Config>,
    mut ensemble: ResMut<PendulumEnsemble>,
) {
    let was_resized = resized.iter().last().is_some();
    if !was_resized && !config.is_changed() {
        return;
    }
    let Ok(window) = window_query.get_single() else {
        return;
    };

    let layout = config.layout(window.width() as f64, window.height() as f64);
    let applied = if config.is_changed() {
        config
            .parameters(layout.length1, layout.length2)
            .map(|params| ensemble.set_params(params))
    } else {
        ensemble.set_scale(layout.length1, layout.length2)
    };

    match applied {
        Ok(()) => ensemble.set_pivot(layout.pivot),
        Err(err) => warn!("Keeping previous parameters: {}", err),
    }
}

fn simulate(run: Res<RunState>, mut ensemble: ResMut<PendulumEnsemble>) {
    if !run.running {
        return;
    }
    ensemble.step();
}

fn record_trails(mut ensemble: ResMut<PendulumEnsemble>) {
    ensemble.record_trails();
}

fn draw_pendulums(
    mut lines: ResMut<DebugLines>,
    ensemble: Res<PendulumEnsemble>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    drag_state: Res<State<DragState>>,
) {
    let Ok(window) = window_query.get_single() else {
        return;
    };
    let (width, height) = (window.width(), window.height());
    let world = |p: DVec2| screen_to_world(p, width, height);

    for (index, trail) in ensemble.trails().iter().enumerate() {
        let color = member_color(index);
        for (a, b, alpha) in trail.segments() {
            lines.line_colored(world(a), world(b), 0.0, color.with_a(alpha));
        }
    }

    let pivot = world(ensemble.pivot());
    let Some(first) = ensemble.states().first() else {
        return;
    };

    // Only the first member is drawn with arms, the rest are trails only
    let arms = ensemble.tip_positions(first);
    let (elbow, tip) = (world(arms.elbow), world(arms.tip));
    let color = member_color(0);
    lines.line_colored(pivot, elbow, 0.0, color.with_a(TRAIL_MAX_ALPHA));
    lines.line_colored(elbow, tip, 0.0, color.with_a(TRAIL_MAX_ALPHA));
    draw_circle(&mut lines, elbow, 5.0, Color::WHITE);
    draw_circle(&mut lines, tip, 12.0, color);

    draw_circle(&mut lines, pivot, 18.0, Color::rgba(1.0, 1.0, 1.0, 0.5));
    draw_circle(&mut lines, pivot, 4.0, Color::WHITE);

    if drag_state.0 == DragState::Dragging {
        let guide = Color::rgba(1.0, 1.0, 1.0, 0.4);
        lines.line_colored(pivot, elbow, 0.0, guide);
        lines.line_colored(elbow, tip, 0.0, guide);
    }
}

fn draw_circle(lines: &mut DebugLines, center: Vec3, radius: f32, color: Color) {
    const SEGMENTS: u32 = 16;
    let rotation = Quat::from_rotation_z(2. * std::f32::consts::PI / SEGMENTS as f32);
    let mut offset = Vec3::new(0.0, radius, 0.0);
    for _ in 0..SEGMENTS {
        let next = rotation * offset;
        lines.line_colored(center + offset, center + next, 0.0, color);
        offset = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use double_pendulum::PendulumState;

    fn simulation_app(running: bool) -> App {
        let config = Config::default();
        let params = config.parameters(140.0, 110.0).unwrap();
        let mut app = App::new();
        app.insert_resource(PendulumEnsemble::new(params, DVec2::ZERO, config.base_angle))
            .insert_resource(RunState { running })
            .add_systems((simulate, record_trails).chain());
        app
    }

    fn states(app: &App) -> Vec<PendulumState> {
        app.world.resource::<PendulumEnsemble>().states().to_vec()
    }

    #[test]
    fn no_step_while_not_running() {
        let mut app = simulation_app(false);
        let seeded = states(&app);

        for _ in 0..5 {
            app.update();
        }
        assert_eq!(states(&app), seeded);

        app.world.resource_mut::<RunState>().running = true;
        app.update();
        let stepped = states(&app);
        assert_ne!(stepped, seeded);

        let params = *app.world.resource::<PendulumEnsemble>().params();
        assert_eq!(stepped[0], params.rk4_step(seeded[0]));
    }

    #[test]
    fn one_step_per_frame() {
        let mut app = simulation_app(true);
        let mut expected = app.world.resource::<PendulumEnsemble>().clone();

        for _ in 0..3 {
            app.update();
            expected.step();
        }
        assert_eq!(states(&app), expected.states());
        assert!(app
            .world
            .resource::<PendulumEnsemble>()
            .trails()
            .iter()
            .all(|trail| trail.len() == 3));
    }
}
