use bevy::{input::touch::Touches, prelude::*, window::PrimaryWindow};
use bevy_inspector_egui::{
    bevy_egui::{egui, EguiContexts},
    quick::ResourceInspectorPlugin,
};

use double_pendulum::{
    layout::{cursor_to_screen, drag_angle},
    resources::{Config, RunState},
    PendulumEnsemble,
};

/// Press (or touch) and drag to aim the pendulum, release to let it swing.
pub struct DragPlugin;

impl Plugin for DragPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Dragged>()
            .add_plugin(ResourceInspectorPlugin::<Dragged>::default())
            .add_state::<DragState>()
            .add_system(handle_drag_none.in_set(OnUpdate(DragState::None)))
            .add_system(handle_drag_start.in_schedule(OnEnter(DragState::Dragging)))
            .add_system(handle_drag_move.in_set(OnUpdate(DragState::Dragging)))
            .add_system(handle_drag_end.in_schedule(OnExit(DragState::Dragging)))
            .register_type::<Dragged>();
    }
}

#[derive(Reflect, Resource)]
#[reflect(Resource)]
pub struct Dragged {
    pub mouse_drag: MouseButton,
    pub angle: Option<f64>,
}

impl Default for Dragged {
    fn default() -> Self {
        Self {
            mouse_drag: MouseButton::Left,
            angle: None,
        }
    }
}

#[derive(States, PartialEq, Eq, Debug, Clone, Hash, Default)]
pub enum DragState {
    #[default]
    None,
    Dragging,
}

fn pointer_pressed(mouse: &Input<MouseButton>, button: MouseButton, touches: &Touches) -> bool {
    mouse.just_pressed(button) || touches.iter_just_pressed().next().is_some()
}

fn pointer_released(mouse: &Input<MouseButton>, button: MouseButton, touches: &Touches) -> bool {
    mouse.just_released(button) || touches.iter_just_released().next().is_some()
}

/// Touch wins over the cursor. On desktop both use a bottom-left origin.
fn pointer_position(window: &Window, touches: &Touches) -> Option<Vec2> {
    touches
        .iter()
        .next()
        .map(|touch| touch.position())
        .or_else(|| window.cursor_position())
}

/// Presses over an inspector panel belong to egui, not to the pendulum.
pub fn ui_wants_pointer(ctx: &egui::Context) -> bool {
    ctx.wants_pointer_input() || ctx.is_pointer_over_area()
}

fn handle_drag_none(
    dragged: Res<Dragged>,
    mouse_input: Res<Input<MouseButton>>,
    touches: Res<Touches>,
    mut contexts: EguiContexts,
    mut drag_next_state: ResMut<NextState<DragState>>,
) {
    if !pointer_pressed(&mouse_input, dragged.mouse_drag, &touches) {
        return;
    }
    if ui_wants_pointer(contexts.ctx_mut()) {
        return;
    }
    drag_next_state.set(DragState::Dragging);
}

fn handle_drag_start(mut dragged: ResMut<Dragged>, mut run: ResMut<RunState>) {
    dragged.angle = None;
    run.running = false;
    debug!("Drag start, integration paused");
}

fn handle_drag_move(
    mouse_input: Res<Input<MouseButton>>,
    touches: Res<Touches>,
    mut dragged: ResMut<Dragged>,
    mut drag_next_state: ResMut<NextState<DragState>>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut ensemble: ResMut<PendulumEnsemble>,
) {
    if pointer_released(&mouse_input, dragged.mouse_drag, &touches) {
        drag_next_state.set(DragState::None);
        return;
    }

    let Ok(window) = window_query.get_single() else {
        return;
    };
    if let Some(pointer) = pointer_position(window, &touches) {
        let pointer = cursor_to_screen(pointer, window.height());
        let angle = drag_angle(ensemble.pivot(), pointer);
        ensemble.seed(angle);
        dragged.angle = Some(angle);
    }
}

fn handle_drag_end(
    mut dragged: ResMut<Dragged>,
    mut run: ResMut<RunState>,
    mut config: ResMut<Config>,
) {
    if let Some(angle) = dragged.angle.take() {
        config.base_angle = angle;
        info!("Released at {:.3} rad", angle);
    }
    run.running = true;
    debug!("Drag end, integration resumed");
}
