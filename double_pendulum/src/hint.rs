use bevy::prelude::*;
use bevy_inspector_egui::bevy_egui::{egui, EguiContexts};

use crate::drag::DragState;

pub struct HintPlugin;

impl Plugin for HintPlugin {
    fn build(&self, app: &mut App) {
        app.add_system(draw_hint);
    }
}

const HINT_SIZE: f32 = 13.0;

pub fn hint_text(state: &DragState) -> &'static str {
    match state {
        DragState::None => "Drag or swipe to set the initial angle, release to start",
        DragState::Dragging => "Release to start",
    }
}

fn draw_hint(mut contexts: EguiContexts, drag_state: Res<State<DragState>>) {
    egui::Area::new("hint")
        .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -20.0))
        .interactable(false)
        .show(contexts.ctx_mut(), |ui| {
            ui.label(
                egui::RichText::new(hint_text(&drag_state.0))
                    .size(HINT_SIZE)
                    .color(egui::Color32::from_white_alpha(64)),
            );
            ui.label(
                egui::RichText::new("R reset   Space pause   Esc quit")
                    .size(HINT_SIZE)
                    .color(egui::Color32::from_white_alpha(40)),
            );
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hint_follows_drag() {
        assert!(hint_text(&DragState::None).starts_with("Drag"));
        assert_eq!(hint_text(&DragState::Dragging), "Release to start");
    }
}
