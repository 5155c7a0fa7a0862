use bevy::prelude::*;

use double_pendulum::{resources::Config, PendulumEnsemble};

/// `R` reseeds the ensemble at the configured angle, `Space` pauses and resumes.
pub struct ResetPlugin;

impl Plugin for ResetPlugin {
    fn build(&self, app: &mut App) {
        app.add_state::<ResetState>()
            .add_system(playback_keys)
            .add_system(reseed.in_schedule(OnEnter(ResetState::Reset)));
    }
}

#[derive(States, PartialEq, Eq, Debug, Clone, Hash, Default)]
pub enum ResetState {
    #[default]
    Playing,
    Pause,
    Reset,
}

/// State a key press moves to from `current`, if any.
fn next_state(current: &ResetState, key: KeyCode) -> Option<ResetState> {
    match (current, key) {
        (ResetState::Playing, KeyCode::R) => Some(ResetState::Reset),
        (ResetState::Playing, KeyCode::Space) => Some(ResetState::Pause),
        (ResetState::Pause, KeyCode::Space) => Some(ResetState::Playing),
        _ => None,
    }
}

fn playback_keys(
    keys: Res<Input<KeyCode>>,
    state: Res<State<ResetState>>,
    mut next: ResMut<NextState<ResetState>>,
) {
    for key in keys.get_just_pressed() {
        if let Some(target) = next_state(&state.0, *key) {
            match target {
                ResetState::Pause => info!("Pause"),
                ResetState::Playing => info!("Resume"),
                ResetState::Reset => {}
            }
            next.set(target);
            return;
        }
    }
}

fn reseed(
    mut ensemble: ResMut<PendulumEnsemble>,
    config: Res<Config>,
    mut next: ResMut<NextState<ResetState>>,
) {
    ensemble.seed(config.base_angle);
    info!("Reseeded at {:.3} rad", config.base_angle);
    next.set(ResetState::Playing);
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::math::DVec2;
    use double_pendulum::PhysicalParameters;

    #[test]
    fn keys_move_between_states() {
        assert_eq!(
            next_state(&ResetState::Playing, KeyCode::R),
            Some(ResetState::Reset)
        );
        assert_eq!(
            next_state(&ResetState::Playing, KeyCode::Space),
            Some(ResetState::Pause)
        );
        assert_eq!(
            next_state(&ResetState::Pause, KeyCode::Space),
            Some(ResetState::Playing)
        );
        assert_eq!(next_state(&ResetState::Pause, KeyCode::R), None);
        assert_eq!(next_state(&ResetState::Playing, KeyCode::A), None);
    }

    #[test]
    fn entering_reset_reseeds_and_resumes() {
        let mut app = App::new();
        let mut ensemble =
            PendulumEnsemble::new(PhysicalParameters::default(), DVec2::ZERO, 0.5);
        ensemble.step();
        ensemble.record_trails();

        app.insert_resource(ensemble)
            .insert_resource(Config {
                base_angle: 1.25,
                ..default()
            })
            .add_state::<ResetState>()
            .add_system(reseed.in_schedule(OnEnter(ResetState::Reset)));

        app.world
            .resource_mut::<NextState<ResetState>>()
            .set(ResetState::Reset);
        app.update();

        let ensemble = app.world.resource::<PendulumEnsemble>();
        assert_eq!(ensemble.states()[4].theta1, 1.25);
        assert!(ensemble.trails().iter().all(|t| t.is_empty()));
        assert_eq!(
            app.world.resource::<NextState<ResetState>>().0,
            Some(ResetState::Playing)
        );
    }
}
