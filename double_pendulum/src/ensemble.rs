use bevy::{math::DVec2, prelude::*};

use crate::{
    error::ConfigError,
    physics::{PendulumState, PhysicalParameters},
    trail::TrailBuffer,
};

pub const PENDULUM_COUNT: usize = 8;

/// Angular spacing between neighbouring members at seed time.
pub const SEED_SPREAD: f64 = 0.003;

/// The second arm starts this much further round than the first.
pub const SECOND_ARM_OFFSET: f64 = 0.1;

/// Joint positions of one pendulum in y-down screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arms {
    pub elbow: DVec2,
    pub tip: DVec2,
}

/// Near-identical double pendulums stepped side by side, one trail each.
#[derive(Resource, Debug, Clone)]
pub struct PendulumEnsemble {
    params: PhysicalParameters,
    pivot: DVec2,
    states: Vec<PendulumState>,
    trails: Vec<TrailBuffer>,
}

impl PendulumEnsemble {
    pub fn new(params: PhysicalParameters, pivot: DVec2, base_angle: f64) -> Self {
        let mut ensemble = Self {
            params,
            pivot,
            states: Vec::with_capacity(PENDULUM_COUNT),
            trails: vec![TrailBuffer::default(); PENDULUM_COUNT],
        };
        ensemble.seed(base_angle);
        ensemble
    }

    /// Replaces every state with a fresh fan around `base_angle` and clears the trails.
    pub fn seed(&mut self, base_angle: f64) {
        self.states.clear();
        self.states.extend((0..PENDULUM_COUNT).map(|i| {
            let theta = base_angle + seed_offset(i);
            PendulumState::at_rest(theta, theta + SECOND_ARM_OFFSET)
        }));
        for trail in self.trails.iter_mut() {
            trail.clear();
        }
    }

    /// Changes arm lengths only. On error the ensemble is left as it was.
    pub fn set_scale(&mut self, length1: f64, length2: f64) -> Result<(), ConfigError> {
        self.params = self.params.with_lengths(length1, length2)?;
        Ok(())
    }

    pub fn set_params(&mut self, params: PhysicalParameters) {
        self.params = params;
    }

    pub fn set_pivot(&mut self, pivot: DVec2) {
        self.pivot = pivot;
    }

    /// Advances every member by one `dt`. Callers skip this while a reseed drag is active.
    pub fn step(&mut self) {
        let params = self.params;
        for state in self.states.iter_mut() {
            *state = params.rk4_step(*state);
        }
    }

    pub fn tip_positions(&self, state: &PendulumState) -> Arms {
        let (l1, l2) = self.params.lengths();
        let elbow = self.pivot + l1 * DVec2::new(state.theta1.sin(), state.theta1.cos());
        let tip = elbow + l2 * DVec2::new(state.theta2.sin(), state.theta2.cos());
        Arms { elbow, tip }
    }

    /// Appends each member's current tip to its trail.
    pub fn record_trails(&mut self) {
        for i in 0..self.states.len() {
            let tip = self.tip_positions(&self.states[i]).tip;
            self.trails[i].push(tip);
        }
    }

    pub fn states(&self) -> &[PendulumState] {
        &self.states
    }

    pub fn trails(&self) -> &[TrailBuffer] {
        &self.trails
    }

    pub fn params(&self) -> &PhysicalParameters {
        &self.params
    }

    pub fn pivot(&self) -> DVec2 {
        self.pivot
    }

    /// Sum of both arm lengths, the farthest a tip can be from the pivot.
    pub fn reach(&self) -> f64 {
        let (l1, l2) = self.params.lengths();
        l1 + l2
    }
}

fn seed_offset(index: usize) -> f64 {
    (index as f64 - PENDULUM_COUNT as f64 / 2.0) * SEED_SPREAD
}
