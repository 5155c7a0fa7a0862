use bevy::prelude::*;
use bevy_inspector_egui::{prelude::ReflectInspectorOptions, InspectorOptions};
use std::f64::consts::PI;

use crate::{error::ConfigError, layout::Layout, physics::PhysicalParameters};

#[derive(Reflect, Resource, InspectorOptions)]
#[reflect(Resource, InspectorOptions)]
pub struct Config {
    pub gravity: f64,
    #[inspector(min = 0.1, max = 100.0)]
    pub mass1: f64,
    #[inspector(min = 0.1, max = 100.0)]
    pub mass2: f64,
    #[inspector(min = 0.001, max = 0.1)]
    pub dt: f64,
    pub base_angle: f64,
    #[inspector(min = 0.05, max = 0.5)]
    pub arm1_fraction: f64,
    #[inspector(min = 0.05, max = 0.5)]
    pub arm2_fraction: f64,
    #[inspector(min = 0.0, max = 1.0)]
    pub pivot_height: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gravity: 9.81,
            mass1: 10.0,
            mass2: 8.0,
            dt: 0.018,
            base_angle: PI * 0.75,
            arm1_fraction: 0.28,
            arm2_fraction: 0.22,
            pivot_height: 0.35,
        }
    }
}

impl Config {
    pub fn parameters(&self, length1: f64, length2: f64) -> Result<PhysicalParameters, ConfigError> {
        PhysicalParameters::new(
            self.gravity,
            length1,
            length2,
            self.mass1,
            self.mass2,
            self.dt,
        )
    }

    pub fn layout(&self, width: f64, height: f64) -> Layout {
        Layout::fit(
            width,
            height,
            self.arm1_fraction,
            self.arm2_fraction,
            self.pivot_height,
        )
    }
}

/// Cleared while a reseed drag is in progress; the integrator only steps when set.
#[derive(Reflect, Resource)]
#[reflect(Resource)]
pub struct RunState {
    pub running: bool,
}

impl Default for RunState {
    fn default() -> Self {
        Self { running: true }
    }
}

const PALETTE: [(u8, u8, u8); 8] = [
    (0xff, 0x2d, 0x78),
    (0xff, 0x6b, 0x35),
    (0xff, 0xe2, 0x34),
    (0x3d, 0xff, 0x8f),
    (0x00, 0xe5, 0xff),
    (0x7c, 0x4d, 0xff),
    (0xff, 0x4f, 0xc8),
    (0x29, 0xff, 0xb8),
];

/// Trail color of ensemble member `index`.
pub fn member_color(index: usize) -> Color {
    let (r, g, b) = PALETTE[index % PALETTE.len()];
    Color::rgb_u8(r, g, b)
}
