use bevy::{math::DVec2, prelude::*};

/// Where the pendulum hangs inside a window, in y-down screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub pivot: DVec2,
    pub length1: f64,
    pub length2: f64,
}

impl Layout {
    /// Pivot centred horizontally at `pivot_height` of the window, arms sized
    /// from the smaller side so the figure stays on screen at any aspect ratio.
    pub fn fit(
        width: f64,
        height: f64,
        arm1_fraction: f64,
        arm2_fraction: f64,
        pivot_height: f64,
    ) -> Self {
        let base = width.min(height);
        Self {
            pivot: DVec2::new(width / 2.0, height * pivot_height),
            length1: base * arm1_fraction,
            length2: base * arm2_fraction,
        }
    }
}

/// Initial angle that points the pendulum from `pivot` towards `cursor`.
pub fn drag_angle(pivot: DVec2, cursor: DVec2) -> f64 {
    let d = cursor - pivot;
    d.x.atan2(d.y)
}

/// Screen point (y down, origin top-left) to 2D world space (y up, origin centre).
pub fn screen_to_world(point: DVec2, width: f32, height: f32) -> Vec3 {
    Vec3::new(
        point.x as f32 - width / 2.0,
        height / 2.0 - point.y as f32,
        0.0,
    )
}

/// Bevy reports the cursor with the origin at the bottom-left.
pub fn cursor_to_screen(cursor: Vec2, height: f32) -> DVec2 {
    DVec2::new(cursor.x as f64, (height - cursor.y) as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn fit_uses_smaller_side() {
        let layout = Layout::fit(800.0, 500.0, 0.28, 0.22, 0.35);
        assert_relative_eq!(layout.pivot.x, 400.0);
        assert_relative_eq!(layout.pivot.y, 175.0, epsilon = 1e-9);
        assert_relative_eq!(layout.length1, 140.0, epsilon = 1e-9);
        assert_relative_eq!(layout.length2, 110.0, epsilon = 1e-9);

        let portrait = Layout::fit(300.0, 900.0, 0.28, 0.22, 0.35);
        assert_relative_eq!(portrait.length1, 84.0, epsilon = 1e-9);
        assert_relative_eq!(portrait.length2, 66.0, epsilon = 1e-9);
    }

    #[test]
    fn drag_angle_matches_hanging_convention() {
        let pivot = DVec2::new(100.0, 100.0);
        assert_relative_eq!(drag_angle(pivot, DVec2::new(100.0, 200.0)), 0.0);
        assert_relative_eq!(drag_angle(pivot, DVec2::new(200.0, 100.0)), FRAC_PI_2);
        assert_relative_eq!(drag_angle(pivot, DVec2::new(0.0, 100.0)), -FRAC_PI_2);
        assert_relative_eq!(drag_angle(pivot, DVec2::new(100.0, 0.0)).abs(), PI);
    }

    #[test]
    fn screen_and_world_agree() {
        let world = screen_to_world(DVec2::new(0.0, 0.0), 800.0, 600.0);
        assert_eq!(world, Vec3::new(-400.0, 300.0, 0.0));
        let world = screen_to_world(DVec2::new(400.0, 300.0), 800.0, 600.0);
        assert_eq!(world, Vec3::ZERO);

        let screen = cursor_to_screen(Vec2::new(10.0, 0.0), 600.0);
        assert_eq!(screen, DVec2::new(10.0, 600.0));
    }
}
