use std::collections::VecDeque;

use bevy::math::DVec2;

/// Points kept per trail.
pub const TRAIL_MAX: usize = 60;

/// Opacity of the newest trail segment.
pub const TRAIL_MAX_ALPHA: f32 = 0.7;

/// Bounded history of tip positions, oldest first.
#[derive(Debug, Clone)]
pub struct TrailBuffer {
    points: VecDeque<DVec2>,
    capacity: usize,
}

impl Default for TrailBuffer {
    fn default() -> Self {
        Self::with_capacity(TRAIL_MAX)
    }
}

impl TrailBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn push(&mut self, point: DVec2) {
        self.points.push_back(point);
        if self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn points(&self) -> impl ExactSizeIterator<Item = &DVec2> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consecutive point pairs with the opacity the segment should be drawn at.
    pub fn segments(&self) -> impl Iterator<Item = (DVec2, DVec2, f32)> + '_ {
        let len = self.points.len();
        self.points
            .iter()
            .zip(self.points.iter().skip(1))
            .enumerate()
            .map(move |(i, (a, b))| (*a, *b, fade_alpha(i + 1, len)))
    }
}

/// Opacity for point `index` of a trail holding `len` points.
pub fn fade_alpha(index: usize, len: usize) -> f32 {
    if len == 0 {
        return 0.0;
    }
    (index as f32 / len as f32 * TRAIL_MAX_ALPHA).min(TRAIL_MAX_ALPHA)
}
