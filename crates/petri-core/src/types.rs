//! Fundamental geometric and simulation types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::{ARENA_WIDTH, GROUND_LEVEL, TICK_RATE};

/// Axis-aligned rectangle in arena space (pixels, y grows downward).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Strict overlap test. Degenerate rectangles touch nothing.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }

    /// Center point.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Clip against the arena's left, right, and bottom bounds.
    /// Shrinks width/height toward the clamped edge, never repositions
    /// the opposite edge.
    pub fn clipped_to_arena(&self) -> Rect {
        let mut r = *self;
        if r.x < 0.0 {
            r.w += r.x;
            r.x = 0.0;
        }
        if r.x + r.w > ARENA_WIDTH {
            r.w = ARENA_WIDTH - r.x;
        }
        if r.y + r.h > GROUND_LEVEL {
            r.h = GROUND_LEVEL - r.y;
        }
        r
    }

    /// Whether clipping has collapsed this rectangle to zero area.
    pub fn is_degenerate(&self) -> bool {
        self.w <= 0.0 || self.h <= 0.0
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each fighting tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f32,
}

impl SimTime {
    /// Seconds per tick at the fixed tick rate.
    pub fn dt(&self) -> f32 {
        1.0 / TICK_RATE as f32
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}
