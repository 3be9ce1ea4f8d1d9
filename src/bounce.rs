// Bouncing-box physics for a rectangular sprite.
// Visual: the sprite drifts diagonally and ricochets off the screen edges,
// never poking past them.

use crate::types::{Origin, Raster};

/// Initial velocity in pixels per tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Velocity {
    pub x: i64,
    pub y: i64,
}

impl Default for Velocity {
    fn default() -> Self {
        Self { x: 1, y: 2 }
    }
}

/// Position and velocity of a sprite inside a fixed field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BounceBody {
    x: i64,
    y: i64,
    w: i64,
    h: i64,
    vel: Velocity,
    field_w: i64,
    field_h: i64,
}

impl BounceBody {
    /// `size` is the sprite's (w, h), `field` the surface's (width, height).
    pub fn new(size: (usize, usize), start: Origin, vel: Velocity, field: (usize, usize)) -> Self {
        Self {
            x: to_i64(start.x),
            y: to_i64(start.y),
            w: to_i64(size.0),
            h: to_i64(size.1),
            vel,
            field_w: to_i64(field.0),
            field_h: to_i64(field.1),
        }
    }

    /// A body sized to `raster`'s bounds.
    pub fn for_raster(raster: &Raster, start: Origin, vel: Velocity, field: (usize, usize)) -> Self {
        Self::new((raster.width(), raster.height()), start, vel, field)
    }

    /// Advance one tick: move, then reflect and clamp each axis independently.
    pub fn tick(&mut self) {
        (self.x, self.vel.x) = step_axis(self.x, self.vel.x, self.w, self.field_w);
        (self.y, self.vel.y) = step_axis(self.y, self.vel.y, self.h, self.field_h);
    }

    /// Current top-left corner, always inside `[0, field - size]` after a tick.
    pub fn position(&self) -> Origin {
        Origin::new(self.x.max(0) as usize, self.y.max(0) as usize)
    }

    pub fn velocity(&self) -> Velocity {
        self.vel
    }

    pub fn size(&self) -> (usize, usize) {
        (self.w as usize, self.h as usize)
    }
}

fn to_i64(v: usize) -> i64 {
    i64::try_from(v).unwrap_or(i64::MAX)
}

// A sprite larger than the field is pinned at 0 on that axis.
// Arithmetic saturates so absurd velocities clamp instead of overflowing.
fn step_axis(pos: i64, vel: i64, extent: i64, field: i64) -> (i64, i64) {
    let pos = pos.saturating_add(vel);
    if pos < 0 {
        (0, vel.saturating_neg())
    } else if pos > field - extent {
        ((field - extent).max(0), vel.saturating_neg())
    } else {
        (pos, vel)
    }
}
