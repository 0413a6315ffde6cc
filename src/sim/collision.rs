//! Collision response between a disc and the play-area walls
//!
//! The play area is the axis-aligned rectangle `[0, arena.x] x [0, arena.y]`.
//! Each axis is resolved on its own, so a corner hit corrects both.

use glam::Vec2;

use super::state::Body;

/// Walls touched during one collision pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallContact {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl WallContact {
    pub fn any(&self) -> bool {
        self.left || self.right || self.top || self.bottom
    }
}

/// Clamp a body back inside the arena and reflect its velocity
///
/// A body whose leading edge touches or crosses a wall is placed exactly
/// `radius` from it and the velocity component along that axis is scaled by
/// `-restitution`.
pub fn resolve_walls(body: &mut Body, arena: Vec2, restitution: f32) -> WallContact {
    let radius = body.radius();
    let (left, right) = resolve_axis(&mut body.pos.x, &mut body.vel.x, radius, arena.x, restitution);
    let (top, bottom) = resolve_axis(&mut body.pos.y, &mut body.vel.y, radius, arena.y, restitution);
    WallContact {
        left,
        right,
        top,
        bottom,
    }
}

/// Resolve one axis, returning (hit low wall, hit high wall)
fn resolve_axis(pos: &mut f32, vel: &mut f32, radius: f32, extent: f32, restitution: f32) -> (bool, bool) {
    let mut low = false;
    let mut high = false;

    if *pos - radius <= 0.0 {
        *pos = radius;
        *vel *= -restitution;
        low = true;
    }
    if *pos + radius >= extent {
        *pos = extent - radius;
        *vel *= -restitution;
        high = true;
    }

    (low, high)
}
