//! Explicit Euler step for free bodies

use glam::Vec2;

use super::collision::{WallContact, resolve_walls};
use super::state::Body;
use crate::settings::PhysicsSettings;

/// Arrow keys held this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thrust {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl Thrust {
    /// Unnormalized direction in screen space (y grows downward)
    ///
    /// Opposite keys cancel; diagonals are not normalized.
    pub fn direction(self) -> Vec2 {
        let axis = |neg: bool, pos: bool| pos as i8 as f32 - neg as i8 as f32;
        Vec2::new(axis(self.left, self.right), axis(self.up, self.down))
    }
}

/// Advance one body by `dt` seconds
///
/// Order: gravity, thrust, position, wall collision, damping. Dragged
/// bodies are left untouched.
pub fn integrate(body: &mut Body, thrust: Thrust, settings: &PhysicsSettings, dt: f32) -> WallContact {
    if body.is_dragging() {
        return WallContact::default();
    }

    body.vel.y += settings.gravity * dt;
    body.vel += thrust.direction() * settings.force_amount * dt;

    body.pos += body.vel * dt;

    let contact = resolve_walls(body, settings.arena, settings.restitution);

    body.vel *= settings.damping;

    contact
}
