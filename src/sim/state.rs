//! Simulation state and core body types
//!
//! Everything the ball scene evolves tick to tick lives here. Drawing reads
//! it, never writes it.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::color::{Color, palette};
use crate::consts::MAX_BODIES;
use crate::settings::PhysicsSettings;

/// Whether the pointer currently owns a body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DragState {
    /// Physics drives the body
    Free,
    /// Body follows the pointer; physics is suspended
    Dragging {
        /// Pointer position when the grab started
        anchor: Vec2,
        /// Clock reading (seconds) when the grab started
        started_at: f64,
    },
}

/// A simulated disc
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    radius: f32,
    color: Color,
    pub(crate) drag: DragState,
}

impl Body {
    /// Create a resting body. Non-positive radii are replaced by 1.0.
    pub fn new(pos: Vec2, radius: f32, color: Color) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius: if radius > 0.0 { radius } else { 1.0 },
            color,
            drag: DragState::Free,
        }
    }

    pub fn with_velocity(mut self, vel: Vec2) -> Self {
        self.vel = vel;
        self
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// Point-in-circle test, inclusive of the rim
    pub fn contains(&self, point: Vec2) -> bool {
        self.pos.distance_squared(point) <= self.radius * self.radius
    }
}

/// Complete ball scene state
///
/// Bodies live in a fixed-capacity arena: storage is reserved once for
/// [`MAX_BODIES`] and [`SimState::spawn`] refuses to grow past it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    pub settings: PhysicsSettings,
    bodies: Vec<Body>,
    /// Body currently engaged by a drag gesture
    pub selected: Option<usize>,
}

impl SimState {
    /// Empty arena
    pub fn empty(settings: PhysicsSettings) -> Self {
        Self {
            settings: settings.sanitized(),
            bodies: Vec::with_capacity(MAX_BODIES),
            selected: None,
        }
    }

    /// Arena populated with a row of resting bodies
    ///
    /// Body `i` starts at `(300 + 50 i, 300)`; colors are drawn from the
    /// ball palette with a PCG stream seeded from `settings.seed`.
    pub fn new(settings: PhysicsSettings) -> Self {
        let mut state = Self::empty(settings);
        let mut rng = Pcg32::seed_from_u64(state.settings.seed);
        let radius = state.settings.body_radius;

        for i in 0..state.settings.body_count {
            let color = palette::BALLS[rng.random_range(0..palette::BALLS.len())];
            let pos = Vec2::new(300.0 + i as f32 * 50.0, 300.0);
            state.spawn(Body::new(pos, radius, color));
        }

        state
    }

    /// Add a body, returning its index, or `None` when the arena is full
    pub fn spawn(&mut self, body: Body) -> Option<usize> {
        if self.bodies.len() >= MAX_BODIES {
            log::warn!("Arena full ({} bodies), spawn ignored", MAX_BODIES);
            return None;
        }
        self.bodies.push(body);
        Some(self.bodies.len() - 1)
    }

    /// Number of active bodies
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    /// Settings and bodies borrowed together, for per-body updates
    pub fn parts_mut(&mut self) -> (&PhysicsSettings, &mut [Body]) {
        (&self.settings, &mut self.bodies)
    }

    pub fn body(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    /// Index of the first body under `point`, lowest index wins
    pub fn body_at(&self, point: Vec2) -> Option<usize> {
        self.bodies.iter().position(|b| b.contains(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_layout() {
        let state = SimState::new(PhysicsSettings::with_seed(1));
        assert_eq!(state.len(), MAX_BODIES);
        assert_eq!(state.selected, None);
        for (i, body) in state.bodies().iter().enumerate() {
            assert_eq!(body.pos, Vec2::new(300.0 + i as f32 * 50.0, 300.0));
            assert_eq!(body.vel, Vec2::ZERO);
            assert_eq!(body.radius(), 20.0);
            assert!(palette::BALLS.contains(&body.color()));
            assert!(!body.is_dragging());
        }
    }

    #[test]
    fn test_seeded_colors_are_reproducible() {
        let a = SimState::new(PhysicsSettings::with_seed(42));
        let b = SimState::new(PhysicsSettings::with_seed(42));
        let colors = |s: &SimState| s.bodies().iter().map(Body::color).collect::<Vec<_>>();
        assert_eq!(colors(&a), colors(&b));
    }

    #[test]
    fn test_spawn_respects_capacity() {
        let mut state = SimState::new(PhysicsSettings::default());
        let extra = Body::new(Vec2::ZERO, 5.0, palette::RED);
        assert_eq!(state.spawn(extra), None);
        assert_eq!(state.len(), MAX_BODIES);

        let mut empty = SimState::empty(PhysicsSettings::default());
        assert!(empty.is_empty());
        assert_eq!(empty.spawn(Body::new(Vec2::ZERO, 5.0, palette::RED)), Some(0));
    }

    #[test]
    fn test_body_at_prefers_lowest_index() {
        let mut state = SimState::empty(PhysicsSettings::default());
        state.spawn(Body::new(Vec2::new(100.0, 100.0), 20.0, palette::RED));
        state.spawn(Body::new(Vec2::new(110.0, 100.0), 20.0, palette::BLUE));

        assert_eq!(state.body_at(Vec2::new(105.0, 100.0)), Some(0));
        assert_eq!(state.body_at(Vec2::new(128.0, 100.0)), Some(1));
        assert_eq!(state.body_at(Vec2::new(500.0, 500.0)), None);
    }

    #[test]
    fn test_contains_rim_inclusive() {
        let body = Body::new(Vec2::new(0.0, 0.0), 10.0, palette::RED);
        assert!(body.contains(Vec2::new(10.0, 0.0)));
        assert!(!body.contains(Vec2::new(10.01, 0.0)));
    }

    #[test]
    fn test_radius_is_positive() {
        let body = Body::new(Vec2::ZERO, -3.0, palette::RED);
        assert!(body.radius() > 0.0);
    }
}
