//! Physics tuning
//!
//! Material parameters and play-area layout for the ball scene. Defaults
//! come from [`crate::consts`]; nothing is read from disk or the environment.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Physics settings for one simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicsSettings {
    // === Forces ===
    /// Downward acceleration (pixels/s²)
    pub gravity: f32,
    /// Acceleration per held direction key (pixels/s²)
    pub force_amount: f32,

    // === Materials ===
    /// Velocity retained per tick, in (0, 1)
    pub damping: f32,
    /// Velocity retained per bounce, in (0, 1)
    pub restitution: f32,

    // === Layout ===
    /// Play area width and height in pixels
    pub arena: Vec2,
    /// Background grid spacing in pixels
    pub grid_size: f32,
    /// Number of bodies spawned at start (capped at `MAX_BODIES`)
    pub body_count: usize,
    /// Radius of every spawned body
    pub body_radius: f32,
    /// Seed for spawn colors
    pub seed: u64,
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            force_amount: FORCE_AMOUNT,

            damping: DAMPING,
            restitution: RESTITUTION,

            arena: Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            grid_size: GRID_SIZE,
            body_count: MAX_BODIES,
            body_radius: BODY_RADIUS,
            seed: 0,
        }
    }
}

impl PhysicsSettings {
    /// Default settings with a specific spawn seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Clamp every field into the range the simulation relies on
    pub fn sanitized(mut self) -> Self {
        let open_unit = |v: f32, fallback: f32| {
            if v > 0.0 && v < 1.0 { v } else { fallback }
        };
        self.damping = open_unit(self.damping, DAMPING);
        self.restitution = open_unit(self.restitution, RESTITUTION);

        if !(self.body_radius > 0.0) {
            self.body_radius = BODY_RADIUS;
        }
        if !(self.grid_size > 0.0) {
            self.grid_size = GRID_SIZE;
        }
        self.body_count = self.body_count.min(MAX_BODIES);
        self.arena = self.arena.max(Vec2::splat(self.body_radius * 2.0));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let settings = PhysicsSettings::default();
        assert_eq!(settings.gravity, 980.0);
        assert_eq!(settings.damping, 0.99);
        assert_eq!(settings.restitution, 0.8);
        assert_eq!(settings.body_count, 10);
        assert_eq!(settings.clone().sanitized(), settings);
    }

    #[test]
    fn test_sanitize_out_of_range() {
        let settings = PhysicsSettings {
            damping: 1.5,
            restitution: -0.2,
            body_radius: 0.0,
            body_count: 50,
            arena: Vec2::new(10.0, 10.0),
            ..PhysicsSettings::default()
        }
        .sanitized();

        assert_eq!(settings.damping, DAMPING);
        assert_eq!(settings.restitution, RESTITUTION);
        assert_eq!(settings.body_radius, BODY_RADIUS);
        assert_eq!(settings.body_count, MAX_BODIES);
        assert_eq!(settings.arena, Vec2::splat(40.0));
    }

    #[test]
    fn test_settings_log_as_json() {
        let json = serde_json::to_string(&PhysicsSettings::with_seed(7)).unwrap();
        assert!(json.contains("\"restitution\":0.8"));
        assert!(json.contains("\"seed\":7"));
    }
}
