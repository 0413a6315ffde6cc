//! Bounce Grid - draggable bouncing balls on a grid
//!
//! Core modules:
//! - `sim`: Physics simulation (bodies, integrator, drag controller, sand grid)
//! - `scene`: Init/update/draw scenes built on top of `sim`
//! - `frame`: Per-tick sequencing of input, update and draw
//! - `display` / `input`: Display surface and input source seams
//! - `renderer`: wgpu tessellation and render pipeline
//! - `platform`: Native winit window and event loop

pub mod color;
pub mod display;
pub mod frame;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod scene;
pub mod settings;
pub mod sim;

pub use color::Color;
pub use settings::PhysicsSettings;

/// Simulation configuration constants
pub mod consts {
    /// Play area size in pixels
    pub const SCREEN_WIDTH: f32 = 1200.0;
    pub const SCREEN_HEIGHT: f32 = 1200.0;
    /// Spacing of the background grid lines
    pub const GRID_SIZE: f32 = 60.0;
    /// Stroke width of lines and outlines, in scene pixels
    pub const STROKE_WIDTH: f32 = 1.0;

    /// Arena capacity
    pub const MAX_BODIES: usize = 10;
    pub const BODY_RADIUS: f32 = 20.0;

    /// Downward acceleration (pixels/s²)
    pub const GRAVITY: f32 = 980.0;
    /// Acceleration applied per held arrow key (pixels/s²)
    pub const FORCE_AMOUNT: f32 = 1200.0;
    /// Velocity retained per tick
    pub const DAMPING: f32 = 0.99;
    /// Velocity retained (sign-flipped) per wall bounce
    pub const RESTITUTION: f32 = 0.8;

    /// Target frame rate of the physics scene
    pub const PHYSICS_FPS: u32 = 60;
    /// Longest frame delta fed to the simulation
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Falling sand grid
    pub const SAND_GRID_WIDTH: usize = 20;
    pub const SAND_GRID_HEIGHT: usize = 30;
    pub const SAND_CELL_SIZE: f32 = 30.0;
    pub const SAND_FPS: u32 = 10;
}
