//! Init/update/draw scenes
//!
//! A scene owns its simulation state, advances it from sampled input and
//! turns it into draw calls. Drawing takes `&self`: it cannot touch the
//! simulation.

use glam::Vec2;

use crate::color::palette;
use crate::consts::*;
use crate::display::Canvas;
use crate::input::{Button, InputSource, Key};
use crate::settings::PhysicsSettings;
use crate::sim::{Pointer, SandGrid, SimState, Thrust, TickInput, tick};

/// Window requirements of a scene
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSpec {
    pub title: String,
    /// Logical size in scene pixels
    pub width: u32,
    pub height: u32,
    pub target_fps: u32,
}

/// A self-contained interactive demo
pub trait Scene {
    fn window(&self) -> WindowSpec;
    /// Advance by `dt` seconds; `now` is the monotonic clock in seconds
    fn update(&mut self, input: &dyn InputSource, dt: f32, now: f64);
    fn draw(&self, canvas: &mut dyn Canvas);
}

/// Sample the pointer and arrow keys for the ball simulation
pub fn sample_tick_input(input: &dyn InputSource) -> TickInput {
    TickInput {
        pointer: Pointer {
            pos: input.pointer_position(),
            just_pressed: input.is_button_just_pressed(Button::Left),
            down: input.is_button_down(Button::Left),
            just_released: input.is_button_just_released(Button::Left),
        },
        thrust: Thrust {
            left: input.is_key_down(Key::Left),
            right: input.is_key_down(Key::Right),
            up: input.is_key_down(Key::Up),
            down: input.is_key_down(Key::Down),
        },
    }
}

// ============================================================================
// BOUNCING BALLS
// ============================================================================

/// Draggable balls bouncing inside the window over a grid
pub struct PhysicsScene {
    pub state: SimState,
}

impl PhysicsScene {
    pub fn new(settings: PhysicsSettings) -> Self {
        Self {
            state: SimState::new(settings),
        }
    }

    /// Grid lines sit half a stroke right of / below each multiple of the
    /// spacing so the lines on the top and left edges stay fully visible
    fn draw_grid(&self, canvas: &mut dyn Canvas) {
        let arena = self.state.settings.arena;
        let step = self.state.settings.grid_size;
        let half = STROKE_WIDTH / 2.0;

        let mut x = 0.0;
        while x < arena.x {
            canvas.draw_line(Vec2::new(x + half, 0.0), Vec2::new(x + half, arena.y), palette::LIGHTGRAY);
            x += step;
        }
        let mut y = 0.0;
        while y < arena.y {
            canvas.draw_line(Vec2::new(0.0, y + half), Vec2::new(arena.x, y + half), palette::LIGHTGRAY);
            y += step;
        }
    }
}

impl Scene for PhysicsScene {
    fn window(&self) -> WindowSpec {
        let arena = self.state.settings.arena;
        WindowSpec {
            title: "Bounce Grid: Bouncing Balls on Grid".to_string(),
            width: arena.x as u32,
            height: arena.y as u32,
            target_fps: PHYSICS_FPS,
        }
    }

    fn update(&mut self, input: &dyn InputSource, dt: f32, now: f64) {
        let input = sample_tick_input(input);
        tick(&mut self.state, &input, dt, now);
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.clear(palette::RAYWHITE);
        self.draw_grid(canvas);
        for body in self.state.bodies() {
            canvas.draw_filled_circle(body.pos, body.radius(), body.color());
        }
    }
}

// ============================================================================
// FALLING SAND
// ============================================================================

/// Click-to-toggle falling sand grid
pub struct SandScene {
    pub grid: SandGrid,
    cell_size: f32,
}

impl SandScene {
    pub fn new(seed: u64) -> Self {
        Self {
            grid: SandGrid::with_starter(SAND_GRID_WIDTH, SAND_GRID_HEIGHT, seed),
            cell_size: SAND_CELL_SIZE,
        }
    }

    /// Grid cell under a scene-pixel position
    pub fn cell_at(&self, pos: Vec2) -> Option<(usize, usize)> {
        let cell = (pos / self.cell_size).floor();
        if cell.x < 0.0 || cell.y < 0.0 {
            return None;
        }
        let (x, y) = (cell.x as usize, cell.y as usize);
        (x < self.grid.width() && y < self.grid.height()).then_some((x, y))
    }
}

impl Scene for SandScene {
    fn window(&self) -> WindowSpec {
        WindowSpec {
            title: "Bounce Grid: Falling Squares".to_string(),
            width: SCREEN_WIDTH as u32,
            height: SCREEN_HEIGHT as u32,
            target_fps: SAND_FPS,
        }
    }

    fn update(&mut self, input: &dyn InputSource, _dt: f32, _now: f64) {
        if input.is_button_just_pressed(Button::Left) {
            let click = input.pointer_position();
            match self.cell_at(click) {
                Some((x, y)) => {
                    self.grid.toggle(x, y);
                    log::debug!("Toggled cell: ({}, {})", x, y);
                }
                None => log::debug!("Click outside grid: {:?}", click),
            }
        }
        self.grid.step();
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.clear(palette::RAYWHITE);
        let size = Vec2::splat(self.cell_size);
        for x in 0..self.grid.width() {
            for y in 0..self.grid.height() {
                let min = Vec2::new(x as f32, y as f32) * self.cell_size;
                if self.grid.get(x, y) {
                    canvas.draw_filled_rectangle(min, size, palette::PINK);
                }
                canvas.draw_rectangle_outline(min, size, palette::LIGHTGRAY);
            }
        }
    }
}
