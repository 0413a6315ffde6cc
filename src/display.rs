//! Display surface seam
//!
//! Scenes draw through [`Canvas`] and read time through [`FrameClock`].
//! [`DrawList`] records the calls so a frame can be tessellated by the
//! renderer, or inspected in tests with no window at all.

use glam::Vec2;

use crate::color::Color;

/// One recorded draw call, in scene pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Line {
        from: Vec2,
        to: Vec2,
        color: Color,
    },
    FilledCircle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    RectangleOutline {
        min: Vec2,
        size: Vec2,
        color: Color,
    },
    FilledRectangle {
        min: Vec2,
        size: Vec2,
        color: Color,
    },
}

/// 2-D drawing primitives
pub trait Canvas {
    fn clear(&mut self, color: Color);
    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color);
    fn draw_filled_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn draw_rectangle_outline(&mut self, min: Vec2, size: Vec2, color: Color);
    fn draw_filled_rectangle(&mut self, min: Vec2, size: Vec2, color: Color);
}

/// Frame timing
pub trait FrameClock {
    /// Duration of the previous frame in seconds
    fn frame_delta_seconds(&self) -> f32;
    /// Monotonic clock reading in seconds
    fn now(&self) -> f64;
}

/// Recorded frame: a clear color plus draw commands in call order
#[derive(Debug, Clone)]
pub struct DrawList {
    clear_color: Color,
    commands: Vec<DrawCommand>,
    frames: u64,
}

impl Default for DrawList {
    fn default() -> Self {
        Self {
            clear_color: crate::color::palette::RAYWHITE,
            commands: Vec::new(),
            frames: 0,
        }
    }
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the previous frame's commands
    pub fn begin_frame(&mut self) {
        self.commands.clear();
    }

    /// Close the frame and hand back its commands
    pub fn end_frame(&mut self) -> &[DrawCommand] {
        self.frames += 1;
        &self.commands
    }

    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Frames completed so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Canvas for DrawList {
    /// Clearing also discards anything drawn earlier in the frame
    fn clear(&mut self, color: Color) {
        self.clear_color = color;
        self.commands.clear();
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color) {
        self.commands.push(DrawCommand::Line { from, to, color });
    }

    fn draw_filled_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::FilledCircle {
            center,
            radius,
            color,
        });
    }

    fn draw_rectangle_outline(&mut self, min: Vec2, size: Vec2, color: Color) {
        self.commands
            .push(DrawCommand::RectangleOutline { min, size, color });
    }

    fn draw_filled_rectangle(&mut self, min: Vec2, size: Vec2, color: Color) {
        self.commands
            .push(DrawCommand::FilledRectangle { min, size, color });
    }
}
