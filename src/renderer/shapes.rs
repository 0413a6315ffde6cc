//! Shape generation for 2D primitives
//!
//! Everything is emitted as triangle lists in scene pixels; the render
//! state maps them to clip space.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;
use crate::color::Color;
use crate::display::DrawCommand;

pub use crate::consts::STROKE_WIDTH;

/// Segment count that keeps a circle's edge smooth at its size
pub fn circle_segments(radius: f32) -> u32 {
    ((radius * 1.5) as u32).clamp(12, 96)
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a line as a thin quad
pub fn line(from: Vec2, to: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (to - from).normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }
    // Perpendicular for width
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);

    let a1 = from + perp;
    let b1 = from - perp;
    let a2 = to + perp;
    let b2 = to - perp;

    vec![
        Vertex::new(a1.x, a1.y, color),
        Vertex::new(b1.x, b1.y, color),
        Vertex::new(a2.x, a2.y, color),
        Vertex::new(a2.x, a2.y, color),
        Vertex::new(b1.x, b1.y, color),
        Vertex::new(b2.x, b2.y, color),
    ]
}

/// Generate vertices for an axis-aligned filled rectangle
pub fn rect(min: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let max = min + size;
    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Generate vertices for a rectangle border drawn just inside its bounds
pub fn rect_outline(min: Vec2, size: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let w = width.min(size.x / 2.0).min(size.y / 2.0);
    let mut vertices = Vec::with_capacity(24);
    // Top and bottom span the full width, sides fill the gap between them
    vertices.extend(rect(min, Vec2::new(size.x, w), color));
    vertices.extend(rect(Vec2::new(min.x, min.y + size.y - w), Vec2::new(size.x, w), color));
    vertices.extend(rect(Vec2::new(min.x, min.y + w), Vec2::new(w, size.y - 2.0 * w), color));
    vertices.extend(rect(
        Vec2::new(min.x + size.x - w, min.y + w),
        Vec2::new(w, size.y - 2.0 * w),
        color,
    ));
    vertices
}

/// Tessellate a recorded frame, converting colors with `to_rgba`
pub fn tessellate(commands: &[DrawCommand], to_rgba: impl Fn(Color) -> [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    for command in commands {
        match *command {
            DrawCommand::Line { from, to, color } => {
                vertices.extend(line(from, to, STROKE_WIDTH, to_rgba(color)));
            }
            DrawCommand::FilledCircle {
                center,
                radius,
                color,
            } => {
                vertices.extend(circle(center, radius, to_rgba(color), circle_segments(radius)));
            }
            DrawCommand::RectangleOutline { min, size, color } => {
                vertices.extend(rect_outline(min, size, STROKE_WIDTH, to_rgba(color)));
            }
            DrawCommand::FilledRectangle { min, size, color } => {
                vertices.extend(rect(min, size, to_rgba(color)));
            }
        }
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::palette;

    const WHITE: [f32; 4] = [1.0; 4];

    fn bounds(vertices: &[Vertex]) -> (Vec2, Vec2) {
        vertices.iter().fold(
            (Vec2::splat(f32::MAX), Vec2::splat(f32::MIN)),
            |(lo, hi), v| {
                let p = Vec2::from(v.position);
                (lo.min(p), hi.max(p))
            },
        )
    }

    #[test]
    fn test_circle_stays_within_radius() {
        let center = Vec2::new(100.0, 50.0);
        let vertices = circle(center, 20.0, WHITE, 16);
        assert_eq!(vertices.len(), 48);
        for v in &vertices {
            assert!(Vec2::from(v.position).distance(center) <= 20.0 + 1e-4);
        }
    }

    #[test]
    fn test_line_has_requested_width() {
        let vertices = line(Vec2::new(0.0, 0.0), Vec2::new(0.0, 10.0), 2.0, WHITE);
        assert_eq!(vertices.len(), 6);
        let (lo, hi) = bounds(&vertices);
        assert!((hi.x - lo.x - 2.0).abs() < 1e-5);
        assert!((hi.y - lo.y - 10.0).abs() < 1e-5);
    }

    #[test]
    fn test_degenerate_line_is_empty() {
        assert!(line(Vec2::ONE, Vec2::ONE, 1.0, WHITE).is_empty());
    }

    #[test]
    fn test_outline_inside_bounds() {
        let vertices = rect_outline(Vec2::new(30.0, 60.0), Vec2::new(30.0, 30.0), 1.0, WHITE);
        assert_eq!(vertices.len(), 24);
        let (lo, hi) = bounds(&vertices);
        assert_eq!(lo, Vec2::new(30.0, 60.0));
        assert_eq!(hi, Vec2::new(60.0, 90.0));
    }

    #[test]
    fn test_tessellate_counts() {
        let commands = [
            DrawCommand::Line {
                from: Vec2::ZERO,
                to: Vec2::X,
                color: palette::LIGHTGRAY,
            },
            DrawCommand::FilledRectangle {
                min: Vec2::ZERO,
                size: Vec2::ONE,
                color: palette::PINK,
            },
            DrawCommand::FilledCircle {
                center: Vec2::ZERO,
                radius: 20.0,
                color: palette::BLUE,
            },
        ];
        let vertices = tessellate(&commands, Color::to_f32);
        assert_eq!(vertices.len(), 6 + 6 + 30 * 3);
        assert_eq!(vertices[6].color, palette::PINK.to_f32());
    }
}
