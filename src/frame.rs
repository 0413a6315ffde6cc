//! Frame driver
//!
//! One frame = read the clock, update the scene from input, record the draw
//! calls. Presenting the recorded frame is the platform's job.

use std::time::Instant;

use crate::consts::MAX_FRAME_DT;
use crate::display::{DrawList, FrameClock};
use crate::input::InputSource;
use crate::scene::Scene;

/// Wall-clock frame timer
#[derive(Debug, Clone)]
pub struct Stopwatch {
    start: Instant,
    last: Instant,
    delta: f32,
}

impl Stopwatch {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last: now,
            delta: 0.0,
        }
    }

    /// Close the current frame interval and start the next one
    pub fn lap(&mut self) {
        let now = Instant::now();
        self.delta = now.duration_since(self.last).as_secs_f32();
        self.last = now;
    }

    /// Forget time spent suspended so the next delta starts fresh
    pub fn reset_lap(&mut self) {
        self.last = Instant::now();
        self.delta = 0.0;
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for Stopwatch {
    fn frame_delta_seconds(&self) -> f32 {
        self.delta
    }

    fn now(&self) -> f64 {
        self.last.duration_since(self.start).as_secs_f64()
    }
}

/// Run one tick of `scene` and record its frame into `canvas`
///
/// Frame deltas are clamped to `[0, MAX_FRAME_DT]` so a stalled frame
/// cannot fling bodies through a wall.
pub fn run_frame(
    scene: &mut dyn Scene,
    input: &dyn InputSource,
    clock: &dyn FrameClock,
    canvas: &mut DrawList,
) {
    let dt = clock.frame_delta_seconds().clamp(0.0, MAX_FRAME_DT);
    scene.update(input, dt, clock.now());

    canvas.begin_frame();
    scene.draw(canvas);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::DrawCommand;
    use crate::input::{Button, InputState};
    use crate::scene::PhysicsScene;
    use crate::settings::PhysicsSettings;
    use glam::Vec2;

    struct FixedClock {
        dt: f32,
        now: f64,
    }

    impl FrameClock for FixedClock {
        fn frame_delta_seconds(&self) -> f32 {
            self.dt
        }

        fn now(&self) -> f64 {
            self.now
        }
    }

    fn drive(scene: &mut PhysicsScene, input: &mut InputState, clock: &FixedClock, list: &mut DrawList) {
        run_frame(scene, &*input, clock, list);
        list.end_frame();
        input.end_tick();
    }

    #[test]
    fn test_frame_updates_then_draws() {
        let mut scene = PhysicsScene::new(PhysicsSettings::default());
        let mut input = InputState::new();
        let mut list = DrawList::new();
        let clock = FixedClock {
            dt: 1.0 / 60.0,
            now: 0.0,
        };

        drive(&mut scene, &mut input, &clock, &mut list);

        let first = scene.state.bodies()[0].clone();
        assert!(first.pos.y > 300.0);
        let last = list.commands().last().copied();
        assert_eq!(
            last,
            Some(DrawCommand::FilledCircle {
                center: scene.state.bodies()[9].pos,
                radius: 20.0,
                color: scene.state.bodies()[9].color(),
            })
        );
        assert_eq!(list.frames(), 1);
    }

    #[test]
    fn test_large_delta_is_clamped() {
        let mut clamped = PhysicsScene::new(PhysicsSettings::default());
        let mut reference = PhysicsScene::new(PhysicsSettings::default());
        let mut input = InputState::new();
        let mut list = DrawList::new();

        drive(&mut clamped, &mut input, &FixedClock { dt: 5.0, now: 0.0 }, &mut list);
        drive(&mut reference, &mut input, &FixedClock { dt: MAX_FRAME_DT, now: 0.0 }, &mut list);

        assert_eq!(clamped.state.bodies(), reference.state.bodies());
    }

    #[test]
    fn test_drag_gesture_over_frames() {
        let mut scene = PhysicsScene::new(PhysicsSettings::default());
        let mut input = InputState::new();
        let mut list = DrawList::new();
        let dt = 1.0 / 60.0;

        // Grab body 2 at its center
        input.move_pointer(Vec2::new(400.0, 300.0));
        input.press_button(Button::Left);
        drive(&mut scene, &mut input, &FixedClock { dt, now: 1.0 }, &mut list);
        assert_eq!(scene.state.selected, Some(2));

        // Hold and move for half a second
        input.move_pointer(Vec2::new(450.0, 250.0));
        drive(&mut scene, &mut input, &FixedClock { dt, now: 1.25 }, &mut list);
        assert_eq!(scene.state.bodies()[2].pos, Vec2::new(450.0, 250.0));

        input.move_pointer(Vec2::new(500.0, 200.0));
        input.release_button(Button::Left);
        drive(&mut scene, &mut input, &FixedClock { dt: 0.0, now: 1.5 }, &mut list);

        let body = &scene.state.bodies()[2];
        assert!(!body.is_dragging());
        assert_eq!(body.pos, Vec2::new(500.0, 200.0));
        assert!((body.vel - Vec2::new(200.0, -200.0) * 0.99).length() < 1e-2);
    }

    #[test]
    fn test_stopwatch_is_monotonic() {
        let mut watch = Stopwatch::new();
        let t0 = watch.now();
        watch.lap();
        assert!(watch.now() >= t0);
        assert!(watch.frame_delta_seconds() >= 0.0);
        watch.reset_lap();
        assert_eq!(watch.frame_delta_seconds(), 0.0);
    }
}
