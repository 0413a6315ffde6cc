//! Pointer dragging of bodies
//!
//! A press inside a body grabs it, the body then tracks the pointer exactly
//! while the button is held, and the release throws it with the average
//! velocity of the whole gesture.

use glam::Vec2;

use super::state::{Body, DragState, SimState};

/// Primary pointer button sampled for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pointer {
    pub pos: Vec2,
    /// Button went down since the previous tick
    pub just_pressed: bool,
    /// Button is currently held
    pub down: bool,
    /// Button went up since the previous tick
    pub just_released: bool,
}

/// Start dragging `body` from `pointer`
pub fn grab(body: &mut Body, pointer: Vec2, now: f64) {
    body.vel = Vec2::ZERO;
    body.drag = DragState::Dragging {
        anchor: pointer,
        started_at: now,
    };
}

/// Pin a dragged body to the pointer
pub fn follow(body: &mut Body, pointer: Vec2) {
    if body.is_dragging() {
        body.vel = Vec2::ZERO;
        body.pos = pointer;
    }
}

/// Let go of a dragged body, giving it the gesture's average velocity
///
/// Velocity is `(pointer - anchor) / elapsed`. With no elapsed time the
/// velocity stays at the zero set by [`grab`].
pub fn release(body: &mut Body, pointer: Vec2, now: f64) {
    let DragState::Dragging { anchor, started_at } = body.drag else {
        return;
    };

    body.pos = pointer;
    let elapsed = now - started_at;
    if elapsed > 0.0 {
        body.vel = (pointer - anchor) / elapsed as f32;
    }
    body.drag = DragState::Free;
}

/// Apply one tick of pointer input to every body
///
/// A release followed by a new press within one tick ends the old gesture
/// before the press is considered. A press followed by a release (a tap)
/// grabs and lets go in the same tick.
pub fn update_drag(state: &mut SimState, pointer: &Pointer, now: f64) {
    let repressed = pointer.just_released && pointer.just_pressed && pointer.down;
    if repressed {
        release_selected(state, pointer.pos, now);
    }

    if pointer.just_pressed && state.selected.is_none() {
        if let Some(index) = state.body_at(pointer.pos) {
            grab(&mut state.bodies_mut()[index], pointer.pos, now);
            state.selected = Some(index);
            log::debug!("Grabbed body {} at {:?}", index, pointer.pos);
        }
    }

    if pointer.down {
        for body in state.bodies_mut().iter_mut() {
            follow(body, pointer.pos);
        }
    }

    if pointer.just_released && !repressed {
        release_selected(state, pointer.pos, now);
    }
}

fn release_selected(state: &mut SimState, pointer: Vec2, now: f64) {
    for (index, body) in state.bodies_mut().iter_mut().enumerate() {
        if body.is_dragging() {
            release(body, pointer, now);
            log::debug!("Released body {} with velocity {:?}", index, body.vel);
        }
    }
    state.selected = None;
}
