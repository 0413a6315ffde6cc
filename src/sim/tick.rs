//! Variable timestep simulation tick
//!
//! Drag first, then physics, both in body index order.

use super::drag::{Pointer, update_drag};
use super::integrate::{Thrust, integrate};
use super::state::SimState;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Primary pointer button and position
    pub pointer: Pointer,
    /// Arrow keys held
    pub thrust: Thrust,
}

/// Advance the simulation by `dt` seconds; `now` is the clock reading in seconds
pub fn tick(state: &mut SimState, input: &TickInput, dt: f32, now: f64) {
    update_drag(state, &input.pointer, now);

    let (settings, bodies) = state.parts_mut();
    let mut contacts = 0;
    for body in bodies.iter_mut() {
        if integrate(body, input.thrust, settings, dt).any() {
            contacts += 1;
        }
    }
    log::trace!("tick dt={:.4} wall contacts={}", dt, contacts);
}
