//! Simulation module
//!
//! All physics lives here. This module must stay headless:
//! - No rendering or platform dependencies
//! - Stable iteration order (by body index)
//! - Time comes in as arguments, never from a global clock

pub mod collision;
pub mod drag;
pub mod integrate;
pub mod sand;
pub mod state;
pub mod tick;

pub use collision::{WallContact, resolve_walls};
pub use drag::{Pointer, grab, release, update_drag};
pub use integrate::{Thrust, integrate};
pub use sand::SandGrid;
pub use state::{Body, DragState, SimState};
pub use tick::{TickInput, tick};
