#![deny(clippy::all)]
#![forbid(unsafe_code)]

//! Conway's Game of Life on a fixed-size, bounded grid.
//!
//! [`Grid`] and [`SelectionSet`] are plain values owned by the host; [`step`]
//! computes the next generation from a snapshot without touching its input.
//! [`Session`] bundles the two with the start/stop state for a host that
//! drives ticks from its own timer.

mod config;
mod engine;
mod error;
mod grid;
pub mod patterns;
mod random;
mod selection;
mod session;

pub use config::{LifeConfig, MIN_TICK_INTERVAL};
pub use engine::{Neighborhood, next_cell_state, step};
pub use error::OutOfBoundsError;
pub use grid::{Grid, Loc, reset};
pub use random::Random;
pub use selection::SelectionSet;
pub use session::{Session, SimulationState};
