//! Simulation module
//!
//! All motion and boundary logic lives here. This module must stay pure:
//! - Elapsed time is passed in, never read from a clock
//! - Spawn randomness comes from a seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod ball;
pub mod bounds;
pub mod kinematics;
pub mod tick;

pub use ball::{Ball, BallSpawner, Body};
pub use bounds::{Boundary, CanvasBounds, PosVelocity1D, Step, enforce_bounds_1d};
pub use kinematics::{calc_pos, calc_velocity};
pub use tick::{TickReport, update_positions};
