//! Ball entity and spawning
//!
//! A ball is a plain value: `advance` and `enforce_bounds` consume it and hand
//! back the updated ball, or `Step::Removed` once it falls off a soft edge.

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::bounds::{CanvasBounds, PosVelocity1D, Step, enforce_bounds_1d};
use super::kinematics::{calc_pos, calc_velocity};
use crate::error::{Axis, SimError};

/// A ball entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: DVec2,
    pub vel: DVec2,
    /// Fixed at spawn from settings; only used for drawing
    pub radius: f64,
}

impl Ball {
    pub fn new(pos: DVec2, vel: DVec2, radius: f64) -> Self {
        Self { pos, vel, radius }
    }

    /// Integrate both axes over `elapsed` seconds under constant acceleration
    ///
    /// Does not look at the canvas; call [`Ball::enforce_bounds`] afterwards.
    pub fn advance(self, elapsed: f64, acceleration: DVec2) -> Self {
        let pos = DVec2::new(
            calc_pos(self.pos.x, self.vel.x, acceleration.x, elapsed),
            calc_pos(self.pos.y, self.vel.y, acceleration.y, elapsed),
        );
        let vel = DVec2::new(
            calc_velocity(self.vel.x, acceleration.x, elapsed),
            calc_velocity(self.vel.y, acceleration.y, elapsed),
        );
        Self { pos, vel, ..self }
    }

    /// Bounce off hard edges, or report removal if either axis crossed a soft one
    pub fn enforce_bounds(self, bounds: &CanvasBounds) -> Result<Step<Self>, SimError> {
        let (left, right) = bounds.axis(Axis::X);
        let x = enforce_bounds_1d(Axis::X, &left, &right, PosVelocity1D::new(self.pos.x, self.vel.x))?;
        let (top, bottom) = bounds.axis(Axis::Y);
        let y = enforce_bounds_1d(Axis::Y, &top, &bottom, PosVelocity1D::new(self.pos.y, self.vel.y))?;

        match (x, y) {
            (Step::Alive(x), Step::Alive(y)) => Ok(Step::Alive(Self {
                pos: DVec2::new(x.pos, y.pos),
                vel: DVec2::new(x.vel, y.vel),
                ..self
            })),
            _ => Ok(Step::Removed),
        }
    }
}

/// Something the population update can move and bounds-check
///
/// [`Ball`] is the only production implementation.
pub trait Body: Sized {
    fn advance(self, elapsed: f64, acceleration: DVec2) -> Self;
    fn enforce_bounds(self, bounds: &CanvasBounds) -> Result<Step<Self>, SimError>;
}

impl Body for Ball {
    fn advance(self, elapsed: f64, acceleration: DVec2) -> Self {
        Ball::advance(self, elapsed, acceleration)
    }

    fn enforce_bounds(self, bounds: &CanvasBounds) -> Result<Step<Self>, SimError> {
        Ball::enforce_bounds(self, bounds)
    }
}

/// Creates balls at a point with a random velocity
#[derive(Debug, Clone)]
pub struct BallSpawner {
    rng: Pcg32,
    radius: f64,
    max_velocity: f64,
}

impl BallSpawner {
    /// `max_velocity` bounds each velocity component to `[-max, max]`
    pub fn new(seed: u64, radius: f64, max_velocity: f64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            radius,
            max_velocity,
        }
    }

    pub fn create_at(&mut self, x: f64, y: f64) -> Ball {
        let vel = DVec2::new(self.random_component(), self.random_component());
        Ball::new(DVec2::new(x, y), vel, self.radius)
    }

    fn random_component(&mut self) -> f64 {
        let max = self.max_velocity.abs();
        self.rng.random_range(-max..=max)
    }
}
