//! Canvas edges and the per-axis boundary resolver
//!
//! Each axis is resolved independently against its pair of edges. A hard edge
//! mirrors the overshoot back inside and flips the velocity; a soft edge removes
//! the ball. Only the ball's center is tested, the radius is not subtracted.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::{Axis, Edge, SimError};

/// One edge of the canvas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Boundary {
    /// Coordinate of the edge on its axis
    pub dim: f64,
    /// Hard edges bounce, soft edges let the ball fall off
    pub is_hard: bool,
}

impl Boundary {
    pub const fn hard(dim: f64) -> Self {
        Self { dim, is_hard: true }
    }

    pub const fn soft(dim: f64) -> Self {
        Self {
            dim,
            is_hard: false,
        }
    }
}

/// The four edges of the canvas
///
/// Top/left hold the lower coordinate, bottom/right the upper.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasBounds {
    pub top: Boundary,
    pub right: Boundary,
    pub bottom: Boundary,
    pub left: Boundary,
}

impl Default for CanvasBounds {
    fn default() -> Self {
        Self {
            top: Boundary::soft(0.0),
            right: Boundary::soft(300.0),
            bottom: Boundary::hard(300.0),
            left: Boundary::soft(0.0),
        }
    }
}

impl CanvasBounds {
    /// Build bounds, rejecting an empty or inverted axis
    pub fn new(
        top: Boundary,
        right: Boundary,
        bottom: Boundary,
        left: Boundary,
    ) -> Result<Self, SimError> {
        let bounds = Self {
            top,
            right,
            bottom,
            left,
        };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Check that each axis has min < max and finite coordinates
    pub fn validate(&self) -> Result<(), SimError> {
        check_pair(Axis::X, &self.left, &self.right)?;
        check_pair(Axis::Y, &self.top, &self.bottom)
    }

    /// Edge pair for an axis, ordered (min, max)
    pub fn axis(&self, axis: Axis) -> (Boundary, Boundary) {
        match axis {
            Axis::X => (self.left, self.right),
            Axis::Y => (self.top, self.bottom),
        }
    }

    pub fn width(&self) -> f64 {
        self.right.dim - self.left.dim
    }

    pub fn height(&self) -> f64 {
        self.bottom.dim - self.top.dim
    }

    /// Top-left corner of the canvas
    pub fn origin(&self) -> DVec2 {
        DVec2::new(self.left.dim, self.top.dim)
    }

    /// Whether a point lies inside or on the edges
    pub fn contains(&self, p: DVec2) -> bool {
        p.x >= self.left.dim && p.x <= self.right.dim && p.y >= self.top.dim && p.y <= self.bottom.dim
    }
}

fn check_pair(axis: Axis, min: &Boundary, max: &Boundary) -> Result<(), SimError> {
    // NaN fails this comparison too
    if min.dim < max.dim && min.dim.is_finite() && max.dim.is_finite() {
        Ok(())
    } else {
        Err(SimError::InvalidBounds {
            axis,
            min: min.dim,
            max: max.dim,
        })
    }
}

/// Position and velocity along a single axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PosVelocity1D {
    pub pos: f64,
    pub vel: f64,
}

impl PosVelocity1D {
    pub const fn new(pos: f64, vel: f64) -> Self {
        Self { pos, vel }
    }
}

/// Outcome of advancing something one step: it is still alive, or it left
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step<T> {
    Alive(T),
    Removed,
}

impl<T> Step<T> {
    /// The surviving value, if any
    pub fn alive(self) -> Option<T> {
        match self {
            Step::Alive(value) => Some(value),
            Step::Removed => None,
        }
    }
}

/// Resolve one axis against its edges
///
/// Repeats until the position is inside `[min.dim, max.dim]`: a fast ball can
/// bounce off both edges in a single step, and after a long stall it may have
/// crossed the canvas many times. Errors if the pair is inverted, or if
/// the ball is past an edge while moving back toward the canvas.
pub fn enforce_bounds_1d(
    axis: Axis,
    min: &Boundary,
    max: &Boundary,
    mut state: PosVelocity1D,
) -> Result<Step<PosVelocity1D>, SimError> {
    check_pair(axis, min, max)?;

    // A non-finite position never converges
    if !state.pos.is_finite() {
        let edge = if state.pos > 0.0 { Edge::Max } else { Edge::Min };
        return Err(inconsistent(axis, edge, state));
    }

    // Between two hard edges the motion repeats every two widths. Dropping whole
    // periods first keeps the loop below to a few passes however far the ball got.
    if min.is_hard && max.is_hard {
        let period = 2.0 * (max.dim - min.dim);
        if state.pos < min.dim && state.vel < 0.0 {
            state.pos = min.dim - (min.dim - state.pos).rem_euclid(period);
        } else if state.pos > max.dim && state.vel > 0.0 {
            state.pos = max.dim + (state.pos - max.dim).rem_euclid(period);
        }
    }

    while state.pos < min.dim || state.pos > max.dim {
        if state.pos < min.dim {
            if state.vel >= 0.0 {
                return Err(inconsistent(axis, Edge::Min, state));
            }
            if !min.is_hard {
                return Ok(Step::Removed);
            }
            let overshoot = min.dim - state.pos;
            state.pos = min.dim + overshoot;
            state.vel = -state.vel;
        }

        if state.pos > max.dim {
            if state.vel <= 0.0 {
                return Err(inconsistent(axis, Edge::Max, state));
            }
            if !max.is_hard {
                return Ok(Step::Removed);
            }
            let overshoot = state.pos - max.dim;
            state.pos = max.dim - overshoot;
            state.vel = -state.vel;
        }
    }

    Ok(Step::Alive(state))
}

fn inconsistent(axis: Axis, edge: Edge, state: PosVelocity1D) -> SimError {
    SimError::InconsistentState {
        axis,
        edge,
        pos: state.pos,
        vel: state.vel,
    }
}
