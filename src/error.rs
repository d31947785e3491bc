//! Error types for the simulation core
//!
//! Two failure classes exist and both are fatal:
//! - configuration errors stop the simulation from starting
//! - inconsistent entity state aborts the tick that found it
//!
//! Removal of a ball is not an error; see [`crate::sim::Step`].

use std::fmt;

use thiserror::Error;

/// Which axis a boundary pair belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal (left/right edges)
    X,
    /// Vertical (top/bottom edges)
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

/// Which edge of a boundary pair was crossed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// Lower coordinate (top or left)
    Min,
    /// Upper coordinate (bottom or right)
    Max,
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edge::Min => write!(f, "min"),
            Edge::Max => write!(f, "max"),
        }
    }
}

/// Errors raised by the simulation core
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// A configuration value is unusable
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// A boundary pair whose minimum is not below its maximum
    #[error("invalid configuration: {axis} bounds min {min} must be less than max {max}")]
    InvalidBounds { axis: Axis, min: f64, max: f64 },

    /// A ball outside an edge while moving away from it
    #[error("inconsistent state: {axis} position {pos} is past the {edge} edge with velocity {vel}")]
    InconsistentState {
        axis: Axis,
        edge: Edge,
        pos: f64,
        vel: f64,
    },
}

impl SimError {
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        SimError::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    /// True for construction-time errors, false for per-tick state errors
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            SimError::InvalidConfiguration { .. } | SimError::InvalidBounds { .. }
        )
    }
}
