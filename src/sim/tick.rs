//! Per-frame population update
//!
//! Moves every ball, resolves its edges, and drops the ones that fell off.

use glam::DVec2;

use super::ball::Body;
use super::bounds::CanvasBounds;
use crate::error::SimError;

/// Summary of one population update
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TickReport {
    /// Seconds simulated this tick
    pub elapsed: f64,
    /// Balls still alive after the tick
    pub survivors: usize,
    /// Balls that left through a soft edge
    pub removed: usize,
}

/// Advance every body by `elapsed` seconds and keep the ones still on the canvas
///
/// Survivors keep their relative order. The first error aborts the whole update
/// and nothing is returned, so callers keep their previous population.
pub fn update_positions<B: Body>(
    elapsed: f64,
    population: Vec<B>,
    gravity: DVec2,
    bounds: &CanvasBounds,
) -> Result<(Vec<B>, TickReport), SimError> {
    let total = population.len();
    let mut survivors = Vec::with_capacity(total);

    for body in population {
        if let Some(body) = body.advance(elapsed, gravity).enforce_bounds(bounds)?.alive() {
            survivors.push(body);
        }
    }

    let report = TickReport {
        elapsed,
        survivors: survivors.len(),
        removed: total - survivors.len(),
    };
    Ok((survivors, report))
}
