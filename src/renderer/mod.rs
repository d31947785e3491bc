//! Rendering module
//!
//! The controller draws through [`RenderSurface`]. [`VertexBatch`] turns those
//! calls into triangles that [`RenderState`] uploads to the GPU.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use vertex::Vertex;

use crate::consts::{BALL_SEGMENTS, STROKE_WIDTH};
use crate::sim::{Ball, CanvasBounds};
use vertex::colors;

/// Something a frame can be drawn on
pub trait RenderSurface {
    /// Start a new frame covering the canvas spanned by `bounds`
    fn clear(&mut self, bounds: &CanvasBounds);
    /// Draw one ball as a circle of its radius at its position
    fn draw_ball(&mut self, ball: &Ball);
}

/// Collects a frame's triangles in canvas coordinates
#[derive(Debug, Clone, Default)]
pub struct VertexBatch {
    vertices: Vec<Vertex>,
    bounds: Option<CanvasBounds>,
    balls: usize,
}

impl VertexBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Canvas area of the current frame, once cleared
    pub fn bounds(&self) -> Option<&CanvasBounds> {
        self.bounds.as_ref()
    }

    /// Balls drawn since the last clear
    pub fn ball_count(&self) -> usize {
        self.balls
    }
}

impl RenderSurface for VertexBatch {
    fn clear(&mut self, bounds: &CanvasBounds) {
        self.vertices.clear();
        self.balls = 0;
        self.bounds = Some(*bounds);
        self.vertices
            .extend(shapes::hard_edges(bounds, STROKE_WIDTH, colors::HARD_EDGE));
    }

    fn draw_ball(&mut self, ball: &Ball) {
        self.balls += 1;
        self.vertices.extend(shapes::ring(
            ball.pos.as_vec2(),
            ball.radius as f32,
            STROKE_WIDTH,
            colors::BALL,
            BALL_SEGMENTS,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    #[test]
    fn test_clear_resets_batch() {
        let bounds = CanvasBounds::default();
        let mut batch = VertexBatch::new();
        assert!(batch.bounds().is_none());

        batch.clear(&bounds);
        let edge_vertices = batch.vertices().len();
        assert_eq!(edge_vertices, 6);

        batch.draw_ball(&Ball::new(DVec2::new(50.0, 50.0), DVec2::ZERO, 3.0));
        batch.draw_ball(&Ball::new(DVec2::new(60.0, 50.0), DVec2::ZERO, 3.0));
        assert_eq!(batch.ball_count(), 2);
        assert_eq!(
            batch.vertices().len(),
            edge_vertices + 2 * (BALL_SEGMENTS as usize) * 6
        );

        batch.clear(&bounds);
        assert_eq!(batch.ball_count(), 0);
        assert_eq!(batch.vertices().len(), edge_vertices);
        assert_eq!(batch.bounds(), Some(&bounds));
    }
}
