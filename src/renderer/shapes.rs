//! Shape tessellation for balls and canvas edges
//!
//! Everything is emitted as triangle lists in canvas coordinates.

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::Vertex;
use crate::sim::CanvasBounds;

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let segments = segments.max(3);
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let p1 = center + rim(radius, i, segments);
        let p2 = center + rim(radius, i + 1, segments);

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(p1.x, p1.y, color));
        vertices.push(Vertex::new(p2.x, p2.y, color));
    }

    vertices
}

/// Generate vertices for a stroked circle outline
///
/// The stroke is centered on `radius`. A stroke wider than the diameter
/// degenerates to a filled circle.
pub fn ring(center: Vec2, radius: f32, stroke: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let inner_radius = radius - stroke / 2.0;
    if inner_radius <= 0.0 {
        return circle(center, radius + stroke / 2.0, color, segments);
    }
    let outer_radius = radius + stroke / 2.0;
    let segments = segments.max(3);
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let inner1 = center + rim(inner_radius, i, segments);
        let outer1 = center + rim(outer_radius, i, segments);
        let inner2 = center + rim(inner_radius, i + 1, segments);
        let outer2 = center + rim(outer_radius, i + 1, segments);
        quad(&mut vertices, inner1, outer1, inner2, outer2, color);
    }

    vertices
}

/// Generate vertices for a thick line segment
pub fn line(from: Vec2, to: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (to - from).normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);

    let mut vertices = Vec::with_capacity(6);
    quad(&mut vertices, from + perp, from - perp, to + perp, to - perp, color);
    vertices
}

/// Generate lines along the hard edges; soft edges are left open
pub fn hard_edges(bounds: &CanvasBounds, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let top_left = Vec2::new(bounds.left.dim as f32, bounds.top.dim as f32);
    let top_right = Vec2::new(bounds.right.dim as f32, bounds.top.dim as f32);
    let bottom_right = Vec2::new(bounds.right.dim as f32, bounds.bottom.dim as f32);
    let bottom_left = Vec2::new(bounds.left.dim as f32, bounds.bottom.dim as f32);

    let edges = [
        (bounds.top.is_hard, top_left, top_right),
        (bounds.right.is_hard, top_right, bottom_right),
        (bounds.bottom.is_hard, bottom_right, bottom_left),
        (bounds.left.is_hard, bottom_left, top_left),
    ];

    edges
        .into_iter()
        .filter(|(is_hard, _, _)| *is_hard)
        .flat_map(|(_, from, to)| line(from, to, width, color))
        .collect()
}

/// Point `i` of `segments` around a circle of `radius` centered at the origin
fn rim(radius: f32, i: u32, segments: u32) -> Vec2 {
    let theta = (i as f32 / segments as f32) * TAU;
    Vec2::new(radius * theta.cos(), radius * theta.sin())
}

/// Two triangles covering a quad given as (a1, b1) -> (a2, b2)
fn quad(vertices: &mut Vec<Vertex>, a1: Vec2, b1: Vec2, a2: Vec2, b2: Vec2, color: [f32; 4]) {
    vertices.push(Vertex::new(a1.x, a1.y, color));
    vertices.push(Vertex::new(b1.x, b1.y, color));
    vertices.push(Vertex::new(a2.x, a2.y, color));

    vertices.push(Vertex::new(a2.x, a2.y, color));
    vertices.push(Vertex::new(b1.x, b1.y, color));
    vertices.push(Vertex::new(b2.x, b2.y, color));
}
