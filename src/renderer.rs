//! Per-shape draw dispatch. Quads and convex polygons are decomposed into
//! triangle fans; the actual buffer allocation and rasterization live behind
//! the [`GraphicsBackend`] trait, so the core never touches a graphics API.

use crate::sketchpad::math::{CanvasRect, Float, Transform, P2};
use crate::sketchpad::scene::Scene;
use crate::sketchpad::shape::{Color, Shape};
use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GpuVertex {
    pub pos: [f32; 2],
}
unsafe impl Pod for GpuVertex {}
unsafe impl Zeroable for GpuVertex {}

impl GpuVertex {
    fn from_p2(p: &P2) -> Self {
        GpuVertex {
            pos: [p.x as f32, p.y as f32],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    PointList,
    LineList,
    TriangleList,
}

/// the renderer's whole contract with the graphics stack: given vertices,
/// color, transform and a primitive kind, make it appear on screen
pub trait GraphicsBackend {
    fn clear(&mut self, color: Color);
    fn upload_vertices(&mut self, vertices: &[GpuVertex]);
    fn draw(&mut self, primitive: Primitive, vertex_count: u32, color: Color, transform: &Transform);
}

/// fan from vertex 0: triangles (v0, vi, vi+1); only valid for convex input
/// with vertex 0 as the apex
pub fn fan_triangles(points: &[P2]) -> Vec<GpuVertex> {
    let mut out = Vec::with_capacity(points.len().saturating_sub(2) * 3);
    for i in 1..points.len().saturating_sub(1) {
        out.push(GpuVertex::from_p2(&points[0]));
        out.push(GpuVertex::from_p2(&points[i]));
        out.push(GpuVertex::from_p2(&points[i + 1]));
    }
    out
}

/// the four corners of a square, pixel half-extent converted to clip units
/// with the live canvas size
pub fn square_corners(center: &P2, size: Float, canvas: &CanvasRect) -> [P2; 4] {
    let dx = 2. * size / canvas.width;
    let dy = 2. * size / canvas.height;
    [
        P2::new(center.x - dx, center.y - dy),
        P2::new(center.x + dx, center.y - dy),
        P2::new(center.x + dx, center.y + dy),
        P2::new(center.x - dx, center.y + dy),
    ]
}

/// walk two opposite corners around into a convex quad
pub fn rectangle_corners(a: &P2, b: &P2) -> [P2; 4] {
    [
        P2::new(a.x, a.y),
        P2::new(b.x, a.y),
        P2::new(b.x, b.y),
        P2::new(a.x, b.y),
    ]
}

pub struct Renderer<B: GraphicsBackend> {
    backend: B,
    canvas_rect: CanvasRect,
    pub clear_color: Color,
}

impl<B: GraphicsBackend> Renderer<B> {
    pub fn new(backend: B, canvas_rect: CanvasRect) -> Self {
        log::info!(
            "renderer up, canvas {}x{}",
            canvas_rect.width,
            canvas_rect.height
        );
        Renderer {
            backend,
            canvas_rect,
            clear_color: [1., 1., 1., 1.],
        }
    }

    pub fn resize(&mut self, canvas_rect: CanvasRect) {
        log::info!(
            "canvas resized to {}x{}",
            canvas_rect.width,
            canvas_rect.height
        );
        self.canvas_rect = canvas_rect;
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    /// redraw everything in insertion order; there is no damage tracking,
    /// every frame starts from a clear
    pub fn draw_scene(&mut self, scene: &Scene) {
        self.backend.clear(self.clear_color);
        for shape in scene.iter() {
            self.draw_shape(shape);
        }
    }

    fn draw_shape(&mut self, shape: &Shape) {
        let color = shape.color();
        let transform = *shape.transform();
        match shape {
            Shape::Point { vertex, .. } => {
                let vertices = [GpuVertex::from_p2(vertex)];
                self.submit(Primitive::PointList, &vertices, color, &transform);
            }
            Shape::Line { endpoints, .. } => {
                let vertices = [
                    GpuVertex::from_p2(&endpoints[0]),
                    GpuVertex::from_p2(&endpoints[1]),
                ];
                self.submit(Primitive::LineList, &vertices, color, &transform);
            }
            Shape::Square { center, size, .. } => {
                let corners = square_corners(center, *size, &self.canvas_rect);
                let vertices = fan_triangles(&corners);
                self.submit(Primitive::TriangleList, &vertices, color, &transform);
            }
            Shape::Rectangle { corners, .. } => {
                let quad = rectangle_corners(&corners[0], &corners[1]);
                let vertices = fan_triangles(&quad);
                self.submit(Primitive::TriangleList, &vertices, color, &transform);
            }
            Shape::Polygon { points, .. } => {
                let vertices = fan_triangles(points);
                self.submit(Primitive::TriangleList, &vertices, color, &transform);
            }
        }
    }

    fn submit(
        &mut self,
        primitive: Primitive,
        vertices: &[GpuVertex],
        color: Color,
        transform: &Transform,
    ) {
        self.backend.upload_vertices(vertices);
        self.backend
            .draw(primitive, vertices.len() as u32, color, transform);
    }
}
