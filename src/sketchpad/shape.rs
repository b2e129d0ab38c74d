use super::math::{Float, Transform, IDENTITY, P2};
use serde::{Deserialize, Serialize};

pub type Color = [f32; 4];

/// the color a fresh surface starts drawing with
pub const DEFAULT_COLOR: Color = [1.0, 0.0, 0.0, 1.0];

/// parse "#rgb" or "#rrggbb" into a Color with alpha 1.0
pub fn color_from_hex(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    let mut chunks = [0.0f32; 3];
    match hex.len() {
        3 => {
            for (i, c) in hex.chars().enumerate() {
                let v = c.to_digit(16)? as u8;
                chunks[i] = (v * 16 + v) as f32 / 255.;
            }
        }
        6 => {
            for (i, chunk) in chunks.iter_mut().enumerate() {
                *chunk = u8::from_str_radix(&hex[2 * i..2 * i + 2], 16).ok()? as f32 / 255.;
            }
        }
        _ => return None,
    }
    Some([chunks[0], chunks[1], chunks[2], 1.0])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Point,
    Line,
    Square,
    Rectangle,
    Polygon,
}

/// one persisted drawable entity; the variant fixes the vertex arity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Point {
        vertex: P2,
        color: Color,
        transform: Transform,
    },
    Line {
        endpoints: [P2; 2],
        color: Color,
        transform: Transform,
    },
    /// `size` is the half-extent in device pixels, converted to clip units at
    /// draw and hit time from the live canvas rect
    Square {
        center: P2,
        size: Float,
        color: Color,
        transform: Transform,
    },
    Rectangle {
        corners: [P2; 2],
        color: Color,
        transform: Transform,
    },
    /// insertion order is winding order, the last point closes to the first
    Polygon {
        points: Vec<P2>,
        color: Color,
        transform: Transform,
    },
}

impl Shape {
    pub fn point(vertex: P2, color: Color) -> Self {
        Shape::Point {
            vertex,
            color,
            transform: IDENTITY,
        }
    }

    pub fn line(a: P2, b: P2, color: Color) -> Self {
        Shape::Line {
            endpoints: [a, b],
            color,
            transform: IDENTITY,
        }
    }

    pub fn square(center: P2, size: Float, color: Color) -> Self {
        Shape::Square {
            center,
            size,
            color,
            transform: IDENTITY,
        }
    }

    pub fn rectangle(a: P2, b: P2, color: Color) -> Self {
        Shape::Rectangle {
            corners: [a, b],
            color,
            transform: IDENTITY,
        }
    }

    pub fn polygon(points: Vec<P2>, color: Color) -> Self {
        assert!(points.len() >= 3, "a polygon needs at least 3 points");
        Shape::Polygon {
            points,
            color,
            transform: IDENTITY,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Point { .. } => ShapeKind::Point,
            Shape::Line { .. } => ShapeKind::Line,
            Shape::Square { .. } => ShapeKind::Square,
            Shape::Rectangle { .. } => ShapeKind::Rectangle,
            Shape::Polygon { .. } => ShapeKind::Polygon,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Shape::Point { color, .. }
            | Shape::Line { color, .. }
            | Shape::Square { color, .. }
            | Shape::Rectangle { color, .. }
            | Shape::Polygon { color, .. } => *color,
        }
    }

    pub fn set_color(&mut self, new_color: Color) {
        match self {
            Shape::Point { color, .. }
            | Shape::Line { color, .. }
            | Shape::Square { color, .. }
            | Shape::Rectangle { color, .. }
            | Shape::Polygon { color, .. } => *color = new_color,
        }
    }

    pub fn transform(&self) -> &Transform {
        match self {
            Shape::Point { transform, .. }
            | Shape::Line { transform, .. }
            | Shape::Square { transform, .. }
            | Shape::Rectangle { transform, .. }
            | Shape::Polygon { transform, .. } => transform,
        }
    }

    /// replace the transform wholesale; composing is the caller's job
    pub fn set_transform(&mut self, new_transform: Transform) {
        match self {
            Shape::Point { transform, .. }
            | Shape::Line { transform, .. }
            | Shape::Square { transform, .. }
            | Shape::Rectangle { transform, .. }
            | Shape::Polygon { transform, .. } => *transform = new_transform,
        }
    }

    pub fn vertices(&self) -> &[P2] {
        match self {
            Shape::Point { vertex, .. } => std::slice::from_ref(vertex),
            Shape::Line { endpoints, .. } => endpoints,
            Shape::Square { .. } => &[],
            Shape::Rectangle { corners, .. } => corners,
            Shape::Polygon { points, .. } => points,
        }
    }

    /// replace one endpoint or polygon point, the mutation a vertex drag applies
    pub fn set_vertex(&mut self, ix: usize, p: P2) {
        match self {
            Shape::Line { endpoints, .. } => {
                if let Some(v) = endpoints.get_mut(ix) {
                    *v = p;
                }
            }
            Shape::Polygon { points, .. } => {
                if let Some(v) = points.get_mut(ix) {
                    *v = p;
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_start_with_identity_transform() {
        let line = Shape::line(P2::new(-0.5, 0.), P2::new(0.5, 0.), DEFAULT_COLOR);
        assert_eq!(*line.transform(), IDENTITY);
        assert_eq!(line.kind(), ShapeKind::Line);
        assert_eq!(line.color(), DEFAULT_COLOR);
    }

    #[test]
    fn set_vertex_moves_line_and_polygon_points() {
        let mut line = Shape::line(P2::new(0., 0.), P2::new(1., 0.), DEFAULT_COLOR);
        line.set_vertex(1, P2::new(0.5, 0.5));
        assert_eq!(line.vertices()[1], P2::new(0.5, 0.5));

        let mut poly = Shape::polygon(
            vec![P2::new(0., 0.), P2::new(1., 0.), P2::new(0., 1.)],
            DEFAULT_COLOR,
        );
        poly.set_vertex(2, P2::new(-1., -1.));
        assert_eq!(poly.vertices()[2], P2::new(-1., -1.));
        // out of range leaves the shape alone
        poly.set_vertex(9, P2::new(9., 9.));
        assert_eq!(poly.vertices().len(), 3);
    }

    #[test]
    fn set_vertex_ignores_squares() {
        let mut square = Shape::square(P2::new(0., 0.), 50., DEFAULT_COLOR);
        square.set_vertex(0, P2::new(1., 1.));
        assert!(square.vertices().is_empty());
    }

    #[test]
    #[should_panic]
    fn polygon_rejects_two_points() {
        Shape::polygon(vec![P2::new(0., 0.), P2::new(1., 0.)], DEFAULT_COLOR);
    }

    #[test]
    fn hex_colors_parse() {
        assert_eq!(color_from_hex("#ff0000"), Some([1., 0., 0., 1.]));
        assert_eq!(color_from_hex("#f00"), Some([1., 0., 0., 1.]));
        let teal = color_from_hex("#008080").unwrap();
        assert!((teal[1] - 128. / 255.).abs() < 1e-6);
        assert_eq!(color_from_hex("ff0000"), None);
        assert_eq!(color_from_hex("#ff00"), None);
        assert_eq!(color_from_hex("#gggggg"), None);
    }
}
