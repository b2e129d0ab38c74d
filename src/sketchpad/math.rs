extern crate nalgebra as na;

use na::Point2;

pub use na::distance;

pub type Float = f64;
pub type P2 = Point2<Float>;

/// row-major 3x3 affine matrix, applied to shape-local coordinates by the backend
pub type Transform = [f32; 9];

pub const IDENTITY: Transform = [1., 0., 0., 0., 1., 0., 0., 0., 1.];

pub fn identity() -> Transform {
    IDENTITY
}

/// row-by-column product, `out[i][j] = sum_k a[i][k] * b[k][j]`
pub fn multiply(a: &Transform, b: &Transform) -> Transform {
    let mut out = [0.0f32; 9];
    for i in 0..3 {
        for j in 0..3 {
            let mut acc = 0.0;
            for k in 0..3 {
                acc += a[i * 3 + k] * b[k * 3 + j];
            }
            out[i * 3 + j] = acc;
        }
    }
    out
}

pub fn scaling(sx: f32, sy: f32) -> Transform {
    [sx, 0., 0., 0., sy, 0., 0., 0., 1.]
}

/// canvas placement and size in device pixels, as reported by the input shell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasRect {
    pub left: Float,
    pub top: Float,
    pub width: Float,
    pub height: Float,
}

impl CanvasRect {
    pub fn new(left: Float, top: Float, width: Float, height: Float) -> Self {
        CanvasRect {
            left,
            top,
            width,
            height,
        }
    }

    pub fn contains_device(&self, x: Float, y: Float) -> bool {
        x >= self.left && x <= self.left + self.width && y >= self.top && y <= self.top + self.height
    }
}

impl Default for CanvasRect {
    fn default() -> Self {
        CanvasRect::new(0., 0., 800., 600.)
    }
}

/// map device coordinates into clip space; device y grows downward, clip y upward
pub fn screen_to_clip(device_x: Float, device_y: Float, canvas: &CanvasRect) -> P2 {
    P2::new(
        2. * (device_x - canvas.left) / canvas.width - 1.,
        -2. * (device_y - canvas.top) / canvas.height + 1.,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiply_identity_laws() {
        let m: Transform = [2., 3., 5., 7., 11., 13., 17., 19., 23.];
        assert_eq!(multiply(&IDENTITY, &m), m);
        assert_eq!(multiply(&m, &IDENTITY), m);
    }

    #[test]
    fn multiply_composes_scales() {
        let s = multiply(&scaling(2., 3.), &scaling(4., 5.));
        assert_eq!(s, scaling(8., 15.));
    }

    #[test]
    fn screen_to_clip_maps_corners() {
        let canvas = CanvasRect::new(10., 20., 800., 600.);
        let tl = screen_to_clip(10., 20., &canvas);
        let br = screen_to_clip(810., 620., &canvas);
        let center = screen_to_clip(410., 320., &canvas);
        assert_eq!(tl, P2::new(-1., 1.));
        assert_eq!(br, P2::new(1., -1.));
        assert_eq!(center, P2::new(0., 0.));
    }

    #[test]
    fn screen_to_clip_stays_in_bounds_and_is_monotonic() {
        let canvas = CanvasRect::default();
        let mut last_x = -2.;
        for px in 0..=16 {
            let p = screen_to_clip(px as Float * 50., 300., &canvas);
            assert!(p.x >= -1. && p.x <= 1.);
            assert!(p.x > last_x);
            last_x = p.x;
        }
        let mut last_y = 2.;
        for py in 0..=12 {
            let p = screen_to_clip(400., py as Float * 50., &canvas);
            assert!(p.y >= -1. && p.y <= 1.);
            assert!(p.y < last_y);
            last_y = p.y;
        }
    }

    #[test]
    fn canvas_rect_contains_device() {
        let canvas = CanvasRect::default();
        assert!(canvas.contains_device(0., 0.));
        assert!(canvas.contains_device(800., 600.));
        assert!(!canvas.contains_device(801., 300.));
        assert!(!canvas.contains_device(300., -1.));
    }
}
