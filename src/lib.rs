//! An interactive 2d vector drawing surface. Clicked points accumulate into
//! typed shapes, the whole scene is redrawn every frame, and pointer gestures
//! move vertices, rescale squares or recolor polygons. Rasterization goes
//! through the [`renderer::GraphicsBackend`] trait; windowing, buttons and
//! file dialogs belong to the embedding shell.

pub mod renderer;
pub mod sketchpad;

pub use renderer::{GraphicsBackend, GpuVertex, Primitive, Renderer};
pub use sketchpad::math::CanvasRect;
pub use sketchpad::{Color, DrawingSession, Error, Mode, Scene, Shape, ShapeKind, Sketchpad};
