use hit_test::VertexHit;
use math::{distance, CanvasRect, Float, P2};
pub use shape::{Color, Shape, ShapeKind};

pub mod error;
pub mod math;
pub mod persistence;
pub mod scene;
pub mod shape;

pub use error::Error;
pub use scene::Scene;

/// the maximum distance from a vertex at which a drag can latch onto it, and
/// the pointer travel that turns a press into a drag
const DRAG_RADIUS: Float = 0.05;

/// the surface core: routes a pointer event through the current mode to the
/// scene, the hit tester and the shape mutators
pub struct Sketchpad {
    pub scene: Scene,
    pub mode: Mode,
    /// shell-selected parameters, plain values only
    pub selected_color: Color,
    pub square_size: Float,
    pub scale_x: f32,
    pub scale_y: f32,
    canvas_rect: CanvasRect,
    mouse_pos: P2,
    mouse_is_down: bool,
    initial_mouse_down: P2,
    drag_event: Option<DragEvent>,
    latch: Option<VertexHit>,
}

impl Sketchpad {
    pub fn new(canvas_rect: CanvasRect) -> Sketchpad {
        Sketchpad {
            scene: Scene::new(),
            mode: Mode::Selecting,
            selected_color: shape::DEFAULT_COLOR,
            square_size: 50.,
            scale_x: 1.,
            scale_y: 1.,
            canvas_rect,
            mouse_pos: P2::new(0., 0.),
            mouse_is_down: false,
            initial_mouse_down: P2::new(0., 0.),
            drag_event: None,
            latch: None,
        }
    }

    pub fn canvas_rect(&self) -> CanvasRect {
        self.canvas_rect
    }

    pub fn resize(&mut self, canvas_rect: CanvasRect) {
        self.canvas_rect = canvas_rect;
    }

    /// enter drawing mode with a fresh session for the given tool
    pub fn start_drawing(&mut self, kind: ShapeKind, max_vertices: usize) {
        self.mode = Mode::Drawing(DrawingSession::new(kind, max_vertices));
        log::info!("drawing tool selected: {:?}", kind);
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub fn pointer_pressed(&mut self, device_x: Float, device_y: Float) {
        self.mouse_is_down = true;
        self.update_mouse(device_x, device_y);
        self.initial_mouse_down = self.mouse_pos;
        if let Mode::Moving = self.mode {
            self.latch =
                hit_test::nearest_vertex_within_threshold(&self.mouse_pos, &self.scene, DRAG_RADIUS);
            if let Some(hit) = self.latch {
                log::debug!("latched shape {} vertex {}", hit.shape, hit.vertex);
            }
        }
    }

    pub fn pointer_moved(&mut self, device_x: Float, device_y: Float) {
        self.update_mouse(device_x, device_y);
        if !self.mouse_is_down {
            return;
        }
        if let Some(drag_event) = self.drag_event.as_mut() {
            drag_event.end = self.mouse_pos;
        } else if distance(&self.mouse_pos, &self.initial_mouse_down) > DRAG_RADIUS {
            self.drag_event = Some(DragEvent {
                start: self.initial_mouse_down,
                end: self.mouse_pos,
            });
        }
        self.pointer_dragged();
    }

    pub fn pointer_released(&mut self, device_x: Float, device_y: Float) {
        self.mouse_is_down = false;
        self.update_mouse(device_x, device_y);
        if self.drag_event.is_some() {
            self.pointer_dragged();
        } else {
            self.pointer_clicked();
        }
        self.drag_event = None;
        self.latch = None;
    }

    fn update_mouse(&mut self, device_x: Float, device_y: Float) {
        self.mouse_pos = math::screen_to_clip(device_x, device_y, &self.canvas_rect);
    }

    fn pointer_clicked(&mut self) {
        let p = self.mouse_pos;
        // clicks outside the canvas are ignored
        if p.x.abs() > 1. || p.y.abs() > 1. {
            return;
        }
        match self.mode {
            Mode::Selecting | Mode::Moving => {}

            Mode::Drawing(ref mut session) => {
                session.points.push(p);
                // transient marker so the accumulating outline stays visible
                self.scene.add(Shape::point(p, self.selected_color));
                if session.points.len() >= session.required_points() {
                    let shape = session.take_shape(self.selected_color, self.square_size);
                    self.scene.remove_where(|s| s.kind() == ShapeKind::Point);
                    log::info!("finished a {:?}", shape.kind());
                    self.scene.add(shape);
                }
            }

            Mode::Transforming => {
                let canvas = self.canvas_rect;
                let hit = hit_test::find_first(&self.scene, |s| {
                    hit_test::square_extent_contains(s, &p, &canvas)
                });
                if let Some(ix) = hit {
                    let scale = math::scaling(self.scale_x, self.scale_y);
                    if let Some(square) = self.scene.get_mut(ix) {
                        square.set_transform(math::multiply(square.transform(), &scale));
                        log::debug!("rescaled shape {}", ix);
                    }
                }
            }

            Mode::Coloring => {
                let hit = hit_test::find_first(&self.scene, |s| hit_test::polygon_contains(s, &p));
                if let Some(ix) = hit {
                    let color = self.selected_color;
                    if let Some(polygon) = self.scene.get_mut(ix) {
                        polygon.set_color(color);
                        log::debug!("recolored shape {}", ix);
                    }
                }
            }
        }
    }

    fn pointer_dragged(&mut self) {
        let Some(drag_event) = self.drag_event else {
            return;
        };
        if !matches!(self.mode, Mode::Moving) {
            return;
        }
        let Some(hit) = self.latch else {
            return;
        };
        let updated = match self.scene.get(hit.shape) {
            Some(shape) => {
                let mut shape = shape.clone();
                shape.set_vertex(hit.vertex, drag_event.end);
                shape
            }
            None => {
                // scene shrank under the drag, abort with no mutation
                log::warn!("drag target {} vanished, aborting", hit.shape);
                self.latch = None;
                return;
            }
        };
        if let Err(err) = self.scene.replace_at(hit.shape, updated) {
            log::warn!("drag aborted: {}", err);
            self.latch = None;
        }
    }

    pub fn export_scene(&self) -> Vec<Shape> {
        self.scene.export()
    }

    /// replace the scene wholesale, dropping any in-flight gesture state
    pub fn import_scene(&mut self, shapes: Vec<Shape>) -> Result<(), Error> {
        self.scene = Scene::import(shapes)?;
        self.abort_gestures();
        Ok(())
    }

    /// full reset
    pub fn clear(&mut self) {
        self.scene.clear();
        self.abort_gestures();
    }

    fn abort_gestures(&mut self) {
        self.drag_event = None;
        self.latch = None;
        if let Mode::Drawing(ref mut session) = self.mode {
            session.points.clear();
        }
    }
}

impl Default for Sketchpad {
    fn default() -> Self {
        Sketchpad::new(CanvasRect::default())
    }
}

#[derive(PartialEq, Debug, Clone)]
pub enum Mode {
    Selecting,
    Drawing(DrawingSession),
    Moving,
    Transforming,
    Coloring,
}

/// points accumulating toward the next shape; switching tools drops the
/// whole session
#[derive(PartialEq, Debug, Clone)]
pub struct DrawingSession {
    pub kind: ShapeKind,
    pub max_vertices: usize,
    pub points: Vec<P2>,
}

impl DrawingSession {
    pub fn new(kind: ShapeKind, max_vertices: usize) -> DrawingSession {
        if kind == ShapeKind::Polygon {
            assert!(max_vertices >= 3, "a polygon needs at least 3 points");
        }
        DrawingSession {
            kind,
            max_vertices,
            points: Vec::new(),
        }
    }

    pub fn required_points(&self) -> usize {
        match self.kind {
            ShapeKind::Point | ShapeKind::Square => 1,
            ShapeKind::Line | ShapeKind::Rectangle => 2,
            ShapeKind::Polygon => self.max_vertices,
        }
    }

    /// build the finished shape and reset the buffer for the next one
    fn take_shape(&mut self, color: Color, square_size: Float) -> Shape {
        let points = std::mem::take(&mut self.points);
        match self.kind {
            ShapeKind::Point => Shape::point(points[0], color),
            ShapeKind::Line => Shape::line(points[0], points[1], color),
            ShapeKind::Square => Shape::square(points[0], square_size, color),
            ShapeKind::Rectangle => Shape::rectangle(points[0], points[1], color),
            ShapeKind::Polygon => Shape::polygon(points, color),
        }
    }
}

#[derive(PartialEq, Debug, Clone, Copy)]
pub struct DragEvent {
    pub start: P2,
    pub end: P2,
}
