//! RON encoding of scene snapshots. The core only moves strings; picking
//! file paths and touching the disk stays in the embedding shell.

use super::error::Error;
use super::scene::Scene;
use super::shape::Shape;
use ron::ser::PrettyConfig;

pub fn scene_to_ron(scene: &Scene) -> Result<String, Error> {
    ron::ser::to_string_pretty(&scene.export(), PrettyConfig::new()).map_err(|e| {
        Error::Serialize {
            reason: e.to_string(),
        }
    })
}

pub fn scene_from_ron(text: &str) -> Result<Scene, Error> {
    let shapes: Vec<Shape> = ron::de::from_str(text).map_err(|e| Error::Deserialize {
        reason: e.to_string(),
    })?;
    Scene::import(shapes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sketchpad::math::{multiply, scaling, P2, IDENTITY};
    use crate::sketchpad::shape::DEFAULT_COLOR;

    fn sample_scene() -> Scene {
        let mut scene = Scene::new();
        scene.add(Shape::point(P2::new(0.1, -0.1), [0., 0., 1., 1.]));
        scene.add(Shape::line(P2::new(-0.5, 0.), P2::new(0.5, 0.), DEFAULT_COLOR));
        scene.add(Shape::square(P2::new(0.2, 0.2), 40., [0., 1., 0., 1.]));
        scene.add(Shape::rectangle(
            P2::new(-0.3, -0.3),
            P2::new(0.3, 0.1),
            DEFAULT_COLOR,
        ));
        let mut poly = Shape::polygon(
            vec![P2::new(0., 0.), P2::new(0.4, 0.), P2::new(0.2, 0.3)],
            [1., 1., 0., 1.],
        );
        poly.set_transform(multiply(&IDENTITY, &scaling(2., 3.)));
        scene.add(poly);
        scene
    }

    #[test]
    fn round_trip_reproduces_the_scene() {
        let scene = sample_scene();
        let text = scene_to_ron(&scene).unwrap();
        let restored = scene_from_ron(&text).unwrap();
        assert_eq!(restored.len(), scene.len());
        for (a, b) in scene.iter().zip(restored.iter()) {
            assert_eq!(a.kind(), b.kind());
            assert_eq!(a, b);
        }
    }

    #[test]
    fn decoding_garbage_reports_an_error() {
        assert!(scene_from_ron("not a scene").is_err());
    }

    #[test]
    fn decoding_a_degenerate_polygon_reports_invalid_arity() {
        let snapshot = vec![Shape::Polygon {
            points: vec![P2::new(0., 0.), P2::new(1., 0.)],
            color: DEFAULT_COLOR,
            transform: IDENTITY,
        }];
        let text = ron::ser::to_string_pretty(&snapshot, PrettyConfig::new()).unwrap();
        let err = scene_from_ron(&text).unwrap_err();
        assert!(matches!(err, Error::InvalidArity { .. }));
    }
}
