use glam::{Vec2, Vec3};

use crate::resources::geometry::Geometry;

/// Axis-aligned quad spanning `(x1, y1)`–`(x2, y2)` in the z = 0 plane.
#[derive(Debug, Clone)]
pub struct Rectangle {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub geometry: Geometry,
}

impl Rectangle {
    #[must_use]
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        let mut geometry = Geometry::with_capacity(4, 6);
        let corners = [
            (Vec3::new(x1, y1, 0.0), Vec2::new(0.0, 1.0)),
            (Vec3::new(x2, y1, 0.0), Vec2::new(1.0, 1.0)),
            (Vec3::new(x1, y2, 0.0), Vec2::new(0.0, 0.0)),
            (Vec3::new(x2, y2, 0.0), Vec2::new(1.0, 0.0)),
        ];
        for (position, uv) in corners {
            geometry.push_vertex(position, Vec3::Z, uv);
        }
        geometry.push_triangle(0, 1, 2);
        geometry.push_triangle(2, 1, 3);

        Self {
            x1,
            y1,
            x2,
            y2,
            geometry,
        }
    }

    #[must_use]
    pub fn width(&self) -> f32 {
        self.x2 - self.x1
    }

    #[must_use]
    pub fn height(&self) -> f32 {
        self.y2 - self.y1
    }

    /// Tiles the texture once every `afs` × `aft` scene units.
    pub fn update_tex_coords(&mut self, afs: f32, aft: f32) {
        let s = self.width() / afs;
        let t = 1.0 - self.height() / aft;
        self.geometry.set_tex_coords(&[
            Vec2::new(0.0, 1.0),
            Vec2::new(s, 1.0),
            Vec2::new(0.0, t),
            Vec2::new(s, t),
        ]);
    }
}
