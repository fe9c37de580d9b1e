use glam::{Vec2, Vec3};

use crate::resources::geometry::Geometry;

/// Triangle in the z = 0 plane, counter-clockwise from `p1`.
///
/// Texture coordinates lay the first edge along `s` and place the third
/// vertex by the law of cosines, so the texture is not distorted.
#[derive(Debug, Clone)]
pub struct Triangle {
    pub p1: Vec2,
    pub p2: Vec2,
    pub p3: Vec2,
    pub geometry: Geometry,
    // side lengths |p1p2|, |p2p3|, |p3p1| and the angle at p1
    a: f32,
    c: f32,
    alpha_cos: f32,
    alpha_sin: f32,
}

impl Triangle {
    #[must_use]
    pub fn new(p1: Vec2, p2: Vec2, p3: Vec2) -> Self {
        let a = p1.distance(p2);
        let b = p2.distance(p3);
        let c = p3.distance(p1);

        let alpha_cos = if a > 0.0 && c > 0.0 {
            ((a * a - b * b + c * c) / (2.0 * a * c)).clamp(-1.0, 1.0)
        } else {
            1.0
        };
        let alpha_sin = (1.0 - alpha_cos * alpha_cos).max(0.0).sqrt();

        let mut geometry = Geometry::with_capacity(3, 3);
        for p in [p1, p2, p3] {
            geometry.push_vertex(p.extend(0.0), Vec3::Z, Vec2::ZERO);
        }
        geometry.push_triangle(0, 1, 2);

        let mut tri = Self {
            p1,
            p2,
            p3,
            geometry,
            a,
            c,
            alpha_cos,
            alpha_sin,
        };
        tri.update_tex_coords(1.0, 1.0);
        tri
    }

    pub fn update_tex_coords(&mut self, afs: f32, aft: f32) {
        self.geometry.set_tex_coords(&[
            Vec2::new(0.0, 1.0),
            Vec2::new(self.a / afs, 1.0),
            Vec2::new(
                self.c * self.alpha_cos / afs,
                1.0 - self.c * self.alpha_sin / aft,
            ),
        ]);
    }
}
